use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{ScrollFxError, ScrollFxResult};

/// A named position along one box's vertical extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    /// Top edge (`0`).
    Start,
    /// Vertical middle (`0.5`).
    Center,
    /// Bottom edge (`1`).
    End,
    /// Fraction of the extent, `0.0` at the top.
    Fraction(f64),
    /// Fixed distance from the top in pixels.
    Px(f64),
}

impl Edge {
    /// Distance from the top of a box of height `extent`.
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => extent * 0.5,
            Self::End => extent,
            Self::Fraction(f) => extent * f,
            Self::Px(px) => px,
        }
    }
}

impl FromStr for Edge {
    type Err = ScrollFxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ScrollFxError::validation(format!("invalid scroll edge \"{s}\""));
        match s {
            "start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "end" => Ok(Self::End),
            _ => {
                let (num, kind) = if let Some(n) = s.strip_suffix("px") {
                    (n, 'p')
                } else if let Some(n) = s.strip_suffix('%') {
                    (n, '%')
                } else {
                    (s, 'f')
                };
                let v: f64 = num.trim().parse().map_err(|_| invalid())?;
                if !v.is_finite() {
                    return Err(invalid());
                }
                Ok(match kind {
                    'p' => Self::Px(v),
                    '%' => Self::Fraction(v / 100.0),
                    _ => Self::Fraction(v),
                })
            }
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Center => f.write_str("center"),
            Self::End => f.write_str("end"),
            Self::Fraction(v) => write!(f, "{v}"),
            Self::Px(v) => write!(f, "{v}px"),
        }
    }
}

/// Pairing of a target edge with a container (viewport) edge.
///
/// `"start end"` reads as "the target's start meets the viewport's end".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollOffset {
    /// Edge on the tracked element.
    pub target: Edge,
    /// Edge on the viewport.
    pub container: Edge,
}

impl ScrollOffset {
    /// Pair two edges.
    pub fn new(target: Edge, container: Edge) -> Self {
        Self { target, container }
    }

    /// Document scroll offset at which this pairing holds.
    pub fn scroll_y(self, target_top: f64, target_height: f64, viewport_height: f64) -> f64 {
        target_top + self.target.resolve(target_height) - self.container.resolve(viewport_height)
    }
}

impl FromStr for ScrollOffset {
    type Err = ScrollFxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let target: Edge = parts
            .next()
            .ok_or_else(|| ScrollFxError::validation("empty scroll offset"))?
            .parse()?;
        let container = match parts.next() {
            Some(p) => p.parse()?,
            None => target,
        };
        if parts.next().is_some() {
            return Err(ScrollFxError::validation(format!(
                "scroll offset \"{s}\" has more than two edges"
            )));
        }
        Ok(Self { target, container })
    }
}

impl fmt::Display for ScrollOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.target, self.container)
    }
}

/// Entry and exit pairings that bound a tracked traversal.
///
/// Progress is `0` at `enter` and `1` at `exit`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollWindow {
    /// Pairing that maps to progress `0`.
    pub enter: ScrollOffset,
    /// Pairing that maps to progress `1`.
    pub exit: ScrollOffset,
}

impl ScrollWindow {
    /// Build a window from two offset strings such as `"start end"`, `"end start"`.
    pub fn parse(enter: &str, exit: &str) -> ScrollFxResult<Self> {
        Ok(Self {
            enter: enter.parse()?,
            exit: exit.parse()?,
        })
    }
}

impl Default for ScrollWindow {
    /// From "target top meets viewport bottom" to "target bottom meets viewport top".
    fn default() -> Self {
        Self {
            enter: ScrollOffset::new(Edge::Start, Edge::End),
            exit: ScrollOffset::new(Edge::End, Edge::Start),
        }
    }
}

impl Serialize for ScrollWindow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        [self.enter.to_string(), self.exit.to_string()].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ScrollWindow {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let [enter, exit] = <[String; 2]>::deserialize(deserializer)?;
        Self::parse(&enter, &exit).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/offset.rs"]
mod tests;
