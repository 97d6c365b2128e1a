use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::animation::lerp::Lerp;
use crate::foundation::error::ScrollFxError;

/// A CSS length in pixels or percent of the containing box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    /// Absolute CSS pixels.
    Px(f64),
    /// Percentage of the containing box (`100.0` is the full extent).
    Percent(f64),
}

impl Length {
    /// Numeric part regardless of unit.
    pub fn value(self) -> f64 {
        match self {
            Self::Px(v) | Self::Percent(v) => v,
        }
    }

    /// Resolve against a containing extent in pixels.
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Percent(v) => extent * v / 100.0,
        }
    }
}

impl Lerp for Length {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (*a, *b) {
            (Self::Percent(x), Self::Percent(y)) => Self::Percent(x + (y - x) * t),
            (Self::Px(x), Self::Px(y)) => Self::Px(x + (y - x) * t),
            // Tables reject mixed units; hold the start value if one slips through.
            (a, _) => a,
        }
    }

    fn is_compatible(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Px(_), Self::Px(_)) | (Self::Percent(_), Self::Percent(_))
        )
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{}px", trim_float(*v)),
            Self::Percent(v) => write!(f, "{}%", trim_float(*v)),
        }
    }
}

impl FromStr for Length {
    type Err = ScrollFxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (num, pct) = if let Some(n) = s.strip_suffix('%') {
            (n, true)
        } else if let Some(n) = s.strip_suffix("px") {
            (n, false)
        } else {
            (s, false)
        };
        let v: f64 = num
            .trim()
            .parse()
            .map_err(|_| ScrollFxError::validation(format!("invalid length \"{s}\"")))?;
        if !v.is_finite() {
            return Err(ScrollFxError::validation(format!("invalid length \"{s}\"")));
        }
        Ok(if pct { Self::Percent(v) } else { Self::Px(v) })
    }
}

impl Serialize for Length {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(f64),
            Str(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Num(v) => Ok(Self::Px(v)),
            Repr::Str(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Straight-alpha color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Rgba {
    /// Build a color from normalized channels.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (case-insensitive, `#` optional).
    pub fn from_hex(s: &str) -> Result<Self, ScrollFxError> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> Result<u8, ScrollFxError> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| ScrollFxError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        if !s.is_ascii() {
            return Err(ScrollFxError::validation(format!(
                "invalid hex color \"{s}\""
            )));
        }
        let (r, g, b, a) = match s.len() {
            6 => (
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
                255,
            ),
            8 => (
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
                hex_byte(&s[6..8])?,
            ),
            _ => {
                return Err(ScrollFxError::validation(
                    "hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)",
                ));
            }
        };

        Ok(Self::rgba(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        ))
    }

    /// Channels quantized to 8 bits.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }
}

impl Lerp for Rgba {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Obj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Self::from_hex(&s).map_err(serde::de::Error::custom),
            Repr::Obj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
        }
    }
}

fn trim_float(v: f64) -> String {
    // Four decimals is plenty for CSS; drop trailing zeros.
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/value.rs"]
mod tests;
