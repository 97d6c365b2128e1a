use serde::{Deserialize, Serialize};

use crate::{
    animation::table::InterpolationTable,
    animation::value::Rgba,
    foundation::core::{ScrollProgress, Vec2},
    foundation::error::{ScrollFxError, ScrollFxResult},
};

/// Decorative glyph drawn by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    /// Five-point star.
    Star,
    /// Heart.
    Heart,
    /// Filled circle.
    Circle,
    /// Upward triangle.
    Triangle,
    /// Diamond.
    Diamond,
}

/// Configuration for one floating icon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloatingIconDef {
    /// Glyph.
    pub kind: IconKind,
    /// Fill color.
    pub color: Rgba,
    /// Resting position relative to the container center, reached at progress `1`.
    pub position: Vec2,
}

/// Sampled style of one icon.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IconFrame {
    /// Glyph.
    pub kind: IconKind,
    /// Fill color.
    pub color: Rgba,
    /// Translation in pixels.
    pub translate: Vec2,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Rotation in degrees.
    pub rotate_deg: f64,
}

/// Output of [`FloatingIcons::frame`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FloatingIconsFrame {
    /// One entry per icon, in configuration order.
    pub icons: Vec<IconFrame>,
    /// Opacity of the centered caption.
    pub caption_opacity: f64,
}

/// Deterministic scatter position for icon `index`, in `[-200, 200)` on both axes.
pub fn start_position(index: usize) -> Vec2 {
    const MUL: u64 = 9301;
    const ADD: u64 = 49297;
    const MOD: u64 = 233_280;

    let seed = index as u64 * 123;
    let base = seed.wrapping_mul(MUL).wrapping_add(ADD);
    let x = (base % MOD) as f64 / MOD as f64 * 400.0 - 200.0;
    let y = ((base + 1000) % MOD) as f64 / MOD as f64 * 400.0 - 200.0;
    Vec2::new(x, y)
}

#[derive(Clone, Debug)]
struct IconTrack {
    kind: IconKind,
    color: Rgba,
    translate: InterpolationTable<Vec2>,
}

/// Icons that fly from scattered start positions into a formation while fading,
/// scaling up and unwinding one full turn.
#[derive(Clone, Debug)]
pub struct FloatingIcons {
    icons: Vec<IconTrack>,
    opacity: InterpolationTable<f64>,
    scale: InterpolationTable<f64>,
    rotate: InterpolationTable<f64>,
    caption: InterpolationTable<f64>,
}

impl FloatingIcons {
    /// Build tracks for `defs`; icon `i` starts at [`start_position`]`(i)`.
    pub fn new(defs: &[FloatingIconDef]) -> ScrollFxResult<Self> {
        let icons = defs
            .iter()
            .enumerate()
            .map(|(i, def)| {
                if !def.position.is_finite() {
                    return Err(ScrollFxError::validation(format!(
                        "floating icon {i} has a non-finite position"
                    )));
                }
                Ok(IconTrack {
                    kind: def.kind,
                    color: def.color,
                    translate: InterpolationTable::span(start_position(i), def.position)?,
                })
            })
            .collect::<ScrollFxResult<Vec<_>>>()?;

        Ok(Self {
            icons,
            opacity: InterpolationTable::from_pairs([
                (0.0, 0.0),
                (0.2, 0.5),
                (0.8, 1.0),
                (1.0, 1.0),
            ])?,
            scale: InterpolationTable::from_pairs([(0.0, 0.3), (0.5, 0.7), (1.0, 1.0)])?,
            rotate: InterpolationTable::span(360.0, 0.0)?,
            caption: InterpolationTable::from_pairs([
                (0.0, 0.0),
                (0.3, 0.0),
                (0.7, 1.0),
                (1.0, 1.0),
            ])?,
        })
    }

    /// The eight-icon formation of the landing page.
    pub fn showcase() -> ScrollFxResult<Self> {
        Self::new(&showcase_defs()?)
    }

    /// Number of icons.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// `true` when there are no icons.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Sample every icon at `progress`.
    pub fn frame(&self, progress: ScrollProgress) -> FloatingIconsFrame {
        let opacity = self.opacity.map(progress);
        let scale = self.scale.map(progress);
        let rotate_deg = self.rotate.map(progress);
        FloatingIconsFrame {
            icons: self
                .icons
                .iter()
                .map(|icon| IconFrame {
                    kind: icon.kind,
                    color: icon.color,
                    translate: icon.translate.map(progress),
                    opacity,
                    scale,
                    rotate_deg,
                })
                .collect(),
            caption_opacity: self.caption.map(progress),
        }
    }
}

/// Icon definitions of the landing page formation.
pub fn showcase_defs() -> ScrollFxResult<Vec<FloatingIconDef>> {
    let raw: [(IconKind, &str, f64, f64); 8] = [
        (IconKind::Star, "#FFD700", -80.0, -60.0),
        (IconKind::Heart, "#FF6B6B", 80.0, -40.0),
        (IconKind::Circle, "#4ECDC4", -60.0, 40.0),
        (IconKind::Triangle, "#45B7D1", 60.0, 60.0),
        (IconKind::Diamond, "#96CEB4", 0.0, -80.0),
        (IconKind::Star, "#FFEAA7", -100.0, 0.0),
        (IconKind::Heart, "#FD79A8", 100.0, 20.0),
        (IconKind::Circle, "#6C5CE7", 0.0, 80.0),
    ];
    raw.into_iter()
        .map(|(kind, hex, x, y)| {
            Ok(FloatingIconDef {
                kind,
                color: Rgba::from_hex(hex)?,
                position: Vec2::new(x, y),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/components/floating_icons.rs"]
mod tests;
