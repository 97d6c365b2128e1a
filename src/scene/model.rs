use serde::{Deserialize, Serialize};

use crate::{
    animation::value::Rgba,
    components::columns::DEFAULT_COLUMN_COUNT,
    components::fade::FadeConfig,
    components::floating_icons::{FloatingIconDef, IconKind},
    components::parallax::DEFAULT_DESKTOP_MIN_WIDTH,
    components::reveal_stack::{LayeredCard, RevealStackConfig},
    counter::animator::CounterConfig,
    foundation::core::{Rect, Vec2},
    foundation::error::ScrollFxResult,
    scroll::gate::DEFAULT_NEAR_TOP_THRESHOLD,
    scroll::offset::{Edge, ScrollOffset, ScrollWindow},
    scroll::visibility::InViewOptions,
};

/// Initial viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ViewportDef {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// A 2D vector, written as `[x, y]` or `{ "x": .., "y": .. }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vec2Def {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl<'de> Deserialize<'de> for Vec2Def {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Arr([f64; 2]),
            Obj { x: f64, y: f64 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Arr([x, y]) => Ok(Self { x, y }),
            Repr::Obj { x, y } => Ok(Self { x, y }),
        }
    }
}

impl From<Vec2Def> for Vec2 {
    fn from(v: Vec2Def) -> Self {
        Vec2::new(v.x, v.y)
    }
}

/// Element geometry in document coordinates.
///
/// `width` defaults to the viewport width, so full-bleed sections only give `top` and
/// `height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectDef {
    /// Document y of the top edge.
    pub top: f64,
    /// Height in pixels.
    pub height: f64,
    /// Document x of the left edge.
    #[serde(default)]
    pub left: f64,
    /// Width in pixels; the viewport width when absent.
    #[serde(default)]
    pub width: Option<f64>,
}

impl RectDef {
    /// Resolve to a document rect for the given viewport width.
    pub fn to_rect(self, viewport_width: f64) -> Rect {
        let width = self.width.unwrap_or(viewport_width);
        Rect::new(self.left, self.top, self.left + width, self.top + self.height)
    }
}

/// Root of a scene document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDef {
    /// Viewport at load time.
    pub viewport: ViewportDef,
    /// Narrowest viewport width at which parallax moves.
    #[serde(default = "default_desktop_min_width")]
    pub desktop_min_width: f64,
    /// Scroll offset below which section gates re-arm.
    #[serde(default = "default_near_top_threshold")]
    pub near_top_threshold: f64,
    /// Visibility rule for counters and fades.
    #[serde(default)]
    pub in_view: InViewOptions,
    /// Page sections in document order.
    #[serde(default)]
    pub sections: Vec<SectionDef>,
}

fn default_desktop_min_width() -> f64 {
    DEFAULT_DESKTOP_MIN_WIDTH
}

fn default_near_top_threshold() -> f64 {
    DEFAULT_NEAR_TOP_THRESHOLD
}

impl SceneDef {
    /// Parse a scene document from JSON text.
    pub fn from_json_str(s: &str) -> ScrollFxResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

/// A page section: owns one animate gate shared by its counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDef {
    /// Unique section id, also the host layout key.
    pub id: String,
    /// Section geometry; also the default geometry of its components.
    pub rect: RectDef,
    /// Components placed in the section.
    #[serde(default)]
    pub components: Vec<ComponentDef>,
}

/// One component, keyed by kind: `{ "counter": { .. } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentDef {
    /// Counting label.
    Counter(CounterDef),
    /// Layered card stack.
    RevealStack(RevealStackDef),
    /// Parallax block.
    Parallax(ParallaxDef),
    /// Floating icon formation.
    FloatingIcons(FloatingIconsDef),
    /// Progressive columns.
    Columns(ColumnsDef),
    /// In-view fade.
    Fade(FadeDef),
}

impl ComponentDef {
    /// Component id, unique across the scene.
    pub fn id(&self) -> &str {
        match self {
            Self::Counter(d) => &d.id,
            Self::RevealStack(d) => &d.id,
            Self::Parallax(d) => &d.id,
            Self::FloatingIcons(d) => &d.id,
            Self::Columns(d) => &d.id,
            Self::Fade(d) => &d.id,
        }
    }

    /// Own rect, if the component is placed separately from its section.
    pub fn rect(&self) -> Option<RectDef> {
        match self {
            Self::Counter(d) => d.rect,
            Self::RevealStack(d) => d.rect,
            Self::Parallax(d) => d.rect,
            Self::FloatingIcons(d) => d.rect,
            Self::Columns(d) => d.rect,
            Self::Fade(d) => d.rect,
        }
    }
}

/// Counter definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterDef {
    /// Component id.
    pub id: String,
    /// Final label text, e.g. `"£33m"`.
    pub label: String,
    /// Own geometry, defaults to the section rect.
    #[serde(default)]
    pub rect: Option<RectDef>,
    /// Count-up timing.
    #[serde(default)]
    pub config: CounterConfig,
}

/// Reveal stack definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealStackDef {
    /// Component id.
    pub id: String,
    /// Cards from top to bottom.
    pub cards: Vec<LayeredCard>,
    /// Own geometry, defaults to the section rect.
    #[serde(default)]
    pub rect: Option<RectDef>,
    /// Window driving layer exits.
    #[serde(default)]
    pub window: ScrollWindow,
    /// Window driving the overlay while the stack enters view.
    #[serde(default = "default_entry_window")]
    pub entry_window: ScrollWindow,
    /// Exit travel and partition.
    #[serde(default)]
    pub config: RevealStackConfig,
}

fn default_entry_window() -> ScrollWindow {
    ScrollWindow {
        enter: ScrollOffset::new(Edge::Start, Edge::End),
        exit: ScrollOffset::new(Edge::Start, Edge::Start),
    }
}

/// Parallax block definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParallaxDef {
    /// Component id.
    pub id: String,
    /// Travel in pixels per item.
    #[serde(default = "default_amplitudes")]
    pub amplitudes: Vec<f64>,
    /// Own geometry, defaults to the section rect.
    #[serde(default)]
    pub rect: Option<RectDef>,
    /// Tracked scroll window.
    #[serde(default)]
    pub window: ScrollWindow,
}

fn default_amplitudes() -> Vec<f64> {
    vec![200.0, 300.0, 150.0, 250.0, 100.0, 280.0]
}

/// Floating icons definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatingIconsDef {
    /// Component id.
    pub id: String,
    /// Landing page formation when absent.
    #[serde(default)]
    pub icons: Option<Vec<IconDef>>,
    /// Own geometry, defaults to the section rect.
    #[serde(default)]
    pub rect: Option<RectDef>,
    /// Tracked scroll window.
    #[serde(default)]
    pub window: ScrollWindow,
}

/// One icon of a formation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconDef {
    /// Shape.
    pub kind: IconKind,
    /// Fill colour.
    pub color: Rgba,
    /// Resting position relative to the formation centre.
    pub position: Vec2Def,
}

impl From<&IconDef> for FloatingIconDef {
    fn from(d: &IconDef) -> Self {
        FloatingIconDef {
            kind: d.kind,
            color: d.color,
            position: d.position.into(),
        }
    }
}

/// Progressive columns definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnsDef {
    /// Component id.
    pub id: String,
    /// Number of columns, at least one.
    #[serde(default = "default_column_count")]
    pub count: usize,
    /// Own geometry, defaults to the section rect.
    #[serde(default)]
    pub rect: Option<RectDef>,
    /// Tracked scroll window.
    #[serde(default)]
    pub window: ScrollWindow,
}

fn default_column_count() -> usize {
    DEFAULT_COLUMN_COUNT
}

/// In-view fade definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FadeDef {
    /// Component id.
    pub id: String,
    /// Own geometry, defaults to the section rect.
    #[serde(default)]
    pub rect: Option<RectDef>,
    /// Timing and travel.
    #[serde(default)]
    pub config: FadeConfig,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
