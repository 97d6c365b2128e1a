use std::collections::BTreeSet;

use crate::{
    components::columns::{ColumnsFrame, ProgressiveColumns},
    components::fade::{FadeFrame, InViewFade},
    components::floating_icons::{FloatingIconDef, FloatingIcons, FloatingIconsFrame},
    components::parallax::ParallaxBlock,
    components::reveal_stack::{RevealFrame, RevealStack},
    counter::animator::{CounterAnimator, CounterState},
    foundation::core::{Rect, Viewport},
    foundation::error::{ScrollFxError, ScrollFxResult},
    frame::scheduler::FrameScheduler,
    scene::model::{ComponentDef, RectDef, SceneDef},
    scroll::gate::{AnimateGate, GateState, GateTransition},
    scroll::host::LayoutHost,
    scroll::tracker::ViewportTracker,
    scroll::visibility::{InViewOptions, is_in_view},
};

/// Gate transition of one section, emitted during a scroll or resize pass.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneEvent {
    /// Section id.
    pub section: String,
    /// What the gate did.
    pub transition: GateTransition,
}

/// Everything a host needs to style one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneFrame {
    /// Scroll offset the frame was computed for.
    pub scroll_y: f64,
    /// Viewport at that offset.
    pub viewport: Viewport,
    /// Sections in document order.
    pub sections: Vec<SectionFrame>,
}

/// One section of a [`SceneFrame`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SectionFrame {
    /// Section id.
    pub id: String,
    /// Gate state after the last pass.
    pub gate: GateState,
    /// Components in declaration order.
    pub components: Vec<ComponentFrame>,
}

/// Style output of one component.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ComponentFrame {
    /// Component id.
    pub id: String,
    /// Tracked scroll progress, for scroll-linked components.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    /// Visibility under the scene's in-view options.
    pub in_view: bool,
    /// Component-specific values.
    pub output: ComponentOutput,
}

/// Per-kind output, serialized as `{ "<kind>": ... }`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentOutput {
    /// Counter text and value.
    Counter(CounterState),
    /// Layer offsets and overlay coverage.
    RevealStack(RevealFrame),
    /// Parallax block.
    Parallax {
        /// Vertical offset per item in pixels; all zero below the desktop breakpoint.
        offsets: Vec<f64>,
    },
    /// Icon transforms and caption opacity.
    FloatingIcons(FloatingIconsFrame),
    /// Column fills and text reveal.
    Columns(ColumnsFrame),
    /// Fade opacity and offset.
    Fade(FadeFrame),
}

#[derive(Debug)]
enum ComponentKind {
    Counter(CounterAnimator),
    RevealStack {
        stack: RevealStack,
        tracker: ViewportTracker,
        entry: ViewportTracker,
    },
    Parallax {
        block: ParallaxBlock,
        tracker: ViewportTracker,
    },
    FloatingIcons {
        icons: FloatingIcons,
        tracker: ViewportTracker,
    },
    Columns {
        columns: ProgressiveColumns,
        tracker: ViewportTracker,
    },
    Fade(InViewFade),
}

#[derive(Debug)]
struct Component {
    id: String,
    rect_def: Option<RectDef>,
    host_rect: Option<Rect>,
    rect: Rect,
    in_view: bool,
    kind: ComponentKind,
}

impl Component {
    fn progress(&self) -> Option<f64> {
        match &self.kind {
            ComponentKind::RevealStack { tracker, .. }
            | ComponentKind::Parallax { tracker, .. }
            | ComponentKind::FloatingIcons { tracker, .. }
            | ComponentKind::Columns { tracker, .. } => Some(tracker.progress().get()),
            ComponentKind::Counter(_) | ComponentKind::Fade(_) => None,
        }
    }

    fn frame(&self) -> ComponentFrame {
        let output = match &self.kind {
            ComponentKind::Counter(counter) => ComponentOutput::Counter(counter.state()),
            ComponentKind::RevealStack {
                stack,
                tracker,
                entry,
            } => ComponentOutput::RevealStack(stack.frame(tracker.progress(), entry.progress())),
            ComponentKind::Parallax { block, tracker } => ComponentOutput::Parallax {
                offsets: block.offsets(tracker.progress()),
            },
            ComponentKind::FloatingIcons { icons, tracker } => {
                ComponentOutput::FloatingIcons(icons.frame(tracker.progress()))
            }
            ComponentKind::Columns { columns, tracker } => {
                ComponentOutput::Columns(columns.frame(tracker.progress()))
            }
            ComponentKind::Fade(fade) => ComponentOutput::Fade(fade.frame()),
        };
        ComponentFrame {
            id: self.id.clone(),
            progress: self.progress(),
            in_view: self.in_view,
            output,
        }
    }

    fn unmount(&mut self) {
        match &mut self.kind {
            ComponentKind::Counter(counter) => counter.unmount(),
            ComponentKind::Fade(fade) => fade.stop(),
            _ => {}
        }
    }
}

#[derive(Debug)]
struct Section {
    id: String,
    rect_def: RectDef,
    host_rect: Option<Rect>,
    rect: Rect,
    gate: AnimateGate,
    components: Vec<Component>,
}

/// Live scroll-animation state of a page.
///
/// Every scroll or resize runs one synchronous pass: trackers first, then the section
/// gates, then visibility and counter sync. Mapping to styles happens in
/// [`Scene::snapshot`], so every output of a pass reads the same progress values.
#[derive(Debug)]
pub struct Scene {
    viewport: Viewport,
    scroll_y: f64,
    in_view: InViewOptions,
    scheduler: FrameScheduler,
    sections: Vec<Section>,
    events: Vec<SceneEvent>,
}

impl Scene {
    /// Validate `def` and build the scene at scroll offset `0`.
    ///
    /// Fails on an invalid viewport, duplicate ids, malformed rects or any component
    /// that rejects its configuration.
    #[tracing::instrument(skip(def), fields(sections = def.sections.len()))]
    pub fn from_def(def: &SceneDef) -> ScrollFxResult<Self> {
        let viewport = Viewport::new(def.viewport.width, def.viewport.height)?;
        if !def.near_top_threshold.is_finite() {
            return Err(ScrollFxError::validation(
                "near_top_threshold must be finite",
            ));
        }
        if !def.in_view.amount.is_finite() {
            return Err(ScrollFxError::validation("in_view.amount must be finite"));
        }

        let mut section_ids = BTreeSet::new();
        let mut component_ids = BTreeSet::new();
        let mut sections = Vec::with_capacity(def.sections.len());
        for s in &def.sections {
            if !section_ids.insert(s.id.as_str()) {
                return Err(ScrollFxError::validation(format!(
                    "duplicate section id \"{}\"",
                    s.id
                )));
            }
            validate_rect(&s.id, s.rect)?;

            let rect = s.rect.to_rect(viewport.width);
            let mut components = Vec::with_capacity(s.components.len());
            for c in &s.components {
                if !component_ids.insert(c.id()) {
                    return Err(ScrollFxError::validation(format!(
                        "duplicate component id \"{}\"",
                        c.id()
                    )));
                }
                if let Some(r) = c.rect() {
                    validate_rect(c.id(), r)?;
                }
                let kind = build_component(c, def, viewport).map_err(|e| {
                    ScrollFxError::validation(format!("component \"{}\": {e}", c.id()))
                })?;
                components.push(Component {
                    id: c.id().to_owned(),
                    rect_def: c.rect(),
                    host_rect: None,
                    rect: c.rect().map_or(rect, |r| r.to_rect(viewport.width)),
                    in_view: false,
                    kind,
                });
            }

            sections.push(Section {
                id: s.id.clone(),
                rect_def: s.rect,
                host_rect: None,
                rect,
                gate: AnimateGate::new(def.near_top_threshold),
                components,
            });
        }

        let mut scene = Self {
            viewport,
            scroll_y: 0.0,
            in_view: def.in_view,
            scheduler: FrameScheduler::new(),
            sections,
            events: Vec::new(),
        };
        scene.pass();
        Ok(scene)
    }

    /// Current scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Move to `scroll_y` and run a pass. Non-finite offsets are ignored.
    #[tracing::instrument(skip(self))]
    pub fn on_scroll(&mut self, scroll_y: f64) {
        if !scroll_y.is_finite() {
            tracing::warn!(scroll_y, "ignoring non-finite scroll offset");
            return;
        }
        self.scroll_y = scroll_y;
        self.pass();
    }

    /// Apply a new viewport size; rects without an explicit width follow it.
    #[tracing::instrument(skip(self))]
    pub fn on_resize(&mut self, viewport: Viewport) {
        self.apply_viewport(viewport);
        self.pass();
    }

    /// Pull viewport and element rects from `host`. Elements the host does not know keep
    /// their configured geometry.
    ///
    /// Host rects stay in force across later resizes until the next `sync_layout`.
    pub fn sync_layout(&mut self, host: &dyn LayoutHost) {
        for section in &mut self.sections {
            section.host_rect = host.rect_of(&section.id);
            for c in &mut section.components {
                c.host_rect = host.rect_of(&c.id);
            }
        }
        self.apply_viewport(host.viewport());
        self.pass();
    }

    fn apply_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        for section in &mut self.sections {
            section.rect = section
                .host_rect
                .unwrap_or_else(|| section.rect_def.to_rect(viewport.width));
            for c in &mut section.components {
                c.rect = match (c.host_rect, c.rect_def) {
                    (Some(r), _) => r,
                    (None, Some(d)) => d.to_rect(viewport.width),
                    (None, None) => section.rect,
                };
                if let ComponentKind::Parallax { block, .. } = &mut c.kind {
                    block.on_resize(viewport.width);
                }
            }
        }
    }

    /// Run frame callbacks at host time `now` (seconds).
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn on_frame(&mut self, now: f64) -> usize {
        self.scheduler.tick(now)
    }

    /// `true` while any counter or fade is still animating.
    pub fn is_animating(&self) -> bool {
        !self.scheduler.is_idle()
    }

    /// Tear a section down, cancelling its running animations.
    pub fn unmount(&mut self, section_id: &str) -> bool {
        let Some(idx) = self.sections.iter().position(|s| s.id == section_id) else {
            return false;
        };
        let mut section = self.sections.remove(idx);
        for c in &mut section.components {
            c.unmount();
        }
        tracing::debug!(section = section_id, "section unmounted");
        true
    }

    /// Gate transitions emitted since the last call.
    pub fn take_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }

    /// Gate state of a section, `None` for unknown ids.
    pub fn gate_state(&self, section_id: &str) -> Option<GateState> {
        self.sections
            .iter()
            .find(|s| s.id == section_id)
            .map(|s| s.gate.state())
    }

    /// Style values of every mounted section.
    pub fn snapshot(&self) -> SceneFrame {
        SceneFrame {
            scroll_y: self.scroll_y,
            viewport: self.viewport,
            sections: self
                .sections
                .iter()
                .map(|s| SectionFrame {
                    id: s.id.clone(),
                    gate: s.gate.state(),
                    components: s.components.iter().map(Component::frame).collect(),
                })
                .collect(),
        }
    }

    fn pass(&mut self) {
        let scroll_y = self.scroll_y;
        let viewport = self.viewport;

        for section in &mut self.sections {
            for c in &mut section.components {
                let rect = c.rect;
                match &mut c.kind {
                    ComponentKind::RevealStack { tracker, entry, .. } => {
                        tracker.update(scroll_y, rect, viewport);
                        entry.update(scroll_y, rect, viewport);
                    }
                    ComponentKind::Parallax { tracker, .. }
                    | ComponentKind::FloatingIcons { tracker, .. }
                    | ComponentKind::Columns { tracker, .. } => {
                        tracker.update(scroll_y, rect, viewport);
                    }
                    ComponentKind::Counter(_) | ComponentKind::Fade(_) => {}
                }
            }
        }

        for section in &mut self.sections {
            if let Some(transition) = section.gate.on_scroll(scroll_y, section.rect.y1) {
                self.events.push(SceneEvent {
                    section: section.id.clone(),
                    transition,
                });
            }
        }

        let visible = viewport.rect_at(scroll_y);
        for section in &mut self.sections {
            let gate = section.gate.state();
            for c in &mut section.components {
                c.in_view = is_in_view(c.rect, visible, self.in_view);
                match &mut c.kind {
                    ComponentKind::Counter(counter) => {
                        counter.sync(&mut self.scheduler, c.in_view, gate);
                    }
                    ComponentKind::Fade(fade) => fade.sync(&mut self.scheduler, c.in_view),
                    _ => {}
                }
            }
        }
    }
}

fn validate_rect(id: &str, r: RectDef) -> ScrollFxResult<()> {
    let width_ok = r.width.is_none_or(|w| w.is_finite() && w >= 0.0);
    if !r.top.is_finite() || !r.left.is_finite() || !r.height.is_finite() || r.height < 0.0
        || !width_ok
    {
        return Err(ScrollFxError::validation(format!(
            "\"{id}\" has an invalid rect {r:?}"
        )));
    }
    Ok(())
}

fn build_component(
    c: &ComponentDef,
    def: &SceneDef,
    viewport: Viewport,
) -> ScrollFxResult<ComponentKind> {
    Ok(match c {
        ComponentDef::Counter(d) => {
            if !d.config.duration.is_finite() || d.config.duration < 0.0 {
                return Err(ScrollFxError::validation(
                    "counter duration must be finite and non-negative",
                ));
            }
            ComponentKind::Counter(CounterAnimator::new(&d.label, d.config))
        }
        ComponentDef::RevealStack(d) => ComponentKind::RevealStack {
            stack: RevealStack::new(d.cards.clone(), d.config.clone())?,
            tracker: ViewportTracker::new(d.window),
            entry: ViewportTracker::new(d.entry_window),
        },
        ComponentDef::Parallax(d) => ComponentKind::Parallax {
            block: ParallaxBlock::new(&d.amplitudes, def.desktop_min_width, viewport.width)?,
            tracker: ViewportTracker::new(d.window),
        },
        ComponentDef::FloatingIcons(d) => ComponentKind::FloatingIcons {
            icons: match &d.icons {
                Some(icons) => {
                    let defs: Vec<FloatingIconDef> = icons.iter().map(Into::into).collect();
                    FloatingIcons::new(&defs)?
                }
                None => FloatingIcons::showcase()?,
            },
            tracker: ViewportTracker::new(d.window),
        },
        ComponentDef::Columns(d) => ComponentKind::Columns {
            columns: ProgressiveColumns::new(d.count)?,
            tracker: ViewportTracker::new(d.window),
        },
        ComponentDef::Fade(d) => {
            if !d.config.duration.is_finite() || d.config.duration < 0.0 {
                return Err(ScrollFxError::validation(
                    "fade duration must be finite and non-negative",
                ));
            }
            ComponentKind::Fade(InViewFade::new(d.config))
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/runtime.rs"]
mod tests;
