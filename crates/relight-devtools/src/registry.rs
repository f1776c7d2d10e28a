use std::sync::Arc;

use relight_core::{Clock, NodeId, PassId, PassTracker, RebuildHooks, Rect, Scene, SystemClock};

use crate::config::{ConfigError, DevtoolsConfig};
use crate::counter::{CounterBadge, RecompositionCounter};
use crate::highlighter::{Highlight, HighlightPhase, RecomposeHighlighter};

struct Shared {
    config: DevtoolsConfig,
    clock: Arc<dyn Clock>,
    passes: PassTracker,
    counter: RecompositionCounter,
    highlighter: RecomposeHighlighter,
}

/// Instrumentation for one render tree.
///
/// Owns the rebuild counter, the highlighter, the clock they read and the
/// pass tracker. Give each tree root its own instance; nothing here is global,
/// so independent trees (and tests) never see each other's counts.
///
/// Cloning is cheap and shares state.
#[derive(Clone)]
pub struct Instrumentation {
    shared: Arc<Shared>,
}

impl Instrumentation {
    pub fn new(config: DevtoolsConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: DevtoolsConfig, clock: Arc<dyn Clock>) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "instrumentation ready (counter: {}, highlighter: {}, decay window: {:?})",
            config.counter.enabled,
            config.highlighter.enabled,
            config.highlighter.decay_window(),
        );
        let counter = RecompositionCounter::new(config.counter.clone());
        let highlighter = RecomposeHighlighter::new(config.highlighter.clone(), clock.clone());
        Ok(Self {
            shared: Arc::new(Shared {
                config,
                clock,
                passes: PassTracker::new(),
                counter,
                highlighter,
            }),
        })
    }

    pub fn config(&self) -> &DevtoolsConfig {
        &self.shared.config
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.shared.clock
    }

    pub fn counter(&self) -> &RecompositionCounter {
        &self.shared.counter
    }

    pub fn highlighter(&self) -> &RecomposeHighlighter {
        &self.shared.highlighter
    }

    /// Starts a host render pass. Hooks tagged with the returned id count a
    /// node at most once.
    pub fn begin_pass(&self) -> PassId {
        self.shared.passes.begin()
    }

    pub fn current_pass(&self) -> Option<PassId> {
        self.shared.passes.current()
    }

    /// Binds both instruments to `node`.
    pub fn attach(&self, node: impl Into<NodeId>) -> NodeHandle {
        let node = node.into();
        NodeHandle {
            counter: CounterHandle {
                node: node.clone(),
                shared: self.shared.clone(),
            },
            highlighter: HighlighterHandle {
                node,
                shared: self.shared.clone(),
            },
        }
    }

    pub fn attach_counter(&self, node: impl Into<NodeId>) -> CounterHandle {
        CounterHandle {
            node: node.into(),
            shared: self.shared.clone(),
        }
    }

    pub fn attach_highlighter(&self, node: impl Into<NodeId>) -> HighlighterHandle {
        HighlighterHandle {
            node: node.into(),
            shared: self.shared.clone(),
        }
    }

    /// Forgets every count and highlight. Only for explicit devtools actions;
    /// hooks never reset anything.
    pub fn reset(&self) {
        log::info!("instrumentation reset");
        self.shared.counter.reset();
        self.shared.highlighter.reset();
    }
}

impl Shared {
    fn rebuild_counter(&self, node: &NodeId, pass: Option<PassId>) -> u64 {
        if !self.config.counter.enabled {
            return self.counter.count(node);
        }
        match pass {
            Some(pass) => self.counter.on_rebuild_in(pass, node),
            None => self.counter.on_rebuild(node),
        }
    }

    fn rebuild_highlighter(&self, node: &NodeId, pass: Option<PassId>) {
        if !self.config.highlighter.enabled {
            return;
        }
        match pass {
            Some(pass) => self.highlighter.on_rebuild_in(pass, node),
            None => self.highlighter.on_rebuild(node),
        }
    }

    fn paint_counter(&self, node: &NodeId, bounds: Rect, scene: &mut Scene) {
        if self.config.counter.enabled {
            self.counter.paint(node, bounds, scene);
        }
    }

    fn highlight(&self, node: &NodeId) -> Option<Highlight> {
        if self.config.highlighter.enabled {
            self.highlighter.paint(node)
        } else {
            None
        }
    }

    fn paint_highlight(&self, node: &NodeId, bounds: Rect, scene: &mut Scene) {
        if let Some(h) = self.highlight(node) {
            scene.push(h.to_scene_node(bounds));
        }
    }
}

impl RebuildHooks for Instrumentation {
    fn on_rebuild(&self, node: &NodeId) {
        self.shared.rebuild_counter(node, None);
        self.shared.rebuild_highlighter(node, None);
    }

    fn on_rebuild_in(&self, pass: PassId, node: &NodeId) {
        self.shared.rebuild_counter(node, Some(pass));
        self.shared.rebuild_highlighter(node, Some(pass));
    }

    fn paint(&self, node: &NodeId, bounds: Rect, scene: &mut Scene) {
        self.shared.paint_highlight(node, bounds, scene);
        self.shared.paint_counter(node, bounds, scene);
    }
}

/// Rebuild counter bound to one node.
#[derive(Clone)]
pub struct CounterHandle {
    node: NodeId,
    shared: Arc<Shared>,
}

impl CounterHandle {
    pub fn node(&self) -> &NodeId {
        &self.node
    }

    /// Counts a rebuild and returns the new count.
    pub fn on_rebuild(&self) -> u64 {
        self.shared.rebuild_counter(&self.node, None)
    }

    pub fn on_rebuild_in(&self, pass: PassId) -> u64 {
        self.shared.rebuild_counter(&self.node, Some(pass))
    }

    pub fn count(&self) -> u64 {
        self.shared.counter.count(&self.node)
    }

    pub fn badge(&self) -> CounterBadge {
        self.shared.counter.badge(&self.node)
    }

    pub fn annotate(&self, text: &str) -> String {
        self.shared.counter.annotate(text, &self.node)
    }

    pub fn paint(&self, bounds: Rect, scene: &mut Scene) {
        self.shared.paint_counter(&self.node, bounds, scene);
    }
}

/// Rebuild highlighter bound to one node.
#[derive(Clone)]
pub struct HighlighterHandle {
    node: NodeId,
    shared: Arc<Shared>,
}

impl HighlighterHandle {
    pub fn node(&self) -> &NodeId {
        &self.node
    }

    pub fn on_rebuild(&self) {
        self.shared.rebuild_highlighter(&self.node, None);
    }

    pub fn on_rebuild_in(&self, pass: PassId) {
        self.shared.rebuild_highlighter(&self.node, Some(pass));
    }

    pub fn intensity(&self) -> f32 {
        self.shared.highlighter.intensity(&self.node)
    }

    pub fn phase(&self) -> HighlightPhase {
        self.shared.highlighter.phase(&self.node)
    }

    pub fn highlight(&self) -> Option<Highlight> {
        self.shared.highlight(&self.node)
    }

    pub fn paint(&self, bounds: Rect, scene: &mut Scene) {
        self.shared.paint_highlight(&self.node, bounds, scene);
    }
}

/// Counter and highlighter bound to the same node.
#[derive(Clone)]
pub struct NodeHandle {
    pub counter: CounterHandle,
    pub highlighter: HighlighterHandle,
}

impl NodeHandle {
    pub fn node(&self) -> &NodeId {
        self.counter.node()
    }

    /// Notifies both instruments; returns the new rebuild count.
    pub fn on_rebuild(&self) -> u64 {
        self.highlighter.on_rebuild();
        self.counter.on_rebuild()
    }

    pub fn on_rebuild_in(&self, pass: PassId) -> u64 {
        self.highlighter.on_rebuild_in(pass);
        self.counter.on_rebuild_in(pass)
    }

    /// Highlight border first, count badge on top.
    pub fn paint(&self, bounds: Rect, scene: &mut Scene) {
        self.highlighter.paint(bounds, scene);
        self.counter.paint(bounds, scene);
    }
}
