//! Rebuild highlighting.
//!
//! Every rebuild resets a node's highlight to full intensity. The intensity is
//! never stored: it is recomputed at paint time from the time since the last
//! rebuild,
//!
//! ```text
//! intensity(now) = max_intensity * max(0, 1 - (now - last_rebuild) / window)
//! ```
//!
//! so the signal tracks time since the last change regardless of frame rate,
//! and no timers are involved.
//!
//! Hue and stroke width encode the length of the current burst, i.e. the
//! rebuilds since the node was last idle: blue for one, green for two, then
//! yellow shading towards red as the burst grows.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use relight_core::{Clock, Color, Interpolate, NodeId, PassId, Rect, SceneNode};
use web_time::{Duration, Instant};

use crate::config::HighlighterConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HighlightPhase {
    Idle,
    Highlighted,
}

#[derive(Clone, Copy, Debug)]
struct HighlightState {
    last_rebuild: Instant,
    burst: u32,
    last_pass: Option<PassId>,
}

/// Border to draw over a recently rebuilt node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    /// Burst color with its alpha already scaled by `intensity`.
    pub color: Color,
    pub width: f32,
    pub intensity: f32,
}

impl Highlight {
    pub fn to_scene_node(&self, bounds: Rect) -> SceneNode {
        // Keep the stroke inside the node.
        SceneNode::Border {
            rect: bounds.inset(self.width / 2.0),
            color: self.color,
            width: self.width,
            radius: 0.0,
        }
    }
}

pub struct RecomposeHighlighter {
    config: HighlighterConfig,
    clock: Arc<dyn Clock>,
    states: Mutex<HashMap<NodeId, HighlightState>>,
}

impl RecomposeHighlighter {
    pub fn new(config: HighlighterConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            clock,
            states: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &HighlighterConfig {
        &self.config
    }

    pub fn on_rebuild(&self, node: &NodeId) {
        self.record(node, None);
    }

    /// Restarts the highlight; a repeat within `pass` does not grow the burst.
    pub fn on_rebuild_in(&self, pass: PassId, node: &NodeId) {
        self.record(node, Some(pass));
    }

    fn record(&self, node: &NodeId, pass: Option<PassId>) {
        let now = self.clock.now();
        let window = self.config.decay_window();
        let mut states = self.states.lock();
        match states.get_mut(node) {
            Some(state) => {
                let repeated = pass.is_some() && state.last_pass == pass;
                if !repeated {
                    if now.saturating_duration_since(state.last_rebuild) >= window {
                        state.burst = 1;
                    } else {
                        state.burst = state.burst.saturating_add(1);
                    }
                }
                state.last_rebuild = now;
                state.last_pass = pass;
            }
            None => {
                states.insert(
                    node.clone(),
                    HighlightState {
                        last_rebuild: now,
                        burst: 1,
                        last_pass: pass,
                    },
                );
            }
        }
    }

    /// Pure decay curve: full at zero elapsed, exactly zero from `window` on.
    pub fn decay(&self, elapsed: Duration) -> f32 {
        let window = self.config.decay_window();
        if elapsed >= window {
            return 0.0;
        }
        let remaining = 1.0 - elapsed.as_secs_f32() / window.as_secs_f32();
        self.config.max_intensity * remaining.clamp(0.0, 1.0)
    }

    pub fn intensity(&self, node: &NodeId) -> f32 {
        self.intensity_at(node, self.clock.now())
    }

    /// Intensity of `node` as seen at `now`. Unknown nodes are idle.
    pub fn intensity_at(&self, node: &NodeId, now: Instant) -> f32 {
        let last = self.states.lock().get(node).map(|s| s.last_rebuild);
        match last {
            Some(last) => self.decay(now.saturating_duration_since(last)),
            None => 0.0,
        }
    }

    pub fn phase(&self, node: &NodeId) -> HighlightPhase {
        if self.intensity(node) > 0.0 {
            HighlightPhase::Highlighted
        } else {
            HighlightPhase::Idle
        }
    }

    /// Rebuilds in the current burst; zero once the node is idle.
    pub fn burst(&self, node: &NodeId) -> u32 {
        let now = self.clock.now();
        let states = self.states.lock();
        match states.get(node) {
            Some(s) if self.decay(now.saturating_duration_since(s.last_rebuild)) > 0.0 => s.burst,
            _ => 0,
        }
    }

    /// What to draw over `node` right now, or `None` when it is idle.
    pub fn paint(&self, node: &NodeId) -> Option<Highlight> {
        let now = self.clock.now();
        let (elapsed, burst) = {
            let states = self.states.lock();
            let s = states.get(node)?;
            (now.saturating_duration_since(s.last_rebuild), s.burst)
        };
        let intensity = self.decay(elapsed);
        if intensity <= 0.0 {
            return None;
        }
        let (color, width) = self.burst_style(burst);
        Some(Highlight {
            color: color.scale_alpha(intensity),
            width,
            intensity,
        })
    }

    fn burst_style(&self, burst: u32) -> (Color, f32) {
        let c = &self.config;
        let saturation = c.saturation_burst.max(1) as f32;
        let width = c
            .min_width
            .interpolate(&c.max_width, (burst as f32 / saturation).min(1.0));
        let color = match burst {
            0 | 1 => c.first_color,
            2 => c.second_color,
            n => c
                .hot_start_color
                .interpolate(&c.hot_end_color, ((n - 1) as f32 / saturation).min(1.0)),
        };
        (color, width)
    }

    pub fn len(&self) -> usize {
        self.states.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.lock().is_empty()
    }

    pub fn reset(&self) {
        self.states.lock().clear();
    }
}
