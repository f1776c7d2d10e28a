use relight_core::{Color, Rect, Scene, SceneNode};
use web_time::Instant;

use crate::config::HudConfig;
use crate::registry::Instrumentation;

/// One-line overlay summarising rebuild activity.
pub struct Hud {
    pub enabled: bool,
    pub top_nodes: usize,
    pub text_color: Color,
    frame_count: u64,
    last_frame: Option<Instant>,
    fps_smooth: f32,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new(&HudConfig::default())
    }
}

impl Hud {
    pub fn new(config: &HudConfig) -> Self {
        Self {
            enabled: config.enabled,
            top_nodes: config.top_nodes,
            text_color: config.text_color,
            frame_count: 0,
            last_frame: None,
            fps_smooth: 0.0,
        }
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn fps(&self) -> f32 {
        self.fps_smooth
    }

    /// Summary text for the current state of `inst`.
    pub fn summary(&self, inst: &Instrumentation) -> String {
        let counter = inst.counter();
        let mut lines = vec![
            format!("frame: {}", self.frame_count),
            format!("fps: {:.1}", self.fps_smooth),
            format!("rebuilds: {}", counter.total()),
            format!("nodes: {}", counter.len()),
        ];
        let hottest: Vec<String> = counter
            .snapshot()
            .into_iter()
            .take(self.top_nodes)
            .map(|b| format!("{} x{}", b.node, b.count))
            .collect();
        if !hottest.is_empty() {
            lines.push(format!("hot: {}", hottest.join(", ")));
        }
        lines.join("  |  ")
    }

    /// Advances the frame statistics and, when enabled, pushes the summary.
    pub fn overlay(&mut self, inst: &Instrumentation, scene: &mut Scene) {
        self.frame_count += 1;
        let now = inst.clock().now();
        if let Some(prev) = self.last_frame.replace(now) {
            let dt = now.saturating_duration_since(prev).as_secs_f32();
            if dt > 0.0 {
                let fps = 1.0 / dt;
                // simple EMA
                let a = 0.2;
                self.fps_smooth = if self.fps_smooth == 0.0 {
                    fps
                } else {
                    (1.0 - a) * self.fps_smooth + a * fps
                };
            }
        }

        if !self.enabled {
            return;
        }
        scene.push(SceneNode::Text {
            rect: Rect {
                x: 8.0,
                y: 8.0,
                w: 480.0,
                h: 16.0,
            },
            text: self.summary(inst),
            color: self.text_color,
            size: 14.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::DevtoolsConfig;
    use relight_core::{ManualClock, NodeId, RebuildHooks};
    use web_time::Duration;

    #[test]
    fn disabled_hud_paints_nothing() {
        let inst = Instrumentation::new(DevtoolsConfig::default()).unwrap();
        let mut hud = Hud::default();
        let mut scene = Scene::new();
        hud.overlay(&inst, &mut scene);
        assert!(scene.is_empty());
        assert_eq!(hud.frame_count(), 1);

        hud.toggle();
        hud.overlay(&inst, &mut scene);
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn summary_lists_hottest_nodes() {
        let clock = Arc::new(ManualClock::new());
        let inst = Instrumentation::with_clock(DevtoolsConfig::default().with_hud(true), clock.clone())
            .unwrap();
        let mut hud = Hud::new(&inst.config().hud);
        hud.top_nodes = 2;

        for id in ["lazyColumn", "Apple", "lazyColumn", "Orange", "lazyColumn", "Apple"] {
            inst.on_rebuild(&NodeId::from(id));
        }

        let mut scene = Scene::new();
        hud.overlay(&inst, &mut scene);
        clock.advance(Duration::from_millis(100));
        hud.overlay(&inst, &mut scene);
        assert!((hud.fps() - 10.0).abs() < 0.01);

        match scene.nodes.last() {
            Some(SceneNode::Text { text, .. }) => {
                assert_eq!(
                    text,
                    "frame: 2  |  fps: 10.0  |  rebuilds: 6  |  nodes: 3  |  hot: lazyColumn x3, Apple x2"
                );
            }
            other => panic!("unexpected node: {other:?}"),
        }
    }
}
