#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use crate::*;
    use relight_core::{ManualClock, NodeId, RebuildHooks, Rect, Scene, SceneNode};
    use web_time::Duration;

    fn instrumentation() -> (Arc<ManualClock>, Instrumentation) {
        let clock = Arc::new(ManualClock::new());
        let inst = Instrumentation::with_clock(DevtoolsConfig::default(), clock.clone()).unwrap();
        (clock, inst)
    }

    #[test]
    fn test_k_rebuilds_count_k() {
        let (_, inst) = instrumentation();
        let a = inst.attach_counter("A");
        for _ in 0..7 {
            a.on_rebuild();
        }
        assert_eq!(a.count(), 7);
        assert_eq!(inst.counter().count(&NodeId::from("A")), 7);
    }

    #[test]
    fn test_three_immediate_rebuilds() {
        let (clock, inst) = instrumentation();
        let a = inst.attach("A");
        a.on_rebuild();
        clock.advance(Duration::from_millis(900));
        a.on_rebuild();
        clock.advance(Duration::from_millis(900));
        a.on_rebuild();

        assert_eq!(a.counter.count(), 3);
        assert_eq!(a.highlighter.intensity(), 1.0);
    }

    #[test]
    fn test_decay_scenario() {
        let (clock, inst) = instrumentation();
        let a = inst.attach_highlighter("A");

        a.on_rebuild();
        assert_eq!(a.intensity(), 1.0);

        clock.set_elapsed(Duration::from_millis(1500));
        assert!((a.intensity() - 0.5).abs() < 1e-4);

        clock.set_elapsed(Duration::from_millis(3100));
        assert_eq!(a.intensity(), 0.0);
        assert_eq!(a.phase(), HighlightPhase::Idle);
        assert!(a.highlight().is_none());
    }

    #[test]
    fn test_alternating_nodes() {
        let (_, inst) = instrumentation();
        let a = inst.attach("A");
        let b = inst.attach("B");
        for _ in 0..5 {
            a.on_rebuild();
            b.on_rebuild();
        }
        assert_eq!(a.counter.count(), 5);
        assert_eq!(b.counter.count(), 5);
    }

    #[test]
    fn test_interleaved_threads() {
        let (_, inst) = instrumentation();
        let workers: Vec<_> = (0..4)
            .map(|i| {
                let inst = inst.clone();
                thread::spawn(move || {
                    let a = inst.attach("A");
                    let b = inst.attach("B");
                    let own = inst.attach(format!("worker {i}"));
                    for _ in 0..250 {
                        a.on_rebuild();
                        b.on_rebuild();
                        own.on_rebuild();
                    }
                })
            })
            .collect();
        for w in workers {
            w.join().unwrap();
        }

        let counter = inst.counter();
        assert_eq!(counter.count(&NodeId::from("A")), 1000);
        assert_eq!(counter.count(&NodeId::from("B")), 1000);
        for i in 0..4 {
            assert_eq!(counter.count(&NodeId::from(format!("worker {i}"))), 250);
        }
    }

    #[test]
    fn test_registries_are_isolated() {
        let (_, first) = instrumentation();
        let (_, second) = instrumentation();
        first.attach("A").on_rebuild();
        assert_eq!(first.counter().count(&NodeId::from("A")), 1);
        assert_eq!(second.counter().count(&NodeId::from("A")), 0);
    }

    #[test]
    fn test_shared_label_shares_state() {
        // Three bottom navigation items reusing one label.
        let (_, inst) = instrumentation();
        let items: Vec<_> = (0..3).map(|_| inst.attach("bottomNav item 1")).collect();
        for item in &items {
            item.on_rebuild();
        }
        assert_eq!(items[0].counter.count(), 3);
    }

    #[test]
    fn test_pass_coalescing_through_hooks() {
        let (_, inst) = instrumentation();
        let id = NodeId::from("column");

        let pass = inst.begin_pass();
        inst.on_rebuild_in(pass, &id);
        inst.on_rebuild_in(pass, &id);
        assert_eq!(inst.counter().count(&id), 1);
        assert_eq!(inst.highlighter().burst(&id), 1);
        assert_eq!(inst.current_pass(), Some(pass));

        let next = inst.begin_pass();
        inst.on_rebuild_in(next, &id);
        assert_eq!(inst.counter().count(&id), 2);
        assert_eq!(inst.highlighter().burst(&id), 2);
    }

    #[test]
    fn test_disabled_instruments_ignore_hooks() {
        let clock = Arc::new(ManualClock::new());
        let config = DevtoolsConfig::default()
            .with_counter_enabled(false)
            .with_highlighter_enabled(false);
        let inst = Instrumentation::with_clock(config, clock).unwrap();
        let node = inst.attach("image");

        assert_eq!(node.on_rebuild(), 0);
        assert_eq!(node.highlighter.intensity(), 0.0);

        let mut scene = Scene::new();
        node.paint(Rect::new(0.0, 0.0, 48.0, 48.0), &mut scene);
        assert!(scene.is_empty());
    }

    #[test]
    fn test_paint_through_hooks() {
        let (clock, inst) = instrumentation();
        let id = NodeId::from("lower row");
        let bounds = Rect::new(10.0, 10.0, 120.0, 60.0);

        let mut scene = Scene::new();
        inst.paint(&id, bounds, &mut scene);
        assert!(scene.is_empty());

        inst.on_rebuild(&id);
        inst.paint(&id, bounds, &mut scene);
        assert!(matches!(
            &scene.nodes[..],
            [SceneNode::Border { .. }, SceneNode::Text { .. }]
        ));

        // The badge outlives the highlight.
        clock.advance(Duration::from_secs(5));
        let mut later = Scene::new();
        inst.paint(&id, bounds, &mut later);
        match &later.nodes[..] {
            [SceneNode::Text { text, .. }] => assert_eq!(text, "lower row: 1"),
            other => panic!("unexpected scene: {other:?}"),
        }
    }

    #[test]
    fn test_reset_clears_everything() {
        let (_, inst) = instrumentation();
        let node = inst.attach("text2");
        node.on_rebuild();
        inst.reset();
        assert_eq!(node.counter.count(), 0);
        assert_eq!(node.highlighter.intensity(), 0.0);
        assert!(inst.counter().is_empty());
        assert!(inst.highlighter().is_empty());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = DevtoolsConfig::default()
            .with_highlighter(HighlighterConfig::default().with_decay_window(Duration::ZERO));
        assert!(matches!(
            Instrumentation::new(config),
            Err(ConfigError::EmptyDecayWindow)
        ));
    }
}
