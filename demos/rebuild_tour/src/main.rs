//! Two greeting cards, clicked a few times, once with the click state read
//! inside each card and once with both states read by the parent.
//!
//! Run with `RUST_LOG=debug` to see every counted rebuild. An optional first
//! argument names a JSON devtools config.

use std::sync::Arc;

use relight_core::prelude::*;
use relight_devtools::{DevtoolsConfig, Hud, Instrumentation};
use web_time::Duration;

struct Node {
    id: NodeId,
    bounds: Rect,
    children: Vec<Node>,
}

impl Node {
    fn new(label: impl Into<NodeId>, bounds: Rect) -> Self {
        Self {
            id: label.into(),
            bounds,
            children: vec![],
        }
    }

    fn with_children(mut self, kids: Vec<Node>) -> Self {
        self.children = kids;
        self
    }

    fn labels(&self, out: &mut Vec<NodeId>) {
        out.push(self.id.clone());
        for c in &self.children {
            c.labels(out);
        }
    }

    fn paint(&self, inst: &Instrumentation, scene: &mut Scene) {
        inst.paint(&self.id, self.bounds, scene);
        for c in &self.children {
            c.paint(inst, scene);
        }
    }
}

fn calling_name(name: &str, column: u32) -> String {
    format!("{column} column: {name}")
}

fn greeting(column: u32, top: f32) -> Node {
    let r = |y: f32, h: f32| Rect::new(0.0, top + y, 360.0, h);
    Node::new(calling_name("column", column), r(0.0, 160.0)).with_children(vec![
        Node::new(calling_name("text1", column), r(16.0, 40.0)),
        Node::new(calling_name("button", column), r(72.0, 56.0))
            .with_children(vec![Node::new(calling_name("text2", column), r(88.0, 24.0))]),
    ])
}

fn greetings() -> Node {
    Node::new("outerColumn", Rect::new(0.0, 0.0, 360.0, 320.0))
        .with_children(vec![greeting(1, 0.0), greeting(2, 160.0)])
}

#[derive(Clone, Copy, Debug)]
enum Layout {
    /// Each card reads its own click state.
    Good,
    /// The parent reads both click states.
    Bad,
}

impl Layout {
    /// Nodes the host rebuilds after a click on `column`.
    fn rebuilt_after_click(self, column: u32) -> Vec<NodeId> {
        let mut out = Vec::new();
        if let Layout::Bad = self {
            out.push(NodeId::from("outerColumn"));
            out.push(calling_name("column", 1).into());
            out.push(calling_name("column", 2).into());
        } else {
            out.push(calling_name("column", column).into());
        }
        out.push(calling_name("text1", column).into());
        out
    }
}

fn frame(inst: &Instrumentation, hud: &mut Hud, root: &Node, rebuilt: &[NodeId]) -> Scene {
    let pass = inst.begin_pass();
    for id in rebuilt {
        inst.on_rebuild_in(pass, id);
    }
    let mut scene = Scene::new();
    root.paint(inst, &mut scene);
    hud.overlay(inst, &mut scene);
    scene
}

fn describe(scene: &Scene) {
    for n in &scene.nodes {
        match n {
            SceneNode::Border { rect, color, width, .. } => {
                log::info!("  border {} w={width:.2} at y={}", color.to_hex(), rect.y)
            }
            SceneNode::Text { text, .. } => log::info!("  text   {text}"),
            SceneNode::Rect { .. } => {}
        }
    }
}

fn tour(config: &DevtoolsConfig, layout: Layout) -> anyhow::Result<Instrumentation> {
    let clock = Arc::new(ManualClock::new());
    let inst = Instrumentation::with_clock(config.clone(), clock.clone())?;
    let mut hud = Hud::new(&config.hud);
    let root = greetings();

    log::info!("{layout:?} layout: initial composition");
    let mut everything = Vec::new();
    root.labels(&mut everything);
    describe(&frame(&inst, &mut hud, &root, &everything));

    for column in [1, 1, 2, 1] {
        clock.advance(Duration::from_millis(400));
        log::info!(
            "{layout:?} layout: click on column {column} at {:?}",
            clock.elapsed()
        );
        let scene = frame(&inst, &mut hud, &root, &layout.rebuilt_after_click(column));
        describe(&scene);
    }
    Ok(inst)
}

fn report(layout: Layout, inst: &Instrumentation) {
    println!("{layout:?} layout, {} rebuilds:", inst.counter().total());
    for badge in inst.counter().snapshot() {
        println!("  {badge}");
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => DevtoolsConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => DevtoolsConfig::default().with_hud(true),
    };

    for layout in [Layout::Good, Layout::Bad] {
        let inst = tour(&config, layout)?;
        report(layout, &inst);
    }
    Ok(())
}
