//! # Recomposition instruments
//!
//! Two independent diagnostics for declarative UI trees, attached per node by
//! the code that builds the tree and driven by the host runtime:
//!
//! - [`RecompositionCounter`] — how many times a node was rebuilt.
//! - [`RecomposeHighlighter`] — a border that flashes on rebuild and fades over
//!   a fixed window, so hot nodes stand out from idle ones.
//!
//! Both live in an [`Instrumentation`] registry, one per tree:
//!
//! ```rust
//! use std::sync::Arc;
//! use relight_core::{ManualClock, Rect, Scene};
//! use relight_devtools::*;
//! use web_time::Duration;
//!
//! let clock = Arc::new(ManualClock::new());
//! let inst = Instrumentation::with_clock(DevtoolsConfig::default(), clock.clone()).unwrap();
//!
//! let text = inst.attach("1 column: text1");
//! assert_eq!(text.on_rebuild(), 1);
//! assert_eq!(text.on_rebuild(), 2);
//! assert_eq!(text.counter.annotate("Hello Android!"), "Hello Android! (2)");
//!
//! clock.advance(Duration::from_millis(1500));
//! assert!((text.highlighter.intensity() - 0.5).abs() < 1e-4);
//!
//! let mut scene = Scene::new();
//! text.paint(Rect::new(0.0, 0.0, 200.0, 48.0), &mut scene);
//! assert_eq!(scene.len(), 2); // border + badge
//! ```
//!
//! Hosts that may fire a hook more than once per logical rebuild open a pass
//! with [`Instrumentation::begin_pass`] and use the `on_rebuild_in` variants;
//! repeats within one pass are coalesced.

pub mod config;
pub mod counter;
pub mod highlighter;
pub mod hud;
pub mod registry;
pub mod tests;

pub use config::*;
pub use counter::*;
pub use highlighter::*;
pub use hud::*;
pub use registry::*;
