//! # Core vocabulary
//!
//! `relight-core` holds the types shared between the instruments in
//! `relight-devtools` and whatever host runtime drives them:
//!
//! - `NodeId` — label chosen by the call site for an instrumented node.
//! - `Scene` / `SceneNode` — the display list instruments paint into.
//! - `Clock` — time source for paint-time decay (`SystemClock`, `ManualClock`).
//! - `PassTracker` / `PassId` — render pass identity, used to coalesce
//!   duplicate hook invocations.
//! - `RebuildHooks` — the capability the host calls on rebuild and paint.
//!
//! ```rust
//! use relight_core::*;
//!
//! let passes = PassTracker::new();
//! let first = passes.begin();
//! let second = passes.begin();
//! assert!(second > first);
//! assert_eq!(passes.current(), Some(second));
//!
//! let id = NodeId::from("1 column: text1");
//! assert_eq!(id.label(), "1 column: text1");
//! ```
//!
//! The host is expected to own a single clock for all instruments attached to
//! one tree. Tests substitute a `ManualClock` and advance it explicitly:
//!
//! ```rust
//! use relight_core::{Clock, ManualClock};
//! use web_time::Duration;
//!
//! let clock = ManualClock::new();
//! let t0 = clock.now();
//! clock.advance(Duration::from_millis(1500));
//! assert_eq!(clock.now() - t0, Duration::from_millis(1500));
//! ```

pub mod clock;
pub mod color;
pub mod geometry;
pub mod hooks;
pub mod node;
pub mod pass;
pub mod prelude;
pub mod scene;

pub use clock::*;
pub use color::*;
pub use geometry::*;
pub use hooks::*;
pub use node::*;
pub use pass::*;
pub use scene::*;
