pub use crate::clock::{Clock, ManualClock, SystemClock};
pub use crate::color::{Color, Interpolate};
pub use crate::geometry::{Rect, Vec2};
pub use crate::hooks::RebuildHooks;
pub use crate::node::NodeId;
pub use crate::pass::{PassId, PassTracker};
pub use crate::scene::{Scene, SceneNode};
