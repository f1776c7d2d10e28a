use crate::{NodeId, PassId, Rect, Scene};

/// Capability the host composition layer invokes on instrumented nodes.
///
/// Implementations react to the host; they never call back into it. Both
/// methods run inside the host's render/paint loop and must not block.
pub trait RebuildHooks {
    /// Called once per rebuild of `node`.
    fn on_rebuild(&self, node: &NodeId);

    /// Like [`RebuildHooks::on_rebuild`], for hosts that may fire more than
    /// once per logical rebuild. Invocations sharing `pass` count once.
    fn on_rebuild_in(&self, pass: PassId, node: &NodeId) {
        let _ = pass;
        self.on_rebuild(node);
    }

    /// Called when the host paints `node` at `bounds`.
    fn paint(&self, node: &NodeId, bounds: Rect, scene: &mut Scene);
}
