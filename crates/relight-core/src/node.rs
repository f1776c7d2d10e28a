use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Stable identity of an instrumented position in the render tree.
///
/// The call site picks the label (for example `"1 column: text1"`). The same
/// logical node must use the same label across rebuilds, and siblings must use
/// distinct labels. Two unrelated nodes sharing a label simply share their
/// counters and highlight state; nothing detects or reports the collision.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(Arc<str>);

impl NodeId {
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({:?})", &*self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(label: &str) -> Self {
        NodeId::new(label)
    }
}

impl From<String> for NodeId {
    fn from(label: String) -> Self {
        NodeId(Arc::from(label))
    }
}

impl From<&NodeId> for NodeId {
    fn from(id: &NodeId) -> Self {
        id.clone()
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
