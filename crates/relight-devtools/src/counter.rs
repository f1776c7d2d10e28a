use std::collections::HashMap;
use std::fmt;

use parking_lot::Mutex;
use relight_core::{NodeId, PassId, Rect, Scene, SceneNode};

use crate::config::CounterConfig;

pub(crate) const LOG_TARGET: &str = "relight::recomposition";

#[derive(Clone, Copy, Debug, Default)]
struct Entry {
    count: u64,
    last_pass: Option<PassId>,
}

/// Per-node rebuild counts.
///
/// Counts only ever grow; an entry appears on the first rebuild of its node and
/// stays until [`RecompositionCounter::reset`] or until the counter is dropped.
/// All access goes through one mutex, so increments for the same node are
/// serialized even if a host fires hooks from several threads.
#[derive(Default)]
pub struct RecompositionCounter {
    entries: Mutex<HashMap<NodeId, Entry>>,
    style: CounterConfig,
}

/// The count for one node, ready to be drawn or logged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterBadge {
    pub node: NodeId,
    pub count: u64,
}

impl fmt::Display for CounterBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.node, self.count)
    }
}

impl RecompositionCounter {
    pub fn new(style: CounterConfig) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            style,
        }
    }

    /// Counts one rebuild of `node` and returns the new count.
    pub fn on_rebuild(&self, node: &NodeId) -> u64 {
        self.record(node, None)
    }

    /// Counts one rebuild of `node` unless it was already counted in `pass`.
    pub fn on_rebuild_in(&self, pass: PassId, node: &NodeId) -> u64 {
        self.record(node, Some(pass))
    }

    fn record(&self, node: &NodeId, pass: Option<PassId>) -> u64 {
        let (count, coalesced) = {
            let mut entries = self.entries.lock();
            let entry = entries.entry(node.clone()).or_default();
            if pass.is_some() && entry.last_pass == pass {
                (entry.count, true)
            } else {
                entry.count += 1;
                entry.last_pass = pass;
                (entry.count, false)
            }
        };

        if coalesced {
            log::trace!(target: LOG_TARGET, "{node}: repeated hook in {pass:?} ignored");
        } else {
            log::debug!(target: LOG_TARGET, "{node}: {count}");
        }
        count
    }

    pub fn count(&self, node: &NodeId) -> u64 {
        self.entries.lock().get(node).map_or(0, |e| e.count)
    }

    pub fn badge(&self, node: &NodeId) -> CounterBadge {
        CounterBadge {
            node: node.clone(),
            count: self.count(node),
        }
    }

    /// Appends the current count to `text`, e.g. `"Hello Android! 3 (4)"`.
    pub fn annotate(&self, text: &str, node: &NodeId) -> String {
        format!("{text} ({})", self.count(node))
    }

    /// Draws the badge in the top-left corner of `bounds`. Nodes that were never
    /// rebuilt draw nothing.
    pub fn paint(&self, node: &NodeId, bounds: Rect, scene: &mut Scene) {
        let badge = self.badge(node);
        if badge.count == 0 {
            return;
        }
        let rect = bounds.inset(4.0);
        scene.push(SceneNode::Text {
            rect: Rect {
                h: self.style.font_size.min(rect.h),
                ..rect
            },
            text: badge.to_string(),
            color: self.style.badge_color,
            size: self.style.font_size,
        });
    }

    /// All counted nodes, most rebuilt first, ties by label.
    pub fn snapshot(&self) -> Vec<CounterBadge> {
        let mut out: Vec<CounterBadge> = self
            .entries
            .lock()
            .iter()
            .map(|(node, e)| CounterBadge {
                node: node.clone(),
                count: e.count,
            })
            .collect();
        out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.node.cmp(&b.node)));
        out
    }

    pub fn total(&self) -> u64 {
        self.entries.lock().values().map(|e| e.count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn reset(&self) {
        self.entries.lock().clear();
    }
}
