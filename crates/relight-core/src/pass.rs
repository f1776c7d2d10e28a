use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of one host render pass.
///
/// Hosts that may fire an instrumentation hook more than once for a single
/// logical rebuild tag each invocation with the pass it belongs to; instruments
/// then count a node at most once per pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PassId(u64);

impl PassId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Hands out increasing pass ids.
#[derive(Debug, Default)]
pub struct PassTracker {
    last: AtomicU64,
}

impl PassTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> PassId {
        let id = PassId(self.last.fetch_add(1, Ordering::Relaxed) + 1);
        log::trace!("render pass {} started", id.0);
        id
    }

    /// The most recently started pass, if any.
    pub fn current(&self) -> Option<PassId> {
        match self.last.load(Ordering::Relaxed) {
            0 => None,
            n => Some(PassId(n)),
        }
    }
}
