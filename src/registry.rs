use std::collections::BTreeMap;

use crate::core::{NormalizedRegion, PinnedRegion};

/// The live set of pinned regions, keyed by section id.
///
/// This is the one piece of shared mutable state in the crate. It is a plain
/// owned value (injected into whatever coordinates on it) rather than a
/// process-wide registry, so tests can instantiate as many as they like.
/// Each section mutates only its own entry; correctness relies on
/// update-before-read ordering within a frame, never on locking.
#[derive(Clone, Debug, Default)]
pub struct PinRegistry {
    regions: BTreeMap<String, PinnedRegion>,
}

impl PinRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert: re-registering a section replaces its prior region, it never
    /// duplicates.
    pub fn register(&mut self, id: impl Into<String>, region: PinnedRegion) {
        let id = id.into();
        tracing::debug!(%id, start = region.start, end = region.end, "register pinned region");
        self.regions.insert(id, region);
    }

    /// No-op if the id was never registered.
    pub fn unregister(&mut self, id: &str) {
        if self.regions.remove(id).is_some() {
            tracing::debug!(%id, "unregister pinned region");
        }
    }

    pub fn get(&self, id: &str) -> Option<PinnedRegion> {
        self.regions.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Normalized regions sorted by `start` ascending, computed against
    /// `max_scroll` *at call time*: the document extent can change as late
    /// assets load, so nothing here is cached.
    ///
    /// A degenerate extent (`max_scroll <= 0` or non-finite) yields an empty
    /// snapshot, which downstream snap logic treats as pass-through.
    pub fn snapshot(&self, max_scroll: f64) -> Vec<NormalizedRegion> {
        if !max_scroll.is_finite() || max_scroll <= 0.0 {
            return Vec::new();
        }
        let mut regions: Vec<NormalizedRegion> = self
            .regions
            .values()
            .map(|r| r.normalized(max_scroll))
            .collect();
        regions.sort_by(|a, b| a.start.total_cmp(&b.start));
        regions
    }
}
