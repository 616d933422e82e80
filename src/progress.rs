//! Scroll Progress Mapper: raw scroll offset -> per-section progress.
//!
//! Pure functions only; every consumer (timeline scrub, snap coordination,
//! the CLI simulator) maps positions through here so the behavior is
//! identical system-wide.

/// Progress of `offset` through a pinned span of length `span` starting at
/// `start`, clamped to `[0,1]`.
///
/// Exactly `0.0` at `start` and `1.0` at `start + span`, monotonic
/// non-decreasing in `offset`. A degenerate span (`span <= 0`, or any
/// non-finite input) yields a constant `0.0` rather than an error: an
/// unmeasurable section simply does not animate.
pub fn section_progress(offset: f64, start: f64, span: f64) -> f64 {
    if !offset.is_finite() || !start.is_finite() || !span.is_finite() || span <= 0.0 {
        return 0.0;
    }
    ((offset - start) / span).clamp(0.0, 1.0)
}

/// Normalized scroll position: `offset / max_scroll`, clamped to `[0,1]`.
///
/// A degenerate extent (`max_scroll <= 0`) yields `0.0`; callers treat that
/// document as un-snappable.
pub fn normalized_position(offset: f64, max_scroll: f64) -> f64 {
    section_progress(offset, 0.0, max_scroll)
}
