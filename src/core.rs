use crate::error::{ScrollyError, ScrollyResult};

pub use kurbo::{Affine, Vec2};

/// A scroll-offset span during which a section occupies the full viewport,
/// in absolute scroll units (CSS pixels or any device-independent unit).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PinnedRegion {
    pub start: f64,
    pub end: f64,
}

impl PinnedRegion {
    pub fn new(start: f64, end: f64) -> ScrollyResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ScrollyError::geometry("PinnedRegion bounds must be finite"));
        }
        if start >= end {
            return Err(ScrollyError::geometry("PinnedRegion start must be < end"));
        }
        Ok(Self { start, end })
    }

    pub fn span(self) -> f64 {
        self.end - self.start
    }

    pub fn center(self) -> f64 {
        self.start + (self.end - self.start) * 0.5
    }

    pub fn contains(self, offset: f64) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// Normalized form against the document scroll extent. The caller is
    /// responsible for rejecting a degenerate extent first (see
    /// `PinRegistry::snapshot`).
    pub fn normalized(self, max_scroll: f64) -> NormalizedRegion {
        NormalizedRegion {
            start: self.start / max_scroll,
            end: self.end / max_scroll,
            center: self.center() / max_scroll,
        }
    }
}

/// A pinned region divided through by `max_scroll`; all fields in `[0,1]`
/// for in-document regions.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct NormalizedRegion {
    pub start: f64,
    pub end: f64,
    pub center: f64,
}

/// Read-only scroll-position inputs, fed by the host on scroll/resize.
///
/// `max_offset` is the document scroll extent minus the viewport height; a
/// value `<= 0` means the document is too short to scroll and disables snap
/// coordination entirely.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub max_offset: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn scrollable(self) -> bool {
        self.max_offset.is_finite() && self.max_offset > 0.0
    }
}

impl Default for ScrollMetrics {
    fn default() -> Self {
        Self {
            offset: 0.0,
            max_offset: 0.0,
            viewport_height: 0.0,
        }
    }
}

/// Measured layout of a section's container, as reported by the host on a
/// layout pass. `height <= 0` means the container is not yet measurable.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContainerBounds {
    /// Document offset at which the section's top reaches the viewport top.
    pub top: f64,
    pub height: f64,
}

impl ContainerBounds {
    pub fn measurable(self) -> bool {
        self.top.is_finite() && self.height.is_finite() && self.height > 0.0
    }
}

/// The three progress phases of a section's keyframe program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Entrance,
    Hold,
    Exit,
}

/// Phase boundaries on the `[0,1]` progress axis: entrance runs to
/// `entrance_end`, exit starts at `exit_start`, with the hold zone between.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhaseWindows {
    pub entrance_end: f64,
    pub exit_start: f64,
}

impl Default for PhaseWindows {
    fn default() -> Self {
        Self {
            entrance_end: 0.30,
            exit_start: 0.70,
        }
    }
}

impl PhaseWindows {
    pub fn validate(self) -> ScrollyResult<()> {
        let ok = self.entrance_end > 0.0
            && self.entrance_end < self.exit_start
            && self.exit_start < 1.0;
        if !ok {
            return Err(ScrollyError::validation(
                "phase windows must satisfy 0 < entrance_end < exit_start < 1",
            ));
        }
        Ok(())
    }

    pub fn phase_of(self, progress: f64) -> Phase {
        if progress < self.entrance_end {
            Phase::Entrance
        } else if progress < self.exit_start {
            Phase::Hold
        } else {
            Phase::Exit
        }
    }
}
