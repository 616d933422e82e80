use crate::{
    core::NormalizedRegion,
    ease::Ease,
    error::{ScrollyError, ScrollyResult},
};

/// Centers closer than this are treated as equidistant when picking a snap
/// target, so normalization round-off cannot flip the choice.
const TIE_EPS: f64 = 1e-9;

/// Travel distance (normalized) at which the snap duration reaches its
/// configured maximum.
const DURATION_REF_DISTANCE: f64 = 0.25;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SnapDurationRange {
    pub min: f64,
    pub max: f64,
}

impl Default for SnapDurationRange {
    fn default() -> Self {
        Self {
            min: 0.15,
            max: 0.35,
        }
    }
}

/// Tunables for global snap coordination.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SnapConfig {
    /// Tolerance added to each side of a region's span when deciding
    /// membership, as a fraction of the normalized scroll range. Keeps the
    /// snap from flickering right at a region boundary.
    #[serde(default = "default_buffer")]
    pub buffer: f64,
    /// Seconds; scaled between `min` and `max` by travel distance.
    #[serde(default)]
    pub duration: SnapDurationRange,
    #[serde(default = "default_snap_ease")]
    pub ease: Ease,
}

fn default_buffer() -> f64 {
    0.02
}

fn default_snap_ease() -> Ease {
    Ease::OutQuad
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            buffer: default_buffer(),
            duration: SnapDurationRange::default(),
            ease: default_snap_ease(),
        }
    }
}

impl SnapConfig {
    pub fn validate(&self) -> ScrollyResult<()> {
        if !self.buffer.is_finite() || self.buffer < 0.0 || self.buffer >= 0.5 {
            return Err(ScrollyError::validation(
                "snap buffer must be in [0, 0.5)",
            ));
        }
        let d = self.duration;
        if !(d.min.is_finite() && d.max.is_finite() && d.min > 0.0 && d.min <= d.max) {
            return Err(ScrollyError::validation(
                "snap duration must satisfy 0 < min <= max",
            ));
        }
        Ok(())
    }
}

/// The outcome of one settle evaluation: where to go and how long to take.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SnapDecision {
    /// Normalized scroll position to land on.
    pub target: f64,
    pub duration_secs: f64,
}

/// Resolves a settled scroll position against the current pinned-region
/// snapshot: positions inside a buffered span pull to the nearest region
/// center, everything else is free scroll.
///
/// Stateless between evaluations; every settle re-resolves from a fresh
/// snapshot, since both the candidate position and the document extent move
/// under a live page.
#[derive(Clone, Copy, Debug, Default)]
pub struct SnapCoordinator {
    pub config: SnapConfig,
}

impl SnapCoordinator {
    pub fn new(config: SnapConfig) -> Self {
        Self { config }
    }

    /// Resolve candidate position `v` (normalized) to a snap target.
    ///
    /// Identity when the snapshot is empty or `v` lies outside every
    /// buffered span. Idempotent: resolving a resolved target returns it.
    pub fn resolve(&self, regions: &[NormalizedRegion], v: f64) -> f64 {
        if regions.is_empty() || !v.is_finite() {
            return v;
        }

        let b = self.config.buffer;
        let in_pinned = regions
            .iter()
            .any(|r| v >= r.start - b && v <= r.end + b);
        if !in_pinned {
            return v;
        }

        // Nearest center; `regions` arrives sorted by start, and only a
        // strict improvement replaces the running best, so distance ties go
        // to the first region in ascending start order -- unless exactly one
        // of the tied regions actually contains the position.
        let mut best = regions[0];
        for &r in &regions[1..] {
            let d_new = (r.center - v).abs();
            let d_best = (best.center - v).abs();
            if d_new + TIE_EPS < d_best {
                best = r;
            } else if (d_new - d_best).abs() <= TIE_EPS
                && contains(r, v)
                && !contains(best, v)
            {
                best = r;
            }
        }
        best.center
    }

    /// Full settle evaluation: `None` means leave the position alone.
    pub fn decide(&self, regions: &[NormalizedRegion], v: f64) -> Option<SnapDecision> {
        let target = self.resolve(regions, v);
        if target == v {
            return None;
        }
        let distance = (target - v).abs();
        let t = (distance / DURATION_REF_DISTANCE).min(1.0);
        let d = self.config.duration;
        let decision = SnapDecision {
            target,
            duration_secs: d.min + (d.max - d.min) * t,
        };
        tracing::trace!(from = v, target, duration = decision.duration_secs, "snap decision");
        Some(decision)
    }
}

fn contains(r: NormalizedRegion, v: f64) -> bool {
    r.start <= v && v <= r.end
}

/// Time-driven glide from the settled position to the snap target.
///
/// Retargetable: a new scroll gesture or anchor jump mid-snap starts over
/// from the currently sampled position, so the motion never jumps.
#[derive(Clone, Copy, Debug)]
pub struct SnapTween {
    from: f64,
    to: f64,
    start_secs: f64,
    duration_secs: f64,
    ease: Ease,
}

impl SnapTween {
    pub fn new(from: f64, to: f64, start_secs: f64, duration_secs: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start_secs,
            duration_secs: duration_secs.max(f64::EPSILON),
            ease,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn is_done(&self, now_secs: f64) -> bool {
        now_secs - self.start_secs >= self.duration_secs
    }

    pub fn sample(&self, now_secs: f64) -> f64 {
        let t = ((now_secs - self.start_secs) / self.duration_secs).clamp(0.0, 1.0);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    pub fn retarget(&mut self, now_secs: f64, new_to: f64, duration_secs: f64) {
        let current = self.sample(now_secs);
        *self = Self::new(current, new_to, now_secs, duration_secs, self.ease);
    }
}
