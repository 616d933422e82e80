use crate::{
    core::{ContainerBounds, PinnedRegion, ScrollMetrics},
    error::{ScrollyError, ScrollyResult},
    progress::{normalized_position, section_progress},
    registry::PinRegistry,
    snap::{SnapCoordinator, SnapDecision},
    storyboard::{SectionConfig, Storyboard},
    timeline::{SectionFrame, SectionTimeline},
};

/// Outcome of a section activation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Region registered; the section is now pinned and scrubbing.
    Activated,
    /// Geometry not yet measurable; retry on the next layout pass.
    Deferred,
    /// The engine was already torn down; nothing happened.
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SectionState {
    /// Mounted, not yet measurable.
    Pending,
    Active,
    Released,
}

struct SectionRuntime {
    timeline: SectionTimeline,
    config: SectionConfig,
    state: SectionState,
    /// The readiness barrier counts sections that have registered at least
    /// once, so snap coordination never races asynchronous mounting.
    registered_once: bool,
}

/// Everything the host needs to paint one frame.
#[derive(Clone, Debug, serde::Serialize)]
pub struct FrameUpdate {
    pub offset: f64,
    pub sections: Vec<SectionFrame>,
}

/// Owns the whole scroll narrative at runtime: section lifecycles, the pin
/// registry, and global snap coordination.
///
/// Single-threaded and frame-driven. Scroll handlers call [`record_scroll`]
/// (cheap, no computation); the host's animation-frame callback calls
/// [`tick`]; a scroll-momentum settle calls [`settle`]. Within one frame,
/// `tick` runs before `settle`, so snap decisions always see current-frame
/// geometry. After [`teardown`], every entry point is a guaranteed no-op via
/// the liveness flag.
///
/// [`record_scroll`]: Engine::record_scroll
/// [`tick`]: Engine::tick
/// [`settle`]: Engine::settle
/// [`teardown`]: Engine::teardown
pub struct Engine {
    registry: PinRegistry,
    snap: SnapCoordinator,
    sections: Vec<SectionRuntime>,
    metrics: ScrollMetrics,
    pending_offset: Option<f64>,
    live: bool,
}

impl Engine {
    pub fn new(storyboard: &Storyboard) -> ScrollyResult<Self> {
        storyboard.validate()?;
        let sections = storyboard
            .sections
            .iter()
            .map(|spec| SectionRuntime {
                timeline: spec.timeline(),
                config: spec.config,
                state: SectionState::Pending,
                registered_once: false,
            })
            .collect();

        Ok(Self {
            registry: PinRegistry::new(),
            snap: SnapCoordinator::new(storyboard.snap),
            sections,
            metrics: ScrollMetrics::default(),
            pending_offset: None,
            live: true,
        })
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    /// Document extent or viewport changed (late image load, window resize).
    /// Absolute regions are untouched; normalized coordinates rescale at the
    /// next snapshot.
    pub fn resize(&mut self, max_offset: f64, viewport_height: f64) {
        if !self.live {
            return;
        }
        self.metrics.max_offset = max_offset;
        self.metrics.viewport_height = viewport_height;
        tracing::debug!(max_offset, viewport_height, "viewport resized");
    }

    /// Record the raw scroll position. Called from the scroll handler, which
    /// must stay cheap: interpolation is deferred to the next [`Engine::tick`].
    /// An anchor jump is just a recorded offset followed by a settle.
    pub fn record_scroll(&mut self, offset: f64) {
        if !self.live || !offset.is_finite() {
            return;
        }
        self.pending_offset = Some(offset);
    }

    /// Register the section's pinned region from measured layout.
    ///
    /// Idempotent: re-activating (or activating after a remount) upserts the
    /// same registry entry, never duplicating it. Unmeasurable geometry
    /// defers rather than fails; the host retries on the next layout pass,
    /// and any previously registered region is withdrawn until the section
    /// measures again.
    pub fn activate_section(
        &mut self,
        id: &str,
        bounds: ContainerBounds,
    ) -> ScrollyResult<Activation> {
        if !self.live {
            return Ok(Activation::Ignored);
        }
        let viewport_height = self.metrics.viewport_height;
        let Some(runtime) = self.sections.iter_mut().find(|s| s.timeline.id == id) else {
            return Err(ScrollyError::validation(format!(
                "unknown section id '{id}'"
            )));
        };

        if !bounds.measurable() || !(viewport_height > 0.0) {
            tracing::debug!(%id, "activation deferred: geometry not measurable");
            // A stale region must not keep attracting snaps while the
            // section is pending re-measurement; tick and settle must agree
            // on which sections are live.
            self.registry.unregister(id);
            runtime.state = SectionState::Pending;
            return Ok(Activation::Deferred);
        }

        let span = runtime.config.pin_span * viewport_height;
        let region = PinnedRegion::new(bounds.top, bounds.top + span)?;
        self.registry.register(id, region);
        runtime.state = SectionState::Active;
        runtime.registered_once = true;
        Ok(Activation::Activated)
    }

    /// Remove the section's region and stop scrubbing it. Safe to call
    /// repeatedly; unknown ids are ignored.
    pub fn deactivate_section(&mut self, id: &str) {
        self.registry.unregister(id);
        if let Some(runtime) = self.sections.iter_mut().find(|s| s.timeline.id == id) {
            runtime.state = SectionState::Released;
        }
    }

    /// True once every storyboard section has registered its region at least
    /// once. Snap coordination is gated on this instead of a fixed settling
    /// delay, so a slow-mounting section can never race the coordinator.
    pub fn snap_ready(&self) -> bool {
        self.live && self.sections.iter().all(|s| s.registered_once)
    }

    /// Per-frame evaluation: consume the recorded scroll position and sample
    /// every active section's timeline at its current progress.
    ///
    /// Returns `None` after teardown (a stale animation-frame callback is a
    /// no-op).
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn tick(&mut self) -> Option<FrameUpdate> {
        if !self.live {
            return None;
        }
        if let Some(offset) = self.pending_offset.take() {
            self.metrics.offset = offset;
        }
        let offset = self.metrics.offset;

        let mut frames = Vec::new();
        for runtime in &self.sections {
            if runtime.state != SectionState::Active {
                continue;
            }
            let Some(region) = self.registry.get(&runtime.timeline.id) else {
                continue;
            };
            let progress = section_progress(offset, region.start, region.span());
            frames.push(runtime.timeline.sample(progress));
        }

        Some(FrameUpdate {
            offset,
            sections: frames,
        })
    }

    /// Snap evaluation at scroll-momentum settle.
    ///
    /// `None` when: torn down, sections still registering (readiness
    /// barrier), the document cannot scroll, or the position resolves to
    /// itself (free zone / already centered). Never cached: each settle
    /// re-reads the registry snapshot at the current extent.
    pub fn settle(&mut self) -> Option<SnapDecision> {
        if !self.live {
            return None;
        }
        if let Some(offset) = self.pending_offset.take() {
            self.metrics.offset = offset;
        }
        if !self.snap_ready() || !self.metrics.scrollable() {
            return None;
        }

        let snapshot = self.registry.snapshot(self.metrics.max_offset);
        let v = normalized_position(self.metrics.offset, self.metrics.max_offset);
        self.snap.decide(&snapshot, v)
    }

    /// Normalized position -> absolute scroll offset under current metrics.
    pub fn to_offset(&self, normalized: f64) -> f64 {
        normalized * self.metrics.max_offset
    }

    /// Release everything synchronously: regions, recorded input, and the
    /// liveness flag. Later-arriving callbacks for this engine are no-ops.
    pub fn teardown(&mut self) {
        tracing::debug!("engine teardown");
        self.registry.clear();
        for runtime in &mut self.sections {
            runtime.state = SectionState::Released;
        }
        self.pending_offset = None;
        self.live = false;
    }
}
