use crate::{
    core::PhaseWindows,
    error::{ScrollyError, ScrollyResult},
    snap::SnapConfig,
    timeline::{SectionTimeline, Tween},
};

/// Per-section tunables.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionConfig {
    /// Pinned span length in viewport-height multiples: `1.3` pins the
    /// section for 130% of one viewport of scrolling.
    #[serde(default = "default_pin_span")]
    pub pin_span: f64,
    #[serde(default = "default_entrance_end")]
    pub entrance_end: f64,
    #[serde(default = "default_exit_start")]
    pub exit_start: f64,
}

fn default_pin_span() -> f64 {
    1.3
}

fn default_entrance_end() -> f64 {
    0.30
}

fn default_exit_start() -> f64 {
    0.70
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            pin_span: default_pin_span(),
            entrance_end: default_entrance_end(),
            exit_start: default_exit_start(),
        }
    }
}

impl SectionConfig {
    pub fn phases(&self) -> PhaseWindows {
        PhaseWindows {
            entrance_end: self.entrance_end,
            exit_start: self.exit_start,
        }
    }

    pub fn validate(&self) -> ScrollyResult<()> {
        if !self.pin_span.is_finite() || self.pin_span <= 0.0 {
            return Err(ScrollyError::validation("pin_span must be > 0"));
        }
        self.phases().validate()
    }
}

/// One narrative section: identity, tunables, and its keyframe program.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SectionSpec {
    pub id: String,
    #[serde(default)]
    pub config: SectionConfig,
    #[serde(default)]
    pub tweens: Vec<Tween>,
}

impl SectionSpec {
    pub fn timeline(&self) -> SectionTimeline {
        SectionTimeline {
            id: self.id.clone(),
            phases: self.config.phases(),
            tweens: self.tweens.clone(),
        }
    }
}

/// The whole narrative as data: every section plus the global snap tunables.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Storyboard {
    pub sections: Vec<SectionSpec>,
    #[serde(default)]
    pub snap: SnapConfig,
}

impl Storyboard {
    pub fn from_json(json: &str) -> ScrollyResult<Self> {
        let board: Self = serde_json::from_str(json)
            .map_err(|e| ScrollyError::validation(format!("storyboard JSON: {e}")))?;
        board.validate()?;
        Ok(board)
    }

    pub fn validate(&self) -> ScrollyResult<()> {
        self.snap.validate()?;

        let mut seen = std::collections::BTreeSet::new();
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) {
                return Err(ScrollyError::validation(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
            section.config.validate()?;
            section.timeline().validate()?;
        }
        Ok(())
    }
}
