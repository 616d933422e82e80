/// Easing curves applied to a tween's interpolation parameter.
///
/// Entrances in scrubbed programs are usually `Linear` (the scrub itself is
/// the motion), exits lean on `InQuad`, and the snap tween uses `OutQuad`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    Smoothstep,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::Smoothstep => t * t * (3.0 - 2.0 * t),
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Self::Linear
    }
}
