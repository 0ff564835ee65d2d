/// Easing curves mapping linear progress in `[0, 1]` to eased progress in `[0, 1]`.
///
/// Every variant is monotonically non-decreasing with `apply(0) == 0` and
/// `apply(1) == 1`. Inputs are clamped before evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    /// Cubic in for the first half, cubic out for the second (slow-fast-slow).
    #[default]
    InOutCubic,
    /// Quadratic in for the first half, cubic out for the second.
    InQuadOutCubic,
}

impl Ease {
    /// All easing variants, in declaration order.
    pub const ALL: [Ease; 8] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InQuadOutCubic,
    ];

    pub fn apply(self, t: f64) -> f64 {
        let t = crate::foundation::core::clamp_unit(t);
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
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InQuadOutCubic => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

/// Default engine easing: [`Ease::InOutCubic`].
pub fn ease(t: f64) -> f64 {
    Ease::default().apply(t)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
