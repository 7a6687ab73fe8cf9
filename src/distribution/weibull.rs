use std::ops::RangeInclusive;

use tracing::debug;

use super::MolarMassDensity;
use crate::moments::Moments;
use crate::numerics::gamma::ln_gamma;
use crate::numerics::root_finding::{self, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use crate::recover::RecoveryError;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Weibull {
    /// Shape parameter.
    pub k: f64,
    /// Scale parameter.
    pub λ: f64,
}

/// Residual of the implicit shape equation: the moment ratio of a Weibull
/// distribution with shape `k`, minus the target ratio `pdi`.
///
/// Mw/Mn = 2k·Γ(2/k) / Γ(1/k)², evaluated in log space so that the small-k
/// tail (where Γ(1/k) overflows) still yields a usable sign.
#[must_use]
pub fn shape_residual(k: f64, pdi: f64) -> f64 {
    let ln_ratio = (2. * k).ln() + ln_gamma(2. / k) - 2. * ln_gamma(1. / k);
    ln_ratio.exp() - pdi
}

/// The explicit scale equation: λ = Mn·k / Γ(1/k).
#[must_use]
pub fn scale_from_shape(mn: f64, k: f64) -> f64 {
    mn * (k.ln() - ln_gamma(1. / k)).exp()
}

impl Weibull {
    /// Starting point for the shape solve. The shape equation has a unique
    /// positive root, so any guess within bracketing reach works; k = 1 (the
    /// exponential special case) is a neutral default.
    const INITIAL_SHAPE_GUESS: f64 = 1.;

    /// Reduce the 2-D moment-matching system to a 1-D root-find in k (the
    /// scale then follows explicitly), seeded at
    /// [`Self::INITIAL_SHAPE_GUESS`].
    ///
    /// # Errors
    /// [`RecoveryError::MomentsOutOfDomain`] unless 0 < Mn < Mw (PDI = 1 is
    /// degenerate); [`RecoveryError::ConvergenceFailed`] if the shape solve
    /// exhausts its budget.
    pub fn from_moments(moments: &Moments) -> Result<Self, RecoveryError> {
        let &Moments { mn, mw, .. } = moments;
        if !(mn > 0. && mw > mn) {
            return Err(RecoveryError::MomentsOutOfDomain { mn, mw });
        }
        let ratio = mw / mn;
        let k = root_finding::find_positive_root(
            |k| shape_residual(k, ratio),
            Self::INITIAL_SHAPE_GUESS,
            DEFAULT_TOLERANCE,
            DEFAULT_MAX_ITERATIONS,
        )?;
        let λ = scale_from_shape(mn, k);
        debug!(k, λ, "solved Weibull parameters");
        Ok(Self { k, λ })
    }

    #[must_use]
    /// Inverse CDF of the (normalized) distribution.
    pub fn quantile(&self, p: f64) -> f64 {
        self.λ * (-(1. - p).ln()).powf(self.k.recip())
    }
}

impl MolarMassDensity for Weibull {
    #[inline]
    fn evaluate(&self, x: f64) -> f64 {
        if x < 0. {
            return 0.;
        }
        let t = x / self.λ;
        (self.k / self.λ) * t.powf(self.k - 1.) * (-t.powf(self.k)).exp()
    }

    fn mode(&self) -> f64 {
        if self.k > 1. {
            self.λ * ((self.k - 1.) / self.k).powf(self.k.recip())
        } else {
            0.
        }
    }

    fn extent(&self) -> RangeInclusive<f64> {
        self.quantile(1e-9)..=self.quantile(1. - 1e-9)
    }
}
