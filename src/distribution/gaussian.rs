use std::ops::RangeInclusive;

use super::MolarMassDensity;
use crate::moments::Moments;
use crate::recover::RecoveryError;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Gaussian {
    pub μ: f64,
    /// The variance-like denominator of exp(-(x - μ)² / 2σ), _not_ a
    /// standard deviation.
    pub σ: f64,
}

impl Gaussian {
    /// Multiple of √σ on either side of the mean covered by
    /// [`extent`](MolarMassDensity::extent).
    const EXTENT_WIDTHS: f64 = 10.;

    /// Closed-form moment matching: μ = Mn, σ = Mn·(Mw − Mn).
    ///
    /// # Errors
    /// [`RecoveryError::MomentsOutOfDomain`] unless 0 < Mn < Mw (σ would
    /// otherwise be non-positive, leaving the density ill-defined).
    pub fn from_moments(moments: &Moments) -> Result<Self, RecoveryError> {
        let &Moments { mn, mw, .. } = moments;
        if !(mn > 0. && mw > mn) {
            return Err(RecoveryError::MomentsOutOfDomain { mn, mw });
        }
        Ok(Self {
            μ: mn,
            σ: mn * (mw - mn),
        })
    }
}

impl MolarMassDensity for Gaussian {
    #[inline]
    fn evaluate(&self, x: f64) -> f64 {
        (-(x - self.μ) * (x - self.μ) / (2. * self.σ)).exp()
    }

    fn mode(&self) -> f64 {
        self.μ
    }

    fn extent(&self) -> RangeInclusive<f64> {
        let width = Self::EXTENT_WIDTHS * self.σ.sqrt();
        (self.μ - width)..=(self.μ + width)
    }
}

#[cfg(test)]
mod tests {
    use super::{Gaussian, MolarMassDensity};
    use crate::moments::{moments_from_density_samples, Moments};
    use crate::recover::RecoveryError;

    fn from_mn_mw(mn: f64, mw: f64) -> Result<Gaussian, RecoveryError> {
        Gaussian::from_moments(&Moments {
            mn,
            mw,
            pdi: mw / mn,
        })
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn closed_form_moment_matching() {
        let gaussian = from_mn_mw(50., 60.).unwrap();
        assert!(gaussian.μ == 50. && gaussian.σ == 500.);
    }

    #[test]
    fn rejects_out_of_domain_moments() {
        for (mn, mw) in [(50., 50.), (50., 40.), (-10., 60.), (0., 60.)] {
            assert!(matches!(
                from_mn_mw(mn, mw),
                Err(RecoveryError::MomentsOutOfDomain { .. })
            ));
        }
    }

    #[test]
    fn unit_peak_and_symmetry() {
        let gaussian = from_mn_mw(50., 60.).unwrap();
        approx::assert_abs_diff_eq!(gaussian.evaluate(50.), 1.);
        for offset in [0.5, 5., 20., 75.] {
            approx::assert_abs_diff_eq!(
                gaussian.evaluate(50. - offset),
                gaussian.evaluate(50. + offset)
            );
        }
    }

    /// Moments computed by discrete summation over a sampled analytic
    /// density must recover (μ, σ) increasingly well as the grid refines.
    #[test]
    fn grid_moment_round_trip() {
        let reference = Gaussian { μ: 50., σ: 100. };
        let σ_error = |resolution: usize| {
            #[allow(clippy::cast_precision_loss)]
            let step = 100. / (resolution - 1) as f64;
            #[allow(clippy::cast_precision_loss)]
            let (x, y): (Vec<_>, Vec<_>) = (0..resolution)
                .map(|i| {
                    let x = i as f64 * step;
                    (x, reference.evaluate(x))
                })
                .unzip();
            let moments = moments_from_density_samples(&x, &y).complete().unwrap();
            let recovered = Gaussian::from_moments(&moments).unwrap();
            (recovered.σ - reference.σ).abs() / reference.σ
        };

        let errors = [1_000, 10_000, 100_000].map(σ_error);
        assert!(errors.iter().all(|&e| e < 0.01), "errors: {errors:?}");
        assert!(errors[2] <= errors[0] + 1e-9, "errors: {errors:?}");
    }
}
