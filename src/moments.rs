use crate::recover::RecoveryError;

/// Largest absolute deviation tolerated between a supplied PDI and Mw/Mn
/// before the triple is rejected as inconsistent.
pub const CONSISTENCY_TOLERANCE: f64 = 1e-5;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
/// Partial moment information: any subset of {Mn, Mw, PDI} may be known.
pub struct MomentTriple {
    /// Number-average molar mass, E[X].
    pub mn: Option<f64>,
    /// Weight-average molar mass, E[X²]/E[X].
    pub mw: Option<f64>,
    /// Polydispersity index, Mw/Mn.
    pub pdi: Option<f64>,
}

#[derive(Clone, Copy, PartialEq, Debug)]
/// A completed triple. Only produced by [`MomentTriple::complete`].
pub struct Moments {
    pub mn: f64,
    pub mw: f64,
    pub pdi: f64,
}

impl MomentTriple {
    #[must_use]
    pub fn from_mn_mw(mn: f64, mw: f64) -> Self {
        Self {
            mn: Some(mn),
            mw: Some(mw),
            pdi: None,
        }
    }

    #[must_use]
    pub fn from_mn_pdi(mn: f64, pdi: f64) -> Self {
        Self {
            mn: Some(mn),
            pdi: Some(pdi),
            mw: None,
        }
    }

    #[must_use]
    pub fn from_mw_pdi(mw: f64, pdi: f64) -> Self {
        Self {
            mw: Some(mw),
            pdi: Some(pdi),
            mn: None,
        }
    }

    /// Derive whichever of the three quantities is missing via PDI = Mw/Mn.
    ///
    /// # Errors
    /// [`RecoveryError::InsufficientData`] when fewer than two quantities are
    /// known; [`RecoveryError::InconsistentMoments`] when all three are known
    /// but do not satisfy PDI ≈ Mw/Mn.
    pub fn complete(self) -> Result<Moments, RecoveryError> {
        match (self.mn, self.mw, self.pdi) {
            (Some(mn), Some(mw), Some(pdi)) => {
                let ratio = mw / mn;
                if (pdi - ratio).abs() < CONSISTENCY_TOLERANCE {
                    Ok(Moments { mn, mw, pdi })
                } else {
                    Err(RecoveryError::InconsistentMoments { pdi, ratio })
                }
            }
            (Some(mn), Some(mw), None) => Ok(Moments {
                mn,
                mw,
                pdi: mw / mn,
            }),
            (Some(mn), None, Some(pdi)) => Ok(Moments {
                mn,
                mw: pdi * mn,
                pdi,
            }),
            (None, Some(mw), Some(pdi)) => Ok(Moments {
                mn: mw / pdi,
                mw,
                pdi,
            }),
            _ => Err(RecoveryError::InsufficientData),
        }
    }
}

/// Zero out digitized density samples whose amplitude falls below `floor`.
/// Digitization noise near the baseline otherwise skews the moment sums.
pub fn apply_noise_floor(y: &mut [f64], floor: f64) {
    for value in y {
        if *value < floor {
            *value = 0.;
        }
    }
}

#[must_use]
/// Number- and weight-average molar masses of digitized density samples:
/// Mn = Σ(x·y)/Σy, Mw = Σ(x²·y)/Σ(x·y). The PDI is left to
/// [`MomentTriple::complete`].
///
/// # Panics
/// `x` and `y` must have equal length.
pub fn moments_from_density_samples(x: &[f64], y: &[f64]) -> MomentTriple {
    assert_eq!(x.len(), y.len());
    let weight: f64 = y.iter().sum();
    let first: f64 = x.iter().zip(y).map(|(&x, &y)| x * y).sum();
    let second: f64 = x.iter().zip(y).map(|(&x, &y)| x * x * y).sum();
    MomentTriple::from_mn_mw(first / weight, second / first)
}

#[cfg(test)]
mod tests {
    use crate::recover::RecoveryError;

    use super::{apply_noise_floor, moments_from_density_samples, MomentTriple};

    #[test]
    fn completes_each_missing_quantity() {
        let moments = MomentTriple::from_mn_mw(50., 60.).complete().unwrap();
        approx::assert_abs_diff_eq!(moments.pdi, 1.2);

        let moments = MomentTriple::from_mn_pdi(50., 1.2).complete().unwrap();
        approx::assert_abs_diff_eq!(moments.mw, 60.);

        let moments = MomentTriple::from_mw_pdi(60., 1.2).complete().unwrap();
        approx::assert_abs_diff_eq!(moments.mn, 50.);
    }

    #[test]
    fn consistent_triple_accepted() {
        let triple = MomentTriple {
            mn: Some(50.),
            mw: Some(60.),
            pdi: Some(1.2),
        };
        assert!(triple.complete().is_ok());
    }

    #[test]
    fn inconsistent_triple_rejected() {
        let triple = MomentTriple {
            mn: Some(50.),
            mw: Some(60.),
            pdi: Some(2.),
        };
        assert!(matches!(
            triple.complete(),
            Err(RecoveryError::InconsistentMoments { .. })
        ));
    }

    #[test]
    fn lone_quantity_rejected() {
        let triple = MomentTriple {
            pdi: Some(1.2),
            ..MomentTriple::default()
        };
        assert_eq!(triple.complete(), Err(RecoveryError::InsufficientData));
    }

    #[test]
    fn noise_floor_zeroes_small_samples() {
        let mut y = [0.001, 0.5, 0.009, 1.2];
        apply_noise_floor(&mut y, 0.01);
        assert_eq!(y, [0., 0.5, 0., 1.2]);
    }

    #[test]
    fn two_point_mass_moments() {
        let triple = moments_from_density_samples(&[10., 20.], &[1., 1.]);
        let moments = triple.complete().unwrap();
        approx::assert_abs_diff_eq!(moments.mn, 15.);
        approx::assert_abs_diff_eq!(moments.mw, 500. / 30.);
        approx::assert_abs_diff_eq!(moments.pdi, 10. / 9.);
    }
}
