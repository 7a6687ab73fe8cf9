use itertools::Itertools;
use rand::{Rng, RngExt};

use crate::distribution::MolarMassDensity;

/// Grid points used to discretize the CDF when none is specified.
pub const DEFAULT_RESOLUTION: usize = 2_048;

/// Draw `count` molar masses from `density` by inverse-transform sampling on
/// a discretized CDF.
///
/// The density is evaluated on a uniform grid spanning its
/// [`extent`](MolarMassDensity::extent), integrated by the trapezoid rule
/// into a cumulative table, and each uniform draw is mapped through the
/// inverse by binary search with linear interpolation. Only
/// [`evaluate`](MolarMassDensity::evaluate) is required, so unnormalized
/// densities sample correctly.
///
/// # Panics
/// `resolution` must be at least 2, and `density` must have nonzero mass
/// over its extent.
pub fn sample_masses<R: Rng + ?Sized>(
    density: &impl MolarMassDensity,
    count: usize,
    resolution: usize,
    rng: &mut R,
) -> Vec<f64> {
    assert!(resolution >= 2, "resolution must be at least 2");
    let (start, end) = density.extent().into_inner();
    #[allow(clippy::cast_precision_loss)]
    let step = (end - start) / (resolution - 1) as f64;

    #[allow(clippy::cast_precision_loss)]
    let values = (0..resolution)
        .map(|i| density.evaluate(start + i as f64 * step))
        .collect_vec();
    let mut cumulative = Vec::with_capacity(resolution);
    let mut accumulated = 0.;
    cumulative.push(0.);
    for (y0, y1) in values.iter().tuple_windows() {
        accumulated += 0.5 * (y0 + y1) * step;
        cumulative.push(accumulated);
    }
    let total = accumulated;
    assert!(total > 0., "density has no mass over its extent");

    (0..count)
        .map(|_| {
            let target = rng.random::<f64>() * total;
            let cell = cumulative
                .partition_point(|&c| c < target)
                .clamp(1, resolution - 1);
            let (c0, c1) = (cumulative[cell - 1], cumulative[cell]);
            let fraction = if c1 > c0 { (target - c0) / (c1 - c0) } else { 0.5 };
            #[allow(clippy::cast_precision_loss)]
            let offset = ((cell - 1) as f64 + fraction) * step;
            start + offset
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{sample_masses, DEFAULT_RESOLUTION};
    use crate::distribution::gaussian::Gaussian;
    use crate::distribution::weibull::Weibull;
    use crate::moments::Moments;

    fn mean(samples: &[f64]) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let count = samples.len() as f64;
        samples.iter().sum::<f64>() / count
    }

    #[test]
    fn gaussian_sample_mean_near_mode() {
        let gaussian = Gaussian::from_moments(&Moments {
            mn: 50.,
            mw: 52.,
            pdi: 1.04,
        })
        .unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let samples = sample_masses(&gaussian, 4_000, DEFAULT_RESOLUTION, &mut rng);
        assert_eq!(samples.len(), 4_000);
        approx::assert_abs_diff_eq!(mean(&samples), 50., epsilon = 1.);
    }

    #[test]
    fn weibull_samples_nonnegative_with_mean_near_mn() {
        let weibull = Weibull::from_moments(&Moments {
            mn: 50.,
            mw: 60.,
            pdi: 1.2,
        })
        .unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let samples = sample_masses(&weibull, 4_000, DEFAULT_RESOLUTION, &mut rng);
        assert!(samples.iter().all(|&mass| mass >= 0.));
        approx::assert_abs_diff_eq!(mean(&samples), 50., epsilon = 2.);
    }

    #[test]
    fn zero_count_yields_no_samples() {
        let weibull = Weibull { k: 2., λ: 40. };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(sample_masses(&weibull, 0, DEFAULT_RESOLUTION, &mut rng).is_empty());
    }
}
