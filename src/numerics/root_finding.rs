use tracing::trace;

/// Residual magnitude below which an iterate is accepted as a root.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Doublings/halvings attempted while searching for a sign change.
const MAX_BRACKET_EXPANSIONS: u32 = 60;

#[derive(Clone, Copy, PartialEq, Debug)]
/// A failed 1-D solve, carrying the last iterate for diagnostics.
pub struct NoConvergence {
    pub last_iterate: f64,
    pub residual: f64,
    pub iterations: u32,
}

/// Find a root of `f` on the positive half-line by expanding a geometric
/// bracket around `guess` until the residual changes sign, then bisecting.
///
/// Terminates after at most `MAX_BRACKET_EXPANSIONS` expansions plus
/// `max_iterations` bisection steps, whichever budget runs out first.
///
/// # Panics
/// `guess` must be positive.
pub fn find_positive_root(
    f: impl Fn(f64) -> f64,
    guess: f64,
    tolerance: f64,
    max_iterations: u32,
) -> Result<f64, NoConvergence> {
    assert!(guess > 0., "initial guess must be positive");

    let f_guess = f(guess);
    if f_guess.abs() < tolerance {
        return Ok(guess);
    }

    let (mut lo, mut hi) = (guess, guess);
    let (mut f_lo, mut f_hi) = (f_guess, f_guess);
    let mut expansions = 0;
    while f_lo.signum() == f_hi.signum() {
        if expansions == MAX_BRACKET_EXPANSIONS {
            return Err(NoConvergence {
                last_iterate: hi,
                residual: f_hi,
                iterations: expansions,
            });
        }
        lo /= 2.;
        hi *= 2.;
        f_lo = f(lo);
        f_hi = f(hi);
        expansions += 1;
        trace!(lo, hi, f_lo, f_hi, "expanding bracket");
    }

    let mut mid = f64::midpoint(lo, hi);
    let mut f_mid = f(mid);
    for iteration in 0..max_iterations {
        trace!(iteration, mid, residual = f_mid, "bisection step");
        if f_mid.abs() < tolerance {
            return Ok(mid);
        }
        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
        mid = f64::midpoint(lo, hi);
        f_mid = f(mid);
    }

    Err(NoConvergence {
        last_iterate: mid,
        residual: f_mid,
        iterations: max_iterations,
    })
}
