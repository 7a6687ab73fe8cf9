use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::distribution::gaussian::Gaussian;
use crate::distribution::weibull::Weibull;
use crate::distribution::RecoveredDensity;
use crate::moments::MomentTriple;
use crate::numerics::root_finding::NoConvergence;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// The candidate distribution families. Closed set: adding a family means
/// adding a parameter-solving procedure.
pub enum Family {
    Gaussian,
    Weibull,
}

impl FromStr for Family {
    type Err = RecoveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gaussian" => Ok(Self::Gaussian),
            "weibull" => Ok(Self::Weibull),
            _ => Err(RecoveryError::UnknownFamily(s.to_owned())),
        }
    }
}

#[derive(Clone, PartialEq, Error, Debug)]
pub enum RecoveryError {
    #[error("unrecognized distribution family `{0}` (expected `gaussian` or `weibull`)")]
    UnknownFamily(String),
    #[error("at least two of Mn, Mw, and PDI must be supplied")]
    InsufficientData,
    #[error("supplied PDI {pdi} is inconsistent with Mw/Mn = {ratio}")]
    InconsistentMoments { pdi: f64, ratio: f64 },
    #[error("moments Mn = {mn}, Mw = {mw} are outside the family's domain (0 < Mn < Mw required)")]
    MomentsOutOfDomain { mn: f64, mw: f64 },
    #[error(
        "shape solve did not converge: k = {last_iterate}, residual {residual} \
         after {iterations} iterations"
    )]
    ConvergenceFailed {
        last_iterate: f64,
        residual: f64,
        iterations: u32,
    },
}

impl From<NoConvergence> for RecoveryError {
    fn from(failure: NoConvergence) -> Self {
        Self::ConvergenceFailed {
            last_iterate: failure.last_iterate,
            residual: failure.residual,
            iterations: failure.iterations,
        }
    }
}

/// Complete the partial moment information and solve the selected family's
/// parameters so that the returned density reproduces the moments.
///
/// # Errors
/// Every failure mode is scoped to this call and distinguishable:
/// [`RecoveryError::InsufficientData`] and
/// [`RecoveryError::InconsistentMoments`] from moment completion,
/// [`RecoveryError::MomentsOutOfDomain`] and
/// [`RecoveryError::ConvergenceFailed`] from the family solve. The solve is
/// never retried with a different starting point internally; a caller may.
pub fn recover(triple: MomentTriple, family: Family) -> Result<RecoveredDensity, RecoveryError> {
    let moments = triple.complete()?;
    let density = match family {
        Family::Gaussian => RecoveredDensity::Gaussian(Gaussian::from_moments(&moments)?),
        Family::Weibull => RecoveredDensity::Weibull(Weibull::from_moments(&moments)?),
    };
    debug!(mn = moments.mn, mw = moments.mw, %density, "recovered distribution");
    Ok(density)
}
