#![warn(clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::module_name_repetitions)]

//! Recovery of continuous polymer molar-mass distributions from summary
//! statistics (Mn, Mw, PDI), for sampling individual chain masses.

pub mod distribution;
pub mod moments;
pub mod numerics;
pub mod recover;
pub mod sampling;

pub use distribution::RecoveredDensity;
pub use moments::{MomentTriple, Moments};
pub use recover::{recover, Family, RecoveryError};
