//! Error types for Dalitz plot sampling.
//!
//! Three failure kinds: configuration rejected at construction, the
//! m12 = 0 singularity in the energy functions, and kinematically
//! forbidden m12 values (negative radicand in the boundary curves).

use std::error::Error;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum DalitzError {
    /// Invalid physical parameters or run settings. Detected once at
    /// sampler construction and fatal to the run.
    Config {
        /// Human-readable description of the rejected configuration.
        reason: String,
    },
    /// Arithmetic singularity: an energy function was evaluated at m12 = 0.
    /// Cannot happen for a validated configuration but is checked rather
    /// than propagated as infinity.
    Domain {
        /// The offending m12 value.
        m12: f64,
    },
    /// A boundary curve was evaluated at an m12 outside the physically
    /// allowed range (E2² < m2² or E3² < m3², negative radicand).
    Kinematic {
        /// The offending m12 value.
        m12: f64,
    },
}

impl fmt::Display for DalitzError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { reason } => write!(f, "invalid configuration: {reason}"),
            Self::Domain { m12 } => {
                write!(f, "energy function evaluated at singular m12 = {m12}")
            }
            Self::Kinematic { m12 } => {
                write!(f, "m12 = {m12} outside the kinematically allowed range")
            }
        }
    }
}

impl Error for DalitzError {}

impl DalitzError {
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
