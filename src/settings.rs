use crate::error::DalitzError;

/// How candidate m12 values are proposed and how rejections are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Proposal {
    /// Textbook Metropolis: perturb around the current x; a rejected step
    /// leaves the state untouched.
    #[default]
    RandomWalk,
    /// Anchor every proposal at the run's initial x. A rejected step resets
    /// x to that anchor but keeps the rejected candidate's y (sticky-x /
    /// drifting-y). Not a true Markov chain; provided to reproduce the
    /// historical behavior of the reference simulation.
    AnchoredSeed,
}

/// Per-run sampler configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Number of proposal steps to attempt.
    pub num_samples: usize,
    /// Half-width of the uniform m12 proposal window.
    pub delta: f64,
    /// RNG seed; `None` leaves seeding to the entry point's default.
    pub seed: Option<u64>,
    /// Proposal/rejection policy.
    pub proposal: Proposal,
}

impl Settings {
    pub fn new(num_samples: usize, delta: f64) -> Self {
        Self {
            num_samples,
            delta,
            seed: None,
            proposal: Proposal::default(),
        }
    }

    /// Validate run parameters. A non-positive delta cannot explore the
    /// domain and is rejected before any sampling step executes.
    pub fn validate(&self) -> Result<(), DalitzError> {
        if !(self.delta > 0.0) {
            return Err(DalitzError::config(format!(
                "delta must be positive, got {}",
                self.delta
            )));
        }
        Ok(())
    }
}
