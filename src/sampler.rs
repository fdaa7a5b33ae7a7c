use crate::density::breit_wigner;
use crate::error::DalitzError;
use crate::kinematics::{contains, m23_lower};
use crate::parameters::{Bounds, PhysicalParameters};
use crate::point::Point;
use crate::settings::{Proposal, Settings};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed used when `Settings::seed` is left unset.
const DEFAULT_SEED: u64 = 10;

/// Result of one sampler run: the ordered accepted points plus the step
/// budget that produced them. Grows only during the run; owned by the
/// caller afterwards.
#[derive(Debug, Clone)]
pub struct SampleRun {
    /// Accepted (m12, m23) points in acceptance order.
    pub samples: Vec<Point>,
    /// Number of proposal steps attempted.
    pub trials: usize,
}

impl SampleRun {
    pub fn accepted(&self) -> usize {
        self.samples.len()
    }

    /// Fraction of proposal steps that were accepted. A very small value
    /// signals a poorly chosen delta, not an error.
    pub fn acceptance_ratio(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.samples.len() as f64 / self.trials as f64
        }
    }
}

/// Metropolis sampler over the kinematically allowed Dalitz region.
///
/// Holds the validated physical constants, the derived kinematic window
/// and the run settings; all state for one run (current point, RNG) is
/// local to that run, so a `Sampler` can drive independent runs from
/// independent RNGs concurrently.
#[derive(Debug, Clone)]
pub struct Sampler {
    pub parameters: PhysicalParameters,
    pub bounds: Bounds,
    pub settings: Settings,
}

impl Sampler {
    /// Validate the configuration and derive the kinematic window.
    /// All `Config` failures surface here, before any sampling step.
    pub fn new(parameters: PhysicalParameters, settings: Settings) -> Result<Self, DalitzError> {
        settings.validate()?;
        let bounds = Bounds::from_parameters(&parameters)?;
        Ok(Self {
            parameters,
            bounds,
            settings,
        })
    }

    /// Run with an internally seeded RNG (`Settings::seed`, or a fixed
    /// default). Identical seeds produce identical sample sequences.
    pub fn run(&self) -> Result<SampleRun, DalitzError> {
        let mut rng = StdRng::seed_from_u64(self.settings.seed.unwrap_or(DEFAULT_SEED));
        self.run_with(&mut rng)
    }

    /// Run with a caller-owned random source. The sampler never shares or
    /// stores the RNG; one exclusive stream per run.
    pub fn run_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SampleRun, DalitzError> {
        let params = &self.parameters;
        let bounds = &self.bounds;
        let delta = self.settings.delta;
        let num_samples = self.settings.num_samples;

        // Start on the lower boundary curve at a random m12: inside the
        // region by construction. Evaluating the curve here also confirms
        // the seed x is physical before any step runs. The density depends
        // on x alone, so x is the only state the walk carries.
        let x_seed = sample_initial_m12(rng, bounds.m12_min, bounds.m12_max);
        let _y_seed = m23_lower(x_seed, params)?;
        let mut x = x_seed;

        let mut samples = Vec::with_capacity(num_samples / 4);

        for _ in 0..num_samples {
            let u = 2.0 * rng.gen::<f64>() - 1.0;
            let anchor = match self.settings.proposal {
                Proposal::RandomWalk => x,
                Proposal::AnchoredSeed => x_seed,
            };
            let x_new = anchor + delta * u;
            let y_new = rng.gen::<f64>() * bounds.m23_max;

            if !contains(bounds.m12_min, bounds.m12_max, x_new, y_new, params) {
                continue;
            }

            let ratio = breit_wigner(x_new, params.m_resonance, params.gamma, params.a2)
                / breit_wigner(x, params.m_resonance, params.gamma, params.a2);
            if ratio >= rng.gen::<f64>() {
                x = x_new;
                samples.push(Point::new(x_new, y_new));
            } else if self.settings.proposal == Proposal::AnchoredSeed {
                // Historical rejection policy: x falls back to the anchor.
                x = x_new - delta * u;
            }
        }

        Ok(SampleRun {
            samples,
            trials: num_samples,
        })
    }
}

/// Draw the initial m12 by rejection: uniform draws scaled to m12_max until
/// one clears m12_min. Terminates with probability one because validated
/// bounds satisfy m12_min < m12_max.
fn sample_initial_m12<R: Rng + ?Sized>(rng: &mut R, m12_min: f64, m12_max: f64) -> f64 {
    loop {
        let candidate = rng.gen::<f64>() * m12_max;
        if candidate > m12_min {
            return candidate;
        }
    }
}
