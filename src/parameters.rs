use crate::error::DalitzError;
use crate::kinematics::m23_upper;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Physical constants of one three-body decay channel.
///
/// Masses and the resonance width are in a consistent energy unit (MeV for
/// the reference channel); `a2` is the dimensionless normalization of the
/// probability amplitude. All fields must be positive and the decay must be
/// kinematically open (`m1 + m2 < m_parent - m3`), checked by [`validate`].
///
/// [`validate`]: PhysicalParameters::validate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalParameters {
    /// Mass of the decaying parent particle.
    pub m_parent: f64,
    /// Mass of decay product 1.
    pub m1: f64,
    /// Mass of decay product 2.
    pub m2: f64,
    /// Mass of decay product 3.
    pub m3: f64,
    /// Mass of the intermediate resonance.
    pub m_resonance: f64,
    /// Full width of the resonance.
    pub gamma: f64,
    /// Squared amplitude normalization.
    pub a2: f64,
}

impl PhysicalParameters {
    /// Reference channel: D⁺ → K⁻ π⁺ π⁺ through the K*(892) resonance.
    /// Masses in MeV.
    pub fn d_to_k_pi_pi() -> Self {
        Self {
            m_parent: 1870.0,
            m1: 494.0,
            m2: 140.0,
            m3: 140.0,
            m_resonance: 890.0,
            gamma: 50.0,
            a2: 2.19e-17,
        }
    }

    /// Load parameters from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let params: PhysicalParameters = serde_json::from_str(&contents)?;
        params.validate()?;
        Ok(params)
    }

    /// Check that the configuration describes a non-degenerate decay.
    /// Called once at sampler construction; failures are fatal.
    pub fn validate(&self) -> Result<(), DalitzError> {
        let fields = [
            ("m_parent", self.m_parent),
            ("m1", self.m1),
            ("m2", self.m2),
            ("m3", self.m3),
            ("m_resonance", self.m_resonance),
            ("gamma", self.gamma),
            ("a2", self.a2),
        ];
        for (name, value) in fields {
            if !(value > 0.0) {
                return Err(DalitzError::config(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.m1 + self.m2 >= self.m_parent - self.m3 {
            return Err(DalitzError::config(format!(
                "decay kinematically closed: m1 + m2 = {} >= m_parent - m3 = {}",
                self.m1 + self.m2,
                self.m_parent - self.m3
            )));
        }
        Ok(())
    }
}

/// Kinematic window derived once from [`PhysicalParameters`] and read-only
/// for the rest of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest allowed m12: the product-pair threshold m1 + m2.
    pub m12_min: f64,
    /// Largest allowed m12: m_parent - m3.
    pub m12_max: f64,
    /// Maximum of the upper m23 boundary curve over [m12_min, m12_max].
    pub m23_max: f64,
}

/// Grid resolution for locating the maximum of the upper boundary curve.
const M23_SCAN_POINTS: usize = 4096;

impl Bounds {
    /// Derive the kinematic window. The global m23 maximum is located by a
    /// dense scan of the upper boundary curve; grid points that fall outside
    /// the physical range from rounding at the endpoints are skipped.
    pub fn from_parameters(params: &PhysicalParameters) -> Result<Self, DalitzError> {
        params.validate()?;

        let m12_min = params.m1 + params.m2;
        let m12_max = params.m_parent - params.m3;

        let step = (m12_max - m12_min) / M23_SCAN_POINTS as f64;
        let mut m23_max = 0.0f64;
        for i in 0..=M23_SCAN_POINTS {
            let m12 = m12_min + step * i as f64;
            if let Ok(upper) = m23_upper(m12, params) {
                m23_max = m23_max.max(upper);
            }
        }

        if !(m23_max > 0.0) {
            return Err(DalitzError::config(
                "upper boundary curve has no positive maximum",
            ));
        }

        Ok(Self {
            m12_min,
            m12_max,
            m23_max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::m23_upper;

    #[test]
    fn test_reference_parameters_valid() {
        let params = PhysicalParameters::d_to_k_pi_pi();
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_negative_mass_rejected() {
        let mut params = PhysicalParameters::d_to_k_pi_pi();
        params.m2 = -140.0;
        assert!(matches!(
            params.validate(),
            Err(DalitzError::Config { .. })
        ));
    }

    #[test]
    fn test_zero_resonance_mass_rejected() {
        let mut params = PhysicalParameters::d_to_k_pi_pi();
        params.m_resonance = 0.0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_closed_decay_rejected() {
        // m1 + m2 > m_parent - m3: no phase space
        let mut params = PhysicalParameters::d_to_k_pi_pi();
        params.m1 = 1800.0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_bounds_window() {
        let params = PhysicalParameters::d_to_k_pi_pi();
        let bounds = Bounds::from_parameters(&params).unwrap();
        assert_eq!(bounds.m12_min, 634.0);
        assert_eq!(bounds.m12_max, 1730.0);
        assert!(bounds.m23_max > 0.0);
    }

    #[test]
    fn test_m23_max_dominates_curve() {
        let params = PhysicalParameters::d_to_k_pi_pi();
        let bounds = Bounds::from_parameters(&params).unwrap();

        // The scanned maximum must bound the curve at arbitrary probe points.
        for frac in [0.1, 0.25, 0.5, 0.75, 0.9] {
            let m12 = bounds.m12_min + frac * (bounds.m12_max - bounds.m12_min);
            let upper = m23_upper(m12, &params).unwrap();
            assert!(
                upper <= bounds.m23_max * (1.0 + 1e-9),
                "curve at m12 = {} exceeds scanned maximum",
                m12
            );
        }
    }

    #[test]
    fn test_json_round_trip() {
        let params = PhysicalParameters::d_to_k_pi_pi();
        let json = serde_json::to_string(&params).unwrap();
        let back: PhysicalParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }
}
