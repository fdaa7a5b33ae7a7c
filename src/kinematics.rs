// Dalitz plot boundary kinematics for a three-body decay
//
// Follows the kinematics review conventions of the PDG: for fixed m12 the
// allowed m23 band is set by the energies of products 2 and 3 in the
// (1,2) rest frame.

use crate::error::DalitzError;
use crate::parameters::PhysicalParameters;

/// Energy of product 2 in the (1,2) rest frame at a given m12.
///
/// E2 = (m12² - m1² + m2²) / (2 m12). Fails on the m12 = 0 singularity.
pub fn energy2(m12: f64, m1: f64, m2: f64) -> Result<f64, DalitzError> {
    if m12 == 0.0 {
        return Err(DalitzError::Domain { m12 });
    }
    Ok((m12 * m12 - m1 * m1 + m2 * m2) / (2.0 * m12))
}

/// Energy of product 3 in the (1,2) rest frame at a given m12.
///
/// E3 = (M² - m12² - m3²) / (2 m12). Fails on the m12 = 0 singularity.
pub fn energy3(m12: f64, m_parent: f64, m3: f64) -> Result<f64, DalitzError> {
    if m12 == 0.0 {
        return Err(DalitzError::Domain { m12 });
    }
    Ok((m_parent * m_parent - m12 * m12 - m3 * m3) / (2.0 * m12))
}

// Momenta of products 2 and 3 at this m12, or Kinematic if m12 lies
// outside the physical range (negative radicand).
fn momenta(m12: f64, params: &PhysicalParameters) -> Result<(f64, f64, f64), DalitzError> {
    let e2 = energy2(m12, params.m1, params.m2)?;
    let e3 = energy3(m12, params.m_parent, params.m3)?;
    let p2_sq = e2 * e2 - params.m2 * params.m2;
    let p3_sq = e3 * e3 - params.m3 * params.m3;
    if p2_sq < 0.0 || p3_sq < 0.0 {
        return Err(DalitzError::Kinematic { m12 });
    }
    Ok((e2 + e3, p2_sq.sqrt(), p3_sq.sqrt()))
}

/// Upper m23 boundary curve at a given m12 (products 2 and 3 parallel).
///
/// At m12 at either end of the allowed window one momentum vanishes and
/// the upper and lower curves coincide: the band degenerates to a point.
pub fn m23_upper(m12: f64, params: &PhysicalParameters) -> Result<f64, DalitzError> {
    let (e_sum, p2, p3) = momenta(m12, params)?;
    Ok(e_sum * e_sum - (p2 - p3) * (p2 - p3))
}

/// Lower m23 boundary curve at a given m12 (products 2 and 3 antiparallel).
pub fn m23_lower(m12: f64, params: &PhysicalParameters) -> Result<f64, DalitzError> {
    let (e_sum, p2, p3) = momenta(m12, params)?;
    Ok(e_sum * e_sum - (p2 + p3) * (p2 + p3))
}

/// Region membership test: true iff (x, y) lies inside the kinematically
/// allowed band (closed intervals on both axes).
///
/// Total over all real inputs: any x outside [m12_min, m12_max], including
/// values where the boundary curves are undefined, yields false rather
/// than an error.
pub fn contains(
    m12_min: f64,
    m12_max: f64,
    x: f64,
    y: f64,
    params: &PhysicalParameters,
) -> bool {
    if x < m12_min || x > m12_max {
        return false;
    }
    match (m23_lower(x, params), m23_upper(x, params)) {
        (Ok(lower), Ok(upper)) => y >= lower && y <= upper,
        _ => false,
    }
}

/// Tabulate the boundary curves on a uniform grid of `points` m12 values,
/// as (m12, lower, upper) triples. Intended for consumers that draw the
/// allowed band; grid points outside the physical range are skipped.
pub fn boundary_curves(
    m12_min: f64,
    m12_max: f64,
    points: usize,
    params: &PhysicalParameters,
) -> Vec<(f64, f64, f64)> {
    if points < 2 {
        return Vec::new();
    }
    let step = (m12_max - m12_min) / (points - 1) as f64;
    (0..points)
        .filter_map(|i| {
            let m12 = m12_min + step * i as f64;
            let lower = m23_lower(m12, params).ok()?;
            let upper = m23_upper(m12, params).ok()?;
            Some((m12, lower, upper))
        })
        .collect()
}
