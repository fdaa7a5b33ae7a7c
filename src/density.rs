/// Relativistic Breit-Wigner line-shape used as the target density.
///
/// |M|² = a2 · mk⁴ / ((m12² - mk²)² + mk²·γ²)
///
/// Strictly positive and finite for every real m12 when mk, γ and a2 are
/// positive: the denominator is a sum of squares that only vanishes for
/// mk = 0, which validation forbids.
pub fn breit_wigner(m12: f64, mk: f64, gamma: f64, a2: f64) -> f64 {
    let mk_sq = mk * mk;
    let detune = m12 * m12 - mk_sq;
    a2 * mk_sq * mk_sq / (detune * detune + mk_sq * gamma * gamma)
}
