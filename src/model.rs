use crate::constants;
use crate::utils;
use num_traits::Float;

/// Johnson-Cook flow stress (without the thermal softening term):
///
/// `(a + b * eps^n) * (1 + c * ln(eps_dot / eps_dot_0))`
///
/// No domain checks are made. Degenerate inputs such as `eps = 0` with `n < 0` or
/// `eps_dot_0 = 0` yield `inf`/`NaN` following the usual floating point rules.
pub fn johnson_cook_stress<F: Float>(
    eps: F,
    eps_dot: F,
    a: F,
    b: F,
    c: F,
    n: F,
    eps_dot_0: F,
) -> F {
    let hardening = a + b * eps.powf(n);
    let rate_sensitivity = F::one() + c * (eps_dot / eps_dot_0).ln();
    hardening * rate_sensitivity
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct MaterialParameters<F: Float> {
    /// initial yield stress (MPa)
    pub a: F,
    /// hardening modulus (MPa)
    pub b: F,
    /// strain rate sensitivity
    pub c: F,
    /// hardening exponent
    pub n: F,
    /// eps_dot (1/s)
    pub strain_rate: F,
    /// eps_dot_0 (1/s)
    pub reference_strain_rate: F,
}

impl<F: Float> MaterialParameters<F> {
    pub fn stress(&self, eps: F) -> F {
        johnson_cook_stress(
            eps,
            self.strain_rate,
            self.a,
            self.b,
            self.c,
            self.n,
            self.reference_strain_rate,
        )
    }

    /// The strain independent factor `1 + c * ln(eps_dot / eps_dot_0)`
    pub fn strain_rate_factor(&self) -> F {
        F::one() + self.c * (self.strain_rate / self.reference_strain_rate).ln()
    }
}

pub fn stress_curve<F: Float>(strains: &[F], parameters: &MaterialParameters<F>) -> Vec<F> {
    strains.iter().map(|&eps| parameters.stress(eps)).collect()
}

pub fn strain_grid() -> Vec<f64> {
    utils::linspace(
        constants::MIN_STRAIN,
        constants::MAX_STRAIN,
        constants::NUM_STRAIN_POINTS,
    )
}
