use std::f64::consts::PI;

/// ln Γ(x) via the Lanczos approximation (g = 7, nine coefficients).
/// <https://en.wikipedia.org/wiki/Lanczos_approximation>
#[must_use]
#[allow(clippy::excessive_precision)]
pub fn ln_gamma(x: f64) -> f64 {
    const LANCZOS: [f64; 9] = [
        0.999_999_999_999_809_93,
        676.520_368_121_885_1,
        -1_259.139_216_722_402_8,
        771.323_428_777_653_13,
        -176.615_029_162_140_59,
        12.507_343_278_686_905,
        -0.138_571_095_265_720_12,
        9.984_369_578_019_571_6e-6,
        1.505_632_735_149_311_6e-7,
    ];

    if x < 0.5 {
        // Reflection: Γ(x)Γ(1 - x) = π / sin(πx).
        PI.ln() - (PI * x).sin().abs().ln() - ln_gamma(1. - x)
    } else {
        let x = x - 1.;
        let mut sum = LANCZOS[0];
        for (i, &c) in LANCZOS[1..].iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let denominator = x + i as f64 + 1.;
            sum += c / denominator;
        }
        let t = x + 7.5;
        0.5 * (2. * PI).ln() + (x + 0.5) * t.ln() - t + sum.ln()
    }
}

#[must_use]
pub fn gamma(x: f64) -> f64 {
    ln_gamma(x).exp()
}
