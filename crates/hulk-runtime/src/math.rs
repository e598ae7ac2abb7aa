//! Math primitives.
//!
//! Thin wrappers over the host's libm. Out-of-domain inputs come back as
//! NaN or infinities, exactly as the host computes them.

#[unsafe(no_mangle)]
pub extern "C" fn cos_number_number(n: f64) -> f64 {
    n.cos()
}

#[unsafe(no_mangle)]
pub extern "C" fn sin_number_number(n: f64) -> f64 {
    n.sin()
}

#[unsafe(no_mangle)]
pub extern "C" fn exp_number_number(n: f64) -> f64 {
    n.exp()
}

/// Logarithm of `a` in base `b`.
#[unsafe(no_mangle)]
pub extern "C" fn log_number_number_number(a: f64, b: f64) -> f64 {
    a.ln() / b.ln()
}

/// `a` raised to `b`.
#[unsafe(no_mangle)]
pub extern "C" fn pow_number_number_number(a: f64, b: f64) -> f64 {
    a.powf(b)
}

#[unsafe(no_mangle)]
pub extern "C" fn sqrt_number_number(n: f64) -> f64 {
    n.sqrt()
}

/// Uniform sample from `[0, 1)`, drawn from a per-thread generator.
#[unsafe(no_mangle)]
pub extern "C" fn rand_number() -> f64 {
    rand::random::<f64>()
}
