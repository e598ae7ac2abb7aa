//! Text form of HULK numbers.

/// Render `n` the way C's `printf("%lf")` does: fixed notation with six
/// fractional digits, and glibc's spelling for non-finite values.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        let nan = if n.is_sign_negative() { "-nan" } else { "nan" };
        nan.to_owned()
    } else if n.is_infinite() {
        let inf = if n.is_sign_negative() { "-inf" } else { "inf" };
        inf.to_owned()
    } else {
        format!("{n:.6}")
    }
}
