/// Round a computed amount to VND minor units (zero decimal places).
///
/// Applied only when a figure leaves the calculator for display or
/// comparison; intermediate values stay unrounded so error never compounds.
pub fn round_minor_vnd(amount: f64) -> i64 {
    amount.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_whole_dong() {
        assert_eq!(round_minor_vnd(18_447_123.4), 18_447_123);
        assert_eq!(round_minor_vnd(18_447_123.5), 18_447_124);
        assert_eq!(round_minor_vnd(0.0), 0);
    }
}
