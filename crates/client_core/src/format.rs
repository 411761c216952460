use shared::domain::Operation;

/// Fixed-point rendering that rounds exact halves away from zero.
///
/// `format!` resolves a tie to the even digit, so `0.125` would render as `0.12`.
/// A value sits exactly halfway at `decimals` places only when
/// `|value| * 2^(decimals + 1)` is an odd integer; such values are nudged one
/// ulp outward before formatting.
fn to_fixed(value: f64, decimals: u32) -> String {
    let scaled = value.abs() * f64::from(2u32.pow(decimals + 1));
    let is_tie = scaled.fract() == 0.0 && scaled % 2.0 == 1.0;
    let value = if is_tie {
        f64::from_bits(value.to_bits() + 1)
    } else {
        value
    };
    format!("{value:.prec$}", prec = decimals as usize)
}

/// Fixed four-decimal rendering of a service result.
pub fn format_result(result: f64) -> String {
    to_fixed(result, 4)
}

/// Same as [`format_result`], with `"0.0000"` standing in for a missing result.
pub fn format_optional_result(result: Option<f64>) -> String {
    format_result(result.unwrap_or(0.0))
}

/// Human-readable formula for the selected operation. Descriptive only.
pub fn formula(operation: Operation, probability_a: f64, probability_b: f64) -> String {
    let a = to_fixed(probability_a, 2);
    let b = to_fixed(probability_b, 2);
    match operation {
        Operation::CombinedWith => format!("P(A) * P(B) = {a} * {b}"),
        Operation::Either => format!("P(A) + P(B) - P(A)P(B) = {a} + {b} - ({a} * {b})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_four_decimals() {
        assert_eq!(format_result(0.25), "0.2500");
        assert_eq!(format_result(0.12), "0.1200");
        assert_eq!(format_result(1.0), "1.0000");
        assert_eq!(format_result(0.123456), "0.1235");
    }

    #[test]
    fn exact_halves_round_up() {
        assert_eq!(format_result(0.03125), "0.0313");
        assert_eq!(format_result(0.015625), "0.0156");
        assert_eq!(to_fixed(0.375, 2), "0.38");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        assert_eq!(to_fixed(1.005, 2), "1.00");
    }

    #[test]
    fn missing_result_renders_zero() {
        assert_eq!(format_optional_result(None), "0.0000");
        assert_eq!(format_optional_result(Some(0.5)), "0.5000");
    }

    #[test]
    fn formulas_follow_operation_templates() {
        assert_eq!(
            formula(Operation::CombinedWith, 0.5, 0.3),
            "P(A) * P(B) = 0.50 * 0.30"
        );
        assert_eq!(
            formula(Operation::Either, 0.2, 1.0),
            "P(A) + P(B) - P(A)P(B) = 0.20 + 1.00 - (0.20 * 1.00)"
        );
        assert_eq!(
            formula(Operation::CombinedWith, 0.125, 0.625),
            "P(A) * P(B) = 0.13 * 0.63"
        );
    }
}
