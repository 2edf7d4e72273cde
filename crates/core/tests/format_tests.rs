// ═══════════════════════════════════════════════════════════════════
// Formatting Tests — currency, quantity, profit/loss, percentage
// ═══════════════════════════════════════════════════════════════════

use crypto_sim_core::services::formatting::{
    format_currency, format_percent, format_profit_loss, format_quantity,
};

mod currency {
    use super::*;

    #[test]
    fn two_decimals_with_thousands_grouping() {
        assert_eq!(format_currency(Some(1234.5)), "$1,234.50");
        assert_eq!(format_currency(Some(1_000_000.0)), "$1,000,000.00");
        assert_eq!(format_currency(Some(999.999)), "$1,000.00");
    }

    #[test]
    fn missing_input_renders_as_zero() {
        assert_eq!(format_currency(None), "$0.00");
        assert_eq!(format_currency(Some(f64::NAN)), "$0.00");
        assert_eq!(format_currency(Some(f64::INFINITY)), "$0.00");
    }

    #[test]
    fn small_and_negative_values() {
        assert_eq!(format_currency(Some(0.5)), "$0.50");
        assert_eq!(format_currency(Some(-20.0)), "-$20.00");
        assert_eq!(format_currency(Some(-1234.5)), "-$1,234.50");
    }
}

mod profit_loss {
    use super::*;

    #[test]
    fn gains_carry_an_explicit_plus() {
        assert_eq!(format_profit_loss(Some(50.0)), "+$50.00");
        assert_eq!(format_profit_loss(Some(0.0)), "+$0.00");
        assert_eq!(format_profit_loss(None), "+$0.00");
    }

    #[test]
    fn losses_carry_a_minus() {
        assert_eq!(format_profit_loss(Some(-20.0)), "-$20.00");
        assert_eq!(format_profit_loss(Some(-1234.56)), "-$1,234.56");
    }
}

mod quantity {
    use super::*;

    #[test]
    fn up_to_six_decimals_with_trailing_zeros_trimmed() {
        assert_eq!(format_quantity(Some(0.123456789)), "0.123457");
        assert_eq!(format_quantity(Some(1.5)), "1.5");
        assert_eq!(format_quantity(Some(2.0)), "2");
        assert_eq!(format_quantity(Some(0.000001)), "0.000001");
    }

    #[test]
    fn integer_part_is_grouped() {
        assert_eq!(format_quantity(Some(1234.5)), "1,234.5");
        assert_eq!(format_quantity(Some(1_000_000.0)), "1,000,000");
    }

    #[test]
    fn missing_input_renders_as_zero() {
        assert_eq!(format_quantity(None), "0");
        assert_eq!(format_quantity(Some(f64::NAN)), "0");
    }
}

mod percentage {
    use super::*;

    #[test]
    fn signed_two_decimal_display() {
        assert_eq!(format_percent(Some(12.3)), "+12.30%");
        assert_eq!(format_percent(Some(-5.0)), "-5.00%");
        assert_eq!(format_percent(Some(0.0)), "+0.00%");
        assert_eq!(format_percent(None), "+0.00%");
    }
}
