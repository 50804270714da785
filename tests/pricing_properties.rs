use goldbuy::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn ornament() -> GoldCalculator {
    let mut calc = GoldCalculator::with_defaults().unwrap();
    calc.select_mode(Mode::Ornament);
    calc
}

fn quote(price: &str, deduction: &str, weight: &str) -> GoldCalculator {
    let mut calc = ornament();
    calc.set_field(Field::Price, price);
    calc.set_field(Field::Deduction, deduction);
    calc.set_field(Field::Weight, weight);
    calc
}

#[test]
fn test_reference_examples() {
    assert_eq!(quote("2000", "5", "1").result_text(), "฿124.64");
    assert_eq!(quote("0", "5", "10").result_text(), "฿0.00");

    let negative = quote("-100", "5", "1");
    assert_eq!(negative.result_text(), "Error");
    assert!(negative.error_flags().price);
}

#[test]
fn test_formula_matches_for_non_negative_inputs() {
    let prices = [dec!(0), dec!(1), dec!(2000), dec!(41250.50), dec!(99999)];
    let deductions = [dec!(0), dec!(2.5), dec!(5), dec!(100)];
    let weights = [dec!(0), dec!(0.5), dec!(3.8), dec!(15.2), dec!(152)];
    let formatter = BahtFormatter::new().unwrap();

    for price in prices {
        for deduction in deductions {
            for weight in weights {
                let expected = (price - price * deduction / dec!(100)) * dec!(0.0656) * weight;
                let calc = quote(&price.to_string(), &deduction.to_string(), &weight.to_string());

                assert_eq!(
                    calc.last_result().and_then(CalculationResult::final_price),
                    Some(expected),
                    "price={} deduction={} weight={}",
                    price,
                    deduction,
                    weight
                );
                assert_eq!(calc.result_text(), formatter.format_currency(expected));
                assert!(!calc.error_flags().any());
            }
        }
    }
}

#[test]
fn test_negative_price_always_errors_and_flags() {
    for (deduction, weight) in [("0", "0"), ("5", "1"), ("-5", "10"), ("3", "-2")] {
        let calc = quote("-0.01", deduction, weight);
        assert_eq!(calc.result_text(), "Error");
        assert!(calc.result_is_error());
        assert!(calc.error_flags().price);
    }
}

#[test]
fn test_negative_deduction_or_weight_errors() {
    let calc = quote("2000", "-1", "1");
    assert_eq!(calc.result_text(), "Error");
    assert!(!calc.error_flags().price);
    assert!(calc.error_flags().deduction);

    let calc = quote("2000", "5", "-1");
    assert_eq!(calc.result_text(), "Error");
    assert!(!calc.error_flags().price);
    assert!(calc.error_flags().weight);
}

#[test]
fn test_non_numeric_behaves_like_zero() {
    for (garbage, zero) in [
        (quote("abc", "5", "1"), quote("0", "5", "1")),
        (quote("2000", "five", "1"), quote("2000", "0", "1")),
        (quote("2000", "5", ""), quote("2000", "5", "0")),
    ] {
        assert_eq!(garbage.result_text(), zero.result_text());
        assert_eq!(garbage.error_flags(), zero.error_flags());
    }
}

#[test]
fn test_large_values_are_grouped() {
    // 1,000,000 * 0.0656 * 1000 = 65,600,000
    let calc = quote("1000000", "0", "1000");
    assert_eq!(calc.result_text(), "฿65,600,000.00");
}

#[test]
fn test_pure_engine_matches_controller() {
    let input = CalculationInput::new(2000, 5, 1).unwrap();
    let result = calculate(&input).unwrap();
    assert_eq!(result.final_price(), Some(dec!(124.64)));

    let fields = FieldInputs::from_fields("2000", "5", "1");
    let result = PricingRule::Ornament.evaluate_fields(&fields).unwrap();
    assert_eq!(result.final_price(), Some(dec!(124.64)));

    let zero = CalculationInput::default();
    assert_eq!(calculate(&zero).unwrap().final_price(), Some(Decimal::ZERO));
}

#[test]
fn test_exponent_input_is_validated() {
    let calc = quote("-1e3", "5", "1");
    assert_eq!(calc.result_text(), "Error");
    assert_eq!(calc.error_flags().fields(), vec![Field::Price]);

    assert_eq!(quote("1e3", "5", "1").result_text(), "฿62.32");
    assert_eq!(quote("2E3", "5", "1e0").result_text(), "฿124.64");
}

#[test]
fn test_negative_beyond_decimal_range_is_flagged() {
    for price in ["-1e30", "-100000000000000000000000000000"] {
        let calc = quote(price, "5", "1");
        assert_eq!(calc.result_text(), "Error", "price {}", price);
        assert_eq!(calc.error_flags().fields(), vec![Field::Price], "price {}", price);
    }

    for weight in ["-1e29", "-1e30"] {
        let calc = quote("2000", "5", weight);
        assert_eq!(calc.result_text(), "Error", "weight {}", weight);
        assert_eq!(calc.error_flags().fields(), vec![Field::Weight], "weight {}", weight);
    }
}

#[test]
fn test_positive_beyond_decimal_range_is_an_error() {
    let calc = quote("1e30", "5", "1");
    let view = calc.view();
    assert_eq!(view.result, "Error");
    assert!(view.result_is_error);
    assert!(!view.error_flags.any());
    assert!(!view.glowing);
}
