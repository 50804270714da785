use goldbuy::prelude::*;
use rust_decimal_macros::dec;
use std::time::Duration;

#[test]
fn test_menu_to_calculator_and_back() {
    let mut calc = GoldCalculator::with_defaults().unwrap();
    assert_eq!(calc.screen(), Screen::Menu);

    calc.select_mode(Mode::Ornament);
    assert_eq!(calc.screen(), Screen::Calculator(Mode::Ornament));
    assert_eq!(calc.mode(), Some(Mode::Ornament));

    calc.go_back();
    assert_eq!(calc.screen(), Screen::Menu);
    assert_eq!(calc.mode(), None);
}

#[test]
fn test_other_modes_show_placeholder() {
    for mode in [Mode::Bar, Mode::Exchange] {
        let mut calc = GoldCalculator::with_defaults().unwrap();
        calc.select_mode(mode);
        assert_eq!(calc.screen(), Screen::Placeholder(mode));

        let view = calc.view();
        assert_eq!(view.title, None);

        calc.go_back();
        assert_eq!(calc.screen(), Screen::Menu);
    }
}

#[test]
fn test_reset_after_selecting_ornament_sets_default_deduction() {
    let mut calc = GoldCalculator::with_defaults().unwrap();
    calc.select_mode(Mode::Ornament);
    calc.set_field(Field::Deduction, "12");
    calc.reset_form();
    assert_eq!(calc.form().deduction, "5");
}

#[test]
fn test_reset_cycle_round_trip() {
    let mut calc = GoldCalculator::with_defaults().unwrap();
    calc.select_mode(Mode::Ornament);
    calc.set_field(Field::Price, "41000");
    calc.set_field(Field::Deduction, "7");
    calc.set_field(Field::Weight, "15.2");
    calc.set_grade(GoldGrade::Percent9999);

    calc.go_back();
    calc.select_mode(Mode::Ornament);
    let first = calc.view();

    assert_eq!(first.fields.price, "");
    assert_eq!(first.fields.weight, "");
    assert_eq!(first.fields.deduction, "5");
    assert_eq!(first.fields.grade, GoldGrade::Percent965);
    assert_eq!(first.result, "฿0.00");

    calc.go_back();
    calc.select_mode(Mode::Ornament);
    assert_eq!(calc.view(), first);
}

#[test]
fn test_go_back_is_idempotent_at_menu() {
    let mut calc = GoldCalculator::with_defaults().unwrap();
    calc.go_back();
    let once = calc.view();
    calc.go_back();
    assert_eq!(calc.view(), once);
    assert_eq!(once.fields.deduction, "5");
}

#[test]
fn test_fallback_deduction_is_configurable() {
    let config = CalculatorConfig::builder().fallback_deduction(dec!(3.5)).build().unwrap();
    let mut calc = GoldCalculator::new(config).unwrap();
    assert_eq!(calc.form().deduction, "3.5");

    // Ornament keeps its own default regardless of the fallback.
    calc.select_mode(Mode::Ornament);
    assert_eq!(calc.form().deduction, "5");
    calc.go_back();
    assert_eq!(calc.form().deduction, "3.5");
}

#[test]
fn test_leaving_bar_restores_fallback_deduction() {
    let mut calc = GoldCalculator::with_defaults().unwrap();
    calc.select_mode(Mode::Bar);
    calc.reset_form();
    assert_eq!(calc.form().deduction, "0");

    calc.go_back();
    assert_eq!(calc.mode(), None);
    assert_eq!(calc.form().deduction, "5");
}

#[test]
fn test_select_mode_keeps_price_and_weight() {
    let mut calc = GoldCalculator::with_defaults().unwrap();
    calc.set_field(Field::Price, "2000");
    calc.set_field(Field::Weight, "1");
    calc.select_mode(Mode::Ornament);
    assert_eq!(calc.form().price, "2000");
    assert_eq!(calc.form().weight, "1");
}

#[test]
fn test_view_state_reports_focus_after_delay() {
    let mut calc = GoldCalculator::with_defaults().unwrap();
    calc.select_mode(Mode::Ornament);
    assert_eq!(calc.view().focused, None);
    calc.tick(Duration::from_millis(100));
    assert_eq!(calc.view().focused, Some(Field::Price));
}
