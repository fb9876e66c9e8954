mod common;

use calcpad::calculator::{
    format_result, CalculatorIntent, Operation, MAX_DISPLAY_LEN, UNDEFINED_DISPLAY,
};
use common::{digits, press, press_from, ADD, DIVIDE, MULTIPLY};

// -- Result formatting --------------------------------------------------------

#[test]
fn whole_results_render_without_fraction() {
    let state = press(&[
        CalculatorIntent::Number(5),
        ADD,
        CalculatorIntent::Number(3),
        CalculatorIntent::Calculate,
    ]);
    assert_eq!(state.number1(), "8");
}

#[test]
fn float_artifacts_are_rounded_away() {
    // 0.1 + 0.2 is the classic 0.30000000000000004 case.
    let state = press(&[
        CalculatorIntent::Number(0),
        CalculatorIntent::Decimal,
        CalculatorIntent::Number(1),
        ADD,
        CalculatorIntent::Number(0),
        CalculatorIntent::Decimal,
        CalculatorIntent::Number(2),
        CalculatorIntent::Calculate,
    ]);
    assert_eq!(state.number1(), "0.3");
}

#[test]
fn repeating_fraction_rounds_to_display_precision() {
    let state = press(&[
        CalculatorIntent::Number(1),
        DIVIDE,
        CalculatorIntent::Number(3),
        CalculatorIntent::Calculate,
    ]);
    assert_eq!(state.number1(), "0.333333");
}

#[test]
fn repeating_fraction_rounds_up_at_the_last_digit() {
    let state = press(&[
        CalculatorIntent::Number(2),
        DIVIDE,
        CalculatorIntent::Number(3),
        CalculatorIntent::Calculate,
    ]);
    assert_eq!(state.number1(), "0.666667");
}

#[test]
fn wide_sum_stays_in_fixed_notation() {
    let mut intents = digits("99999999");
    intents.push(ADD);
    intents.extend(digits("99999999"));
    intents.push(CalculatorIntent::Calculate);
    let state = press(&intents);
    assert_eq!(state.number1(), "199999998");
}

#[test]
fn oversized_product_falls_back_to_scientific() {
    let mut intents = digits("9999999");
    intents.push(MULTIPLY);
    intents.extend(digits("9999999"));
    intents.push(CalculatorIntent::Calculate);
    let state = press(&intents);
    assert_eq!(state.number1(), "9.999998e13");
    assert!(state.number1().len() <= MAX_DISPLAY_LEN);
}

#[test]
fn format_result_normalizes_negative_zero() {
    assert_eq!(format_result(-1e-8), "0");
}

#[test]
fn result_operand_accepts_no_further_digits_when_full() {
    // A 9-character result is already past the entry cap, so typing into
    // it is ignored rather than growing the display.
    let mut intents = digits("99999999");
    intents.push(ADD);
    intents.extend(digits("99999999"));
    intents.push(CalculatorIntent::Calculate);
    let state = press_from(press(&intents), &[CalculatorIntent::Number(1)]);
    assert_eq!(state.number1(), "199999998");
}

// -- Display composition ------------------------------------------------------

#[test]
fn display_tracks_entry_progress() {
    let state = press(&[CalculatorIntent::Number(5)]);
    assert_eq!(state.display(), "5");

    let state = press_from(state, &[ADD]);
    assert_eq!(state.display(), "5+");

    let state = press_from(state, &[CalculatorIntent::Number(3)]);
    assert_eq!(state.display(), "5+3");
}

#[test]
fn display_uses_each_operator_glyph() {
    for (op, glyph) in [
        (Operation::Add, "1+2"),
        (Operation::Subtract, "1-2"),
        (Operation::Multiply, "1x2"),
        (Operation::Divide, "1/2"),
    ] {
        let state = press(&[
            CalculatorIntent::Number(1),
            CalculatorIntent::Operation(op),
            CalculatorIntent::Number(2),
        ]);
        assert_eq!(state.display(), glyph);
    }
}

#[test]
fn undefined_displays_sentinel_text() {
    let state = press(&[
        CalculatorIntent::Number(5),
        DIVIDE,
        CalculatorIntent::Number(0),
        CalculatorIntent::Calculate,
    ]);
    assert_eq!(state.display(), UNDEFINED_DISPLAY);
}
