use crate::utils::*;

#[test]
fn to_fixed_rounds_half_up_on_the_exact_value() {
    assert_eq!(to_fixed(0.146, 2), "0.15");
    assert_eq!(to_fixed(1.005, 2), "1.00");
    assert_eq!(to_fixed(0.125, 2), "0.13");
    assert_eq!(to_fixed(2.5, 0), "3");
    assert_eq!(to_fixed(9.96, 1), "10.0");
    assert_eq!(to_fixed(99.999, 2), "100.00");
    assert_eq!(to_fixed(-1.25, 1), "-1.3");
    assert_eq!(to_fixed(-0.001, 2), "-0.00");
    assert_eq!(to_fixed(-0.0, 2), "0.00");
    assert_eq!(to_fixed(100.27, 1), "100.3");
}

#[test]
fn js_numbers_print_like_javascript() {
    assert_eq!(fmt_js_number(15.2), "15.2");
    assert_eq!(fmt_js_number(25.0), "25");
    assert_eq!(fmt_js_number(-0.0), "0");
    assert_eq!(fmt_js_number(0.01), "0.01");
}

#[test]
fn float_prefix_parsing() {
    assert_eq!(parse_float_prefix("2"), Some(2.0));
    assert_eq!(parse_float_prefix(".5"), Some(0.5));
    assert_eq!(parse_float_prefix("3."), Some(3.0));
    assert_eq!(parse_float_prefix("1.2.3"), Some(1.2));
    assert_eq!(parse_float_prefix("."), None);
}

#[test]
fn js_round_ties_up() {
    assert_eq!(js_round(2.5), 3.0);
    assert_eq!(js_round(-2.5), -2.0);
}
