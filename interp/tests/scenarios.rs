use pretty_assertions::assert_eq;

use lispy_interp::eval_str;

fn assert_output(expected: &str, input: &str) {
    let value = eval_str(input).unwrap_or_else(|err| panic!("`{}` failed to parse: {}", input, err));
    assert_eq!(expected, value.to_string(), "evaluating `{}`", input);
}

#[test]
fn list_construction() {
    assert_output("{1 2 3}", "list 1 2 3");
    assert_output("{{1} {(+ 1 2)}}", "list {1} {(+ 1 2)}");
}

#[test]
fn numeric_promotion() {
    assert_output("3.5", "+ 1 2.5");
    assert_output("5.0", "* 2 2.5");
    assert_output("3", "+ 1 2");
    assert_output("-1.5", "- 1.5");
    assert_output("2.0", "max 1 2.0");
    assert_output("1024", "^ 2 10");
    assert_output("0.5", "/ 1.0 2");
}

#[test]
fn division_by_zero() {
    assert_output("Error: Division By Zero!", "/ 10 0");
    assert_output("Error: Division By Zero!", "% 10 0");
    assert_output("Error: Division By Zero!", "/ 10.0 0.0");
}

#[test]
fn empty_list_errors() {
    assert_output("Error: Function 'head' passed {}!", "head {}");
    assert_output("Error: Function 'tail' passed {}!", "tail {}");
}

#[test]
fn argument_errors() {
    assert_output("Error: Function 'head' passed too many arguments!", "head {1} {2}");
    assert_output("Error: Function 'eval' passed incorrect type!", "eval 1");
    assert_output("Error: Function 'join' passed incorrect type.", "join {1} 2");
    assert_output("Error: Function 'cons' passed incorrect arguments!", "cons 1");
    assert_output("Error: Cannot operate on non-number!", "+ 1 {2}");
}

#[test]
fn single_symbol_after_head() {
    assert_output("+", "eval (head {+ - + - *})");
    assert_output("{+}", "head {+ - + - *}");
    assert_output("{- + - *}", "tail {+ - + - *}");
}

#[test]
fn cons_and_join() {
    assert_output("{1 2 3}", "cons 1 {2 3}");
    assert_output("{{1} 2}", "cons {1} {2}");
    assert_output("{1 2 3 4}", "join {1 2} {} {3 4}");
}

#[test]
fn quoted_code_evaluates() {
    assert_output("6", "eval {+ 1 (* 1 5)}");
    assert_output("3", "eval (cons + {1 2})");
    assert_output("{1}", "eval {head (list 1 2 3)}");
}

#[test]
fn errors_propagate_leftmost() {
    assert_output("Error: Division By Zero!", "+ 1 (/ 1 0) (head {})");
    assert_output("Error: Function 'head' passed {}!", "list (head {}) (/ 1 0)");
    assert_output("Error: Division By Zero!", "head {1} (eval {/ 5 0})");
}

#[test]
fn non_symbol_head() {
    assert_output("Error: S-expression Does not start with symbol!", "1 2 3");
    assert_output("Error: S-expression Does not start with symbol!", "({+} 1)");
}

#[test]
fn unwrapping() {
    assert_output("()", "");
    assert_output("()", "()");
    assert_output("5", "5");
    assert_output("5", "(((5)))");
    assert_output("{1 2}", "{1 2}");
    assert_output("max", "max");
}

#[test]
fn invalid_numbers() {
    assert_output("Error: invalid number", "99999999999999999999");
    assert_output("Error: invalid number", "+ 1 99999999999999999999");
    assert_output("{Error: invalid number}", "{99999999999999999999}");
}

#[test]
fn syntax_errors() {
    for &input in &["(+ 1", "{1 2", "+ 1 )", "foo", "1 & 2"] {
        assert!(eval_str(input).is_err(), "`{}` should not parse", input);
    }
}
