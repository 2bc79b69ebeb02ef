use exact_ode::{differentiate, normalize, parse_expr, partial};

fn assert_diff_eq(var: &str, input: &str, expected: &str) {
    let expr = parse_expr(input).expect("parse input");
    let got = normalize(&differentiate(var, &expr)).expect("normalize derivative");
    let expected_expr = normalize(&parse_expr(expected).expect("parse expected")).expect("normalize expected");
    assert_eq!(got, expected_expr, "d/d{var} {input}");
}

#[test]
fn basic_vars_and_constants() {
    assert_diff_eq("x", "x", "1");
    assert_diff_eq("x", "y", "0");
    assert_diff_eq("x", "5", "0");
}

#[test]
fn polynomials_and_products() {
    assert_diff_eq("x", "x^3", "3*x^2");
    assert_diff_eq("x", "x*y", "y");
    assert_diff_eq("x", "2*x^2+3*x", "4*x+3");
    assert_diff_eq("y", "x^2*y^3", "3*x^2*y^2");
}

#[test]
fn quotients_and_radicals() {
    assert_diff_eq("y", "x/y", "-x/y^2");
    assert_diff_eq("x", "sqrt(x)", "1/(2*sqrt(x))");
    assert_diff_eq("x", "1/(x^3+3)", "-3*x^2/(x^3+3)^2");
}

#[test]
fn trig_and_exponentials() {
    assert_diff_eq("x", "sin(x)", "cos(x)");
    assert_diff_eq("x", "cos(x)", "-sin(x)");
    assert_diff_eq("x", "tan(x)", "1/cos(x)^2");
    assert_diff_eq("x", "exp(x^2)", "2*x*exp(x^2)");
    assert_diff_eq("y", "exp(x*y)", "x*exp(x*y)");
    assert_diff_eq("x", "log(x)", "1/x");
}

#[test]
fn symbolic_exponent() {
    assert_diff_eq("x", "x^x", "x^x*(log(x)+1)");
}

#[test]
fn partial_returns_canonical_form() {
    let m = parse_expr("x*y^3+1").expect("parse");
    assert_eq!(partial("y", &m).expect("partial").to_string(), "3*x*y^2");
    assert_eq!(partial("x", &m).expect("partial").to_string(), "y^3");
}
