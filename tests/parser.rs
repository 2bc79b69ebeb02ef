use exact_ode::expr::{Expr, Rational};
use exact_ode::{CasError, parse_expr};

fn parse(input: &str) -> Expr {
    parse_expr(input).expect("parse input")
}

fn int(n: i64) -> Expr {
    Expr::integer(n)
}

fn x() -> Expr {
    Expr::var("x")
}

#[test]
fn products_bind_tighter_than_sums() {
    assert_eq!(
        parse("1 + 2*x"),
        Expr::Add(int(1).boxed(), Expr::Mul(int(2).boxed(), x().boxed()).boxed())
    );
}

#[test]
fn unary_minus_is_looser_than_power() {
    assert_eq!(
        parse("-x^2"),
        Expr::Neg(Expr::Pow(x().boxed(), int(2).boxed()).boxed())
    );
}

#[test]
fn powers_are_right_associative() {
    assert_eq!(
        parse("2^3^2"),
        Expr::Pow(
            int(2).boxed(),
            Expr::Pow(int(3).boxed(), int(2).boxed()).boxed()
        )
    );
    assert_eq!(parse("x**2"), parse("x^2"));
}

#[test]
fn decimals_are_exact_rationals() {
    assert_eq!(
        parse("0.5"),
        Expr::Constant(Rational::new(1.into(), 2.into()))
    );
    assert_eq!(parse("1.25"), Expr::Constant(Rational::new(5.into(), 4.into())));
}

#[test]
fn function_names() {
    assert_eq!(parse("ln(x)"), Expr::Log(x().boxed()));
    assert_eq!(parse("sin x"), Expr::Sin(x().boxed()));
    assert_eq!(
        parse("sqrt(x)"),
        Expr::Pow(
            x().boxed(),
            Expr::Constant(Rational::new(1.into(), 2.into())).boxed()
        )
    );
}

#[test]
fn malformed_input_is_a_parse_error() {
    for input in ["x+", "(x", "", "2*/x"] {
        assert!(
            matches!(parse_expr(input), Err(CasError::Parse(_))),
            "expected parse error for {input:?}"
        );
    }
}

#[test]
fn display_brackets_only_where_needed() {
    assert_eq!(parse("x-(y-1)").to_string(), "x-(y-1)");
    assert_eq!(parse("(x+1)*y").to_string(), "(x+1)*y");
    assert_eq!(parse("x^(1/2)").to_string(), "x^(1/2)");
}
