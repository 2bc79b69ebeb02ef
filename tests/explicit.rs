use exact_ode::{Expr, UNDEFINED_EXPLICIT, analyze, explicit, normalize, parse_expr};

fn expr(input: &str) -> Expr {
    normalize(&parse_expr(input).expect("parse")).expect("normalize")
}

#[test]
fn slope_form_of_coefficients() {
    assert_eq!(
        explicit(&expr("y"), &expr("-x")).expect("explicit"),
        "dy/dx = -(y)/(-x)"
    );
    assert_eq!(
        explicit(&expr("2*x*y"), &expr("x^2")).expect("explicit"),
        "dy/dx = -(2*x*y)/(x^2)"
    );
}

#[test]
fn vanishing_n_gives_the_sentinel() {
    assert_eq!(
        explicit(&expr("x"), &Expr::integer(0)).expect("explicit"),
        UNDEFINED_EXPLICIT
    );
    let hidden_zero = parse_expr("sin(x)^2+cos(x)^2-1").expect("parse");
    assert_eq!(
        explicit(&expr("y"), &hidden_zero).expect("explicit"),
        UNDEFINED_EXPLICIT
    );
}

#[test]
fn record_exposes_the_explicit_form() {
    let record = analyze("(x-y+1)*dx-dy=0").expect("analyze");
    assert_eq!(
        record.explicit_form().expect("explicit"),
        "dy/dx = -(x-y+1)/(-1)"
    );
}
