use exact_ode::equation::extract;
use exact_ode::{AnalysisError, Equation, normalize, normalize_input, parse_expr};

fn canonical(input: &str) -> exact_ode::Expr {
    normalize(&parse_expr(input).expect("parse")).expect("normalize")
}

fn assert_coefficients(input: &str, m: &str, n: &str) {
    let eq = Equation::parse(input).unwrap_or_else(|err| panic!("extract {input}: {err}"));
    assert_eq!(eq.m, canonical(m), "M of {input}");
    assert_eq!(eq.n, canonical(n), "N of {input}");
}

#[test]
fn input_normalization() {
    assert_eq!(normalize_input(" (x - y + 1) * dx - dy = 0 "), "(x-y+1)*dx-dy");
    assert_eq!(normalize_input("sen(x)*d(x) + d(y)"), "sin(x)*dx+dy");
    assert_eq!(normalize_input("x^2*dx+dy=0"), "x**2*dx+dy");
    let once = normalize_input("x^2 * dx + sen(y) * dy = 0");
    assert_eq!(normalize_input(&once), once);
}

#[test]
fn coefficient_bearing_shells() {
    assert_coefficients("(x-y+1)*dx-dy=0", "x-y+1", "-1");
    assert_coefficients("(x*y^3+1)*dx+x^2*y^2*dy=0", "x*y^3+1", "x^2*y^2");
    assert_coefficients("x*dy + y*dx = 0", "y", "x");
    assert_coefficients("x*dy-y*dx=0", "-y", "x");
    assert_coefficients("-dy + (x-y+1)*dx = 0", "x-y+1", "-1");
    assert_coefficients("dx - x*dy = 0", "1", "-x");
    assert_coefficients("x^2*dy+dx=0", "1", "x^2");
}

#[test]
fn bare_differentials() {
    assert_coefficients("dx+dy=0", "1", "1");
    assert_coefficients("dx-dy", "1", "-1");
    assert_coefficients("-dy+dx", "1", "-1");
}

#[test]
fn parenthesised_shells() {
    assert_coefficients("(x+y)dx-(x-y)dy=0", "x+y", "y-x");
    assert_coefficients("(y)dy+(x)dx=0", "x", "y");
    assert_coefficients("(exp(x))dx+(1/(x+y))dy", "exp(x)", "1/(x+y)");
}

#[test]
fn localized_alias_and_power_syntax() {
    assert_coefficients(
        "(cos(x)-sen(x)+sen(y))*dx+(cos(x)+sen(y)+cos(y))*dy=0",
        "cos(x)-sin(x)+sin(y)",
        "cos(x)+sin(y)+cos(y)",
    );
    assert_coefficients("x**2*dx+y^2*dy", "x^2", "y^2");
}

#[test]
fn unmatched_shapes_are_format_errors() {
    assert_eq!(
        Equation::parse("x*dx = 0"),
        Err(AnalysisError::Format {
            input: "x*dx".into()
        })
    );
    assert!(matches!(
        Equation::parse("(x-y+1)dx-dy"),
        Err(AnalysisError::Format { .. })
    ));
    assert!(matches!(extract("y = x"), Err(AnalysisError::Format { .. })));
}

#[test]
fn bad_coefficients_carry_both_substrings() {
    match Equation::parse("(x+*y)*dx+x*dy=0") {
        Err(AnalysisError::Coefficient { m, n, .. }) => {
            assert_eq!(m, "(x+*y)");
            assert_eq!(n, "+x");
        }
        other => panic!("expected coefficient error, got {other:?}"),
    }
    match Equation::parse("z*dx+x*dy=0") {
        Err(AnalysisError::Coefficient { reason, .. }) => {
            assert!(reason.contains("unsupported symbols: z"), "{reason}");
        }
        other => panic!("expected coefficient error, got {other:?}"),
    }
    assert!(matches!(
        Equation::parse("x*dx+1/(x-x)*dy"),
        Err(AnalysisError::Coefficient { .. })
    ));
}

#[test]
fn zero_coefficients_are_degenerate() {
    assert_eq!(
        Equation::parse("0*dx+(x-x)*dy=0"),
        Err(AnalysisError::Degenerate {
            input: "0*dx+(x-x)*dy".into()
        })
    );
}

#[test]
fn extraction_is_idempotent() {
    for input in [
        "(x-y+1)*dx-dy=0",
        "y*dx+(x-x^2*y)*dy=0",
        "x^2*dx-(x^3*y^2+3*y^2)*dy=0",
        "(x^2+y^2)*dx+2*x*y*dy=0",
        "(1/x+y/x)*dx+dy=0",
        "exp(x)*y*dx-dy",
    ] {
        let first = Equation::parse(input).expect("first extraction");
        let second = Equation::parse(&first.to_input()).expect("second extraction");
        assert_eq!(first, second, "round trip of {input} via {}", first.to_input());
    }
}
