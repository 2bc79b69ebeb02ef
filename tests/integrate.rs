use exact_ode::{IntegrationResult, ReasonCode, Strategy, integrate, normalize, parse_expr};

fn normalize_parse(input: &str) -> exact_ode::Expr {
    normalize(&parse_expr(input).expect("parse input")).expect("normalize")
}

fn assert_integrates(var: &str, input: &str, expected: &str, strategy: Strategy) {
    let expr = parse_expr(input).expect("parse integrand");
    match integrate(var, &expr).expect("integrate") {
        IntegrationResult::Integrated { result, strategy: used } => {
            assert_eq!(
                normalize(&result).expect("normalize result"),
                normalize_parse(expected),
                "integral of {input}"
            );
            assert_eq!(used, strategy, "strategy for {input}");
        }
        other => panic!("expected integration of {input}, got {other:?}"),
    }
}

#[test]
fn power_rule_and_logarithm() {
    assert_integrates("x", "x^3", "1/4*x^4", Strategy::Direct);
    assert_integrates("x", "1/x", "log(x)", Strategy::Direct);
    assert_integrates("x", "-2/x", "-2*log(x)", Strategy::Direct);
    assert_integrates("x", "x*y", "1/2*x^2*y", Strategy::Direct);
    assert_integrates("y", "3", "3*y", Strategy::Direct);
}

#[test]
fn exponentials_and_trig() {
    assert_integrates("x", "exp(2*x)", "1/2*exp(2*x)", Strategy::Direct);
    assert_integrates("x", "exp(-x)", "-exp(-x)", Strategy::Direct);
    assert_integrates("x", "cos(2*x)", "1/2*sin(2*x)", Strategy::Direct);
    assert_integrates("x", "sin(x)", "-cos(x)", Strategy::Direct);
}

#[test]
fn log_derivative_rule() {
    assert_integrates("x", "2*x/(x^2+1)", "log(x^2+1)", Strategy::LogDerivative);
    assert_integrates("x", "-3*x^2/(x^3+3)", "-log(x^3+3)", Strategy::LogDerivative);
}

#[test]
fn reports_unsupported_integrands() {
    let gaussian = integrate("x", &parse_expr("exp(x^2)").expect("parse")).expect("integrate");
    assert!(matches!(
        gaussian,
        IntegrationResult::NotIntegrable(ReasonCode::UnsupportedTerm(_))
    ));
    assert!(gaussian.antiderivative().is_none());

    let arctan = integrate("x", &parse_expr("1/(x^2+1)").expect("parse")).expect("integrate");
    assert_eq!(
        arctan,
        IntegrationResult::NotIntegrable(ReasonCode::NonLogDerivative)
    );
}
