use exact_ode::{Equation, FactorOutcome, analyze, check, differentiate, normalize, normalize_input, parse_expr};
use proptest::prelude::*;

// (coefficient, power of x, power of y)
fn potential() -> impl Strategy<Value = Vec<(i64, u32, u32)>> {
    proptest::collection::vec(((-3i64..=3).prop_filter("nonzero", |c| *c != 0), 0u32..4, 0u32..4), 1..4)
}

fn render(terms: &[(i64, u32, u32)]) -> String {
    terms
        .iter()
        .map(|(c, i, j)| format!("({c})*x^{i}*y^{j}"))
        .collect::<Vec<_>>()
        .join("+")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn gradients_of_a_potential_are_exact(terms in potential()) {
        let phi = parse_expr(&render(&terms)).expect("parse potential");
        let m = differentiate("x", &phi);
        let n = differentiate("y", &phi);
        prop_assert!(check(&m, &n).expect("check").is_exact);
    }

    #[test]
    fn input_normalization_is_idempotent(input in "[ xyd()sen^=0*+-]{0,24}") {
        let once = normalize_input(&input);
        prop_assert_eq!(normalize_input(&once), once);
    }

    #[test]
    fn extraction_is_idempotent(m in potential(), n in potential()) {
        let input = format!("({})*dx+({})*dy", render(&m), render(&n));
        let first = Equation::parse(&input);
        prop_assume!(first.is_ok());
        let first = first.expect("checked above");
        let second = Equation::parse(&first.to_input()).expect("re-extraction");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn accepted_factors_make_the_equation_exact(
        terms in potential(),
        divisor in prop::sample::select(vec!["x", "y", "x*y", "x^2"]),
    ) {
        let phi = parse_expr(&render(&terms)).expect("parse potential");
        let d = parse_expr(divisor).expect("parse divisor");
        let m = normalize(&exact_ode::div(differentiate("x", &phi), d.clone())).expect("normalize M");
        let n = normalize(&exact_ode::div(differentiate("y", &phi), d)).expect("normalize N");
        prop_assume!(!(m.is_zero() && n.is_zero()));

        let record = analyze(&format!("({m})*dx+({n})*dy")).expect("analyze");
        match &record.factor {
            FactorOutcome::NotNeeded => prop_assert!(record.is_exact),
            FactorOutcome::Found(t) => prop_assert!(t.is_exact_new),
            FactorOutcome::NotFound => prop_assert!(false, "no factor for {}", record.original_input),
        }
    }
}
