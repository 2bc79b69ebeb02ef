use exact_ode::{IvpOptions, NumericError, SlopeField, UNDEFINED_EXPLICIT, analyze, parse_expr, solve_ivp};

fn field(input: &str) -> SlopeField {
    SlopeField::new(parse_expr(input).expect("parse slope"))
}

#[test]
fn exponential_growth() {
    let trajectory = solve_ivp(&field("y"), (0.0, 1.0), 1.0, &IvpOptions::default()).expect("solve");
    assert_eq!(trajectory.points.len(), 200);
    let (x, y) = trajectory.last().expect("last point");
    assert_eq!(x, 1.0);
    assert!((y - std::f64::consts::E).abs() < 1e-4, "y(1) = {y}");
    assert!(trajectory.steps > 0);
}

#[test]
fn samples_are_evenly_spaced() {
    let options = IvpOptions::default().with_samples(5);
    let trajectory = solve_ivp(&field("x"), (0.0, 2.0), 0.0, &options).expect("solve");
    let xs: Vec<f64> = trajectory.xs().collect();
    assert_eq!(xs, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    for (x, y) in &trajectory.points {
        assert!((y - x * x / 2.0).abs() < 1e-9, "y({x}) = {y}");
    }
}

#[test]
fn integrates_backwards() {
    let options = IvpOptions::default().with_samples(11);
    let trajectory =
        solve_ivp(&field("y"), (1.0, 0.0), std::f64::consts::E, &options).expect("solve");
    let (x, y) = trajectory.last().expect("last point");
    assert_eq!(x, 0.0);
    assert!((y - 1.0).abs() < 1e-4, "y(0) = {y}");
}

#[test]
fn follows_the_explicit_form_of_an_analysis() {
    let record = analyze("(x-y+1)*dx-dy=0").expect("analyze");
    let slope = SlopeField::from_explicit(&record.explicit_form().expect("explicit")).expect("slope field");
    let trajectory = solve_ivp(&slope, (0.0, 1.0), 1.0, &IvpOptions::default()).expect("solve");
    let (_, y) = trajectory.last().expect("last point");
    let exact = 1.0 + (-1.0f64).exp();
    assert!((y - exact).abs() < 1e-4, "y(1) = {y}, expected {exact}");
}

#[test]
fn degenerate_intervals_and_sentinels() {
    let single = solve_ivp(&field("y"), (2.0, 2.0), 3.0, &IvpOptions::default()).expect("solve");
    assert_eq!(single.points, vec![(2.0, 3.0)]);

    assert_eq!(
        SlopeField::from_explicit(UNDEFINED_EXPLICIT),
        Err(NumericError::Undefined)
    );
    assert!(matches!(
        SlopeField::from_explicit("dy/dx = (x"),
        Err(NumericError::Parse(_))
    ));
    let bare = SlopeField::from_explicit("x*y").expect("bare slope");
    assert_eq!(bare.slope(2.0, 3.0), Ok(6.0));
}

#[test]
fn failures_are_reported() {
    let singular = solve_ivp(&field("1/x"), (0.0, 1.0), 0.0, &IvpOptions::default());
    assert_eq!(singular, Err(NumericError::Singular { x: 0.0, y: 0.0 }));

    let budget = IvpOptions::default().with_max_steps(3);
    assert!(matches!(
        solve_ivp(&field("y"), (0.0, 10.0), 1.0, &budget),
        Err(NumericError::StepSize { .. })
    ));

    let options = IvpOptions::default().with_samples(1);
    assert!(matches!(
        solve_ivp(&field("y"), (0.0, 1.0), 1.0, &options),
        Err(NumericError::InvalidOptions(_))
    ));
    let options = IvpOptions::default().with_tolerances(0.0, 1e-9);
    assert!(matches!(
        solve_ivp(&field("y"), (0.0, 1.0), 1.0, &options),
        Err(NumericError::InvalidOptions(_))
    ));
}
