use exact_ode::{NOT_FOUND_LABEL, analyze, render_report};

#[test]
fn report_for_a_found_factor() {
    let record = analyze("y*dx - x*dy = 0").expect("analyze");
    let lines = render_report(&record);
    let expected_prefix = [
        "equation: y*dx-x*dy",
        "exact: no",
        "M = y",
        "N = -x",
        "∂M/∂y = 1",
        "∂N/∂x = -1",
        "∂M/∂y - ∂N/∂x = 2",
        "integrating factor: 1/x^2 [step 1 mu-x: μ(x)]",
        "M' = y/x^2",
        "N' = -1/x",
    ];
    assert_eq!(&lines[..expected_prefix.len()], &expected_prefix);
    assert!(lines.contains(&"exact after transform: yes".to_string()));
    assert_eq!(
        lines.last().map(String::as_str),
        Some("explicit form: dy/dx = -(y)/(-x)")
    );
}

#[test]
fn report_for_an_exact_equation() {
    let record = analyze("2*x*y*dx + x^2*dy = 0").expect("analyze");
    let lines = render_report(&record);
    assert!(lines.contains(&"exact: yes".to_string()));
    assert!(lines.iter().all(|line| !line.starts_with("integrating factor")));
    assert_eq!(
        lines.last().map(String::as_str),
        Some("explicit form: dy/dx = -(2*x*y)/(x^2)")
    );
}

#[test]
fn report_for_an_exhausted_search() {
    let record = analyze("log(x+y)*dx+dy=0").expect("analyze");
    let lines = render_report(&record);
    assert!(lines.contains(&format!("integrating factor: {NOT_FOUND_LABEL}")));
}

#[test]
fn report_marks_sampled_verdicts() {
    let record = analyze("y*(sin(x)^2+cos(x)^2)*dx+x*dy=0").expect("analyze");
    assert!(record.is_exact);
    assert!(record.sampled);
    let lines = render_report(&record);
    assert!(lines.contains(&"exact: yes (numerically sampled)".to_string()));
}
