use exact_ode::{IvpOptions, NumericError, SlopeField, analyze, render_report, solve_ivp};

const EXERCISES: [&str; 10] = [
    "(x-y+1)*dx-dy=0",
    "(x*y^3+1)*dx+x^2*y^2*dy=0",
    "-y*dx+(x+y^2-1)*dy=0",
    "y*dx+(x-x^2*y)*dy=0",
    "x^2*y^2*dx+(x^3*y+y+3)*dy=0",
    "x^2*dx-(x^3*y^2+3*y^2)*dy=0",
    "(x^2+y^2)*dx+2*x*y*dy=0",
    "(3*x^2*y^2+2*x*y)*dx+(2*x^3*y+x^2)*dy=0",
    "(x^2+2*x+y)*dx+(1-x^2-y)*dy=0",
    "(cos(x)-sen(x)+sen(y))*dx+(cos(x)+sen(y)+cos(y))*dy=0",
];

fn main() {
    for (i, input) in EXERCISES.iter().enumerate() {
        println!("== exercise {} ==", i + 1);
        let record = match analyze(input) {
            Ok(record) => record,
            Err(err) => {
                eprintln!("analysis error: {err}");
                continue;
            }
        };
        for line in render_report(&record) {
            println!("{line}");
        }

        let trajectory = record
            .explicit_form()
            .map_err(NumericError::from)
            .and_then(|form| SlopeField::from_explicit(&form))
            .and_then(|field| solve_ivp(&field, (1.0, 2.0), 1.0, &IvpOptions::default().with_samples(5)));
        match trajectory {
            Ok(t) => {
                let points: Vec<String> = t.points.iter().map(|(x, y)| format!("({x:.2}, {y:.6})")).collect();
                println!("y(x) from (1, 1): {}", points.join(" "));
            }
            Err(err) => println!("numeric solution: {err}"),
        }
        println!();
    }
}
