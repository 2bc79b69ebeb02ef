use crate::analysis::{AnalysisRecord, FactorOutcome, NOT_FOUND_LABEL};
use crate::format::expr::pretty;

fn verdict(exact: bool, sampled: bool) -> &'static str {
    match (exact, sampled) {
        (true, true) => "yes (numerically sampled)",
        (true, false) => "yes",
        (false, _) => "no",
    }
}

/// Render an `AnalysisRecord` into human-friendly lines.
pub fn render_report(record: &AnalysisRecord) -> Vec<String> {
    let mut lines = vec![
        format!("equation: {}", record.original_input),
        format!("exact: {}", verdict(record.is_exact, record.sampled)),
        format!("M = {}", pretty(&record.m)),
        format!("N = {}", pretty(&record.n)),
        format!("∂M/∂y = {}", pretty(&record.dm_dy)),
        format!("∂N/∂x = {}", pretty(&record.dn_dx)),
        format!("∂M/∂y - ∂N/∂x = {}", pretty(&record.difference)),
    ];

    match &record.factor {
        FactorOutcome::NotNeeded => {}
        FactorOutcome::NotFound => {
            lines.push(format!("integrating factor: {NOT_FOUND_LABEL}"));
            lines.push(" - try a change of variables to simplify the equation".to_string());
            lines.push(" - solve numerically if an approximate solution is enough".to_string());
        }
        FactorOutcome::Found(t) => {
            lines.push(format!(
                "integrating factor: {} [step {} {}: {}]",
                pretty(&t.factor),
                t.strategy.step(),
                t.strategy,
                t.label
            ));
            lines.push(format!("M' = {}", pretty(&t.m_new)));
            lines.push(format!("N' = {}", pretty(&t.n_new)));
            lines.push(format!("∂M'/∂y = {}", pretty(&t.dm_new_dy)));
            lines.push(format!("∂N'/∂x = {}", pretty(&t.dn_new_dx)));
            lines.push(format!("∂M'/∂y - ∂N'/∂x = {}", pretty(&t.difference_new)));
            lines.push(format!("exact after transform: {}", verdict(t.is_exact_new, t.sampled_new)));
        }
    }

    match record.explicit_form() {
        Ok(form) => lines.push(format!("explicit form: {form}")),
        Err(err) => lines.push(format!("explicit form: {err}")),
    }
    lines
}
