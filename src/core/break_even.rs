use crate::core::{BreakEvenInputs, BreakEvenResult};

/// Revenue needed before gross profit covers fixed costs.
///
/// Returns `None` when the gross margin is zero or negative, since no amount of
/// revenue reaches break-even then.
pub fn compute_break_even(inputs: &BreakEvenInputs) -> Option<BreakEvenResult> {
    if !inputs.gross_margin_percent.is_finite() || inputs.gross_margin_percent <= 0.0 {
        tracing::debug!(
            "No break-even point at {}% gross margin",
            inputs.gross_margin_percent
        );
        return None;
    }

    let margin_ratio = inputs.gross_margin_percent / 100.0;
    let break_even_revenue = inputs.fixed_costs / margin_ratio;
    let gross_profit_per_job = inputs.average_job_revenue * margin_ratio;
    let jobs_to_break_even = if gross_profit_per_job > 0.0 {
        Some((inputs.fixed_costs.max(0.0) / gross_profit_per_job).ceil() as u64)
    } else {
        None
    };

    Some(BreakEvenResult {
        break_even_revenue,
        gross_profit_per_job,
        jobs_to_break_even,
    })
}
