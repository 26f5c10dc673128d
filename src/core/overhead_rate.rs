use crate::core::{OverheadRateInputs, OverheadRateResult};

/// Overhead as a percentage of direct costs, the figure a job's
/// `overhead_percent` is meant to carry.
///
/// Returns `None` when annual direct costs are zero or negative.
pub fn compute_overhead_rate(inputs: &OverheadRateInputs) -> Option<OverheadRateResult> {
    if !inputs.annual_direct_costs.is_finite() || inputs.annual_direct_costs <= 0.0 {
        tracing::debug!(
            "No overhead rate for {} of annual direct costs",
            inputs.annual_direct_costs
        );
        return None;
    }

    Some(OverheadRateResult {
        overhead_percent: inputs.annual_overhead / inputs.annual_direct_costs * 100.0,
    })
}
