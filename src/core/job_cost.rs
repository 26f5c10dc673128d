use crate::core::{JobCostInputs, JobCostResult};

/// Price a job from labor, direct costs, overhead and profit.
///
/// The order of operations is fixed: labor burden applies to base labor only,
/// overhead applies to all direct costs, and profit applies to cost including
/// overhead. Negative inputs are not rejected; they flow through the
/// arithmetic unchanged.
pub fn compute_job_cost(inputs: &JobCostInputs) -> JobCostResult {
    let base_labor_cost = inputs.labor_hours * inputs.hourly_rate;
    let labor_burden_amount = base_labor_cost * (inputs.labor_burden_percent / 100.0);
    let total_labor_cost = base_labor_cost + labor_burden_amount;
    let direct_costs = total_labor_cost
        + inputs.materials_cost
        + inputs.subcontractor_cost
        + inputs.equipment_cost;
    let overhead_amount = direct_costs * (inputs.overhead_percent / 100.0);
    let cost_before_profit = direct_costs + overhead_amount;
    let profit_amount = cost_before_profit * (inputs.profit_percent / 100.0);
    let total_job_price = cost_before_profit + profit_amount;
    let effective_margin_percent = if total_job_price > 0.0 {
        (profit_amount / total_job_price) * 100.0
    } else {
        0.0
    };

    tracing::debug!(
        "Job priced: direct={:.2} overhead={:.2} profit={:.2} total={:.2}",
        direct_costs,
        overhead_amount,
        profit_amount,
        total_job_price
    );

    JobCostResult {
        base_labor_cost,
        labor_burden_amount,
        total_labor_cost,
        direct_costs,
        overhead_amount,
        cost_before_profit,
        profit_amount,
        total_job_price,
        effective_margin_percent,
    }
}
