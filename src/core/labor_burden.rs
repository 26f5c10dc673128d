use crate::core::{LaborBurdenInputs, LaborBurdenResult};

/// Build up the true hourly cost of a worker from payroll taxes, insurance
/// and benefits.
///
/// Percentage components scale with the base wage. Health insurance is a flat
/// monthly premium spread across the paid hours in a year.
pub fn compute_labor_burden(inputs: &LaborBurdenInputs) -> LaborBurdenResult {
    let percent_total = inputs.fica_percent
        + inputs.unemployment_percent
        + inputs.workers_comp_percent
        + inputs.general_liability_percent
        + inputs.paid_time_off_percent
        + inputs.other_percent;

    let percentage_burden_per_hour = inputs.base_wage * percent_total / 100.0;
    let health_insurance_per_hour = if inputs.annual_hours > 0.0 {
        inputs.health_insurance_monthly * 12.0 / inputs.annual_hours
    } else {
        0.0
    };
    let burdened_hourly_cost =
        inputs.base_wage + percentage_burden_per_hour + health_insurance_per_hour;
    let burden_percent = if inputs.base_wage > 0.0 {
        (burdened_hourly_cost - inputs.base_wage) / inputs.base_wage * 100.0
    } else {
        0.0
    };

    LaborBurdenResult {
        percentage_burden_per_hour,
        health_insurance_per_hour,
        burdened_hourly_cost,
        burden_percent,
    }
}
