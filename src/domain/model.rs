use crate::utils::parse::coerce_number;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct JobCostInputs {
    pub labor_hours: f64,
    pub hourly_rate: f64,
    pub labor_burden_percent: f64,
    pub materials_cost: f64,
    pub subcontractor_cost: f64,
    pub equipment_cost: f64,
    pub overhead_percent: f64,
    pub profit_percent: f64,
}

/// Raw text for each job cost field, as typed into a form.
#[derive(Debug, Clone, Copy, Default)]
pub struct JobCostText<'a> {
    pub labor_hours: &'a str,
    pub hourly_rate: &'a str,
    pub labor_burden_percent: &'a str,
    pub materials_cost: &'a str,
    pub subcontractor_cost: &'a str,
    pub equipment_cost: &'a str,
    pub overhead_percent: &'a str,
    pub profit_percent: &'a str,
}

impl JobCostInputs {
    /// Values a fresh calculator starts with.
    pub fn sample() -> Self {
        Self {
            labor_hours: 40.0,
            hourly_rate: 35.0,
            labor_burden_percent: 35.0,
            materials_cost: 2000.0,
            subcontractor_cost: 0.0,
            equipment_cost: 500.0,
            overhead_percent: 15.0,
            profit_percent: 10.0,
        }
    }

    pub fn from_text(text: &JobCostText<'_>) -> Self {
        Self {
            labor_hours: coerce_number(text.labor_hours),
            hourly_rate: coerce_number(text.hourly_rate),
            labor_burden_percent: coerce_number(text.labor_burden_percent),
            materials_cost: coerce_number(text.materials_cost),
            subcontractor_cost: coerce_number(text.subcontractor_cost),
            equipment_cost: coerce_number(text.equipment_cost),
            overhead_percent: coerce_number(text.overhead_percent),
            profit_percent: coerce_number(text.profit_percent),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct JobCostResult {
    pub base_labor_cost: f64,
    pub labor_burden_amount: f64,
    pub total_labor_cost: f64,
    pub direct_costs: f64,
    pub overhead_amount: f64,
    pub cost_before_profit: f64,
    pub profit_amount: f64,
    pub total_job_price: f64,
    pub effective_margin_percent: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum PricingMode {
    /// Percentage is profit over cost.
    #[default]
    Markup,
    /// Percentage is profit over selling price.
    Margin,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkupMarginInputs {
    pub mode: PricingMode,
    pub cost: f64,
    pub percentage: f64,
}

impl MarkupMarginInputs {
    pub fn sample() -> Self {
        Self {
            mode: PricingMode::Markup,
            cost: 1000.0,
            percentage: 25.0,
        }
    }

    pub fn from_text(mode: PricingMode, cost: &str, percentage: &str) -> Self {
        Self {
            mode,
            cost: coerce_number(cost),
            percentage: coerce_number(percentage),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkupMarginResult {
    pub selling_price: f64,
    pub profit: f64,
    pub effective_markup_percent: f64,
    pub effective_margin_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkupQuote {
    pub selling_price: f64,
    pub profit: f64,
    pub effective_margin_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginQuote {
    pub selling_price: f64,
    pub profit: f64,
    pub effective_markup_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRow {
    pub markup_percent: f64,
    pub margin_percent: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetMarginInputs {
    pub direct_costs: f64,
    pub overhead_percent: f64,
    pub net_profit_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetMarginResult {
    pub required_margin_percent: f64,
    pub required_markup_percent: f64,
    pub selling_price: f64,
    pub gross_profit: f64,
}

/// Annual totals from the books, used to derive a company overhead rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OverheadRateInputs {
    pub annual_overhead: f64,
    pub annual_direct_costs: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverheadRateResult {
    pub overhead_percent: f64,
}

pub const STANDARD_ANNUAL_HOURS: f64 = 2080.0;

/// Employer-side costs of one hour of labor. Percent fields are of base wage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaborBurdenInputs {
    pub base_wage: f64,
    pub fica_percent: f64,
    pub unemployment_percent: f64,
    pub workers_comp_percent: f64,
    pub general_liability_percent: f64,
    pub paid_time_off_percent: f64,
    pub other_percent: f64,
    pub health_insurance_monthly: f64,
    pub annual_hours: f64,
}

impl Default for LaborBurdenInputs {
    fn default() -> Self {
        Self {
            base_wage: 0.0,
            // Social Security 6.2% + Medicare 1.45%
            fica_percent: 7.65,
            unemployment_percent: 0.0,
            workers_comp_percent: 0.0,
            general_liability_percent: 0.0,
            paid_time_off_percent: 0.0,
            other_percent: 0.0,
            health_insurance_monthly: 0.0,
            annual_hours: STANDARD_ANNUAL_HOURS,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LaborBurdenResult {
    pub percentage_burden_per_hour: f64,
    pub health_insurance_per_hour: f64,
    pub burdened_hourly_cost: f64,
    pub burden_percent: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenInputs {
    pub fixed_costs: f64,
    pub gross_margin_percent: f64,
    pub average_job_revenue: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenResult {
    pub break_even_revenue: f64,
    pub gross_profit_per_job: f64,
    pub jobs_to_break_even: Option<u64>,
}
