pub mod batch;
pub mod break_even;
pub mod job_cost;
pub mod labor_burden;
pub mod markup_margin;
pub mod overhead_rate;

pub use crate::domain::model::{
    BreakEvenInputs, BreakEvenResult, JobCostInputs, JobCostResult, LaborBurdenInputs,
    LaborBurdenResult, MarginQuote, MarkupMarginInputs, MarkupMarginResult, MarkupQuote,
    OverheadRateInputs, OverheadRateResult, PricingMode, ReferenceRow, TargetMarginInputs, TargetMarginResult,
};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
