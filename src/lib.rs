pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::PricingConfig};
pub use crate::core::batch::{BatchEngine, BatchSummary, OutputFormat};
pub use crate::core::break_even::compute_break_even;
pub use crate::core::job_cost::compute_job_cost;
pub use crate::core::labor_burden::compute_labor_burden;
pub use crate::core::markup_margin::{
    compute_from_margin, compute_from_markup, compute_markup_margin, price_for_target_margin,
    reference_table,
};
pub use crate::core::overhead_rate::compute_overhead_rate;
pub use crate::domain::model::*;
pub use crate::utils::error::{PricingError, Result};
