use crate::core::job_cost::compute_job_cost;
use crate::core::{ConfigProvider, JobCostInputs, JobCostResult, Storage};
use crate::utils::error::{PricingError, Result};
use crate::utils::parse::coerce_optional;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    /// Picks JSON for `.json` paths and CSV for anything else.
    pub fn from_path(path: &str) -> Self {
        if path.to_ascii_lowercase().ends_with(".json") {
            OutputFormat::Json
        } else {
            OutputFormat::Csv
        }
    }
}

/// One priced job: the coerced inputs followed by every derived figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRow {
    pub job: String,
    pub labor_hours: f64,
    pub hourly_rate: f64,
    pub labor_burden_percent: f64,
    pub materials_cost: f64,
    pub subcontractor_cost: f64,
    pub equipment_cost: f64,
    pub overhead_percent: f64,
    pub profit_percent: f64,
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

impl QuoteRow {
    fn new(job: String, inputs: &JobCostInputs, result: &JobCostResult) -> Self {
        Self {
            job,
            labor_hours: inputs.labor_hours,
            hourly_rate: inputs.hourly_rate,
            labor_burden_percent: inputs.labor_burden_percent,
            materials_cost: inputs.materials_cost,
            subcontractor_cost: inputs.subcontractor_cost,
            equipment_cost: inputs.equipment_cost,
            overhead_percent: inputs.overhead_percent,
            profit_percent: inputs.profit_percent,
            base_labor_cost: result.base_labor_cost,
            labor_burden_amount: result.labor_burden_amount,
            total_labor_cost: result.total_labor_cost,
            direct_costs: result.direct_costs,
            overhead_amount: result.overhead_amount,
            cost_before_profit: result.cost_before_profit,
            profit_amount: result.profit_amount,
            total_job_price: result.total_job_price,
            effective_margin_percent: result.effective_margin_percent,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchTotals {
    pub jobs: usize,
    pub direct_costs: f64,
    pub profit_amount: f64,
    pub total_job_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub currency_symbol: String,
    pub quotes: Vec<QuoteRow>,
    pub totals: BatchTotals,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub rows: usize,
    pub total_price: f64,
    pub output_path: String,
}

/// Prices every job in a CSV file.
///
/// Cells are coerced like form input, so a blank or unreadable cell is `0`.
/// A percentage column that is absent from the header entirely falls back to
/// the configured default instead.
pub struct BatchEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> BatchEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn run(
        &self,
        input_path: &str,
        output_path: &str,
        format: OutputFormat,
    ) -> Result<BatchSummary> {
        tracing::info!("Reading jobs from {}", input_path);
        let raw = self.storage.read_file(input_path)?;
        let quotes = self.price_jobs(&raw)?;
        tracing::info!("Priced {} jobs", quotes.len());

        let totals = summarize(&quotes);
        let data = match format {
            OutputFormat::Csv => write_csv(&quotes)?,
            OutputFormat::Json => {
                let report = BatchReport {
                    generated_at: Utc::now(),
                    currency_symbol: self.config.currency_symbol().to_string(),
                    quotes,
                    totals: totals.clone(),
                };
                serde_json::to_vec_pretty(&report)?
            }
        };

        self.storage.write_file(output_path, &data)?;
        tracing::info!("Quotes written to {}", output_path);

        Ok(BatchSummary {
            rows: totals.jobs,
            total_price: totals.total_job_price,
            output_path: output_path.to_string(),
        })
    }

    pub fn price_jobs(&self, raw: &[u8]) -> Result<Vec<QuoteRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(raw);

        let columns: HashMap<String, usize> = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_ascii_lowercase(), i))
            .collect();

        if columns.is_empty() {
            return Err(PricingError::ProcessingError {
                message: "batch file has no header row".to_string(),
            });
        }

        let mut quotes = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let cell = |name: &str| columns.get(name).and_then(|&i| record.get(i));
            let number = |name: &str| coerce_optional(cell(name));
            // Only a column missing from the header takes the default; a short
            // row's missing cells read as blank.
            let percent = |name: &str, fallback: f64| {
                if columns.contains_key(name) {
                    number(name)
                } else {
                    fallback
                }
            };

            let inputs = JobCostInputs {
                labor_hours: number("labor_hours"),
                hourly_rate: number("hourly_rate"),
                labor_burden_percent: percent(
                    "labor_burden_percent",
                    self.config.labor_burden_percent(),
                ),
                materials_cost: number("materials_cost"),
                subcontractor_cost: number("subcontractor_cost"),
                equipment_cost: number("equipment_cost"),
                overhead_percent: percent("overhead_percent", self.config.overhead_percent()),
                profit_percent: percent("profit_percent", self.config.profit_percent()),
            };

            let job = cell("job")
                .filter(|label| !label.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("job-{}", index + 1));

            let result = compute_job_cost(&inputs);
            tracing::debug!("{}: total price {:.2}", job, result.total_job_price);
            quotes.push(QuoteRow::new(job, &inputs, &result));
        }

        Ok(quotes)
    }
}

pub fn summarize(quotes: &[QuoteRow]) -> BatchTotals {
    quotes.iter().fold(
        BatchTotals {
            jobs: quotes.len(),
            ..BatchTotals::default()
        },
        |mut totals, quote| {
            totals.direct_costs += quote.direct_costs;
            totals.profit_amount += quote.profit_amount;
            totals.total_job_price += quote.total_job_price;
            totals
        },
    )
}

fn write_csv(quotes: &[QuoteRow]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for quote in quotes {
        writer.serialize(quote)?;
    }
    writer.into_inner().map_err(|e| PricingError::ProcessingError {
        message: format!("failed to flush CSV output: {}", e),
    })
}
