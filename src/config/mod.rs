pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_args::*;

#[cfg(feature = "cli")]
mod cli_args {
    use crate::core::batch::OutputFormat;
    use crate::core::{
        BreakEvenInputs, ConfigProvider, JobCostInputs, LaborBurdenInputs, OverheadRateInputs,
        PricingMode, TargetMarginInputs,
    };
    use crate::domain::model::{JobCostText, STANDARD_ANNUAL_HOURS};
    use crate::utils::error::Result;
    use crate::utils::parse::coerce_number;
    use crate::utils::validation::{validate_path, Validate};
    use clap::{Args, Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "contractor-pricing")]
    #[command(about = "Job costing, markup/margin and break-even calculators for contractors")]
    pub struct CliConfig {
        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        /// TOML file with default percentages
        #[arg(short, long, global = true)]
        pub config: Option<String>,

        /// Print results as JSON
        #[arg(long, global = true)]
        pub json: bool,

        /// Emit logs as JSON lines on stderr
        #[arg(long, global = true)]
        pub log_json: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Price a job from labor, direct costs, overhead and profit
        Job(JobArgs),
        /// Selling price from cost and a markup percentage
        Markup(PercentArgs),
        /// Selling price from cost and a margin percentage
        Margin(PercentArgs),
        /// Markup or margin, chosen with --mode
        Convert(ConvertArgs),
        /// Common markups and their equivalent margins
        Table,
        /// Price direct costs to hit overhead plus net profit
        Target(TargetArgs),
        /// Burdened hourly cost of a worker
        Burden(BurdenArgs),
        /// Overhead rate from annual overhead and direct costs
        Overhead(OverheadArgs),
        /// Revenue needed to cover fixed costs
        BreakEven(BreakEvenArgs),
        /// Price every job in a CSV file
        Batch(BatchArgs),
    }

    #[derive(Debug, Clone, Args)]
    pub struct JobArgs {
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pub labor_hours: String,

        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pub hourly_rate: String,

        /// Defaults to the configured labor burden
        #[arg(long, allow_hyphen_values = true)]
        pub labor_burden_percent: Option<String>,

        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pub materials_cost: String,

        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pub subcontractor_cost: String,

        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pub equipment_cost: String,

        /// Defaults to the configured overhead
        #[arg(long, allow_hyphen_values = true)]
        pub overhead_percent: Option<String>,

        /// Defaults to the configured profit
        #[arg(long, allow_hyphen_values = true)]
        pub profit_percent: Option<String>,
    }

    impl JobArgs {
        pub fn to_inputs<C: ConfigProvider>(&self, defaults: &C) -> JobCostInputs {
            let burden = self
                .labor_burden_percent
                .clone()
                .unwrap_or_else(|| defaults.labor_burden_percent().to_string());
            let overhead = self
                .overhead_percent
                .clone()
                .unwrap_or_else(|| defaults.overhead_percent().to_string());
            let profit = self
                .profit_percent
                .clone()
                .unwrap_or_else(|| defaults.profit_percent().to_string());

            JobCostInputs::from_text(&JobCostText {
                labor_hours: &self.labor_hours,
                hourly_rate: &self.hourly_rate,
                labor_burden_percent: &burden,
                materials_cost: &self.materials_cost,
                subcontractor_cost: &self.subcontractor_cost,
                equipment_cost: &self.equipment_cost,
                overhead_percent: &overhead,
                profit_percent: &profit,
            })
        }
    }

    #[derive(Debug, Clone, Args)]
    pub struct PercentArgs {
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pub cost: String,

        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pub percent: String,
    }

    impl PercentArgs {
        pub fn values(&self) -> (f64, f64) {
            (coerce_number(&self.cost), coerce_number(&self.percent))
        }
    }

    #[derive(Debug, Clone, Args)]
    pub struct ConvertArgs {
        #[arg(long, value_enum, default_value_t = PricingMode::Markup)]
        pub mode: PricingMode,

        #[command(flatten)]
        pub values: PercentArgs,
    }

    #[derive(Debug, Clone, Args)]
    pub struct TargetArgs {
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pub direct_costs: String,

        /// Defaults to the configured overhead
        #[arg(long, allow_hyphen_values = true)]
        pub overhead_percent: Option<String>,

        /// Defaults to the configured profit
        #[arg(long, allow_hyphen_values = true)]
        pub net_profit_percent: Option<String>,
    }

    impl TargetArgs {
        pub fn to_inputs<C: ConfigProvider>(&self, defaults: &C) -> TargetMarginInputs {
            TargetMarginInputs {
                direct_costs: coerce_number(&self.direct_costs),
                overhead_percent: self
                    .overhead_percent
                    .as_deref()
                    .map(coerce_number)
                    .unwrap_or_else(|| defaults.overhead_percent()),
                net_profit_percent: self
                    .net_profit_percent
                    .as_deref()
                    .map(coerce_number)
                    .unwrap_or_else(|| defaults.profit_percent()),
            }
        }
    }

    #[derive(Debug, Clone, Args)]
    pub struct BurdenArgs {
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pub base_wage: String,

        /// Social Security plus Medicare
        #[arg(long, default_value = "7.65", allow_hyphen_values = true)]
        pub fica_percent: String,

        /// FUTA plus SUTA
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pub unemployment_percent: String,

        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pub workers_comp_percent: String,

        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pub general_liability_percent: String,

        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pub paid_time_off_percent: String,

        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pub other_percent: String,

        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pub health_insurance_monthly: String,

        #[arg(long)]
        pub annual_hours: Option<String>,
    }

    impl BurdenArgs {
        pub fn to_inputs(&self) -> LaborBurdenInputs {
            LaborBurdenInputs {
                base_wage: coerce_number(&self.base_wage),
                fica_percent: coerce_number(&self.fica_percent),
                unemployment_percent: coerce_number(&self.unemployment_percent),
                workers_comp_percent: coerce_number(&self.workers_comp_percent),
                general_liability_percent: coerce_number(&self.general_liability_percent),
                paid_time_off_percent: coerce_number(&self.paid_time_off_percent),
                other_percent: coerce_number(&self.other_percent),
                health_insurance_monthly: coerce_number(&self.health_insurance_monthly),
                annual_hours: self
                    .annual_hours
                    .as_deref()
                    .map(coerce_number)
                    .unwrap_or(STANDARD_ANNUAL_HOURS),
            }
        }
    }

    #[derive(Debug, Clone, Args)]
    pub struct BreakEvenArgs {
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pub fixed_costs: String,

        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pub gross_margin_percent: String,

        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pub average_job_revenue: String,
    }

    impl BreakEvenArgs {
        pub fn to_inputs(&self) -> BreakEvenInputs {
            BreakEvenInputs {
                fixed_costs: coerce_number(&self.fixed_costs),
                gross_margin_percent: coerce_number(&self.gross_margin_percent),
                average_job_revenue: coerce_number(&self.average_job_revenue),
            }
        }
    }

    #[derive(Debug, Clone, Args)]
    pub struct OverheadArgs {
        /// Rent, office staff, vehicles, insurance and other non-job costs
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pub annual_overhead: String,

        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pub annual_direct_costs: String,
    }

    impl OverheadArgs {
        pub fn to_inputs(&self) -> OverheadRateInputs {
            OverheadRateInputs {
                annual_overhead: coerce_number(&self.annual_overhead),
                annual_direct_costs: coerce_number(&self.annual_direct_costs),
            }
        }
    }

    #[derive(Debug, Clone, Args)]
    pub struct BatchArgs {
        /// CSV file of jobs, one per row
        #[arg(long)]
        pub input: String,

        /// Output file; `.json` selects JSON unless --format is given
        #[arg(long, default_value = "quotes.csv")]
        pub output: String,

        #[arg(long, value_enum)]
        pub format: Option<OutputFormat>,
    }

    impl BatchArgs {
        pub fn output_format(&self) -> OutputFormat {
            self.format
                .unwrap_or_else(|| OutputFormat::from_path(&self.output))
        }
    }

    impl Validate for BatchArgs {
        fn validate(&self) -> Result<()> {
            validate_path("input", &self.input)?;
            validate_path("output", &self.output)?;
            Ok(())
        }
    }

}
