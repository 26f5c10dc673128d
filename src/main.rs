use clap::Parser;
use contractor_pricing::config::{Command, CliConfig};
use contractor_pricing::core::{ConfigProvider, MarkupMarginInputs, PricingMode};
use contractor_pricing::utils::error::{ErrorSeverity, PricingError, Result};
use contractor_pricing::utils::format::{format_currency, format_percent};
use contractor_pricing::utils::{logger, validation::Validate};
use contractor_pricing::{
    compute_break_even, compute_job_cost, compute_labor_burden, compute_markup_margin,
    compute_overhead_rate, price_for_target_margin, reference_table, BatchEngine, LocalStorage, PricingConfig,
};
use serde::Serialize;

fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        if e.severity() == ErrorSeverity::Low {
            // Not a failure: the inputs simply have no answer.
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "valid": false,
                        "reason": e.user_friendly_message(),
                    })
                );
            } else {
                println!("⚠️  {}", e.user_friendly_message());
            }
            return;
        }

        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn load_config(cli: &CliConfig) -> Result<PricingConfig> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading pricing defaults from: {}", path);
            PricingConfig::from_file(path)?
        }
        None => PricingConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn run(cli: &CliConfig) -> Result<()> {
    let config = load_config(cli)?;
    let symbol = config.currency_symbol().to_string();
    let money = |value: f64| format_currency(value, &symbol);

    match &cli.command {
        Command::Job(args) => {
            let inputs = args.to_inputs(&config);
            let result = compute_job_cost(&inputs);
            if cli.json {
                return print_json(&result);
            }
            println!("📋 Job Cost");
            print_line("Base labor", &money(result.base_labor_cost));
            print_line(
                &format!("Labor burden ({})", format_percent(inputs.labor_burden_percent, 1)),
                &money(result.labor_burden_amount),
            );
            print_line("Total labor", &money(result.total_labor_cost));
            print_line("Materials", &money(inputs.materials_cost));
            print_line("Subcontractors", &money(inputs.subcontractor_cost));
            print_line("Equipment", &money(inputs.equipment_cost));
            print_line("Direct costs", &money(result.direct_costs));
            print_line(
                &format!("Overhead ({})", format_percent(inputs.overhead_percent, 1)),
                &money(result.overhead_amount),
            );
            print_line("Cost before profit", &money(result.cost_before_profit));
            print_line(
                &format!("Profit ({})", format_percent(inputs.profit_percent, 1)),
                &money(result.profit_amount),
            );
            print_line("Total job price", &money(result.total_job_price));
            print_line(
                "Effective margin",
                &format_percent(result.effective_margin_percent, 1),
            );
        }
        Command::Markup(args) => {
            let (cost, percent) = args.values();
            price_by_mode(cli.json, PricingMode::Markup, cost, percent, &money)?;
        }
        Command::Margin(args) => {
            let (cost, percent) = args.values();
            price_by_mode(cli.json, PricingMode::Margin, cost, percent, &money)?;
        }
        Command::Convert(args) => {
            let (cost, percent) = args.values.values();
            price_by_mode(cli.json, args.mode, cost, percent, &money)?;
        }
        Command::Table => {
            let table = reference_table();
            if cli.json {
                return print_json(&table);
            }
            println!("📋 Markup → Margin");
            for row in table {
                print_line(
                    &format_percent(row.markup_percent, 0),
                    &format_percent(row.margin_percent, 2),
                );
            }
        }
        Command::Target(args) => {
            let inputs = args.to_inputs(&config);
            let result = price_for_target_margin(&inputs).ok_or_else(|| {
                PricingError::UndefinedPrice {
                    reason: format!(
                        "overhead plus profit is {}, which leaves nothing for costs",
                        format_percent(inputs.overhead_percent + inputs.net_profit_percent, 1)
                    ),
                }
            })?;
            if cli.json {
                return print_json(&result);
            }
            println!("📋 Target Margin Pricing");
            print_line("Direct costs", &money(inputs.direct_costs));
            print_line(
                "Required margin",
                &format_percent(result.required_margin_percent, 1),
            );
            print_line(
                "Required markup",
                &format_percent(result.required_markup_percent, 1),
            );
            print_line("Gross profit", &money(result.gross_profit));
            print_line("Selling price", &money(result.selling_price));
        }
        Command::Burden(args) => {
            let inputs = args.to_inputs();
            let result = compute_labor_burden(&inputs);
            if cli.json {
                return print_json(&result);
            }
            println!("📋 Labor Burden");
            print_line("Base wage", &money(inputs.base_wage));
            print_line("Taxes, insurance, PTO", &money(result.percentage_burden_per_hour));
            print_line("Health insurance", &money(result.health_insurance_per_hour));
            print_line("Burdened hourly cost", &money(result.burdened_hourly_cost));
            print_line("Labor burden", &format_percent(result.burden_percent, 1));
        }
        Command::Overhead(args) => {
            let inputs = args.to_inputs();
            let result = compute_overhead_rate(&inputs).ok_or_else(|| {
                PricingError::UndefinedPrice {
                    reason: "annual direct costs must be above zero to spread overhead over"
                        .to_string(),
                }
            })?;
            if cli.json {
                return print_json(&result);
            }
            println!("📋 Overhead Rate");
            print_line("Annual overhead", &money(inputs.annual_overhead));
            print_line("Annual direct costs", &money(inputs.annual_direct_costs));
            print_line("Overhead rate", &format_percent(result.overhead_percent, 1));
        }
        Command::BreakEven(args) => {
            let inputs = args.to_inputs();
            let result = compute_break_even(&inputs).ok_or_else(|| PricingError::UndefinedPrice {
                reason: "a gross margin above 0% is needed to ever cover fixed costs".to_string(),
            })?;
            if cli.json {
                return print_json(&result);
            }
            println!("📋 Break-Even");
            print_line("Fixed costs", &money(inputs.fixed_costs));
            print_line(
                "Gross margin",
                &format_percent(inputs.gross_margin_percent, 1),
            );
            print_line("Break-even revenue", &money(result.break_even_revenue));
            if let Some(jobs) = result.jobs_to_break_even {
                print_line("Gross profit per job", &money(result.gross_profit_per_job));
                print_line("Jobs to break even", &jobs.to_string());
            }
        }
        Command::Batch(args) => {
            args.validate()?;
            let format = args.output_format();
            let engine = BatchEngine::new(LocalStorage::new("."), config.clone());
            let summary = engine.run(&args.input, &args.output, format)?;
            if cli.json {
                return print_json(&serde_json::json!({
                    "rows": summary.rows,
                    "total_price": summary.total_price,
                    "output_path": summary.output_path,
                }));
            }
            println!("✅ Priced {} jobs", summary.rows);
            println!("💰 Combined price: {}", money(summary.total_price));
            println!("📁 Output saved to: {}", summary.output_path);
        }
    }

    Ok(())
}

fn price_by_mode(
    json: bool,
    mode: PricingMode,
    cost: f64,
    percentage: f64,
    money: &dyn Fn(f64) -> String,
) -> Result<()> {
    let result = compute_markup_margin(&MarkupMarginInputs {
        mode,
        cost,
        percentage,
    })
    .ok_or_else(|| PricingError::UndefinedPrice {
        reason: format!(
            "a {} margin cannot be priced; margin must be below 100%",
            format_percent(percentage, 1)
        ),
    })?;

    if json {
        return print_json(&result);
    }

    let title = match mode {
        PricingMode::Markup => "📋 Markup",
        PricingMode::Margin => "📋 Margin",
    };
    println!("{}", title);
    print_line("Cost", &money(cost));
    print_line("Profit", &money(result.profit));
    print_line("Selling price", &money(result.selling_price));
    print_line(
        "Effective markup",
        &format_percent(result.effective_markup_percent, 1),
    );
    print_line(
        "Effective margin",
        &format_percent(result.effective_margin_percent, 1),
    );
    Ok(())
}

fn print_line(label: &str, value: &str) {
    println!("  {:<28}{:>16}", label, value);
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
