use contractor_pricing::{
    compute_from_margin, compute_from_markup, compute_job_cost, compute_markup_margin,
    JobCostInputs, JobCostText, MarkupMarginInputs, PricingMode,
};

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[test]
fn test_job_cost_scenario() {
    let inputs = JobCostInputs {
        labor_hours: 40.0,
        hourly_rate: 35.0,
        labor_burden_percent: 35.0,
        materials_cost: 2000.0,
        subcontractor_cost: 0.0,
        equipment_cost: 500.0,
        overhead_percent: 15.0,
        profit_percent: 10.0,
    };
    let result = compute_job_cost(&inputs);

    assert_eq!(round2(result.base_labor_cost), 1400.0);
    assert_eq!(round2(result.labor_burden_amount), 490.0);
    assert_eq!(round2(result.total_labor_cost), 1890.0);
    assert_eq!(round2(result.direct_costs), 4390.0);
    assert_eq!(round2(result.overhead_amount), 658.5);
    assert_eq!(round2(result.cost_before_profit), 5048.5);
    assert_eq!(round2(result.profit_amount), 504.85);
    assert_eq!(round2(result.total_job_price), 5553.35);
    assert_eq!(round2(result.effective_margin_percent), 9.09);
}

#[test]
fn test_markup_scenario() {
    let result = compute_markup_margin(&MarkupMarginInputs::from_text(
        PricingMode::Markup,
        "1000",
        "20",
    ))
    .unwrap();

    assert_eq!(round2(result.selling_price), 1200.0);
    assert_eq!(round2(result.profit), 200.0);
    assert_eq!(round2(result.effective_margin_percent), 16.67);
}

#[test]
fn test_margin_scenario() {
    let result = compute_markup_margin(&MarkupMarginInputs::from_text(
        PricingMode::Margin,
        "1000",
        "30",
    ))
    .unwrap();

    assert_eq!(round2(result.selling_price), 1428.57);
    assert_eq!(round2(result.profit), 428.57);
    assert_eq!(round2(result.effective_markup_percent), 42.86);
}

#[test]
fn test_all_zero_inputs_produce_zero_outputs() {
    let job = compute_job_cost(&JobCostInputs::from_text(&JobCostText {
        labor_hours: "0",
        hourly_rate: "",
        labor_burden_percent: "0",
        materials_cost: "abc",
        subcontractor_cost: "0",
        equipment_cost: "0",
        overhead_percent: "0",
        profit_percent: "0",
    }));
    for value in [
        job.base_labor_cost,
        job.labor_burden_amount,
        job.total_labor_cost,
        job.direct_costs,
        job.overhead_amount,
        job.cost_before_profit,
        job.profit_amount,
        job.total_job_price,
        job.effective_margin_percent,
    ] {
        assert_eq!(value, 0.0);
    }

    let markup = compute_from_markup(0.0, 0.0);
    assert_eq!(markup.selling_price, 0.0);
    assert_eq!(markup.effective_margin_percent, 0.0);
}

#[test]
fn test_margin_boundary_never_renders_non_finite() {
    for margin in [100.0, 100.000_001, 250.0, f64::INFINITY] {
        assert!(compute_from_margin(1000.0, margin).is_none());
    }

    for margin in [0.0, 50.0, 99.0, 99.99, -20.0] {
        let quote = compute_from_margin(1000.0, margin).unwrap();
        assert!(quote.selling_price.is_finite());
        assert!(quote.profit.is_finite());
        assert!(quote.effective_markup_percent.is_finite());
    }
}

#[test]
fn test_markup_and_margin_round_trip() {
    let cost = 1000.0;
    for markup in [0.0, 10.0, 25.0, 33.3, 75.0, 150.0] {
        let margin = compute_from_markup(cost, markup).effective_margin_percent;
        let back = compute_from_margin(cost, margin).unwrap();
        assert!((back.effective_markup_percent - markup).abs() < 1e-9);
        assert!((back.selling_price - cost * (1.0 + markup / 100.0)).abs() < 1e-6);
    }
}
