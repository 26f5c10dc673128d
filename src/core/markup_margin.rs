//! Markup and margin conversions.
//!
//! Markup is profit over cost, margin is profit over selling price. Pricing by
//! margin divides by `1 - margin`, so any margin of 100% or more has no valid
//! selling price and comes back as `None`.

use crate::core::{
    MarginQuote, MarkupMarginInputs, MarkupMarginResult, MarkupQuote, PricingMode, ReferenceRow,
    TargetMarginInputs, TargetMarginResult,
};

pub const REFERENCE_MARKUPS: [f64; 8] = [10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 50.0];

pub fn compute_from_markup(cost: f64, markup_percent: f64) -> MarkupQuote {
    let selling_price = cost * (1.0 + markup_percent / 100.0);
    let profit = selling_price - cost;
    let effective_margin_percent = if selling_price > 0.0 {
        profit / selling_price * 100.0
    } else {
        0.0
    };

    MarkupQuote {
        selling_price,
        profit,
        effective_margin_percent,
    }
}

/// Returns `None` when `margin_percent >= 100` or is not a number.
pub fn compute_from_margin(cost: f64, margin_percent: f64) -> Option<MarginQuote> {
    if !margin_percent.is_finite() || margin_percent >= 100.0 {
        tracing::debug!("No valid price for a {}% margin", margin_percent);
        return None;
    }

    let selling_price = cost / (1.0 - margin_percent / 100.0);
    let profit = selling_price - cost;
    let effective_markup_percent = if cost > 0.0 {
        profit / cost * 100.0
    } else {
        0.0
    };

    Some(MarginQuote {
        selling_price,
        profit,
        effective_markup_percent,
    })
}

/// Evaluates whichever formula the mode selects. The entered percentage is
/// reported back as-is for its own side of the conversion.
pub fn compute_markup_margin(inputs: &MarkupMarginInputs) -> Option<MarkupMarginResult> {
    match inputs.mode {
        PricingMode::Markup => {
            let quote = compute_from_markup(inputs.cost, inputs.percentage);
            Some(MarkupMarginResult {
                selling_price: quote.selling_price,
                profit: quote.profit,
                effective_markup_percent: inputs.percentage,
                effective_margin_percent: quote.effective_margin_percent,
            })
        }
        PricingMode::Margin => {
            compute_from_margin(inputs.cost, inputs.percentage).map(|quote| MarkupMarginResult {
                selling_price: quote.selling_price,
                profit: quote.profit,
                effective_markup_percent: quote.effective_markup_percent,
                effective_margin_percent: inputs.percentage,
            })
        }
    }
}

pub fn markup_to_margin(markup_percent: f64) -> f64 {
    let denominator = 1.0 + markup_percent / 100.0;
    if denominator == 0.0 {
        return 0.0;
    }
    markup_percent / denominator
}

pub fn margin_to_markup(margin_percent: f64) -> Option<f64> {
    if !margin_percent.is_finite() || margin_percent >= 100.0 {
        return None;
    }
    Some(margin_percent / (1.0 - margin_percent / 100.0))
}

pub fn reference_table() -> Vec<ReferenceRow> {
    REFERENCE_MARKUPS
        .iter()
        .map(|&markup_percent| ReferenceRow {
            markup_percent,
            margin_percent: markup_to_margin(markup_percent),
        })
        .collect()
}

/// Price work so the gross margin covers overhead plus the desired net profit.
pub fn price_for_target_margin(inputs: &TargetMarginInputs) -> Option<TargetMarginResult> {
    let required_margin_percent = inputs.overhead_percent + inputs.net_profit_percent;
    let required_markup_percent = margin_to_markup(required_margin_percent)?;
    let quote = compute_from_margin(inputs.direct_costs, required_margin_percent)?;

    Some(TargetMarginResult {
        required_margin_percent,
        required_markup_percent,
        selling_price: quote.selling_price,
        gross_profit: quote.profit,
    })
}
