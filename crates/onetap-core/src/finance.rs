//! Closed-form finance calculators. Rates are given in percent, money
//! values are plain floats; rounding is left to the presentation layer.

use serde::Serialize;

use crate::error::ToolError;

fn range_err(field: &str, reason: &str) -> ToolError {
    ToolError::Range {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

// ── Compound interest ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompoundResult {
    pub final_amount: f64,
    pub interest_earned: f64,
}

/// A = P (1 + r/(100 n))^(n t)
pub fn compound_interest(
    principal: f64,
    annual_rate: f64,
    compounds_per_year: u32,
    years: f64,
) -> Result<CompoundResult, ToolError> {
    if !principal.is_finite() || principal < 0.0 {
        return Err(range_err("principal", "must be a non-negative amount"));
    }
    if !annual_rate.is_finite() || annual_rate < 0.0 {
        return Err(range_err("rate", "must be a non-negative percentage"));
    }
    if compounds_per_year == 0 {
        return Err(range_err("frequency", "must compound at least once per year"));
    }
    if !years.is_finite() || years < 0.0 {
        return Err(range_err("years", "must be a non-negative duration"));
    }
    let n = f64::from(compounds_per_year);
    let final_amount = principal * (1.0 + annual_rate / (100.0 * n)).powf(n * years);
    Ok(CompoundResult {
        final_amount,
        interest_earned: final_amount - principal,
    })
}

// ── Loan payments ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanResult {
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
}

/// Standard amortization: M = P r / (1 - (1+r)^-n) with the monthly
/// rate r. A zero rate degrades to principal over the term.
pub fn loan_payment(principal: f64, annual_rate: f64, years: u32) -> Result<LoanResult, ToolError> {
    if !principal.is_finite() || principal <= 0.0 {
        return Err(range_err("principal", "must be a positive amount"));
    }
    if !annual_rate.is_finite() || annual_rate < 0.0 {
        return Err(range_err("rate", "must be a non-negative percentage"));
    }
    if years == 0 {
        return Err(range_err("term", "must be at least one year"));
    }
    // Widen before scaling; a u32 term times 12 can exceed u32::MAX.
    let months = f64::from(years) * 12.0;
    let monthly_rate = annual_rate / 100.0 / 12.0;
    let monthly_payment = if monthly_rate.abs() < f64::EPSILON {
        principal / months
    } else {
        // The (1+r)^-n form stays finite for arbitrarily long terms.
        principal * monthly_rate / (1.0 - (1.0 + monthly_rate).powf(-months))
    };
    let total_paid = monthly_payment * months;
    Ok(LoanResult {
        monthly_payment,
        total_paid,
        total_interest: total_paid - principal,
    })
}

// ── Tips ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TipResult {
    pub tip_amount: f64,
    pub total: f64,
    pub per_person: f64,
}

pub fn tip(bill: f64, tip_percent: f64, people: u32) -> Result<TipResult, ToolError> {
    if !bill.is_finite() || bill < 0.0 {
        return Err(range_err("bill", "must be a non-negative amount"));
    }
    if !tip_percent.is_finite() || tip_percent < 0.0 {
        return Err(range_err("tip", "must be a non-negative percentage"));
    }
    if people == 0 {
        return Err(range_err("people", "the split needs at least one person"));
    }
    let tip_amount = bill * tip_percent / 100.0;
    let total = bill + tip_amount;
    Ok(TipResult {
        tip_amount,
        total,
        per_person: total / f64::from(people),
    })
}

// ── Percentages ─────────────────────────────────────────────────────

/// What percent of `total` is `value`.
pub fn percentage(value: f64, total: f64) -> Result<f64, ToolError> {
    if !value.is_finite() || !total.is_finite() {
        return Err(range_err("value", "must be a finite number"));
    }
    if total.abs() < f64::EPSILON {
        return Err(range_err("total", "cannot take a percentage of zero"));
    }
    Ok(value / total * 100.0)
}
