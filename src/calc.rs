// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! SIP, CAGR and intraday P&L calculators.
//!
//! All functions are pure and return full-precision `f64` values; rounding
//! belongs to the caller. Non-finite inputs and precondition violations are
//! reported as [`CalcError::InvalidInput`], never as NaN or infinity.

use crate::error::{CalcError, InputIssue};
use crate::models::{
    CagrInput, CagrResult, IntradayInput, IntradayResult, SipInput, SipResult, SipYear,
};

/// Largest share count that converts to `f64` without rounding (2^53).
pub const MAX_EXACT_QUANTITY: u64 = 1 << 53;

fn finite(field: &'static str, v: f64) -> Result<f64, CalcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CalcError::invalid(field, InputIssue::NotFinite))
    }
}

fn positive(field: &'static str, v: f64) -> Result<f64, CalcError> {
    let v = finite(field, v)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CalcError::invalid(field, InputIssue::NotPositive))
    }
}

fn finite_result(field: &'static str, v: f64) -> Result<f64, CalcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CalcError::invalid(field, InputIssue::Overflow))
    }
}

/// Value of `months` monthly contributions paid at the start of each month.
fn annuity_due(amount: f64, monthly_rate: f64, months: u64) -> f64 {
    let n = months as f64;
    if monthly_rate == 0.0 {
        return amount * n;
    }
    // ln_1p keeps tiny rates from collapsing 1 + r to exactly 1.
    let growth_m1 = if monthly_rate > -1.0 {
        (n * monthly_rate.ln_1p()).exp_m1()
    } else {
        (1.0 + monthly_rate).powf(n) - 1.0
    };
    amount * (growth_m1 / monthly_rate) * (1.0 + monthly_rate)
}

fn check_sip(input: &SipInput) -> Result<(), CalcError> {
    positive("monthly_amount", input.monthly_amount)?;
    finite("annual_rate_percent", input.annual_rate_percent)?;
    if input.years == 0 {
        return Err(CalcError::invalid("years", InputIssue::NotPositive));
    }
    Ok(())
}

pub fn calculate_sip(input: &SipInput) -> Result<SipResult, CalcError> {
    check_sip(input)?;
    let months = input.months();
    let future_value = finite_result(
        "future_value",
        annuity_due(input.monthly_amount, input.monthly_rate(), months),
    )?;
    let total_invested = finite_result("total_invested", input.monthly_amount * months as f64)?;
    Ok(SipResult {
        future_value,
        total_invested,
        returns: future_value - total_invested,
    })
}

/// Year-end snapshots of a SIP, one row per year. The last row matches
/// [`calculate_sip`] for the same input.
pub fn sip_schedule(input: &SipInput) -> Result<Vec<SipYear>, CalcError> {
    check_sip(input)?;
    let rate = input.monthly_rate();
    (1..=input.years)
        .map(|year| -> Result<SipYear, CalcError> {
            let months = u64::from(year) * 12;
            let value =
                finite_result("future_value", annuity_due(input.monthly_amount, rate, months))?;
            let invested = input.monthly_amount * months as f64;
            Ok(SipYear {
                year,
                invested,
                value,
                gains: value - invested,
            })
        })
        .collect()
}

/// Compound annual growth rate in percent.
///
/// Both values must be positive so the ratio has a real root; `years` may be
/// fractional or negative but not zero.
pub fn calculate_cagr(input: &CagrInput) -> Result<CagrResult, CalcError> {
    let initial = positive("initial_value", input.initial_value)?;
    let last = positive("final_value", input.final_value)?;
    let years = finite("years", input.years)?;
    if years == 0.0 {
        return Err(CalcError::invalid("years", InputIssue::Zero));
    }
    let ratio = last / initial;
    let cagr_percent = finite_result("cagr_percent", (ratio.powf(1.0 / years) - 1.0) * 100.0)?;
    Ok(CagrResult {
        cagr_percent,
        total_growth: last - initial,
    })
}

/// Profit or loss of a round trip within one session. A negative quantity
/// is a plain multiplier (short position).
pub fn calculate_intraday(input: &IntradayInput) -> Result<IntradayResult, CalcError> {
    let entry = positive("entry_price", input.entry_price)?;
    let exit = finite("exit_price", input.exit_price)?;
    if input.quantity.unsigned_abs() > MAX_EXACT_QUANTITY {
        return Err(CalcError::invalid("quantity", InputIssue::TooLarge));
    }
    let profit_per_share = exit - entry;
    let total_profit = finite_result("total_profit", profit_per_share * input.quantity as f64)?;
    let profit_percent = finite_result("profit_percent", (profit_per_share / entry) * 100.0)?;
    Ok(IntradayResult {
        profit_per_share,
        total_profit,
        profit_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sip(amount: f64, rate: f64, years: u32) -> SipInput {
        SipInput {
            monthly_amount: amount,
            annual_rate_percent: rate,
            years,
        }
    }

    #[test]
    fn annuity_due_is_simple_sum_at_zero_rate() {
        assert_eq!(annuity_due(250.0, 0.0, 36), 9000.0);
    }

    #[test]
    fn schedule_last_row_matches_projection() {
        let input = sip(5000.0, 12.0, 10);
        let rows = sip_schedule(&input).unwrap();
        let total = calculate_sip(&input).unwrap();
        assert_eq!(rows.len(), 10);
        let last = rows.last().unwrap();
        assert_eq!(last.value, total.future_value);
        assert_eq!(last.invested, total.total_invested);
        assert_eq!(rows[0].invested, 60000.0);
        assert!(rows.windows(2).all(|w| w[1].value > w[0].value));
    }

    #[test]
    fn schedule_rejects_zero_years() {
        assert_eq!(
            sip_schedule(&sip(1000.0, 10.0, 0)).unwrap_err(),
            CalcError::invalid("years", InputIssue::NotPositive)
        );
    }

    #[test]
    fn annuity_due_below_minus_one_uses_plain_power() {
        // 1 + r == 0, every contribution is wiped out
        assert_eq!(annuity_due(100.0, -1.0, 12), 0.0);
    }

    #[test]
    fn huge_rate_overflow_is_reported() {
        let err = calculate_sip(&sip(1000.0, 1.0e6, 100)).unwrap_err();
        assert_eq!(err, CalcError::invalid("future_value", InputIssue::Overflow));
    }
}
