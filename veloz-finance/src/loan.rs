use serde::{Deserialize, Serialize};

/// Inputs for a financing quote.
///
/// Fee fields ending in `_rate` are fractions (0.12 for 12%); the loan
/// interest rate is a percentage, matching how dealership rate sheets quote
/// the two.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancingInput {
    pub vehicle_price: f64,
    pub down_payment: f64,
    pub loan_term_months: u32,
    pub annual_interest_rate_pct: f64,
    pub registration_fee_rate: f64,
    pub first_registration_fee_rate: f64,
    /// Electric-vehicle incentive, applied against the registration fee.
    pub ev_tax_incentive_rate: f64,
}

/// Derived financing figures. All values are unrounded base-currency
/// amounts; rounding to minor units happens only at formatting time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancingQuote {
    pub loan_amount: f64,
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_loan_cost: f64,
    pub registration_fee: f64,
    pub tax_incentive_amount: f64,
    pub final_registration_fee: f64,
    pub first_registration_fee: f64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FinancingError {
    #[error("down payment exceeds vehicle price")]
    InvalidDownPayment,

    #[error("loan term must be at least one month")]
    InvalidTerm,

    #[error("rates and fee percentages must not be negative")]
    InvalidRate,
}

/// Fixed-rate amortizing loan quote (standard PMT formula).
pub fn compute_financing(input: &FinancingInput) -> Result<FinancingQuote, FinancingError> {
    let loan_amount = input.vehicle_price - input.down_payment;
    if loan_amount < 0.0 {
        return Err(FinancingError::InvalidDownPayment);
    }
    if input.loan_term_months < 1 {
        return Err(FinancingError::InvalidTerm);
    }
    if input.annual_interest_rate_pct < 0.0
        || input.registration_fee_rate < 0.0
        || input.first_registration_fee_rate < 0.0
        || input.ev_tax_incentive_rate < 0.0
    {
        return Err(FinancingError::InvalidRate);
    }

    let term = input.loan_term_months as f64;
    let monthly_rate = input.annual_interest_rate_pct / 100.0 / 12.0;

    let monthly_payment = if monthly_rate == 0.0 {
        // Zero-rate loans would divide by zero in the compounding formula
        loan_amount / term
    } else {
        let growth = (1.0 + monthly_rate).powf(term);
        loan_amount * monthly_rate * growth / (growth - 1.0)
    };

    let total_interest = monthly_payment * term - loan_amount;

    let registration_fee = input.vehicle_price * input.registration_fee_rate;
    let tax_incentive_amount = registration_fee * input.ev_tax_incentive_rate;
    let final_registration_fee = registration_fee - tax_incentive_amount;
    let first_registration_fee = input.vehicle_price * input.first_registration_fee_rate;

    Ok(FinancingQuote {
        loan_amount,
        monthly_payment,
        total_interest,
        total_loan_cost: loan_amount + total_interest,
        registration_fee,
        tax_incentive_amount,
        final_registration_fee,
        first_registration_fee,
        total_cost: input.vehicle_price
            + total_interest
            + final_registration_fee
            + first_registration_fee,
    })
}

/// One row of an amortization schedule, for display alongside the quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub remaining_balance: f64,
}

/// Per-month interest/principal split over the full term.
pub fn amortization_schedule(
    input: &FinancingInput,
) -> Result<Vec<AmortizationRow>, FinancingError> {
    let quote = compute_financing(input)?;
    let monthly_rate = input.annual_interest_rate_pct / 100.0 / 12.0;

    let mut balance = quote.loan_amount;
    let mut rows = Vec::with_capacity(input.loan_term_months as usize);

    for month in 1..=input.loan_term_months {
        let interest = balance * monthly_rate;
        let principal = quote.monthly_payment - interest;
        balance -= principal;
        // The final row absorbs accumulated float drift
        if month == input.loan_term_months {
            balance = 0.0;
        }
        rows.push(AmortizationRow {
            month,
            payment: quote.monthly_payment,
            interest,
            principal,
            remaining_balance: balance,
        });
    }

    Ok(rows)
}
