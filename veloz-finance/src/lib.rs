pub mod loan;
pub mod rounding;

pub use loan::{
    amortization_schedule, compute_financing, AmortizationRow, FinancingError, FinancingInput,
    FinancingQuote,
};
pub use rounding::round_minor_vnd;
