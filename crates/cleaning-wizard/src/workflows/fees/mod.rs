//! Step two of the visit wizard: the provider's fee entry.

mod calculator;
mod format;
mod input;

pub use calculator::{
    apply, FeeRequest, FeeState, FeeUpdate, BALANCE_RATE, DEPOSIT_RATE, OVERTIME_RATE_PER_HOUR,
};
pub use format::format_amount;
pub use input::{parse_amount, parse_hours, AmountInput, HoursInput};
