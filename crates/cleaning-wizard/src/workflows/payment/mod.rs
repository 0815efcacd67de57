//! Step three of the visit wizard: handing the customer off to the external
//! payment page. Nothing is charged locally.

use serde::Serialize;

use crate::config::PaymentConfig;
use crate::workflows::fees::{format_amount, FeeState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentHandoff {
    pub payment_url: String,
    /// Text encoded into the scannable code; identical to `payment_url`.
    pub qr_payload: String,
    pub balance_due: f64,
    pub deposit: f64,
    pub overtime_hours: u32,
    pub overtime_amount: f64,
    pub summary: PaymentSummary,
}

/// Pre-formatted amounts for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentSummary {
    pub balance_due: String,
    pub deposit: String,
    pub overtime: String,
}

impl PaymentHandoff {
    pub fn new(fees: &FeeState, config: &PaymentConfig) -> Self {
        let payment_url = config.url.to_string();
        Self {
            qr_payload: payment_url.clone(),
            payment_url,
            balance_due: fees.balance_due(),
            deposit: fees.deposit_amount(),
            overtime_hours: fees.overtime_hours(),
            overtime_amount: fees.overtime_amount(),
            summary: PaymentSummary {
                balance_due: format!("${}", format_amount(fees.balance_due())),
                deposit: format!("${}", format_amount(fees.deposit_amount())),
                overtime: format!(
                    "${} ({}h)",
                    format_amount(fees.overtime_amount()),
                    fees.overtime_hours()
                ),
            },
        }
    }
}
