use serde::{Deserialize, Serialize};

use super::input::{hours_from_amount, sanitize_amount, AmountInput, HoursInput};

/// Share of the service amount collected up front.
pub const DEPOSIT_RATE: f64 = 0.3;
/// Share of the service amount still owed at hand-off.
pub const BALANCE_RATE: f64 = 0.7;
/// Charge per whole overtime hour.
pub const OVERTIME_RATE_PER_HOUR: f64 = 800.0;

/// Provider-entered amounts and everything derived from them. The derived
/// fields are only ever produced by [`FeeState::recompute`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "FeeRequest")]
pub struct FeeState {
    service_amount: f64,
    deposit_amount: f64,
    overtime_hours: u32,
    overtime_amount: f64,
    balance_due: f64,
}

impl FeeState {
    pub fn recompute(service_amount: f64, overtime_hours: f64) -> Self {
        Self::from_parts(sanitize_amount(service_amount), hours_from_amount(overtime_hours))
    }

    fn from_parts(service_amount: f64, overtime_hours: u32) -> Self {
        let overtime_amount = f64::from(overtime_hours) * OVERTIME_RATE_PER_HOUR;
        Self {
            service_amount,
            deposit_amount: service_amount * DEPOSIT_RATE,
            overtime_hours,
            overtime_amount,
            balance_due: service_amount * BALANCE_RATE + overtime_amount,
        }
    }

    pub fn with_service_amount(&self, service_amount: f64) -> Self {
        Self::from_parts(sanitize_amount(service_amount), self.overtime_hours)
    }

    pub fn with_overtime_hours(&self, overtime_hours: u32) -> Self {
        Self::from_parts(self.service_amount, overtime_hours)
    }

    pub fn service_amount(&self) -> f64 {
        self.service_amount
    }

    pub fn deposit_amount(&self) -> f64 {
        self.deposit_amount
    }

    pub fn overtime_hours(&self) -> u32 {
        self.overtime_hours
    }

    pub fn overtime_amount(&self) -> f64 {
        self.overtime_amount
    }

    pub fn balance_due(&self) -> f64 {
        self.balance_due
    }
}

/// Raw provider input. Derived fields sent by a client are ignored and
/// recomputed.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct FeeRequest {
    pub service_amount: AmountInput,
    pub overtime_hours: HoursInput,
}

impl From<FeeRequest> for FeeState {
    fn from(request: FeeRequest) -> Self {
        Self::from_parts(request.service_amount.0, request.overtime_hours.0)
    }
}

/// Edits the provider screen can make; each one recomputes the whole state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FeeUpdate {
    ServiceAmount(AmountInput),
    OvertimeHours(HoursInput),
}

pub fn apply(fees: &FeeState, update: FeeUpdate) -> FeeState {
    match update {
        FeeUpdate::ServiceAmount(AmountInput(amount)) => fees.with_service_amount(amount),
        FeeUpdate::OvertimeHours(HoursInput(hours)) => fees.with_overtime_hours(hours),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_visit_with_overtime() {
        let fees = FeeState::recompute(3000.0, 2.0);
        assert_eq!(fees.deposit_amount(), 900.0);
        assert_eq!(fees.overtime_amount(), 1600.0);
        assert_eq!(fees.balance_due(), 3700.0);
    }

    #[test]
    fn zero_inputs_yield_zero_outputs() {
        let fees = FeeState::recompute(0.0, 0.0);
        assert_eq!(fees, FeeState::default());
        assert_eq!(fees.balance_due(), 0.0);
    }

    #[test]
    fn recompute_is_idempotent() {
        assert_eq!(
            FeeState::recompute(4321.5, 3.0),
            FeeState::recompute(4321.5, 3.0)
        );
    }

    #[test]
    fn invalid_inputs_are_sanitized() {
        let fees = FeeState::recompute(-500.0, 2.7);
        assert_eq!(fees.service_amount(), 0.0);
        assert_eq!(fees.overtime_hours(), 2);
        assert_eq!(fees.balance_due(), 1600.0);

        let fees = FeeState::recompute(f64::NAN, -3.0);
        assert_eq!(fees, FeeState::default());
    }

    #[test]
    fn formula_holds_across_inputs() {
        for service in [0.0, 1.0, 999.99, 2500.0, 12_345.0] {
            for hours in 0..5u32 {
                let fees = FeeState::recompute(service, f64::from(hours));
                assert_eq!(fees.deposit_amount(), service * 0.3);
                assert_eq!(fees.overtime_amount(), f64::from(hours) * 800.0);
                assert_eq!(fees.balance_due(), service * 0.7 + fees.overtime_amount());
            }
        }
    }

    #[test]
    fn updates_keep_the_other_input() {
        let fees = FeeState::recompute(3000.0, 0.0);
        let fees = apply(&fees, FeeUpdate::OvertimeHours(HoursInput(2)));
        assert_eq!(fees.service_amount(), 3000.0);
        assert_eq!(fees.balance_due(), 3700.0);

        let fees = apply(&fees, FeeUpdate::ServiceAmount(AmountInput(1000.0)));
        assert_eq!(fees.overtime_hours(), 2);
        assert_eq!(fees.deposit_amount(), 300.0);
        assert_eq!(fees.balance_due(), 2300.0);
    }

    #[test]
    fn deserializing_ignores_client_supplied_derived_values() {
        let fees: FeeState = serde_json::from_value(serde_json::json!({
            "service_amount": 3000,
            "overtime_hours": "2",
            "deposit_amount": 1,
            "balance_due": 1,
        }))
        .expect("fees parse");

        assert_eq!(fees, FeeState::recompute(3000.0, 2.0));
    }
}
