// src/model/device.rs

use serde::Serialize;

use crate::model::schedule::DaySchedule;

/// What happened to the device over one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayOutcome {
    /// Balance at the end of the day, within `[0, capacity]`.
    pub balance: f64,
    /// True when a demand phase could not be fully served.
    pub fault: bool,
    /// Sum of both demand-phase shortfalls (<= 0).
    pub excess_demand: f64,
    /// Cash that did not fit under the capacity (>= 0).
    pub excess_supply: f64,
}

/// The state of a single cash-dispensing device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashDevice {
    balance: f64,
}

impl CashDevice {
    pub fn new(start_balance: f64) -> Self {
        Self {
            balance: start_balance,
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Phase 1: withdrawals before the service run.
    ///
    /// Returns the unmet part of the demand as a non-positive number.
    pub fn apply_early_demand(&mut self, amount: f64) -> f64 {
        self.withdraw(amount)
    }

    /// Phase 2: the service run loads cash, capped at `capacity`.
    ///
    /// Returns the overflow that could not be loaded.
    pub fn apply_supply(&mut self, amount: f64, capacity: f64) -> f64 {
        self.balance += amount;
        self.cap_at(capacity)
    }

    /// Phase 3: withdrawals after the service run.
    ///
    /// Returns `(shortfall, overflow)`. The overflow is only non-zero when a
    /// positive "demand" lifts the balance above capacity.
    pub fn apply_late_demand(&mut self, amount: f64, capacity: f64) -> (f64, f64) {
        let shortfall = self.withdraw(amount);
        let overflow = self.cap_at(capacity);
        (shortfall, overflow)
    }

    /// Runs the three phases of one day in order.
    pub fn run_day(&mut self, day: &DaySchedule) -> DayOutcome {
        let early_shortfall = self.apply_early_demand(day.early_demand);
        let supply_overflow = self.apply_supply(day.supply, day.capacity);
        let (late_shortfall, late_overflow) =
            self.apply_late_demand(day.late_demand, day.capacity);

        let excess_demand = early_shortfall + late_shortfall;
        DayOutcome {
            balance: self.balance,
            fault: excess_demand < 0.0,
            excess_demand,
            excess_supply: supply_overflow + late_overflow,
        }
    }

    fn withdraw(&mut self, amount: f64) -> f64 {
        self.balance += amount;
        if self.balance < 0.0 {
            let shortfall = self.balance;
            self.balance = 0.0;
            shortfall
        } else {
            0.0
        }
    }

    fn cap_at(&mut self, capacity: f64) -> f64 {
        if self.balance > capacity {
            let overflow = self.balance - capacity;
            self.balance = capacity;
            overflow
        } else {
            0.0
        }
    }
}
