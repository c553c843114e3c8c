// src/simulation/summary.rs

use crate::simulation::engine::BalanceReport;
use serde::Serialize;

/// Aggregate view of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub days: usize,
    pub fault_days: usize,
    pub fault_rate: f64,
    /// Sum of all daily excess demand (<= 0).
    pub total_excess_demand: f64,
    /// Sum of all daily excess supply (>= 0).
    pub total_excess_supply: f64,
    pub min_balance: Option<f64>,
    pub max_balance: Option<f64>,
    pub mean_balance: f64,
    pub final_balance: Option<f64>,
}

impl Summary {
    pub fn from_report(report: &BalanceReport) -> Self {
        let days = report.len();
        let fault_days = report.faults.iter().filter(|f| **f).count();
        let balances = &report.daily_balance;

        let min_balance = balances.iter().copied().reduce(f64::min);
        let max_balance = balances.iter().copied().reduce(f64::max);
        let (fault_rate, mean_balance) = if days == 0 {
            (0.0, 0.0)
        } else {
            (
                fault_days as f64 / days as f64,
                balances.iter().sum::<f64>() / days as f64,
            )
        };

        Self {
            days,
            fault_days,
            fault_rate,
            total_excess_demand: report.excess_demand.iter().sum(),
            total_excess_supply: report.excess_supply.iter().sum(),
            min_balance,
            max_balance,
            mean_balance,
            final_balance: balances.last().copied(),
        }
    }
}
