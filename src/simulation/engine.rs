// src/simulation/engine.rs

use crate::model::device::{CashDevice, DayOutcome};
use crate::model::schedule::{DaySchedule, Schedule, ScheduleError};
use crate::simulation::config::SimulationConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ScheduleError),
    #[error("invalid input: start balance must be finite, got {0}")]
    NonFiniteStart(f64),
}

/// One row of the simulation log: the plan for a day and what came of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    pub day: usize,
    pub early_demand: f64,
    pub supply: f64,
    pub late_demand: f64,
    pub capacity: f64,
    pub balance: f64,
    pub fault: bool,
    pub excess_demand: f64,
    pub excess_supply: f64,
}

impl DayRecord {
    fn new(day: usize, plan: &DaySchedule, outcome: &DayOutcome) -> Self {
        Self {
            day,
            early_demand: plan.early_demand,
            supply: plan.supply,
            late_demand: plan.late_demand,
            capacity: plan.capacity,
            balance: outcome.balance,
            fault: outcome.fault,
            excess_demand: outcome.excess_demand,
            excess_supply: outcome.excess_supply,
        }
    }
}

/// The four day-indexed output sequences.
///
/// `excess_demand[i]` is the sum of the early and late shortfalls of day `i`,
/// not a single-phase value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
    #[serde(alias = "balance")]
    pub daily_balance: Vec<f64>,
    pub faults: Vec<bool>,
    pub excess_demand: Vec<f64>,
    pub excess_supply: Vec<f64>,
}

impl BalanceReport {
    fn with_capacity(days: usize) -> Self {
        Self {
            daily_balance: Vec::with_capacity(days),
            faults: Vec::with_capacity(days),
            excess_demand: Vec::with_capacity(days),
            excess_supply: Vec::with_capacity(days),
        }
    }

    fn push(&mut self, outcome: &DayOutcome) {
        self.daily_balance.push(outcome.balance);
        self.faults.push(outcome.fault);
        self.excess_demand.push(outcome.excess_demand);
        self.excess_supply.push(outcome.excess_supply);
    }

    pub fn len(&self) -> usize {
        self.daily_balance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.daily_balance.is_empty()
    }
}

/// Runs the balance simulation over four index-aligned input sequences.
///
/// Fails with [`SimulationError::InvalidInput`] if the sequences differ in
/// length, hold a non-finite value, or carry a negative capacity. No partial
/// result is produced on failure.
pub fn simulate(
    start: f64,
    early_demand: &[f64],
    supply: &[f64],
    late_demand: &[f64],
    capacity: &[f64],
) -> Result<BalanceReport, SimulationError> {
    let schedule = Schedule::from_columns(early_demand, supply, late_demand, capacity)?;
    let config = SimulationConfig {
        start_balance: start,
        ..SimulationConfig::default()
    };
    let mut sim = BalanceSimulation::new(config, schedule)?;
    Ok(sim.run())
}

pub struct BalanceSimulation {
    config: SimulationConfig,
    schedule: Schedule,
    device: CashDevice,
    pub current_day: usize,
    pub history: Vec<DayRecord>,
}

impl BalanceSimulation {
    pub fn new(config: SimulationConfig, schedule: Schedule) -> Result<Self, SimulationError> {
        if !config.start_balance.is_finite() {
            return Err(SimulationError::NonFiniteStart(config.start_balance));
        }
        let device = CashDevice::new(config.start_balance);
        let history = Vec::with_capacity(schedule.len());
        Ok(Self {
            config,
            schedule,
            device,
            current_day: 0,
            history,
        })
    }

    /// Walks every remaining day of the schedule and returns the full report.
    pub fn run(&mut self) -> BalanceReport {
        info!(
            days = self.schedule.len(),
            start_balance = self.config.start_balance,
            "starting balance simulation"
        );
        while self.step().is_some() {}

        let report = self.report();
        info!(
            days = report.len(),
            final_balance = self.device.balance(),
            fault_days = report.faults.iter().filter(|f| **f).count(),
            "balance simulation complete"
        );
        report
    }

    /// Advances one day. Returns `None` once the schedule is exhausted.
    pub fn step(&mut self) -> Option<&DayRecord> {
        let day = self.current_day;
        let plan = *self.schedule.get(day)?;
        let outcome = self.device.run_day(&plan);

        if outcome.fault {
            debug!(
                day,
                excess_demand = outcome.excess_demand,
                "demand could not be met"
            );
        }
        if self.config.log_every > 0 && (day + 1) % self.config.log_every == 0 {
            info!(day, balance = outcome.balance, "progress");
        }

        self.history.push(DayRecord::new(day, &plan, &outcome));
        self.current_day += 1;
        self.history.last()
    }

    pub fn balance(&self) -> f64 {
        self.device.balance()
    }

    /// Builds the output bundle from the days simulated so far.
    pub fn report(&self) -> BalanceReport {
        let mut report = BalanceReport::with_capacity(self.history.len());
        for record in &self.history {
            report.push(&DayOutcome {
                balance: record.balance,
                fault: record.fault,
                excess_demand: record.excess_demand,
                excess_supply: record.excess_supply,
            });
        }
        report
    }
}
