// src/model/schedule.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One day of the replenishment/withdrawal plan.
///
/// Demands are usually non-positive (cash leaving the device) and supply is
/// usually non-negative, but any sign is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Withdrawals applied before the day's supply arrives.
    pub early_demand: f64,
    /// Cash loaded into the device.
    pub supply: f64,
    /// Withdrawals applied after the supply.
    pub late_demand: f64,
    /// Maximum cash the device may hold on this day.
    pub capacity: f64,
}

impl DaySchedule {
    pub fn new(early_demand: f64, supply: f64, late_demand: f64, capacity: f64) -> Self {
        Self {
            early_demand,
            supply,
            late_demand,
            capacity,
        }
    }

    fn validate(&self, day: usize) -> Result<(), ScheduleError> {
        let fields = [
            ("early_demand", self.early_demand),
            ("supply", self.supply),
            ("late_demand", self.late_demand),
            ("capacity", self.capacity),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ScheduleError::NonFinite { day, field });
            }
        }
        if self.capacity < 0.0 {
            return Err(ScheduleError::NegativeCapacity {
                day,
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

/// Reasons a schedule is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error(
        "input sequences differ in length: early_demand={early_demand}, supply={supply}, \
         late_demand={late_demand}, capacity={capacity}"
    )]
    LengthMismatch {
        early_demand: usize,
        supply: usize,
        late_demand: usize,
        capacity: usize,
    },
    #[error("day {day}: {field} is not a finite number")]
    NonFinite { day: usize, field: &'static str },
    #[error("day {day}: capacity {capacity} is negative")]
    NegativeCapacity { day: usize, capacity: f64 },
}

/// A validated, day-ordered schedule.
///
/// Every day holds finite values and a non-negative capacity. Once built the
/// schedule is immutable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    days: Vec<DaySchedule>,
}

impl Schedule {
    /// Builds a schedule from per-day records.
    pub fn from_days(days: Vec<DaySchedule>) -> Result<Self, ScheduleError> {
        for (i, day) in days.iter().enumerate() {
            day.validate(i)?;
        }
        Ok(Self { days })
    }

    /// Builds a schedule from four index-aligned sequences.
    ///
    /// The sequences must all have the same length.
    pub fn from_columns(
        early_demand: &[f64],
        supply: &[f64],
        late_demand: &[f64],
        capacity: &[f64],
    ) -> Result<Self, ScheduleError> {
        let n = supply.len();
        if early_demand.len() != n || late_demand.len() != n || capacity.len() != n {
            return Err(ScheduleError::LengthMismatch {
                early_demand: early_demand.len(),
                supply: n,
                late_demand: late_demand.len(),
                capacity: capacity.len(),
            });
        }

        let days = early_demand
            .iter()
            .zip(supply)
            .zip(late_demand)
            .zip(capacity)
            .map(|(((&e, &s), &l), &c)| DaySchedule::new(e, s, l, c))
            .collect();
        Self::from_days(days)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn get(&self, day: usize) -> Option<&DaySchedule> {
        self.days.get(day)
    }

    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }
}
