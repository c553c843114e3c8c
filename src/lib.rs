//! Daily cash-balance simulation for a cash-dispensing device.
//!
//! Each day applies early demand, then supply, then late demand to a running
//! balance that is kept within `[0, capacity]`. Shortfalls are recorded as
//! faults with their excess demand; overflow above capacity is recorded as
//! excess supply.

pub mod io;
pub mod model;
pub mod simulation;

pub use model::device::{CashDevice, DayOutcome};
pub use model::schedule::{DaySchedule, Schedule, ScheduleError};
pub use simulation::config::{ConfigError, SimulationConfig};
pub use simulation::engine::{simulate, BalanceReport, BalanceSimulation, DayRecord, SimulationError};
pub use simulation::summary::Summary;
