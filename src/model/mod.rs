pub mod device;
pub mod schedule;
