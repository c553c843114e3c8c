// src/io/schedule.rs

use crate::io::IoError;
use crate::model::schedule::{DaySchedule, Schedule};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reads a schedule from CSV.
///
/// The header row must name `early_demand`, `supply`, `late_demand` and
/// `capacity`. Other columns (such as `day`) are ignored; rows are taken in
/// file order.
pub fn read_schedule<R: Read>(reader: R) -> Result<Schedule, IoError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut days = Vec::new();
    for row in rdr.deserialize::<DaySchedule>() {
        days.push(row?);
    }
    debug!(days = days.len(), "parsed schedule rows");

    Ok(Schedule::from_days(days)?)
}

pub fn read_schedule_file(file_path: impl AsRef<Path>) -> Result<Schedule, IoError> {
    let file = std::fs::File::open(file_path)?;
    read_schedule(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::schedule::ScheduleError;

    #[test]
    fn reads_rows_and_ignores_day_column() {
        let data = "\
day,early_demand,supply,late_demand,capacity
0,-50,100,0,500
1, -20 ,0,-30,500
";
        let schedule = read_schedule(data.as_bytes()).unwrap();
        assert_eq!(schedule.len(), 2);
        assert_eq!(
            schedule.get(1),
            Some(&DaySchedule::new(-20.0, 0.0, -30.0, 500.0))
        );
    }

    #[test]
    fn bad_number_is_a_csv_error() {
        let data = "early_demand,supply,late_demand,capacity\n0,lots,0,500\n";
        let err = read_schedule(data.as_bytes()).unwrap_err();
        assert!(matches!(err, IoError::Csv(_)));
    }

    #[test]
    fn negative_capacity_is_a_schedule_error() {
        let data = "early_demand,supply,late_demand,capacity\n0,10,0,-1\n";
        let err = read_schedule(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            IoError::Schedule(ScheduleError::NegativeCapacity { day: 0, .. })
        ));
    }
}
