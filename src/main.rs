use anyhow::{Context, Result};
use cash_balance_sim::io::{reporting, schedule as schedule_io};
use cash_balance_sim::{BalanceSimulation, DaySchedule, Schedule, SimulationConfig, Summary};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Args {
    schedule: Option<PathBuf>,
    start: Option<f64>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    json: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        let mut value = || {
            it.next()
                .with_context(|| format!("missing value for {arg}"))
        };
        match arg.as_str() {
            "--schedule" => args.schedule = Some(value()?.into()),
            "--config" => args.config = Some(value()?.into()),
            "--output" => args.output = Some(value()?.into()),
            "--json" => args.json = Some(value()?.into()),
            "--start" => {
                let raw = value()?;
                let start = raw
                    .parse()
                    .with_context(|| format!("invalid --start value: {raw}"))?;
                args.start = Some(start);
            }
            other => anyhow::bail!("unknown argument: {other}"),
        }
    }
    Ok(args)
}

/// A week of a busy machine: a mid-week service run and a weekend rush.
fn demo_schedule() -> Result<Schedule> {
    let days = vec![
        DaySchedule::new(-120.0, 0.0, -180.0, 1000.0),
        DaySchedule::new(-150.0, 0.0, -200.0, 1000.0),
        DaySchedule::new(-100.0, 800.0, -150.0, 1000.0),
        DaySchedule::new(-140.0, 0.0, -210.0, 1000.0),
        DaySchedule::new(-200.0, 0.0, -300.0, 1000.0),
        DaySchedule::new(-250.0, 0.0, -350.0, 1000.0),
        DaySchedule::new(-80.0, 900.0, -120.0, 1000.0),
    ];
    Ok(Schedule::from_days(days)?)
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = parse_args()?;
    info!(?args, "starting cash balance simulation");

    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimulationConfig {
            start_balance: 600.0,
            ..SimulationConfig::default()
        },
    };
    if let Some(start) = args.start {
        config.start_balance = start;
    }
    config.validate()?;

    let schedule = match &args.schedule {
        Some(path) => schedule_io::read_schedule_file(path)
            .with_context(|| format!("reading schedule {}", path.display()))?,
        None => demo_schedule()?,
    };

    let mut sim = BalanceSimulation::new(config, schedule)?;
    let report = sim.run();

    if let Some(path) = &args.output {
        reporting::write_daily_log(path, &sim.history)
            .with_context(|| format!("writing daily log {}", path.display()))?;
    }
    if let Some(path) = &args.json {
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        reporting::write_report_json(file, &report)?;
    }

    let summary = Summary::from_report(&report);
    println!("=== Balance Summary ===");
    println!("Days simulated:      {}", summary.days);
    println!(
        "Fault days:          {} ({:.1}%)",
        summary.fault_days,
        summary.fault_rate * 100.0
    );
    println!("Total excess demand: {:.2}", summary.total_excess_demand);
    println!("Total excess supply: {:.2}", summary.total_excess_supply);
    println!("Mean balance:        {:.2}", summary.mean_balance);
    if let (Some(min), Some(max)) = (summary.min_balance, summary.max_balance) {
        println!("Balance range:       {:.2} .. {:.2}", min, max);
    }
    if let Some(last) = summary.final_balance {
        println!("Final balance:       {:.2}", last);
    }

    Ok(())
}
