use cash_balance_sim::{simulate, BalanceSimulation, DaySchedule, Schedule, SimulationConfig};
use proptest::prelude::*;

fn day() -> impl Strategy<Value = (f64, f64, f64, f64)> {
    (
        -500.0f64..500.0,
        -100.0f64..1000.0,
        -500.0f64..500.0,
        0.0f64..1000.0,
    )
}

fn columns(days: &[(f64, f64, f64, f64)]) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
    let early = days.iter().map(|d| d.0).collect();
    let supply = days.iter().map(|d| d.1).collect();
    let late = days.iter().map(|d| d.2).collect();
    let capacity = days.iter().map(|d| d.3).collect();
    (early, supply, late, capacity)
}

proptest! {
    #[test]
    fn outputs_respect_bounds(start in -200.0f64..2000.0,
                              days in prop::collection::vec(day(), 0..60)) {
        let (early, supply, late, capacity) = columns(&days);
        let out = simulate(start, &early, &supply, &late, &capacity).unwrap();

        prop_assert_eq!(out.daily_balance.len(), days.len());
        prop_assert_eq!(out.faults.len(), days.len());
        prop_assert_eq!(out.excess_demand.len(), days.len());
        prop_assert_eq!(out.excess_supply.len(), days.len());

        for i in 0..days.len() {
            prop_assert!(out.daily_balance[i] >= 0.0);
            prop_assert!(out.daily_balance[i] <= capacity[i]);
            prop_assert!(out.excess_demand[i] <= 0.0);
            prop_assert!(out.excess_supply[i] >= 0.0);
            prop_assert_eq!(out.faults[i], out.excess_demand[i] < 0.0);
        }
    }

    #[test]
    fn identical_inputs_give_identical_outputs(start in 0.0f64..1000.0,
                                               days in prop::collection::vec(day(), 0..30)) {
        let (early, supply, late, capacity) = columns(&days);
        let first = simulate(start, &early, &supply, &late, &capacity).unwrap();
        let second = simulate(start, &early, &supply, &late, &capacity).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn each_day_starts_from_previous_ending_balance(start in 0.0f64..1000.0,
                                                    days in prop::collection::vec(day(), 1..30)) {
        let (early, supply, late, capacity) = columns(&days);
        let out = simulate(start, &early, &supply, &late, &capacity).unwrap();

        // Replaying day i alone from day i-1's ending balance must reproduce day i.
        for i in 0..days.len() {
            let carry_in = if i == 0 { start } else { out.daily_balance[i - 1] };
            let single = simulate(carry_in, &early[i..=i], &supply[i..=i], &late[i..=i], &capacity[i..=i]).unwrap();
            prop_assert_eq!(single.daily_balance[0], out.daily_balance[i]);
            prop_assert_eq!(single.faults[0], out.faults[i]);
            prop_assert_eq!(single.excess_demand[0], out.excess_demand[i]);
            prop_assert_eq!(single.excess_supply[0], out.excess_supply[i]);
        }
    }

    #[test]
    fn stepping_matches_batch_simulation(start in 0.0f64..1000.0,
                                         days in prop::collection::vec(day(), 0..30)) {
        let (early, supply, late, capacity) = columns(&days);
        let batch = simulate(start, &early, &supply, &late, &capacity).unwrap();

        let schedule = Schedule::from_days(
            days.iter().map(|d| DaySchedule::new(d.0, d.1, d.2, d.3)).collect(),
        ).unwrap();
        let config = SimulationConfig { start_balance: start, log_every: 0 };
        let mut sim = BalanceSimulation::new(config, schedule).unwrap();
        while sim.step().is_some() {}

        prop_assert_eq!(sim.report(), batch);
    }
}
