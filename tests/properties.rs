//! Property-based tests for the allocation engine.
//!
//! These check the conservation laws the engine must hold for any input:
//! person-days add up, money adds up to the cent, and splitting a stay in
//! two never changes what a resident owes in days.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use billing_engine::allocation::{allocate_charge, clip_all};
use billing_engine::config::BillingConfig;
use billing_engine::models::{
    AllocationMethod, ChargeRecord, ChargeType, Interval, OccupancyRecord,
};

const ROOM: &str = "room_101";

fn june_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn june_charge(amount_cents: i64) -> ChargeRecord {
    ChargeRecord {
        id: "chg_prop".to_string(),
        room_id: ROOM.to_string(),
        charge_type: ChargeType::Electricity,
        period_start: june_start(),
        period_end: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        total_amount: Decimal::new(amount_cents, 2),
        method: AllocationMethod::DaysBased,
    }
}

/// A stay inside June 2024, as (start offset, length in days).
fn stay_strategy() -> impl Strategy<Value = (i64, i64)> {
    (0i64..30).prop_flat_map(|offset| (Just(offset), 1i64..=(30 - offset)))
}

fn stays_to_records(stays: &[(i64, i64)]) -> Vec<OccupancyRecord> {
    stays
        .iter()
        .enumerate()
        .map(|(i, &(offset, len))| {
            let check_in = june_start() + Duration::days(offset);
            OccupancyRecord {
                resident_id: format!("stu_{:02}", i),
                room_id: ROOM.to_string(),
                check_in,
                check_out: Some(check_in + Duration::days(len - 1)),
                is_active: false,
            }
        })
        .collect()
}

proptest! {
    /// The per-resident day counts always sum to the reported total.
    #[test]
    fn person_days_are_conserved(
        stays in prop::collection::vec(stay_strategy(), 1..6),
        amount_cents in 1i64..10_000_000,
    ) {
        let charge = june_charge(amount_cents);
        let occupancy = stays_to_records(&stays);
        let result = allocate_charge(&charge, &occupancy, &BillingConfig::default()).unwrap();

        let day_sum: i64 = result.allocations.iter().map(|a| a.days_occupied).sum();
        prop_assert_eq!(day_sum, result.total_person_days);

        let expected: i64 = stays.iter().map(|&(_, len)| len).sum();
        prop_assert_eq!(result.total_person_days, expected);
    }

    /// After remainder correction the amounts sum to the charge total
    /// exactly, never off by a cent.
    #[test]
    fn amounts_are_conserved_to_the_cent(
        stays in prop::collection::vec(stay_strategy(), 1..6),
        amount_cents in 1i64..10_000_000,
    ) {
        let charge = june_charge(amount_cents);
        let occupancy = stays_to_records(&stays);
        let result = allocate_charge(&charge, &occupancy, &BillingConfig::default()).unwrap();

        let amount_sum: Decimal = result.allocations.iter().map(|a| a.amount).sum();
        prop_assert_eq!(amount_sum, charge.total_amount);
    }

    /// Full-precision ratios sum to one whenever anyone occupied the room.
    #[test]
    fn ratios_sum_to_one(
        stays in prop::collection::vec(stay_strategy(), 1..6),
    ) {
        let charge = june_charge(300_000);
        let occupancy = stays_to_records(&stays);
        let result = allocate_charge(&charge, &occupancy, &BillingConfig::default()).unwrap();

        let ratio_sum: Decimal = result.allocations.iter().map(|a| a.ratio).sum();
        let error = (ratio_sum - Decimal::ONE).abs();
        prop_assert!(
            error < Decimal::new(1, 9),
            "ratio sum {} drifted from 1",
            ratio_sum
        );
    }

    /// Rows are ordered by days descending, ties by resident id ascending.
    #[test]
    fn allocations_are_deterministically_ordered(
        stays in prop::collection::vec(stay_strategy(), 1..6),
        amount_cents in 1i64..10_000_000,
    ) {
        let charge = june_charge(amount_cents);
        let occupancy = stays_to_records(&stays);
        let result = allocate_charge(&charge, &occupancy, &BillingConfig::default()).unwrap();

        for pair in result.allocations.windows(2) {
            let ordered = pair[0].days_occupied > pair[1].days_occupied
                || (pair[0].days_occupied == pair[1].days_occupied
                    && pair[0].resident_id < pair[1].resident_id);
            prop_assert!(ordered, "rows out of order: {:?}", pair);
        }
    }

    /// Splitting one stay into two adjacent stays leaves the clipped day
    /// count unchanged.
    #[test]
    fn re_entry_days_are_additive(
        offset in 0i64..28,
        len in 2i64..=10,
        split in 1i64..10,
    ) {
        prop_assume!(offset + len <= 30);
        prop_assume!(split < len);

        let period = Interval::new(
            june_start(),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        ).unwrap();

        let check_in = june_start() + Duration::days(offset);
        let check_out = check_in + Duration::days(len - 1);
        let whole = vec![OccupancyRecord {
            resident_id: "stu_00".to_string(),
            room_id: ROOM.to_string(),
            check_in,
            check_out: Some(check_out),
            is_active: false,
        }];

        let split_point = check_in + Duration::days(split - 1);
        let halves = vec![
            OccupancyRecord {
                resident_id: "stu_00".to_string(),
                room_id: ROOM.to_string(),
                check_in,
                check_out: Some(split_point),
                is_active: false,
            },
            OccupancyRecord {
                resident_id: "stu_00".to_string(),
                room_id: ROOM.to_string(),
                check_in: split_point + Duration::days(1),
                check_out: Some(check_out),
                is_active: false,
            },
        ];

        let whole_days: i64 = clip_all(&whole, &period)
            .unwrap()
            .iter()
            .map(|s| s.interval.days())
            .sum();
        let split_days: i64 = clip_all(&halves, &period)
            .unwrap()
            .iter()
            .map(|s| s.interval.days())
            .sum();

        prop_assert_eq!(whole_days, split_days);
    }
}
