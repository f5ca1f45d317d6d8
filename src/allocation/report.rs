//! Report shaping for allocation results.
//!
//! Pure presentation layer: wraps engine output with period metadata,
//! per-resident rows with display-rounded ratios, and summary aggregates in
//! the shapes the API returns. No computation beyond rounding and summing
//! happens here.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::BillingConfig;
use crate::models::{ChargeType, Interval};

use super::proration::{ChargeAllocation, MonthlyAllocation};

/// Billing-period metadata included in every report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// First day of the period (inclusive).
    pub start: NaiveDate,
    /// Last day of the period (inclusive).
    pub end: NaiveDate,
    /// Inclusive day count of the period.
    pub total_days: i64,
}

impl From<&Interval> for PeriodSummary {
    fn from(period: &Interval) -> Self {
        Self {
            start: period.start(),
            end: period.end(),
            total_days: period.days(),
        }
    }
}

/// One resident's row in an allocation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRow {
    /// Identifier of the resident.
    pub resident_id: String,
    /// Days the resident occupied the room within the period.
    pub days_occupied: i64,
    /// The resident's fraction of person-days, at the configured ratio scale.
    pub ratio: Decimal,
    /// The ratio as a percentage, 2 decimal places.
    pub percentage: Decimal,
    /// The resident's monetary share.
    pub amount: Decimal,
}

/// Aggregates over a single charge's allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of residents with a non-zero share.
    pub total_residents: usize,
    /// Sum of occupied days over all residents.
    pub total_person_days: i64,
    /// The charge total (equals the sum of the rows' amounts).
    pub total_amount: Decimal,
    /// Sum of the shares as a percentage; 100.00 unless the room was vacant.
    pub total_ratio: Decimal,
    /// Cost of one person-day, zero when the room was vacant.
    pub amount_per_day: Decimal,
    /// Mean occupied days per resident, one decimal place.
    pub avg_days_per_resident: Decimal,
}

/// A single charge's allocation, shaped for the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationReport {
    /// Identifier of the room.
    pub room_id: String,
    /// Identifier of the charge.
    pub charge_id: String,
    /// The kind of cost the charge represents.
    pub charge_type: ChargeType,
    /// The billing period the charge covers.
    pub period: PeriodSummary,
    /// Per-resident rows, sorted by days descending then resident id.
    pub allocations: Vec<AllocationRow>,
    /// Aggregates over the rows.
    pub summary: ReportSummary,
    /// True when no occupancy overlapped the period.
    pub no_occupancy: bool,
}

impl AllocationReport {
    /// Shapes a single-charge engine result into the API report.
    pub fn from_allocation(result: &ChargeAllocation, config: &BillingConfig) -> Self {
        let allocations: Vec<AllocationRow> = result
            .allocations
            .iter()
            .map(|a| AllocationRow {
                resident_id: a.resident_id.clone(),
                days_occupied: a.days_occupied,
                ratio: a.ratio.round_dp(config.ratio_scale),
                percentage: (a.ratio * Decimal::ONE_HUNDRED).round_dp(2),
                amount: a.amount,
            })
            .collect();

        let total_residents = allocations.len();
        let raw_ratio_sum: Decimal = result.allocations.iter().map(|a| a.ratio).sum();
        let total_ratio = (raw_ratio_sum * Decimal::ONE_HUNDRED).round_dp(2);

        let amount_per_day = if result.total_person_days > 0 {
            (result.total_amount / Decimal::from(result.total_person_days))
                .round_dp(config.rounding_scale)
        } else {
            Decimal::ZERO
        };
        let avg_days_per_resident = if total_residents > 0 {
            (Decimal::from(result.total_person_days) / Decimal::from(total_residents as u64))
                .round_dp(1)
        } else {
            Decimal::ZERO
        };

        Self {
            room_id: result.room_id.clone(),
            charge_id: result.charge_id.clone(),
            charge_type: result.charge_type,
            period: PeriodSummary::from(&result.period),
            allocations,
            summary: ReportSummary {
                total_residents,
                total_person_days: result.total_person_days,
                total_amount: result.total_amount,
                total_ratio,
                amount_per_day,
                avg_days_per_resident,
            },
            no_occupancy: result.no_occupancy,
        }
    }
}

/// One resident's combined row in a monthly report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidentTotalRow {
    /// Identifier of the resident.
    pub resident_id: String,
    /// The resident's combined share across every charge in the month.
    pub total_amount: Decimal,
}

/// Aggregates over a month's worth of charges for one room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Number of charges in the batch.
    pub total_charges: usize,
    /// Distinct charge types involved, sorted.
    pub utility_types: Vec<String>,
    /// Sum of all charge totals.
    pub total_amount: Decimal,
    /// Number of distinct residents billed across the batch.
    pub total_residents: usize,
}

/// A month's combined allocation for one room, shaped for the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Identifier of the room.
    pub room_id: String,
    /// The calendar month the batch covers.
    pub period: PeriodSummary,
    /// One report per charge, in input order.
    pub charges: Vec<AllocationReport>,
    /// Combined per-resident totals, by resident id ascending.
    pub residents: Vec<ResidentTotalRow>,
    /// Aggregates over the batch.
    pub summary: MonthlySummary,
}

impl MonthlyReport {
    /// Shapes a monthly batch engine result into the API report.
    pub fn from_batch(batch: &MonthlyAllocation, config: &BillingConfig) -> Self {
        let charges: Vec<AllocationReport> = batch
            .charges
            .iter()
            .map(|c| AllocationReport::from_allocation(c, config))
            .collect();

        let utility_types: Vec<String> = batch
            .charges
            .iter()
            .map(|c| c.charge_type.as_str().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let residents: Vec<ResidentTotalRow> = batch
            .resident_totals
            .iter()
            .map(|t| ResidentTotalRow {
                resident_id: t.resident_id.clone(),
                total_amount: t.total_amount,
            })
            .collect();

        let summary = MonthlySummary {
            total_charges: charges.len(),
            utility_types,
            total_amount: batch.total_amount,
            total_residents: residents.len(),
        };

        Self {
            room_id: batch.room_id.clone(),
            period: PeriodSummary::from(&batch.period),
            charges,
            residents,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::{allocate_charge, allocate_monthly};
    use crate::models::{AllocationMethod, ChargeRecord, OccupancyRecord};
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn june_charge(id: &str, charge_type: ChargeType, total: &str) -> ChargeRecord {
        ChargeRecord {
            id: id.to_string(),
            room_id: "room_101".to_string(),
            charge_type,
            period_start: date(2024, 6, 1),
            period_end: date(2024, 6, 30),
            total_amount: dec(total),
            method: AllocationMethod::DaysBased,
        }
    }

    fn record(
        resident_id: &str,
        check_in: NaiveDate,
        check_out: Option<NaiveDate>,
    ) -> OccupancyRecord {
        OccupancyRecord {
            resident_id: resident_id.to_string(),
            room_id: "room_101".to_string(),
            check_in,
            check_out,
            is_active: check_out.is_none(),
        }
    }

    fn scenario_a_report() -> AllocationReport {
        let occupancy = vec![
            record("stu_x", date(2024, 6, 1), Some(date(2024, 6, 10))),
            record("stu_y", date(2024, 6, 11), Some(date(2024, 6, 30))),
        ];
        let charge = june_charge("chg_001", ChargeType::Electricity, "30000");
        let result = allocate_charge(&charge, &occupancy, &BillingConfig::default()).unwrap();
        AllocationReport::from_allocation(&result, &BillingConfig::default())
    }

    #[test]
    fn test_report_period_metadata() {
        let report = scenario_a_report();
        assert_eq!(report.period.start, date(2024, 6, 1));
        assert_eq!(report.period.end, date(2024, 6, 30));
        assert_eq!(report.period.total_days, 30);
    }

    #[test]
    fn test_report_rows_carry_rounded_ratio_and_percentage() {
        let report = scenario_a_report();
        let y = &report.allocations[0];
        let x = &report.allocations[1];
        assert_eq!(y.ratio, dec("0.6667"));
        assert_eq!(y.percentage, dec("66.67"));
        assert_eq!(x.ratio, dec("0.3333"));
        assert_eq!(x.percentage, dec("33.33"));
    }

    #[test]
    fn test_report_summary_totals() {
        let report = scenario_a_report();
        assert_eq!(report.summary.total_residents, 2);
        assert_eq!(report.summary.total_person_days, 30);
        assert_eq!(report.summary.total_ratio, dec("100.00"));
        assert_eq!(report.summary.amount_per_day, dec("1000.00"));
        assert_eq!(report.summary.avg_days_per_resident, dec("15.0"));
    }

    #[test]
    fn test_degenerate_report_has_zero_summary() {
        let charge = june_charge("chg_001", ChargeType::Gas, "5000");
        let result = allocate_charge(&charge, &[], &BillingConfig::default()).unwrap();
        let report = AllocationReport::from_allocation(&result, &BillingConfig::default());

        assert!(report.no_occupancy);
        assert!(report.allocations.is_empty());
        assert_eq!(report.summary.total_residents, 0);
        assert_eq!(report.summary.total_ratio, Decimal::ZERO);
        assert_eq!(report.summary.amount_per_day, Decimal::ZERO);
        assert_eq!(report.summary.avg_days_per_resident, Decimal::ZERO);
    }

    #[test]
    fn test_report_serializes_the_api_contract() {
        let report = scenario_a_report();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["period"]["start"], "2024-06-01");
        assert_eq!(json["period"]["total_days"], 30);
        assert_eq!(json["allocations"][0]["resident_id"], "stu_y");
        assert_eq!(json["summary"]["total_residents"], 2);
        assert_eq!(json["charge_type"], "electricity");
    }

    #[test]
    fn test_monthly_report_collects_utility_types_sorted_distinct() {
        let occupancy = vec![record("stu_x", date(2024, 6, 1), None)];
        let charges = vec![
            june_charge("chg_1", ChargeType::Water, "300"),
            june_charge("chg_2", ChargeType::Electricity, "900"),
            june_charge("chg_3", ChargeType::Water, "150"),
        ];
        let period = Interval::new(date(2024, 6, 1), date(2024, 6, 30)).unwrap();
        let batch = allocate_monthly(
            "room_101",
            period,
            &charges,
            &occupancy,
            &BillingConfig::default(),
        )
        .unwrap();
        let report = MonthlyReport::from_batch(&batch, &BillingConfig::default());

        assert_eq!(report.summary.utility_types, vec!["electricity", "water"]);
        assert_eq!(report.summary.total_charges, 3);
        assert_eq!(report.summary.total_amount, dec("1350"));
        assert_eq!(report.summary.total_residents, 1);
        assert_eq!(report.residents[0].total_amount, dec("1350.00"));
    }
}
