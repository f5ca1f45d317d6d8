//! Allocation output row produced by the proration engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One resident's share of a single charge.
///
/// The ratio is kept at full precision here; presentation rounding happens
/// in the report layer. Amounts carry the configured monetary scale and,
/// after remainder correction, sum exactly to the charge total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Identifier of the resident.
    pub resident_id: String,
    /// Days the resident occupied the room within the billing period,
    /// summed over all of their qualifying stays.
    pub days_occupied: i64,
    /// The resident's fraction of total person-days, in `0..=1`.
    pub ratio: Decimal,
    /// The resident's monetary share of the charge total.
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_allocation_serialization() {
        let allocation = Allocation {
            resident_id: "stu_001".to_string(),
            days_occupied: 10,
            ratio: Decimal::from_str("0.3333").unwrap(),
            amount: Decimal::from_str("10000.00").unwrap(),
        };
        let json = serde_json::to_string(&allocation).unwrap();
        assert!(json.contains("\"resident_id\":\"stu_001\""));
        assert!(json.contains("\"days_occupied\":10"));
        let back: Allocation = serde_json::from_str(&json).unwrap();
        assert_eq!(allocation, back);
    }
}
