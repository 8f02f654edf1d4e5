use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named savings target. Progress is maintained by hand and is
/// deliberately not derived from the transaction log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target: Decimal,
    pub current: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl Goal {
    pub fn new(
        id: String,
        name: String,
        target: Decimal,
        current: Decimal,
        date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            name,
            target,
            current,
            date,
        }
    }

    /// Progress ratio for display, clamped to [0, 1]. The stored `current`
    /// is never clamped; over-achievement simply shows as 100%.
    pub fn progress(&self) -> Decimal {
        if self.target <= Decimal::ZERO {
            // Admission guarantees target > 0, but records loaded from older
            // data are not revalidated on read.
            return Decimal::ZERO;
        }
        (self.current / self.target).min(Decimal::ONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_goal(target: i64, current: i64) -> Goal {
        Goal::new(
            "goal-1".to_string(),
            "Trip".to_string(),
            Decimal::from(target),
            Decimal::from(current),
            None,
        )
    }

    #[test]
    fn test_progress_partial() {
        let goal = create_test_goal(1000, 250);
        assert_eq!(goal.progress(), Decimal::new(25, 2));
    }

    #[test]
    fn test_progress_clamps_over_achievement() {
        let goal = create_test_goal(1000, 1300);
        assert_eq!(goal.progress(), Decimal::ONE);
        assert_eq!(goal.current, Decimal::from(1300));
    }

    #[test]
    fn test_date_omitted_from_json_when_absent() {
        let goal = create_test_goal(1000, 0);
        let json: serde_json::Value = serde_json::to_value(&goal).unwrap();
        assert!(json.get("date").is_none());
    }

    #[test]
    fn test_deserializes_record_without_date() {
        let raw = r#"{"id": "g1", "name": "Trip", "target": 1000, "current": 250}"#;
        let goal: Goal = serde_json::from_str(raw).unwrap();
        assert_eq!(goal.name, "Trip");
        assert_eq!(goal.date, None);
    }
}
