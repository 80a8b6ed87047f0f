use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Timestamp;

/// One unit of recorded progress against a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub id: Option<i64>,
    pub goal_id: i64,
    pub date: Timestamp,
    pub value: Decimal,
    #[serde(default)]
    pub note: Option<String>,
}

impl LogEntry {
    pub fn new(goal_id: i64, date: Timestamp, value: Decimal) -> Self {
        Self {
            id: None,
            goal_id,
            date,
            value,
            note: None,
        }
    }
}
