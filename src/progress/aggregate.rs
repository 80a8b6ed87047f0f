use rust_decimal::Decimal;

use crate::models::{LogEntry, Window};

/// Total log value inside `window`, both ends inclusive.
pub fn sum_in_window(logs: &[LogEntry], window: &Window) -> Decimal {
    logs.iter()
        .filter(|log| window.contains(log.date))
        .map(|log| log.value)
        .sum()
}
