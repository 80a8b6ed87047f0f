use crate::models::Goal;

/// Labels of the milestones `progress_pct` has reached, in configured order.
pub fn milestones_reached(goal: &Goal, progress_pct: f64) -> Vec<String> {
    goal.milestones
        .iter()
        .filter(|m| progress_pct >= m.threshold)
        .map(|m| m.label.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GoalType, Milestone};

    fn goal_with(milestones: &[(f64, &str)]) -> Goal {
        Goal {
            id: 1,
            name: "Save".to_string(),
            emoji: String::new(),
            goal_type: GoalType::Sum,
            unit: "usd".to_string(),
            target: None,
            timeframe_type: "fixed".into(),
            start_at: "2025-01-01".parse().unwrap(),
            end_at: None,
            rolling_days: None,
            status: Default::default(),
            milestones: milestones
                .iter()
                .map(|(threshold, label)| Milestone {
                    threshold: *threshold,
                    label: label.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn keeps_configured_order() {
        let goal = goal_with(&[(75.0, "Almost"), (25.0, "Quarter"), (50.0, "Half")]);
        assert_eq!(milestones_reached(&goal, 80.0), vec!["Almost", "Quarter", "Half"]);
        assert_eq!(milestones_reached(&goal, 50.0), vec!["Quarter", "Half"]);
    }

    #[test]
    fn zero_threshold_is_always_reached() {
        let goal = goal_with(&[(0.0, "Started"), (100.0, "Done")]);
        assert_eq!(milestones_reached(&goal, 0.0), vec!["Started"]);
    }

    #[test]
    fn duplicates_pass_through() {
        let goal = goal_with(&[(10.0, "Ten"), (10.0, "Ten")]);
        assert_eq!(milestones_reached(&goal, 10.0), vec!["Ten", "Ten"]);
        assert!(goal_with(&[]).milestones.is_empty());
    }
}
