use super::PeriodKey;
use serde::{Deserialize, Serialize};

/// a named point in time overlaid on the ridership series to explain
/// an anomaly. `color` and `offset` are display hints for the renderer.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EventAnnotation {
    pub name: String,
    pub period: PeriodKey,
    pub label: String,
    pub color: String,
    /// label offset from the marked point, in display points
    pub offset: (i32, i32),
}

impl EventAnnotation {
    pub fn new(name: &str, period: PeriodKey, label: &str, color: &str, offset: (i32, i32)) -> Self {
        Self {
            name: String::from(name),
            period,
            label: String::from(label),
            color: String::from(color),
            offset,
        }
    }

    /// COVID-19 closures, the Iron Swords war and the southern line repair work.
    pub fn default_events() -> Vec<EventAnnotation> {
        vec![
            EventAnnotation::new(
                "Corona (2020-03)",
                PeriodKey::known(2020, 3),
                "Corona",
                "#FF5733",
                (-30, -40),
            ),
            EventAnnotation::new(
                "Corona 2 (2020-12)",
                PeriodKey::known(2020, 12),
                "Corona 2",
                "#FF5733",
                (-30, -40),
            ),
            EventAnnotation::new(
                "War (2023-10)",
                PeriodKey::known(2023, 10),
                "War",
                "#B3B3B3",
                (-30, 20),
            ),
            EventAnnotation::new(
                "Repair Work (2024-05)",
                PeriodKey::known(2024, 5),
                "Repair Work",
                "#FFD700",
                (10, 20),
            ),
        ]
    }
}
