use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// departure status of a train at a station. the source dataset labels these
/// in Hebrew, which are accepted as aliases of the snake_case names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    #[serde(alias = "בזמן")]
    OnTime,
    #[serde(alias = "איחור")]
    Delayed,
    #[serde(alias = "הקדמה ביציאה")]
    Early,
}

impl StatusCategory {
    pub const ALL: [StatusCategory; 3] = [
        StatusCategory::OnTime,
        StatusCategory::Delayed,
        StatusCategory::Early,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCategory::OnTime => "on_time",
            StatusCategory::Delayed => "delayed",
            StatusCategory::Early => "early",
        }
    }

    /// the label used by the source dataset.
    pub fn source_label(&self) -> &'static str {
        match self {
            StatusCategory::OnTime => "בזמן",
            StatusCategory::Delayed => "איחור",
            StatusCategory::Early => "הקדמה ביציאה",
        }
    }
}

impl Display for StatusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        StatusCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == trimmed || c.source_label() == trimmed)
            .ok_or_else(|| format!("unknown station status '{s}'"))
    }
}
