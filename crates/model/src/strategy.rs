//! Leave strategies: named plans that trade a few leave days for a longer
//! consecutive break.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Markers the dataset uses to decorate strategy names.
const DECORATIONS: &[char] = &['🏆', '⚠', '⭐', '\u{FE0F}'];

/// One named leave plan.
///
/// A strategy with `leave_count == 0` is a plain holiday block ("basic
/// holiday") rather than a leave plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leave_count: u32,
    pub total_days: u32,
    /// Precomputed desirability score; higher is better.
    pub cp_value: f64,
    /// Dates to request off, in display order.
    #[serde(default)]
    pub leave_days: Vec<NaiveDate>,
    #[serde(default)]
    pub description: String,
    /// Only applicable to employees covered by the labor standards act.
    #[serde(default)]
    pub labor_only: bool,
}

impl Strategy {
    /// A zero-leave holiday block.
    pub fn basic(
        id: impl Into<String>,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        let total_days = ((end_date - start_date).num_days() + 1).max(1) as u32;
        Self {
            id: id.into(),
            name: name.into(),
            start_date,
            end_date,
            leave_count: 0,
            total_days,
            cp_value: 0.0,
            leave_days: Vec::new(),
            description: String::new(),
            labor_only: false,
        }
    }

    /// `true` when no leave days are needed.
    pub fn is_basic(&self) -> bool {
        self.leave_count == 0
    }

    /// Inclusive containment of `date` in `[start_date, end_date]`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Inclusive interval overlap with `other`.
    pub fn overlaps(&self, other: &Strategy) -> bool {
        self.start_date <= other.end_date && self.end_date >= other.start_date
    }

    /// The name with decoration markers removed.
    pub fn display_name(&self) -> String {
        strip_decorations(&self.name)
    }
}

/// Removes decoration markers and surrounding whitespace from a name.
pub fn strip_decorations(name: &str) -> String {
    name.chars()
        .filter(|c| !DECORATIONS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}
