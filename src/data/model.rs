use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

/// Launch outcome as encoded in the `class` column (0 = failure, 1 = success).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Both outcomes, in the order they are drawn.
    pub const ALL: [Outcome; 2] = [Outcome::Success, Outcome::Failure];

    /// Numeric class value, used as the scatter y coordinate.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(format!("class must be 0 or 1, got {other}")),
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> u8 {
        outcome.class()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the CSV
// ---------------------------------------------------------------------------

/// A single launch (one row of the source CSV).
///
/// Column names follow the published dataset headers; unknown columns are
/// ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Flight Number", default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<u32>,
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    #[serde(rename = "class")]
    pub outcome: Outcome,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "Booster Version", default, skip_serializing_if = "Option::is_none")]
    pub booster_version: Option<String>,
    #[serde(rename = "Booster Version Category")]
    pub booster_category: String,
}

impl LaunchRecord {
    /// Convenience constructor for the four columns the dashboard reads.
    pub fn new(site: &str, payload_mass_kg: f64, booster_category: &str, outcome: Outcome) -> Self {
        LaunchRecord {
            flight_number: None,
            launch_site: site.to_string(),
            outcome,
            payload_mass_kg,
            booster_version: None,
            booster_category: booster_category.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full loaded dataset with pre-computed indices. Never mutated after
/// construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    /// Distinct launch sites in first-appearance order.
    sites: Vec<String>,
    /// Distinct booster categories in first-appearance order.
    booster_categories: Vec<String>,
    min_payload_kg: f64,
    max_payload_kg: f64,
}

impl Dataset {
    /// Build indices from loaded records. Returns `None` for an empty input,
    /// since a dataset without rows has no payload bounds.
    pub fn from_records(records: Vec<LaunchRecord>) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let mut sites: Vec<String> = Vec::new();
        let mut booster_categories: Vec<String> = Vec::new();
        let mut min_payload_kg = f64::INFINITY;
        let mut max_payload_kg = f64::NEG_INFINITY;

        for rec in &records {
            if !sites.contains(&rec.launch_site) {
                sites.push(rec.launch_site.clone());
            }
            if !booster_categories.contains(&rec.booster_category) {
                booster_categories.push(rec.booster_category.clone());
            }
            min_payload_kg = min_payload_kg.min(rec.payload_mass_kg);
            max_payload_kg = max_payload_kg.max(rec.payload_mass_kg);
        }

        Some(Dataset {
            records,
            sites,
            booster_categories,
            min_payload_kg,
            max_payload_kg,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn booster_categories(&self) -> &[String] {
        &self.booster_categories
    }

    /// Global `(min, max)` payload mass in kg.
    pub fn payload_bounds(&self) -> (f64, f64) {
        (self.min_payload_kg, self.max_payload_kg)
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false` for a constructed dataset; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A subset view over every row.
    pub fn all(&self) -> Subset<'_> {
        Subset {
            rows: self.records.iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Subset – an order-preserving selection of dataset rows
// ---------------------------------------------------------------------------

/// Borrowed rows of a [`Dataset`], in dataset order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Subset<'a> {
    rows: Vec<&'a LaunchRecord>,
}

impl<'a> Subset<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a LaunchRecord> + '_ {
        self.rows.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keep the rows matching `pred`, preserving order.
    pub fn retain_where(&self, pred: impl Fn(&LaunchRecord) -> bool) -> Subset<'a> {
        Subset {
            rows: self.rows.iter().copied().filter(|r| pred(r)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_rejects_non_binary_class() {
        assert_eq!(Outcome::try_from(0), Ok(Outcome::Failure));
        assert_eq!(Outcome::try_from(1), Ok(Outcome::Success));
        assert!(Outcome::try_from(2).is_err());
    }

    #[test]
    fn dataset_indices_keep_first_appearance_order() {
        let ds = Dataset::from_records(vec![
            LaunchRecord::new("VAFB SLC-4E", 9600.0, "FT", Outcome::Success),
            LaunchRecord::new("CCAFS LC-40", 0.0, "v1.0", Outcome::Failure),
            LaunchRecord::new("VAFB SLC-4E", 500.0, "v1.1", Outcome::Failure),
        ])
        .unwrap();

        assert_eq!(ds.sites(), ["VAFB SLC-4E", "CCAFS LC-40"]);
        assert_eq!(ds.booster_categories(), ["FT", "v1.0", "v1.1"]);
        assert_eq!(ds.payload_bounds(), (0.0, 9600.0));
        assert_eq!(ds.all().len(), 3);
    }

    #[test]
    fn empty_input_builds_no_dataset() {
        assert!(Dataset::from_records(Vec::new()).is_none());
    }
}
