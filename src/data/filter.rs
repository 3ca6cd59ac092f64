use std::fmt;

use super::model::{Outcome, Subset};

// ---------------------------------------------------------------------------
// Site selection: the dropdown value
// ---------------------------------------------------------------------------

/// Wire value of the "no site filter" dropdown option.
pub const ALL_SITES: &str = "ALL";

/// Which launch site the user picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    /// No site filter.
    All,
    Site(String),
}

impl SiteSelection {
    /// Interpret a dropdown value; the [`ALL_SITES`] sentinel maps to `All`.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => write!(f, "All Sites"),
            SiteSelection::Site(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Payload range: the slider value
// ---------------------------------------------------------------------------

/// Closed payload interval `[low_kg, high_kg]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    low_kg: f64,
    high_kg: f64,
}

impl PayloadRange {
    /// Returns `None` unless both bounds are finite and `low_kg <= high_kg`.
    pub fn new(low_kg: f64, high_kg: f64) -> Option<Self> {
        if low_kg.is_finite() && high_kg.is_finite() && low_kg <= high_kg {
            Some(PayloadRange { low_kg, high_kg })
        } else {
            None
        }
    }

    pub fn low_kg(&self) -> f64 {
        self.low_kg
    }

    pub fn high_kg(&self) -> f64 {
        self.high_kg
    }

    /// Inclusive on both ends.
    pub fn contains(&self, payload_kg: f64) -> bool {
        self.low_kg <= payload_kg && payload_kg <= self.high_kg
    }
}

// ---------------------------------------------------------------------------
// Row predicates
// ---------------------------------------------------------------------------

/// Rows launched from the selected site. `All` returns the input unchanged;
/// a site with no rows yields an empty subset.
pub fn filter_by_site<'a>(subset: &Subset<'a>, site: &SiteSelection) -> Subset<'a> {
    match site {
        SiteSelection::All => subset.clone(),
        SiteSelection::Site(name) => subset.retain_where(|r| r.launch_site == *name),
    }
}

/// Rows whose payload lies in `range` (both bounds inclusive).
pub fn filter_by_payload_range<'a>(subset: &Subset<'a>, range: &PayloadRange) -> Subset<'a> {
    subset.retain_where(|r| range.contains(r.payload_mass_kg))
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Row counts per outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutcomeCounts {
    pub success: usize,
    pub failure: usize,
}

impl OutcomeCounts {
    pub fn get(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Success => self.success,
            Outcome::Failure => self.failure,
        }
    }
}

/// Group rows by outcome and count them.
pub fn count_outcomes(subset: &Subset<'_>) -> OutcomeCounts {
    subset
        .iter()
        .fold(OutcomeCounts::default(), |mut acc, r| {
            match r.outcome {
                Outcome::Success => acc.success += 1,
                Outcome::Failure => acc.failure += 1,
            }
            acc
        })
}
