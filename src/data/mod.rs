/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///   spacex_launch_dash.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse + validate → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  Vec<LaunchRecord>, site / category index, payload bounds
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter  │  site / payload predicates → Subset, outcome counts
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;

pub use filter::{
    count_outcomes, filter_by_payload_range, filter_by_site, OutcomeCounts, PayloadRange,
    SiteSelection, ALL_SITES,
};
pub use model::{Dataset, LaunchRecord, Outcome, Subset};
