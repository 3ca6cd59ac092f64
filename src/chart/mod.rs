//! Chart descriptions handed to the browser.
//!
//! A [`ChartSpec`] serializes to a Plotly figure (`{ "data": [...], "layout": {...} }`)
//! that the page passes straight to `Plotly.react`.

pub mod pie;
pub mod scatter;

use serde::Serialize;

use crate::data::SiteSelection;

pub use pie::build_outcome_pie;
pub use scatter::build_payload_scatter;

/// Axis / legend label for the `class` column.
pub const OUTCOME_LABEL: &str = "Launch Outcome";
pub const PAYLOAD_LABEL: &str = "Payload Mass (Kg)";

// ---------------------------------------------------------------------------
// Figure
// ---------------------------------------------------------------------------

/// A renderable chart: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        &self.layout.title.text
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie(PieTrace),
    Scatter(ScatterTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<usize>,
    /// Fraction of the radius cut out, making a donut.
    pub hole: f64,
    pub marker: PieMarker,
    /// Keep slices in label order instead of sorting by value.
    pub sort: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieMarker {
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub name: String,
    pub mode: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<u8>,
    pub marker: ScatterMarker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterMarker {
    pub color: String,
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Text { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickvals: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Text,
}

/// Title suffix naming the selection: `(All Sites)` or `for <site>`.
fn title_for(prefix: &str, site: &SiteSelection) -> String {
    match site {
        SiteSelection::All => format!("{prefix} (All Sites)"),
        SiteSelection::Site(name) => format!("{prefix} for {name}"),
    }
}
