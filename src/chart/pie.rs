use super::{title_for, ChartSpec, Layout, Legend, PieMarker, PieTrace, Text, Trace, OUTCOME_LABEL};
use crate::color::{ColorMap, OUTCOME_COLORS};
use crate::data::{count_outcomes, Outcome, SiteSelection, Subset};

/// Donut chart of success vs. failure counts in `subset`.
///
/// Both slices are always emitted, so an empty subset still yields a valid
/// chart with zero counts.
pub fn build_outcome_pie(subset: &Subset<'_>, site: &SiteSelection) -> ChartSpec {
    let counts = count_outcomes(subset);
    let colors = ColorMap::from_table(OUTCOME_COLORS);

    let trace = PieTrace {
        labels: Outcome::ALL.iter().map(|o| o.label().to_string()).collect(),
        values: Outcome::ALL.iter().map(|&o| counts.get(o)).collect(),
        hole: 0.3,
        marker: PieMarker {
            colors: Outcome::ALL
                .iter()
                .map(|o| colors.color_for(o.label()).to_string())
                .collect(),
        },
        sort: false,
    };

    let prefix = match site {
        SiteSelection::All => "Total Launch Success vs. Failure",
        SiteSelection::Site(_) => "Launch Success vs. Failure",
    };

    ChartSpec {
        data: vec![Trace::Pie(trace)],
        layout: Layout {
            title: Text::new(title_for(prefix, site)),
            xaxis: None,
            yaxis: None,
            legend: Legend {
                title: Text::new(OUTCOME_LABEL),
            },
        },
    }
}
