use super::{
    title_for, Axis, ChartSpec, Layout, Legend, ScatterMarker, ScatterTrace, Text, Trace,
    OUTCOME_LABEL, PAYLOAD_LABEL,
};
use crate::color::{ColorMap, BOOSTER_COLORS};
use crate::data::{SiteSelection, Subset};

/// Payload mass vs. outcome class, one trace per booster version category.
///
/// `categories` is the full dataset's category list: categories without a
/// fixed colour get a generated one assigned from it, so their colour does not
/// depend on which rows survive the filters. An empty subset yields a chart
/// with no traces.
pub fn build_payload_scatter(
    subset: &Subset<'_>,
    site: &SiteSelection,
    categories: &[String],
) -> ChartSpec {
    // Group rows by category, first appearance first.
    let mut groups: Vec<(&str, Vec<f64>, Vec<u8>)> = Vec::new();
    for rec in subset.iter() {
        let idx = match groups
            .iter()
            .position(|(cat, _, _)| *cat == rec.booster_category)
        {
            Some(i) => i,
            None => {
                groups.push((rec.booster_category.as_str(), Vec::new(), Vec::new()));
                groups.len() - 1
            }
        };
        groups[idx].1.push(rec.payload_mass_kg);
        groups[idx].2.push(rec.outcome.class());
    }

    let colors = ColorMap::from_table(BOOSTER_COLORS)
        .with_fallbacks(categories.iter().map(String::as_str));

    let data = groups
        .into_iter()
        .map(|(cat, x, y)| {
            Trace::Scatter(ScatterTrace {
                name: cat.to_string(),
                mode: "markers",
                x,
                y,
                marker: ScatterMarker {
                    color: colors.color_for(cat).to_string(),
                },
            })
        })
        .collect();

    ChartSpec {
        data,
        layout: Layout {
            title: Text::new(title_for(
                "Correlation between Payload Mass and Launch Outcome",
                site,
            )),
            xaxis: Some(Axis {
                title: Text::new(PAYLOAD_LABEL),
                tickvals: None,
            }),
            yaxis: Some(Axis {
                title: Text::new(OUTCOME_LABEL),
                tickvals: Some(vec![0, 1]),
            }),
            legend: Legend {
                title: Text::new("Booster Version Category"),
            },
        },
    }
}
