use std::sync::Arc;

use crate::chart::{build_outcome_pie, build_payload_scatter, ChartSpec};
use crate::data::{filter_by_payload_range, filter_by_site, Dataset};
use crate::error::BindingError;
use crate::state::{site_from_inputs, Inputs, SelectionState};
use crate::ui::binding::Dashboard;
use crate::ui::layout::{build_layout, PAYLOAD_SLIDER, PIE_CHART, SCATTER_CHART, SITE_DROPDOWN};

// ---------------------------------------------------------------------------
// Dashboard assembly
// ---------------------------------------------------------------------------

/// Declare the page for `dataset` and wire both charts to their inputs.
pub fn build_dashboard(dataset: Arc<Dataset>) -> Result<Dashboard, BindingError> {
    let layout = build_layout(&dataset);
    let mut dashboard = Dashboard::new(dataset, layout);
    dashboard.register(&[SITE_DROPDOWN], PIE_CHART, outcome_pie)?;
    dashboard.register(&[SITE_DROPDOWN, PAYLOAD_SLIDER], SCATTER_CHART, payload_scatter)?;
    Ok(dashboard)
}

// ---------------------------------------------------------------------------
// Callbacks
// ---------------------------------------------------------------------------

/// Pie chart: filtered by site only.
pub fn outcome_pie(dataset: &Dataset, inputs: &Inputs) -> Result<ChartSpec, BindingError> {
    let site = site_from_inputs(inputs, SITE_DROPDOWN)?;
    let subset = filter_by_site(&dataset.all(), &site);
    log::debug!("Pie for {site}: {} rows", subset.len());
    Ok(build_outcome_pie(&subset, &site))
}

/// Scatter chart: filtered by payload range, then by site.
pub fn payload_scatter(dataset: &Dataset, inputs: &Inputs) -> Result<ChartSpec, BindingError> {
    let sel = SelectionState::from_inputs(inputs, SITE_DROPDOWN, PAYLOAD_SLIDER)?;
    let in_range = filter_by_payload_range(&dataset.all(), &sel.payload);
    let subset = filter_by_site(&in_range, &sel.site);
    log::debug!(
        "Scatter for {} in [{}, {}] kg: {} rows",
        sel.site,
        sel.payload.low_kg(),
        sel.payload.high_kg(),
        subset.len()
    );
    Ok(build_payload_scatter(
        &subset,
        &sel.site,
        dataset.booster_categories(),
    ))
}
