use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::layout::Layout;
use crate::chart::ChartSpec;
use crate::data::Dataset;
use crate::error::BindingError;
use crate::state::Inputs;

// ---------------------------------------------------------------------------
// Reactive bindings
// ---------------------------------------------------------------------------

/// A callback: a pure function of the dataset and the current input values.
pub type Handler = fn(&Dataset, &Inputs) -> Result<ChartSpec, BindingError>;

/// Recompute `output` whenever any of `inputs` changes.
#[derive(Clone, Serialize)]
pub struct Binding {
    pub inputs: Vec<String>,
    pub output: String,
    #[serde(skip)]
    handler: Handler,
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("inputs", &self.inputs)
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}

/// The declared page, its bindings and the dataset they read. Immutable once
/// built; request handlers share it behind an `Arc`.
#[derive(Debug)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    layout: Layout,
    bindings: Vec<Binding>,
}

impl Dashboard {
    pub fn new(dataset: Arc<Dataset>, layout: Layout) -> Self {
        Dashboard {
            dataset,
            layout,
            bindings: Vec::new(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Register `handler` as the producer of `output`. Every id must name a
    /// component of the layout and each output may be bound once.
    pub fn register(
        &mut self,
        inputs: &[&str],
        output: &str,
        handler: Handler,
    ) -> Result<(), BindingError> {
        for id in inputs.iter().chain(std::iter::once(&output)) {
            if self.layout.component(id).is_none() {
                return Err(BindingError::UnknownComponent(id.to_string()));
            }
        }
        if self.bindings.iter().any(|b| b.output == output) {
            return Err(BindingError::DuplicateOutput(output.to_string()));
        }

        log::debug!("Binding {inputs:?} -> {output}");
        self.bindings.push(Binding {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            output: output.to_string(),
            handler,
        });
        Ok(())
    }

    /// Run the binding that produces `output` with the given input values.
    /// Only the binding's declared inputs are checked; extras are ignored.
    pub fn dispatch(&self, output: &str, inputs: &Inputs) -> Result<ChartSpec, BindingError> {
        let binding = self
            .bindings
            .iter()
            .find(|b| b.output == output)
            .ok_or_else(|| BindingError::UnknownOutput(output.to_string()))?;

        if let Some(missing) = binding.inputs.iter().find(|i| !inputs.contains_key(*i)) {
            return Err(BindingError::MissingInput(missing.clone()));
        }

        (binding.handler)(&self.dataset, inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::build_outcome_pie;
    use crate::data::{LaunchRecord, Outcome, SiteSelection};
    use crate::ui::layout::{build_layout, PIE_CHART, SCATTER_CHART, SITE_DROPDOWN};
    use serde_json::json;

    fn dashboard() -> Dashboard {
        let ds = Dataset::from_records(vec![LaunchRecord::new("A", 10.0, "FT", Outcome::Success)]).unwrap();
        let layout = build_layout(&ds);
        Dashboard::new(Arc::new(ds), layout)
    }

    fn whole_pie(ds: &Dataset, _inputs: &Inputs) -> Result<ChartSpec, BindingError> {
        Ok(build_outcome_pie(&ds.all(), &SiteSelection::All))
    }

    #[test]
    fn register_rejects_unknown_ids_and_duplicates() {
        let mut d = dashboard();
        assert_eq!(
            d.register(&["nope"], PIE_CHART, whole_pie),
            Err(BindingError::UnknownComponent("nope".into()))
        );
        assert_eq!(
            d.register(&[SITE_DROPDOWN], "nowhere", whole_pie),
            Err(BindingError::UnknownComponent("nowhere".into()))
        );
        d.register(&[SITE_DROPDOWN], PIE_CHART, whole_pie).unwrap();
        assert_eq!(
            d.register(&[SITE_DROPDOWN], PIE_CHART, whole_pie),
            Err(BindingError::DuplicateOutput(PIE_CHART.into()))
        );
    }

    #[test]
    fn dispatch_checks_output_and_inputs() {
        let mut d = dashboard();
        d.register(&[SITE_DROPDOWN], PIE_CHART, whole_pie).unwrap();

        let mut inputs = Inputs::new();
        assert_eq!(
            d.dispatch(PIE_CHART, &inputs).unwrap_err(),
            BindingError::MissingInput(SITE_DROPDOWN.into())
        );
        assert_eq!(
            d.dispatch(SCATTER_CHART, &inputs).unwrap_err(),
            BindingError::UnknownOutput(SCATTER_CHART.into())
        );

        inputs.insert(SITE_DROPDOWN.to_string(), json!("ALL"));
        let spec = d.dispatch(PIE_CHART, &inputs).unwrap();
        assert_eq!(spec.data.len(), 1);
    }
}
