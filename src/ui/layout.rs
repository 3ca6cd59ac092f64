use serde::Serialize;
use serde_json::{json, Value};

use crate::data::{Dataset, ALL_SITES};
use crate::state::Inputs;

// ---------------------------------------------------------------------------
// Component ids
// ---------------------------------------------------------------------------

pub const SITE_DROPDOWN: &str = "site-dropdown";
pub const PAYLOAD_SLIDER: &str = "payload-slider";
pub const PIE_CHART: &str = "success-pie-chart";
pub const SCATTER_CHART: &str = "success-payload-scatter-chart";

/// Slider bounds and step, in kg.
pub const PAYLOAD_MIN_KG: f64 = 0.0;
pub const PAYLOAD_MAX_KG: f64 = 10_000.0;
pub const PAYLOAD_STEP_KG: f64 = 1_000.0;

// ---------------------------------------------------------------------------
// Widget tree
// ---------------------------------------------------------------------------

/// One node of the declared page. The browser builds the DOM from the
/// serialized tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    Heading {
        text: String,
    },
    Paragraph {
        text: String,
    },
    Break,
    Dropdown {
        id: String,
        options: Vec<DropdownOption>,
        value: String,
        placeholder: String,
        searchable: bool,
    },
    RangeSlider {
        id: String,
        min: f64,
        max: f64,
        step: f64,
        marks: Vec<SliderMark>,
        value: [f64; 2],
    },
    Graph {
        id: String,
    },
}

impl Component {
    pub fn id(&self) -> Option<&str> {
        match self {
            Component::Dropdown { id, .. }
            | Component::RangeSlider { id, .. }
            | Component::Graph { id } => Some(id.as_str()),
            _ => None,
        }
    }

    /// The value the component starts with, for input components.
    pub fn initial_value(&self) -> Option<Value> {
        match self {
            Component::Dropdown { value, .. } => Some(json!(value)),
            Component::RangeSlider { value, .. } => Some(json!(value)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    pub children: Vec<Component>,
}

impl Layout {
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.children.iter().find(|c| c.id() == Some(id))
    }

    /// Initial values of every input component.
    pub fn initial_inputs(&self) -> Inputs {
        self.children
            .iter()
            .filter_map(|c| Some((c.id()?.to_string(), c.initial_value()?)))
            .collect()
    }
}

/// Declare the dashboard page for `dataset`: site options come from the sites
/// seen at load time.
pub fn build_layout(dataset: &Dataset) -> Layout {
    let mut options = vec![DropdownOption {
        label: "All Sites".to_string(),
        value: ALL_SITES.to_string(),
    }];
    options.extend(dataset.sites().iter().map(|site| DropdownOption {
        label: site.clone(),
        value: site.clone(),
    }));

    let steps = (PAYLOAD_MAX_KG / PAYLOAD_STEP_KG) as usize;
    let marks = (0..=steps)
        .map(|i| {
            let kg = PAYLOAD_MIN_KG + i as f64 * PAYLOAD_STEP_KG;
            SliderMark {
                value: kg,
                label: format!("{kg} Kg"),
            }
        })
        .collect();

    Layout {
        title: "SpaceX Launch Records Dashboard".to_string(),
        children: vec![
            Component::Heading {
                text: "SpaceX Launch Records Dashboard".to_string(),
            },
            Component::Dropdown {
                id: SITE_DROPDOWN.to_string(),
                options,
                value: ALL_SITES.to_string(),
                placeholder: "Select a Launch Site here".to_string(),
                searchable: true,
            },
            Component::Break,
            Component::Graph {
                id: PIE_CHART.to_string(),
            },
            Component::Break,
            Component::Paragraph {
                text: "Payload range (Kg):".to_string(),
            },
            Component::RangeSlider {
                id: PAYLOAD_SLIDER.to_string(),
                min: PAYLOAD_MIN_KG,
                max: PAYLOAD_MAX_KG,
                step: PAYLOAD_STEP_KG,
                marks,
                value: [PAYLOAD_MIN_KG, PAYLOAD_MAX_KG],
            },
            Component::Graph {
                id: SCATTER_CHART.to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{LaunchRecord, Outcome};

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, "v1.0", Outcome::Failure),
            LaunchRecord::new("VAFB SLC-4E", 500.0, "v1.1", Outcome::Failure),
            LaunchRecord::new("CCAFS LC-40", 2000.0, "FT", Outcome::Success),
        ])
        .unwrap()
    }

    #[test]
    fn dropdown_lists_sentinel_then_sites() {
        let layout = build_layout(&dataset());
        let Some(Component::Dropdown { options, value, .. }) = layout.component(SITE_DROPDOWN) else {
            panic!("dropdown missing");
        };
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, [ALL_SITES, "CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(options[0].label, "All Sites");
        assert_eq!(value, ALL_SITES);
    }

    #[test]
    fn slider_covers_full_range_in_fixed_steps() {
        let layout = build_layout(&dataset());
        let Some(Component::RangeSlider { min, max, step, marks, value, .. }) =
            layout.component(PAYLOAD_SLIDER)
        else {
            panic!("slider missing");
        };
        assert_eq!((*min, *max, *step), (0.0, 10_000.0, 1_000.0));
        assert_eq!(*value, [0.0, 10_000.0]);
        assert_eq!(marks.len(), 11);
        assert_eq!(marks[3].label, "3000 Kg");
    }

    #[test]
    fn initial_inputs_hold_defaults() {
        let inputs = build_layout(&dataset()).initial_inputs();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[SITE_DROPDOWN], json!("ALL"));
        assert_eq!(inputs[PAYLOAD_SLIDER], json!([0.0, 10000.0]));
        assert!(build_layout(&dataset()).component(PIE_CHART).is_some());
    }

    #[test]
    fn serializes_tagged_components() {
        let json = serde_json::to_value(build_layout(&dataset())).unwrap();
        assert_eq!(json["children"][0]["type"], "heading");
        assert_eq!(json["children"][1]["type"], "dropdown");
        assert_eq!(json["children"][2]["type"], "break");
        assert_eq!(json["children"][6]["type"], "range_slider");
    }
}
