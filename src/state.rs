use std::collections::BTreeMap;

use serde_json::Value;

use crate::data::{PayloadRange, SiteSelection};
use crate::error::BindingError;

// ---------------------------------------------------------------------------
// Selection state
// ---------------------------------------------------------------------------

/// Current component values keyed by component id, as sent by the page.
pub type Inputs = BTreeMap<String, Value>;

/// The user's selection, rebuilt from the inputs on every callback; nothing is
/// kept between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl SelectionState {
    /// Read the site dropdown and payload slider values.
    pub fn from_inputs(inputs: &Inputs, site_id: &str, payload_id: &str) -> Result<Self, BindingError> {
        Ok(SelectionState {
            site: site_from_inputs(inputs, site_id)?,
            payload: payload_from_inputs(inputs, payload_id)?,
        })
    }
}

fn lookup<'a>(inputs: &'a Inputs, id: &str) -> Result<&'a Value, BindingError> {
    inputs
        .get(id)
        .ok_or_else(|| BindingError::MissingInput(id.to_string()))
}

/// Dropdown value: a site name or the `ALL` sentinel.
pub fn site_from_inputs(inputs: &Inputs, id: &str) -> Result<SiteSelection, BindingError> {
    match lookup(inputs, id)? {
        Value::String(s) => Ok(SiteSelection::from_value(s)),
        other => Err(BindingError::invalid(id, format!("expected a site name, got {other}"))),
    }
}

/// Slider value: `[low, high]` in kg.
pub fn payload_from_inputs(inputs: &Inputs, id: &str) -> Result<PayloadRange, BindingError> {
    let value = lookup(inputs, id)?;
    let bounds: Vec<f64> = value
        .as_array()
        .map(|arr| arr.iter().filter_map(Value::as_f64).collect())
        .unwrap_or_default();

    match bounds[..] {
        [low, high] if value.as_array().map_or(false, |a| a.len() == 2) => {
            PayloadRange::new(low, high).ok_or_else(|| {
                BindingError::invalid(id, format!("range [{low}, {high}] is inverted"))
            })
        }
        _ => Err(BindingError::invalid(id, format!("expected [low, high], got {value}"))),
    }
}
