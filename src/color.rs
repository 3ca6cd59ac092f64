use std::collections::BTreeMap;

use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Fixed category → colour tables
// ---------------------------------------------------------------------------

/// Pie slice colours keyed by outcome label.
pub const OUTCOME_COLORS: &[(&str, &str)] = &[("Failure", "red"), ("Success", "green")];

/// Scatter marker colours keyed by booster version category.
pub const BOOSTER_COLORS: &[(&str, &str)] = &[
    ("v1.0", "blue"),
    ("v1.1", "green"),
    ("FT", "red"),
    ("Block 5", "purple"),
];

/// Used when no generated colour is available.
pub const DEFAULT_COLOR: &str = "gray";

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct `#rrggbb` colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            let rgb: Srgb<u8> = rgb.into_format();
            format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category value → CSS colour
// ---------------------------------------------------------------------------

/// Maps category values to CSS colours. Unmapped values fall back to a
/// generated palette entry, or [`DEFAULT_COLOR`].
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, String>,
    default_color: String,
}

impl ColorMap {
    /// Build a map from a fixed table.
    pub fn from_table(table: &[(&str, &str)]) -> Self {
        ColorMap {
            mapping: table
                .iter()
                .map(|&(k, c)| (k.to_string(), c.to_string()))
                .collect(),
            default_color: DEFAULT_COLOR.to_string(),
        }
    }

    /// Give every value of `categories` missing from the table its own
    /// generated colour, so new categories stay distinguishable.
    pub fn with_fallbacks<'a>(mut self, categories: impl IntoIterator<Item = &'a str>) -> Self {
        let mut missing: Vec<&str> = Vec::new();
        for cat in categories {
            if !self.mapping.contains_key(cat) && !missing.contains(&cat) {
                missing.push(cat);
            }
        }
        let palette = generate_palette(missing.len());
        for (cat, color) in missing.into_iter().zip(palette) {
            log::debug!("No fixed colour for category {cat:?}, using {color}");
            self.mapping.insert(cat.to_string(), color);
        }
        self
    }

    /// Look up the colour for a given category value.
    pub fn color_for(&self, value: &str) -> &str {
        self.mapping
            .get(value)
            .map(String::as_str)
            .unwrap_or(self.default_color.as_str())
    }
}
