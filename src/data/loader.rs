use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::{Dataset, LaunchRecord};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with at least `Launch Site`, `Payload Mass (kg)`,
///   `Booster Version Category` and `class`; other columns are ignored
/// * `.json` – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
///
/// Any unreadable file, malformed row or empty table is an error.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            read_csv(file)?
        }
        "json" => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<Vec<LaunchRecord>>(&text).context("parsing JSON records")?
        }
        other => bail!("Unsupported file extension: .{other}"),
    };

    validate(&records)?;
    Dataset::from_records(records)
        .with_context(|| format!("{} contains no launch records", path.display()))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Deserialize every CSV row into a [`LaunchRecord`].
pub fn read_csv<R: Read>(input: R) -> Result<Vec<LaunchRecord>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for required in [
        "Launch Site",
        "Payload Mass (kg)",
        "Booster Version Category",
        "class",
    ] {
        if !headers.iter().any(|h| h == required) {
            bail!("CSV missing '{required}' column");
        }
    }

    // Line 1 is the header.
    reader
        .deserialize::<LaunchRecord>()
        .enumerate()
        .map(|(row_no, result)| result.with_context(|| format!("CSV line {}", row_no + 2)))
        .collect()
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(records: &[LaunchRecord]) -> Result<()> {
    for (row_no, rec) in records.iter().enumerate() {
        if !rec.payload_mass_kg.is_finite() || rec.payload_mass_kg < 0.0 {
            bail!(
                "Row {row_no}: payload mass must be a non-negative number, got {}",
                rec.payload_mass_kg
            );
        }
        if rec.launch_site.is_empty() {
            bail!("Row {row_no}: empty launch site");
        }
    }
    Ok(())
}
