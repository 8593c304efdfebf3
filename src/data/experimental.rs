use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::InhibkinError;
use crate::model::Curve;

/// One measurement row; the abscissa column may be time or concentration
#[derive(Debug, Deserialize)]
struct ExperimentalRow {
    #[serde(alias = "time", alias = "t", alias = "conc", alias = "concentration")]
    x: f64,
    #[serde(alias = "mu", alias = "y")]
    value: f64,
}

/// Read `(x, value)` measurements from a CSV file
///
/// The file needs a header row. Headers are matched case-insensitively:
/// the abscissa may be called `x`, `time`, `t`, `conc` or `concentration`,
/// the measurement `value`, `mu` or `y`. Other columns are ignored and lines
/// starting with `#` are skipped. Rows may appear in any order.
///
/// ```csv
/// time,value
/// 0.0,6.0
/// 2.0,6.4
/// 4.0,7.1
/// ```
pub fn read_experimental_csv(path: impl AsRef<Path>) -> Result<Curve, InhibkinError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| import_error(path, e))?;
    let curve = parse(file, path)?;
    log::info!(
        "Loaded {} experimental points from {}",
        curve.len(),
        path.display()
    );
    Ok(curve)
}

/// Same as [`read_experimental_csv`] for any reader
pub fn read_experimental_reader<R: Read>(reader: R) -> Result<Curve, InhibkinError> {
    parse(reader, Path::new("<reader>"))
}

fn parse<R: Read>(reader: R, origin: &Path) -> Result<Curve, InhibkinError> {
    let mut reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| import_error(origin, e))?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    reader.set_headers(csv::StringRecord::from(headers));

    let mut points = Vec::new();
    for row in reader.deserialize() {
        let row: ExperimentalRow = row.map_err(|e| import_error(origin, e))?;
        points.push((row.x, row.value));
    }

    Curve::from_unsorted(points).map_err(|e| import_error(origin, e))
}

fn import_error(path: &Path, e: impl ToString) -> InhibkinError {
    InhibkinError::Import {
        path: PathBuf::from(path),
        reason: e.to_string(),
    }
}
