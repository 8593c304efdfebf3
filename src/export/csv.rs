use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::InhibkinError;
use crate::model::{TimePoint, TimeSeries};
use crate::params::{Compound, Parameter, ParameterSet};

const HEADER: [&str; 4] = ["time", "concentration", "growth_rate", "biomass"];
const LOG_BIOMASS_HEADER: &str = "log10_biomass";

/// Options for [`write_time_series_csv`]
#[derive(Debug, Clone, Default)]
pub struct CsvOptions {
    /// Append a `log10_biomass` column (default: false)
    pub include_log_biomass: bool,
    /// Parameters written as `#` comment lines above the header
    pub metadata: Option<ParameterSet>,
}

impl CsvOptions {
    pub fn with_log_biomass(mut self) -> Self {
        self.include_log_biomass = true;
        self
    }

    pub fn with_metadata(mut self, params: ParameterSet) -> Self {
        self.metadata = Some(params);
        self
    }
}

/// File name used by the interactive export action
pub fn default_export_filename(compound: Compound) -> String {
    format!("kinetic_data_{}.csv", compound.id())
}

/// Write a time series to `path`, replacing any existing file
///
/// Output:
///
/// ```csv
/// # compound: compound1        (only with metadata)
/// # mu_max: 0.95
/// time,concentration,growth_rate,biomass
/// 0,0.2,0.3562,1000000
/// ```
pub fn write_time_series_csv(
    series: &TimeSeries,
    path: impl AsRef<Path>,
    options: Option<&CsvOptions>,
) -> Result<(), InhibkinError> {
    let path = path.as_ref();
    let default_options = CsvOptions::default();
    let options = options.unwrap_or(&default_options);
    let fail = |e: &dyn ToString| InhibkinError::ExportFailure {
        path: PathBuf::from(path),
        reason: e.to_string(),
    };

    let file = File::create(path).map_err(|e| fail(&e))?;
    let mut out = BufWriter::new(file);
    if let Some(params) = &options.metadata {
        write_metadata(&mut out, params).map_err(|e| fail(&e))?;
    }

    let mut writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);

    let mut header: Vec<&str> = HEADER.to_vec();
    if options.include_log_biomass {
        header.push(LOG_BIOMASS_HEADER);
    }
    writer.write_record(&header).map_err(|e| fail(&e))?;

    for point in series.points() {
        let mut record = vec![
            point.time.to_string(),
            point.concentration.to_string(),
            point.growth_rate.to_string(),
            point.biomass.to_string(),
        ];
        if options.include_log_biomass {
            record.push(point.biomass.log10().to_string());
        }
        writer.write_record(&record).map_err(|e| fail(&e))?;
    }
    writer.flush().map_err(|e| fail(&e))?;

    log::info!("Exported {} rows to {}", series.len(), path.display());
    Ok(())
}

fn write_metadata<W: Write>(out: &mut W, params: &ParameterSet) -> std::io::Result<()> {
    writeln!(out, "# inhibkin kinetic export")?;
    writeln!(out, "# compound: {}", params.compound.id())?;
    for parameter in Parameter::ALL {
        writeln!(out, "# {}: {}", parameter.name(), params.get(parameter))?;
    }
    Ok(())
}

/// Read a series written by [`write_time_series_csv`]
///
/// Comment lines are skipped and extra columns such as `log10_biomass` are
/// ignored.
pub fn read_time_series_csv(path: impl AsRef<Path>) -> Result<TimeSeries, InhibkinError> {
    let path = path.as_ref();
    let fail = |e: &dyn ToString| InhibkinError::Import {
        path: PathBuf::from(path),
        reason: e.to_string(),
    };

    let mut reader = ::csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(true)
        .from_path(path)
        .map_err(|e| fail(&e))?;

    let points = reader
        .deserialize::<TimePoint>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| fail(&e))?;

    TimeSeries::from_points(points).map_err(|e| fail(&e))
}
