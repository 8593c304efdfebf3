use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use inhibkin::data::{compare_to_experimental, read_experimental_csv, Residuals};
use inhibkin::export::{
    default_export_filename, write_summary_json, write_time_series_csv, CsvOptions, RunSummary,
};
use inhibkin::model::{default_inhibition_curve, Curve, Quantity};
use inhibkin::params::{Compound, Parameter, ParameterSet};
use inhibkin::render::Dashboard;
use inhibkin::InhibkinError;

/// Competitive inhibition / pharmacokinetics / logistic growth explorer
#[derive(Debug, Parser)]
#[command(name = "inhibkin", version, about)]
struct Cli {
    /// JSON parameter file; missing fields keep their default values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum specific growth rate μmax (h⁻¹)
    #[arg(long)]
    mu_max: Option<f64>,

    /// Inhibition constant of compound 1 (mmol/L)
    #[arg(long)]
    ki1: Option<f64>,

    /// Inhibition constant of compound 2 (mmol/L)
    #[arg(long)]
    ki2: Option<f64>,

    /// Absorption rate constant (h⁻¹)
    #[arg(long)]
    ka: Option<f64>,

    /// Elimination rate constant (h⁻¹)
    #[arg(long)]
    ke: Option<f64>,

    /// Initial inhibitor concentration (mmol/L)
    #[arg(long)]
    c0: Option<f64>,

    /// Initial biomass (cells/mL)
    #[arg(long)]
    n0: Option<f64>,

    /// Carrying capacity (cells/mL)
    #[arg(long)]
    k_max: Option<f64>,

    /// Compound driving the kinetic series (1 or 2)
    #[arg(long)]
    compound: Option<Compound>,

    /// End of the time grid (h)
    #[arg(long)]
    time_end: Option<f64>,

    /// Number of grid intervals
    #[arg(long)]
    time_points: Option<f64>,

    /// Override any parameter by name, e.g. `--set ke=0.08` (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    overrides: Vec<(Parameter, f64)>,

    /// Export the kinetic series as CSV (default name: kinetic_data_<compound>.csv)
    #[arg(long, value_name = "FILE", num_args = 0..=1)]
    export: Option<Option<PathBuf>>,

    /// Add a log10_biomass column and parameter comments to the CSV export
    #[arg(long)]
    detailed_export: bool,

    /// Write a JSON run summary
    #[arg(long, value_name = "FILE")]
    summary: Option<PathBuf>,

    /// Experimental `(x, value)` CSV to compare against the model
    #[arg(long, value_name = "FILE")]
    experimental: Option<PathBuf>,

    /// Model curve the experimental data is compared with
    #[arg(long, value_enum, default_value_t = Against::GrowthRate)]
    against: Against,

    /// Render SVG plots into this directory (requires the `plots` feature)
    #[arg(long, value_name = "DIR")]
    plots: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Against {
    /// Growth rate vs concentration of the selected compound
    Inhibition,
    Concentration,
    GrowthRate,
    Biomass,
    Log10Biomass,
}

fn parse_assignment(s: &str) -> Result<(Parameter, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", s))?;
    let parameter = name.parse::<Parameter>()?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("{}: {}", name, e))?;
    Ok((parameter, value))
}

impl Cli {
    /// Apply config file, typed flags and `--set` overrides, in that order
    fn parameters(&self) -> Result<ParameterSet, InhibkinError> {
        let mut params = match &self.config {
            Some(path) => ParameterSet::from_json_file(path)?,
            None => ParameterSet::default(),
        };
        if let Some(compound) = self.compound {
            params = params.with_compound(compound);
        }

        let flags = [
            (Parameter::MuMax, self.mu_max),
            (Parameter::KiCompound1, self.ki1),
            (Parameter::KiCompound2, self.ki2),
            (Parameter::Ka, self.ka),
            (Parameter::Ke, self.ke),
            (Parameter::InitialConcentration, self.c0),
            (Parameter::N0, self.n0),
            (Parameter::KMax, self.k_max),
            (Parameter::TimeEnd, self.time_end),
            (Parameter::TimePoints, self.time_points),
        ];
        for (parameter, value) in flags {
            if let Some(value) = value {
                params = params.with(parameter, value)?;
            }
        }
        for &(parameter, value) in &self.overrides {
            params = params.with(parameter, value)?;
        }
        Ok(params)
    }
}

fn model_curve(dashboard: &Dashboard, against: Against) -> Result<Curve, InhibkinError> {
    let kinetics = &dashboard.kinetics;
    Ok(match against {
        Against::Inhibition => {
            default_inhibition_curve(&dashboard.parameters, dashboard.parameters.compound)?
        }
        Against::Concentration => kinetics.curve(Quantity::Concentration),
        Against::GrowthRate => kinetics.curve(Quantity::GrowthRate),
        Against::Biomass => kinetics.curve(Quantity::Biomass),
        Against::Log10Biomass => kinetics.curve(Quantity::Log10Biomass),
    })
}

fn print_residuals(label: &str, residuals: &Residuals) {
    println!(
        "{:<22} n={:<3} skipped={:<3} mean={:>9.4} rmse={:>9.4}",
        label,
        residuals.len(),
        residuals.skipped(),
        residuals.mean_residual(),
        residuals.rmse()
    );
}

fn print_dashboard(dashboard: &Dashboard) {
    let params = &dashboard.parameters;
    println!("=== Competitive inhibition kinetic model ===\n");
    for parameter in Parameter::ALL {
        println!(
            "  {:<14} {:>12} {}",
            parameter.label(),
            params.get(parameter),
            parameter.unit()
        );
    }
    println!("  {:<14} {:>12}\n", "Compound", params.compound.to_string());

    println!("{}\n", dashboard.comparison);

    if let (Some(first), Some(last)) = (
        dashboard.kinetics.points().first(),
        dashboard.kinetics.points().last(),
    ) {
        println!("Kinetics ({} points):", dashboard.kinetics.len());
        for p in [first, last] {
            println!(
                "  t={:>6.2} h  C={:.4} mmol/L  μ={:.4} h⁻¹  log10 N={:.3}",
                p.time,
                p.concentration,
                p.growth_rate,
                p.biomass.log10()
            );
        }
        println!();
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let params = cli.parameters().context("Invalid model parameters")?;
    for (parameter, value) in params.outside_slider_ranges() {
        if let Some((lo, hi)) = parameter.slider_range() {
            log::warn!(
                "{} = {} is outside the usual range [{}, {}]",
                parameter,
                value,
                lo,
                hi
            );
        }
    }

    let dashboard = Dashboard::build(params).context("Model evaluation failed")?;
    print_dashboard(&dashboard);

    let mut summary = RunSummary::new(params)?;
    println!("Model vs reference data:");
    for panel in &dashboard.inhibition {
        match panel.residuals() {
            Ok(residuals) => {
                print_residuals(panel.compound.id(), &residuals);
                summary = summary.with_residuals(panel.compound.id(), residuals);
            }
            Err(e) => log::warn!("{}: {}", panel.compound, e),
        }
    }

    if let Some(path) = &cli.experimental {
        let experimental = read_experimental_csv(path)?;
        let model = model_curve(&dashboard, cli.against)?;
        match compare_to_experimental(&model, &experimental) {
            Ok(residuals) => {
                print_residuals("experimental", &residuals);
                summary = summary.with_residuals("experimental", residuals);
            }
            Err(e @ InhibkinError::ImportMismatch { .. }) => {
                println!("experimental: no overlap with the model ({})", e);
            }
            Err(e) => return Err(e.into()),
        }
    }
    println!();

    if let Some(target) = &cli.export {
        let path = target
            .clone()
            .unwrap_or_else(|| PathBuf::from(default_export_filename(params.compound)));
        let options = if cli.detailed_export {
            CsvOptions::default().with_log_biomass().with_metadata(params)
        } else {
            CsvOptions::default()
        };
        write_time_series_csv(&dashboard.kinetics, &path, Some(&options))?;
        println!("Data exported to {}", path.display());
    }

    if let Some(path) = &cli.summary {
        write_summary_json(&summary, path)?;
        println!("Summary written to {}", path.display());
    }

    if let Some(dir) = &cli.plots {
        render_plots(&dashboard, dir)?;
    }

    Ok(())
}

#[cfg(feature = "plots")]
fn render_plots(dashboard: &Dashboard, dir: &std::path::Path) -> Result<()> {
    let paths = inhibkin::render::svg::render_dashboard(dashboard, dir, None)?;
    for path in paths {
        println!("Plot written to {}", path.display());
    }
    Ok(())
}

#[cfg(not(feature = "plots"))]
fn render_plots(_dashboard: &Dashboard, dir: &std::path::Path) -> Result<()> {
    log::warn!(
        "Skipping plots for {}: built without the `plots` feature",
        dir.display()
    );
    Ok(())
}
