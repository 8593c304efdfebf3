//! SVG rendering of a [`Dashboard`] with `plotters`
//!
//! Three files are produced in the output directory:
//!
//! | File | Content |
//! |------|---------|
//! | `inhibition.svg` | μ vs concentration per compound, model line + measurements |
//! | `kinetics.svg` | concentration, μ and log10 biomass vs time |
//! | `comparison.svg` | both compounds overlaid with the 50 % inhibition line |

use plotters::coord::Shift;
use plotters::prelude::*;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use super::{ComparisonPanel, Dashboard, InhibitionPanel};
use crate::error::InhibkinError;
use crate::model::{Curve, Quantity};
use crate::params::Compound;

/// Image size of each rendered file
#[derive(Debug, Clone, Copy)]
pub struct SvgConfig {
    /// Width in pixels (default: 1000)
    pub width: u32,
    /// Height in pixels (default: 600)
    pub height: u32,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
        }
    }
}

fn title_font() -> FontDesc<'static> {
    ("sans-serif", 18).into_font()
}

fn compound_color(compound: Compound) -> RGBColor {
    match compound {
        Compound::Compound1 => RED,
        Compound::Compound2 => GREEN,
    }
}

fn draw_error<E: Display>(path: &Path) -> impl Fn(E) -> InhibkinError + '_ {
    move |e| InhibkinError::ExportFailure {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

/// Axis span with some headroom; degenerate spans are widened
fn axis(lo: f64, hi: f64) -> std::ops::Range<f64> {
    if hi > lo {
        lo..hi + (hi - lo) * 0.05
    } else {
        lo - 0.5..hi + 0.5
    }
}

fn y_span<'a>(curves: impl IntoIterator<Item = &'a Curve>) -> (f64, f64) {
    curves
        .into_iter()
        .filter_map(|c| c.y_range())
        .fold((0.0, f64::MIN), |(lo, hi), (a, b)| (lo.min(a), hi.max(b)))
}

/// Render all dashboard views into `out_dir`, returning the written paths
pub fn render_dashboard(
    dashboard: &Dashboard,
    out_dir: impl AsRef<Path>,
    config: Option<&SvgConfig>,
) -> Result<Vec<PathBuf>, InhibkinError> {
    let config = config.copied().unwrap_or_default();
    let out_dir = out_dir.as_ref();
    std::fs::create_dir_all(out_dir).map_err(draw_error(out_dir))?;

    let inhibition = out_dir.join("inhibition.svg");
    render_inhibition(&dashboard.inhibition, &inhibition, &config)?;

    let kinetics = out_dir.join("kinetics.svg");
    render_kinetics(dashboard, &kinetics, &config)?;

    let comparison = out_dir.join("comparison.svg");
    render_comparison(&dashboard.overlay, &comparison, &config)?;

    log::info!("Plots written to {}", out_dir.display());
    Ok(vec![inhibition, kinetics, comparison])
}

fn render_inhibition(
    panels: &[InhibitionPanel],
    path: &Path,
    config: &SvgConfig,
) -> Result<(), InhibkinError> {
    let err = draw_error(path);
    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(&err)?;

    let areas = root.split_evenly((1, panels.len().max(1)));
    for (panel, area) in panels.iter().zip(areas.iter()) {
        let (x0, x1) = panel.model.x_range().unwrap_or((0.0, 1.0));
        let (y0, y1) = y_span([&panel.model, &panel.experimental]);
        let color = compound_color(panel.compound);

        let mut chart = ChartBuilder::on(area)
            .caption(panel.title(), title_font())
            .margin(10)
            .x_label_area_size(35)
            .y_label_area_size(45)
            .build_cartesian_2d(axis(x0, x1), axis(y0, y1))
            .map_err(&err)?;
        chart
            .configure_mesh()
            .x_desc(Quantity::Concentration.label())
            .y_desc(Quantity::GrowthRate.label())
            .draw()
            .map_err(&err)?;

        chart
            .draw_series(LineSeries::new(panel.model.points(), BLUE.stroke_width(2)))
            .map_err(&err)?
            .label("Model")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
        chart
            .draw_series(
                panel
                    .experimental
                    .points()
                    .map(|p| Circle::new(p, 5, color.filled())),
            )
            .map_err(&err)?
            .label("Experimental")
            .legend(move |(x, y)| Circle::new((x + 10, y), 4, color.filled()));

        for (i, line) in panel.annotation().lines().enumerate() {
            area.draw(&Text::new(
                line.to_string(),
                (70, 40 + 16 * i as i32),
                ("sans-serif", 13).into_font(),
            ))
            .map_err(&err)?;
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(&err)?;
    }

    root.present().map_err(&err)?;
    Ok(())
}

fn render_kinetics(
    dashboard: &Dashboard,
    path: &Path,
    config: &SvgConfig,
) -> Result<(), InhibkinError> {
    let err = draw_error(path);
    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(&err)?;

    let (top, bottom) = root.split_vertically(config.height / 2);
    let (top_left, top_right) = top.split_horizontally(config.width / 2);

    let views = [
        (
            &top_left,
            "Inhibitor pharmacokinetics",
            Quantity::Concentration,
            dashboard.concentration_curve(),
            RED,
        ),
        (
            &top_right,
            "Specific growth rate",
            Quantity::GrowthRate,
            dashboard.growth_rate_curve(),
            BLUE,
        ),
        (
            &bottom,
            "Biomass growth",
            Quantity::Log10Biomass,
            dashboard.biomass_curve(),
            GREEN,
        ),
    ];

    for (area, title, quantity, curve, color) in views.iter() {
        draw_time_course(area, title, *quantity, curve, *color).map_err(&err)?;
    }

    root.present().map_err(&err)?;
    Ok(())
}

fn draw_time_course(
    area: &DrawingArea<SVGBackend, Shift>,
    title: &str,
    quantity: Quantity,
    curve: &Curve,
    color: RGBColor,
) -> Result<(), DrawingAreaErrorKind<std::io::Error>> {
    let (x0, x1) = curve.x_range().unwrap_or((0.0, 1.0));
    let (y0, y1) = curve.y_range().unwrap_or((0.0, 1.0));

    let mut chart = ChartBuilder::on(area)
        .caption(title, title_font())
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d(axis(x0, x1), axis(y0, y1))?;
    chart
        .configure_mesh()
        .x_desc("Time (h)")
        .y_desc(quantity.label())
        .draw()?;
    chart.draw_series(LineSeries::new(curve.points(), color.stroke_width(2)))?;
    Ok(())
}

fn render_comparison(
    overlay: &ComparisonPanel,
    path: &Path,
    config: &SvgConfig,
) -> Result<(), InhibkinError> {
    let err = draw_error(path);
    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(&err)?;

    let all_curves = overlay
        .curves
        .iter()
        .chain(overlay.experimental.iter())
        .map(|(_, c)| c);
    let (y0, y1) = y_span(all_curves);
    let (x0, x1) = overlay
        .curves
        .iter()
        .filter_map(|(_, c)| c.x_range())
        .fold((f64::MAX, f64::MIN), |(lo, hi), (a, b)| (lo.min(a), hi.max(b)));

    let mut chart = ChartBuilder::on(&root)
        .caption("Compound activity comparison", title_font())
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(axis(x0, x1), axis(y0, y1))
        .map_err(&err)?;
    chart
        .configure_mesh()
        .x_desc(Quantity::Concentration.label())
        .y_desc(Quantity::GrowthRate.label())
        .draw()
        .map_err(&err)?;

    for (compound, curve) in &overlay.curves {
        let color = compound_color(*compound);
        chart
            .draw_series(LineSeries::new(curve.points(), color.stroke_width(3)))
            .map_err(&err)?
            .label(compound.to_string())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }
    for (compound, curve) in &overlay.experimental {
        let color = compound_color(*compound).mix(0.6);
        chart
            .draw_series(curve.points().map(|p| Circle::new(p, 4, color.filled())))
            .map_err(&err)?;
    }
    chart
        .draw_series(LineSeries::new(
            [(x0, overlay.half_max), (x1, overlay.half_max)],
            BLACK.mix(0.5),
        ))
        .map_err(&err)?
        .label("50% inhibition")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.mix(0.5)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(&err)?;

    root.present().map_err(&err)?;
    Ok(())
}
