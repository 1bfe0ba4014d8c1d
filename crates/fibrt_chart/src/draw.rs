use fibrt_bench::{BenchmarkResult, Series, TimingPoint};
use fibrt_consts::consts;
use fibrt_sequence::Strategy;
use plotters::{coord::Shift, prelude::*};

use crate::{ChartError, ChartFrame, fonts};

pub const PLOT_BACKGROUND: RGBColor = RGBColor(64, 64, 64);
pub const ITERATIVE_COLOR: RGBColor = GREEN;
pub const RECURSIVE_COLOR: RGBColor = RED;
const BORDER_COLOR: RGBColor = BLUE;
const GRID_COLOR: RGBColor = BLACK;

const ITERATIVE_STROKE: u32 = 4;
const RECURSIVE_STROKE: u32 = 3;
const BORDER_STROKE: u32 = 2;
const MARKER_RADIUS: u32 = 4;

/// The line style of a series.
pub fn series_style(strategy: Strategy) -> ShapeStyle {
    match strategy {
        Strategy::Iterative => ITERATIVE_COLOR.stroke_width(ITERATIVE_STROKE),
        Strategy::Recursive => RECURSIVE_COLOR.stroke_width(RECURSIVE_STROKE),
    }
}

/// Draws the comparison chart of `result` into a new frame.
pub fn render_chart(result: &BenchmarkResult) -> Result<ChartFrame, ChartError> {
    let with_text = fonts::register_system_font();

    let mut frame = ChartFrame::blank(consts::CHART_WIDTH, consts::CHART_HEIGHT);
    let size = (frame.width(), frame.height());
    {
        let root = BitMapBackend::with_buffer(frame.pixels_mut(), size).into_drawing_area();
        draw_chart(&root, result, with_text).map_err(|err| ChartError::Render(err.to_string()))?;
        root.present()
            .map_err(|err| ChartError::Render(err.to_string()))?;
    }
    Ok(frame)
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    result: &BenchmarkResult,
    with_text: bool,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    // A single term would otherwise produce an empty axis range.
    let x_max = result.max_term().max(1);
    let y_max = result
        .max_elapsed_ns()
        .saturating_add(result.max_elapsed_ns() / 10)
        .max(1);

    let mut builder = ChartBuilder::on(root);
    builder.margin(15);
    if with_text {
        builder
            .caption(consts::CHART_TITLE, (fonts::FONT_FAMILY, 22))
            .x_label_area_size(40)
            .y_label_area_size(80);
    }
    let mut chart = builder.build_cartesian_2d(0u32..x_max, 0u64..y_max)?;

    chart.plotting_area().fill(&PLOT_BACKGROUND)?;

    // Without label areas the mesh only draws its grid lines, no text.
    chart
        .configure_mesh()
        .bold_line_style(GRID_COLOR)
        .light_line_style(TRANSPARENT)
        .axis_style(GRID_COLOR)
        .x_desc(consts::X_AXIS_LABEL)
        .y_desc(consts::Y_AXIS_LABEL)
        .label_style((fonts::FONT_FAMILY, 14))
        .draw()?;

    chart.draw_series(std::iter::once(Rectangle::new(
        [(0, 0), (x_max, y_max)],
        BORDER_COLOR.stroke_width(BORDER_STROKE),
    )))?;

    for series in result.series() {
        let style = series_style(series.strategy());
        chart
            .draw_series(LineSeries::new(coordinates(series), style))?
            .label(series.name())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        chart.draw_series(
            coordinates(series).map(|point| Circle::new(point, MARKER_RADIUS, style.filled())),
        )?;
    }

    if with_text {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font((fonts::FONT_FAMILY, 14))
            .background_style(WHITE.mix(0.85))
            .border_style(GRID_COLOR)
            .draw()?;
    }

    Ok(())
}

fn coordinates(series: &Series) -> impl Iterator<Item = (u32, u64)> + '_ {
    series
        .points()
        .iter()
        .map(|point: &TimingPoint| (point.term(), point.elapsed_ns()))
}
