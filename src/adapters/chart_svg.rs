//! SVG line chart for a valuation series.

use crate::domain::format::format_unit;
use crate::domain::valuation::SeriesPoint;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;
const PAD_LEFT: f64 = 84.0;
const PAD_RIGHT: f64 = 24.0;
const PAD_TOP: f64 = 32.0;
const PAD_BOTTOM: f64 = 40.0;
const Y_TICKS: usize = 4;

/// Render the year-by-year value series as a self-contained SVG line chart:
/// years along the x-axis, currency-formatted ticks on the y-axis, and the
/// area under the line filled. Points are spaced evenly by position so a
/// sparse series still reads as a continuous line.
pub fn render_series_chart(label: &str, series: &[SeriesPoint]) -> String {
    if series.is_empty() {
        return "No series data available.".to_string();
    }

    let plot_width = WIDTH - PAD_LEFT - PAD_RIGHT;
    let plot_height = HEIGHT - PAD_TOP - PAD_BOTTOM;

    let min_value = series.iter().map(|p| p.value as f64).fold(f64::INFINITY, f64::min);
    let max_value = series
        .iter()
        .map(|p| p.value as f64)
        .fold(f64::NEG_INFINITY, f64::max);
    let range = max_value - min_value;
    let scale_y = if range > 0.0 { plot_height / range } else { 1.0 };
    let scale_x = if series.len() > 1 {
        plot_width / (series.len() - 1) as f64
    } else {
        0.0
    };

    let coords: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = PAD_LEFT + i as f64 * scale_x;
            let y = if range > 0.0 {
                HEIGHT - PAD_BOTTOM - (point.value as f64 - min_value) * scale_y
            } else {
                PAD_TOP + plot_height / 2.0
            };
            (x, y)
        })
        .collect();

    let polyline_points: Vec<String> = coords
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect();
    let polyline_points = polyline_points.join(" ");

    // Close the area polygon along the baseline.
    let baseline = HEIGHT - PAD_BOTTOM;
    let first_x = coords.first().map(|(x, _)| *x).unwrap_or(PAD_LEFT);
    let last_x = coords.last().map(|(x, _)| *x).unwrap_or(PAD_LEFT);
    let area_points = format!(
        "{first_x:.1},{baseline:.1} {polyline_points} {last_x:.1},{baseline:.1}"
    );

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {WIDTH:.0} {HEIGHT:.0}\" \
         width=\"{WIDTH:.0}\" height=\"{HEIGHT:.0}\" role=\"img\">\n"
    ));
    svg.push_str(&format!(
        "  <title>{} value by year</title>\n",
        escape_text(label)
    ));

    // Axes
    svg.push_str(&format!(
        "  <line x1=\"{PAD_LEFT:.1}\" y1=\"{PAD_TOP:.1}\" x2=\"{PAD_LEFT:.1}\" y2=\"{baseline:.1}\" stroke=\"#444\"/>\n"
    ));
    svg.push_str(&format!(
        "  <line x1=\"{PAD_LEFT:.1}\" y1=\"{baseline:.1}\" x2=\"{:.1}\" y2=\"{baseline:.1}\" stroke=\"#444\"/>\n",
        WIDTH - PAD_RIGHT
    ));

    // Y ticks with currency labels
    for tick in 0..=Y_TICKS {
        let frac = tick as f64 / Y_TICKS as f64;
        let value = min_value + range * frac;
        let y = baseline - plot_height * frac;
        svg.push_str(&format!(
            "  <line x1=\"{:.1}\" y1=\"{y:.1}\" x2=\"{PAD_LEFT:.1}\" y2=\"{y:.1}\" stroke=\"#444\"/>\n",
            PAD_LEFT - 4.0
        ));
        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"11\">{}</text>\n",
            PAD_LEFT - 8.0,
            y + 4.0,
            format_unit(value)
        ));
    }

    // X tick labels: one per point
    for (i, point) in series.iter().enumerate() {
        let x = PAD_LEFT + i as f64 * scale_x;
        svg.push_str(&format!(
            "  <text x=\"{x:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"11\">{}</text>\n",
            baseline + 18.0,
            point.year
        ));
    }

    svg.push_str(&format!(
        "  <polygon points=\"{area_points}\" fill=\"rgba(75,192,192,0.2)\"/>\n"
    ));
    svg.push_str(&format!(
        "  <polyline points=\"{polyline_points}\" fill=\"none\" stroke=\"rgba(75,192,192,1)\" stroke-width=\"2\"/>\n"
    ));

    svg.push_str("</svg>\n");
    svg
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
