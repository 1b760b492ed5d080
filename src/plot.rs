/*
MIT License
Copyright (c)  Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use crate::Float;
use std::fmt::{Display, Write};
use std::path::Path;
use weather::{TransposedSeries, DIRECT_COLUMN, INDIRECT_COLUMN, MODELED_COLUMN};

const WIDTH: Float = 1200.;
const HEIGHT: Float = 500.;
const MARGIN: Float = 60.;
const N_TICKS: usize = 5;

/// Maps values into the drawing area
struct Frame {
    n: usize,
    min: Float,
    max: Float,
}

impl Frame {
    fn new(n: usize, lines: &[(&str, &str, Vec<Float>)]) -> Self {
        let (mut min, mut max): (Float, Float) = (0., 0.);
        for v in lines.iter().flat_map(|(_, _, values)| values.iter()) {
            if v.is_finite() {
                min = min.min(*v);
                max = max.max(*v);
            }
        }
        if max - min <= Float::EPSILON {
            max = min + 1.;
        }
        Self { n, min, max }
    }

    fn x(&self, i: usize) -> Float {
        if self.n < 2 {
            return WIDTH / 2.;
        }
        MARGIN + (WIDTH - 2. * MARGIN) * i as Float / (self.n - 1) as Float
    }

    fn y(&self, v: Float) -> Float {
        HEIGHT - MARGIN - (HEIGHT - 2. * MARGIN) * (v - self.min) / (self.max - self.min)
    }
}

/// Draws the measured and modeled radiation as a time-series
/// chart, in SVG format.
///
/// Every column gets its own line. Non-finite values
/// (e.g., `NaN`) interrupt the line.
pub fn svg_chart(series: &TransposedSeries) -> String {
    let lines = [
        (INDIRECT_COLUMN, "#1f77b4", series.indirect()),
        (DIRECT_COLUMN, "#ff7f0e", series.direct()),
        (MODELED_COLUMN, "#2ca02c", series.modeled().to_vec()),
    ];
    let frame = Frame::new(series.len(), &lines);

    let mut svg = String::new();
    // Writing into a String does not fail
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = WIDTH,
        h = HEIGHT
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);

    // Axes
    let zero = frame.y(0.);
    let _ = writeln!(
        svg,
        r#"<line x1="{x0}" y1="{zero:.2}" x2="{x1}" y2="{zero:.2}" stroke="black"/>"#,
        x0 = MARGIN,
        x1 = WIDTH - MARGIN,
    );
    let _ = writeln!(
        svg,
        r#"<line x1="{x}" y1="{y0}" x2="{x}" y2="{y1}" stroke="black"/>"#,
        x = MARGIN,
        y0 = MARGIN,
        y1 = HEIGHT - MARGIN
    );
    for i in 0..=N_TICKS {
        let v = frame.min + (frame.max - frame.min) * i as Float / N_TICKS as Float;
        let _ = writeln!(
            svg,
            r#"<text x="{x:.2}" y="{y:.2}" font-size="12" text-anchor="end">{v:.0}</text>"#,
            x = MARGIN - 6.,
            y = frame.y(v) + 4.,
        );
    }
    let _ = writeln!(
        svg,
        r#"<text x="{x}" y="{y}" font-size="14" text-anchor="middle">Hour</text>"#,
        x = WIDTH / 2.,
        y = HEIGHT - MARGIN / 3.
    );
    let _ = writeln!(
        svg,
        r#"<text x="{x}" y="{y}" font-size="14">W/m2</text>"#,
        x = MARGIN / 4.,
        y = MARGIN / 2.
    );

    // Data
    for (label, colour, values) in lines.iter() {
        let mut segment: Vec<String> = Vec::new();
        for (i, v) in values.iter().enumerate() {
            if v.is_finite() {
                segment.push(format!("{:.2},{:.2}", frame.x(i), frame.y(*v)));
            } else {
                push_polyline(&mut svg, label, colour, &segment);
                segment.clear();
            }
        }
        push_polyline(&mut svg, label, colour, &segment);
    }

    // Legend
    for (i, (label, colour, _)) in lines.iter().enumerate() {
        let y = MARGIN / 2. + 18. * i as Float;
        let x = WIDTH - MARGIN - 110.;
        let _ = writeln!(
            svg,
            r#"<line x1="{x}" y1="{y}" x2="{x2}" y2="{y}" stroke="{colour}" stroke-width="2"/>"#,
            x2 = x + 24.
        );
        let _ = writeln!(
            svg,
            r#"<text x="{tx}" y="{ty}" font-size="12">{label}</text>"#,
            tx = x + 30.,
            ty = y + 4.
        );
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_polyline(svg: &mut String, label: &str, colour: &str, points: &[String]) {
    if points.is_empty() {
        return;
    }
    let _ = writeln!(
        svg,
        r#"<polyline class="{label}" fill="none" stroke="{colour}" stroke-width="1" points="{}"/>"#,
        points.join(" ")
    );
}

/// Writes the chart produced by [`svg_chart`] into a file
pub fn write_svg_chart<P: AsRef<Path> + Display>(
    series: &TransposedSeries,
    filename: P,
) -> Result<(), String> {
    std::fs::write(&filename, svg_chart(series))
        .map_err(|e| format!("Could not write chart to '{}': {}", filename, e))
}
