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
use crate::error_msgs::print_warning;
use crate::plot::write_svg_chart;
use crate::Float;
use clap::Parser;
use solar::SurfaceConfig;
use std::fs;
use weather::{RadiationSeries, TransposedSeries};

/// The options we can pass to the transposition
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct TranspositionOptions {
    /// The CSV file with the measured radiation.
    ///
    /// It needs 'Day', 'Hour', 'ISH' and 'IDH' columns
    #[clap(short = 'i')]
    pub input_file: String,

    /// Specifies the path to which to write the results.
    /// If none is given, STDOUT is used
    #[clap(short = 'o')]
    pub output: Option<String>,

    /// A JSON file describing the surface. If given, the
    /// tilt, azimuth, latitude and reflectivity options are ignored
    #[clap(short = 'c')]
    pub surface_file: Option<String>,

    /// Path of an SVG chart of the measured and modeled radiation
    #[clap(short = 'p')]
    pub plot: Option<String>,

    /// Tilt of the surface in degrees (0 is horizontal, 90 is vertical)
    #[clap(long, default_value_t = 90.)]
    pub tilt: Float,

    /// Azimuth of the surface in degrees from south (east is negative)
    #[clap(long, default_value_t = -45., allow_hyphen_values = true)]
    pub azimuth: Float,

    /// Latitude in degrees (south is negative)
    #[clap(long, default_value_t = 52.1, allow_hyphen_values = true)]
    pub latitude: Float,

    /// Reflectivity of the ground
    #[clap(long, default_value_t = 0.1)]
    pub reflectivity: Float,
}

impl Default for TranspositionOptions {
    fn default() -> Self {
        Self {
            input_file: String::new(),
            output: None,
            surface_file: None,
            plot: None,
            tilt: 90.,
            azimuth: -45.,
            latitude: 52.1,
            reflectivity: 0.1,
        }
    }
}

/// Builds the [`SurfaceConfig`] for a run, either from the
/// JSON file or from the command line values.
pub fn load_surface_config(options: &TranspositionOptions) -> Result<SurfaceConfig, String> {
    match &options.surface_file {
        Some(file) => {
            let s = match fs::read_to_string(file) {
                Ok(v) => v,
                Err(e) => return Err(format!("Could not read surface file '{}': {}", file, e)),
            };
            serde_json::from_str(&s)
                .map_err(|e| format!("Could not parse surface file '{}': {}", file, e))
        }
        None => Ok(SurfaceConfig {
            tilt_degrees: options.tilt,
            azimuth_degrees: options.azimuth,
            latitude_degrees: options.latitude,
            reflectivity: options.reflectivity,
        }),
    }
}

/// This function drives the whole process: loads the surface and the
/// measured radiation, calculates the radiation on the surface and
/// writes the results (and the chart, if requested).
pub fn run<T>(options: &TranspositionOptions, out: T) -> Result<TransposedSeries, String>
where
    T: std::io::Write,
{
    let config = load_surface_config(options)?;
    for issue in config.validate() {
        print_warning("Surface", issue);
    }

    let series = RadiationSeries::from_file(&options.input_file)?;
    if series.is_empty() {
        print_warning(
            "Radiation",
            format!("No data found in '{}'", options.input_file),
        );
    }

    let transposed = series.transpose(&config);
    transposed.write_csv(out)?;

    if let Some(plot) = &options.plot {
        write_svg_chart(&transposed, plot)?;
    }

    Ok(transposed)
}
