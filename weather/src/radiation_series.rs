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

use crate::{
    Float, InputError, TransposedSeries, DAY_COLUMN, DIRECT_COLUMN, HOUR_COLUMN, INDIRECT_COLUMN,
};
use solar::{RadiationSample, SurfaceConfig};
use std::fmt::Display;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Positions of the required columns within a row
struct ColumnIndexes {
    day: usize,
    hour: usize,
    direct: usize,
    indirect: usize,
}

impl ColumnIndexes {
    fn locate(header: &[String]) -> Result<Self, InputError> {
        let find = |name: &str| -> Result<usize, InputError> {
            header
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| InputError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            day: find(DAY_COLUMN)?,
            hour: find(HOUR_COLUMN)?,
            direct: find(DIRECT_COLUMN)?,
            indirect: find(INDIRECT_COLUMN)?,
        })
    }
}

/// An hourly series of measured horizontal radiation.
///
/// Besides the samples, the series remembers the header and the raw
/// fields of each row, so that extra columns make it into the output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadiationSeries {
    /// The names of the columns, as found in the source
    header: Vec<String>,

    /// The raw fields of each row
    rows: Vec<Vec<String>>,

    /// The samples, one per row
    samples: Vec<RadiationSample>,
}

impl RadiationSeries {
    /// Reads a series from a CSV file
    pub fn from_file<P: AsRef<Path> + Display>(filename: P) -> Result<Self, InputError> {
        let file = File::open(&filename).map_err(|e| InputError::Io {
            path: filename.to_string(),
            message: e.to_string(),
        })?;
        Self::from_reader(file)
    }

    /// Reads a series from anything containing CSV data
    pub fn from_reader<R: Read>(source: R) -> Result<Self, InputError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);

        let header: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
        let columns = ColumnIndexes::locate(&header)?;

        let mut rows = Vec::new();
        let mut samples = Vec::new();
        for record in reader.records() {
            let record = record?;
            // The header is line 1
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(rows.len() as u64 + 2);

            let cell = |index: usize, name: &str| -> InputError {
                InputError::InvalidValue {
                    line,
                    column: name.to_string(),
                    value: record.get(index).unwrap_or_default().to_string(),
                }
            };

            let day_of_year = record
                .get(columns.day)
                .and_then(parse_integer)
                .ok_or_else(|| cell(columns.day, DAY_COLUMN))?;
            let hour_of_day = record
                .get(columns.hour)
                .and_then(parse_integer)
                .ok_or_else(|| cell(columns.hour, HOUR_COLUMN))?;
            let direct_radiation = record
                .get(columns.direct)
                .and_then(parse_float)
                .ok_or_else(|| cell(columns.direct, DIRECT_COLUMN))?;
            let indirect_radiation = record
                .get(columns.indirect)
                .and_then(parse_float)
                .ok_or_else(|| cell(columns.indirect, INDIRECT_COLUMN))?;

            samples.push(RadiationSample {
                day_of_year,
                hour_of_day,
                direct_radiation,
                indirect_radiation,
            });
            rows.push(record.iter().map(|f| f.to_string()).collect());
        }

        Ok(Self {
            header,
            rows,
            samples,
        })
    }

    /// Builds a series out of samples, with only the four
    /// required columns.
    pub fn from_samples(samples: Vec<RadiationSample>) -> Self {
        let header = [DAY_COLUMN, HOUR_COLUMN, DIRECT_COLUMN, INDIRECT_COLUMN]
            .iter()
            .map(|h| h.to_string())
            .collect();
        let rows = samples
            .iter()
            .map(|s| {
                vec![
                    s.day_of_year.to_string(),
                    s.hour_of_day.to_string(),
                    s.direct_radiation.to_string(),
                    s.indirect_radiation.to_string(),
                ]
            })
            .collect();

        Self {
            header,
            rows,
            samples,
        }
    }

    /// The names of the columns
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// The raw fields of each row
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Checks whether there are no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterates the samples, in order. Can be called as many
    /// times as needed.
    pub fn samples(&self) -> impl Iterator<Item = RadiationSample> + '_ {
        self.samples.iter().copied()
    }

    /// Lazily calculates the radiation on a tilted surface,
    /// one value per sample.
    pub fn modeled_radiation<'a>(
        &'a self,
        config: &'a SurfaceConfig,
    ) -> impl Iterator<Item = Float> + 'a {
        self.samples().map(move |s| solar::compute(config, &s))
    }

    /// Calculates the radiation on a tilted surface for the whole
    /// series, producing the augmented series.
    ///
    /// With the `parallel` feature the samples are processed by a
    /// thread pool; the order is preserved either way.
    pub fn transpose(&self, config: &SurfaceConfig) -> TransposedSeries {
        #[cfg(not(feature = "parallel"))]
        let aux_iter = self.samples.iter();
        #[cfg(feature = "parallel")]
        let aux_iter = self.samples.par_iter();

        let modeled: Vec<Float> = aux_iter.map(|s| solar::compute(config, s)).collect();

        TransposedSeries::new(
            self.header.clone(),
            self.rows.clone(),
            self.samples.clone(),
            modeled,
        )
    }
}

/// Parses integers, accepting floats with no decimal part (e.g., `"12.0"`),
/// which is how many tools write integer columns.
fn parse_integer(s: &str) -> Option<i32> {
    if let Ok(v) = s.parse::<i32>() {
        return Some(v);
    }
    let v = s.parse::<f64>().ok()?;
    if v.is_finite() && v.fract() == 0.0 && v.abs() <= i32::MAX as f64 {
        Some(v as i32)
    } else {
        None
    }
}

fn parse_float(s: &str) -> Option<Float> {
    s.parse::<Float>().ok()
}
