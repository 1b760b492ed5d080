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

use crate::{Float, MODELED_COLUMN};
use solar::RadiationSample;
use std::io::Write;

/// A [`RadiationSeries`](crate::RadiationSeries) augmented with the
/// radiation on a tilted surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransposedSeries {
    /// The original header, plus the modeled column
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    samples: Vec<RadiationSample>,
    modeled: Vec<Float>,
}

impl TransposedSeries {
    /// Puts together a transposed series. All vectors are expected
    /// to have the same length.
    pub(crate) fn new(
        mut header: Vec<String>,
        rows: Vec<Vec<String>>,
        samples: Vec<RadiationSample>,
        modeled: Vec<Float>,
    ) -> Self {
        debug_assert_eq!(rows.len(), modeled.len());
        debug_assert_eq!(samples.len(), modeled.len());
        header.push(MODELED_COLUMN.to_string());
        Self {
            header,
            rows,
            samples,
            modeled,
        }
    }

    /// The names of the columns, including the modeled one
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.modeled.len()
    }

    /// Checks whether there are no rows
    pub fn is_empty(&self) -> bool {
        self.modeled.is_empty()
    }

    /// The measured samples
    pub fn samples(&self) -> &[RadiationSample] {
        &self.samples
    }

    /// The radiation on the tilted surface, in W/m2
    pub fn modeled(&self) -> &[Float] {
        &self.modeled
    }

    /// The measured direct horizontal radiation, in W/m2
    pub fn direct(&self) -> Vec<Float> {
        self.samples.iter().map(|s| s.direct_radiation).collect()
    }

    /// The measured indirect horizontal radiation, in W/m2
    pub fn indirect(&self) -> Vec<Float> {
        self.samples.iter().map(|s| s.indirect_radiation).collect()
    }

    /// Writes the series as CSV: every original column followed
    /// by the modeled one.
    pub fn write_csv<W: Write>(&self, out: W) -> Result<(), String> {
        let mut writer = csv::Writer::from_writer(out);

        writer
            .write_record(&self.header)
            .map_err(|e| format!("Could not write header: {}", e))?;

        for (row, modeled) in self.rows.iter().zip(self.modeled.iter()) {
            let modeled = modeled.to_string();
            let record = row
                .iter()
                .map(|f| f.as_str())
                .chain(std::iter::once(modeled.as_str()));
            writer
                .write_record(record)
                .map_err(|e| format!("Could not write results: {}", e))?;
        }

        writer
            .flush()
            .map_err(|e| format!("Could not write results: {}", e))
    }
}
