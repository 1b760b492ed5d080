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

#![deny(missing_docs)]

//! This library reads hourly series of measured horizontal radiation
//! from CSV files, and writes them back once the radiation on a tilted
//! surface has been added to them.
//!
//! The files are expected to have a header row with (at least) the
//! following columns, in any order:
//!
//! * `Day`: the day of the year
//! * `Hour`: the solar hour, from 0 to 23
//! * `ISH`: direct (i.e., beam) horizontal radiation, in W/m2
//! * `IDH`: indirect (i.e., diffuse) horizontal radiation, in W/m2
//!
//! Any other column is carried along untouched.

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
pub type Float = f32;

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(not(feature = "float"))]
pub type Float = f64;

/// Name of the column containing the day of the year
pub const DAY_COLUMN: &str = "Day";

/// Name of the column containing the hour of the day
pub const HOUR_COLUMN: &str = "Hour";

/// Name of the column containing the direct horizontal radiation
pub const DIRECT_COLUMN: &str = "ISH";

/// Name of the column containing the indirect horizontal radiation
pub const INDIRECT_COLUMN: &str = "IDH";

/// Name of the column added with the radiation on the tilted surface
pub const MODELED_COLUMN: &str = "LJ_model";

/// Errors found while acquiring the input series
pub mod error;
pub use error::InputError;

/// The measured series
pub mod radiation_series;
pub use radiation_series::RadiationSeries;

/// The measured series, plus the modeled radiation
pub mod transposed_series;
pub use transposed_series::TransposedSeries;

pub use solar::{RadiationSample, SurfaceConfig};
