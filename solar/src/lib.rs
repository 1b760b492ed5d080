/*
MIT License
Copyright (c) 2021 Germán Molina
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

//! Irradiance on tilted surfaces, following the Liu-Jordan isotropic-sky
//! model as presented in Duffie and Beckman's book.
//!
//! Unlike most of the workspace, every angle that goes in or out of this
//! crate is in **Degrees**. They are converted into Radians internally
//! through [`DEGREES_TO_RADIANS`].
//!
//! The surface azimuth is the angular displacement from south of the
//! projection of the surface normal on the horizontal plane. Displacements
//! east of south are negative and west of south are positive.
//!
//! The hour angle follows the convention of the hourly measurements this
//! model was calibrated against: `15 * (12 - hour)`, which is positive
//! in the morning and negative in the afternoon.
//!
//! ```
//! use solar::{RadiationSample, SurfaceConfig};
//!
//! let config = SurfaceConfig {
//!     tilt_degrees: 0.0,
//!     azimuth_degrees: 0.0,
//!     latitude_degrees: 52.1,
//!     reflectivity: 0.1,
//! };
//! let sample = RadiationSample {
//!     day_of_year: 172,
//!     hour_of_day: 12,
//!     direct_radiation: 500.0,
//!     indirect_radiation: 100.0,
//! };
//!
//! // A horizontal surface sees exactly what was measured.
//! let total = solar::compute(&config, &sample);
//! assert!((total - 600.0).abs() < 1e-3);
//! ```

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

/// Factor used for transforming Degrees into Radians.
///
/// By default this is `3.14159 / 180`, the truncated value existing
/// hourly results were produced with, so outputs stay bit-compatible
/// with them. The `"exact_pi"` feature replaces it by `PI / 180`; angles
/// then drift by a relative 8.4e-7, which moves realistic totals by
/// about 1e-4 W/m2.
#[cfg(not(feature = "exact_pi"))]
pub const DEGREES_TO_RADIANS: Float = 3.14159 / 180.;

/// Factor used for transforming Degrees into Radians.
///
/// The `"exact_pi"` feature is enabled, so this uses the full precision
/// value of PI.
#[cfg(all(feature = "exact_pi", feature = "float"))]
pub const DEGREES_TO_RADIANS: Float = std::f32::consts::PI / 180.;

/// Factor used for transforming Degrees into Radians.
///
/// The `"exact_pi"` feature is enabled, so this uses the full precision
/// value of PI.
#[cfg(all(feature = "exact_pi", not(feature = "float")))]
pub const DEGREES_TO_RADIANS: Float = std::f64::consts::PI / 180.;

/// The geometry of the surface receiving the radiation
mod surface;
pub use surface::SurfaceConfig;

/// Hourly measurements of horizontal radiation
mod sample;
pub use sample::RadiationSample;

/// The transposition itself
mod transposition;
pub use transposition::{
    clamp_beam_factor, compute, declination, hour_angle, TranspositionFactors, MAX_BEAM_FACTOR,
};
