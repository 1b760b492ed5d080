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

use crate::Float;
use serde::{Deserialize, Serialize};

/// The orientation and location of a surface, plus the reflectivity
/// of the ground in front of it.
///
/// This is fixed for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurfaceConfig {
    /// Inclination from the horizontal, in Degrees.
    ///
    /// `0` is horizontal and `90` is vertical.
    pub tilt_degrees: Float,

    /// Facing direction, in Degrees from due south.
    ///
    /// East of south is negative, west of south is positive.
    pub azimuth_degrees: Float,

    /// Latitude in Degrees. South is negative, North is positive.
    pub latitude_degrees: Float,

    /// Reflectivity (i.e., albedo) of the ground. Not clamped.
    pub reflectivity: Float,
}

impl SurfaceConfig {
    /// Lists the values that are outside of their meaningful range.
    ///
    /// The model itself accepts anything (it is just arithmetic), so these
    /// are meant to be reported as warnings by whoever builds the surface.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !(0.0..=90.0).contains(&self.tilt_degrees) {
            issues.push(format!(
                "tilt of {} degrees is outside of the [0, 90] range",
                self.tilt_degrees
            ));
        }
        if !(-90.0..=90.0).contains(&self.latitude_degrees) {
            issues.push(format!(
                "latitude of {} degrees is outside of the [-90, 90] range",
                self.latitude_degrees
            ));
        }
        if !(0.0..=1.0).contains(&self.reflectivity) {
            issues.push(format!(
                "reflectivity of {} is outside of the [0, 1] range",
                self.reflectivity
            ));
        }

        issues
    }
}
