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

use crate::{Float, RadiationSample, SurfaceConfig, DEGREES_TO_RADIANS};

/// The largest amplification of the beam radiation that is accepted.
///
/// Close to sunrise and sunset the horizontal projection of the sun
/// vanishes, making the ratio explode.
pub const MAX_BEAM_FACTOR: Float = 3.0;

/// Hour angle in Degrees, as `15 * (12 - hour)`.
///
/// Positive in the morning, zero at solar noon.
pub fn hour_angle(hour_of_day: i32) -> Float {
    15. * (12. - hour_of_day as Float)
}

/// Solar declination in Degrees, according to Cooper's
/// equation (Equation 1.6.1a in Duffie and Beckman)
pub fn declination(day_of_year: i32) -> Float {
    let n = 284. + day_of_year as Float;
    23.45 * (360. * n / 365. * DEGREES_TO_RADIANS).sin()
}

/// Bounds the beam factor to `[0, MAX_BEAM_FACTOR]`.
///
/// `NaN` (i.e., `0/0` when the sun is exactly on the horizon) goes through
/// untouched. Infinities are clamped like any other number.
pub fn clamp_beam_factor(raw: Float) -> Float {
    raw.clamp(0.0, MAX_BEAM_FACTOR)
}

/// The three factors that turn horizontal radiation into radiation
/// on a tilted surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranspositionFactors {
    /// View factor between the surface and the ground (R0)
    pub ground_reflected: Float,

    /// View factor between the surface and the sky (Rd)
    pub sky_diffuse: Float,

    /// Ratio between beam radiation on the surface and on the
    /// horizontal plane (Rb). Clamped by [`clamp_beam_factor`].
    pub beam: Float,
}

impl TranspositionFactors {
    /// Calculates the factors for a certain surface and moment of the year
    pub fn new(config: &SurfaceConfig, sample: &RadiationSample) -> Self {
        let omega = hour_angle(sample.hour_of_day) * DEGREES_TO_RADIANS;
        let (sin_omega, cos_omega) = omega.sin_cos();

        let delta = declination(sample.day_of_year) * DEGREES_TO_RADIANS;
        let (sin_delta, cos_delta) = delta.sin_cos();

        let (sin_tilt, cos_tilt) = (config.tilt_degrees * DEGREES_TO_RADIANS).sin_cos();
        let (sin_azimuth, cos_azimuth) = (config.azimuth_degrees * DEGREES_TO_RADIANS).sin_cos();
        let (sin_lat, cos_lat) = (config.latitude_degrees * DEGREES_TO_RADIANS).sin_cos();

        let ground_reflected = (1. - cos_tilt) / 2.;
        let sky_diffuse = (1. + cos_tilt) / 2.;

        let a = sin_delta * (sin_lat * cos_tilt - cos_lat * sin_tilt * cos_azimuth);
        let b = cos_delta
            * (cos_lat * cos_tilt * cos_omega
                + sin_lat * sin_tilt * cos_azimuth * cos_omega
                + sin_tilt * sin_azimuth * sin_omega);
        let denominator = sin_delta * sin_lat + cos_delta * cos_lat * cos_omega;

        // Not guarded: a vanishing denominator is dealt with by the clamp
        let beam = clamp_beam_factor((a + b) / denominator);

        Self {
            ground_reflected,
            sky_diffuse,
            beam,
        }
    }

    /// Combines the factors with the measured radiation.
    ///
    /// Note that the beam factor multiplies the indirect radiation and the
    /// sky factor multiplies the direct one. Textbooks pair them the other
    /// way around, but existing hourly results were computed this way.
    pub fn combine(&self, sample: &RadiationSample, reflectivity: Float) -> Float {
        self.beam * sample.indirect_radiation
            + self.sky_diffuse * sample.direct_radiation
            + (sample.indirect_radiation + sample.direct_radiation)
                * reflectivity
                * self.ground_reflected
    }
}

/// Estimates the radiation (W/m2) reaching a tilted surface during
/// the hour described by `sample`.
///
/// This never fails and is never clamped, so adversarial inputs
/// can produce negative values.
pub fn compute(config: &SurfaceConfig, sample: &RadiationSample) -> Float {
    TranspositionFactors::new(config, sample).combine(sample, config.reflectivity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validate::assert_close;

    fn surface(tilt: Float, azimuth: Float, latitude: Float, reflectivity: Float) -> SurfaceConfig {
        SurfaceConfig {
            tilt_degrees: tilt,
            azimuth_degrees: azimuth,
            latitude_degrees: latitude,
            reflectivity,
        }
    }

    fn sample(day: i32, hour: i32, direct: Float, indirect: Float) -> RadiationSample {
        RadiationSample {
            day_of_year: day,
            hour_of_day: hour,
            direct_radiation: direct,
            indirect_radiation: indirect,
        }
    }

    #[test]
    fn test_hour_angle() {
        assert_eq!(hour_angle(12), 0.);
        assert_eq!(hour_angle(0), 180.);
        assert_eq!(hour_angle(9), 45.);
        assert_eq!(hour_angle(13), -15.);
        // Not validated
        assert_eq!(hour_angle(24), -180.);
        assert_eq!(hour_angle(-1), 195.);
    }

    #[test]
    fn test_declination() {
        // Around the solstices
        assert_close!(declination(172), 23.45, 1e-2);
        assert_close!(declination(355), -23.45, 1e-2);

        // Around the equinoxes
        assert_close!(declination(81), 0.0, 1e-3);
        assert!(declination(264).abs() < 1.0);

        // Periodic in the day of the year
        assert_close!(declination(172 + 365), declination(172), 1e-4);
    }

    #[test]
    fn test_clamp_beam_factor() {
        assert_eq!(clamp_beam_factor(1.2), 1.2);
        assert_eq!(clamp_beam_factor(-0.5), 0.0);
        assert_eq!(clamp_beam_factor(12.), MAX_BEAM_FACTOR);
        assert_eq!(clamp_beam_factor(Float::INFINITY), MAX_BEAM_FACTOR);
        assert_eq!(clamp_beam_factor(Float::NEG_INFINITY), 0.0);
        assert!(clamp_beam_factor(Float::NAN).is_nan());
    }

    #[test]
    fn test_nan_propagates() {
        // An exactly zero denominator cannot be reached with finite
        // angles, so the 0/0 case is built by hand
        let factors = TranspositionFactors {
            ground_reflected: 0.0,
            sky_diffuse: 1.0,
            beam: clamp_beam_factor(Float::NAN),
        };
        let total = factors.combine(&sample(172, 12, 500., 100.), 0.1);
        assert!(total.is_nan());

        // A NaN reaching the beam factor through the geometry
        let config = surface(45., 0., Float::NAN, 0.1);
        let s = sample(172, 12, 500., 100.);
        assert!(TranspositionFactors::new(&config, &s).beam.is_nan());
        assert!(compute(&config, &s).is_nan());

        // NaN radiation is not hidden either
        let config = surface(45., 0., 52.1, 0.1);
        assert!(compute(&config, &sample(172, 12, Float::NAN, 100.)).is_nan());
        assert!(compute(&config, &sample(172, 12, 500., Float::NAN)).is_nan());
    }

    #[test]
    fn test_horizontal_surface() {
        let config = surface(0., 0., 52.1, 0.1);
        let s = sample(172, 12, 500., 100.);

        let factors = TranspositionFactors::new(&config, &s);
        assert_eq!(factors.ground_reflected, 0.0);
        assert_eq!(factors.sky_diffuse, 1.0);
        assert_close!(factors.beam, 1.0, 1e-9);

        assert_close!(compute(&config, &s), 600.0, 1e-3);

        // Holds for every daytime hour, whatever the azimuth
        for hour in 6..=18 {
            for azimuth in [-90., -45., 0., 30., 180.] {
                let config = surface(0., azimuth, 52.1, 0.7);
                let s = sample(172, hour, 321., 123.);
                assert_close!(compute(&config, &s), 444., 1e-6);
            }
        }
    }

    #[test]
    fn test_zero_radiation() {
        for tilt in [0., 30., 60., 90.] {
            for azimuth in [-180., -45., 0., 90.] {
                for hour in [0, 6, 12, 17] {
                    let config = surface(tilt, azimuth, 52.1, 0.3);
                    assert_eq!(compute(&config, &sample(172, hour, 0., 0.)), 0.0);
                }
            }
        }
        // Reflectivity is irrelevant
        let config = surface(90., 0., 52.1, 1.0);
        assert_eq!(compute(&config, &sample(10, 12, 0., 0.)), 0.0);
    }

    #[test]
    fn test_reflectivity_is_affine() {
        let s = sample(200, 15, 400., 150.);
        let base = surface(60., 20., 40., 0.0);
        let zero = compute(&base, &s);
        let r0 = TranspositionFactors::new(&base, &s).ground_reflected;
        let slope = (s.indirect_radiation + s.direct_radiation) * r0;

        for reflectivity in [0.1, 0.25, 0.5, 1.0, 2.0, -0.3] {
            let config = SurfaceConfig {
                reflectivity,
                ..base
            };
            assert_close!(
                compute(&config, &s) - zero,
                slope * reflectivity,
                1e4 * Float::EPSILON
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let config = surface(35., -20., 40., 0.2);
        let s = sample(15, 14, 250., 80.);
        let first = compute(&config, &s);
        for _ in 0..10 {
            assert_eq!(compute(&config, &s).to_bits(), first.to_bits());
        }
    }

    #[test]
    fn test_beam_factor_is_bounded() {
        for day in (1..=365).step_by(7) {
            for hour in 0..24 {
                for tilt in [0., 15., 45., 75., 90.] {
                    for azimuth in [-180., -120., -45., 0., 45., 135.] {
                        for latitude in [-60., -20., 0., 35., 52.1, 70.] {
                            let config = surface(tilt, azimuth, latitude, 0.2);
                            let rb = TranspositionFactors::new(&config, &sample(day, hour, 1., 1.))
                                .beam;
                            assert!((0.0..=MAX_BEAM_FACTOR).contains(&rb), "rb = {}", rb);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_beam_factor_at_midnight() {
        // A north-facing wall gets no beam at night
        let north = surface(90., 180., 52.1, 0.1);
        let s = sample(172, 0, 20., 10.);
        let factors = TranspositionFactors::new(&north, &s);
        assert_eq!(factors.beam, 0.0);
        assert_close!(compute(&north, &s), 11.5, 1e-4);

        // A south-facing wall would be amplified almost four times
        // if it was not for the clamp
        let south = surface(90., 0., 52.1, 0.1);
        let factors = TranspositionFactors::new(&south, &s);
        assert_eq!(factors.beam, MAX_BEAM_FACTOR);
        assert_close!(compute(&south, &s), 41.5, 1e-4);
    }

    #[test]
    fn test_terms_assignment() {
        let config = surface(45., 10., 52.1, 0.2);
        let s = sample(100, 11, 300., 0.);
        let f = TranspositionFactors::new(&config, &s);

        // With no indirect radiation, the beam factor plays no role
        assert_close!(
            compute(&config, &s),
            f.sky_diffuse * 300. + 300. * 0.2 * f.ground_reflected,
            1e4 * Float::EPSILON
        );
        assert_close!(f.ground_reflected + f.sky_diffuse, 1.0, 4. * Float::EPSILON);
    }

    // These were produced in double precision, with the truncated
    // conversion factor
    #[cfg(not(any(feature = "exact_pi", feature = "float")))]
    #[test]
    fn test_known_results() {
        // (day, hour, tilt, azimuth, latitude, indirect, direct, reflectivity, expected)
        let cases: [(i32, i32, Float, Float, Float, Float, Float, Float, Float); 6] = [
            (172, 12, 90., -45., 52.1, 100., 500., 0.1, 318.6335616463914),
            (172, 9, 90., -45., 52.1, 150., 300., 0.1, 172.5001691663493),
            (15, 14, 35., 20., 40.0, 80., 250., 0.2, 369.1125512587192),
            (200, 16, 60., 90., -33.4, 120., 200., 0.3, 174.00003983331015),
            (172, 0, 90., 180., 52.1, 10., 20., 0.1, 11.50001127775662),
            (172, 0, 90., 0., 52.1, 10., 20., 0.1, 41.50001127775662),
        ];

        for (day, hour, tilt, azimuth, latitude, indirect, direct, reflectivity, expected) in cases
        {
            let config = surface(tilt, azimuth, latitude, reflectivity);
            let found = compute(&config, &sample(day, hour, direct, indirect));
            assert_close!(found, expected, 1e-6);
        }
    }
}
