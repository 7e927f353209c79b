use serde::Deserialize;

use crate::color::{Color, DEFAULT_PALETTE};

/// Tuning knobs for territory generation. All fields have defaults, so a
/// params file only needs the values it overrides.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorParams {
    pub palette: Vec<Color>,

    // Growth probability: base + noise_weight * |noise| + organic_weight * organicness/100
    pub base_probability: f64,
    pub noise_weight: f64,
    pub organic_weight: f64,

    /// Lattice cells per grid cell. Smaller = broader noise features.
    pub noise_scale: f32,
    /// Chebyshev radius searched when inheriting a color (2 = 5x5 window).
    pub inherit_radius: usize,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ParamsError {
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("{name} must be finite and non-negative, got {value}")]
    Weight { name: &'static str, value: f64 },
    #[error("noise_scale must be finite and positive, got {0}")]
    NoiseScale(f32),
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.to_vec(),
            base_probability: 0.3,
            noise_weight: 0.4,
            organic_weight: 0.4,
            noise_scale: 0.15,
            inherit_radius: 2,
        }
    }
}

impl GeneratorParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.palette.is_empty() {
            return Err(ParamsError::EmptyPalette);
        }
        for (name, value) in [
            ("base_probability", self.base_probability),
            ("noise_weight", self.noise_weight),
            ("organic_weight", self.organic_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ParamsError::Weight { name, value });
            }
        }
        if !self.noise_scale.is_finite() || self.noise_scale <= 0.0 {
            return Err(ParamsError::NoiseScale(self.noise_scale));
        }
        Ok(())
    }

    /// Admission probability for a neighbor with the given noise sample.
    #[inline]
    pub fn growth_probability(&self, noise: f32, organicness: u32) -> f64 {
        let p = self.base_probability
            + self.noise_weight * f64::from(noise.abs())
            + self.organic_weight * f64::from(organicness) / 100.0;
        p.clamp(0.0, 1.0)
    }
}
