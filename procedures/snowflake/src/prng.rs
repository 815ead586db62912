//! Park-Miller "minimal standard" generator.
//!
//! The register update is pure integer arithmetic, so a seed replays the same
//! sequence on every platform.

use crate::error::SnowflakeError;

const MULTIPLIER: i128 = 16807;
const MODULUS: i128 = 2_147_483_647;

/// Slack when counting how many steps fit in a range, so that spans like
/// `0.3 / 0.1` still reach `max`.
const STEP_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prng {
	register: i64,
}

impl Prng {
	pub fn new(seed: i64) -> Self {
		Self { register: seed }
	}

	pub fn seed(&mut self, value: i64) {
		log::debug!("Seeding prng with {}", value);
		self.register = value;
	}

	/// Returns a value in `min..=max` that lies on the grid `min + k * step`.
	///
	/// When `max - min` is not a multiple of `step`, the largest grid value below `max`
	/// is the upper bound.
	pub fn next(&mut self, min: f64, max: f64, step: f64) -> Result<f64, SnowflakeError> {
		if !step.is_finite() || step <= 0.0 {
			return Err(SnowflakeError::ZeroStep);
		}
		if !min.is_finite() || !max.is_finite() || max < min {
			return Err(SnowflakeError::InvalidRange { min, max });
		}

		self.register = ((MULTIPLIER * self.register as i128) % MODULUS) as i64;

		// the register never reaches MODULUS, so wider grids map the same way
		let steps = ((max - min) / step + STEP_EPSILON).floor().min(MODULUS as f64) as i64 + 1;
		Ok(self.register.rem_euclid(steps) as f64 * step + min)
	}

	/// [Prng::next] for integer ranges with a step of one.
	pub fn next_in(&mut self, min: u32, max: u32) -> Result<u32, SnowflakeError> {
		self.next(min as f64, max as f64, 1.0).map(|value| value as u32)
	}
}

impl Default for Prng {
	fn default() -> Self {
		Self::new(1)
	}
}
