use crate::error::SnowflakeError;
use crate::pattern::{ArmParameters, Pattern};
use crate::pen::Shape;
use crate::prng::Prng;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Resolution of the curvature and curve position sliders.
const CURVE_STEP: f64 = 0.0625;

/// How far [DesignParameters::vary] turns the ticks.
const VARY_STEP: f64 = 5.0;

/// Packs a date into a seed as the decimal number `YYYYMMDD`.
pub fn date_seed(date: NaiveDate) -> i64 {
	10000 * date.year() as i64 + 100 * date.month() as i64 + date.day() as i64
}

/// Name a host should give an export of the design for `date`, e.g.
/// `date20230318variant60.snowprint.stl`.
pub fn export_filename(date: NaiveDate, angle: f64, extension: &str) -> String {
	format!("date{}variant{}.snowprint.{}", date.format("%Y%m%d"), angle, extension)
}

/// Everything that varies between two snowflakes drawn with the same pen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignParameters {
	pub pattern: Pattern,
	pub shape: Shape,
	pub curvature: f64,
	pub curve_at: f64,
	pub branches: u32,
	pub subbranches: u32,
	/// Degrees.
	pub angle: f64,
}

impl DesignParameters {
	/// Draws a design from `prng`.
	///
	/// The order of draws is fixed: later ranges depend on the pattern and shape, and any
	/// reordering would give every date a different snowflake.
	pub fn from_prng(prng: &mut Prng) -> Result<Self, SnowflakeError> {
		let pattern = Pattern::try_from(prng.next_in(0, 3)? as u8)?;
		let shape = Shape::try_from(prng.next_in(0, 1)? as u8)?;

		let curvature = match shape {
			Shape::Triangle => prng.next(0.0, 1.0, CURVE_STEP)?,
			Shape::Rectangle => prng.next(-0.5, 0.5, CURVE_STEP)?,
		};
		let curve_at = prng.next(0.0, 1.0, CURVE_STEP)?;
		let branches = prng.next_in(5, 12)?;
		let subbranches = match pattern {
			Pattern::PlainFan => prng.next_in(1, 8)?,
			_ => prng.next_in(1, 4)?,
		};
		let angle = prng.next(30.0, 150.0, 5.0)?;

		Ok(Self { pattern, shape, curvature, curve_at, branches, subbranches, angle })
	}

	/// Reseeds `prng` from `date` and draws the day's design.
	pub fn from_date(prng: &mut Prng, date: NaiveDate) -> Result<Self, SnowflakeError> {
		prng.seed(date_seed(date));
		let design = Self::from_prng(prng)?;
		log::debug!("Design for {}: {:?}", date, design);
		Ok(design)
	}

	/// Turns the ticks a little further, wrapping below 180 degrees.
	pub fn vary(&mut self) {
		self.angle = (self.angle + VARY_STEP) % 180.0;
	}

	pub fn arm(&self, radius: f64) -> ArmParameters {
		ArmParameters { radius, subbranches: self.subbranches, angle: self.angle }
	}
}

impl Default for DesignParameters {
	fn default() -> Self {
		Self {
			pattern: Pattern::PlainFan,
			shape: Shape::Triangle,
			curvature: 0.0,
			curve_at: 0.5,
			branches: 6,
			subbranches: 3,
			angle: 60.0,
		}
	}
}
