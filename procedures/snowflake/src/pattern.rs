use crate::error::SnowflakeError;
use crate::pen::Pen;
use render_item::Canvas;
use serde::{Deserialize, Serialize};

/// How one arm of a snowflake is filled in after its primary stroke.
///
/// Serialised as its index so configs and the date-derived designs agree on numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Pattern {
	/// Pairs of ticks at evenly spaced points along the arm, shrinking towards the tip.
	#[default]
	PlainFan,
	/// [Pattern::PlainFan] with every tick mirrored back through the arm.
	ReflectedFan,
	/// One chain of forked ticks, each half the length of the last.
	RecursiveHalving,
	/// [Pattern::RecursiveHalving] that also splits into two turned chains at every fork.
	BifurcatingHalving,
}

impl Pattern {
	pub const ALL: [Pattern; 4] = [
		Pattern::PlainFan,
		Pattern::ReflectedFan,
		Pattern::RecursiveHalving,
		Pattern::BifurcatingHalving,
	];

	pub fn index(&self) -> u8 {
		match self {
			Pattern::PlainFan => 0,
			Pattern::ReflectedFan => 1,
			Pattern::RecursiveHalving => 2,
			Pattern::BifurcatingHalving => 3,
		}
	}

	/// Whether each step draws at half the previous step's length.
	pub fn halves(&self) -> bool {
		matches!(self, Pattern::RecursiveHalving | Pattern::BifurcatingHalving)
	}

	/// Number of strokes [Pattern::draw] makes for `subbranches`.
	pub fn stroke_count(&self, subbranches: u32) -> u64 {
		match self {
			Pattern::PlainFan | Pattern::RecursiveHalving => 2 * subbranches as u64,
			Pattern::ReflectedFan => 4 * subbranches as u64,
			Pattern::BifurcatingHalving => 2u64.saturating_pow(subbranches.saturating_add(1)) - 2,
		}
	}

	/// Draws the pattern from the pen's current pose.
	///
	/// The pen is left wherever the pattern finishes; callers bracket this with
	/// [Pen::store] and [Pen::restore]. Arguments are checked before anything is drawn,
	/// so an error leaves the canvas untouched.
	pub fn draw<C: Canvas>(
		&self,
		pen: &mut Pen<C>,
		arm: &ArmParameters,
	) -> Result<(), SnowflakeError> {
		if !arm.radius.is_finite() || arm.radius <= 0.0 {
			return Err(SnowflakeError::NonPositiveLength(arm.radius));
		}
		if self.halves() && smallest_half(arm.radius, arm.subbranches) <= 0.0 {
			return Err(SnowflakeError::TooManySubbranches(arm.subbranches));
		}

		log::debug!("Drawing {:?} with {:?}", self, arm);
		match self {
			Pattern::PlainFan => fan(pen, arm, false),
			Pattern::ReflectedFan => fan(pen, arm, true),
			Pattern::RecursiveHalving => halving(pen, arm.radius, arm.subbranches, arm.angle),
			Pattern::BifurcatingHalving => {
				bifurcating_halving(pen, arm.radius, arm.subbranches, arm.angle)
			}
		}
	}
}

impl TryFrom<u8> for Pattern {
	type Error = SnowflakeError;

	fn try_from(index: u8) -> Result<Self, Self::Error> {
		Pattern::ALL
			.get(index as usize)
			.copied()
			.ok_or(SnowflakeError::UnsupportedPattern(index))
	}
}

impl From<Pattern> for u8 {
	fn from(pattern: Pattern) -> u8 {
		pattern.index()
	}
}

/// Inputs a pattern needs beyond the pen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmParameters {
	/// Length of the arm's primary stroke.
	pub radius: f64,
	pub subbranches: u32,
	/// Degrees either side of the heading that ticks are drawn at.
	pub angle: f64,
}

/// Length of the last ticks a halving pattern draws.
fn smallest_half(radius: f64, subbranches: u32) -> f64 {
	// past a few thousand halvings every finite radius is zero anyway
	radius * 0.5f64.powi(subbranches.min(4096) as i32)
}

/// Ticks along the arm.
///
/// The pen is never moved back between steps, so tick origins accumulate outwards.
fn fan<C: Canvas>(
	pen: &mut Pen<C>,
	arm: &ArmParameters,
	reflect: bool,
) -> Result<(), SnowflakeError> {
	let distance = arm.radius / (arm.subbranches as f64 + 1.0);

	for i in 1..=arm.subbranches {
		let length = arm.radius / (i as f64 + 1.0);

		pen.move_forward(distance);
		pen.draw(length, arm.angle)?;
		pen.draw(length, -arm.angle)?;

		if reflect {
			pen.draw(length, arm.angle + 180.0)?;
			pen.draw(length, -arm.angle + 180.0)?;
		}
	}

	Ok(())
}

fn halving<C: Canvas>(
	pen: &mut Pen<C>,
	length: f64,
	subbranches: u32,
	angle: f64,
) -> Result<(), SnowflakeError> {
	if subbranches == 0 {
		return Ok(());
	}

	let length = length / 2.0;
	pen.move_forward(length);
	pen.draw(length, angle)?;
	pen.draw(length, -angle)?;

	halving(pen, length, subbranches - 1, angle)
}

fn bifurcating_halving<C: Canvas>(
	pen: &mut Pen<C>,
	length: f64,
	subbranches: u32,
	angle: f64,
) -> Result<(), SnowflakeError> {
	if subbranches == 0 {
		return Ok(());
	}

	let length = length / 2.0;
	pen.move_forward(length);
	pen.draw(length, angle)?;
	pen.draw(length, -angle)?;

	pen.store();
	pen.turn_left(angle);
	bifurcating_halving(pen, length, subbranches - 1, angle)?;
	pen.restore()?;

	pen.turn_right(angle);
	bifurcating_halving(pen, length, subbranches - 1, angle)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::pen::PenConfig;
	use bevy::math::DVec2;
	use render_item::{Scene, SolidRecorder};

	fn pen() -> Pen<SolidRecorder<()>> {
		Pen::from_config(&PenConfig::default(), (), SolidRecorder::new())
	}

	fn arm(subbranches: u32) -> ArmParameters {
		ArmParameters { radius: 90.0, subbranches, angle: 60.0 }
	}

	#[test]
	fn test_pattern_indices() {
		for (i, pattern) in Pattern::ALL.iter().enumerate() {
			assert_eq!(Pattern::try_from(i as u8).unwrap(), *pattern);
			assert_eq!(pattern.index() as usize, i);
		}
		assert_eq!(Pattern::try_from(4), Err(SnowflakeError::UnsupportedPattern(4)));
	}

	#[test]
	fn test_plain_fan_stroke_count() {
		let mut pen = pen();
		Pattern::PlainFan.draw(&mut pen, &arm(3)).unwrap();
		assert_eq!(pen.canvas().len(), 6);
	}

	#[test]
	fn test_reflected_fan_stroke_count() {
		let mut pen = pen();
		Pattern::ReflectedFan.draw(&mut pen, &arm(3)).unwrap();
		assert_eq!(pen.canvas().len(), 12);
	}

	#[test]
	fn test_fan_moves_cumulatively() {
		let mut pen = pen();
		Pattern::PlainFan.draw(&mut pen, &arm(2)).unwrap();

		// two steps of 90 / 3 up the default heading
		assert!((pen.pose().position - DVec2::new(0.0, 60.0)).length() < 1e-9);
	}

	#[test]
	fn test_fan_tick_lengths_shrink() {
		let mut pen = pen();
		Pattern::PlainFan.draw(&mut pen, &arm(2)).unwrap();

		// the apex of each triangular tick is `length` from its base centre
		let reach = |index: usize| {
			let outline = &pen.canvas().solids()[index].outline;
			let vertices = outline.vertices();
			let base_centre = (vertices[0] + vertices[2]) / 2.0;
			(vertices[1] - base_centre).length()
		};
		assert!((reach(0) - 45.0).abs() < 1e-9);
		assert!((reach(2) - 30.0).abs() < 1e-9);
	}

	#[test]
	fn test_halving_draws_one_chain() {
		let mut pen = pen();
		Pattern::RecursiveHalving.draw(&mut pen, &arm(4)).unwrap();

		assert_eq!(pen.canvas().len(), 8);
		// 45 + 22.5 + 11.25 + 5.625
		assert!((pen.pose().position.y - 84.375).abs() < 1e-9);
		assert_eq!(pen.pose().heading, 90.0);
	}

	#[test]
	fn test_bifurcating_halving_draws_a_tree() {
		for subbranches in 0..6 {
			let mut pen = pen();
			Pattern::BifurcatingHalving.draw(&mut pen, &arm(subbranches)).unwrap();

			assert_eq!(
				pen.canvas().len() as u64,
				Pattern::BifurcatingHalving.stroke_count(subbranches)
			);
			// every store inside the recursion was matched by a restore
			assert_eq!(pen.stored(), 0);
		}
	}

	#[test]
	fn test_zero_subbranches_draws_nothing() {
		for pattern in Pattern::ALL {
			let mut pen = pen();
			pattern.draw(&mut pen, &arm(0)).unwrap();
			assert!(pen.canvas().is_empty(), "{:?} drew strokes", pattern);
			assert_eq!(pattern.stroke_count(0), 0);
		}
	}

	#[test]
	fn test_stroke_count_matches_draw() {
		for pattern in Pattern::ALL {
			let mut pen = pen();
			pattern.draw(&mut pen, &arm(3)).unwrap();
			assert_eq!(pen.canvas().len() as u64, pattern.stroke_count(3));
		}
	}

	#[test]
	fn test_halving_beyond_precision_fails_before_drawing() {
		for pattern in [Pattern::RecursiveHalving, Pattern::BifurcatingHalving] {
			let mut pen = pen();
			let arm = ArmParameters { radius: 90.0, subbranches: 1100, angle: 30.0 };

			assert_eq!(pattern.draw(&mut pen, &arm), Err(SnowflakeError::TooManySubbranches(1100)));
			assert!(pen.canvas().is_empty());
			assert_eq!(pen.pose().position, DVec2::ZERO);
		}

		// fans do not halve, so the same count is fine
		let mut pen = pen();
		let arm = ArmParameters { radius: 90.0, subbranches: 1100, angle: 30.0 };
		Pattern::PlainFan.draw(&mut pen, &arm).unwrap();
		assert_eq!(pen.canvas().len(), 2200);
	}

	#[test]
	fn test_non_positive_radius_fails() {
		let mut pen = pen();
		let arm = ArmParameters { radius: 0.0, subbranches: 2, angle: 30.0 };
		assert_eq!(
			Pattern::PlainFan.draw(&mut pen, &arm),
			Err(SnowflakeError::NonPositiveLength(0.0))
		);
	}
}
