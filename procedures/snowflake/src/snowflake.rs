use crate::design::DesignParameters;
use crate::error::SnowflakeError;
use crate::pen::{Pen, PenConfig};
use render_item::{Canvas, Scene};
use serde::{Deserialize, Serialize};

/// Fixed geometry shared by every design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowflakeConfig {
	/// Length of each branch's primary stroke.
	pub radius: f64,
	pub pen: PenConfig,
}

impl Default for SnowflakeConfig {
	fn default() -> Self {
		// a 600 wide canvas at zoom 10
		Self { radius: 60.0, pen: PenConfig::default() }
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnowflakeSummary {
	pub branches: u32,
	pub solids: usize,
	/// Solids disposed while clearing the previous design.
	pub cleared: usize,
}

/// Draws a full design: one arm per branch, turned evenly about the pen.
#[derive(Debug, Clone, PartialEq)]
pub struct Snowflake {
	design: DesignParameters,
	radius: f64,
}

impl Snowflake {
	pub fn new(design: DesignParameters, radius: f64) -> Self {
		Self { design, radius }
	}

	pub fn design(&self) -> &DesignParameters {
		&self.design
	}

	pub fn angle_between_branches(&self) -> f64 {
		360.0 / self.design.branches as f64
	}

	/// Number of solids [Snowflake::create] leaves in the canvas.
	pub fn solid_count(&self) -> u64 {
		self.design.branches as u64 * (1 + self.design.pattern.stroke_count(self.design.subbranches))
	}

	/// Replaces the canvas contents with this design.
	///
	/// The pen's drawing parameters are set from the design. On success the pen ends where
	/// it began with its heading advanced by a full turn. On failure the canvas is emptied
	/// and the pen is put back exactly as it was.
	pub fn create<C: Canvas>(&self, pen: &mut Pen<C>) -> Result<SnowflakeSummary, SnowflakeError> {
		if self.design.branches == 0 {
			return Err(SnowflakeError::InvalidBranchCount(0));
		}

		let start = pen.pose().clone();
		let stored = pen.stored();

		let cleared = pen.canvas_mut().clear();

		let pose = pen.pose_mut();
		pose.shape = self.design.shape;
		pose.curvature = self.design.curvature;
		pose.curve_at = self.design.curve_at;

		if let Err(error) = self.draw_branches(pen) {
			log::warn!("Snowflake failed, discarding partial design: {}", error);
			pen.reset(start, stored);
			pen.canvas_mut().clear();
			return Err(error);
		}

		pen.canvas_mut().request_render();

		let summary =
			SnowflakeSummary { branches: self.design.branches, solids: pen.canvas().len(), cleared };
		log::info!("Created snowflake {:?}: {:?}", self.design, summary);
		Ok(summary)
	}

	fn draw_branches<C: Canvas>(&self, pen: &mut Pen<C>) -> Result<(), SnowflakeError> {
		let angle_between_branches = self.angle_between_branches();
		let arm = self.design.arm(self.radius);

		for branch in 0..self.design.branches {
			log::debug!("Drawing branch {} at heading {}", branch, pen.pose().heading);

			pen.draw(self.radius, 0.0)?;
			pen.store();
			self.design.pattern.draw(pen, &arm)?;
			pen.restore()?;
			pen.turn_left(angle_between_branches);
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::pattern::Pattern;
	use render_item::SolidRecorder;

	fn pen() -> Pen<SolidRecorder<()>> {
		Pen::from_config(&PenConfig::default(), (), SolidRecorder::new())
	}

	#[test]
	fn test_solid_count_per_pattern() {
		for pattern in Pattern::ALL {
			let design = DesignParameters {
				pattern,
				branches: 7,
				subbranches: 3,
				..DesignParameters::default()
			};
			let snowflake = Snowflake::new(design, 60.0);
			let mut pen = pen();

			let summary = snowflake.create(&mut pen).unwrap();
			assert_eq!(summary.solids as u64, snowflake.solid_count());
			assert_eq!(pen.canvas().len(), summary.solids);
		}
	}

	#[test]
	fn test_create_applies_design_to_pen() {
		let design = DesignParameters {
			shape: crate::pen::Shape::Rectangle,
			curvature: -0.25,
			curve_at: 0.75,
			..DesignParameters::default()
		};
		let mut pen = pen();
		Snowflake::new(design, 60.0).create(&mut pen).unwrap();

		assert_eq!(pen.pose().shape, crate::pen::Shape::Rectangle);
		assert_eq!(pen.pose().curvature, -0.25);
		assert_eq!(pen.pose().curve_at, 0.75);
	}

	#[test]
	fn test_recreate_clears_previous_design() {
		let mut pen = pen();
		let snowflake = Snowflake::new(DesignParameters::default(), 60.0);

		let first = snowflake.create(&mut pen).unwrap();
		let second = snowflake.create(&mut pen).unwrap();

		assert_eq!(first.cleared, 0);
		assert_eq!(second.cleared, first.solids);
		assert_eq!(pen.canvas().len(), second.solids);
		assert_eq!(pen.canvas().disposed_count(), first.solids);
		assert_eq!(pen.canvas().render_count(), 2);
	}

	#[test]
	fn test_zero_branches_fails() {
		let design = DesignParameters { branches: 0, ..DesignParameters::default() };
		let mut pen = pen();
		assert_eq!(
			Snowflake::new(design, 60.0).create(&mut pen),
			Err(SnowflakeError::InvalidBranchCount(0))
		);
	}
}
