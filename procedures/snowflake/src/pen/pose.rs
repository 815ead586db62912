use crate::error::SnowflakeError;
use bevy::math::DVec2;
use serde::{Deserialize, Serialize};

/// Cross-section of every solid a pen draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
	/// Isosceles triangle with its base on the pen and its apex `length` ahead.
	#[default]
	Triangle,
	/// Rectangle of width `size` reaching `length` ahead.
	Rectangle,
}

impl Shape {
	pub fn index(&self) -> u8 {
		match self {
			Shape::Triangle => 0,
			Shape::Rectangle => 1,
		}
	}
}

impl TryFrom<u8> for Shape {
	type Error = SnowflakeError;

	fn try_from(index: u8) -> Result<Self, Self::Error> {
		match index {
			0 => Ok(Shape::Triangle),
			1 => Ok(Shape::Rectangle),
			other => Err(SnowflakeError::UnsupportedShape(other)),
		}
	}
}

/// Where a pen starts and how thick its strokes are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenConfig {
	pub x: f64,
	pub y: f64,
	/// Degrees, counterclockwise from +x.
	pub heading: f64,
	/// Extrusion depth of every solid.
	pub depth: f64,
	/// Base width of every stroke.
	pub size: f64,
}

impl Default for PenConfig {
	fn default() -> Self {
		// pointing up the canvas
		Self { x: 0.0, y: 0.0, heading: 90.0, depth: 2.0, size: 2.0 }
	}
}

/// The full drawing state of a pen.
///
/// Cloning a pose copies every scalar; the material is cloned as the handle it is.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose<M> {
	pub position: DVec2,
	/// Degrees. Never normalised, turns only ever add to it.
	pub heading: f64,
	pub depth: f64,
	pub size: f64,
	/// Bow of the stroke sides as a fraction of `size`: > 0 widens, < 0 narrows.
	pub curvature: f64,
	/// Where along a side the bow peaks, from 0 (base) to 1 (tip).
	pub curve_at: f64,
	pub shape: Shape,
	pub material: M,
}

impl<M> Pose<M> {
	pub fn new(config: &PenConfig, material: M) -> Self {
		Self {
			position: DVec2::new(config.x, config.y),
			heading: config.heading,
			depth: config.depth,
			size: config.size,
			curvature: 0.0,
			curve_at: 0.0,
			shape: Shape::default(),
			material,
		}
	}

	pub fn with_shape(mut self, shape: Shape) -> Self {
		self.shape = shape;
		self
	}

	pub fn with_curvature(mut self, curvature: f64) -> Self {
		self.curvature = curvature;
		self
	}

	pub fn with_curve_at(mut self, curve_at: f64) -> Self {
		self.curve_at = curve_at;
		self
	}

	/// Unit vector along `heading + offset` degrees.
	pub fn direction(&self, offset: f64) -> DVec2 {
		DVec2::from_angle((self.heading + offset).to_radians())
	}
}
