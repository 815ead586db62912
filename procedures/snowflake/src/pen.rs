pub mod outline;
pub mod pose;

use crate::error::SnowflakeError;
use outline::stroke_outline;
pub use pose::{PenConfig, Pose, Shape};
use render_item::{Canvas, Solid, SolidId};

/// A turtle that extrudes its strokes into a canvas.
///
/// Moving and turning change the live [Pose]; drawing never does. [Pen::store] and
/// [Pen::restore] bracket excursions with copies of the pose kept on a private stack.
pub struct Pen<C: Canvas> {
	pose: Pose<C::Material>,
	stack: Vec<Pose<C::Material>>,
	canvas: C,
}

impl<C: Canvas> Pen<C> {
	pub fn new(pose: Pose<C::Material>, canvas: C) -> Self {
		Self { pose, stack: vec![], canvas }
	}

	pub fn from_config(config: &PenConfig, material: C::Material, canvas: C) -> Self {
		Self::new(Pose::new(config, material), canvas)
	}

	pub fn pose(&self) -> &Pose<C::Material> {
		&self.pose
	}

	/// Direct access to the drawing parameters (shape, curvature, material, ...).
	pub fn pose_mut(&mut self) -> &mut Pose<C::Material> {
		&mut self.pose
	}

	pub fn set_material(&mut self, material: C::Material) {
		self.pose.material = material;
	}

	pub fn canvas(&self) -> &C {
		&self.canvas
	}

	pub fn canvas_mut(&mut self) -> &mut C {
		&mut self.canvas
	}

	pub fn into_canvas(self) -> C {
		self.canvas
	}

	/// Number of poses waiting to be restored.
	pub fn stored(&self) -> usize {
		self.stack.len()
	}

	pub fn move_forward(&mut self, distance: f64) {
		self.pose.position += self.pose.direction(0.0) * distance;
	}

	pub fn move_backward(&mut self, distance: f64) {
		self.move_forward(-distance);
	}

	/// Counterclockwise.
	pub fn turn_left(&mut self, angle: f64) {
		self.pose.heading += angle;
	}

	/// Clockwise.
	pub fn turn_right(&mut self, angle: f64) {
		self.turn_left(-angle);
	}

	pub fn store(&mut self) {
		self.stack.push(self.pose.clone());
	}

	pub fn restore(&mut self) -> Result<(), SnowflakeError> {
		self.pose = self.stack.pop().ok_or(SnowflakeError::EmptyPoseStack)?;
		Ok(())
	}

	/// Extrudes a stroke `length` long, `angle_offset` degrees off the heading, into the canvas.
	pub fn draw(&mut self, length: f64, angle_offset: f64) -> Result<SolidId, SnowflakeError> {
		if !length.is_finite() || length <= 0.0 {
			return Err(SnowflakeError::NonPositiveLength(length));
		}

		let outline = stroke_outline(&self.pose, length, angle_offset);
		let solid = self.canvas.build_solid(outline, self.pose.depth, &self.pose.material);
		let id = solid.id();
		log::trace!(
			"Drew {:?} stroke {:?} of length {} at {:?}, heading {}",
			self.pose.shape,
			id,
			length,
			self.pose.position,
			self.pose.heading + angle_offset
		);
		self.canvas.add(solid);

		Ok(id)
	}

	/// Drops stored poses down to `depth` and puts `pose` back as the live pose.
	pub(crate) fn reset(&mut self, pose: Pose<C::Material>, depth: usize) {
		self.stack.truncate(depth);
		self.pose = pose;
	}
}
