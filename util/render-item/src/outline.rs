use bevy::math::DVec2;

/// A single edge of an outline, ending at its `to` point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
	Line { to: DVec2 },
	Quadratic { control: DVec2, to: DVec2 },
}

impl Segment {
	pub fn end(&self) -> DVec2 {
		match self {
			Segment::Line { to } | Segment::Quadratic { to, .. } => *to,
		}
	}

	/// Evaluates the edge at `t` in [0, 1], given the point the edge starts from.
	pub fn point_at(&self, from: DVec2, t: f64) -> DVec2 {
		match self {
			Segment::Line { to } => from.lerp(*to, t),
			Segment::Quadratic { control, to } => {
				let u = 1.0 - t;
				from * (u * u) + *control * (2.0 * u * t) + *to * (t * t)
			}
		}
	}
}

/// A closed 2D path made of straight and quadratic edges.
///
/// The path is implicitly closed: the last segment's end is joined back to `start`
/// with a straight edge when the outline is extruded.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
	start: DVec2,
	segments: Vec<Segment>,
}

impl Outline {
	pub fn starting_at(start: DVec2) -> Self {
		Self { start, segments: vec![] }
	}

	pub fn line_to(mut self, to: DVec2) -> Self {
		self.segments.push(Segment::Line { to });
		self
	}

	pub fn quadratic_to(mut self, control: DVec2, to: DVec2) -> Self {
		self.segments.push(Segment::Quadratic { control, to });
		self
	}

	pub fn start(&self) -> DVec2 {
		self.start
	}

	pub fn segments(&self) -> &[Segment] {
		&self.segments
	}

	/// The start point followed by the end point of every segment.
	pub fn vertices(&self) -> Vec<DVec2> {
		std::iter::once(self.start).chain(self.segments.iter().map(Segment::end)).collect()
	}

	pub fn control_points(&self) -> Vec<DVec2> {
		self.segments
			.iter()
			.filter_map(|segment| match segment {
				Segment::Quadratic { control, .. } => Some(*control),
				Segment::Line { .. } => None,
			})
			.collect()
	}

	/// Each segment paired with the point it starts from.
	pub fn edges(&self) -> impl Iterator<Item = (DVec2, &Segment)> {
		let starts = self.vertices();
		self.segments.iter().enumerate().map(move |(i, segment)| (starts[i], segment))
	}

	/// Box around every vertex and control point.
	///
	/// A quadratic curve lies inside the hull of its control polygon, so this always
	/// contains the outline, if not tightly.
	pub fn bounds(&self) -> OutlineBounds {
		let mut bounds = OutlineBounds { min: self.start, max: self.start };
		for point in self.vertices().into_iter().chain(self.control_points()) {
			bounds.min = bounds.min.min(point);
			bounds.max = bounds.max.max(point);
		}
		bounds
	}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineBounds {
	pub min: DVec2,
	pub max: DVec2,
}

impl OutlineBounds {
	pub fn contains(&self, point: DVec2) -> bool {
		point.cmpge(self.min).all() && point.cmple(self.max).all()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_vertices_follow_segments() {
		let outline = Outline::starting_at(DVec2::new(0.0, -1.0))
			.quadratic_to(DVec2::new(1.0, -2.0), DVec2::new(4.0, -1.0))
			.line_to(DVec2::new(4.0, 1.0))
			.quadratic_to(DVec2::new(1.0, 2.0), DVec2::new(0.0, 1.0));

		assert_eq!(outline.segments().len(), 3);
		assert_eq!(
			outline.vertices(),
			vec![
				DVec2::new(0.0, -1.0),
				DVec2::new(4.0, -1.0),
				DVec2::new(4.0, 1.0),
				DVec2::new(0.0, 1.0)
			]
		);
		assert_eq!(outline.control_points(), vec![DVec2::new(1.0, -2.0), DVec2::new(1.0, 2.0)]);
	}

	#[test]
	fn test_quadratic_point_at() {
		let segment = Segment::Quadratic { control: DVec2::new(1.0, 2.0), to: DVec2::new(2.0, 0.0) };
		let from = DVec2::ZERO;

		assert_eq!(segment.point_at(from, 0.0), from);
		assert_eq!(segment.point_at(from, 1.0), DVec2::new(2.0, 0.0));
		// the apex of a symmetric parabola is half way to its control point
		assert_eq!(segment.point_at(from, 0.5), DVec2::new(1.0, 1.0));
	}

	#[test]
	fn test_edges_start_where_previous_ended() {
		let outline = Outline::starting_at(DVec2::ZERO)
			.line_to(DVec2::X)
			.line_to(DVec2::ONE);

		let starts: Vec<DVec2> = outline.edges().map(|(from, _)| from).collect();
		assert_eq!(starts, vec![DVec2::ZERO, DVec2::X]);
	}

	#[test]
	fn test_bounds_include_control_points() {
		let outline = Outline::starting_at(DVec2::ZERO)
			.quadratic_to(DVec2::new(0.5, 3.0), DVec2::new(1.0, 0.0));

		let bounds = outline.bounds();
		assert_eq!(bounds.min, DVec2::ZERO);
		assert_eq!(bounds.max, DVec2::new(1.0, 3.0));
		assert!(bounds.contains(DVec2::new(0.5, 1.5)));
		assert!(!bounds.contains(DVec2::new(-0.1, 0.0)));
	}
}
