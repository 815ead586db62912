use super::pose::{Pose, Shape};
use bevy::math::DVec2;
use render_item::Outline;
use std::f64::consts::FRAC_PI_2;

/// Builds the outline of a stroke `length` long, `angle_offset` degrees off the pose heading.
///
/// Both variants share their base: two vertices `size / 2` either side of the pen,
/// across the stroke direction. Curved sides use a quadratic whose control point sits
/// `curve_at` of the way along the side and `curvature * size` off it.
pub fn stroke_outline<M>(pose: &Pose<M>, length: f64, angle_offset: f64) -> Outline {
	let angle = (pose.heading + angle_offset).to_radians();
	let half_size = pose.size / 2.0;
	let bow = pose.curvature * pose.size;

	let across = DVec2::from_angle(angle + FRAC_PI_2);
	let ahead = DVec2::from_angle(angle) * length;

	let base_1 = pose.position + across * half_size;
	let base_2 = pose.position - across * half_size;

	match pose.shape {
		Shape::Triangle => {
			// internal angle between the base and each side
			let base_angle = (length / half_size).atan();
			let side_1 = angle + base_angle - FRAC_PI_2;
			let side_2 = angle - base_angle + FRAC_PI_2;
			let side_length = length / base_angle.sin();
			let along = pose.curve_at * side_length;

			let control_1 = base_1
				+ DVec2::from_angle(side_1) * along
				+ DVec2::from_angle(side_1 + FRAC_PI_2) * bow;
			let control_2 = base_2
				+ DVec2::from_angle(side_2) * along
				- DVec2::from_angle(side_2 + FRAC_PI_2) * bow;

			Outline::starting_at(base_1)
				.quadratic_to(control_1, pose.position + ahead)
				.quadratic_to(control_2, base_2)
		}
		Shape::Rectangle => {
			let control_1 = base_1 + ahead * pose.curve_at + across * bow;
			let control_2 = base_2 + ahead * pose.curve_at - across * bow;

			Outline::starting_at(base_1)
				.quadratic_to(control_1, base_1 + ahead)
				.line_to(base_2 + ahead)
				.quadratic_to(control_2, base_2)
		}
	}
}
