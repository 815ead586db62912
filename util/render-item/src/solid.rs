use crate::outline::Outline;
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SolidId(u64);

impl SolidId {
	pub fn new(id: u64) -> Self {
		Self(id)
	}
}

/// A body produced by extruding an outline.
pub trait Solid {
	fn id(&self) -> SolidId;

	/// Releases the outline-derived geometry and the material binding.
	///
	/// Must be idempotent; scenes call this before removing a member.
	fn dispose(&mut self);
}

pub trait SolidBuilder {
	type Material: Clone + Debug;
	type Solid: Solid;

	/// Extrudes `outline` by `depth` and binds `material` to the result.
	fn build_solid(
		&mut self,
		outline: Outline,
		depth: f64,
		material: &Self::Material,
	) -> Self::Solid;
}

/// The container solids are spawned into.
pub trait Scene {
	type Member: Solid;

	fn add(&mut self, member: Self::Member);

	fn members(&self) -> impl Iterator<Item = &Self::Member>;

	fn member_mut(&mut self, index: usize) -> Option<&mut Self::Member>;

	fn remove(&mut self, index: usize) -> Option<Self::Member>;

	fn len(&self) -> usize {
		self.members().count()
	}

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Signals that the scene contents are complete and may be presented.
	fn request_render(&mut self) {}

	/// Disposes and removes every member, returning how many were removed.
	fn clear(&mut self) -> usize {
		let mut removed = 0;
		while let Some(member) = self.member_mut(0) {
			member.dispose();
			if self.remove(0).is_none() {
				break;
			}
			removed += 1;
		}
		log::debug!("Cleared {} solids from scene", removed);
		removed
	}
}
