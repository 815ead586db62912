use crate::outline::Outline;
use crate::solid::{Scene, Solid, SolidBuilder, SolidId};
use std::fmt::Debug;

/// A solid that keeps the outline it was built from instead of a mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedSolid<M> {
	id: SolidId,
	pub outline: Outline,
	pub depth: f64,
	pub material: M,
	disposed: bool,
}

impl<M> RecordedSolid<M> {
	pub fn is_disposed(&self) -> bool {
		self.disposed
	}
}

impl<M> Solid for RecordedSolid<M> {
	fn id(&self) -> SolidId {
		self.id
	}

	fn dispose(&mut self) {
		self.disposed = true;
	}
}

/// Headless canvas: builds [RecordedSolid]s and keeps them in insertion order.
///
/// Useful for tests and for exporters that only need the outlines.
#[derive(Debug, Clone)]
pub struct SolidRecorder<M> {
	members: Vec<RecordedSolid<M>>,
	next_id: u64,
	disposed: usize,
	renders: usize,
}

impl<M> SolidRecorder<M> {
	pub fn new() -> Self {
		Self { members: vec![], next_id: 0, disposed: 0, renders: 0 }
	}

	pub fn solids(&self) -> &[RecordedSolid<M>] {
		&self.members
	}

	/// Number of members that have been disposed and removed over the recorder's life.
	pub fn disposed_count(&self) -> usize {
		self.disposed
	}

	pub fn render_count(&self) -> usize {
		self.renders
	}

	/// Number of solids built over the recorder's life.
	pub fn built_count(&self) -> u64 {
		self.next_id
	}
}

impl<M> Default for SolidRecorder<M> {
	fn default() -> Self {
		Self::new()
	}
}

impl<M: Clone + Debug> SolidBuilder for SolidRecorder<M> {
	type Material = M;
	type Solid = RecordedSolid<M>;

	fn build_solid(&mut self, outline: Outline, depth: f64, material: &M) -> RecordedSolid<M> {
		let id = SolidId::new(self.next_id);
		self.next_id += 1;
		RecordedSolid { id, outline, depth, material: material.clone(), disposed: false }
	}
}

impl<M> Scene for SolidRecorder<M> {
	type Member = RecordedSolid<M>;

	fn add(&mut self, member: RecordedSolid<M>) {
		self.members.push(member);
	}

	fn members(&self) -> impl Iterator<Item = &RecordedSolid<M>> {
		self.members.iter()
	}

	fn member_mut(&mut self, index: usize) -> Option<&mut RecordedSolid<M>> {
		self.members.get_mut(index)
	}

	fn remove(&mut self, index: usize) -> Option<RecordedSolid<M>> {
		if index >= self.members.len() {
			return None;
		}
		let member = self.members.remove(index);
		if member.is_disposed() {
			self.disposed += 1;
		}
		Some(member)
	}

	fn len(&self) -> usize {
		self.members.len()
	}

	fn request_render(&mut self) {
		self.renders += 1;
	}
}
