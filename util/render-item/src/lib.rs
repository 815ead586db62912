pub mod outline;
pub mod recorder;
pub mod solid;

pub use outline::{Outline, OutlineBounds, Segment};
pub use recorder::{RecordedSolid, SolidRecorder};
pub use solid::{Scene, Solid, SolidBuilder, SolidId};

/// Anything that can both build solids and hold them.
///
/// Generators draw through a canvas so that the host decides what a solid actually is
/// (an extruded mesh, a recorded outline, an STL facet list, ...).
pub trait Canvas: SolidBuilder + Scene<Member = <Self as SolidBuilder>::Solid> {}

impl<T> Canvas for T where T: SolidBuilder + Scene<Member = <T as SolidBuilder>::Solid> {}
