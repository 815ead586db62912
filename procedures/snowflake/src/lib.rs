//! Date-seeded snowflake designs drawn with a turtle pen.
//!
//! A [Prng] seeded from a date picks [DesignParameters]; a [Snowflake] then drives a [Pen]
//! around the origin, one arm per branch, filling each arm with a [Pattern]. Every stroke
//! becomes a solid in the pen's [render_item::Canvas].

pub mod design;
pub mod error;
pub mod pattern;
pub mod pen;
pub mod prng;
pub mod snowflake;

pub use design::{date_seed, export_filename, DesignParameters};
pub use error::SnowflakeError;
pub use pattern::{ArmParameters, Pattern};
pub use pen::{Pen, PenConfig, Pose, Shape};
pub use prng::Prng;
pub use snowflake::{Snowflake, SnowflakeConfig, SnowflakeSummary};
