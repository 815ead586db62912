use crate::{SnowprintReport, SnowprintRequest};
use chrono::NaiveDate;
use rayon::prelude::*;

/// Consecutive dates starting at `start`.
pub fn dates_from(start: NaiveDate, days: u32) -> Vec<NaiveDate> {
	start.iter_days().take(days as usize).collect()
}

/// Generates every date's design in parallel.
///
/// Each design gets its own prng, pen and recorder, so results do not depend on
/// scheduling. Reports come back in date order.
pub fn generate_all(
	request: &SnowprintRequest,
	dates: &[NaiveDate],
) -> anyhow::Result<Vec<SnowprintReport>> {
	log::info!("Generating {} designs", dates.len());
	dates
		.par_iter()
		.map(|date| request.generate(*date).map(|(report, _)| report))
		.collect()
}
