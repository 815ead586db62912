pub mod batch;
pub mod config;

use anyhow::Context;
use chrono::NaiveDate;
use clap::ValueEnum;
use config::{DesignOverrides, SnowprintConfig};
use render_item::SolidRecorder;
use serde::Serialize;
use snowflake::{
	date_seed, export_filename, DesignParameters, Pen, Prng, Snowflake, SnowflakeSummary,
};

/// Materials the playground paints with.
///
/// Black is what laser cutters expect in a raster export; white is for on-screen previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Material {
	#[default]
	White,
	Black,
}

/// One generated design, as printed by the playground.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnowprintReport {
	pub date: String,
	pub seed: i64,
	pub design: DesignParameters,
	pub material: Material,
	pub summary: SnowflakeSummary,
	pub export_filename: Option<String>,
}

/// What to generate for a single date.
#[derive(Debug, Clone, Default)]
pub struct SnowprintRequest {
	pub config: SnowprintConfig,
	/// Overrides from the command line, applied over the config file's.
	pub overrides: DesignOverrides,
	pub material: Material,
	/// How many times to vary the tick angle after deriving the design.
	pub vary: u32,
	pub export_extension: Option<String>,
}

impl SnowprintRequest {
	pub fn design_for(&self, prng: &mut Prng, date: NaiveDate) -> anyhow::Result<DesignParameters> {
		let derived = DesignParameters::from_date(prng, date)
			.with_context(|| format!("failed to derive design for {}", date))?;
		let overrides = self.overrides.clone().or(self.config.overrides.clone());
		let mut design = overrides.apply(derived);
		for _ in 0..self.vary {
			design.vary();
		}
		Ok(design)
	}

	/// Generates the design for `date` into a fresh recorder.
	pub fn generate(
		&self,
		date: NaiveDate,
	) -> anyhow::Result<(SnowprintReport, SolidRecorder<Material>)> {
		let mut prng = Prng::default();
		let design = self.design_for(&mut prng, date)?;

		let mut pen =
			Pen::from_config(&self.config.snowflake.pen, self.material, SolidRecorder::new());
		let snowflake = Snowflake::new(design, self.config.snowflake.radius);
		let summary = snowflake
			.create(&mut pen)
			.with_context(|| format!("failed to create snowflake for {}", date))?;

		let report = SnowprintReport {
			date: date.to_string(),
			seed: date_seed(date),
			export_filename: self
				.export_extension
				.as_deref()
				.map(|extension| export_filename(date, snowflake.design().angle, extension)),
			design: snowflake.design().clone(),
			material: self.material,
			summary,
		};
		Ok((report, pen.into_canvas()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use render_item::Scene;
	use snowflake::Pattern;

	fn date() -> NaiveDate {
		NaiveDate::from_ymd_opt(2023, 3, 18).unwrap()
	}

	#[test]
	fn test_generate_matches_report() {
		let request = SnowprintRequest::default();
		let (report, recorder) = request.generate(date()).unwrap();

		assert_eq!(report.seed, 20230318);
		assert_eq!(report.summary.solids, recorder.len());
		assert_eq!(report.export_filename, None);
		assert!(recorder.solids().iter().all(|solid| solid.material == Material::White));
	}

	#[test]
	fn test_cli_overrides_beat_config() {
		let mut request = SnowprintRequest::default();
		request.config.overrides.pattern = Some(Pattern::ReflectedFan);
		request.config.overrides.branches = Some(9);
		request.overrides.branches = Some(5);

		let (report, _) = request.generate(date()).unwrap();
		assert_eq!(report.design.pattern, Pattern::ReflectedFan);
		assert_eq!(report.design.branches, 5);
	}

	#[test]
	fn test_vary_and_export_name() {
		let request = SnowprintRequest {
			overrides: DesignOverrides { angle: Some(60.0), ..DesignOverrides::default() },
			vary: 2,
			export_extension: Some("stl".to_string()),
			..SnowprintRequest::default()
		};

		let (report, _) = request.generate(date()).unwrap();
		assert_eq!(report.design.angle, 70.0);
		assert_eq!(
			report.export_filename.as_deref(),
			Some("date20230318variant70.snowprint.stl")
		);
	}

	#[test]
	fn test_invalid_override_surfaces_error() {
		let request = SnowprintRequest {
			overrides: DesignOverrides { branches: Some(0), ..DesignOverrides::default() },
			..SnowprintRequest::default()
		};

		let error = request.generate(date()).unwrap_err();
		assert!(format!("{:#}", error).contains("branch count must be positive"));
	}
}
