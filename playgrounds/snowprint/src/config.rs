use anyhow::Context;
use serde::{Deserialize, Serialize};
use snowflake::{DesignParameters, Pattern, Shape, SnowflakeConfig};
use std::path::Path;

/// Design values pinned by the user instead of drawn from the date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignOverrides {
	pub pattern: Option<Pattern>,
	pub shape: Option<Shape>,
	pub curvature: Option<f64>,
	pub curve_at: Option<f64>,
	pub branches: Option<u32>,
	pub subbranches: Option<u32>,
	pub angle: Option<f64>,
}

impl DesignOverrides {
	/// Keeps every value set here and fills the gaps from `fallback`.
	pub fn or(self, fallback: DesignOverrides) -> Self {
		Self {
			pattern: self.pattern.or(fallback.pattern),
			shape: self.shape.or(fallback.shape),
			curvature: self.curvature.or(fallback.curvature),
			curve_at: self.curve_at.or(fallback.curve_at),
			branches: self.branches.or(fallback.branches),
			subbranches: self.subbranches.or(fallback.subbranches),
			angle: self.angle.or(fallback.angle),
		}
	}

	pub fn apply(&self, mut design: DesignParameters) -> DesignParameters {
		if let Some(pattern) = self.pattern {
			design.pattern = pattern;
		}
		if let Some(shape) = self.shape {
			design.shape = shape;
		}
		if let Some(curvature) = self.curvature {
			design.curvature = curvature;
		}
		if let Some(curve_at) = self.curve_at {
			design.curve_at = curve_at;
		}
		if let Some(branches) = self.branches {
			design.branches = branches;
		}
		if let Some(subbranches) = self.subbranches {
			design.subbranches = subbranches;
		}
		if let Some(angle) = self.angle {
			design.angle = angle;
		}
		design
	}
}

/// Contents of a `snowprint.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowprintConfig {
	#[serde(flatten)]
	pub snowflake: SnowflakeConfig,
	pub overrides: DesignOverrides,
}

impl SnowprintConfig {
	pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
		toml::from_str(contents).context("invalid snowprint config")
	}

	pub fn load(path: &Path) -> anyhow::Result<Self> {
		let contents = std::fs::read_to_string(path)
			.with_context(|| format!("failed to read config {}", path.display()))?;
		let config = Self::from_toml_str(&contents)?;
		log::info!("Loaded config from {}", path.display());
		Ok(config)
	}
}
