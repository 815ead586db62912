use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use snowflake::{Pattern, Shape};
use snowprint_playground::{
	batch,
	config::{DesignOverrides, SnowprintConfig},
	Material, SnowprintRequest,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Prints the date-seeded snowflake designs as JSON lines.
#[derive(Debug, Parser)]
#[command(name = "snowprint", version)]
struct Cli {
	/// First date to generate (YYYY-MM-DD); defaults to today.
	#[arg(long)]
	date: Option<NaiveDate>,

	/// Number of consecutive days to generate.
	#[arg(long, default_value_t = 1)]
	days: u32,

	/// TOML file with radius, pen and override settings.
	#[arg(long)]
	config: Option<PathBuf>,

	#[arg(long, value_enum, default_value_t = Material::White)]
	material: Material,

	/// Turn the ticks by 5 degrees this many times.
	#[arg(long, default_value_t = 0)]
	vary: u32,

	/// Report the export filename for this extension (e.g. stl, png).
	#[arg(long)]
	export: Option<String>,

	/// Pattern index, 0 to 3.
	#[arg(long)]
	pattern: Option<u8>,

	/// Shape index: 0 triangle, 1 rectangle.
	#[arg(long)]
	shape: Option<u8>,

	#[arg(long, allow_negative_numbers = true)]
	curvature: Option<f64>,

	#[arg(long)]
	curve_at: Option<f64>,

	#[arg(long)]
	branches: Option<u32>,

	#[arg(long)]
	subbranches: Option<u32>,

	#[arg(long)]
	angle: Option<f64>,
}

impl Cli {
	fn overrides(&self) -> anyhow::Result<DesignOverrides> {
		Ok(DesignOverrides {
			pattern: self.pattern.map(Pattern::try_from).transpose()?,
			shape: self.shape.map(Shape::try_from).transpose()?,
			curvature: self.curvature,
			curve_at: self.curve_at,
			branches: self.branches,
			subbranches: self.subbranches,
			angle: self.angle,
		})
	}
}

fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.with_writer(std::io::stderr)
		.init();

	let cli = Cli::parse();

	let config = match &cli.config {
		Some(path) => SnowprintConfig::load(path)?,
		None => SnowprintConfig::default(),
	};
	let request = SnowprintRequest {
		config,
		overrides: cli.overrides()?,
		material: cli.material,
		vary: cli.vary,
		export_extension: cli.export.clone(),
	};

	let start = cli.date.unwrap_or_else(|| chrono::Local::now().date_naive());
	let dates = batch::dates_from(start, cli.days);

	for report in batch::generate_all(&request, &dates)? {
		println!("{}", serde_json::to_string(&report).context("failed to serialize report")?);
	}

	Ok(())
}
