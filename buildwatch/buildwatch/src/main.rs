//! Priority and wait-time report for the farm's test slave pool.
//!
//! Expects `builds-running.js` and `builds-pending.js` snapshots on disk,
//! as fetched from buildapi's `builddata/buildjson` endpoint.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use buildwatch_report_service::{
	ReportServices,
	config::ReportConfig,
	priority::PriorityIndex,
	process::process_builds,
	render::{self, PENDING_TITLE, RUNNING_TITLE},
	snapshot,
};
use clap::Parser;
use time::OffsetDateTime;
use tracing::info;

#[derive(clap::Parser)]
struct Args {
	/// TOML file overriding the built-in report tables.
	#[arg(short, long)]
	config: Option<PathBuf>,
	#[arg(long, default_value = "builds-running.js")]
	running: PathBuf,
	#[arg(long, default_value = "builds-pending.js")]
	pending: PathBuf,
}

fn main() -> Result<()> {
	// force California times; must happen before any threads exist
	unsafe { std::env::set_var("TZ", "America/Los_Angeles") };

	let args = Args::parse();

	tracing::subscriber::set_global_default(
		tracing_subscriber::FmtSubscriber::builder()
			.with_max_level(tracing::Level::INFO)
			.finish(),
	)?;

	let config = match &args.config {
		Some(path) => {
			let config = toml::from_str::<ReportConfig>(&fs::read_to_string(path)?)?;
			info!("loaded configuration from file: {:?}", path);
			config
		}
		None => ReportConfig::default(),
	};
	let services = ReportServices::new(config)?;

	// one timestamp for every duration in this report
	let now = OffsetDateTime::now_utc().unix_timestamp();

	let running = snapshot::load_running(&args.running)
		.with_context(|| format!("loading {}", args.running.display()))?;
	let pending = snapshot::load_pending(&args.pending)
		.with_context(|| format!("loading {}", args.pending.display()))?;

	let mut priorities = PriorityIndex::new(&services.config);
	for branch in running.keys().chain(pending.keys()) {
		priorities.adopt_unlisted(branch.as_str());
	}

	let running = process_builds(&running, &priorities, &services.relevance, now);
	let pending = process_builds(&pending, &priorities, &services.relevance, now);

	println!();
	print!("{}", render::render_legend(&priorities));
	println!();
	print!("{}", render::render_table(RUNNING_TITLE, running));
	println!();
	print!("{}", render::render_table(PENDING_TITLE, pending));

	Ok(())
}
