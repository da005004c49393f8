//! Services turning build farm snapshots into a wait-time report.

use std::sync::Arc;

use config::ReportConfig;
use relevance::RelevanceFilter;
use thiserror::Error;

pub mod config;
pub mod priority;
pub mod process;
pub mod relevance;
pub mod render;
pub mod snapshot;

/// Service container for report generation.
///
/// All services are wrapped with [`Arc`].
#[derive(Debug, Clone)]
pub struct ReportServices {
	pub config: Arc<ReportConfig>,
	pub relevance: Arc<RelevanceFilter>,
}

impl ReportServices {
	pub fn new(config: ReportConfig) -> Result<Self> {
		let config = Arc::new(config);
		let relevance = Arc::new(RelevanceFilter::new(&config.relevant_builders)?);

		Ok(Self { config, relevance })
	}
}

/// Report errors.
#[derive(Debug, Error)]
pub enum ReportError {
	#[error("JSON error: {0}")]
	JsonError(#[from] serde_json::Error),
	#[error("I/O error: {0}")]
	IoError(#[from] std::io::Error),
	#[error("builder pattern error: {0}")]
	PatternError(#[from] regex::Error),
}

/// A specialized [`Result`] for report errors.
pub type Result<T, E = ReportError> = std::result::Result<T, E>;

#[cfg(test)]
pub(crate) mod test {
	use crate::*;

	/// A trimmed branch table with one branch per interesting priority.
	pub fn test_config() -> ReportConfig {
		ReportConfig {
			branch_priorities: [
				("mozilla-release".into(), 0),
				("mozilla-beta".into(), 2),
				("mozilla-central".into(), 3),
				("try".into(), 4),
			]
			.into_iter()
			.collect(),
			..ReportConfig::default()
		}
	}

	pub fn test_services() -> ReportServices {
		ReportServices::new(ReportConfig::default()).unwrap()
	}

	#[test]
	fn test_init_services() {
		let services = test_services();
		assert!(services.relevance.is_relevant("Rev3 Fedora 12 foo"));
	}
}
