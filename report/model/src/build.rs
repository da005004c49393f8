use kstring::KString;
use serde::{Deserialize, Serialize};

/// A single build as it appears in a farm snapshot.
///
/// Snapshot records carry many more fields than the report consumes;
/// unknown fields are ignored on deserialization.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct BuildRecord {
	/// Pretty builder name, as reported by buildapi.
	pub buildername: KString,
	/// Epoch seconds when the build was submitted to the queue.
	pub submitted_at: i64,
	/// Epoch seconds when the build started.
	///
	/// Pending builds carry no value.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub start_time: Option<i64>,
}

impl BuildRecord {
	/// Seconds this build has spent in the queue, relative to `now`.
	pub fn wait_secs(&self, now: i64) -> i64 {
		now - self.submitted_at
	}

	/// Seconds this build has been executing, relative to `now`.
	///
	/// A build that has not started yet reports zero run time.
	pub fn run_secs(&self, now: i64) -> i64 {
		match self.start_time {
			Some(start) => now - start,
			None => 0,
		}
	}
}
