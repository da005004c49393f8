use std::{fs, path::Path};

use buildwatch_report_model::snapshot::{
	PendingSnapshot, RunningSnapshot, SnapshotMap,
};

use crate::Result;

/// Loads a `builds-running.js` snapshot from disk.
pub fn load_running(path: &Path) -> Result<SnapshotMap> {
	let snapshot: RunningSnapshot = serde_json::from_str(&fs::read_to_string(path)?)?;
	Ok(snapshot.running)
}

/// Loads a `builds-pending.js` snapshot from disk.
pub fn load_pending(path: &Path) -> Result<SnapshotMap> {
	let snapshot: PendingSnapshot = serde_json::from_str(&fs::read_to_string(path)?)?;
	Ok(snapshot.pending)
}
