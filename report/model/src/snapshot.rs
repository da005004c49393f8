//! On-disk shapes of the farm's build snapshots.

use std::collections::BTreeMap;

use kstring::KString;
use serde::{Deserialize, Serialize};

use crate::build::BuildRecord;

/// Builds per revision, keyed by branch name.
pub type SnapshotMap = BTreeMap<KString, BranchBuilds>;

/// Ordered builds, keyed by revision identifier.
pub type BranchBuilds = BTreeMap<KString, Vec<BuildRecord>>;

/// Top-level document of `builds-running.js`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct RunningSnapshot {
	pub running: SnapshotMap,
}

/// Top-level document of `builds-pending.js`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct PendingSnapshot {
	pub pending: SnapshotMap,
}
