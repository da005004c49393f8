use buildwatch_report_model::{report::ReportRow, snapshot::SnapshotMap};

use crate::{priority::PriorityIndex, relevance::RelevanceFilter};

/// Flattens a snapshot into report rows.
///
/// Walks priorities in ascending order, then branches within a bucket,
/// then revisions, then builds; branches without queued builds are
/// skipped. Only builds from relevant builders are emitted. All
/// durations are relative to the single `now` captured at startup.
pub fn process_builds(
	builds: &SnapshotMap,
	index: &PriorityIndex,
	relevance: &RelevanceFilter,
	now: i64,
) -> Vec<ReportRow> {
	let mut rows = Vec::new();
	for (priority, branches) in index.buckets() {
		for branch in branches {
			let Some(revisions) = builds.get(branch) else {
				continue;
			};
			for (revision, revision_builds) in revisions {
				for build in revision_builds {
					if !relevance.is_relevant(&build.buildername) {
						continue;
					}
					rows.push(ReportRow {
						priority,
						wait_secs: build.wait_secs(now),
						run_secs: build.run_secs(now),
						branch: branch.clone(),
						revision: revision.clone(),
						builder: build.buildername.clone(),
					});
				}
			}
		}
	}
	rows
}
