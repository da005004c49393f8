use std::collections::BTreeMap;

use kstring::KString;
use tracing::info;

use crate::config::ReportConfig;

/// Branch-priority table inverted into per-priority branch buckets.
///
/// Built once per report run; branches observed in a snapshot but
/// missing from the configured table are adopted into the default
/// bucket before processing starts.
#[derive(Debug)]
pub struct PriorityIndex {
	buckets: BTreeMap<u16, Vec<KString>>,
	default_priority: u16,
}

impl PriorityIndex {
	pub fn new(config: &ReportConfig) -> Self {
		let mut buckets: BTreeMap<u16, Vec<KString>> = BTreeMap::new();
		for (branch, priority) in &config.branch_priorities {
			buckets.entry(*priority).or_default().push(branch.clone());
		}
		// the default bucket must exist even if no configured branch
		// uses the default priority
		buckets.entry(config.default_branch_priority).or_default();

		Self {
			buckets,
			default_priority: config.default_branch_priority,
		}
	}

	/// Whether a branch is present in any priority bucket.
	pub fn contains(&self, branch: &str) -> bool {
		self.buckets
			.values()
			.any(|bucket| bucket.iter().any(|known| known == branch))
	}

	/// Adds an unlisted branch to the default-priority bucket.
	///
	/// Returns whether the branch was adopted; branches already in the
	/// index are left untouched.
	pub fn adopt_unlisted(&mut self, branch: &str) -> bool {
		if self.contains(branch) {
			return false;
		}
		info!(
			"defaulting to priority {} for branch {}",
			self.default_priority, branch
		);
		self.buckets
			.entry(self.default_priority)
			.or_default()
			.push(KString::from_ref(branch));
		true
	}

	/// Buckets in ascending priority order.
	pub fn buckets(&self) -> impl Iterator<Item = (u16, &[KString])> {
		self.buckets
			.iter()
			.map(|(priority, branches)| (*priority, branches.as_slice()))
	}
}

#[cfg(test)]
mod test {
	use std::collections::BTreeSet;

	use super::PriorityIndex;
	use crate::{config::ReportConfig, test::test_config};

	#[test]
	fn test_every_branch_lands_in_one_bucket() {
		let config = ReportConfig::default();
		let index = PriorityIndex::new(&config);

		let mut seen = BTreeSet::new();
		for (_, branches) in index.buckets() {
			for branch in branches {
				assert!(seen.insert(branch.clone()), "{branch} in two buckets");
			}
		}
		let configured: BTreeSet<_> =
			config.branch_priorities.keys().cloned().collect();
		assert_eq!(seen, configured);
	}

	#[test]
	fn test_adopt_unlisted_defaults_once() {
		let mut index = PriorityIndex::new(&test_config());
		assert!(!index.contains("birch"));
		assert!(index.adopt_unlisted("birch"));
		// a branch seen in both snapshots is only adopted once
		assert!(!index.adopt_unlisted("birch"));
		assert!(index.contains("birch"));

		let (_, defaults) = index
			.buckets()
			.find(|(priority, _)| *priority == 2)
			.unwrap();
		assert!(defaults.iter().any(|branch| branch == "birch"));
	}

	#[test]
	fn test_default_bucket_created_when_absent() {
		// no configured branch sits at the default priority
		let mut config = test_config();
		config.branch_priorities =
			[("mozilla-release".into(), 0)].into_iter().collect();
		let mut index = PriorityIndex::new(&config);

		assert!(index.adopt_unlisted("date"));
		let (_, defaults) = index
			.buckets()
			.find(|(priority, _)| *priority == 2)
			.unwrap();
		assert_eq!(defaults, ["date"]);
	}

	#[test]
	fn test_buckets_ascend() {
		let index = PriorityIndex::new(&ReportConfig::default());
		let priorities: Vec<u16> =
			index.buckets().map(|(priority, _)| priority).collect();
		assert_eq!(priorities, [0, 1, 2, 3, 4, 5]);
	}
}
