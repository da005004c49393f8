use std::collections::BTreeMap;

use kstring::KString;
use serde::{Deserialize, Serialize};

/// Builder name patterns for the test slave pool covered by the report.
///
/// Patterns are anchored at the start of the name, matching buildapi's
/// own relevancy check. The regex crate has no lookaround, so the
/// jetpack fedora64 exclusion is written out as explicit alternatives.
const RELEVANT_BUILDERS: &[&str] = &[
	"^Rev3 Fedora 12 .+",
	"^jetpack-.*-fedora($|[^6]|6$|6[^4])",
	"(?i)^b2g_.+(opt|debug) test.+",
];

/// Branch priority table from the buildmaster configuration.
///
/// Branches missing from this table default to [`DEFAULT_BRANCH_PRIORITY`].
const BRANCH_PRIORITIES: &[(&str, u16)] = &[
	("mozilla-central", 3),
	("comm-central", 3),
	("mozilla-aurora", 3),
	("comm-aurora", 3),
	("mozilla-beta", 2),
	("comm-beta", 2),
	("mozilla-release", 0),
	("comm-release", 0),
	("mozilla-esr10", 1),
	("mozilla-esr17", 1),
	("mozilla-b2g18", 1),
	("mozilla-b2g18_v1_0_0", 1),
	("comm-esr10", 1),
	("comm-esr17", 1),
	("try", 4),
	("try-comm-central", 4),
	("alder", 5),
	("ash", 5),
	("birch", 5),
	("cedar", 5),
	("date", 5),
	("elm", 5),
	("fig", 5),
	("gum", 5),
	("holly", 5),
	("jamun", 5),
	("larch", 5),
	("maple", 5),
	("oak", 5),
	("pine", 5),
];

pub const DEFAULT_BRANCH_PRIORITY: u16 = 2;

const BUILDER_PRIORITIES: &[(&str, u16)] = &[("b2g(-debug)?_test", 50)];

const DEFAULT_BUILDER_WEIGHT: u16 = 100;

/// Configuration tables for the report generator.
///
/// The built-in defaults reproduce the buildmaster's tables; a TOML
/// config file may override individual tables.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ReportConfig {
	/// Regex patterns selecting the builders worth reporting on.
	pub relevant_builders: Vec<String>,
	/// Priority per branch name; lower values are more urgent.
	pub branch_priorities: BTreeMap<KString, u16>,
	/// Priority assigned to branches missing from the table.
	pub default_branch_priority: u16,
	/// Per-builder dispatch weights.
	///
	/// Matched against master-side builder names when dispatching; the
	/// report ranks rows by branch priority only and does not consult
	/// this table.
	pub builder_priorities: Vec<BuilderPriority>,
}

#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BuilderPriority {
	pub pattern: String,
	#[serde(default = "default_builder_weight")]
	pub weight: u16,
}

fn default_builder_weight() -> u16 {
	DEFAULT_BUILDER_WEIGHT
}

impl Default for ReportConfig {
	fn default() -> Self {
		Self {
			relevant_builders: RELEVANT_BUILDERS
				.iter()
				.map(|pattern| pattern.to_string())
				.collect(),
			branch_priorities: BRANCH_PRIORITIES
				.iter()
				.map(|&(branch, priority)| (KString::from_static(branch), priority))
				.collect(),
			default_branch_priority: DEFAULT_BRANCH_PRIORITY,
			builder_priorities: BUILDER_PRIORITIES
				.iter()
				.map(|(pattern, weight)| BuilderPriority {
					pattern: pattern.to_string(),
					weight: *weight,
				})
				.collect(),
		}
	}
}
