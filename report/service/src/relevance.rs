use regex::RegexSet;

use crate::Result;

/// Filters builds down to the builders the report covers.
#[derive(Debug)]
pub struct RelevanceFilter {
	patterns: RegexSet,
}

impl RelevanceFilter {
	pub fn new(patterns: &[String]) -> Result<Self> {
		Ok(Self {
			patterns: RegexSet::new(patterns)?,
		})
	}

	/// Whether a builder name matches at least one relevance pattern.
	pub fn is_relevant(&self, buildername: &str) -> bool {
		self.patterns.is_match(buildername)
	}
}

#[cfg(test)]
mod test {
	use super::RelevanceFilter;
	use crate::{ReportError, test::test_services};

	#[test]
	fn test_fedora_test_slaves() {
		let services = test_services();
		assert!(services.relevance.is_relevant("Rev3 Fedora 12 foo"));
		assert!(
			services
				.relevance
				.is_relevant("Rev3 Fedora 12 mozilla-central opt test mochitests-1/5")
		);
		// anchored at the start of the name
		assert!(!services.relevance.is_relevant("not Rev3 Fedora 12 foo"));
	}

	#[test]
	fn test_jetpack_excludes_fedora64() {
		let services = test_services();
		assert!(services.relevance.is_relevant("jetpack-foo-fedora"));
		assert!(services.relevance.is_relevant("jetpack-foo-fedora-opt"));
		assert!(!services.relevance.is_relevant("jetpack-foo-fedora64"));
	}

	#[test]
	fn test_b2g_is_case_insensitive() {
		let services = test_services();
		assert!(
			services
				.relevance
				.is_relevant("b2g_emulator_vm opt test-crashtest")
		);
		assert!(
			services
				.relevance
				.is_relevant("B2G_emulator_vm OPT TEST-crashtest")
		);
	}

	#[test]
	fn test_unrelated_builder() {
		let services = test_services();
		assert!(!services.relevance.is_relevant("unrelated-builder"));
	}

	#[test]
	fn test_malformed_pattern_is_an_error() {
		let result = RelevanceFilter::new(&["(unclosed".to_string()]);
		assert!(matches!(result, Err(ReportError::PatternError(_))));
	}
}
