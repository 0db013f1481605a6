//! Fix plan aggregation across test outcomes.
//!
//! Buckets suggestions from failed checks into immediate, short-term and
//! long-term work, deduplicated in first-seen order.

use crate::report::Report;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Outcome of one functional check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
    Error,
}

impl TestStatus {
    /// Failed checks and checks that could not run both need fixing
    pub fn needs_fix(&self) -> bool {
        matches!(self, TestStatus::Failed | TestStatus::Error)
    }
}

/// Feature category under test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureType {
    UiComponent,
    ApiEndpoint,
    UserInteraction,
    Integration,
    Performance,
    Accessibility,
}

impl FeatureType {
    pub fn is_critical(&self) -> bool {
        matches!(self, FeatureType::Integration | FeatureType::ApiEndpoint)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    pub name: String,
    pub feature: FeatureType,
    pub status: TestStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<f64>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl TestOutcome {
    pub fn new(name: impl Into<String>, feature: FeatureType, status: TestStatus) -> Self {
        Self {
            name: name.into(),
            feature,
            status,
            description: String::new(),
            error_message: None,
            execution_time: None,
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = suggestions.into_iter().map(Into::into).collect();
        self
    }

    /// Outcome whose suggestions come from a diagnosis report
    pub fn from_report(
        name: impl Into<String>,
        feature: FeatureType,
        status: TestStatus,
        report: &Report,
    ) -> Self {
        let mut outcome = Self::new(name, feature, status)
            .with_suggestions(report.suggested_solutions.iter().cloned());
        outcome.error_message = Some(report.message.clone());
        outcome
    }
}

/// Suggestions grouped by urgency
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixPlan {
    pub immediate: Vec<String>,
    pub short_term: Vec<String>,
    pub long_term: Vec<String>,
}

impl FixPlan {
    /// Integration failures feed `immediate` (2 each), API endpoint failures
    /// `short_term` (2 each), anything else `long_term` (1 each).
    pub fn from_outcomes(outcomes: &[TestOutcome]) -> Self {
        let mut plan = FixPlan::default();

        for outcome in outcomes.iter().filter(|o| o.status.needs_fix()) {
            let (bucket, take) = match outcome.feature {
                FeatureType::Integration => (&mut plan.immediate, 2),
                FeatureType::ApiEndpoint => (&mut plan.short_term, 2),
                _ => (&mut plan.long_term, 1),
            };
            bucket.extend(outcome.suggestions.iter().take(take).cloned());
        }

        dedup_in_order(&mut plan.immediate);
        dedup_in_order(&mut plan.short_term);
        dedup_in_order(&mut plan.long_term);
        plan
    }

    pub fn is_empty(&self) -> bool {
        self.immediate.is_empty() && self.short_term.is_empty() && self.long_term.is_empty()
    }
}

fn dedup_in_order(items: &mut Vec<String>) {
    let mut seen = HashSet::new();
    items.retain(|item| seen.insert(item.clone()));
}

/// Counts by status
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestSummary {
    pub total_tests: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub skipped: usize,
    /// Percentage rounded to two decimals (ties to even), 0 with no tests
    pub success_rate: f64,
}

impl TestSummary {
    pub fn from_outcomes(outcomes: &[TestOutcome]) -> Self {
        let count = |status: TestStatus| outcomes.iter().filter(|o| o.status == status).count();
        let total = outcomes.len();
        let passed = count(TestStatus::Passed);
        let success_rate = if total == 0 {
            0.0
        } else {
            (passed as f64 / total as f64 * 100.0 * 100.0).round_ties_even() / 100.0
        };

        Self {
            total_tests: total,
            passed,
            failed: count(TestStatus::Failed),
            errors: count(TestStatus::Error),
            skipped: count(TestStatus::Skipped),
            success_rate,
        }
    }
}

/// Names of failing checks on integration or API features
pub fn critical_issues(outcomes: &[TestOutcome]) -> Vec<String> {
    outcomes
        .iter()
        .filter(|o| o.status.needs_fix() && o.feature.is_critical())
        .map(|o| o.name.clone())
        .collect()
}

/// General advice tiered by how many checks failed
pub fn recommendations(failed_count: usize) -> Vec<String> {
    let items: &[&str] = match failed_count {
        0 => &[
            "All tests passed! Your application is in good shape",
            "Consider adding more comprehensive tests",
            "Implement performance monitoring",
            "Add integration tests for user workflows",
        ],
        1..=2 => &[
            "Minor issues detected - easy to fix",
            "Focus on the failed tests first",
            "Most functionality is working correctly",
        ],
        _ => &[
            "Multiple critical issues detected",
            "Prioritize integration and API fixes",
            "Consider implementing a CI/CD pipeline",
            "Add automated testing to prevent regressions",
        ],
    };
    items.iter().map(|s| s.to_string()).collect()
}

/// Run-level next steps
pub const RUN_NEXT_STEPS: [&str; 6] = [
    "Address critical integration issues first",
    "Fix API endpoint configurations",
    "Resolve TypeScript and linting errors",
    "Implement missing components",
    "Add comprehensive error handling",
    "Set up proper testing infrastructure",
];

/// Everything known about one test run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRunReport {
    pub test_summary: TestSummary,
    pub detailed_results: Vec<TestOutcome>,
    pub failed_features: Vec<String>,
    pub critical_issues: Vec<String>,
    pub fix_plan: FixPlan,
    pub recommendations: Vec<String>,
    pub next_steps: Vec<String>,
}

impl TestRunReport {
    pub fn from_outcomes(outcomes: Vec<TestOutcome>) -> Self {
        let test_summary = TestSummary::from_outcomes(&outcomes);
        let failed_features = outcomes
            .iter()
            .filter(|o| o.status.needs_fix())
            .map(|o| o.name.clone())
            .collect();

        Self {
            critical_issues: critical_issues(&outcomes),
            fix_plan: FixPlan::from_outcomes(&outcomes),
            recommendations: recommendations(test_summary.failed),
            next_steps: RUN_NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
            test_summary,
            failed_features,
            detailed_results: outcomes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_first_seen() {
        let mut items = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        dedup_in_order(&mut items);
        assert_eq!(items, vec!["b", "a"]);
    }

    #[test]
    fn test_success_rate_rounding() {
        let outcomes = vec![
            TestOutcome::new("a", FeatureType::UiComponent, TestStatus::Passed),
            TestOutcome::new("b", FeatureType::UiComponent, TestStatus::Failed),
            TestOutcome::new("c", FeatureType::UiComponent, TestStatus::Skipped),
        ];
        let summary = TestSummary::from_outcomes(&outcomes);
        assert_eq!(summary.success_rate, 33.33);
        assert_eq!(TestSummary::from_outcomes(&[]).success_rate, 0.0);

        // 3.125 sits exactly on the tie and goes to the even neighbour
        let mut outcomes = vec![TestOutcome::new(
            "ok",
            FeatureType::UiComponent,
            TestStatus::Passed,
        )];
        outcomes.extend((0..31).map(|i| {
            TestOutcome::new(format!("bad{i}"), FeatureType::UiComponent, TestStatus::Failed)
        }));
        assert_eq!(TestSummary::from_outcomes(&outcomes).success_rate, 3.12);
    }

    #[test]
    fn test_recommendation_tiers() {
        assert_eq!(recommendations(0).len(), 4);
        assert_eq!(recommendations(2).len(), 3);
        assert_eq!(recommendations(3)[0], "Multiple critical issues detected");
    }
}
