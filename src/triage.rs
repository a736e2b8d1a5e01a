//! Issue triage: the pure derivations behind the dashboard and the
//! admin list filters.
//!
//! Everything here is a function of an issue collection plus an
//! explicit `today` anchor; nothing reads the clock or the network.
//!
//! Date comparisons operate on the ISO 8601 strings the server sends,
//! never on parsed dates: date-only ISO strings sort lexicographically
//! in chronological order, and the server treats deadlines as plain
//! dates with no timezone. Normalizing through a date type would
//! change the semantics, so the strings are compared as-is.

use chrono::{Duration, NaiveDate};

use crate::issues::{IssueStatus, IssueSummary, Urgency};

/// How far ahead of today a deadline counts as approaching, in days
const DEADLINE_HORIZON_DAYS: i64 = 3;

/// Row cap of the dashboard's "approaching deadline" list
const APPROACHING_LIST_LIMIT: usize = 5;

/// Per-status tally over an issue collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub draft: usize,
    pub untouched: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl StatusCounts {
    /// Sum of all buckets; equals the input length since statuses are
    /// exhaustive
    pub fn total(&self) -> usize {
        self.draft + self.untouched + self.in_progress + self.completed + self.cancelled
    }
}

/// Tally issues by status
pub fn status_counts(issues: &[IssueSummary]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for issue in issues {
        match issue.status {
            IssueStatus::Draft => counts.draft += 1,
            IssueStatus::Untouched => counts.untouched += 1,
            IssueStatus::InProgress => counts.in_progress += 1,
            IssueStatus::Completed => counts.completed += 1,
            IssueStatus::Cancelled => counts.cancelled += 1,
        }
    }
    counts
}

/// The dashboard view model: KPI counts and alert lists derived from
/// one issue collection
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    /// Issues nobody has picked up
    pub untouched_count: usize,

    /// Issues being worked on
    pub in_progress_count: usize,

    /// Issues created on `today`'s calendar date
    pub new_today_count: usize,

    /// Open issues whose deadline falls within the horizon (or is
    /// already past), ascending by deadline
    pub deadline_issues: Vec<IssueSummary>,

    /// Open issues with high urgency, in server order
    pub high_urgency: Vec<IssueSummary>,

    /// The date the snapshot was derived against
    today: String,
}

impl DashboardSnapshot {
    /// Derive the dashboard from an issue collection.
    ///
    /// `today` anchors the "new today" count, the deadline horizon and
    /// the overdue flag; passing it explicitly keeps the derivation
    /// reproducible.
    pub fn derive(issues: &[IssueSummary], today: NaiveDate) -> Self {
        let today_str = today.format("%Y-%m-%d").to_string();
        let horizon = (today + Duration::days(DEADLINE_HORIZON_DAYS))
            .format("%Y-%m-%d")
            .to_string();

        let counts = status_counts(issues);

        let new_today_count = issues
            .iter()
            .filter(|i| i.created_at.starts_with(&today_str))
            .count();

        let mut deadline_issues: Vec<IssueSummary> = issues
            .iter()
            .filter(|i| i.status.is_open())
            .filter(|i| matches!(&i.desired_deadline, Some(d) if d.as_str() <= horizon.as_str()))
            .cloned()
            .collect();
        deadline_issues.sort_by(|a, b| a.desired_deadline.cmp(&b.desired_deadline));

        let high_urgency = issues
            .iter()
            .filter(|i| i.urgency == Urgency::High && i.status.is_open())
            .cloned()
            .collect();

        Self {
            untouched_count: counts.untouched,
            in_progress_count: counts.in_progress,
            new_today_count,
            deadline_issues,
            high_urgency,
            today: today_str,
        }
    }

    /// Number of open issues with a deadline within the horizon,
    /// including ones already past deadline
    pub fn deadline_count(&self) -> usize {
        self.deadline_issues.len()
    }

    /// The capped "approaching deadline" list shown on the dashboard
    pub fn approaching(&self) -> &[IssueSummary] {
        let n = self.deadline_issues.len().min(APPROACHING_LIST_LIMIT);
        &self.deadline_issues[..n]
    }

    /// Whether an issue from [`deadline_issues`](Self::deadline_issues)
    /// is already past its deadline
    pub fn is_overdue(&self, issue: &IssueSummary) -> bool {
        matches!(&issue.desired_deadline, Some(d) if d.as_str() < self.today.as_str())
    }
}

/// Conjunction of optional predicates over an issue collection.
///
/// An absent filter imposes no constraint. Applied synchronously over
/// the full in-memory set; the predicate logic lives here, away from
/// any view, so it can move server-side without changing its contract.
#[derive(Debug, Clone, Default)]
pub struct IssueFilter {
    /// Case-insensitive substring match against the company name
    pub company: Option<String>,

    /// Inclusive lower bound on the creation date (date-only, ISO)
    pub created_from: Option<String>,

    /// Inclusive upper bound on the creation date (date-only, ISO)
    pub created_to: Option<String>,

    /// Inclusive lower bound on the desired deadline
    pub deadline_from: Option<String>,

    /// Inclusive upper bound on the desired deadline
    pub deadline_to: Option<String>,

    /// Exact urgency match
    pub urgency: Option<Urgency>,

    /// Exact status match
    pub status: Option<IssueStatus>,
}

impl IssueFilter {
    /// Whether one issue passes every present predicate
    pub fn matches(&self, issue: &IssueSummary) -> bool {
        if let Some(company) = &self.company {
            let name = issue.company_name.as_deref().unwrap_or("");
            if !name.to_lowercase().contains(&company.to_lowercase()) {
                return false;
            }
        }

        // Date-only projection of the creation timestamp
        let created = date_part(&issue.created_at);
        if let Some(from) = &self.created_from {
            if created < from.as_str() {
                return false;
            }
        }
        if let Some(to) = &self.created_to {
            if created > to.as_str() {
                return false;
            }
        }

        if self.deadline_from.is_some() || self.deadline_to.is_some() {
            let deadline = match &issue.desired_deadline {
                Some(d) => d.as_str(),
                None => return false,
            };
            if let Some(from) = &self.deadline_from {
                if deadline < from.as_str() {
                    return false;
                }
            }
            if let Some(to) = &self.deadline_to {
                if deadline > to.as_str() {
                    return false;
                }
            }
        }

        if let Some(urgency) = self.urgency {
            if issue.urgency != urgency {
                return false;
            }
        }

        if let Some(status) = self.status {
            if issue.status != status {
                return false;
            }
        }

        true
    }

    /// Filter a collection, preserving input order
    pub fn apply<'a>(&self, issues: &'a [IssueSummary]) -> Vec<&'a IssueSummary> {
        issues.iter().filter(|i| self.matches(i)).collect()
    }
}

fn date_part(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::Category;

    fn issue(
        id: i64,
        status: IssueStatus,
        urgency: Urgency,
        created_at: &str,
        deadline: Option<&str>,
    ) -> IssueSummary {
        IssueSummary {
            id,
            issue_code: format!("REQ-2024-{:04}", id),
            title: format!("issue {}", id),
            status,
            category: Category::Texture,
            urgency,
            ball_holder: "UNITEC".to_string(),
            product_name: "product".to_string(),
            created_at: created_at.to_string(),
            desired_deadline: deadline.map(|d| d.to_string()),
            company_name: Some("Unitec Foods".to_string()),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn status_counts_sum_to_total() {
        let issues = vec![
            issue(1, IssueStatus::Draft, Urgency::Low, "2024-06-01T00:00:00", None),
            issue(2, IssueStatus::Untouched, Urgency::Middle, "2024-06-02T00:00:00", None),
            issue(3, IssueStatus::InProgress, Urgency::High, "2024-06-03T00:00:00", None),
            issue(4, IssueStatus::Completed, Urgency::Low, "2024-06-04T00:00:00", None),
            issue(5, IssueStatus::Cancelled, Urgency::Low, "2024-06-05T00:00:00", None),
            issue(6, IssueStatus::Untouched, Urgency::High, "2024-06-06T00:00:00", None),
        ];

        let counts = status_counts(&issues);
        assert_eq!(counts.total(), issues.len());
        assert_eq!(counts.untouched, 2);
        assert_eq!(counts.in_progress, 1);
    }

    #[test]
    fn deadline_within_three_days_is_included() {
        let issues = vec![
            issue(1, IssueStatus::Untouched, Urgency::Middle, "2024-06-01T09:00:00", Some("2024-06-12")),
            issue(2, IssueStatus::Untouched, Urgency::Middle, "2024-06-01T09:00:00", Some("2024-06-20")),
        ];

        let snapshot = DashboardSnapshot::derive(&issues, today());
        assert_eq!(snapshot.deadline_count(), 1);
        assert_eq!(snapshot.deadline_issues[0].id, 1);
    }

    #[test]
    fn past_deadline_is_included_and_overdue() {
        let issues = vec![issue(
            1,
            IssueStatus::InProgress,
            Urgency::Middle,
            "2024-05-20T09:00:00",
            Some("2024-06-05"),
        )];

        let snapshot = DashboardSnapshot::derive(&issues, today());
        assert_eq!(snapshot.deadline_count(), 1);
        assert!(snapshot.is_overdue(&snapshot.deadline_issues[0]));
    }

    #[test]
    fn deadline_on_today_is_not_overdue() {
        let issues = vec![issue(
            1,
            IssueStatus::Untouched,
            Urgency::Middle,
            "2024-06-01T09:00:00",
            Some("2024-06-10"),
        )];

        let snapshot = DashboardSnapshot::derive(&issues, today());
        assert_eq!(snapshot.deadline_count(), 1);
        assert!(!snapshot.is_overdue(&snapshot.deadline_issues[0]));
    }

    #[test]
    fn deadline_list_never_contains_closed_issues() {
        let issues = vec![
            issue(1, IssueStatus::Completed, Urgency::High, "2024-06-01T09:00:00", Some("2024-06-01")),
            issue(2, IssueStatus::Cancelled, Urgency::High, "2024-06-01T09:00:00", Some("2024-06-01")),
            issue(3, IssueStatus::Untouched, Urgency::High, "2024-06-01T09:00:00", Some("2024-06-01")),
            issue(4, IssueStatus::Untouched, Urgency::High, "2024-06-01T09:00:00", None),
        ];

        let snapshot = DashboardSnapshot::derive(&issues, today());
        assert_eq!(snapshot.deadline_count(), 1);
        assert_eq!(snapshot.deadline_issues[0].id, 3);
    }

    #[test]
    fn deadline_list_sorted_ascending_and_capped_at_five() {
        let deadlines = ["2024-06-09", "2024-06-05", "2024-06-11", "2024-06-08", "2024-06-10", "2024-06-07"];
        let issues: Vec<IssueSummary> = deadlines
            .iter()
            .enumerate()
            .map(|(n, d)| {
                issue(n as i64 + 1, IssueStatus::Untouched, Urgency::Middle, "2024-06-01T09:00:00", Some(d))
            })
            .collect();

        let snapshot = DashboardSnapshot::derive(&issues, today());
        assert_eq!(snapshot.deadline_count(), 6);
        assert_eq!(snapshot.approaching().len(), 5);

        let ordered: Vec<&str> = snapshot
            .deadline_issues
            .iter()
            .map(|i| i.desired_deadline.as_deref().unwrap())
            .collect();
        assert_eq!(
            ordered,
            vec!["2024-06-05", "2024-06-07", "2024-06-08", "2024-06-09", "2024-06-10", "2024-06-11"]
        );
    }

    #[test]
    fn high_urgency_keeps_server_order_and_skips_closed() {
        let issues = vec![
            issue(1, IssueStatus::Untouched, Urgency::High, "2024-06-01T09:00:00", None),
            issue(2, IssueStatus::Completed, Urgency::High, "2024-06-01T09:00:00", None),
            issue(3, IssueStatus::InProgress, Urgency::High, "2024-06-01T09:00:00", None),
            issue(4, IssueStatus::Untouched, Urgency::Middle, "2024-06-01T09:00:00", None),
        ];

        let snapshot = DashboardSnapshot::derive(&issues, today());
        let ids: Vec<i64> = snapshot.high_urgency.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn new_today_uses_prefix_of_created_at() {
        let issues = vec![
            issue(1, IssueStatus::Untouched, Urgency::Middle, "2024-06-10T08:30:00+09:00", None),
            issue(2, IssueStatus::Untouched, Urgency::Middle, "2024-06-09T23:59:59", None),
        ];

        let snapshot = DashboardSnapshot::derive(&issues, today());
        assert_eq!(snapshot.new_today_count, 1);
    }

    #[test]
    fn company_filter_is_case_insensitive_substring() {
        let issues = vec![issue(1, IssueStatus::Untouched, Urgency::Middle, "2024-06-01T09:00:00", None)];

        let filter = IssueFilter {
            company: Some("uni".to_string()),
            ..IssueFilter::default()
        };
        assert_eq!(filter.apply(&issues).len(), 1);

        let filter = IssueFilter {
            company: Some("acme".to_string()),
            ..IssueFilter::default()
        };
        assert!(filter.apply(&issues).is_empty());
    }

    #[test]
    fn created_range_is_inclusive_on_date_projection() {
        let issues = vec![
            issue(1, IssueStatus::Untouched, Urgency::Middle, "2024-06-01T23:00:00", None),
            issue(2, IssueStatus::Untouched, Urgency::Middle, "2024-06-03T00:00:00", None),
            issue(3, IssueStatus::Untouched, Urgency::Middle, "2024-06-05T01:00:00", None),
        ];

        let filter = IssueFilter {
            created_from: Some("2024-06-01".to_string()),
            created_to: Some("2024-06-03".to_string()),
            ..IssueFilter::default()
        };
        let ids: Vec<i64> = filter.apply(&issues).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn deadline_range_excludes_issues_without_deadline() {
        let issues = vec![
            issue(1, IssueStatus::Untouched, Urgency::Middle, "2024-06-01T09:00:00", Some("2024-06-15")),
            issue(2, IssueStatus::Untouched, Urgency::Middle, "2024-06-01T09:00:00", None),
        ];

        let filter = IssueFilter {
            deadline_from: Some("2024-06-10".to_string()),
            deadline_to: Some("2024-06-20".to_string()),
            ..IssueFilter::default()
        };
        let ids: Vec<i64> = filter.apply(&issues).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn absent_filters_impose_no_constraint() {
        let issues = vec![
            issue(1, IssueStatus::Draft, Urgency::Low, "2024-06-01T09:00:00", None),
            issue(2, IssueStatus::Completed, Urgency::High, "2024-06-02T09:00:00", Some("2024-06-30")),
        ];

        assert_eq!(IssueFilter::default().apply(&issues).len(), 2);
    }

    #[test]
    fn filters_combine_as_conjunction() {
        let mut high = issue(1, IssueStatus::Untouched, Urgency::High, "2024-06-01T09:00:00", None);
        high.company_name = Some("Sakura Confectionery".to_string());
        let issues = vec![
            high,
            issue(2, IssueStatus::Untouched, Urgency::High, "2024-06-01T09:00:00", None),
            issue(3, IssueStatus::InProgress, Urgency::High, "2024-06-01T09:00:00", None),
        ];

        let filter = IssueFilter {
            company: Some("unitec".to_string()),
            urgency: Some(Urgency::High),
            status: Some(IssueStatus::Untouched),
            ..IssueFilter::default()
        };
        let ids: Vec<i64> = filter.apply(&issues).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2]);
    }
}
