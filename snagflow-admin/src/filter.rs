use snagflow_types::{AnswerValue, Report, ReportStatus};

/// Filter criteria for the triage board list.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    /// Free-text search. Matches the report id and any text-bearing
    /// answer. Empty matches everything.
    pub search: String,

    /// Restrict to one workflow status. `None` means all.
    pub status: Option<ReportStatus>,
}

impl ReportFilter {
    /// Check whether one report passes this filter.
    pub fn matches(&self, report: &Report) -> bool {
        let status_ok = self.status.is_none_or(|status| report.status == status);
        status_ok && (self.search.is_empty() || self.matches_search(report))
    }

    fn matches_search(&self, report: &Report) -> bool {
        if report.id.as_str().contains(&self.search) {
            return true;
        }
        report.answers.iter().any(|(_, value)| match value {
            AnswerValue::Text(s) | AnswerValue::Choice(s) => s.contains(&self.search),
            AnswerValue::Choices(list) => list.iter().any(|s| s.contains(&self.search)),
            AnswerValue::Rating(_) | AnswerValue::Date(_) | AnswerValue::Image(_) => false,
        })
    }
}

/// Apply a filter to a report list, keeping the input order.
pub fn filter_reports<'a>(reports: &'a [Report], filter: &ReportFilter) -> Vec<&'a Report> {
    reports
        .iter()
        .filter(|report| filter.matches(report))
        .collect()
}
