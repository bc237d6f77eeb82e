use std::collections::HashMap;

use chrono::{DateTime, Utc};

use snagflow_types::{AnswerValue, QuestionId, Report};

/// Count how often each value was recorded for one question.
///
/// Multi-choice selections count each picked option individually.
/// Unanswered and empty values are skipped. Sorted by count descending,
/// then by value, so the output is stable.
pub fn tally(reports: &[Report], question: &QuestionId) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for report in reports {
        let Some(value) = report.answers.get(question) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        match value {
            AnswerValue::Choices(list) => {
                for choice in list {
                    *counts.entry(choice.clone()).or_default() += 1;
                }
            }
            other => {
                *counts.entry(value_key(other)).or_default() += 1;
            }
        }
    }
    let mut tallied: Vec<(String, usize)> = counts.into_iter().collect();
    tallied.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tallied
}

/// The `n` most frequent values for one question.
pub fn top_answers(reports: &[Report], question: &QuestionId, n: usize) -> Vec<(String, usize)> {
    let mut tallied = tally(reports, question);
    tallied.truncate(n);
    tallied
}

/// The latest `n` text answers for one question, newest first.
pub fn recent_texts<'a>(
    reports: &'a [Report],
    question: &QuestionId,
    n: usize,
) -> Vec<(&'a str, DateTime<Utc>)> {
    let mut texts: Vec<(&str, DateTime<Utc>)> = reports
        .iter()
        .filter_map(|report| {
            let text = report.answers.get(question)?.as_text()?;
            (!text.is_empty()).then_some((text, report.created_at))
        })
        .collect();
    texts.sort_by_key(|(_, at)| std::cmp::Reverse(*at));
    texts.truncate(n);
    texts
}

fn value_key(value: &AnswerValue) -> String {
    match value {
        AnswerValue::Text(s) | AnswerValue::Choice(s) => s.clone(),
        AnswerValue::Rating(r) => r.to_string(),
        AnswerValue::Date(d) => d.to_string(),
        AnswerValue::Choices(list) => list.join("; "),
        AnswerValue::Image(_) => String::new(),
    }
}
