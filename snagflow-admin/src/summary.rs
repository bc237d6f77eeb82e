use std::fmt::Write;

use snagflow_types::{AnswerValue, Report, SurveyDefinition};

/// Render a plain-text summary of one report, as pasted into chat tools
/// or onto a printed work order.
///
/// One line per answered question in step order, then the workflow
/// status, the date, and - when the report carries one - the photo link.
pub fn clipboard_text(survey: &SurveyDefinition, report: &Report) -> String {
    let mut text = format!("Maintenance report #{}#\n", report.id);
    for question in survey.questions() {
        let Some(value) = report.answers.get(question.id()) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        if let AnswerValue::Image(Some(attachment)) = value {
            if let Some(link) = attachment.url() {
                let _ = writeln!(text, "Photo: {link}");
            }
            continue;
        }
        let _ = writeln!(text, "{} {}", question.prompt(), answer_line(value));
    }
    let _ = writeln!(text, "Status: {}", report.status);
    let _ = write!(
        text,
        "Date: {}",
        report.created_at.format("%Y-%m-%d %H:%M")
    );
    if !report.internal_notes.is_empty() {
        let _ = write!(text, "\nNotes: {}", report.internal_notes);
    }
    text
}

fn answer_line(value: &AnswerValue) -> String {
    match value {
        AnswerValue::Text(s) | AnswerValue::Choice(s) => s.clone(),
        AnswerValue::Choices(list) => list.join(", "),
        AnswerValue::Rating(r) => format!("{r}"),
        AnswerValue::Date(d) => d.to_string(),
        AnswerValue::Image(_) => String::new(),
    }
}
