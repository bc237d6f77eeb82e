use snagflow_types::{AnswerValue, Report, SurveyDefinition};

/// Build a CSV export of the given reports.
///
/// Columns: `Report ID`, `Status`, `Date`, one column per question prompt
/// in step order, then `Notes`. The output starts with a UTF-8 BOM so
/// spreadsheet tools detect the encoding for non-Latin content.
pub fn to_csv(survey: &SurveyDefinition, reports: &[Report]) -> String {
    let mut header: Vec<String> = vec![
        "Report ID".to_string(),
        "Status".to_string(),
        "Date".to_string(),
    ];
    header.extend(survey.questions().iter().map(|q| q.prompt().to_string()));
    header.push("Notes".to_string());

    let mut lines = vec![join_row(&header)];
    for report in reports {
        let mut row: Vec<String> = vec![
            format!("{}#", report.id),
            report.status.label().to_string(),
            report.created_at.format("%Y-%m-%d").to_string(),
        ];
        for question in survey.questions() {
            let cell = report
                .answers
                .get(question.id())
                .map(answer_cell)
                .unwrap_or_default();
            row.push(cell);
        }
        row.push(report.internal_notes.clone());
        lines.push(join_row(&row));
    }

    format!("\u{feff}{}", lines.join("\n"))
}

fn answer_cell(value: &AnswerValue) -> String {
    match value {
        AnswerValue::Text(s) | AnswerValue::Choice(s) => s.clone(),
        AnswerValue::Choices(list) => list.join("; "),
        AnswerValue::Rating(r) => r.to_string(),
        AnswerValue::Date(d) => d.to_string(),
        AnswerValue::Image(Some(attachment)) => attachment
            .url()
            .or(attachment.file_name())
            .unwrap_or_default()
            .to_string(),
        AnswerValue::Image(None) => String::new(),
    }
}

fn join_row(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| escape_cell(cell))
        .collect::<Vec<_>>()
        .join(",")
}

/// Quote a cell when it contains a separator, a quote, or a line break.
fn escape_cell(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use snagflow_types::{
        Answers, Question, QuestionKind, Report, ReportId, ReportPriority, ReportStatus,
    };

    fn survey() -> SurveyDefinition {
        SurveyDefinition::new(
            "maintenance",
            "Maintenance report",
            vec![
                Question::new("name", "Your name:", QuestionKind::ShortText),
                Question::new("details", "Details:", QuestionKind::LongText),
            ],
        )
        .unwrap()
    }

    fn report(details: &str) -> Report {
        let mut answers = Answers::new();
        answers.insert("name", "Alice");
        answers.insert("details", details);
        Report {
            id: ReportId::parse("8507294").unwrap(),
            survey_id: "maintenance".to_string(),
            answers,
            created_at: Utc::now(),
            status: ReportStatus::New,
            priority: ReportPriority::Normal,
            internal_notes: String::new(),
        }
    }

    #[test]
    fn starts_with_bom_and_header() {
        let csv = to_csv(&survey(), &[]);
        assert!(csv.starts_with('\u{feff}'));
        assert!(csv.contains("Report ID,Status,Date,Your name:,Details:,Notes"));
    }

    #[test]
    fn rows_follow_question_order() {
        let csv = to_csv(&survey(), &[report("AC unit is leaking water.")]);
        let data_line = csv.lines().nth(1).unwrap();
        assert_eq!(
            data_line.split(',').next().unwrap(),
            "8507294#",
        );
        assert!(data_line.ends_with("Alice,AC unit is leaking water.,"));
    }

    #[test]
    fn quotes_and_commas_are_escaped() {
        let csv = to_csv(&survey(), &[report("said \"urgent\", twice")]);
        assert!(csv.contains("\"said \"\"urgent\"\", twice\""));
    }
}
