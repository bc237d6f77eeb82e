use chrono::{Duration, Utc};

use snagflow_flow::{
    AnswerValue, Answers, Attachment, ChoiceQuestion, NotificationConfig, Question, QuestionKind,
    Report, ReportId, ReportPriority, ReportStatus, SurveyDefinition, SurveyTheme,
};

/// The deployed maintenance-report survey.
///
/// Five steps: reporter identity, reporter category, location, free-text
/// details, and an optional photo.
pub fn maintenance_survey() -> SurveyDefinition {
    let questions = vec![
        Question::new("name", "Your name:", QuestionKind::ShortText),
        Question::new(
            "category",
            "Reporter category:",
            QuestionKind::SingleChoice(ChoiceQuestion::new(["Staff", "Visitor"])),
        ),
        Question::new(
            "location",
            "Department or location of the issue:",
            QuestionKind::ShortText,
        ),
        Question::new("details", "Report details:", QuestionKind::LongText),
        Question::new("image", "Attach a photo of the issue:", QuestionKind::Image)
            .optional()
            .with_description("(optional)"),
    ];

    SurveyDefinition::new("maintenance_request_fixed", "Maintenance report", questions)
        .expect("question ids are unique")
        .with_description("Facility maintenance reporting")
        .with_theme(SurveyTheme {
            primary_color: "#22d3ee".to_string(),
            font: "El Messiri".to_string(),
        })
        .with_notifications(NotificationConfig {
            enabled: true,
            recipients: "telegram".to_string(),
            notify_on_critical: true,
        })
}

/// Demo reports for dashboard previews when no backend is configured.
pub fn seed_reports() -> Vec<Report> {
    vec![
        Report {
            id: ReportId::parse("8507294").expect("valid seed id"),
            survey_id: "maintenance_request_fixed".to_string(),
            answers: answers([
                ("name", AnswerValue::Text("Ahmed M.".to_string())),
                ("category", AnswerValue::Choice("Staff".to_string())),
                (
                    "location",
                    AnswerValue::Text("Emergency ward, room 3".to_string()),
                ),
                (
                    "details",
                    AnswerValue::Text(
                        "The ceiling AC unit is dripping; water is pooling on the floor."
                            .to_string(),
                    ),
                ),
                (
                    "image",
                    AnswerValue::Image(Some(Attachment::Url(
                        "https://images.example.com/leak-photo.jpg".to_string(),
                    ))),
                ),
            ]),
            created_at: Utc::now() - Duration::minutes(30),
            status: ReportStatus::New,
            priority: ReportPriority::Normal,
            internal_notes: String::new(),
        },
        Report {
            id: ReportId::parse("9211051").expect("valid seed id"),
            survey_id: "maintenance_request_fixed".to_string(),
            answers: answers([
                ("name", AnswerValue::Text("Khalid A.".to_string())),
                ("category", AnswerValue::Choice("Visitor".to_string())),
                (
                    "location",
                    AnswerValue::Text("South parking lot".to_string()),
                ),
                (
                    "details",
                    AnswerValue::Text(
                        "The lights along the walkway to the main entrance are out.".to_string(),
                    ),
                ),
                ("image", AnswerValue::Image(None)),
            ]),
            created_at: Utc::now() - Duration::hours(2),
            status: ReportStatus::New,
            priority: ReportPriority::Normal,
            internal_notes: String::new(),
        },
    ]
}

fn answers<const N: usize>(pairs: [(&str, AnswerValue); N]) -> Answers {
    let mut answers = Answers::new();
    for (id, value) in pairs {
        answers.insert(id, value);
    }
    answers
}
