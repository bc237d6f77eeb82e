//! Integration tests for snagflow-flow

use snagflow_flow::{
    AnswerValue, Attachment, ChoiceQuestion, FlowController, FlowError, NextAction, Phase,
    Progress, Question, QuestionKind, RatingQuestion, SurveyDefinition, TestGateway,
};

/// The shape of the fixed maintenance deployment: four required questions
/// followed by an optional photo.
fn maintenance_like_survey() -> SurveyDefinition {
    SurveyDefinition::new(
        "maintenance",
        "Maintenance report",
        vec![
            Question::new("name", "Your name:", QuestionKind::ShortText),
            Question::new(
                "category",
                "Reporter category:",
                QuestionKind::SingleChoice(ChoiceQuestion::new(["Staff", "Visitor"])),
            ),
            Question::new("location", "Location:", QuestionKind::ShortText),
            Question::new("details", "Details:", QuestionKind::LongText),
            Question::new("image", "Attach a photo:", QuestionKind::Image).optional(),
        ],
    )
    .unwrap()
}

fn photo() -> Attachment {
    Attachment::File {
        file_name: "leak.jpg".to_string(),
        media_type: "image/jpeg".to_string(),
        data: vec![0xff, 0xd8, 0xff],
    }
}

/// Drive a flow up to (but not past) the terminal step.
async fn answer_first_four(flow: &mut FlowController<TestGateway>) {
    flow.start().unwrap();
    flow.record_answer(&"name".into(), "Alice".into()).unwrap();
    flow.advance().await.unwrap();
    flow.record_answer(&"category".into(), AnswerValue::Choice("Staff".into()))
        .unwrap();
    flow.advance().await.unwrap();
    flow.record_answer(&"location".into(), "Ward 3".into())
        .unwrap();
    flow.advance().await.unwrap();
    flow.record_answer(&"details".into(), "AC unit is leaking water.".into())
        .unwrap();
    flow.advance().await.unwrap();
}

#[tokio::test]
async fn step_index_stays_in_bounds() {
    let mut flow = FlowController::new(maintenance_like_survey(), TestGateway::new());
    answer_first_four(&mut flow).await;
    assert_eq!(flow.current_step(), Some(4));

    // Retreating at the first step does nothing.
    flow.retreat();
    flow.retreat();
    flow.retreat();
    flow.retreat();
    assert_eq!(flow.current_step(), Some(0));
    flow.retreat();
    assert_eq!(flow.current_step(), Some(0));

    // The gate is open (photo is optional) but the index never passes the
    // last question; the terminal advance submits instead.
    for _ in 0..4 {
        flow.advance().await.unwrap();
    }
    assert_eq!(flow.current_step(), Some(4));
    assert!(flow.can_advance());
    let progress = flow.advance().await.unwrap();
    assert!(matches!(progress, Progress::Submitted(_)));
    assert_eq!(flow.phase(), Phase::Submitted);
}

#[tokio::test]
async fn advance_is_held_while_required_answer_is_missing() {
    let mut flow = FlowController::new(maintenance_like_survey(), TestGateway::new());
    flow.start().unwrap();

    assert!(!flow.can_advance());
    assert_eq!(flow.advance().await.unwrap(), Progress::Held);
    assert_eq!(flow.current_step(), Some(0));

    // An empty string is not a usable answer either.
    flow.record_answer(&"name".into(), "".into()).unwrap();
    assert!(!flow.can_advance());

    flow.record_answer(&"name".into(), "Alice".into()).unwrap();
    assert!(flow.can_advance());
}

#[tokio::test]
async fn gate_covers_every_question_kind() {
    let survey = SurveyDefinition::new(
        "kinds",
        "All kinds",
        vec![
            Question::new("short", "Short:", QuestionKind::ShortText),
            Question::new("long", "Long:", QuestionKind::LongText),
            Question::new(
                "single",
                "Pick one:",
                QuestionKind::SingleChoice(ChoiceQuestion::new(["a", "b"])),
            ),
            Question::new(
                "multi",
                "Pick any:",
                QuestionKind::MultiChoice(ChoiceQuestion::new(["a", "b"])),
            ),
            Question::new("stars", "Rate:", QuestionKind::Rating(RatingQuestion::new())),
            Question::new("when", "When:", QuestionKind::Date),
            Question::new("image", "Photo:", QuestionKind::Image),
        ],
    )
    .unwrap();
    let mut flow = FlowController::new(survey, TestGateway::new());
    flow.start().unwrap();

    let date = chrono::NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
    let filled: [(&str, AnswerValue); 7] = [
        ("short", "text".into()),
        ("long", "more text".into()),
        ("single", AnswerValue::Choice("a".into())),
        ("multi", AnswerValue::Choices(vec!["a".into(), "b".into()])),
        ("stars", AnswerValue::Rating(4)),
        ("when", AnswerValue::Date(date)),
        ("image", photo().into()),
    ];

    for (id, value) in filled {
        assert!(!flow.can_advance(), "gate open before answering '{id}'");
        flow.record_answer(&id.into(), value).unwrap();
        assert!(flow.can_advance(), "gate closed after answering '{id}'");
        flow.advance().await.unwrap();
    }
    assert_eq!(flow.phase(), Phase::Submitted);
}

#[tokio::test]
async fn empty_selection_does_not_open_the_gate() {
    let survey = SurveyDefinition::new(
        "multi",
        "Multi",
        vec![Question::new(
            "multi",
            "Pick any:",
            QuestionKind::MultiChoice(ChoiceQuestion::new(["a", "b"])),
        )],
    )
    .unwrap();
    let mut flow = FlowController::new(survey, TestGateway::new());
    flow.start().unwrap();

    flow.record_answer(&"multi".into(), AnswerValue::Choices(Vec::new()))
        .unwrap();
    assert!(!flow.can_advance());
}

#[tokio::test]
async fn retreat_keeps_later_answers() {
    let mut flow = FlowController::new(maintenance_like_survey(), TestGateway::new());
    flow.start().unwrap();
    flow.record_answer(&"name".into(), "Alice".into()).unwrap();
    flow.advance().await.unwrap();
    flow.record_answer(&"category".into(), AnswerValue::Choice("Staff".into()))
        .unwrap();

    flow.retreat();
    assert_eq!(flow.current_step(), Some(0));
    assert!(flow.answers().is_answered(&"category".into()));

    // Moving forward again needs no re-entry.
    assert_eq!(flow.advance().await.unwrap(), Progress::Step(1));
    assert_eq!(
        flow.current_answer().and_then(AnswerValue::as_choice),
        Some("Staff")
    );
}

#[tokio::test]
async fn optional_photo_may_stay_unset() {
    let gateway = TestGateway::new();
    let mut flow = FlowController::new(maintenance_like_survey(), gateway.clone());
    answer_first_four(&mut flow).await;

    // At the photo step with nothing recorded: optional, so the gate is
    // open and the action is a submit.
    assert!(flow.can_advance());
    assert_eq!(flow.next_action(), Some(NextAction::Submit));

    let progress = flow.advance().await.unwrap();
    let Progress::Submitted(report_id) = progress else {
        panic!("expected submission, got {progress:?}");
    };
    assert_eq!(flow.report_id(), Some(&report_id));

    let accepted = gateway.accepted();
    assert_eq!(accepted.len(), 1);
    let record = &accepted[0];
    assert_eq!(record.id, report_id);
    assert_eq!(record.survey_id, "maintenance");
    assert_eq!(record.answers.get_text(&"name".into()).unwrap(), "Alice");
    // No photo answer in the snapshot; the gateway persists a null
    // attachment reference.
    assert!(!record.answers.is_answered(&"image".into()));
}

#[tokio::test]
async fn explicitly_cleared_photo_submits_as_null() {
    let gateway = TestGateway::new();
    let mut flow = FlowController::new(maintenance_like_survey(), gateway.clone());
    answer_first_four(&mut flow).await;

    flow.record_answer(&"image".into(), AnswerValue::Image(None))
        .unwrap();
    flow.advance().await.unwrap();

    let record = &gateway.accepted()[0];
    assert_eq!(record.answers.get_attachment(&"image".into()).unwrap(), None);
}

#[tokio::test]
async fn report_id_is_seven_digits() {
    let gateway = TestGateway::new();
    let mut flow = FlowController::new(maintenance_like_survey(), gateway.clone());
    answer_first_four(&mut flow).await;
    flow.advance().await.unwrap();

    let id = flow.report_id().unwrap();
    assert_eq!(id.as_str().len(), 7);
    assert!(id.as_str().bytes().all(|b| b.is_ascii_digit()));
    let n: u32 = id.as_str().parse().unwrap();
    assert!((1_000_000..=9_999_999).contains(&n));
}

#[tokio::test]
async fn rejected_submission_rolls_back_to_the_last_question() {
    let gateway = TestGateway::new().fail_next(1, "insert failed");
    let mut flow = FlowController::new(maintenance_like_survey(), gateway.clone());
    answer_first_four(&mut flow).await;

    let err = flow.advance().await.unwrap_err();
    let FlowError::Submission(gateway_err) = &err else {
        panic!("expected a submission error, got {err:?}");
    };
    assert!(gateway_err.message().contains("insert failed"));

    // Rolled back to the last step, not to the beginning, with the failed
    // attempt's id discarded and all answers intact.
    assert_eq!(flow.phase(), Phase::InProgress);
    assert_eq!(flow.current_step(), Some(4));
    assert_eq!(flow.report_id(), None);
    assert!(flow.answers().is_answered(&"details".into()));
    assert_eq!(gateway.accepted_count(), 0);

    // The manual retry draws a fresh id and succeeds.
    let progress = flow.advance().await.unwrap();
    assert!(matches!(progress, Progress::Submitted(_)));
    assert_eq!(flow.phase(), Phase::Submitted);
    assert_eq!(gateway.accepted_count(), 1);
}

#[tokio::test]
async fn operations_reject_stale_events_after_submission() {
    let mut flow = FlowController::new(maintenance_like_survey(), TestGateway::new());
    answer_first_four(&mut flow).await;
    flow.advance().await.unwrap();
    assert_eq!(flow.phase(), Phase::Submitted);

    // A duplicated click or stale input event cannot disturb a finished
    // flow.
    assert!(matches!(
        flow.record_answer(&"name".into(), "Bob".into()),
        Err(FlowError::InvalidPhase { .. })
    ));
    assert!(matches!(
        flow.advance().await,
        Err(FlowError::InvalidPhase { .. })
    ));
    flow.retreat();
    assert_eq!(flow.phase(), Phase::Submitted);
    assert!(!flow.can_advance());
}

#[tokio::test]
async fn restart_resets_everything() {
    let mut flow = FlowController::new(maintenance_like_survey(), TestGateway::new());
    answer_first_four(&mut flow).await;
    flow.advance().await.unwrap();
    assert_eq!(flow.phase(), Phase::Submitted);

    flow.restart().unwrap();
    assert_eq!(flow.phase(), Phase::NotStarted);
    assert_eq!(flow.current_step(), None);
    assert_eq!(flow.report_id(), None);
    assert!(flow.answers().is_empty());

    // The flow is reusable after a restart.
    flow.start().unwrap();
    assert_eq!(flow.current_step(), Some(0));
}

#[tokio::test]
async fn restart_mid_flow_clears_answers() {
    let mut flow = FlowController::new(maintenance_like_survey(), TestGateway::new());
    flow.start().unwrap();
    flow.record_answer(&"name".into(), "Alice".into()).unwrap();
    flow.advance().await.unwrap();

    flow.restart().unwrap();
    assert!(flow.answers().is_empty());
    assert_eq!(flow.phase(), Phase::NotStarted);
}
