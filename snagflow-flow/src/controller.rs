use tracing::{debug, warn};

use snagflow_types::{
    AnswerValue, Answers, GatewayError, Question, QuestionId, ReportId, SubmissionGateway,
    SubmissionRecord, SurveyDefinition,
};

/// Top-level lifecycle state of one flow session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The welcome screen; nothing recorded yet.
    NotStarted,
    /// A question is being shown.
    InProgress,
    /// The gateway call is outstanding.
    Submitting,
    /// The gateway accepted the record.
    Submitted,
}

/// What the primary control does at the current step.
///
/// The last question's forward action submits instead of advancing; this
/// lets the presentation label the control accordingly even though a
/// single `advance` call drives both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    Advance,
    Submit,
}

/// Result of a successful `advance` call.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    /// The advance gate was closed; nothing changed.
    Held,
    /// Moved to the question at this index.
    Step(usize),
    /// The terminal step completed and the submission was accepted.
    Submitted(ReportId),
}

/// Error type for flow operations.
///
/// Every error leaves the controller state exactly as it was, so a stale
/// or duplicated UI event can never corrupt a flow. Only `Submission`
/// carries a message meant for the reporter's eyes.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("Operation not allowed while the flow is {phase:?}")]
    InvalidPhase { phase: Phase },

    #[error("Cannot start a flow over a survey with no questions")]
    EmptySurvey,

    #[error("Question '{0}' is not part of this survey")]
    UnknownQuestion(QuestionId),

    #[error("Answer addressed to '{got}' but the current question is '{current}'")]
    NotCurrentQuestion { got: QuestionId, current: QuestionId },

    #[error("A {value} answer does not fit a {kind} question")]
    ShapeMismatch {
        value: &'static str,
        kind: &'static str,
    },

    #[error("Submission failed: {0}")]
    Submission(#[from] GatewayError),
}

/// Sequences the questions of one survey, gates advancement on the
/// current answer, and assembles the finished submission record.
///
/// One controller serves one flow: one reporter, one pass from start to
/// submission or abandonment. Operations run to completion on the
/// caller's thread; the only suspension point is the gateway call inside
/// the terminal `advance`. While that call is outstanding the controller
/// is exclusively borrowed, so no other operation can interleave with it.
#[derive(Debug)]
pub struct FlowController<G> {
    survey: SurveyDefinition,
    gateway: G,
    phase: Phase,
    current_step: usize,
    answers: Answers,
    report_id: Option<ReportId>,
}

impl<G> FlowController<G> {
    /// Create a controller over the given survey and gateway.
    pub fn new(survey: SurveyDefinition, gateway: G) -> Self {
        Self {
            survey,
            gateway,
            phase: Phase::NotStarted,
            current_step: 0,
            answers: Answers::new(),
            report_id: None,
        }
    }

    /// The survey this flow walks through.
    pub fn survey(&self) -> &SurveyDefinition {
        &self.survey
    }

    /// The gateway this flow submits to.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current step index. Meaningful while a question is shown or a
    /// submission for the last question is outstanding.
    pub fn current_step(&self) -> Option<usize> {
        match self.phase {
            Phase::InProgress | Phase::Submitting => Some(self.current_step),
            Phase::NotStarted | Phase::Submitted => None,
        }
    }

    /// The question at the current step.
    pub fn current_question(&self) -> Option<&Question> {
        self.current_step()
            .and_then(|index| self.survey.question_at(index))
    }

    /// The recorded answer for the current question, if any.
    pub fn current_answer(&self) -> Option<&AnswerValue> {
        self.current_question()
            .and_then(|question| self.answers.get(question.id()))
    }

    /// All answers recorded so far.
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// The number of steps in this flow.
    pub fn step_count(&self) -> usize {
        self.survey.len()
    }

    /// The report id, once a submission has been accepted.
    pub fn report_id(&self) -> Option<&ReportId> {
        self.report_id.as_ref()
    }

    /// What the forward control does right now: advance to the next
    /// question, or submit. `None` outside `InProgress`.
    pub fn next_action(&self) -> Option<NextAction> {
        match self.phase {
            Phase::InProgress if self.current_step + 1 == self.survey.len() => {
                Some(NextAction::Submit)
            }
            Phase::InProgress => Some(NextAction::Advance),
            _ => None,
        }
    }

    /// Whether the flow may advance past the current question.
    ///
    /// Pure predicate over the current question and the answer store:
    /// optional questions always pass; required ones need a usable answer
    /// (non-empty text, a selection, a set attachment). Re-derived on
    /// every call - the store can change between renders, so this is
    /// never cached.
    pub fn can_advance(&self) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };
        self.phase == Phase::InProgress
            && (!question.required() || self.answers.is_answered(question.id()))
    }

    /// Begin the flow: first question, empty answer store.
    pub fn start(&mut self) -> Result<(), FlowError> {
        if self.phase != Phase::NotStarted {
            return Err(FlowError::InvalidPhase { phase: self.phase });
        }
        if self.survey.is_empty() {
            return Err(FlowError::EmptySurvey);
        }
        self.phase = Phase::InProgress;
        self.current_step = 0;
        self.answers.clear();
        debug!(survey = self.survey.id(), "flow started");
        Ok(())
    }

    /// Record an answer for the currently shown question.
    ///
    /// Only the current question accepts writes: an answer addressed to
    /// any other id is rejected rather than misfiled. The value's shape
    /// must fit the question's kind; content (emptiness, length) is not
    /// checked here - that is the advance gate's job.
    pub fn record_answer(
        &mut self,
        id: &QuestionId,
        value: AnswerValue,
    ) -> Result<(), FlowError> {
        if self.phase != Phase::InProgress {
            return Err(FlowError::InvalidPhase { phase: self.phase });
        }
        if self.survey.question(id).is_none() {
            return Err(FlowError::UnknownQuestion(id.clone()));
        }
        let Some(current) = self.survey.question_at(self.current_step) else {
            return Err(FlowError::InvalidPhase { phase: self.phase });
        };
        if current.id() != id {
            return Err(FlowError::NotCurrentQuestion {
                got: id.clone(),
                current: current.id().clone(),
            });
        }
        if !value.fits(current.kind()) {
            return Err(FlowError::ShapeMismatch {
                value: value.type_name(),
                kind: current.kind().name(),
            });
        }
        self.answers.insert(id.clone(), value);
        Ok(())
    }

    /// Move back one question.
    ///
    /// Answers recorded for later steps are kept, so the reporter can move
    /// forward again without re-entering them. No-op at the first question
    /// or outside `InProgress`.
    pub fn retreat(&mut self) {
        if self.phase == Phase::InProgress && self.current_step > 0 {
            self.current_step -= 1;
        }
    }

    /// Reset the flow to its initial state: empty answer store, step zero,
    /// no report id.
    ///
    /// Disallowed while a submission is outstanding - a late gateway
    /// callback must never land on a reset flow.
    pub fn restart(&mut self) -> Result<(), FlowError> {
        if self.phase == Phase::Submitting {
            return Err(FlowError::InvalidPhase { phase: self.phase });
        }
        self.answers.clear();
        self.current_step = 0;
        self.report_id = None;
        self.phase = Phase::NotStarted;
        debug!(survey = self.survey.id(), "flow reset");
        Ok(())
    }
}

impl<G: SubmissionGateway> FlowController<G> {
    /// Advance past the current question, or submit at the last one.
    ///
    /// With the gate closed this is a defensive no-op returning
    /// `Progress::Held` - the presentation is expected to disable the
    /// control, but a stray call must not corrupt state. At the terminal
    /// step the same action assembles the submission record, moves the
    /// flow through `Submitting`, and awaits the gateway. On rejection the
    /// flow rolls back to the last question (not to the beginning), the
    /// attempt's report id is discarded, and the gateway's message is
    /// returned for display; there is no automatic retry.
    pub async fn advance(&mut self) -> Result<Progress, FlowError> {
        if self.phase != Phase::InProgress {
            return Err(FlowError::InvalidPhase { phase: self.phase });
        }
        if !self.can_advance() {
            debug!(step = self.current_step, "advance gate closed");
            return Ok(Progress::Held);
        }
        if self.current_step + 1 < self.survey.len() {
            self.current_step += 1;
            return Ok(Progress::Step(self.current_step));
        }
        self.submit().await
    }

    /// Terminal-step submission: fresh report id, one gateway call.
    async fn submit(&mut self) -> Result<Progress, FlowError> {
        let id = ReportId::generate();
        self.report_id = Some(id.clone());
        self.phase = Phase::Submitting;

        let record = SubmissionRecord::new(id.clone(), self.survey.id(), self.answers.clone());
        debug!(report_id = %id, survey = self.survey.id(), "submitting report");

        match self.gateway.submit(&record).await {
            Ok(()) => {
                self.phase = Phase::Submitted;
                Ok(Progress::Submitted(id))
            }
            Err(err) => {
                warn!(report_id = %id, error = %err, "submission rejected, returning to the last question");
                self.phase = Phase::InProgress;
                // The id from the failed attempt is discarded; the next
                // attempt draws a fresh one.
                self.report_id = None;
                Err(FlowError::Submission(err))
            }
        }
    }
}
