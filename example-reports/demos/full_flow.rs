//! Drive one complete reporting flow against the in-memory gateway.
//!
//! Run with: cargo run --example full_flow

use anyhow::Result;
use example_reports::maintenance_survey;
use snagflow_flow::{AnswerValue, FlowController, NextAction, Progress, TestGateway};

#[tokio::main]
async fn main() -> Result<()> {
    let gateway = TestGateway::new();
    let mut flow = FlowController::new(maintenance_survey(), gateway.clone());

    flow.start()?;

    let entries = [
        ("name", AnswerValue::Text("Alice".to_string())),
        ("category", AnswerValue::Choice("Staff".to_string())),
        ("location", AnswerValue::Text("Ward 3".to_string())),
        (
            "details",
            AnswerValue::Text("The ceiling AC unit is leaking water.".to_string()),
        ),
    ];

    for (id, value) in entries {
        let question = flow.current_question().expect("flow is in progress");
        println!("{} [{}]", question.prompt(), question.kind().name());
        flow.record_answer(&id.into(), value)?;
        flow.advance().await?;
    }

    // The photo step is optional; submit without one.
    assert_eq!(flow.next_action(), Some(NextAction::Submit));
    match flow.advance().await? {
        Progress::Submitted(report_id) => {
            println!("Thank you! Your report number is #{report_id}#");
        }
        other => println!("unexpected progress: {other:?}"),
    }

    println!("gateway now holds {} submission(s)", gateway.accepted_count());
    Ok(())
}
