use kalima_core::error::FlowError;
use kalima_core::flow::{StudyFlow, StudyPhase};
use kalima_types::{AnswerView, AppEvent};
use kanal::AsyncSender;

use super::{Command, results_view, send_status, show_current};

pub async fn handle_quiz(
    flow: &mut StudyFlow,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    command: Command,
) -> anyhow::Result<()> {
    let StudyPhase::Quiz(quiz) = flow.phase_mut() else {
        return Ok(());
    };

    match command {
        Command::Text(text) => {
            let Some(option) = text.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) else {
                return send_status(app_to_ui_tx, "Answer with the option number").await;
            };

            let outcome = match quiz.answer(option) {
                Ok(outcome) => outcome,
                Err(e @ (FlowError::OptionOutOfRange { .. } | FlowError::AlreadyAnswered)) => {
                    return send_status(app_to_ui_tx, e.to_string()).await;
                }
                Err(e) => return Err(e.into()),
            };

            let correct_option = quiz
                .current_question()
                .and_then(|q| q.correct_option())
                .unwrap_or_default()
                .to_string();

            app_to_ui_tx
                .send(AppEvent::ShowAnswer(AnswerView {
                    correct: outcome.correct,
                    correct_option,
                    explanation: outcome.explanation,
                }))
                .await?;
        }
        Command::Next => {
            tracing::debug!("Question {} skipped", quiz.position());
        }
        _ => {
            return send_status(app_to_ui_tx, "Quiz: type the option number, :next to skip").await;
        }
    }

    if quiz.advance() {
        return show_current(flow, app_to_ui_tx).await;
    }

    let results = flow.finish_quiz()?;
    tracing::info!(
        "Quiz finished: {}/{} ({}%)",
        results.correct,
        results.total,
        results.percentage
    );
    app_to_ui_tx
        .send(AppEvent::ShowResults(results_view(&results)))
        .await?;

    Ok(())
}
