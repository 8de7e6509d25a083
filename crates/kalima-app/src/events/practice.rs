use kalima_core::flow::{LessonMode, StudyFlow, StudyPhase};
use kalima_core::practice::PracticeSession;
use kalima_types::{AppEvent, FeedbackView, Transcript};
use kanal::AsyncSender;

use super::{Command, send_status};
use crate::state::AppState;

/// Line asking the learner to say the current item
pub fn prompt_text(practice: &PracticeSession) -> String {
    match practice.current() {
        Some(item) => format!(
            "[{}/{}] Say: {} ({}) - {}",
            practice.position(),
            practice.len(),
            item.reference,
            item.transliteration,
            item.english
        ),
        None => "Practice complete. Type :quiz to take the quiz or :cards to review.".to_string(),
    }
}

pub async fn handle_practice(
    state: &AppState,
    flow: &mut StudyFlow,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    command: Command,
) -> anyhow::Result<()> {
    match command {
        Command::Text(text) => {
            handle_transcript(state, flow, app_to_ui_tx, &Transcript::Final(text)).await
        }
        Command::Next => {
            let StudyPhase::Lesson(stage) = flow.phase_mut() else {
                return Ok(());
            };
            stage.practice.next();
            let prompt = prompt_text(&stage.practice);
            send_status(app_to_ui_tx, prompt).await
        }
        _ => send_status(app_to_ui_tx, "Practice: say (type) the phrase, :next to skip, :cards or :quiz").await,
    }
}

/// Score a transcript against the current practice item
///
/// Ignored outside practice mode; interim transcripts never reach the scorer.
pub async fn handle_transcript(
    state: &AppState,
    flow: &mut StudyFlow,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    transcript: &Transcript,
) -> anyhow::Result<()> {
    if !transcript.is_final() {
        tracing::trace!("Interim transcript: {}", transcript.text());
        return Ok(());
    }

    let StudyPhase::Lesson(stage) = flow.phase_mut() else {
        tracing::debug!("Transcript outside lesson phase ignored");
        return Ok(());
    };
    if stage.mode != LessonMode::Practice {
        tracing::debug!("Transcript outside practice mode ignored");
        return Ok(());
    }

    let Some(reference) = stage.practice.current().map(|item| item.reference.clone()) else {
        return send_status(app_to_ui_tx, prompt_text(&stage.practice)).await;
    };

    let Some(feedback) = stage.practice.submit(state.processor.as_ref(), transcript) else {
        return Ok(());
    };

    tracing::info!("Pronunciation score {} ({})", feedback.score, feedback.tier.as_str());
    app_to_ui_tx
        .send(AppEvent::ShowFeedback(FeedbackView {
            reference,
            attempt: transcript.text().to_string(),
            score: feedback.score,
            best: feedback.best,
            tier: feedback.tier.as_str().to_string(),
            color: feedback.tier.color().to_string(),
        }))
        .await?;

    Ok(())
}
