use kalima_core::flow::{StudyFlow, StudyPhase};
use kalima_types::AppEvent;
use kanal::AsyncSender;

use super::{Command, send_status, show_current};

pub async fn handle_flashcards(
    flow: &mut StudyFlow,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    command: Command,
) -> anyhow::Result<()> {
    let StudyPhase::Lesson(stage) = flow.phase_mut() else {
        return Ok(());
    };

    match command {
        Command::Next => stage.deck.next(),
        Command::Previous => stage.deck.previous(),
        Command::Flip => stage.deck.flip(),
        _ => {
            return send_status(
                app_to_ui_tx,
                "Flashcards: :next, :prev, :flip, :practice or :quiz",
            )
            .await;
        }
    }

    show_current(flow, app_to_ui_tx).await
}
