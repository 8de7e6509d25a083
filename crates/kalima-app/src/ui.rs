use std::io::Write;

use kalima_types::AppEvent;
use kanal::AsyncReceiver;

/// Terminal renderer for session events
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    loop {
        let event = app_to_ui_rx.recv().await?;
        if matches!(event, AppEvent::SessionEnded) {
            println!("Goodbye.");
            return Ok(());
        }

        if let Some(text) = render(&event) {
            println!("{text}");
            std::io::stdout().flush()?;
        }
    }
}

/// Text shown for an event, `None` for events with nothing to display
pub fn render(event: &AppEvent) -> Option<String> {
    let text = match event {
        AppEvent::StatusUpdate(message) => message.clone(),
        AppEvent::ShowCard(card) => {
            let mut text = format!(
                "[{}/{}] {}  ({})",
                card.position, card.total, card.arabic, card.transliteration
            );
            if let Some(english) = &card.english {
                text.push_str(&format!("\n      = {english}"));
            }
            text
        }
        AppEvent::ShowFeedback(feedback) => format!(
            "{} [{}] score {} (best {})\n  expected: {}\n  heard:    {}",
            feedback.tier, feedback.color, feedback.score, feedback.best, feedback.reference, feedback.attempt
        ),
        AppEvent::ShowQuestion(question) => {
            let mut text = format!("Q{}/{}: {}", question.position, question.total, question.question);
            for (i, option) in question.options.iter().enumerate() {
                text.push_str(&format!("\n  {}. {}", i + 1, option));
            }
            text
        }
        AppEvent::ShowAnswer(answer) => {
            let mut text = if answer.correct {
                "Correct!".to_string()
            } else {
                format!("Wrong, the answer is: {}", answer.correct_option)
            };
            if let Some(explanation) = &answer.explanation {
                text.push_str(&format!("\n  {explanation}"));
            }
            text
        }
        AppEvent::ShowResults(results) => format!(
            "Quiz results: {}/{} correct ({}%). Type :restart to study again or :quit.",
            results.correct, results.total, results.percentage
        ),
        AppEvent::TextInput(_) | AppEvent::Transcript(_) | AppEvent::SessionEnded => return None,
    };

    Some(text)
}
