use std::sync::Arc;

use kalima_core::flow::{LessonMode, StudyFlow, StudyPhase};
use kalima_core::quiz::{QuizResults, QuizSession};
use kalima_types::{AppEvent, CardView, QuestionView, ResultsView};
use kanal::{AsyncReceiver, AsyncSender};

use crate::state::AppState;

pub mod flashcards;
pub mod practice;
pub mod quiz;

use flashcards::handle_flashcards;
use practice::{handle_practice, handle_transcript};
use quiz::handle_quiz;

pub const HELP: &str = "\
Commands: :next (or empty line)  :prev  :flip  :practice  :cards  :quiz  :restart  :help  :quit
In practice mode type what you said; in the quiz type the option number.";

/// Learner command parsed from a typed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Flip,
    Practice,
    Cards,
    Quiz,
    Restart,
    Help,
    Quit,
    Text(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed {
            "" | ":n" | ":next" => Command::Next,
            ":p" | ":prev" => Command::Previous,
            ":f" | ":flip" => Command::Flip,
            ":s" | ":practice" => Command::Practice,
            ":c" | ":cards" => Command::Cards,
            ":quiz" => Command::Quiz,
            ":r" | ":restart" => Command::Restart,
            ":h" | ":help" => Command::Help,
            ":q" | ":quit" => Command::Quit,
            _ => Command::Text(trimmed.to_string()),
        }
    }
}

/// Study session loop
pub async fn event_loop(
    state: Arc<AppState>,
    mut flow: StudyFlow,
    input_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    app_to_ui_tx.send(AppEvent::StatusUpdate(HELP.to_string())).await?;
    show_current(&flow, &app_to_ui_tx).await?;

    tracing::info!("[EVENT_LOOP] Starting study loop, waiting for input");
    loop {
        let event = input_rx.recv().await?;

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );
        if !handle_events(&state, &mut flow, &app_to_ui_tx, event).await? {
            break;
        }
    }

    tracing::info!("[EVENT_LOOP] Study session ended");
    app_to_ui_tx.send(AppEvent::SessionEnded).await?;
    Ok(())
}

/// Returns false when the session should end
async fn handle_events(
    state: &AppState,
    flow: &mut StudyFlow,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<bool> {
    match event {
        AppEvent::TextInput(line) => {
            let command = Command::parse(&line);
            tracing::debug!("Command in {} phase: {:?}", flow.phase().name(), command);
            handle_command(state, flow, app_to_ui_tx, command).await
        }
        AppEvent::Transcript(transcript) => {
            handle_transcript(state, flow, app_to_ui_tx, &transcript).await?;
            Ok(true)
        }
        _ => {
            // UI-only events, ignore in backend
            Ok(true)
        }
    }
}

async fn handle_command(
    state: &AppState,
    flow: &mut StudyFlow,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    command: Command,
) -> anyhow::Result<bool> {
    match command {
        Command::Quit => return Ok(false),
        Command::Help => {
            let feedback = state.config.read().await.feedback;
            let help = format!(
                "{HELP}\nScores: {}+ excellent, {}+ good try",
                feedback.favorable, feedback.intermediate
            );
            send_status(app_to_ui_tx, help).await?;
            return Ok(true);
        }
        _ => {}
    }

    let mode = match flow.phase() {
        StudyPhase::Lesson(stage) => Some(stage.mode),
        _ => None,
    };

    match flow.phase() {
        StudyPhase::Lesson(_) => match command {
            Command::Practice => {
                flow.set_mode(LessonMode::Practice)?;
                show_current(flow, app_to_ui_tx).await?;
            }
            Command::Cards => {
                flow.set_mode(LessonMode::Flashcards)?;
                show_current(flow, app_to_ui_tx).await?;
            }
            Command::Quiz => match flow.start_quiz() {
                Ok(()) => show_current(flow, app_to_ui_tx).await?,
                Err(e) => send_status(app_to_ui_tx, e.to_string()).await?,
            },
            command => {
                if mode == Some(LessonMode::Practice) {
                    handle_practice(state, flow, app_to_ui_tx, command).await?;
                } else {
                    handle_flashcards(flow, app_to_ui_tx, command).await?;
                }
            }
        },
        StudyPhase::Quiz(_) => handle_quiz(flow, app_to_ui_tx, command).await?,
        StudyPhase::Results(_) | StudyPhase::Error(_) => {
            if command == Command::Restart {
                restart_lesson(flow)?;
                show_current(flow, app_to_ui_tx).await?;
            } else {
                send_status(app_to_ui_tx, "Type :restart to study again or :quit").await?;
            }
        }
        StudyPhase::Setup | StudyPhase::Loading => {
            send_status(app_to_ui_tx, "No lesson loaded").await?;
        }
    }

    Ok(true)
}

/// Study the same lesson again from the first flashcard
fn restart_lesson(flow: &mut StudyFlow) -> anyhow::Result<()> {
    let lesson = flow.lesson().cloned();
    flow.restart()?;

    if let Some(lesson) = lesson {
        flow.begin_loading()?;
        flow.lesson_ready(lesson)?;
    }

    Ok(())
}

pub async fn send_status(
    app_to_ui_tx: &AsyncSender<AppEvent>,
    message: impl Into<String>,
) -> anyhow::Result<()> {
    app_to_ui_tx.send(AppEvent::StatusUpdate(message.into())).await?;
    Ok(())
}

/// Render whatever the current phase shows first
pub async fn show_current(flow: &StudyFlow, app_to_ui_tx: &AsyncSender<AppEvent>) -> anyhow::Result<()> {
    let event = match flow.phase() {
        StudyPhase::Lesson(stage) => match stage.mode {
            LessonMode::Flashcards => match card_view(flow) {
                Some(view) => AppEvent::ShowCard(view),
                None => AppEvent::StatusUpdate("No flashcards in this lesson".to_string()),
            },
            LessonMode::Practice => AppEvent::StatusUpdate(practice::prompt_text(&stage.practice)),
        },
        StudyPhase::Quiz(quiz) => match question_view(quiz) {
            Some(view) => AppEvent::ShowQuestion(view),
            None => AppEvent::StatusUpdate("Quiz finished".to_string()),
        },
        StudyPhase::Results(results) => AppEvent::ShowResults(results_view(results)),
        StudyPhase::Error(message) => AppEvent::StatusUpdate(format!("Error: {message}")),
        StudyPhase::Setup | StudyPhase::Loading => AppEvent::StatusUpdate("Loading lesson...".to_string()),
    };

    app_to_ui_tx.send(event).await?;
    Ok(())
}

pub fn card_view(flow: &StudyFlow) -> Option<CardView> {
    let StudyPhase::Lesson(stage) = flow.phase() else {
        return None;
    };
    let deck = &stage.deck;
    let card = deck.current()?;

    Some(CardView {
        position: deck.position(),
        total: deck.len(),
        arabic: card.arabic.clone(),
        transliteration: card.transliteration.clone(),
        english: deck.is_flipped().then(|| card.english.clone()),
    })
}

pub fn question_view(quiz: &QuizSession) -> Option<QuestionView> {
    let question = quiz.current_question()?;

    Some(QuestionView {
        position: quiz.position(),
        total: quiz.len(),
        question: question.question.clone(),
        options: question.options.clone(),
    })
}

pub fn results_view(results: &QuizResults) -> ResultsView {
    ResultsView {
        correct: results.correct,
        total: results.total,
        percentage: results.percentage,
    }
}
