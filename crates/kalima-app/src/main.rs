use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use kalima_config::Config;
use kalima_core::feedback::FeedbackTier;
use kalima_core::flow::StudyFlow;
use kalima_core::language::LanguageProcessor;
use kalima_generator::{GeminiClient, LessonGenerator};
use kalima_lang_arabic::ArabicProcessor;
use kalima_types::{LessonRequest, LessonSource};
use tokio::io::BufReader;
use tokio::signal;

pub mod cli;
pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod state;
pub mod ui;


use self::cli::{Cli, Commands};
use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(cli.json);

    let config = profile::load_config(cli.profile.as_deref())?;
    let processor: Arc<dyn LanguageProcessor> = Arc::new(ArabicProcessor::new());

    match cli.command {
        Commands::Normalize { text } => {
            println!("{}", processor.normalize(&text));
        }
        Commands::Score { reference, attempt } => {
            let score = processor.similarity(&reference, &attempt);
            let tier = FeedbackTier::from_score(score, &config.feedback);
            println!("{score} {}", tier.as_str());
        }
        Commands::Generate {
            topics,
            document,
            out,
        } => generate(&config, topics, document, out).await?,
        Commands::Study { lesson } => {
            let lesson = profile::load_lesson(&lesson)?;

            let mut flow = StudyFlow::new(config.feedback);
            flow.begin_loading()?;
            flow.lesson_ready(lesson)?;

            let capacity = config.channel_capacity;
            let state = Arc::new(AppState::new(config, processor));
            run(state, flow, capacity).await;
        }
    }

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr so stdout stays clean for command output
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

async fn generate(
    config: &Config,
    topics: Vec<String>,
    document: Option<PathBuf>,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let source = match document {
        Some(path) => {
            let text = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read document {}", path.display()))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            LessonSource::Document { name, text }
        }
        None => LessonSource::Topics(topics),
    };

    let request = LessonRequest {
        source,
        level: config.lesson.level,
        vocabulary_count: config.lesson.vocabulary_count,
        phrase_count: config.lesson.phrase_count,
        quiz_count: config.lesson.quiz_count,
    };

    let generator = GeminiClient::new(&config.generator)?;
    let provider = generator.metadata();
    if provider.requires_api_key && !generator.is_configured() {
        tracing::warn!("GEMINI_API_KEY is not set, lesson generation is unavailable");
    }
    tracing::info!(
        "Generating {} lesson with {} ({})",
        request.level.as_str(),
        provider.name,
        provider.model
    );

    let lesson = generator.generate(&request).await?;
    tracing::info!("Generated lesson '{}'", lesson.title);

    match out {
        Some(path) => profile::save_lesson(&path, &lesson)?,
        None => println!("{}", serde_json::to_string_pretty(&lesson)?),
    }

    Ok(())
}

/// Run a study session until the learner quits or Ctrl+C
pub async fn run(state: Arc<AppState>, flow: StudyFlow, capacity: usize) {
    let controller = AppController::new(state, capacity);
    let mut tasks = controller.spawn_tasks(flow, BufReader::new(tokio::io::stdin()));

    let ui = ui::ui_loop(controller.ui_receiver());
    tokio::pin!(ui);

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                tracing::info!("Shutdown requested");
                break;
            }
            result = &mut ui => {
                if let Err(e) = result {
                    tracing::error!("ui loop exited: {e}");
                }
                break;
            }
            Some(result) = tasks.join_next() => {
                match result {
                    Ok(Ok(())) => tracing::debug!("session task finished"),
                    Ok(Err(e)) => {
                        tracing::error!("session task failed: {e}");
                        break;
                    }
                    Err(e) => {
                        tracing::error!("session task panicked: {e}");
                        break;
                    }
                }
            }
        }
    }

    controller.shutdown();
    tasks.shutdown().await;
}
