use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use kalima_config::Config;
use kalima_config::generator::GeneratorConfig;
use kalima_types::Lesson;

/// Load config from a JSON profile, or from the environment when none is given
///
/// Fields missing from the profile take their defaults. An empty API key in
/// the profile falls back to the environment so keys stay out of profile files.
pub fn load_config(profile: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = profile else {
        return Ok(Config::new());
    };

    tracing::info!("Loading profile {}", path.display());
    let file = File::open(path).with_context(|| format!("Failed to open profile {}", path.display()))?;
    let mut config: Config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse profile {}", path.display()))?;

    if !config.generator.is_configured() {
        config.generator.api_key = GeneratorConfig::new().api_key;
    }
    config.feedback = config.feedback.sanitized();

    Ok(config)
}

pub fn load_lesson(path: &Path) -> anyhow::Result<Lesson> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read lesson {}", path.display()))?;
    let lesson: Lesson = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse lesson {}", path.display()))?;
    lesson.validate()?;

    tracing::info!(
        "Loaded lesson '{}' ({} words, {} phrases, {} questions)",
        lesson.title,
        lesson.vocabulary.len(),
        lesson.phrases.len(),
        lesson.quiz.len()
    );
    Ok(lesson)
}

pub fn save_lesson(path: &Path, lesson: &Lesson) -> anyhow::Result<()> {
    fs::write(path, serde_json::to_string_pretty(lesson)?)
        .with_context(|| format!("Failed to write lesson {}", path.display()))?;
    tracing::info!("Saved lesson to {}", path.display());
    Ok(())
}
