use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "kalima", version, about = "Arabic vocabulary trainer")]
pub struct Cli {
    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json: bool,
    #[arg(long, global = true, help = "JSON profile overriding environment config")]
    pub profile: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the normalized form of Arabic text
    Normalize { text: String },
    /// Score a spoken attempt against a reference phrase
    Score { reference: String, attempt: String },
    /// Generate a lesson from topics or a document
    Generate {
        #[arg(long = "topic", required_unless_present = "document", conflicts_with = "document")]
        topics: Vec<String>,
        #[arg(long)]
        document: Option<PathBuf>,
        #[arg(long, help = "Write the lesson JSON here instead of stdout")]
        out: Option<PathBuf>,
    },
    /// Study a lesson file: flashcards, speech practice, quiz
    Study { lesson: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_requires_a_source() {
        assert!(Cli::try_parse_from(["kalima", "generate"]).is_err());
        assert!(
            Cli::try_parse_from(["kalima", "generate", "--topic", "food", "--document", "a.txt"])
                .is_err()
        );

        let cli = Cli::try_parse_from(["kalima", "generate", "--topic", "food", "--topic", "travel"])
            .unwrap();
        match cli.command {
            Commands::Generate { topics, document, .. } => {
                assert_eq!(topics, vec!["food", "travel"]);
                assert!(document.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_score_args() {
        let cli = Cli::try_parse_from(["kalima", "--json", "score", "شُكْرًا", "شكرا"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Score { .. }));
    }
}
