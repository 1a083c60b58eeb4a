//! CLI interface for the ATS scorer

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ats-scorer")]
#[command(version)]
#[command(about = "Score a resume against a job description the way an ATS would")]
#[command(long_about = "Extracts text from a PDF resume, pulls noun and adjective keywords from both documents and blends TF-IDF similarity with keyword coverage into a 0-100 score")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against a job description
    Score {
        /// Path to resume file (PDF)
        #[arg(short, long)]
        resume: PathBuf,

        #[command(flatten)]
        job: JobArgs,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Include score components and full keyword lists
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Disable colored console output
        #[arg(long)]
        no_color: bool,
    },

    /// Show or manage configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct JobArgs {
    /// Path to job description text file, or - for stdin
    #[arg(short, long)]
    pub job: Option<PathBuf>,

    /// Job description given directly on the command line
    #[arg(long)]
    pub job_text: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("resume.PDF"), &["pdf"]).is_ok());
        assert!(validate_file_extension(Path::new("resume.txt"), &["pdf"]).is_err());
        assert!(validate_file_extension(Path::new("resume"), &["pdf"]).is_err());
    }

    #[test]
    fn test_score_requires_exactly_one_job_source() {
        let missing = Cli::try_parse_from(["ats-scorer", "score", "-r", "cv.pdf"]);
        assert!(missing.is_err());

        let both = Cli::try_parse_from([
            "ats-scorer", "score", "-r", "cv.pdf", "-j", "job.txt", "--job-text", "rust",
        ]);
        assert!(both.is_err());

        let inline = Cli::try_parse_from([
            "ats-scorer", "score", "-r", "cv.pdf", "--job-text", "rust developer",
        ])
        .unwrap();
        match inline.command {
            Commands::Score { job, .. } => {
                assert_eq!(job.job_text.as_deref(), Some("rust developer"));
                assert!(job.job.is_none());
            }
            _ => panic!("expected score command"),
        }
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
