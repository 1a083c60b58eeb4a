//! ats-scorer: score a résumé against a job description

use ats_scorer::cli::{self, Cli, Commands, ConfigAction, JobArgs};
use ats_scorer::config::{Config, OutputFormat};
use ats_scorer::error::{AtsError, Result};
use ats_scorer::input::manager::{InputManager, JobSource};
use ats_scorer::output::formatter::{save_report_to_file, ReportGenerator};
use ats_scorer::output::report::ScoreReport;
use ats_scorer::{AtsScorer, LexiconTagger};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info};
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli) {
        match e {
            AtsError::UnreadableDocument(path) => {
                debug!("No text extracted from {}", path.display());
                eprintln!("Could not read PDF. Try another file.");
            }
            other => {
                error!("Command failed: {}", other);
                eprintln!("❌ {}", other);
            }
        }
        process::exit(1);
    }
}

/// `config reset` and `config path` never read the current file, so they
/// work when it is missing or invalid.
fn run(cli: Cli) -> Result<()> {
    let config_file = cli.config;

    match cli.command {
        Commands::Config {
            action: Some(ConfigAction::Reset),
        } => {
            let path = Config::reset(config_file.as_deref())?;
            println!("✅ Configuration reset: {}", path.display());
            Ok(())
        }

        Commands::Config {
            action: Some(ConfigAction::Path),
        } => {
            let path = config_file.unwrap_or_else(Config::config_path);
            println!("{}", path.display());
            Ok(())
        }

        Commands::Config {
            action: Some(ConfigAction::Show) | None,
        } => {
            let config = Config::load(config_file.as_deref())?;
            print!("{}", config.to_toml()?);
            Ok(())
        }

        Commands::Score {
            resume,
            job,
            output,
            detailed,
            save,
            no_color,
        } => {
            let config = Config::load(config_file.as_deref())?;
            let format = match output {
                Some(value) => cli::parse_output_format(&value).map_err(AtsError::InvalidInput)?,
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;
            let use_colors = config.output.color_output && !no_color;

            score_resume(&config, &resume, job_source(job), format, detailed, use_colors, save.as_deref())
        }
    }
}

fn job_source(args: JobArgs) -> JobSource {
    match (args.job, args.job_text) {
        (Some(path), _) => JobSource::from_path(path),
        (None, Some(text)) => JobSource::Inline(text),
        (None, None) => JobSource::Inline(String::new()),
    }
}

fn score_resume(
    config: &Config,
    resume: &Path,
    job: JobSource,
    format: OutputFormat,
    detailed: bool,
    use_colors: bool,
    save: Option<&Path>,
) -> Result<()> {
    let input_manager = InputManager::new();

    info!("Loading resume: {}", resume.display());
    let resume_text = input_manager.load_resume(resume)?;
    let job_text = input_manager.load_job(&job)?;

    let tagger = if config.keywords.custom_proper_nouns.is_empty() {
        LexiconTagger::new()
    } else {
        LexiconTagger::with_custom_proper_nouns(config.keywords.custom_proper_nouns.clone())
    };
    debug!("Tagger knows {} proper nouns", tagger.proper_noun_count());
    let scorer = AtsScorer::new(&tagger);

    let spinner = (format == OutputFormat::Console).then(analysis_spinner);
    let assessment = scorer.score(&resume_text, &job_text);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let report = ScoreReport::from_assessment(
        &assessment,
        config.output.sample_size,
        &resume.display().to_string(),
        &job.describe(),
    );

    let generator = ReportGenerator::with_options(use_colors, detailed, true);
    let rendered = generator.generate_report(&report, &format)?;

    match save {
        Some(path) => {
            // Saved files never carry terminal escape codes
            let content = if format == OutputFormat::Console && use_colors {
                ReportGenerator::with_options(false, detailed, true).generate_report(&report, &format)?
            } else {
                rendered.clone()
            };
            save_report_to_file(&content, path)?;
            print_report(&rendered);
            eprintln!("💾 Report saved to {}", path.display());
        }
        None => print_report(&rendered),
    }

    Ok(())
}

fn print_report(rendered: &str) {
    if rendered.ends_with('\n') {
        print!("{}", rendered);
    } else {
        println!("{}", rendered);
    }
}

fn analysis_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Analyzing your resume...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}
