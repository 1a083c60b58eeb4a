//! Integration tests for the ATS scorer

use ats_scorer::config::OutputFormat;
use ats_scorer::input::manager::{InputManager, JobSource};
use ats_scorer::input::text_extractor::PlainTextExtractor;
use ats_scorer::output::formatter::ReportGenerator;
use ats_scorer::output::report::{ScoreReport, ScoreStatus, Verdict};
use ats_scorer::{AtsError, AtsScorer, LexiconTagger};
use std::io::Write;
use std::path::{Path, PathBuf};

fn job_fixture() -> JobSource {
    JobSource::File(PathBuf::from("tests/fixtures/job_description.txt"))
}

/// Copies the plain-text résumé fixture to a `.pdf` temp file read back as text
fn resume_as_pdf() -> tempfile::NamedTempFile {
    let content = std::fs::read("tests/fixtures/sample_resume.txt").unwrap();
    let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    file.write_all(&content).unwrap();
    file
}

#[test]
fn test_job_description_from_file() {
    let manager = InputManager::new();
    let job = manager.load_job(&job_fixture()).unwrap();

    assert!(job.contains("Django REST framework"));
    assert!(job.contains("PostgreSQL"));
}

#[test]
fn test_corrupt_pdf_is_unreadable() {
    let manager = InputManager::new();
    let result = manager.load_resume(Path::new("tests/fixtures/corrupt.pdf"));

    assert!(matches!(result, Err(AtsError::UnreadableDocument(_))));
}

#[test]
fn test_two_page_pdf_scores_end_to_end() {
    let manager = InputManager::new();
    let resume = manager
        .load_resume(Path::new("tests/fixtures/two_page_resume.pdf"))
        .unwrap();

    let page_one = resume.find("Python developer").expect("page 1 text");
    let page_two = resume.find("Django REST framework").expect("page 2 text");
    assert!(page_one < page_two);

    let job = manager.load_job(&job_fixture()).unwrap();
    let assessment = AtsScorer::new(LexiconTagger::new()).score(&resume, &job);
    let card = assessment.card().expect("pdf resume should be scored");

    assert!(card.score > 0);
    for keyword in ["developer", "django", "framework", "python"] {
        assert!(card.matched_keywords().contains(keyword), "expected {} to match", keyword);
    }
    assert!(!card.resume_keywords.contains("developerdjango"));
}

#[test]
fn test_nonexistent_resume() {
    let manager = InputManager::new();
    let result = manager.load_resume(Path::new("tests/fixtures/nonexistent.pdf"));

    assert!(matches!(result, Err(AtsError::InvalidInput(_))));
}

#[test]
fn test_score_fixtures_end_to_end() {
    let resume_file = resume_as_pdf();
    let manager = InputManager::with_extractor(PlainTextExtractor);

    let resume = manager.load_resume(resume_file.path()).unwrap();
    let job = manager.load_job(&job_fixture()).unwrap();

    let assessment = AtsScorer::new(LexiconTagger::new()).score(&resume, &job);
    let card = assessment.card().expect("fixtures should be scored");

    assert!(card.score > 0 && card.score <= 100);
    let matched = card.matched_keywords();
    for keyword in ["python", "django", "docker"] {
        assert!(matched.contains(keyword), "expected {} to match", keyword);
    }
    assert!(card.missing_keywords().contains("framework"));

    let report = ScoreReport::from_assessment(&assessment, 10, "resume.pdf", &job_fixture().describe());
    assert_eq!(report.score, card.score);
    assert_eq!(report.verdict, Verdict::from_score(card.score));
    assert_eq!(report.keywords.matched_count, matched.len());
    assert!(report.keywords.matched_sample.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_json_report_for_empty_job() {
    let scorer = AtsScorer::new(LexiconTagger::new());
    let assessment = scorer.score("Python developer", "");
    let report = ScoreReport::from_assessment(&assessment, 10, "cv.pdf", "<inline>");

    let json = ReportGenerator::with_options(false, false, false)
        .generate_report(&report, &OutputFormat::Json)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(report.status, ScoreStatus::EmptyInput);
    assert_eq!(value["score"], 0);
    assert_eq!(value["verdict"], "needs_work");
    assert_eq!(value["status"]["kind"], "empty_input");
    assert!(value["components"].is_null());
}

#[test]
fn test_custom_proper_nouns_become_keywords() {
    let resume = "Shipped short links on Bitly";
    let job = "Bitly experience required";

    // -ly words are adverbs unless configured otherwise
    let plain = AtsScorer::new(LexiconTagger::new()).score(resume, job);
    assert!(!plain.job_keywords().contains("bitly"));

    let tagger = LexiconTagger::with_custom_proper_nouns(vec!["Bitly".to_string()]);
    let custom = AtsScorer::new(tagger).score(resume, job);
    assert!(custom.matched_keywords().contains("bitly"));
}

#[test]
fn test_console_report_plain_text() {
    let scorer = AtsScorer::new(LexiconTagger::new());
    let assessment = scorer.score(
        "Experienced Python developer with Django and AWS skills",
        "Looking for Python developer familiar with Django REST framework",
    );
    let report = ScoreReport::from_assessment(&assessment, 10, "cv.pdf", "<inline>");

    let output = ReportGenerator::with_options(false, true, true)
        .generate_report(&report, &OutputFormat::Console)
        .unwrap();

    assert!(output.contains(&format!("ATS Score: {}/100", report.score)));
    assert!(output.contains(report.verdict.message()));
    assert!(output.contains("Score Breakdown"));
    assert!(!output.contains("\u{1b}["));
}
