//! Input manager for the résumé and the job description

use crate::cli::validate_file_extension;
use crate::error::{AtsError, Result};
use crate::input::text_extractor::{PdfExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where the job description comes from
#[derive(Debug, Clone, PartialEq)]
pub enum JobSource {
    File(PathBuf),
    Stdin,
    Inline(String),
}

impl JobSource {
    /// `-` means standard input
    pub fn from_path(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            JobSource::Stdin
        } else {
            JobSource::File(path)
        }
    }

    pub fn describe(&self) -> String {
        match self {
            JobSource::File(path) => path.display().to_string(),
            JobSource::Stdin => "<stdin>".to_string(),
            JobSource::Inline(_) => "<inline>".to_string(),
        }
    }
}

pub struct InputManager<E: TextExtractor = PdfExtractor> {
    resume_extractor: E,
}

impl InputManager<PdfExtractor> {
    pub fn new() -> Self {
        Self {
            resume_extractor: PdfExtractor,
        }
    }
}

impl Default for InputManager<PdfExtractor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TextExtractor> InputManager<E> {
    pub fn with_extractor(resume_extractor: E) -> Self {
        Self { resume_extractor }
    }

    /// Extract résumé text, failing when the document yields nothing.
    pub fn load_resume(&self, path: &Path) -> Result<String> {
        validate_file_extension(path, &["pdf"])
            .map_err(|e| AtsError::InvalidInput(format!("Resume file: {}", e)))?;

        if !path.exists() {
            return Err(AtsError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        info!("Extracting text from PDF: {}", path.display());
        let text = self.resume_extractor.extract(path);

        if text.trim().is_empty() {
            return Err(AtsError::UnreadableDocument(path.to_path_buf()));
        }

        info!("Extracted {} characters from resume", text.chars().count());
        Ok(text)
    }

    /// Read the job description verbatim; an empty description is not an error.
    pub fn load_job(&self, source: &JobSource) -> Result<String> {
        match source {
            JobSource::Inline(text) => Ok(text.clone()),
            JobSource::Stdin => {
                info!("Reading job description from stdin");
                read_job(std::io::stdin().lock())
            }
            JobSource::File(path) => {
                if !path.exists() {
                    return Err(AtsError::InvalidInput(format!(
                        "File does not exist: {}",
                        path.display()
                    )));
                }
                info!("Reading job description: {}", path.display());
                read_job(std::fs::File::open(path)?)
            }
        }
    }
}

/// Invalid UTF-8 is replaced rather than rejected, whatever the source
fn read_job<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(PlainTextExtractor.extract_from_bytes(&bytes))
}
