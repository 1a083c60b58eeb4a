//! Input processing module
//! Handles résumé text extraction and job description loading

pub mod manager;
pub mod text_extractor;
