use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{info, warn};

use crate::{
    extract_error::ExtractError,
    submission::{SubmissionRecord, parse_submission_id},
};

const SUBMISSIONS_FOLDER: &str = "submissions";
const CONTESTS_FOLDER: &str = "contests";
const CONTEST_PREFIX: &str = "contest-";
const PROBLEM_PREFIX: &str = "problem-";
pub const UNKNOWN_LANGUAGE_WARNING: &str = "Unknown Language! Saving code as a text document.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Cpp,
    Java,
    Python,
    Unknown,
}

impl Language {
    /// Matches on substrings of the judge's label, e.g. `GNU C++17 (64)`.
    /// Order matters: the first match wins.
    pub fn from_label(label: &str) -> Self {
        if label.contains("C++") {
            Language::Cpp
        } else if label.contains("Java") {
            Language::Java
        } else if label.contains("Py") {
            Language::Python
        } else {
            Language::Unknown
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::Java => "java",
            Language::Python => "py",
            Language::Unknown => "txt",
        }
    }
}

/// Extension for a language label. Unknown labels fall back to `txt` and
/// the warning line goes to `out`.
pub fn language_extension(label: &str, out: &mut impl Write) -> std::io::Result<&'static str> {
    let language = Language::from_label(label);
    if language == Language::Unknown {
        warn!("Unknown language {label:?}");
        writeln!(out, "{UNKNOWN_LANGUAGE_WARNING}")?;
    }
    Ok(language.extension())
}

pub fn submission_dir(root: &Path, contest: &str, problem_index: &str) -> PathBuf {
    root.join(SUBMISSIONS_FOLDER)
        .join(CONTESTS_FOLDER)
        .join(format!("{CONTEST_PREFIX}{contest}"))
        .join(format!("{PROBLEM_PREFIX}{problem_index}"))
}

/// Writes the code under `root` and records where it went.
pub fn write_code(root: &Path, record: &mut SubmissionRecord) -> anyhow::Result<PathBuf> {
    let (Some(contest), Some(problem_index)) = (&record.contest, &record.problem_index) else {
        return Err(ExtractError::MissingProblemId.into());
    };
    parse_submission_id(&record.submission_id)?;
    let dir = submission_dir(root, contest, problem_index);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let ext = language_extension(&record.language, &mut std::io::stdout().lock())?;
    let code_path = dir.join(format!("{}.{}", record.submission_id, ext));
    std::fs::write(&code_path, record.code.as_bytes())
        .with_context(|| format!("failed to write {}", code_path.display()))?;
    info!("Saved submission {} to {}", record.submission_id, code_path.display());

    record.code_path = Some(code_path.clone());
    Ok(code_path)
}
