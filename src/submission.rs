use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::{
    extract_error::ExtractError,
    text_manipulators::{normalize_whitespace, strip_whitespace},
};

// Contest number followed by the problem index, e.g. `1706C` or `1790F2`.
static PROBLEM_HEAD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)([A-Za-z][A-Za-z0-9]*)$").unwrap());

// Submission ids are plain numbers; they become file names.
static SUBMISSION_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

pub fn parse_submission_id(text: &str) -> Result<String, ExtractError> {
    let id = normalize_whitespace(text);
    if !SUBMISSION_ID_REGEX.is_match(&id) {
        return Err(ExtractError::MalformedSubmissionId { text: id });
    }
    Ok(id)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubmissionRecord {
    pub submission_id: String,
    pub author: String,
    pub contest: Option<String>,
    pub problem_index: Option<String>,
    pub problem_revision: Option<String>,
    pub language: String,
    pub verdict: String,
    pub code: String,
    pub code_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemId {
    pub contest: String,
    pub index: String,
    pub revision: Option<String>,
}

impl ProblemId {
    /// Parses the problem column of a submission row, which reads like
    /// `1706C - Qingshan Loves Strings` once the markup spacing is gone.
    pub fn parse(text: &str) -> Result<Self, ExtractError> {
        let (head, tail) = match text.split_once('-') {
            Some((head, tail)) => (head, Some(tail)),
            None => (text, None),
        };
        let head = strip_whitespace(head);
        let Some(caps) = PROBLEM_HEAD_REGEX.captures(&head) else {
            return Err(ExtractError::MalformedProblemId {
                text: normalize_whitespace(text),
            });
        };
        let revision = tail
            .map(normalize_whitespace)
            .filter(|revision| !revision.is_empty());
        Ok(Self {
            contest: caps[1].to_string(),
            index: caps[2].to_string(),
            revision,
        })
    }
}

impl SubmissionRecord {
    pub fn set_problem(&mut self, problem: ProblemId) {
        self.contest = Some(problem.contest);
        self.problem_index = Some(problem.index);
        self.problem_revision = problem.revision;
    }
}
