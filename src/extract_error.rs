/// Everything that can go wrong between the raw page bytes and a saved
/// submission, apart from plain I/O and HTTP failures.
#[derive(Debug, PartialEq, Eq)]
pub enum ExtractError {
    MissingElement { selector: &'static str },
    MissingColumn { index: usize },
    EmptyColumn { index: usize },
    MalformedSubmissionId { text: String },
    MalformedProblemId { text: String },
    MissingProblemId,
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::MissingElement { selector } => {
                write!(f, "No element matched the selector `{selector}`")
            }
            ExtractError::MissingColumn { index } => {
                write!(f, "The submission row has no column {index}")
            }
            ExtractError::EmptyColumn { index } => {
                write!(f, "Column {index} of the submission row is empty")
            }
            ExtractError::MalformedSubmissionId { text } => {
                write!(f, "{text:?} is not a submission id")
            }
            ExtractError::MalformedProblemId { text } => {
                write!(f, "Could not read contest and problem from {text:?}")
            }
            ExtractError::MissingProblemId => {
                write!(f, "The submission has no contest/problem to file it under")
            }
        }
    }
}

impl std::error::Error for ExtractError {}
