pub mod code_writer;
pub mod config;
mod extract_error;
pub mod requests;
pub mod source;
pub mod submission;
mod submission_scraper;
mod text_manipulators;

pub use extract_error::ExtractError;
pub use source::Source;
pub use submission::{ProblemId, SubmissionRecord};
pub use submission_scraper::{SubmissionScraper, extract_submission, parse_document, scrape_page};
