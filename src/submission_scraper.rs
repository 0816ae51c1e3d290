use std::borrow::Cow;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use scraper::{ElementRef, Html, Selector};

use crate::{
    code_writer::write_code,
    extract_error::ExtractError,
    requests::RequestClient,
    source::Source,
    submission::{ProblemId, SubmissionRecord, parse_submission_id},
    text_manipulators::{extract_text, normalize_whitespace},
};

// The submission table sits inside the `.datatable` container; row 0 is the header.
const ROW_SELECTOR: &str = ".datatable div table tr";
const AUTHOR_SELECTOR: &str = ".rated-user";
const CODE_SELECTOR: &str = ".prettyprint";
const COLUMN_COUNT: usize = 5;

#[derive(Debug)]
pub struct SubmissionScraper {
    pub source: Source,
    /// Where to save the code. Nothing is written when `None`.
    pub save_root: Option<PathBuf>,
}

impl SubmissionScraper {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            save_root: None,
        }
    }

    pub fn saving_to(mut self, root: impl Into<PathBuf>) -> Self {
        self.save_root = Some(root.into());
        self
    }

    pub async fn scrape(&self, request_client: &RequestClient) -> anyhow::Result<SubmissionRecord> {
        info!("Scraping submission from: {}", self.source);
        let html = self.source.load(request_client).await?;
        scrape_page(&html, self.save_root.as_deref())
    }
}

/// Parse, extract and optionally save, for a page already in memory.
pub fn scrape_page(html: &[u8], save_root: Option<&Path>) -> anyhow::Result<SubmissionRecord> {
    let document = parse_document(html);
    let mut record = extract_submission(&document)?;
    info!(
        "Extracted submission {} by {} ({}, {})",
        record.submission_id, record.author, record.language, record.verdict
    );
    if let Some(root) = save_root {
        write_code(root, &mut record)?;
    }
    Ok(record)
}

/// Stray invalid UTF-8 bytes are replaced rather than rejecting the page.
pub fn parse_document(html: &[u8]) -> Html {
    let html = String::from_utf8_lossy(html);
    if let Cow::Owned(_) = html {
        warn!("Page is not valid UTF-8, invalid bytes were replaced");
    }
    Html::parse_document(&html)
}

// Text of a column that must not be blank.
fn required_text(cell: ElementRef, index: usize) -> Result<String, ExtractError> {
    let text = normalize_whitespace(&extract_text(cell));
    if text.is_empty() {
        return Err(ExtractError::EmptyColumn { index });
    }
    Ok(text)
}

pub fn extract_submission(document: &Html) -> Result<SubmissionRecord, ExtractError> {
    let row_selector = Selector::parse(ROW_SELECTOR).unwrap();
    let author_selector = Selector::parse(AUTHOR_SELECTOR).unwrap();
    let code_selector = Selector::parse(CODE_SELECTOR).unwrap();

    let row = document
        .select(&row_selector)
        .nth(1)
        .ok_or(ExtractError::MissingElement {
            selector: ROW_SELECTOR,
        })?;

    // Direct children only, so a nested table can't shift the columns.
    let cells: Vec<ElementRef> = row
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "td")
        .take(COLUMN_COUNT)
        .collect();
    if cells.len() < COLUMN_COUNT {
        return Err(ExtractError::MissingColumn { index: cells.len() });
    }
    debug!("Submission row has {} usable columns", cells.len());

    let mut record = SubmissionRecord::default();
    for (index, cell) in cells.into_iter().enumerate() {
        match index {
            0 => record.submission_id = parse_submission_id(&required_text(cell, index)?)?,
            1 => {
                record.author = match cell.select(&author_selector).next() {
                    Some(author) => normalize_whitespace(&extract_text(author)),
                    // Unrated and team handles carry no rating class.
                    None => normalize_whitespace(&extract_text(cell)),
                }
            }
            2 => record.set_problem(ProblemId::parse(&extract_text(cell))?),
            3 => record.language = required_text(cell, index)?,
            4 => record.verdict = required_text(cell, index)?,
            _ => {}
        }
    }

    let code = document
        .select(&code_selector)
        .next()
        .ok_or(ExtractError::MissingElement {
            selector: CODE_SELECTOR,
        })?;
    record.code = extract_text(code);

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(row: &str, code: &str) -> String {
        format!(
            r#"<html><head><title>Submission</title></head>
<body>
<div class="datatable">
  <div>
    <table>
      <tr><th>#</th><th>Author</th><th>Problem</th><th>Lang</th><th>Verdict</th><th>Time</th></tr>
      {row}
    </table>
  </div>
</div>
{code}
</body></html>"#
        )
    }

    const ROW: &str = r#"<tr>
        <td>
            42
        </td>
        <td><a class="rated-user user-cyan" href="/profile/alice">alice</a></td>
        <td><a href="/contest/4/problem/A">
            4A - Watermelon
        </a></td>
        <td>
            Python 3
        </td>
        <td><span class="verdict-accepted">Accepted</span></td>
        <td>62 ms</td>
    </tr>"#;

    const CODE: &str = r#"<pre class="prettyprint lang-py">w = int(input())
print("YES" if w > 2 and w % 2 == 0 else "NO")
</pre>"#;

    fn extract(html: &str) -> Result<SubmissionRecord, ExtractError> {
        extract_submission(&parse_document(html.as_bytes()))
    }

    #[test]
    fn extracts_every_column() {
        let record = extract(&page(ROW, CODE)).unwrap();
        assert_eq!(record.submission_id, "42");
        assert_eq!(record.author, "alice");
        assert_eq!(record.contest.as_deref(), Some("4"));
        assert_eq!(record.problem_index.as_deref(), Some("A"));
        assert_eq!(record.problem_revision.as_deref(), Some("Watermelon"));
        assert_eq!(record.language, "Python 3");
        assert_eq!(record.verdict, "Accepted");
        assert_eq!(
            record.code,
            "w = int(input())\nprint(\"YES\" if w > 2 and w % 2 == 0 else \"NO\")\n"
        );
        assert_eq!(record.code_path, None);
    }

    #[test]
    fn same_bytes_same_record() {
        let html = page(ROW, CODE);
        assert_eq!(extract(&html).unwrap(), extract(&html).unwrap());
    }

    #[test]
    fn author_falls_back_to_cell_text() {
        let row = ROW.replace(
            r#"<a class="rated-user user-cyan" href="/profile/alice">alice</a>"#,
            "\n  team  rocket \n",
        );
        let record = extract(&page(&row, CODE)).unwrap();
        assert_eq!(record.author, "team rocket");
    }

    #[test]
    fn missing_table_is_reported() {
        let html = "<html><body><pre class=\"prettyprint\">x</pre></body></html>";
        assert_eq!(
            extract(html),
            Err(ExtractError::MissingElement {
                selector: ROW_SELECTOR
            })
        );
    }

    #[test]
    fn short_row_is_reported() {
        let row = "<tr><td>42</td><td>alice</td><td>4A - Watermelon</td></tr>";
        assert_eq!(
            extract(&page(row, CODE)),
            Err(ExtractError::MissingColumn { index: 3 })
        );
    }

    #[test]
    fn malformed_problem_is_reported() {
        let row = ROW.replace("4A - Watermelon", "Watermelon");
        assert!(matches!(
            extract(&page(&row, CODE)),
            Err(ExtractError::MalformedProblemId { .. })
        ));
    }

    #[test]
    fn missing_code_is_reported() {
        assert_eq!(
            extract(&page(ROW, "")),
            Err(ExtractError::MissingElement {
                selector: CODE_SELECTOR
            })
        );
    }

    #[test]
    fn blank_id_language_or_verdict_is_reported() {
        let cases = [
            (ROW.replace("42", "   "), 0),
            (ROW.replace("Python 3", " \n "), 3),
            (ROW.replace("Accepted</span>", "  </span>"), 4),
        ];
        for (row, index) in cases {
            assert_eq!(
                extract(&page(&row, CODE)),
                Err(ExtractError::EmptyColumn { index })
            );
        }
    }

    #[test]
    fn non_numeric_submission_id_is_reported() {
        let row = ROW.replace("42", "../../../../escaped");
        assert_eq!(
            extract(&page(&row, CODE)),
            Err(ExtractError::MalformedSubmissionId {
                text: "../../../../escaped".to_string()
            })
        );

        let root = tempfile::tempdir().unwrap();
        assert!(scrape_page(page(&row, CODE).as_bytes(), Some(root.path())).is_err());
        assert!(!root.path().join("submissions").exists());
    }

    #[test]
    fn invalid_utf8_bytes_are_tolerated() {
        let mut html = page(ROW, CODE).into_bytes();
        html.extend_from_slice(&[0xff, 0xfe]);
        let record = extract_submission(&parse_document(&html)).unwrap();
        assert_eq!(record.submission_id, "42");
        assert_eq!(record.verdict, "Accepted");
    }

    #[test]
    fn scrape_page_saves_when_asked() {
        let root = tempfile::tempdir().unwrap();
        let record = scrape_page(page(ROW, CODE).as_bytes(), Some(root.path())).unwrap();
        let path = record.code_path.clone().unwrap();
        assert_eq!(
            path,
            root.path().join("submissions/contests/contest-4/problem-A/42.py")
        );
        assert_eq!(std::fs::read_to_string(path).unwrap(), record.code);
    }
}
