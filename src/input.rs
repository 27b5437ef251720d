//! Reading sortable lines from a file
//!
//! Empty lines are dropped. With a comment prefix, comment lines are attached
//! to the sortable line that follows them so they move together.

use crate::approach::Sortable;
use crate::error::{SortContext, SortError, SortResult};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Number of bytes inspected when looking for the line ending
pub const FIRST_CHUNK_SIZE: usize = 2048;

const LINE_ENDINGS: [&str; 3] = ["\r\n", "\n", "\r"];

/// Comment lines preceding a sortable line
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Comment {
    pub preceded_by_empty_line: bool,
    pub lines: Vec<String>,
}

/// One sortable line with its original position and attached comment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortableLine {
    pub line_number: usize,
    pub line: String,
    pub comment: Option<Comment>,
}

impl SortableLine {
    pub fn new(line_number: usize, line: &str) -> Self {
        Self {
            line_number,
            line: line.to_string(),
            comment: None,
        }
    }
}

impl Sortable for SortableLine {
    fn text(&self) -> &str {
        &self.line
    }

    fn line_number(&self, _index: usize) -> usize {
        self.line_number
    }
}

/// Everything read from one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLines {
    pub lines: Vec<SortableLine>,
    /// A comment block at the end of the file with no line after it
    pub trailing_comment: Option<Comment>,
    /// An empty line was dropped from between sortable lines
    pub has_empty_lines: bool,
    pub line_ending: &'static str,
}

/// Read and split a file
pub fn read_lines(path: &Path, comment_prefix: Option<&str>) -> SortResult<InputLines> {
    let name = path.display().to_string();
    let bytes = fs::read(path).with_file_context(&name)?;
    let content = String::from_utf8(bytes)?;
    let line_ending = determine_line_ending(&content)
        .ok_or_else(|| SortError::undetermined_line_ending(&name, FIRST_CHUNK_SIZE))?;
    debug!(file = %name, ?line_ending, "read input");
    Ok(lines_from_str(&content, line_ending, comment_prefix))
}

/// Pick the first known line ending present in the leading chunk
///
/// Short content with no line ending at all is treated as using `\n`.
pub fn determine_line_ending(content: &str) -> Option<&'static str> {
    let head = &content.as_bytes()[..content.len().min(FIRST_CHUNK_SIZE)];
    for ending in LINE_ENDINGS {
        if head
            .windows(ending.len())
            .any(|window| window == ending.as_bytes())
        {
            return Some(ending);
        }
    }

    (content.len() <= FIRST_CHUNK_SIZE).then_some("\n")
}

/// Split content into sortable lines, collecting comments and empty lines
pub fn lines_from_str(
    content: &str,
    line_ending: &'static str,
    comment_prefix: Option<&str>,
) -> InputLines {
    let body = content.strip_suffix(line_ending).unwrap_or(content);

    let mut lines = Vec::new();
    let mut comment: Option<Comment> = None;
    let mut last_line_was_empty = false;
    let mut has_empty_lines = false;

    if !body.is_empty() {
        for (i, line) in body.split(line_ending).enumerate() {
            if line.is_empty() {
                last_line_was_empty = true;
                continue;
            }

            if let Some(prefix) = comment_prefix {
                if line.trim().starts_with(prefix) {
                    match comment.as_mut() {
                        Some(comment) => comment.lines.push(line.to_string()),
                        None => {
                            comment = Some(Comment {
                                preceded_by_empty_line: last_line_was_empty,
                                lines: vec![line.to_string()],
                            });
                            last_line_was_empty = false;
                        }
                    }
                    continue;
                }
            }

            if last_line_was_empty {
                has_empty_lines = true;
            }

            lines.push(SortableLine {
                line_number: i + 1,
                line: line.to_string(),
                comment: comment.take(),
            });
            last_line_was_empty = false;
        }
    }

    InputLines {
        lines,
        trailing_comment: comment,
        has_empty_lines,
        line_ending,
    }
}
