//! Writing sorted lines back out, with their comments

use crate::error::{SortContext, SortResult};
use crate::input::{Comment, SortableLine};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Write lines, each preceded by its comment block
pub fn write_lines<W: Write>(
    lines: &[SortableLine],
    trailing_comment: Option<&Comment>,
    line_ending: &str,
    out: W,
) -> io::Result<()> {
    let mut writer = BufWriter::new(out);
    for (i, line) in lines.iter().enumerate() {
        if let Some(comment) = &line.comment {
            // No blank line before a comment that ends up first.
            write_comment(&mut writer, comment, line_ending, i != 0)?;
        }
        writer.write_all(line.line.as_bytes())?;
        writer.write_all(line_ending.as_bytes())?;
    }

    if let Some(comment) = trailing_comment {
        write_comment(&mut writer, comment, line_ending, !lines.is_empty())?;
    }

    writer.flush()
}

fn write_comment<W: Write>(
    writer: &mut W,
    comment: &Comment,
    line_ending: &str,
    allow_blank: bool,
) -> io::Result<()> {
    if comment.preceded_by_empty_line && allow_blank {
        writer.write_all(line_ending.as_bytes())?;
    }
    for line in &comment.lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(line_ending.as_bytes())?;
    }
    Ok(())
}

/// `name.ext` becomes `name.ext.bak`, `name` becomes `name.bak`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut backup = path.to_path_buf();
    let extension = path
        .extension()
        .map(|e| format!("{}.bak", e.to_string_lossy()))
        .unwrap_or_else(|| "bak".to_string());
    backup.set_extension(extension);
    backup
}

/// Copy `path` to its backup name
pub fn write_backup(path: &Path) -> SortResult<PathBuf> {
    let backup = backup_path(path);
    fs::copy(path, &backup).with_file_context(&path.display().to_string())?;
    debug!(backup = %backup.display(), "wrote backup");
    Ok(backup)
}

/// Atomically replace `path` with the output of `write`
///
/// The temporary file is created next to the target so the final rename never
/// crosses filesystems.
pub fn replace_file<F>(path: &Path, write: F) -> SortResult<()>
where
    F: FnOnce(&mut NamedTempFile) -> io::Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir).with_file_context(&dir.display().to_string())?;
    write(&mut temp)?;

    let temp_path = temp.path().to_path_buf();
    temp.persist(path).map_err(|e| e.error).with_context(|| {
        format!(
            "error renaming {} to {}",
            temp_path.display(),
            path.display()
        )
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::lines_from_str;
    use tempfile::TempDir;

    const WITH_COMMENTS: &str = "foo\nbar\n# comment 1\nbaz\n\n# comment 2\nquux\n";

    const WITH_REPEATED_LINES: &str = "# first foo\nfoo\nbar\n\n# first baz\nbaz\n\n\
                                       # second foo\nfoo\nquux\n\n# second baz\nbaz\n";

    fn round_trip(content: &str) -> String {
        let input = lines_from_str(content, "\n", Some("#"));
        let mut buf = Vec::new();
        write_lines(
            &input.lines,
            input.trailing_comment.as_ref(),
            input.line_ending,
            &mut buf,
        )
        .expect("Failed to write lines");
        String::from_utf8(buf).expect("output is UTF-8")
    }

    #[test]
    fn test_comments_are_reproduced() {
        assert_eq!(round_trip(WITH_COMMENTS), WITH_COMMENTS);
        assert_eq!(round_trip(WITH_REPEATED_LINES), WITH_REPEATED_LINES);
    }

    #[test]
    fn test_first_comment_drops_leading_blank() {
        let mut input = lines_from_str("b\n\n# about a\na\n", "\n", Some("#"));
        input.lines.reverse();
        let mut buf = Vec::new();
        write_lines(&input.lines, None, "\n", &mut buf).expect("Failed to write lines");
        assert_eq!(
            String::from_utf8(buf).expect("output is UTF-8"),
            "# about a\na\nb\n"
        );
    }

    #[test]
    fn test_backup_path() {
        assert_eq!(
            backup_path(Path::new("dir/input.txt")),
            PathBuf::from("dir/input.txt.bak")
        );
        assert_eq!(backup_path(Path::new("hosts")), PathBuf::from("hosts.bak"));
    }

    #[test]
    fn test_replace_file() -> SortResult<()> {
        let dir = TempDir::new()?;
        let target = dir.path().join("input.txt");
        fs::write(&target, "old\n")?;

        replace_file(&target, |file| file.write_all(b"new\n"))?;
        assert_eq!(fs::read_to_string(&target)?, "new\n");
        Ok(())
    }
}
