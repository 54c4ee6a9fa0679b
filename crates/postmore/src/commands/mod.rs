//! CLI command implementations.

pub(crate) mod excerpt;
pub(crate) mod render;

pub(crate) use excerpt::ExcerptArgs;
pub(crate) use render::RenderArgs;

use std::io::{self, Read, Write};
use std::path::Path;

/// Read a post from `path`, or from stdin when `path` is `None` or `-`.
pub(crate) fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path),
        _ => {
            let mut buf = String::new();
            io::stdin().lock().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Write rendered content to stdout.
pub(crate) fn write_stdout(content: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()
}

/// Whether `path` names a Markdown source.
pub(crate) fn is_markdown(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_markdown() {
        assert!(is_markdown(Path::new("posts/hello.md")));
        assert!(is_markdown(Path::new("posts/hello.Markdown")));
        assert!(!is_markdown(Path::new("posts/hello.html")));
        assert!(!is_markdown(Path::new("posts/md")));
    }

    #[test]
    fn test_read_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.html");
        std::fs::write(&path, "A<!--more-->B").unwrap();
        assert_eq!(read_input(Some(&path)).unwrap(), "A<!--more-->B");
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_input(Some(&dir.path().join("missing.html"))).is_err());
    }
}
