//! Output sink selection

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Open the blend output sink: a buffered file writer, or stdout.
///
/// The engine flushes on every exit path; the `BufWriter` flush-on-drop is
/// the last-resort backstop for unexpected unwinds.
pub fn open_sink(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn file_sink_writes_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blends.txt");

        let mut sink = open_sink(Some(&path)).unwrap();
        writeln!(sink, "revengeance").unwrap();
        sink.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "revengeance\n");
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let result = open_sink(Some(Path::new("/nonexistent/dir/blends.txt")));
        assert!(result.is_err());
    }

    #[test]
    fn stdout_sink_opens() {
        assert!(open_sink(None).is_ok());
    }
}
