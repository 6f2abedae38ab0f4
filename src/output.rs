use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::document;
use crate::error::{FinderError, Result};

/// One comparison record: origin path, modified path, computed path, blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub origin: String,
    pub modified: String,
    pub path: String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\n{}\n{}\n\n", self.origin, self.modified, self.path)
    }
}

/// Appends reports to a text file, creating it when missing. Existing content
/// is never rewritten. Writes from concurrent processes are not coordinated.
pub struct OutputWriter {
    path: PathBuf,
}

impl OutputWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn append(&self, report: &Report) -> Result<()> {
        let to_error = |source| FinderError::OutputWrite {
            path: document::absolute(&self.path),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(to_error)?;

        file.write_all(report.to_string().as_bytes()).map_err(to_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn report(path: &str) -> Report {
        Report {
            origin: "origin.html".into(),
            modified: "diff.html".into(),
            path: path.into(),
        }
    }

    #[test]
    fn report_is_four_lines() {
        assert_eq!(
            report("html > body > a").to_string(),
            "origin.html\ndiff.html\nhtml > body > a\n\n"
        );
    }

    #[test]
    fn appends_never_overwrite() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("comparison_output.txt");
        fs::write(&path, "previous\n").unwrap();

        let writer = OutputWriter::new(&path);
        writer.append(&report("html > a")).unwrap();
        writer.append(&report("")).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "previous\norigin.html\ndiff.html\nhtml > a\n\norigin.html\ndiff.html\n\n\n"
        );
    }

    #[test]
    fn unwritable_location_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let writer = OutputWriter::new(dir.path().join("no-such-dir").join("out.txt"));
        assert!(matches!(
            writer.append(&report("a")),
            Err(FinderError::OutputWrite { .. })
        ));
    }
}
