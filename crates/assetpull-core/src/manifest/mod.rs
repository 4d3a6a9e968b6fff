//! Asset manifest: the ordered list of remote filenames to fetch.
//!
//! Entries are validated up front so every name can be used verbatim both as
//! a URL suffix and as a file name directly under the destination directory.

mod builtin;
mod parse;

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("invalid manifest entry {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("manifest line {line}")]
    Line {
        line: usize,
        #[source]
        source: Box<ManifestError>,
    },

    #[error("cannot read manifest {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Ordered list of filenames. Insertion order is download order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    names: Vec<String>,
}

impl Manifest {
    /// Builds a manifest, rejecting any entry that is not a flat file name.
    pub fn new<I, S>(names: I) -> Result<Self, ManifestError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        for name in &names {
            parse::validate_name(name)?;
        }
        Ok(Self { names })
    }

    /// The list this tool was written for (images, movies, icons).
    pub fn builtin() -> Self {
        Self {
            names: builtin::names(),
        }
    }

    /// Parses manifest text: one name per line, blank lines and `#` comments skipped.
    pub fn parse(text: &str) -> Result<Self, ManifestError> {
        let mut names = Vec::new();
        for (line, name) in parse::parse_lines(text) {
            parse::validate_name(&name).map_err(|e| ManifestError::Line {
                line,
                source: Box::new(e),
            })?;
            names.push(name);
        }
        Ok(Self { names })
    }

    /// Reads and parses a manifest file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::parse(&text)?;
        tracing::debug!(
            "loaded manifest {} ({} entries)",
            path.display(),
            manifest.len()
        );
        Ok(manifest)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_order_and_size() {
        let m = Manifest::builtin();
        assert_eq!(m.len(), 30);
        assert_eq!(m.names()[0], "example-antelope.jpg");
        assert_eq!(m.names()[11], "loading.jpg");
        assert_eq!(m.names()[12], "tutorial-mode1.mov");
        assert_eq!(m.names()[29], "key-rectBig.svg");
    }

    #[test]
    fn builtin_entries_are_valid() {
        let m = Manifest::builtin();
        assert!(Manifest::new(m.names().to_vec()).is_ok());
    }

    #[test]
    fn new_keeps_order_and_duplicates() {
        let m = Manifest::new(["c.jpg", "a.jpg", "c.jpg"]).unwrap();
        assert_eq!(m.iter().collect::<Vec<_>>(), vec!["c.jpg", "a.jpg", "c.jpg"]);
    }

    #[test]
    fn new_rejects_nested_paths() {
        let err = Manifest::new(["ok.jpg", "../etc/passwd"]).unwrap_err();
        assert!(matches!(err, ManifestError::InvalidName { ref name, .. } if name == "../etc/passwd"));
    }

    #[test]
    fn empty_manifest_is_allowed() {
        let m = Manifest::new(Vec::<String>::new()).unwrap();
        assert!(m.is_empty());
        assert_eq!(Manifest::parse("# nothing here\n\n").unwrap().len(), 0);
    }

    #[test]
    fn parse_reports_line_number() {
        let err = Manifest::parse("a.jpg\n# c\nsub/b.jpg\n").unwrap_err();
        match err {
            ManifestError::Line { line, .. } => assert_eq!(line, 3),
            other => panic!("expected Line error, got {other:?}"),
        }
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "# Icons.").unwrap();
        writeln!(f, "icon_pause.svg").unwrap();
        writeln!(f, "icon_play.svg").unwrap();
        f.flush().unwrap();
        let m = Manifest::load(f.path()).unwrap();
        assert_eq!(m.names(), &["icon_pause.svg", "icon_play.svg"]);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Manifest::load(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, ManifestError::Read { .. }));
    }
}
