//! Rule sources.
//!
//! Rules are read either from the set bundled into the binary at compile time
//! ([`EmbeddedSource`], the default) or from a directory on disk
//! ([`DirSource`]).

use std::fs;
use std::path::PathBuf;

use include_dir::{include_dir, Dir};

use crate::error::{Result, RulesError};

/// Rules bundled with the binary.
static RULES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/rules");

/// A place rule files can be listed and read from.
pub trait RuleSource {
    /// Human-readable location, used in messages.
    fn location(&self) -> String;

    /// Path used to identify `filename` in errors.
    fn path_of(&self, filename: &str) -> PathBuf;

    /// Names of all regular files in the source, sorted.
    ///
    /// Entries are not filtered by extension.
    fn entries(&self) -> Result<Vec<String>>;

    /// Read the full content of a file.
    fn read(&self, filename: &str) -> Result<Vec<u8>>;
}

/// Rule files in a directory on disk.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    /// Open a rules directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(RulesError::SourceNotFound { path: root });
        }
        Ok(Self { root })
    }
}

impl RuleSource for DirSource {
    fn location(&self) -> String {
        self.root.display().to_string()
    }

    fn path_of(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    fn entries(&self) -> Result<Vec<String>> {
        let read_err = |source| RulesError::FileRead {
            path: self.root.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            if !entry.path().is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => tracing::warn!("Skipping non UTF-8 file name {:?}", name),
            }
        }

        names.sort();
        Ok(names)
    }

    fn read(&self, filename: &str) -> Result<Vec<u8>> {
        let path = self.path_of(filename);
        fs::read(&path).map_err(|source| RulesError::FileRead { path, source })
    }
}

/// Rule files embedded in the binary.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedSource {
    dir: &'static Dir<'static>,
}

impl EmbeddedSource {
    /// The rules bundled with this build.
    pub fn new() -> Self {
        Self { dir: &RULES_DIR }
    }

    /// Use another embedded directory.
    pub fn from_dir(dir: &'static Dir<'static>) -> Self {
        Self { dir }
    }
}

impl Default for EmbeddedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSource for EmbeddedSource {
    fn location(&self) -> String {
        "bundled rules".to_string()
    }

    fn path_of(&self, filename: &str) -> PathBuf {
        PathBuf::from("rules").join(filename)
    }

    fn entries(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self
            .dir
            .files()
            .filter_map(|f| f.path().file_name()?.to_str())
            .map(String::from)
            .collect();
        names.sort();
        Ok(names)
    }

    fn read(&self, filename: &str) -> Result<Vec<u8>> {
        self.dir
            .files()
            .find(|f| f.path().file_name().and_then(|n| n.to_str()) == Some(filename))
            .map(|f| f.contents().to_vec())
            .ok_or_else(|| RulesError::FileRead {
                path: self.path_of(filename),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not bundled"),
            })
    }
}
