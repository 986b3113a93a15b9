mod records;

pub use records::{DirectoryUser, PostalAddress, RosterPage};

use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster: {}", err),
            RosterImportError::Json(err) => write!(f, "invalid roster JSON: {}", err),
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for RosterImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Loads roster pages saved from the upstream users endpoint.
pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<RosterPage, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<RosterPage, RosterImportError> {
        let page: RosterPage = serde_json::from_reader(reader)?;
        debug!(users = page.users.len(), total = page.total, "roster page parsed");
        Ok(page)
    }
}
