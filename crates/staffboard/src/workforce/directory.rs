use super::domain::EmployeeId;
use super::roster::DirectoryUser;

/// Source of directory entries so the service can be exercised in isolation.
pub trait EmployeeDirectory: Send + Sync {
    fn list(&self) -> Result<Vec<DirectoryUser>, DirectoryError>;
    fn fetch(&self, id: EmployeeId) -> Result<Option<DirectoryUser>, DirectoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}
