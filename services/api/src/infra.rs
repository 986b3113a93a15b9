use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use staffboard::workforce::{
    parse_reference_date, DirectoryError, DirectoryUser, EmployeeDirectory, EmployeeId,
    RosterImportError, RosterImporter, RosterPage,
};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read-only roster held in memory for the lifetime of the process.
#[derive(Debug, Default, Clone)]
pub(crate) struct InMemoryDirectory {
    users: Arc<Vec<DirectoryUser>>,
}

impl InMemoryDirectory {
    pub(crate) fn from_page(page: RosterPage) -> Self {
        Self {
            users: Arc::new(page.users),
        }
    }

    pub(crate) fn load(path: Option<&Path>) -> Result<Self, RosterImportError> {
        match path {
            Some(path) => {
                let page = RosterImporter::from_path(path)?;
                info!(path = %path.display(), users = page.users.len(), "roster loaded");
                Ok(Self::from_page(page))
            }
            None => {
                warn!("no roster configured; serving an empty directory");
                Ok(Self::default())
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.users.len()
    }
}

impl EmployeeDirectory for InMemoryDirectory {
    fn list(&self) -> Result<Vec<DirectoryUser>, DirectoryError> {
        Ok(self.users.as_ref().clone())
    }

    fn fetch(&self, id: EmployeeId) -> Result<Option<DirectoryUser>, DirectoryError> {
        Ok(self.users.iter().find(|user| user.id == id).cloned())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    parse_reference_date(raw).map_err(|err| err.to_string())
}

pub(crate) fn parse_identifier(raw: &str) -> Result<EmployeeId, String> {
    raw.parse::<EmployeeId>().map_err(|err| err.to_string())
}
