use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use super::analytics::{DepartmentAggregate, DepartmentTallies, RatingBand, WorkforceOverview};
use super::directory::{DirectoryError, EmployeeDirectory};
use super::domain::{Department, EmployeeId, WorkforceError};
use super::enrichment::{
    derive_profile, enrich_profile, enrich_summary, DerivedProfile, EnrichedEmployee,
};
use super::search::EmployeeFilter;

/// Service composing the directory with the derivation and analytics layers.
pub struct WorkforceService<D> {
    directory: Arc<D>,
}

#[derive(Debug, thiserror::Error)]
pub enum WorkforceServiceError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error(transparent)]
    Workforce(#[from] WorkforceError),
    #[error("employee {0} not found")]
    NotFound(EmployeeId),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentAnalyticsEntry {
    #[serde(flatten)]
    pub aggregate: DepartmentAggregate,
    pub band: RatingBand,
    pub band_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkforceAnalytics {
    pub overview: WorkforceOverview,
    pub departments: Vec<DepartmentAnalyticsEntry>,
}

impl<D> WorkforceService<D>
where
    D: EmployeeDirectory + 'static,
{
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    pub fn departments(&self) -> [Department; 8] {
        Department::ordered()
    }

    pub fn search(
        &self,
        filter: &EmployeeFilter,
    ) -> Result<Vec<EnrichedEmployee>, WorkforceServiceError> {
        let employees = self.enriched_roster()?;
        let total = employees.len();
        let matched = filter.apply(employees);
        debug!(total, matched = matched.len(), "employee search evaluated");
        Ok(matched)
    }

    pub fn profile(
        &self,
        id: EmployeeId,
        reference_date: NaiveDate,
    ) -> Result<EnrichedEmployee, WorkforceServiceError> {
        let user = self
            .directory
            .fetch(id)?
            .ok_or(WorkforceServiceError::NotFound(id))?;
        Ok(enrich_profile(user, reference_date)?)
    }

    /// Derivations for any identifier, with no directory lookup.
    pub fn derive(
        &self,
        id: EmployeeId,
        reference_date: NaiveDate,
    ) -> Result<DerivedProfile, WorkforceServiceError> {
        Ok(derive_profile(id, reference_date)?)
    }

    pub fn analytics(&self) -> Result<WorkforceAnalytics, WorkforceServiceError> {
        let employees = self.enriched_roster()?;
        let overview = WorkforceOverview::from_records(&employees);
        let departments = DepartmentTallies::from_records(&employees)
            .aggregates()
            .into_iter()
            .map(|aggregate| {
                let band = RatingBand::for_rating(aggregate.average_rating);
                DepartmentAnalyticsEntry {
                    aggregate,
                    band,
                    band_label: band.label(),
                }
            })
            .collect::<Vec<_>>();

        info!(
            employees = overview.total_employees,
            departments = departments.len(),
            "workforce analytics computed"
        );

        Ok(WorkforceAnalytics {
            overview,
            departments,
        })
    }

    fn enriched_roster(&self) -> Result<Vec<EnrichedEmployee>, WorkforceServiceError> {
        Ok(self
            .directory
            .list()?
            .into_iter()
            .map(enrich_summary)
            .collect())
    }
}
