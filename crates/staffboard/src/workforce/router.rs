use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use super::directory::EmployeeDirectory;
use super::domain::{parse_reference_date, Department, EmployeeId};
use super::enrichment::{DerivedProfile, EnrichedEmployee};
use super::search::EmployeeFilter;
use super::service::{WorkforceAnalytics, WorkforceService, WorkforceServiceError};
use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchQuery {
    #[serde(default)]
    pub(crate) q: Option<String>,
    #[serde(default)]
    pub(crate) departments: Option<String>,
    #[serde(default)]
    pub(crate) ratings: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReferenceDateQuery {
    #[serde(default)]
    pub(crate) today: Option<String>,
}

impl ReferenceDateQuery {
    fn resolve(&self) -> Result<NaiveDate, WorkforceServiceError> {
        match self.today.as_deref() {
            Some(raw) => Ok(parse_reference_date(raw)?),
            None => Ok(Local::now().date_naive()),
        }
    }
}

/// Router builder exposing the catalog, listing, profile, and analytics endpoints.
pub fn workforce_router<D>(service: Arc<WorkforceService<D>>) -> Router
where
    D: EmployeeDirectory + 'static,
{
    Router::new()
        .route("/api/v1/departments", get(departments_handler::<D>))
        .route("/api/v1/employees", get(search_handler::<D>))
        .route("/api/v1/employees/:employee_id", get(profile_handler::<D>))
        .route(
            "/api/v1/derivations/:employee_id",
            get(derivation_handler::<D>),
        )
        .route("/api/v1/analytics", get(analytics_handler::<D>))
        .with_state(service)
}

pub(crate) async fn departments_handler<D>(
    State(service): State<Arc<WorkforceService<D>>>,
) -> Json<Vec<Department>>
where
    D: EmployeeDirectory + 'static,
{
    Json(service.departments().to_vec())
}

pub(crate) async fn search_handler<D>(
    State(service): State<Arc<WorkforceService<D>>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<EnrichedEmployee>>, AppError>
where
    D: EmployeeDirectory + 'static,
{
    let filter = EmployeeFilter::from_query(
        query.q.as_deref(),
        query.departments.as_deref(),
        query.ratings.as_deref(),
    )
    .map_err(WorkforceServiceError::from)?;
    Ok(Json(service.search(&filter)?))
}

pub(crate) async fn profile_handler<D>(
    State(service): State<Arc<WorkforceService<D>>>,
    Path(employee_id): Path<String>,
    Query(query): Query<ReferenceDateQuery>,
) -> Result<Json<EnrichedEmployee>, AppError>
where
    D: EmployeeDirectory + 'static,
{
    let id = employee_id
        .parse::<EmployeeId>()
        .map_err(WorkforceServiceError::from)?;
    let reference_date = query.resolve()?;
    Ok(Json(service.profile(id, reference_date)?))
}

pub(crate) async fn derivation_handler<D>(
    State(service): State<Arc<WorkforceService<D>>>,
    Path(employee_id): Path<String>,
    Query(query): Query<ReferenceDateQuery>,
) -> Result<Json<DerivedProfile>, AppError>
where
    D: EmployeeDirectory + 'static,
{
    let id = employee_id
        .parse::<EmployeeId>()
        .map_err(WorkforceServiceError::from)?;
    let reference_date = query.resolve()?;
    Ok(Json(service.derive(id, reference_date)?))
}

pub(crate) async fn analytics_handler<D>(
    State(service): State<Arc<WorkforceService<D>>>,
) -> Result<Json<WorkforceAnalytics>, AppError>
where
    D: EmployeeDirectory + 'static,
{
    Ok(Json(service.analytics()?))
}
