//! Employee enrichment: deterministic derivations, roster import, search, and analytics.

pub mod analytics;
pub mod assignment;
pub mod directory;
pub mod domain;
pub mod enrichment;
pub mod generators;
pub mod roster;
pub mod router;
pub mod search;
pub mod service;

#[cfg(test)]
mod tests;

pub use analytics::{
    aggregate_by_department, DepartmentAggregate, DepartmentRating, DepartmentTallies,
    RatedRecord, RatingBand, RatingTally, WorkforceOverview,
};
pub use assignment::{department_for, rating_for};
pub use directory::{DirectoryError, EmployeeDirectory};
pub use domain::{
    parse_reference_date, Department, EmployeeId, FeedbackRecord, ProjectRecord, ProjectStatus,
    Rating, WorkforceError,
};
pub use enrichment::{
    derive_profile, enrich_profile, enrich_summary, DerivedProfile, EnrichedEmployee,
};
pub use generators::{generate_feedback, generate_projects};
pub use roster::{DirectoryUser, PostalAddress, RosterImportError, RosterImporter, RosterPage};
pub use router::workforce_router;
pub use search::EmployeeFilter;
pub use service::{
    DepartmentAnalyticsEntry, WorkforceAnalytics, WorkforceService, WorkforceServiceError,
};
