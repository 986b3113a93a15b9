use super::analytics::RatedRecord;
use super::assignment::{department_for, rating_for};
use super::domain::{Department, EmployeeId, FeedbackRecord, ProjectRecord, Rating, WorkforceError};
use super::generators::{generate_feedback, generate_projects};
use super::roster::DirectoryUser;
use chrono::NaiveDate;
use serde::Serialize;

/// Directory entry merged with its derived department, rating, and optional history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedEmployee {
    #[serde(flatten)]
    pub user: DirectoryUser,
    pub department: Department,
    pub performance_rating: Rating,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<ProjectRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedbacks: Option<Vec<FeedbackRecord>>,
}

impl RatedRecord for EnrichedEmployee {
    fn department(&self) -> Department {
        self.department
    }

    fn rating(&self) -> Rating {
        self.performance_rating
    }
}

/// Everything derivable from an identifier alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedProfile {
    pub id: EmployeeId,
    pub department: Department,
    pub performance_rating: Rating,
    pub projects: Vec<ProjectRecord>,
    pub feedbacks: Vec<FeedbackRecord>,
}

pub fn derive_profile(
    id: EmployeeId,
    reference_date: NaiveDate,
) -> Result<DerivedProfile, WorkforceError> {
    Ok(DerivedProfile {
        id,
        department: department_for(id),
        performance_rating: rating_for(id),
        projects: generate_projects(id, reference_date)?,
        feedbacks: generate_feedback(id, reference_date)?,
    })
}

/// Listing view: department and rating only.
pub fn enrich_summary(user: DirectoryUser) -> EnrichedEmployee {
    let id = user.id;
    EnrichedEmployee {
        user,
        department: department_for(id),
        performance_rating: rating_for(id),
        projects: None,
        feedbacks: None,
    }
}

/// Profile view: listing fields plus project and feedback history.
pub fn enrich_profile(
    user: DirectoryUser,
    reference_date: NaiveDate,
) -> Result<EnrichedEmployee, WorkforceError> {
    let derived = derive_profile(user.id, reference_date)?;
    Ok(EnrichedEmployee {
        user,
        department: derived.department,
        performance_rating: derived.performance_rating,
        projects: Some(derived.projects),
        feedbacks: Some(derived.feedbacks),
    })
}
