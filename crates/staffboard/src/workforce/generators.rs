//! Mock project and feedback histories derived from an identifier.
//!
//! The reference date stands in for "today"; callers read the clock at the
//! boundary so every sequence here is reproducible.

use super::domain::{
    EmployeeId, FeedbackRecord, ProjectRecord, ProjectStatus, Rating, WorkforceError,
    CONSTRUCTIVE_FEEDBACK, POSITIVE_FEEDBACK,
};
use chrono::{Days, Months, NaiveDate};

const SEED_MODULUS: u64 = 100;
const PROJECT_DURATION_STEP_DAYS: u64 = 30;
const FEEDBACK_SEED_FACTOR: u64 = 7;

/// Between two and five projects, ordered by ordinal.
pub fn generate_projects(
    id: EmployeeId,
    reference_date: NaiveDate,
) -> Result<Vec<ProjectRecord>, WorkforceError> {
    let id_value = u64::from(id.value());
    let count = 2 + id_value % 4;

    (1..=count)
        .map(|ordinal| -> Result<ProjectRecord, WorkforceError> {
            let seed = (id_value * ordinal) % SEED_MODULUS;
            let status = ProjectStatus::from_seed(seed);
            let start_date = months_before(reference_date, ordinal * 2)?;
            let end_date = match status {
                ProjectStatus::Completed => {
                    let span = (seed / 10) * PROJECT_DURATION_STEP_DAYS;
                    Some(
                        start_date
                            .checked_add_days(Days::new(span))
                            .ok_or(WorkforceError::DateOutOfRange(reference_date))?,
                    )
                }
                ProjectStatus::InProgress | ProjectStatus::Planned => None,
            };

            Ok(ProjectRecord {
                id: id_value * 100 + ordinal,
                name: format!("Project {}{}", letter(seed), ordinal),
                status,
                start_date,
                end_date,
                description: status.description(),
            })
        })
        .collect()
}

/// Between one and five feedback entries, ordered by ordinal.
pub fn generate_feedback(
    id: EmployeeId,
    reference_date: NaiveDate,
) -> Result<Vec<FeedbackRecord>, WorkforceError> {
    let id_value = u64::from(id.value());
    let count = 1 + id_value % 5;

    (1..=count)
        .map(|ordinal| -> Result<FeedbackRecord, WorkforceError> {
            let seed = (id_value * ordinal * FEEDBACK_SEED_FACTOR) % SEED_MODULUS;
            let rating = Rating::from_seed(seed);
            let comment = if rating.value() > 3 {
                POSITIVE_FEEDBACK
            } else {
                CONSTRUCTIVE_FEEDBACK
            };

            Ok(FeedbackRecord {
                id: id_value * 100 + ordinal,
                date: months_before(reference_date, ordinal)?,
                reviewer: format!("Manager {}", letter(seed + ordinal)),
                rating,
                comment,
            })
        })
        .collect()
}

// Clamps to the last day of the target month when the day does not exist there,
// so 03-31 minus one month is 02-28 rather than rolling over into early March.
fn months_before(reference_date: NaiveDate, months: u64) -> Result<NaiveDate, WorkforceError> {
    u32::try_from(months)
        .ok()
        .and_then(|months| reference_date.checked_sub_months(Months::new(months)))
        .ok_or(WorkforceError::DateOutOfRange(reference_date))
}

fn letter(value: u64) -> char {
    char::from(b'A' + (value % 26) as u8)
}
