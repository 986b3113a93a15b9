use super::domain::{Department, Rating, WorkforceError};
use super::enrichment::EnrichedEmployee;

/// Free-text, department, and rating filter for the employee listing.
///
/// Empty criteria match everything. Ratings compare by whole-star equality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    pub search_term: String,
    pub departments: Vec<Department>,
    pub ratings: Vec<Rating>,
}

impl EmployeeFilter {
    /// Builds a filter from comma-separated query values.
    pub fn from_query(
        search_term: Option<&str>,
        departments: Option<&str>,
        ratings: Option<&str>,
    ) -> Result<Self, WorkforceError> {
        Ok(Self {
            search_term: search_term.unwrap_or_default().trim().to_string(),
            departments: split_list(departments)
                .map(str::parse::<Department>)
                .collect::<Result<Vec<_>, _>>()?,
            ratings: split_list(ratings)
                .map(str::parse::<Rating>)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.departments.is_empty() && self.ratings.is_empty()
    }

    pub fn matches(&self, employee: &EnrichedEmployee) -> bool {
        self.matches_term(employee)
            && (self.departments.is_empty() || self.departments.contains(&employee.department))
            && (self.ratings.is_empty() || self.ratings.contains(&employee.performance_rating))
    }

    pub fn apply(&self, employees: Vec<EnrichedEmployee>) -> Vec<EnrichedEmployee> {
        employees
            .into_iter()
            .filter(|employee| self.matches(employee))
            .collect()
    }

    fn matches_term(&self, employee: &EnrichedEmployee) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        [
            employee.user.first_name.as_str(),
            employee.user.last_name.as_str(),
            employee.user.email.as_str(),
            employee.department.label(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

fn split_list(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
