use super::super::domain::{Department, Rating};
use super::rounded_mean;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Anything carrying a department and a whole-star rating.
pub trait RatedRecord {
    fn department(&self) -> Department;
    fn rating(&self) -> Rating;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentRating {
    pub department: Department,
    pub rating: Rating,
}

impl RatedRecord for DepartmentRating {
    fn department(&self) -> Department {
        self.department
    }

    fn rating(&self) -> Rating {
        self.rating
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentAggregate {
    pub department: Department,
    pub average_rating: f64,
    pub employee_count: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RatingTally {
    pub total: u64,
    pub count: usize,
}

impl RatingTally {
    pub fn record(&mut self, rating: Rating) {
        self.total += u64::from(rating.value());
        self.count += 1;
    }

    pub fn merge(self, other: RatingTally) -> RatingTally {
        RatingTally {
            total: self.total + other.total,
            count: self.count + other.count,
        }
    }

    pub fn average(&self) -> Option<f64> {
        rounded_mean(self.total, self.count as u64)
    }
}

/// Running per-department totals, kept in first-seen order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DepartmentTallies {
    order: Vec<Department>,
    tallies: HashMap<Department, RatingTally>,
}

impl DepartmentTallies {
    pub fn from_records<'a, R, I>(records: I) -> Self
    where
        R: RatedRecord + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let mut tallies = Self::default();
        for record in records {
            tallies.record(record.department(), record.rating());
        }
        tallies
    }

    pub fn record(&mut self, department: Department, rating: Rating) {
        self.entry(department).record(rating);
    }

    /// Folds another set of tallies in; departments new to `self` keep `other`'s order.
    pub fn merge(mut self, other: &DepartmentTallies) -> Self {
        for department in &other.order {
            if let Some(tally) = other.tallies.get(department) {
                let entry = self.entry(*department);
                *entry = entry.merge(*tally);
            }
        }
        self
    }

    pub fn get(&self, department: Department) -> Option<RatingTally> {
        self.tallies.get(&department).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn aggregates(&self) -> Vec<DepartmentAggregate> {
        self.order
            .iter()
            .filter_map(|department| {
                let tally = self.tallies.get(department)?;
                Some(DepartmentAggregate {
                    department: *department,
                    average_rating: tally.average()?,
                    employee_count: tally.count,
                })
            })
            .collect()
    }

    fn entry(&mut self, department: Department) -> &mut RatingTally {
        if !self.tallies.contains_key(&department) {
            self.order.push(department);
        }
        self.tallies.entry(department).or_default()
    }
}

/// One aggregate per department present in `records`, in order of first appearance.
pub fn aggregate_by_department<'a, R, I>(records: I) -> Vec<DepartmentAggregate>
where
    R: RatedRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    DepartmentTallies::from_records(records).aggregates()
}
