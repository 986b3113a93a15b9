use super::aggregate::{RatedRecord, RatingTally};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingBand {
    Exceptional,
    Strong,
    Steady,
    Developing,
    Critical,
}

impl RatingBand {
    pub fn for_rating(rating: f64) -> Self {
        if rating >= 4.5 {
            Self::Exceptional
        } else if rating >= 3.5 {
            Self::Strong
        } else if rating >= 2.5 {
            Self::Steady
        } else if rating >= 1.5 {
            Self::Developing
        } else {
            Self::Critical
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Exceptional => "Exceptional",
            Self::Strong => "Strong",
            Self::Steady => "Steady",
            Self::Developing => "Developing",
            Self::Critical => "Critical",
        }
    }
}

/// Roster-wide headline numbers for the analytics view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkforceOverview {
    pub total_employees: usize,
    pub average_rating: f64,
    /// Rated 4 or higher.
    pub top_performers: usize,
    /// Rated 2 or lower.
    pub needs_improvement: usize,
}

impl WorkforceOverview {
    pub fn from_records<'a, R, I>(records: I) -> Self
    where
        R: RatedRecord + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let mut tally = RatingTally::default();
        let mut top_performers = 0;
        let mut needs_improvement = 0;

        for record in records {
            let rating = record.rating();
            tally.record(rating);
            if rating.value() >= 4 {
                top_performers += 1;
            }
            if rating.value() <= 2 {
                needs_improvement += 1;
            }
        }

        Self {
            total_employees: tally.count,
            average_rating: tally.average().unwrap_or(0.0),
            top_performers,
            needs_improvement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::DepartmentRating;
    use super::*;
    use crate::workforce::domain::{Department, Rating};

    #[test]
    fn overview_counts_performance_tiers() {
        let records: Vec<DepartmentRating> = [5, 4, 3, 2, 1, 4]
            .into_iter()
            .map(|value| DepartmentRating {
                department: Department::Sales,
                rating: Rating::new(value).unwrap(),
            })
            .collect();

        let overview = WorkforceOverview::from_records(&records);
        assert_eq!(overview.total_employees, 6);
        assert_eq!(overview.average_rating, 3.2);
        assert_eq!(overview.top_performers, 3);
        assert_eq!(overview.needs_improvement, 2);
    }

    #[test]
    fn empty_overview_reports_zero_average() {
        let records: Vec<DepartmentRating> = Vec::new();
        let overview = WorkforceOverview::from_records(&records);
        assert_eq!(overview.total_employees, 0);
        assert_eq!(overview.average_rating, 0.0);
    }

    #[test]
    fn bands_follow_half_star_thresholds() {
        assert_eq!(RatingBand::for_rating(5.0), RatingBand::Exceptional);
        assert_eq!(RatingBand::for_rating(4.5), RatingBand::Exceptional);
        assert_eq!(RatingBand::for_rating(4.4), RatingBand::Strong);
        assert_eq!(RatingBand::for_rating(2.5), RatingBand::Steady);
        assert_eq!(RatingBand::for_rating(1.5), RatingBand::Developing);
        assert_eq!(RatingBand::for_rating(1.0), RatingBand::Critical);
        assert_eq!(RatingBand::Steady.label(), "Steady");
    }
}
