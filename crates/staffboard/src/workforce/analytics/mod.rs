mod aggregate;
mod overview;

pub use aggregate::{
    aggregate_by_department, DepartmentAggregate, DepartmentRating, DepartmentTallies,
    RatedRecord, RatingTally,
};
pub use overview::{RatingBand, WorkforceOverview};

/// Mean of `total / count` rounded half-up to one decimal place.
///
/// Works in integer tenths so `x.x5` boundaries round the same way on every platform.
pub(crate) fn rounded_mean(total: u64, count: u64) -> Option<f64> {
    if count == 0 {
        return None;
    }
    let tenths = (total * 20 + count) / (count * 2);
    Some(tenths as f64 / 10.0)
}
