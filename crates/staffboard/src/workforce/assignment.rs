use super::domain::{Department, EmployeeId, Rating};

/// Department for an identifier: `catalog[id mod 8]` over [`Department::ordered`].
pub fn department_for(id: EmployeeId) -> Department {
    let catalog = Department::ordered();
    catalog[id.value() as usize % catalog.len()]
}

/// Rating for an identifier, seeded by `(id * 13) mod 100`.
pub fn rating_for(id: EmployeeId) -> Rating {
    let seed = (u64::from(id.value()) * 13) % 100;
    Rating::from_seed(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn department_follows_catalog_order() {
        let catalog = Department::ordered();
        for raw in 0..64_u32 {
            let id = EmployeeId::new(raw);
            assert_eq!(department_for(id), catalog[(raw % 8) as usize]);
        }
        assert_eq!(department_for(EmployeeId::new(8)), Department::Engineering);
        assert_eq!(department_for(EmployeeId::new(3)), Department::HumanResources);
        assert_eq!(department_for(EmployeeId::new(u32::MAX)), Department::CustomerSupport);
    }

    #[test]
    fn rating_matches_seed_formula() {
        assert_eq!(rating_for(EmployeeId::new(1)).value(), 1);
        assert_eq!(rating_for(EmployeeId::new(10)).value(), 2);
        // seed 13 * 7 = 91
        assert_eq!(rating_for(EmployeeId::new(7)).value(), 5);
        assert_eq!(rating_for(EmployeeId::new(0)).value(), 1);
    }

    #[test]
    fn rating_stays_on_scale_and_is_repeatable() {
        for raw in (0..2_000_u32).chain([u32::MAX - 1, u32::MAX]) {
            let id = EmployeeId::new(raw);
            let rating = rating_for(id);
            assert!((1..=5).contains(&rating.value()));
            assert_eq!(rating, rating_for(id));
            assert_eq!(department_for(id), department_for(id));
        }
    }
}
