/// One step of a unit ladder: the unit and its size in base units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rung<U> {
    pub unit: U,
    pub scale: u64,
}

impl<U> Rung<U> {
    pub const fn new(unit: U, scale: u64) -> Self {
        Rung { unit, scale }
    }
}

/// Returns the smallest rung whose successor's scale exceeds `magnitude`, or the
/// last rung when `magnitude` reaches every threshold. `None` for an empty ladder.
///
/// `ladder` must be strictly increasing in scale.
pub fn select_unit<U>(magnitude: u64, ladder: &[Rung<U>]) -> Option<&Rung<U>> {
    debug_assert!(ladder.windows(2).all(|w| w[0].scale < w[1].scale));
    ladder
        .windows(2)
        .find(|w| magnitude < w[1].scale)
        .map(|w| &w[0])
        .or_else(|| ladder.last())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LADDER: [Rung<char>; 3] = [Rung::new('a', 1), Rung::new('b', 10), Rung::new('c', 100)];

    #[test]
    fn test_select_unit_base_below_first_threshold() {
        assert_eq!(select_unit(0, &LADDER).unwrap().unit, 'a');
        assert_eq!(select_unit(9, &LADDER).unwrap().unit, 'a');
    }

    #[test]
    fn test_select_unit_boundary_moves_up() {
        assert_eq!(select_unit(10, &LADDER).unwrap().unit, 'b');
        assert_eq!(select_unit(99, &LADDER).unwrap().unit, 'b');
        assert_eq!(select_unit(100, &LADDER).unwrap().unit, 'c');
    }

    #[test]
    fn test_select_unit_beyond_ladder() {
        assert_eq!(select_unit(u64::MAX, &LADDER).unwrap().unit, 'c');
    }

    #[test]
    fn test_select_unit_single_rung() {
        let ladder = [Rung::new('x', 1)];
        assert_eq!(select_unit(42, &ladder).unwrap().unit, 'x');
    }

    #[test]
    fn test_select_unit_empty_ladder() {
        let ladder: [Rung<char>; 0] = [];
        assert!(select_unit(42, &ladder).is_none());
    }
}
