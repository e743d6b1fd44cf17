//! Index arithmetic for both boundary modes

use super::{BoundaryMode, Direction};

/// Index one step away from `current`, or `None` if the boundary forbids it
pub(crate) fn step(
    current: usize,
    len: usize,
    direction: Direction,
    boundary: BoundaryMode,
    min_index: usize,
) -> Option<usize> {
    if len < 2 {
        return None;
    }

    match (boundary, direction) {
        (BoundaryMode::Circular, Direction::Forward) => Some((current + 1) % len),
        (BoundaryMode::Circular, Direction::Backward) => Some((current + len - 1) % len),
        (BoundaryMode::Clamped, Direction::Forward) => {
            (current + 1 < len).then_some(current + 1)
        }
        (BoundaryMode::Clamped, Direction::Backward) => {
            (current > min_index).then(|| current - 1)
        }
    }
}

/// Direction that reaches `target` in exactly one step, if any
///
/// With two items in circular mode both neighbours are the same index; forward wins.
pub(crate) fn adjacent_direction(
    current: usize,
    target: usize,
    len: usize,
    boundary: BoundaryMode,
    min_index: usize,
) -> Option<Direction> {
    if target >= len {
        return None;
    }

    [Direction::Forward, Direction::Backward]
        .into_iter()
        .find(|&direction| step(current, len, direction, boundary, min_index) == Some(target))
}

/// Starting index for a list of `len` items
pub(crate) fn initial_index(
    requested: usize,
    len: usize,
    boundary: BoundaryMode,
    min_index: usize,
) -> usize {
    if len == 0 {
        return 0;
    }

    let last = len - 1;
    match boundary {
        BoundaryMode::Circular => requested.min(last),
        BoundaryMode::Clamped => requested.clamp(min_index.min(last), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circular_wraps_both_ways() {
        assert_eq!(step(4, 5, Direction::Forward, BoundaryMode::Circular, 0), Some(0));
        assert_eq!(step(0, 5, Direction::Backward, BoundaryMode::Circular, 0), Some(4));
    }

    #[test]
    fn test_clamped_stops_at_ends() {
        assert_eq!(step(4, 5, Direction::Forward, BoundaryMode::Clamped, 0), None);
        assert_eq!(step(0, 5, Direction::Backward, BoundaryMode::Clamped, 0), None);
        assert_eq!(step(1, 5, Direction::Backward, BoundaryMode::Clamped, 1), None);
        assert_eq!(step(2, 5, Direction::Backward, BoundaryMode::Clamped, 1), Some(1));
    }

    #[test]
    fn test_single_item_never_steps() {
        assert_eq!(step(0, 1, Direction::Forward, BoundaryMode::Circular, 0), None);
        assert_eq!(step(0, 0, Direction::Forward, BoundaryMode::Clamped, 0), None);
    }

    #[test]
    fn test_adjacency() {
        assert_eq!(adjacent_direction(0, 4, 5, BoundaryMode::Circular, 0), Some(Direction::Backward));
        assert_eq!(adjacent_direction(0, 4, 5, BoundaryMode::Clamped, 0), None);
        assert_eq!(adjacent_direction(2, 3, 5, BoundaryMode::Clamped, 0), Some(Direction::Forward));
        assert_eq!(adjacent_direction(2, 2, 5, BoundaryMode::Circular, 0), None);
        assert_eq!(adjacent_direction(2, 9, 5, BoundaryMode::Circular, 0), None);
        assert_eq!(adjacent_direction(0, 1, 2, BoundaryMode::Circular, 0), Some(Direction::Forward));
    }

    #[test]
    fn test_initial_index_is_kept_in_range() {
        assert_eq!(initial_index(1, 0, BoundaryMode::Clamped, 1), 0);
        assert_eq!(initial_index(0, 6, BoundaryMode::Clamped, 1), 1);
        assert_eq!(initial_index(9, 6, BoundaryMode::Circular, 0), 5);
    }
}
