//! The B3/S23 transition rule.

/// Computes the next state of a cell from its current state and live
/// neighbor count.
///
/// Standard Conway rules: a live cell survives with 2 or 3 live neighbors,
/// a dead cell is born with exactly 3. Everything else is dead.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,
        (false, 3) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_rule_table() {
        // All 18 (liveness, neighbor count) combinations.
        for neighbors in 0..=8u8 {
            let survives = neighbors == 2 || neighbors == 3;
            assert_eq!(
                next_state(true, neighbors),
                survives,
                "live cell with {neighbors} neighbors"
            );

            let born = neighbors == 3;
            assert_eq!(
                next_state(false, neighbors),
                born,
                "dead cell with {neighbors} neighbors"
            );
        }
    }

    #[test]
    fn test_deterministic() {
        for neighbors in 0..=8u8 {
            for alive in [false, true] {
                assert_eq!(next_state(alive, neighbors), next_state(alive, neighbors));
            }
        }
    }
}
