use crate::Cell;

/// Live neighbor counts run from 0 to 8 inclusive
const COUNTS: usize = 9;
type RuleTable = [[Cell; COUNTS]; 2];

/// Lookup table for the B3/S23 ruleset, indexed by `[alive as usize][neighbors]`
static RULE_TABLE: RuleTable = generate_rule_table();

/// Returns the next state of a cell given its live neighbor count
///
/// A live cell survives with two or three live neighbors, a dead cell is
/// born with exactly three. Everything else is dead in the next generation.
#[inline]
pub(crate) fn next_state(cell: Cell, neighbors: u8) -> Cell {
    debug_assert!((neighbors as usize) < COUNTS, "more than 8 neighbors");
    RULE_TABLE[cell.is_alive() as usize][neighbors as usize]
}

const fn generate_rule_table() -> RuleTable {
    let mut table = [[Cell::Dead; COUNTS]; 2];
    let mut n = 0;
    while n < COUNTS {
        table[0][n] = if n == 3 { Cell::Alive } else { Cell::Dead };
        table[1][n] = if n == 2 || n == 3 { Cell::Alive } else { Cell::Dead };
        n += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_match_conway_life() {
        assert_eq!(next_state(Cell::Alive, 2), Cell::Alive);
        assert_eq!(next_state(Cell::Alive, 3), Cell::Alive);
        assert_eq!(next_state(Cell::Dead, 3), Cell::Alive);

        assert_eq!(next_state(Cell::Alive, 0), Cell::Dead);
        assert_eq!(next_state(Cell::Alive, 1), Cell::Dead);
        assert_eq!(next_state(Cell::Alive, 4), Cell::Dead);
        assert_eq!(next_state(Cell::Dead, 2), Cell::Dead);
        assert_eq!(next_state(Cell::Dead, 4), Cell::Dead);
    }

    #[test]
    fn death_phrasing_matches_survival_phrasing() {
        for n in 0..COUNTS as u8 {
            // "dies if n < 2 || n > 3" against "survives if n == 2 || n == 3"
            let dies = n < 2 || n > 3;
            let survives = n == 2 || n == 3;
            assert_eq!(dies, !survives, "n = {n}");

            let expected = if dies { Cell::Dead } else { Cell::Alive };
            assert_eq!(next_state(Cell::Alive, n), expected, "alive, n = {n}");
        }
    }

    #[test]
    fn dead_cells_only_birth_on_three() {
        for n in 0..COUNTS as u8 {
            assert_eq!(next_state(Cell::Dead, n).is_alive(), n == 3, "dead, n = {n}");
        }
    }
}
