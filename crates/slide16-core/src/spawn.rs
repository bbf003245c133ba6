//! Random tile spawning.

use crate::grid::{Grid, TileId};
use rand::seq::SliceRandom;
use rand::Rng;

/// Probability that a spawned tile is a 4 rather than a 2.
pub const FOUR_PROBABILITY: f64 = 0.1;

/// Insert one new tile into a uniformly chosen empty cell: value 4 with
/// probability 0.1, otherwise 2. A full board is a no-op returning `None`;
/// that only happens on the terminal move and is handled by the caller.
pub fn spawn_tile<R: Rng>(grid: &mut Grid, rng: &mut R) -> Option<TileId> {
    let empties = grid.empty_cells();
    let &(row, col) = empties.choose(rng)?;
    let value = if rng.gen_bool(FOUR_PROBABILITY) { 4 } else { 2 };
    Some(grid.insert_tile(row, col, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::SIZE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_fills_an_empty_cell() {
        let mut grid = Grid::new();
        let mut rng = StdRng::seed_from_u64(7);

        let id = spawn_tile(&mut grid, &mut rng).expect("board has room");
        let tile = grid.tile(id).unwrap();
        assert!(tile.value == 2 || tile.value == 4);
        assert_eq!(grid.tile_count(), 1);
        assert_eq!(grid.get(tile.row, tile.col).unwrap().id, id);
    }

    #[test]
    fn test_spawn_on_full_board_is_noop() {
        let mut grid = Grid::from_values([[2; SIZE]; SIZE]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(spawn_tile(&mut grid, &mut rng), None);
        assert_eq!(grid.tile_count(), SIZE * SIZE);
    }

    #[test]
    fn test_spawn_targets_the_only_empty_cell() {
        let mut grid = Grid::from_values([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 0, 4],
            [4, 2, 4, 2],
        ]);
        let mut rng = StdRng::seed_from_u64(7);
        let id = spawn_tile(&mut grid, &mut rng).unwrap();
        let tile = grid.tile(id).unwrap();
        assert_eq!((tile.row, tile.col), (2, 2));
    }

    #[test]
    fn test_spawn_values_favor_twos() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut twos = 0;
        let mut fours = 0;
        for _ in 0..500 {
            let mut grid = Grid::new();
            let id = spawn_tile(&mut grid, &mut rng).unwrap();
            match grid.tile(id).unwrap().value {
                2 => twos += 1,
                4 => fours += 1,
                other => panic!("unexpected spawn value {other}"),
            }
        }
        assert!(fours > 0);
        assert!(twos > fours * 4);
    }
}
