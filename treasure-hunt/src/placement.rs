//! Random board generation by rejection sampling.

use rand::prelude::*;
use rand::rngs::StdRng;
use trove_core::{Grid, Position};

use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::state::GridState;
use crate::tile::Tile;

/// Random draws tried for a single treasure or player before picking
/// directly among the cells that are still empty.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Build the placement RNG for `config`, drawing a fresh seed when none is
/// configured. Returns the seed so a game can be replayed.
pub fn seeded_rng(config: &GameConfig) -> (StdRng, u64) {
    let seed = config.seed.unwrap_or_else(rand::random);
    (StdRng::seed_from_u64(seed), seed)
}

impl GridState {
    /// Generate a random board.
    ///
    /// Places `size²/10` obstacles on uniformly drawn cells (repeats onto an
    /// existing obstacle are kept as no-ops), then each treasure and finally
    /// the player on a drawn cell that is still empty, redrawing on
    /// collision. Crowded boards that keep missing fall back to a uniform
    /// pick among the empty cells, so a board that passed the free-cell
    /// check always fills.
    pub fn generate(config: &GameConfig, rng: &mut StdRng) -> Result<Self> {
        config.validate()?;
        let size = config.size;
        let mut grid: Grid<Tile> = Grid::new(size, size);

        for _ in 0..config.obstacle_count() {
            grid.set(random_cell(size, rng), Tile::Obstacle);
        }

        let free = grid.count(|&t| t == Tile::Empty);
        if config.treasures >= free {
            return Err(GameError::TooManyTreasures {
                requested: config.treasures,
                free,
            });
        }

        for _ in 0..config.treasures {
            let p = place_on_empty(&grid, rng, "treasure", MAX_PLACEMENT_ATTEMPTS)?;
            grid.set(p, Tile::Treasure);
        }
        let player = place_on_empty(&grid, rng, "player", MAX_PLACEMENT_ATTEMPTS)?;
        grid.set(player, Tile::Player);

        log::debug!(
            "generated {size}x{size} board: {} obstacles, {} treasures, player at {player}",
            grid.count(|&t| t == Tile::Obstacle),
            config.treasures,
        );
        Ok(GridState::from_grid(grid, player))
    }
}

fn random_cell(size: i32, rng: &mut StdRng) -> Position {
    Position::new(rng.random_range(0..size), rng.random_range(0..size))
}

/// Draw cells until one is empty. After `max_attempts` misses, pick
/// uniformly among the empty cells instead; fails only when there are none.
fn place_on_empty(
    grid: &Grid<Tile>,
    rng: &mut StdRng,
    what: &'static str,
    max_attempts: u32,
) -> Result<Position> {
    for attempt in 0..max_attempts {
        let p = random_cell(grid.rows(), rng);
        if grid.at(p) == Some(Tile::Empty) {
            if attempt > 0 {
                log::trace!("{what} placed at {p} after {} redraws", attempt);
            }
            return Ok(p);
        }
    }

    let empty: Vec<Position> = grid.positions(|&t| t == Tile::Empty).collect();
    if empty.is_empty() {
        log::warn!("no empty cell left for the {what}");
        return Err(GameError::PlacementExhausted {
            what,
            attempts: max_attempts,
        });
    }
    log::debug!(
        "{what}: {max_attempts} draws missed, picking among {} empty cells",
        empty.len()
    );
    Ok(empty[rng.random_range(0..empty.len())])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(size: i32, treasures: usize, seed: u64) -> GameConfig {
        GameConfig {
            size,
            treasures,
            seed: Some(seed),
        }
    }

    fn generate(c: &GameConfig) -> Result<GridState> {
        let (mut rng, _) = seeded_rng(c);
        GridState::generate(c, &mut rng)
    }

    #[test]
    fn default_board_has_expected_contents() {
        for seed in 0..20 {
            let c = config(10, 3, seed);
            let s = generate(&c).unwrap();
            let g = s.grid();
            assert_eq!(s.size(), 10);
            assert_eq!(g.count(|&t| t == Tile::Player), 1);
            assert_eq!(g.count(|&t| t == Tile::Treasure), 3);
            assert_eq!(s.total_treasures(), 3);
            let obstacles = g.count(|&t| t == Tile::Obstacle);
            assert!((1..=10).contains(&obstacles), "seed {seed}: {obstacles}");
            assert_eq!(s.tile_at(s.player()), Some(Tile::Player));
            assert!(s.treasures().iter().all(|&p| s.tile_at(p) == Some(Tile::Treasure)));
        }
    }

    #[test]
    fn same_seed_same_board() {
        let c = config(8, 4, 1234);
        assert_eq!(generate(&c).unwrap(), generate(&c).unwrap());
    }

    #[test]
    fn seed_is_reported() {
        let (_, seed) = seeded_rng(&config(5, 1, 77));
        assert_eq!(seed, 77);
    }

    #[test]
    fn fills_a_board_with_no_obstacles() {
        // 2x2 places no obstacles, so three treasures and the player fill it.
        let s = generate(&config(2, 3, 5)).unwrap();
        assert_eq!(s.grid().count(|&t| t == Tile::Empty), 0);
        assert_eq!(s.treasures().len(), 3);
    }

    #[test]
    fn invalid_config_fails_before_placing() {
        assert_eq!(
            generate(&config(0, 3, 1)).unwrap_err(),
            GameError::InvalidSize(0)
        );
        assert_eq!(
            generate(&config(3, 0, 1)).unwrap_err(),
            GameError::NoTreasures
        );
    }

    #[test]
    fn obstacles_can_crowd_out_treasures() {
        // 4x4 draws one obstacle, leaving 15 cells for 15 treasures + player.
        assert_eq!(
            generate(&config(4, 15, 9)).unwrap_err(),
            GameError::TooManyTreasures {
                requested: 15,
                free: 15
            }
        );
    }

    #[test]
    fn crowded_but_feasible_boards_always_fill() {
        // 1000 obstacle draws leave at least 9000 free cells, so 8999
        // treasures plus the player fit; the last placements have very few
        // empty cells left to hit.
        for seed in 0..5 {
            let s = generate(&config(100, 8999, seed)).unwrap();
            let g = s.grid();
            assert_eq!(g.count(|&t| t == Tile::Player), 1, "seed {seed}");
            assert_eq!(g.count(|&t| t == Tile::Treasure), 8999, "seed {seed}");
            assert_eq!(s.tile_at(s.player()), Some(Tile::Player));
        }
    }

    #[test]
    fn missed_draws_fall_back_to_an_empty_cell() {
        let mut grid = Grid::filled(100, 100, Tile::Obstacle);
        let hole = Position::new(57, 31);
        grid.set(hole, Tile::Empty);
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(place_on_empty(&grid, &mut rng, "player", 5), Ok(hole));
        }
    }

    #[test]
    fn placement_gives_up_on_a_full_grid() {
        let grid = Grid::filled(3, 3, Tile::Obstacle);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            place_on_empty(&grid, &mut rng, "player", 50).unwrap_err(),
            GameError::PlacementExhausted {
                what: "player",
                attempts: 50
            }
        );
    }
}
