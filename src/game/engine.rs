use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use super::{
    config::GameConfig,
    grid::Grid,
    state::{GameState, Point, Snake},
};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Whether the head landed on the food this tick
    pub ate_food: bool,
    /// Tail segments cut off because the head ran into them
    pub segments_lost: usize,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new engine, seeded from `config.seed` when one is set
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Build the starting state and place the first food
    pub fn reset(&mut self) -> GameState {
        let grid = self.config.grid();
        let snake = Snake::new(
            self.config.initial_head,
            self.config.initial_tail.clone(),
            self.config.initial_direction,
        );

        let food = match self.generate_food(&snake, grid) {
            Some(food) => food,
            None => {
                // Only reachable with a config that fails `validate`
                warn!("starting snake leaves no free cell for food");
                Point::new(1, 1)
            }
        };

        GameState::new(snake, food, grid)
    }

    /// Run one simulation step: move, eat, then check for a self-bite
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        state.snake.advance(state.grid);
        let ate_food = self.check_food(state);
        let segments_lost = state.snake.bite();
        state.ticks += 1;

        if segments_lost > 0 {
            debug!(
                tick = state.ticks,
                segments_lost,
                length = state.snake.cell_count(),
                "snake bit itself"
            );
        }

        TickOutcome {
            ate_food,
            segments_lost,
        }
    }

    /// If the head is on the food, queue one segment of growth and
    /// place new food right away. Returns whether food was eaten.
    pub fn check_food(&mut self, state: &mut GameState) -> bool {
        if state.snake.head != state.food {
            return false;
        }

        state.snake.growth += 1;
        match self.generate_food(&state.snake, state.grid) {
            Some(food) => {
                debug!(x = food.x, y = food.y, growth = state.snake.growth, "food eaten");
                state.food = food;
            }
            None => warn!("no free cell left for food"),
        }
        true
    }

    /// Pick a random food cell not covered by the snake.
    ///
    /// Draws uniformly from `[1, size - 1]` on both axes up to
    /// `food_retry_limit` times, then chooses among the remaining free cells.
    /// Returns `None` only when every eligible cell is taken.
    pub fn generate_food(&mut self, snake: &Snake, grid: Grid) -> Option<Point> {
        for _ in 0..self.config.food_retry_limit {
            let candidate = Point::new(
                self.rng.gen_range(1..grid.size),
                self.rng.gen_range(1..grid.size),
            );
            if !snake.occupies(candidate) {
                return Some(candidate);
            }
        }

        let free: Vec<Point> = grid.food_cells().filter(|&p| !snake.occupies(p)).collect();
        free.choose(&mut self.rng).copied()
    }
}
