//! Game state module - the authoritative game model
//!
//! Ties together board geometry, the snake body and food placement, and owns
//! every state transition: advancing one tick, direction requests, pause
//! toggling and reset. All operations are synchronous and deterministic; the
//! concurrency discipline (one mutex around the whole state) lives in `app`.
//!
//! Direction changes are double-buffered: `request_direction` writes a
//! pending slot and `advance` commits it at the start of the tick. Requests
//! are validated against the last *committed* direction, so two quick
//! requests within one tick can never smuggle in a 180° reversal.

use crate::core::{Board, SimpleRng, Snake};
use crate::core::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction, GameConfig, GameStatus, Position};

/// Rejection-sampling attempts before food placement falls back to an
/// explicit enumeration of free interior cells.
const FOOD_RETRY_LIMIT: u32 = 32;

/// Complete game state.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    snake: Snake,
    /// Direction committed by the last advance.
    direction: Direction,
    /// Direction the next advance will commit (last accepted request wins).
    pending_direction: Direction,
    food: Position,
    score: u32,
    status: GameStatus,
    rng: SimpleRng,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Ticks advanced in the current episode.
    tick_count: u64,
}

impl GameState {
    /// Create a running game from the given configuration.
    pub fn new(config: GameConfig) -> Self {
        let board = Board::new(config.width, config.height);
        let snake = Snake::new(board.center());
        let mut rng = SimpleRng::new(config.seed);

        // A fresh single-segment snake can never exhaust the interior, so
        // this draw always succeeds; the center fallback is unreachable.
        let food = roll_food(&board, &snake, &mut rng).unwrap_or_else(|| board.center());

        Self {
            config,
            board,
            snake,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            food,
            score: 0,
            status: GameStatus::Running,
            rng,
            episode_id: 0,
            tick_count: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Advance the simulation by one tick.
    ///
    /// No-op unless the game is Running. Commits the pending direction, then
    /// steps the head. A step into the wall or into any current segment
    /// transitions to GameOver without mutating the body. A step onto food
    /// grows the snake, awards the configured score and relocates the food;
    /// any other step moves the snake with its length unchanged.
    ///
    /// Returns true if the tick changed state.
    pub fn advance(&mut self) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }

        self.direction = self.pending_direction;
        self.tick_count += 1;

        let new_head = self.snake.head().step(self.direction);

        // Wall collision.
        if self.board.hits_wall(new_head) {
            self.status = GameStatus::GameOver;
            return true;
        }

        // Self collision. The vacating tail counts: the head may not move
        // onto the current tail cell even though the tail leaves this tick.
        if self.snake.occupies(new_head) {
            self.status = GameStatus::GameOver;
            return true;
        }

        if new_head == self.food {
            self.snake.grow();
            self.snake.advance(new_head);
            self.score += self.config.food_score;
            self.place_food();
        } else {
            self.snake.advance(new_head);
        }

        true
    }

    /// Request a direction change for the next tick.
    ///
    /// Ignored when the game is over, and ignored (silently) when the request
    /// is the exact inverse of the last committed direction. Multiple accepted
    /// requests within one tick: last write wins.
    ///
    /// Returns true if the request was accepted.
    pub fn request_direction(&mut self, dir: Direction) -> bool {
        if self.status == GameStatus::GameOver {
            return false;
        }
        if dir == self.direction.opposite() {
            return false;
        }
        self.pending_direction = dir;
        true
    }

    /// Flip Running ⇄ Paused. No-op when the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Running => {
                self.status = GameStatus::Paused;
                true
            }
            GameStatus::Paused => {
                self.status = GameStatus::Running;
                true
            }
            GameStatus::GameOver => false,
        }
    }

    /// Reinitialize all entities: single-segment snake at the board center,
    /// direction Right, fresh food, score 0, status Running.
    ///
    /// Valid from any status. The RNG state carries forward so a seeded
    /// process keeps producing one deterministic food sequence across
    /// episodes; the episode id increments.
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.board.center());
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = 0;
        self.status = GameStatus::Running;
        self.tick_count = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.place_food();
    }

    /// Apply an input-layer action.
    ///
    /// Restart is only honored at GameOver; everything else maps onto the
    /// operation it names. Returns true if the action had any effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveUp | GameAction::MoveDown | GameAction::MoveLeft
            | GameAction::MoveRight => {
                // Movement actions always carry a direction.
                match action.direction() {
                    Some(dir) => self.request_direction(dir),
                    None => false,
                }
            }
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                if self.status == GameStatus::GameOver {
                    self.reset();
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Draw a fresh food cell, or end the game if the interior is full.
    fn place_food(&mut self) {
        match roll_food(&self.board, &self.snake, &mut self.rng) {
            Some(food) => self.food = food,
            None => self.status = GameStatus::GameOver,
        }
    }

    /// Write a full render payload into `out`, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.snake.clear();
        out.snake.extend(self.snake.segments());
        out.food = self.food;
        out.direction = self.direction;
        out.score = self.score;
        out.status = self.status;
        out.episode_id = self.episode_id;
        out.tick_count = self.tick_count;
    }

    /// Allocate and fill a snapshot. Prefer [`snapshot_into`] in loops.
    ///
    /// [`snapshot_into`]: GameState::snapshot_into
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Test hook: plant the food at a known cell.
    ///
    /// Also available to integration tests, which compile against the library
    /// without `cfg(test)`.
    #[doc(hidden)]
    pub fn set_food(&mut self, food: Position) {
        self.food = food;
    }

    /// Test hook: replace the snake body wholesale.
    #[doc(hidden)]
    pub fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

/// Pick a uniformly random interior cell not occupied by the snake.
///
/// Rejection-samples up to [`FOOD_RETRY_LIMIT`] times, then enumerates the
/// free interior cells and draws uniformly among them. Returns `None` only
/// when the snake occupies every interior cell, so the call is always
/// bounded regardless of how full the board is.
fn roll_food(board: &Board, snake: &Snake, rng: &mut SimpleRng) -> Option<Position> {
    let cell_count = board.interior_cell_count();

    for _ in 0..FOOD_RETRY_LIMIT {
        let candidate = board.interior_cell(rng.next_range(cell_count as u32) as usize);
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    // Dense board: draw the k-th free cell instead of resampling forever.
    let free = cell_count.checked_sub(snake.len()).filter(|&n| n > 0)?;
    let mut k = rng.next_range(free as u32) as usize;
    for n in 0..cell_count {
        let candidate = board.interior_cell(n);
        if snake.occupies(candidate) {
            continue;
        }
        if k == 0 {
            return Some(candidate);
        }
        k -= 1;
    }

    None
}
