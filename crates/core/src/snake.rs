//! Snake simulation - movement, growth, fruit and collisions.
//!
//! The body is a `Vec<Segment>` with the head at index 0. Every step shifts
//! the whole body one slot toward the tail and then overwrites slot 0:
//!
//! - **Translate**: the old tail falls off the end, length is unchanged and
//!   nothing is allocated.
//! - **Grow**: a copy of the tail is pushed first, so after the shift every
//!   previous segment keeps its position and the snake is one cell longer.
//!
//! Each segment stores the direction the snake left that cell in (the head
//! stores its current heading). The renderer pairs a segment's direction with
//! the one behind it to pick corner glyphs; for the tail it uses the
//! direction of the most recently vacated cell, kept in `tail_direction`.

use tracing::debug;

use crate::config::SnakeConfig;
use crate::rng::SimpleRng;
use crate::types::{Direction, Pos};

/// Random samples tried before falling back to scanning the free cells.
pub const FRUIT_SAMPLE_ATTEMPTS: u32 = 64;

/// One cell of the snake body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub pos: Pos,
    pub direction: Direction,
}

impl Segment {
    pub const fn new(pos: Pos, direction: Direction) -> Self {
        Self { pos, direction }
    }
}

/// Result of a single simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Alive,
    /// The head hit the body or left the board.
    Dead,
}

impl StepOutcome {
    pub fn is_dead(self) -> bool {
        self == StepOutcome::Dead
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SnakeGame {
    config: SnakeConfig,
    /// Head first. Never empty.
    segments: Vec<Segment>,
    fruit: Option<Pos>,
    /// Direction of the last vacated tail cell.
    tail_direction: Direction,
    /// Length the game started with; the score counts from here.
    initial_len: usize,
    rng: SimpleRng,
    steps: u64,
    dead: bool,
}

impl SnakeGame {
    /// Create a new game with a one-cell snake at the configured origin.
    pub fn new(config: SnakeConfig, seed: u32) -> Self {
        let head = Segment::new(config.origin, config.start_direction);
        Self::from_segments(config, vec![head], seed)
    }

    /// Create a game from an explicit body (head first).
    ///
    /// An empty body is replaced by a single segment at the origin. Fruit is
    /// placed immediately when enabled.
    pub fn from_segments(config: SnakeConfig, segments: Vec<Segment>, seed: u32) -> Self {
        let segments = if segments.is_empty() {
            vec![Segment::new(config.origin, config.start_direction)]
        } else {
            segments
        };
        let tail_direction = segments[segments.len() - 1].direction;
        let initial_len = segments.len();

        let mut game = Self {
            config,
            segments,
            fruit: None,
            tail_direction,
            initial_len,
            rng: SimpleRng::new(seed),
            steps: 0,
            dead: false,
        };
        if config.spawn_fruit {
            game.fruit = game.place_fruit();
        }
        game
    }

    /// Override the fruit position (`None` removes it).
    pub fn set_fruit(&mut self, fruit: Option<Pos>) {
        self.fruit = fruit;
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn head(&self) -> Segment {
        self.segments[0]
    }

    /// Current head direction.
    pub fn heading(&self) -> Direction {
        self.segments[0].direction
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; a snake has at least one segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn fruit(&self) -> Option<Pos> {
        self.fruit
    }

    pub fn tail_direction(&self) -> Direction {
        self.tail_direction
    }

    /// Cells gained since the start of the game.
    pub fn score(&self) -> usize {
        self.segments.len() - self.initial_len
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Check if any segment occupies `pos`.
    pub fn occupies(&self, pos: Pos) -> bool {
        occupied(&self.segments, pos)
    }

    /// Advance the snake by one cell.
    ///
    /// A request for the exact reverse of the current heading is ignored and
    /// the snake keeps going straight.
    pub fn step(&mut self, requested: Direction) -> StepOutcome {
        let heading = self.heading();
        let direction = if requested == heading.opposite() {
            heading
        } else {
            requested
        };

        // The cell being left records the direction it was left in.
        self.segments[0].direction = direction;
        let new_head = Segment::new(self.segments[0].pos.step(direction), direction);

        let ate = self.config.spawn_fruit && self.fruit == Some(new_head.pos);
        let grow = self.config.grow_every_frame || ate;
        let last = self.segments.len() - 1;

        if grow {
            let tail = self.segments[last];
            self.segments.push(tail);
            self.segments.copy_within(0..=last, 1);
            self.segments[0] = new_head;

            if ate {
                self.fruit = self.place_fruit();
                debug!(len = self.segments.len(), fruit = ?self.fruit, "fruit eaten");
            }
        } else {
            self.tail_direction = self.segments[last].direction;
            self.segments.copy_within(0..last, 1);
            self.segments[0] = new_head;
        }

        self.steps += 1;

        // Fruit never spawns on the body, so a growing step cannot collide.
        let collided = !grow && occupied(&self.segments[1..], new_head.pos);
        let out_of_bounds = self.config.check_bounds && !self.config.contains(new_head.pos);

        if collided || out_of_bounds {
            self.dead = true;
            debug!(
                head = ?new_head.pos,
                collided,
                out_of_bounds,
                len = self.segments.len(),
                "snake died"
            );
            return StepOutcome::Dead;
        }

        StepOutcome::Alive
    }

    /// Pick a free cell for the fruit.
    ///
    /// Rejection sampling first; if that keeps hitting the snake, choose
    /// uniformly among the remaining free cells. `None` when the board is full.
    fn place_fruit(&mut self) -> Option<Pos> {
        let width = u32::from(self.config.width);
        let height = u32::from(self.config.height);

        for _ in 0..FRUIT_SAMPLE_ATTEMPTS {
            let candidate = Pos::new(
                self.rng.next_range(width) as i32,
                self.rng.next_range(height) as i32,
            );
            if !occupied(&self.segments, candidate) {
                return Some(candidate);
            }
        }

        let free: Vec<Pos> = (0..height as i32)
            .flat_map(|y| (0..width as i32).map(move |x| Pos::new(x, y)))
            .filter(|&p| !occupied(&self.segments, p))
            .collect();

        if free.is_empty() {
            return None;
        }
        let idx = self.rng.next_range(free.len() as u32) as usize;
        Some(free[idx])
    }
}

fn occupied(segments: &[Segment], pos: Pos) -> bool {
    segments.iter().any(|s| s.pos == pos)
}
