use alloc::collections::VecDeque;
use alloc::format;
use serde::{Deserialize, Serialize};

use crate::*;

/// Grid-aligned position; unbounded since the snake may leave the arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnakeConfig {
    pub columns: u16,
    pub rows: u16,
    /// Side of one grid cell on the drawing surface.
    pub cell_px: u16,
    /// Delay between the end of one tick and the start of the next.
    pub tick_interval_ms: u32,
    pub start: Point,
    pub heading: Direction,
}

impl SnakeConfig {
    pub const CLASSIC: Self = Self {
        columns: 40,
        rows: 40,
        cell_px: 10,
        tick_interval_ms: 100,
        start: Point::new(20, 20),
        heading: Direction::Right,
    };

    pub fn with_tick_interval(self, tick_interval_ms: u32) -> Self {
        Self {
            tick_interval_ms,
            ..self
        }
    }

    pub const fn width_px(&self) -> f32 {
        (self.columns as u32 * self.cell_px as u32) as f32
    }

    pub const fn height_px(&self) -> f32 {
        (self.rows as u32 * self.cell_px as u32) as f32
    }

    pub const fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && point.x < self.columns as i32
            && point.y < self.rows as i32
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    Moved,
    Ate,
}

/// Real-time loop moving a growing chain of segments towards food.
///
/// There is no wall or self collision: the head may leave the arena and may
/// turn straight back onto its own neck.
#[derive(Clone, Debug)]
pub struct SnakeArena<R> {
    config: SnakeConfig,
    body: VecDeque<Point>,
    direction: Direction,
    food: Point,
    eaten: u32,
    rng: R,
}

impl<R: RandomSource> SnakeArena<R> {
    pub const SNAKE_COLOR: Color = "green";
    pub const FOOD_COLOR: Color = "red";

    pub fn new(config: SnakeConfig, mut rng: R) -> Self {
        let food = Self::random_food(&config, &mut rng);
        Self {
            config,
            body: VecDeque::from([config.start]),
            direction: config.heading,
            food,
            eaten: 0,
            rng,
        }
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    pub fn head(&self) -> Point {
        // the body is never empty: every tick pushes before it pops
        self.body.front().copied().unwrap_or(self.config.start)
    }

    /// Segments, head first.
    pub fn body(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    pub fn length(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.eaten
    }

    /// Sets the heading used by the next tick; reversing is allowed.
    pub fn steer(&mut self, direction: Direction) {
        log::trace!("snake steer {:?}", direction);
        self.direction = direction;
    }

    pub fn tick(&mut self) -> TickOutcome {
        let head = self.head().step(self.direction);
        self.body.push_front(head);

        if head == self.food {
            self.eaten += 1;
            self.food = Self::random_food(&self.config, &mut self.rng);
            log::debug!("snake ate, length {}", self.body.len());
            TickOutcome::Ate
        } else {
            self.body.pop_back();
            TickOutcome::Moved
        }
    }

    pub fn render(&self, surface: &mut impl Surface) {
        let cell = f32::from(self.config.cell_px);
        surface.clear(self.config.width_px(), self.config.height_px());

        for segment in &self.body {
            surface.fill_rect(
                segment.x as f32 * cell,
                segment.y as f32 * cell,
                cell,
                cell,
                Self::SNAKE_COLOR,
            );
        }

        surface.fill_rect(
            self.food.x as f32 * cell,
            self.food.y as f32 * cell,
            cell,
            cell,
            Self::FOOD_COLOR,
        );
        surface.fill_text(
            &format!("Score: {}", self.eaten),
            10.0,
            20.0,
            16,
            "black",
        );
    }

    fn random_food(config: &SnakeConfig, rng: &mut R) -> Point {
        let x = rng.below(config.columns.max(1).into());
        let y = rng.below(config.rows.max(1).into());
        Point::new(x as i32, y as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn arena(draws: &[f32]) -> SnakeArena<ScriptedRandom> {
        SnakeArena::new(
            SnakeConfig::CLASSIC,
            ScriptedRandom::new(draws.iter().copied()),
        )
    }

    #[test]
    fn length_is_unchanged_without_food() {
        // food at (0, 0), far behind the head
        let mut arena = arena(&[0.0]);

        for _ in 0..10 {
            assert_eq!(arena.tick(), TickOutcome::Moved);
        }

        assert_eq!(arena.length(), 1);
        assert_eq!(arena.head(), Point::new(30, 20));
    }

    #[test]
    fn eating_grows_by_one_and_relocates_food_on_grid() {
        // first food at (22, 20), two cells ahead of the head
        let mut arena = arena(&[0.5625, 0.5, 0.125, 0.875]);
        assert_eq!(arena.food(), Point::new(22, 20));

        assert_eq!(arena.tick(), TickOutcome::Moved);
        assert_eq!(arena.tick(), TickOutcome::Ate);

        assert_eq!(arena.length(), 2);
        assert_eq!(arena.score(), 1);
        assert_eq!(arena.food(), Point::new(5, 35));
        assert!(arena.config().contains(arena.food()));
    }

    #[test]
    fn body_follows_the_head() {
        let mut arena = arena(&[0.5625, 0.5, 0.0]);
        arena.tick();
        arena.tick();
        arena.steer(Direction::Down);
        arena.tick();

        let body: Vec<_> = arena.body().collect();
        assert_eq!(body, [Point::new(22, 21), Point::new(22, 20)]);
    }

    #[test]
    fn reversal_is_not_blocked() {
        let mut arena = arena(&[0.0]);
        arena.tick();
        arena.steer(Direction::Left);
        arena.tick();

        assert_eq!(arena.direction(), Direction::Left);
        assert_eq!(arena.head(), Point::new(20, 20));
    }

    #[test]
    fn snake_may_leave_the_arena() {
        let mut arena = arena(&[0.0]);
        arena.steer(Direction::Up);
        for _ in 0..25 {
            arena.tick();
        }

        assert_eq!(arena.head(), Point::new(20, -5));
        assert!(!arena.config().contains(arena.head()));
    }

    #[test]
    fn render_draws_body_and_food() {
        let mut arena = arena(&[0.5625, 0.5, 0.0]);
        arena.tick();
        arena.tick();

        let mut log = DrawLog::default();
        arena.render(&mut log);

        assert_eq!(
            log.commands[0],
            DrawCommand::Clear {
                width: 400.0,
                height: 400.0
            }
        );
        assert_eq!(log.rects_with(SnakeArena::<ScriptedRandom>::SNAKE_COLOR).count(), 2);
        assert_eq!(log.rects_with(SnakeArena::<ScriptedRandom>::FOOD_COLOR).count(), 1);
        assert!(log.texts().any(|text| text == "Score: 1"));
    }
}
