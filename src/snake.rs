use crate::config::SnakeConfig;
use crate::geometry::{Cell, Grid, Rect};
use std::collections::VecDeque;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Sprite rotation in counter-clockwise degrees, with art drawn facing right.
    pub fn angle_degrees(self) -> f32 {
        match self {
            Direction::Right => 0.0,
            Direction::Left => 180.0,
            Direction::Up => 90.0,
            Direction::Down => -90.0,
        }
    }
}

/// The player's snake. Owns its body exclusively; everything outside only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Head first.
    positions: VecDeque<Cell>,
    /// `None` while idle before the first key press.
    direction: Option<Direction>,
    facing: Direction,
    length: usize,
    speed: f32,
    move_timer: u32,
    targets_collected: u32,
    config: SnakeConfig,
}

impl Snake {
    /// Lays out `initial_length` cells running left from `head`, idle and facing right.
    pub fn new(head: Cell, config: &SnakeConfig) -> Self {
        let positions = (0..config.initial_length as i32).map(|i| Cell::new(head.x - i, head.y)).collect();
        Self {
            positions,
            direction: None,
            facing: Direction::Right,
            length: config.initial_length,
            speed: config.initial_speed,
            move_timer: 0,
            targets_collected: 0,
            config: *config,
        }
    }

    pub fn head(&self) -> Cell {
        // The body is never empty: it starts with at least one cell and moves only push before popping.
        self.positions[0]
    }

    pub fn positions(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.positions.iter().copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.positions.contains(&cell)
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Body length the snake is growing towards.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn move_timer(&self) -> u32 {
        self.move_timer
    }

    pub fn targets_collected(&self) -> u32 {
        self.targets_collected
    }

    /// Accepts any direction except a reversal of the current movement.
    /// Returns whether the direction was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_some_and(|current| current.is_opposite(direction)) {
            return false;
        }
        self.direction = Some(direction);
        self.facing = direction;
        true
    }

    /// Ticks between moves at the current speed.
    pub fn move_threshold(&self) -> u32 {
        (self.config.base_tick_rate as f32 / self.speed).floor() as u32
    }

    /// Advances the movement clock by `delta` ticks and takes one grid step when it is due.
    /// Returns true when the snake moved.
    pub fn tick(&mut self, delta: u32) -> bool {
        let Some(direction) = self.direction else {
            return false;
        };
        self.move_timer += delta;
        if self.move_timer < self.move_threshold() {
            return false;
        }

        self.positions.push_front(self.head().offset(direction));
        while self.positions.len() > self.length {
            self.positions.pop_back();
        }
        self.move_timer = 0;
        true
    }

    pub fn grow(&mut self) {
        self.length += 1;
        self.targets_collected += 1;

        let config = &self.config;
        if self.targets_collected > config.targets_before_speedup && self.speed < config.max_speed {
            self.speed = (self.speed + config.speed_increase_amount).min(config.max_speed);
        }
    }

    /// True when the head overlaps a wall or lands on the rest of the body.
    pub fn check_collision(&self, walls: &[Rect], grid: &Grid) -> bool {
        let head = self.head();
        let head_rect = grid.cell_rect(head);
        if walls.iter().any(|wall| head_rect.overlaps(wall)) {
            return true;
        }
        self.positions.iter().skip(1).any(|&cell| cell == head)
    }

    /// Rotation for rendering; uses `facing` while idle.
    pub fn render_angle(&self) -> f32 {
        self.direction.unwrap_or(self.facing).angle_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SnakeConfig {
        SnakeConfig {
            initial_length: 3,
            initial_speed: 10.0,
            targets_before_speedup: 2,
            speed_increase_amount: 4.0,
            max_speed: 20.0,
            base_tick_rate: 60,
        }
    }

    fn grid() -> Grid {
        Grid { cell_size: 30, width: 600, height: 600 }
    }

    fn cells(snake: &Snake) -> Vec<Cell> {
        snake.positions().collect()
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Cell::new(10, 10), &config());
        assert_eq!(cells(&snake), vec![Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)]);
        assert_eq!(snake.direction(), None);
        assert_eq!(snake.facing(), Direction::Right);
        assert_eq!(snake.length(), 3);
        assert_eq!(snake.speed(), 10.0);
    }

    #[test]
    fn test_opposite_directions() {
        for d in Direction::ALL {
            assert!(d.is_opposite(d.opposite()));
            assert!(!d.is_opposite(d));
        }
        assert!(!Direction::Up.is_opposite(Direction::Left));
    }

    #[test]
    fn test_reversal_rejected() {
        let mut snake = Snake::new(Cell::new(10, 10), &config());
        assert!(snake.set_direction(Direction::Right));
        assert!(!snake.set_direction(Direction::Left));
        assert_eq!(snake.direction(), Some(Direction::Right));
        assert_eq!(snake.facing(), Direction::Right);

        assert!(snake.set_direction(Direction::Up));
        assert_eq!(snake.facing(), Direction::Up);
        assert!(!snake.set_direction(Direction::Down));
    }

    #[test]
    fn test_any_direction_accepted_while_idle() {
        let mut snake = Snake::new(Cell::new(10, 10), &config());
        assert!(snake.set_direction(Direction::Left));
        assert_eq!(snake.facing(), Direction::Left);
    }

    #[test]
    fn test_idle_snake_does_not_move() {
        let mut snake = Snake::new(Cell::new(10, 10), &config());
        for _ in 0..100 {
            assert!(!snake.tick(1));
        }
        assert_eq!(snake.head(), Cell::new(10, 10));
        assert_eq!(snake.move_timer(), 0);
    }

    #[test]
    fn test_moves_when_timer_reaches_threshold() {
        let mut snake = Snake::new(Cell::new(10, 10), &config());
        snake.set_direction(Direction::Up);
        assert_eq!(snake.move_threshold(), 6);

        for _ in 0..5 {
            assert!(!snake.tick(1));
        }
        assert!(snake.tick(1));
        assert_eq!(snake.head(), Cell::new(10, 9));
        assert_eq!(snake.move_timer(), 0);
        assert_eq!(cells(&snake), vec![Cell::new(10, 9), Cell::new(10, 10), Cell::new(9, 10)]);
    }

    #[test]
    fn test_threshold_is_floored() {
        let mut c = config();
        c.initial_speed = 7.0;
        c.max_speed = 7.0;
        let snake = Snake::new(Cell::new(10, 10), &c);
        assert_eq!(snake.move_threshold(), 8);
    }

    #[test]
    fn test_growth_catches_up_over_moves() {
        let mut c = config();
        c.initial_speed = 60.0;
        c.max_speed = 60.0;
        let mut snake = Snake::new(Cell::new(10, 10), &c);
        snake.set_direction(Direction::Down);

        snake.grow();
        snake.grow();
        assert_eq!(snake.length(), 5);
        assert_eq!(snake.positions().len(), 3);

        assert!(snake.tick(1));
        assert_eq!(snake.positions().len(), 4);
        assert!(snake.tick(1));
        assert_eq!(snake.positions().len(), 5);
        assert!(snake.tick(1));
        assert_eq!(snake.positions().len(), 5);
    }

    #[test]
    fn test_speed_progression_after_threshold() {
        let mut snake = Snake::new(Cell::new(10, 10), &config());
        snake.grow();
        snake.grow();
        assert_eq!(snake.speed(), 10.0);

        snake.grow();
        assert_eq!(snake.speed(), 14.0);
        snake.grow();
        assert_eq!(snake.speed(), 18.0);
        snake.grow();
        assert_eq!(snake.speed(), 20.0);
        snake.grow();
        assert_eq!(snake.speed(), 20.0);
        assert_eq!(snake.targets_collected(), 6);
        assert_eq!(snake.length(), 9);
    }

    #[test]
    fn test_speedup_shortens_pending_wait() {
        let fast = SnakeConfig { targets_before_speedup: 0, speed_increase_amount: 20.0, max_speed: 30.0, ..config() };
        let mut snake = Snake::new(Cell::new(10, 10), &fast);
        snake.set_direction(Direction::Right);
        assert_eq!(snake.move_threshold(), 6);

        assert!(!snake.tick(1));
        assert!(!snake.tick(1));
        snake.grow();
        assert_eq!(snake.speed(), 30.0);
        assert_eq!(snake.move_threshold(), 2);

        // The timer already holds two ticks, so the next one is due at the new rate.
        assert!(snake.tick(1));
        assert_eq!(snake.head(), Cell::new(11, 10));
        assert_eq!(snake.move_timer(), 0);
    }

    #[test]
    fn test_grow_is_monotonic() {
        let mut snake = Snake::new(Cell::new(10, 10), &config());
        let (mut length, mut speed) = (snake.length(), snake.speed());
        for _ in 0..20 {
            snake.grow();
            assert!(snake.length() > length);
            assert!(snake.speed() >= speed);
            assert!(snake.speed() <= 20.0);
            length = snake.length();
            speed = snake.speed();
        }
    }

    #[test]
    fn test_wall_collision() {
        let g = grid();
        let walls = g.walls();
        let mut c = config();
        c.initial_length = 1;
        c.initial_speed = 60.0;
        c.max_speed = 60.0;
        let mut snake = Snake::new(Cell::new(1, 5), &c);
        assert!(!snake.check_collision(&walls, &g));

        snake.set_direction(Direction::Left);
        snake.tick(1);
        assert_eq!(snake.head(), Cell::new(0, 5));
        assert!(snake.check_collision(&walls, &g));
    }

    #[test]
    fn test_self_collision() {
        let g = grid();
        let walls = g.walls();
        let mut c = config();
        c.initial_length = 5;
        c.initial_speed = 60.0;
        c.max_speed = 60.0;
        let mut snake = Snake::new(Cell::new(10, 10), &c);

        snake.set_direction(Direction::Right);
        snake.tick(1);
        snake.set_direction(Direction::Down);
        snake.tick(1);
        snake.set_direction(Direction::Left);
        snake.tick(1);
        assert!(!snake.check_collision(&walls, &g));
        snake.set_direction(Direction::Up);
        snake.tick(1);
        assert_eq!(snake.head(), Cell::new(10, 10));
        assert!(snake.check_collision(&walls, &g));
    }

    #[test]
    fn test_render_angle_uses_facing_when_idle() {
        let mut snake = Snake::new(Cell::new(10, 10), &config());
        assert_eq!(snake.render_angle(), 0.0);
        snake.set_direction(Direction::Up);
        assert_eq!(snake.render_angle(), 90.0);
        snake.set_direction(Direction::Left);
        assert_eq!(snake.render_angle(), 180.0);
        snake.set_direction(Direction::Down);
        assert_eq!(snake.render_angle(), -90.0);
    }
}
