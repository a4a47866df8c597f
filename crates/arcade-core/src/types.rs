//! Grid coordinates and player commands

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A cell coordinate on the game grid. `x` grows rightwards, `y` downwards.
///
/// Serialized as a two-element array (`[x, y]`) so config files stay terse.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by one unit in the given direction
    pub fn step(self, direction: Direction) -> Self {
        self + direction.delta()
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl From<[i32; 2]> for Point {
    fn from(arr: [i32; 2]) -> Self {
        Self::new(arr[0], arr[1])
    }
}

impl From<Point> for [i32; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four movement directions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// Unit offset for this direction
    pub fn delta(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Left => Point::new(-1, 0),
            Direction::Down => Point::new(0, 1),
            Direction::Right => Point::new(1, 0),
        }
    }
}

/// A recognized player command.
///
/// Commands arrive as whole lines; anything that does not parse is ignored
/// by the input task rather than reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Move(Direction),
}

impl Command {
    /// Parse a trimmed input line (`w`, `a`, `s`, `d` or `q`)
    pub fn parse(line: &str) -> Option<Self> {
        match line {
            "q" => Some(Command::Quit),
            "w" => Some(Command::Move(Direction::Up)),
            "a" => Some(Command::Move(Direction::Left)),
            "s" => Some(Command::Move(Direction::Down)),
            "d" => Some(Command::Move(Direction::Right)),
            _ => None,
        }
    }
}
