//! Core types module - shared geometry, piece kinds, actions and constants
//!
//! Everything here is plain data with value semantics. Nothing in this crate
//! knows about the grid, blocks, or rendering; the simulation core in
//! `blockfall-core` builds on top of these types.
//!
//! # Coordinate system
//!
//! - `x` grows to the right, `y` grows downwards (row 0 is the top row)
//! - A field of `width x height` cells covers `[0, width) x [0, height)`
//! - Coordinates are never bounds-checked on their own; the grid owns bounds
//!
//! # Rotation
//!
//! Rotation is a quarter turn about a [`Pivot`], which may sit on a cell centre
//! (`(1.0, 1.0)`) or on a cell corner (`(1.5, 0.5)`). Because `y` points down,
//! a clockwise turn maps the offset `(dx, dy)` from the pivot to `(-dy, dx)`.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FIELD_WIDTH` | 10 | Columns in a standard field |
//! | `DEFAULT_FIELD_HEIGHT` | 20 | Rows in a standard field |
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `DEFAULT_GRAVITY_MS` | 1000 | Interval between gravity steps |
//! | `ROW_CLEAR_PAUSE_MS` | 180 | Input freeze after rows complete |
//! | `MAX_BLOCK_CELLS` | 4 | Cells per block |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Coordinate, Pivot, RotationDirection};
//!
//! let c = Coordinate::new(2, 1);
//! assert_eq!(c.shifted(0, 1), Coordinate::new(2, 2));
//!
//! // Quarter turn clockwise about the centre cell of a 3x3 box.
//! let pivot = Pivot::new(1.0, 1.0);
//! assert_eq!(c.rotated(pivot), Coordinate::new(1, 2));
//! assert_eq!(c.rotated(pivot).rotated_toward(pivot, RotationDirection::CounterClockwise), c);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default field width in cells (10 columns)
pub const DEFAULT_FIELD_WIDTH: u16 = 10;

/// Default field height in cells (20 rows)
pub const DEFAULT_FIELD_HEIGHT: u16 = 20;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval: one downward step per second
pub const DEFAULT_GRAVITY_MS: u32 = 1000;

/// Input freeze after one or more rows complete
pub const ROW_CLEAR_PAUSE_MS: u32 = 180;

/// Divisor applied to the elapsed-time score multiplier
pub const SCORE_SCALER: f64 = 50.0;

/// Maximum number of cells a single block can occupy
pub const MAX_BLOCK_CELLS: usize = 4;

/// Integer grid position.
///
/// Equality and hashing are by `(x, y)` only. Shifting and rotating return new
/// values; nothing here checks bounds.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`.
    #[inline]
    pub const fn shifted(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Quarter turn clockwise about `pivot`.
    ///
    /// `x' = -y + Oy + Ox`, `y' = x - Ox + Oy`, rounded half-to-even.
    pub fn rotated(self, pivot: Pivot) -> Self {
        let (x, y) = (self.x as f32, self.y as f32);
        Self {
            x: round_cell(-y + pivot.y + pivot.x),
            y: -round_cell(-x + pivot.x - pivot.y),
        }
    }

    /// Quarter turn counter-clockwise about `pivot` (inverse of [`Coordinate::rotated`]).
    pub fn rotated_counter_clockwise(self, pivot: Pivot) -> Self {
        let (x, y) = (self.x as f32, self.y as f32);
        Self {
            x: round_cell(y - pivot.y + pivot.x),
            y: round_cell(-x + pivot.x + pivot.y),
        }
    }

    pub fn rotated_toward(self, pivot: Pivot, direction: RotationDirection) -> Self {
        match direction {
            RotationDirection::Clockwise => self.rotated(pivot),
            RotationDirection::CounterClockwise => self.rotated_counter_clockwise(pivot),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C({}, {})", self.x, self.y)
    }
}

#[inline]
fn round_cell(v: f32) -> i32 {
    v.round_ties_even() as i32
}

/// Point a block rotates about, in cell units.
///
/// Half-integer components put the pivot on a cell corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pivot {
    pub x: f32,
    pub y: f32,
}

impl Pivot {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn shifted(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx as f32,
            y: self.y + dy as f32,
        }
    }
}

/// Field size in cells. Constant for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u16,
    pub height: u16,
}

impl Dimensions {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Whether `c` lies inside `[0, width) x [0, height)`.
    #[inline]
    pub fn contains(&self, c: Coordinate) -> bool {
        c.x >= 0 && c.x < self.width as i32 && c.y >= 0 && c.y < self.height as i32
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT)
    }
}

/// The seven tetromino kinds.
///
/// The kind doubles as the piece's identity/color for every cell it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_str("L"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Non-zero cell code used in grid dumps (`0` means empty).
    pub fn code(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }
}

/// Direction of a quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    pub fn reversed(&self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }
}

/// Requests an input layer can make of a session, one per eligible frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Shift the active block one cell left
    MoveLeft,
    /// Shift the active block one cell right
    MoveRight,
    /// Shift the active block one cell down (locks it if blocked)
    MoveDown,
    /// Quarter turn clockwise
    RotateCw,
    /// Quarter turn counter-clockwise
    RotateCcw,
    /// Swap the active block with the stashed kind
    Stash,
    /// Drop the active block as far as it goes and lock it
    InstantPlace,
    /// Toggle pause
    Pause,
}

impl GameAction {
    pub const ALL: [GameAction; 8] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::MoveDown,
        GameAction::RotateCw,
        GameAction::RotateCcw,
        GameAction::Stash,
        GameAction::InstantPlace,
        GameAction::Pause,
    ];

    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("instantplace"), Some(GameAction::InstantPlace));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str().eq_ignore_ascii_case(s.trim()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Stash => "stash",
            GameAction::InstantPlace => "instantPlace",
            GameAction::Pause => "pause",
        }
    }
}
