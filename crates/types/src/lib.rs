//! Core types shared across the workspace.
//!
//! This crate contains pure data types with no external dependencies:
//! match categories, piece kinds, compass directions, and the sentinel
//! and tuning constants used when building a board from a level layout.

/// Minimum number of same-category pieces that form a match.
pub const MIN_MATCH_LENGTH: usize = 3;

/// Points awarded for clearing one regular piece.
pub const DEFAULT_PIECE_SCORE: u32 = 10;

/// The starting move budget is the initial piece count divided by this.
pub const INITIAL_MOVES_DIVISOR: u32 = 3;

/// Layout code for a cell that is permanently outside the playfield.
pub const OUT_OF_PLAY_SENTINEL: i32 = -9;

/// Layout code for an in-play cell that starts with no piece.
pub const EMPTY_SENTINEL: i32 = 0;

/// Match category of a piece.
///
/// Two pieces belong to the same run when their categories match.
/// `Wild` matches every category, including itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    LightBlue,
    Blue,
    Pink,
    Purple,
    Green,
    Red,
    Yellow,
    Wild,
}

impl Category {
    /// Number of categories, `Wild` included.
    pub const COUNT: usize = 8;

    /// All categories in index order.
    pub const ALL: [Category; Self::COUNT] = [
        Category::LightBlue,
        Category::Blue,
        Category::Pink,
        Category::Purple,
        Category::Green,
        Category::Red,
        Category::Yellow,
        Category::Wild,
    ];

    /// Look up a category by zero-based index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based index of this category.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_wild(self) -> bool {
        self == Category::Wild
    }

    /// Whether two categories count as equal for run continuation.
    ///
    /// `Wild` compares equal to everything.
    pub fn matches(self, other: Category) -> bool {
        self == other || self.is_wild() || other.is_wild()
    }

    /// Lowercase name, used for display and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::LightBlue => "lightblue",
            Category::Blue => "blue",
            Category::Pink => "pink",
            Category::Purple => "purple",
            Category::Green => "green",
            Category::Red => "red",
            Category::Yellow => "yellow",
            Category::Wild => "wild",
        }
    }
}

/// Whether a piece is an ordinary matchable piece or an immovable blocker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Regular,
    Blocked,
}

impl PieceKind {
    pub fn is_blocked(self) -> bool {
        self == PieceKind::Blocked
    }
}

/// The eight compass directions a run scan can walk.
///
/// The board's y axis grows upward, so `North` is `(0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The four axis-aligned directions.
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The two directions a horizontal run is assembled from.
    pub const HORIZONTAL: [Direction; 2] = [Direction::East, Direction::West];

    /// The two directions a vertical run is assembled from.
    pub const VERTICAL: [Direction; 2] = [Direction::North, Direction::South];

    /// Unit step for this direction as `(dx, dy)`.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }
}
