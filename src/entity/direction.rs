use glam::IVec2;

/// The direction an actor travels in. Movement happens along one axis at a time.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
    #[default]
    Stopped,
}

impl Direction {
    /// The four directions an actor can actually travel in.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Stopped => Direction::Stopped,
        }
    }

    /// Unit step for this direction, in screen space (y grows downwards).
    pub fn as_ivec2(self) -> IVec2 {
        self.into()
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Left => -IVec2::X,
            Direction::Up => -IVec2::Y,
            Direction::Right => IVec2::X,
            Direction::Down => IVec2::Y,
            Direction::Stopped => IVec2::ZERO,
        }
    }
}
