use std::fmt::{Display, Formatter};

/// Number of maze cells along each axis of the quilt.
pub const GRID_CELLS: u64 = 64;
/// Edge length of a maze cell along x and z.
pub const CELL_WIDTH: i64 = 16;
/// Height of a maze cell along y.
pub const CELL_HEIGHT: i64 = 8;
/// Lowest y coordinate used for maze origins.
pub const BASE_Y: i64 = 200;

/// World coordinates at which the maze of one mission is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MazeOrigin {
    x: i64,
    y: i64,
    z: i64,
}

impl MazeOrigin {
    pub const fn new(x: i64, y: i64, z: i64) -> Self { Self { x, y, z } }

    /// Places the maze of mission `iteration` into the quilt.
    ///
    /// Missions fill the x axis first, then z, then stack upwards in y, so the
    /// sequence tiles a `64 x 64 x 64` grid of `16 x 16 x 8` cells before it
    /// wraps around to the first cell again.
    #[allow(clippy::cast_possible_wrap)]
    pub const fn for_iteration(iteration: u64) -> Self {
        let x_cell = (iteration % GRID_CELLS) as i64;
        let z_cell = ((iteration / GRID_CELLS) % GRID_CELLS) as i64;
        let y_cell = ((iteration / (GRID_CELLS * GRID_CELLS)) % GRID_CELLS) as i64;
        Self {
            x: x_cell * CELL_WIDTH,
            y: BASE_Y + y_cell * CELL_HEIGHT,
            z: z_cell * CELL_WIDTH,
        }
    }

    pub const fn x(&self) -> i64 { self.x }
    pub const fn y(&self) -> i64 { self.y }
    pub const fn z(&self) -> i64 { self.z }
}

impl Display for MazeOrigin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}
