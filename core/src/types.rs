/// Position of a cell in the grid, row-major in `0..GRID_SIZE`.
pub type CellIndex = u8;

/// Count type used for mine counts and revealed-cell counts.
pub type CellCount = u8;

/// Board coordinates `(row, col)`.
pub type Coord2 = (u8, u8);

/// Money in minor units (hundredths).
pub type Credits = u64;

/// Cells per board side.
pub const GRID_SIDE: u8 = 5;

/// Total cells on the board.
pub const GRID_SIZE: CellCount = GRID_SIDE * GRID_SIDE;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for CellIndex {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        let (row, col) = index_to_coords(self);
        [row.into(), col.into()]
    }
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn index_to_coords(index: CellIndex) -> Coord2 {
    (index / GRID_SIDE, index % GRID_SIDE)
}

/// Inverse of [`index_to_coords`], `None` when out of the board.
pub const fn coords_to_index((row, col): Coord2) -> Option<CellIndex> {
    if row < GRID_SIDE && col < GRID_SIDE {
        Some(row * GRID_SIDE + col)
    } else {
        None
    }
}
