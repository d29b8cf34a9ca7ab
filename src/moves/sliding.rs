//! Ray casting shared by the rook, bishop and queen attack sets.
//!
//! A ray walks from the origin one step at a time and stops on the first
//! occupied square. That square is included so captures (and defended
//! pieces, for threat maps) fall out of the same walk.

/// `(column_step, row_step)` pairs.
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Cast one ray from `square`, stopping on (and including) the first blocker.
#[inline]
pub fn cast_ray(square: u8, col_step: i8, row_step: i8, occupancy: u64) -> u64 {
    let mut col = (square % 8) as i8 + col_step;
    let mut row = (square / 8) as i8 + row_step;
    let mut reached = 0u64;

    while (0..8).contains(&col) && (0..8).contains(&row) {
        let bit = 1u64 << (row * 8 + col);
        reached |= bit;
        if occupancy & bit != 0 {
            break;
        }
        col += col_step;
        row += row_step;
    }

    reached
}

/// Union of rays in `directions`.
#[inline]
pub fn cast_rays(square: u8, directions: &[(i8, i8)], occupancy: u64) -> u64 {
    directions
        .iter()
        .fold(0u64, |acc, &(dc, dr)| acc | cast_ray(square, dc, dr, occupancy))
}
