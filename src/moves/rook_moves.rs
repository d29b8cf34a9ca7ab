use crate::moves::sliding::{cast_rays, ORTHOGONAL_DIRECTIONS};

/// Orthogonal reach from `square` given the board's `occupancy`.
#[inline]
pub fn rook_attacks(square: u8, occupancy: u64) -> u64 {
    cast_rays(square, &ORTHOGONAL_DIRECTIONS, occupancy)
}
