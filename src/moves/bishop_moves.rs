use crate::moves::sliding::{cast_rays, DIAGONAL_DIRECTIONS};

/// Diagonal reach from `square` given the board's `occupancy`.
#[inline]
pub fn bishop_attacks(square: u8, occupancy: u64) -> u64 {
    cast_rays(square, &DIAGONAL_DIRECTIONS, occupancy)
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;

    #[test]
    fn centre_bishop_sees_thirteen_squares() {
        assert_eq!(bishop_attacks(27, 0).count_ones(), 13);
    }

    #[test]
    fn bishop_stops_on_blocker() {
        // From 58 toward the upper right: 51, 44, 37...
        let attacks = bishop_attacks(58, 1u64 << 44);
        assert_ne!(attacks & (1u64 << 51), 0);
        assert_ne!(attacks & (1u64 << 44), 0);
        assert_eq!(attacks & (1u64 << 37), 0);
    }
}
