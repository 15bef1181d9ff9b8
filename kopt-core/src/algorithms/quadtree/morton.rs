#[cfg(test)]
#[path = "../../../tests/unit/algorithms/quadtree/morton_test.rs"]
mod morton_test;

/// A key of a point on Z-order (Morton) curve: bits of quantized x occupy even positions,
/// bits of quantized y occupy odd positions.
pub type MortonKey = u64;

/// A quadrant of a quadtree node: bit 0 selects upper half by x, bit 1 selects upper half by y.
pub type Quadrant = usize;

/// Interleaves bits of two grid coordinates.
pub fn morton_key(x: u32, y: u32) -> MortonKey {
    spread_bits(x) | (spread_bits(y) << 1)
}

/// Returns quadrants on a path from the root down to the given depth.
pub fn insertion_path(key: MortonKey, depth: usize) -> impl Iterator<Item = Quadrant> {
    (0..depth).map(move |level| ((key >> (2 * (depth - 1 - level))) & 0b11) as Quadrant)
}

/// Inserts a zero bit between every pair of adjacent bits.
fn spread_bits(value: u32) -> u64 {
    let mut value = value as u64;
    value = (value | (value << 16)) & 0x0000_FFFF_0000_FFFF;
    value = (value | (value << 8)) & 0x00FF_00FF_00FF_00FF;
    value = (value | (value << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    value = (value | (value << 2)) & 0x3333_3333_3333_3333;
    value = (value | (value << 1)) & 0x5555_5555_5555_5555;

    value
}
