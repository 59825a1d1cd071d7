//! 型別別名

/// 大格索引
pub type Coord = usize;

/// 子偏移分量（可為負）
pub type Offset = i32;
