//! 棋盤基本資料型別

use crate::alias::{Coord, Offset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

// ============================================================================
// 座標
// ============================================================================

/// 大格座標
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct LargeCell {
    pub x: Coord,
    pub y: Coord,
}

/// 相對大格中心的子偏移，每軸範圍 `[-half, +half]`
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SubOffset {
    pub x: Offset,
    pub y: Offset,
}

impl SubOffset {
    pub const CENTER: SubOffset = SubOffset { x: 0, y: 0 };
}

/// 完整位置（大格 + 子偏移）
///
/// 透過 `step` 得到的位置兩軸至多一軸非零；直接建構的位置不受此限制。
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub cell: LargeCell,
    pub offset: SubOffset,
}

impl Position {
    pub fn new(cell: LargeCell, offset: SubOffset) -> Self {
        Self { cell, offset }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(({}, {}), ({}, {}))",
            self.cell.x, self.cell.y, self.offset.x, self.offset.y
        )
    }
}

// ============================================================================
// 內容
// ============================================================================

/// 格子內容
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum CellContent {
    #[default]
    Empty,
    Gold,
    Ruby,
    Rock,
}

/// 大格內可存放內容的槽位（中心與四個邊緣中點）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Slot {
    Center,
    Up,
    Down,
    Left,
    Right,
}

impl Slot {
    /// 將子偏移量化為槽位：只看每軸的正負號，不看大小
    ///
    /// 兩軸皆非零（斜向）的偏移沒有對應槽位，回傳 `None`。
    pub fn from_offset(offset: SubOffset) -> Option<Self> {
        match (offset.x.signum(), offset.y.signum()) {
            (0, 0) => Some(Slot::Center),
            (1, 0) => Some(Slot::Right),
            (-1, 0) => Some(Slot::Left),
            (0, 1) => Some(Slot::Down),
            (0, -1) => Some(Slot::Up),
            _ => None,
        }
    }

    /// 槽位對應的量化方向 `(sign(mx), sign(my))`
    pub fn delta(self) -> (Offset, Offset) {
        match self {
            Slot::Center => (0, 0),
            Slot::Up => (0, -1),
            Slot::Down => (0, 1),
            Slot::Left => (-1, 0),
            Slot::Right => (1, 0),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// 單一大格的內容表，固定 5 個槽位，未設定者為 `Empty`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ContentMap([CellContent; 5]);

impl ContentMap {
    pub fn get(&self, slot: Slot) -> CellContent {
        self.0[slot.index()]
    }

    /// 寫入並回傳舊值
    pub fn set(&mut self, slot: Slot, content: CellContent) -> CellContent {
        std::mem::replace(&mut self.0[slot.index()], content)
    }

    /// 依槽位順序列出所有內容
    pub fn iter(&self) -> impl Iterator<Item = (Slot, CellContent)> + '_ {
        Slot::iter().map(|slot| (slot, self.get(slot)))
    }

    pub fn count(&self, content: CellContent) -> usize {
        self.0.iter().filter(|c| **c == content).count()
    }
}

impl Index<Slot> for ContentMap {
    type Output = CellContent;

    fn index(&self, slot: Slot) -> &Self::Output {
        &self.0[slot.index()]
    }
}

impl IndexMut<Slot> for ContentMap {
    fn index_mut(&mut self, slot: Slot) -> &mut Self::Output {
        &mut self.0[slot.index()]
    }
}
