//! 移動邏輯

use crate::alias::Offset;
use crate::component::{LargeCell, Position, SubOffset};
use crate::logic::board::Board;
use log::trace;
use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString};

/// 移動方向（四方向），以 `u` / `d` / `l` / `r` 解析
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Serialize, Deserialize,
)]
pub enum Direction {
    #[strum(serialize = "u")]
    Up,
    #[strum(serialize = "d")]
    Down,
    #[strum(serialize = "l")]
    Left,
    #[strum(serialize = "r")]
    Right,
}

impl Direction {
    /// 子偏移的變化量（y 軸向下為正）
    pub fn delta(self) -> (Offset, Offset) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// 從目前位置往指定方向走一步，回傳新位置
///
/// 1. 只改變一軸的子偏移
/// 2. 位於最外側大格且往外走（該軸偏移朝外）時拒絕
/// 3. 兩軸偏移同時非零時拒絕（位置必須保持軸向）
/// 4. 偏移超過 `±half` 時進位到相鄰大格，偏移改為另一端
///
/// 返回 `None` 表示無法移動，不修改棋盤。
pub fn step_in_direction(board: &Board, pos: Position, direction: Direction) -> Option<Position> {
    let (dx, dy) = direction.delta();
    let LargeCell { mut x, mut y } = pos.cell;
    let mut mx = pos.offset.x.saturating_add(dx);
    let mut my = pos.offset.y.saturating_add(dy);
    let (width, height) = board.size();

    // 棋盤邊界
    if (x == 0 && mx < 0)
        || (y == 0 && my < 0)
        || (x + 1 == width && mx > 0)
        || (y + 1 == height && my > 0)
    {
        trace!("{} 往 {:?} 超出棋盤邊界", pos, direction);
        return None;
    }

    // 軸向限制
    if mx != 0 && my != 0 {
        trace!("{} 往 {:?} 會離開軸線", pos, direction);
        return None;
    }

    let half = board.half_cell_size();
    if mx < -half {
        x -= 1;
        mx = half;
    } else if mx > half {
        x += 1;
        mx = -half;
    }
    if my < -half {
        y -= 1;
        my = half;
    } else if my > half {
        y += 1;
        my = -half;
    }

    Some(Position::new(LargeCell { x, y }, SubOffset { x: mx, y: my }))
}

impl Board {
    /// 走一步，見 [`step_in_direction`]
    pub fn step(&self, pos: Position, direction: Direction) -> Option<Position> {
        step_in_direction(self, pos, direction)
    }

    /// 以按鍵字串走一步，無法辨識的按鍵視為不移動
    pub fn step_key(&self, pos: Position, key: &str) -> Option<Position> {
        let direction = key.parse::<Direction>().ok()?;
        self.step(pos, direction)
    }
}
