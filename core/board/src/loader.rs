//! 地圖文字解碼
//!
//! 每個大格在文字中佔 3 行 × 4 欄：
//! ```text
//! ?U?     第 3*by     行：上緣
//! LCR     第 3*by + 1 行：左緣、中心、右緣
//! ?D?     第 3*by + 2 行：下緣
//! ```
//! 第 4 欄與角落字元不解碼。中心可為 `G`、`#`、`*`、空白；邊緣只能是 `#` 或空白。

use crate::alias::Coord;
use crate::component::{CellContent, ContentMap, LargeCell, Slot};
use crate::constants::{
    COLS_PER_CELL, EMPTY_SYMBOL, GOLD_SYMBOL, ROCK_SYMBOL, ROWS_PER_CELL, RUBY_SYMBOL,
};
use crate::error::{LoadError, Result};
use strum::IntoEnumIterator;

/// 槽位在地圖文字中的位置 `(行, 欄)`
pub fn slot_location(cell: LargeCell, slot: Slot) -> (usize, usize) {
    let line = ROWS_PER_CELL * cell.y;
    let column = COLS_PER_CELL * cell.x;
    match slot {
        Slot::Center => (line + 1, column + 1),
        Slot::Up => (line, column + 1),
        Slot::Down => (line + 2, column + 1),
        Slot::Left => (line + 1, column),
        Slot::Right => (line + 1, column + 2),
    }
}

/// 中心圖例
pub fn decode_center(symbol: char) -> Option<CellContent> {
    match symbol {
        GOLD_SYMBOL => Some(CellContent::Gold),
        ROCK_SYMBOL => Some(CellContent::Rock),
        RUBY_SYMBOL => Some(CellContent::Ruby),
        EMPTY_SYMBOL => Some(CellContent::Empty),
        _ => None,
    }
}

/// 邊緣圖例（上下左右）
pub fn decode_edge(symbol: char) -> Option<CellContent> {
    match symbol {
        ROCK_SYMBOL => Some(CellContent::Rock),
        EMPTY_SYMBOL => Some(CellContent::Empty),
        _ => None,
    }
}

/// 內容轉回符號（一律使用中心圖例）
pub fn encode_content(content: CellContent) -> char {
    match content {
        CellContent::Empty => EMPTY_SYMBOL,
        CellContent::Gold => GOLD_SYMBOL,
        CellContent::Ruby => RUBY_SYMBOL,
        CellContent::Rock => ROCK_SYMBOL,
    }
}

/// 解碼整張地圖，回傳以 `[y][x]` 索引的內容表
///
/// 任何無法辨識的符號、缺行或過短的行都會立即失敗。
pub fn decode_cells<S: AsRef<str>>(
    width: Coord,
    height: Coord,
    data: &[S],
) -> Result<Vec<Vec<ContentMap>>> {
    let grid = to_char_grid(data);

    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| decode_cell(&grid, LargeCell { x, y }))
                .collect::<Result<Vec<_>>>()
        })
        .collect()
}

/// 把目前內容寫回原始地圖文字（保留角落與間隔字元）
///
/// 邊緣若被改成金礦或紅寶石，也會以中心圖例輸出，因此結果不保證能再次解碼。
pub fn render_ascii<S: AsRef<str>>(cells: &[Vec<ContentMap>], data: &[S]) -> Vec<String> {
    let mut grid = to_char_grid(data);

    for (y, row) in cells.iter().enumerate() {
        for (x, map) in row.iter().enumerate() {
            for (slot, content) in map.iter() {
                let (line, column) = slot_location(LargeCell { x, y }, slot);
                if let Some(symbol) = grid.get_mut(line).and_then(|l| l.get_mut(column)) {
                    *symbol = encode_content(content);
                }
            }
        }
    }

    grid.into_iter()
        .map(|line| line.into_iter().collect())
        .collect()
}

fn to_char_grid<S: AsRef<str>>(data: &[S]) -> Vec<Vec<char>> {
    data.iter()
        .map(|line| line.as_ref().chars().collect())
        .collect()
}

fn decode_cell(grid: &[Vec<char>], cell: LargeCell) -> Result<ContentMap> {
    let mut map = ContentMap::default();
    for slot in Slot::iter() {
        let (line, column) = slot_location(cell, slot);
        let symbol = symbol_at(grid, line, column)?;
        let decoded = match slot {
            Slot::Center => decode_center(symbol),
            _ => decode_edge(symbol),
        };
        map[slot] = decoded.ok_or(LoadError::UnknownSymbol {
            symbol,
            slot,
            line,
            column,
        })?;
    }
    Ok(map)
}

fn symbol_at(grid: &[Vec<char>], line: usize, column: usize) -> Result<char> {
    let Some(row) = grid.get(line) else {
        return Err(LoadError::MissingLine {
            line,
            available: grid.len(),
        }
        .into());
    };
    match row.get(column) {
        Some(symbol) => Ok(*symbol),
        None => Err(LoadError::LineTooShort { line, column }.into()),
    }
}
