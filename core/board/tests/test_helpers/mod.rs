//! 測試輔助：範例地圖與座標建構

#![allow(dead_code)]

use digger_board::Board;
use digger_board::component::{LargeCell, Position, SubOffset};

/// 5x5 大格、cell_size 3 的範例地圖
///
/// - (0, 0) 中心有金礦
/// - (1, 1) 上緣、(2, 1) 左緣、(2, 2) 下緣、(1, 2) 右緣為空地
/// - 其餘槽位為岩石或空地
pub const SAMPLE_MAP: [&str; 15] = [
    "### ### ### ### ###",
    "#G# # # # # # # # #",
    "### ### ### ### ###",
    "### # # ### ### ###",
    "# # # #   # # # # #",
    "### ### ### ### ###",
    "### ### ### ### ###",
    "# # #   # # # # # #",
    "### ### # # ### ###",
    "### ### ### ### ###",
    "# # # # # # # # # #",
    "### ### ### ### ###",
    "### ### ### ### ###",
    "# # # # # # # # # #",
    "### ### ### ### ###",
];

pub fn sample_board() -> Board {
    Board::new((5, 5), 3, &SAMPLE_MAP).expect("範例地圖應可解碼")
}

/// 產生全空的地圖文字（每個槽位皆為空白）
pub fn open_map(width: usize, height: usize) -> Vec<String> {
    (0..height * 3)
        .map(|_| " ".repeat(width * 4))
        .collect()
}

pub fn open_board(width: usize, height: usize, cell_size: usize) -> Board {
    Board::new((width, height), cell_size, &open_map(width, height)).expect("空地圖應可解碼")
}

/// `((bx, by), (mx, my))` 簡寫
pub fn pos(bx: usize, by: usize, mx: i32, my: i32) -> Position {
    Position::new(LargeCell { x: bx, y: by }, SubOffset { x: mx, y: my })
}

pub fn cell(x: usize, y: usize) -> LargeCell {
    LargeCell { x, y }
}
