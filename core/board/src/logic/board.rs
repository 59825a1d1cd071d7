//! 棋盤邏輯

use crate::alias::{Coord, Offset};
use crate::component::{CellContent, ContentMap, LargeCell, Position, Slot, SubOffset};
use crate::error::{BoardError, ConfigError, Result};
use crate::loader::{decode_cells, render_ascii};
use crate::loader_schema::{LevelType, parse_level_toml};
use log::{debug, trace, warn};
use std::fmt;

/// 挖礦棋盤
///
/// 結構參數（尺寸、格子大小）在建構後不再改變，只有各槽位的內容會被修改。
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: Coord,
    height: Coord,
    cell_size: usize,
    half_cell_size: Offset,
    data: Vec<String>,
    // [y][x]
    cells: Vec<Vec<ContentMap>>,
}

impl Board {
    /// 從地圖文字建立棋盤
    ///
    /// # Fail fast 驗證：
    /// - `cell_size` 必須為奇數，確保中心偏移 `(0, 0)` 存在
    /// - 寬高皆不可為零
    /// - 每個大格的五個符號都必須符合圖例
    pub fn new<S: AsRef<str>>(size: (Coord, Coord), cell_size: usize, data: &[S]) -> Result<Self> {
        let (width, height) = size;

        if cell_size % 2 == 0 {
            return Err(ConfigError::EvenCellSize { cell_size }.into());
        }
        let half_cell_size = Offset::try_from((cell_size - 1) / 2)
            .map_err(|_| ConfigError::CellSizeTooLarge { cell_size })?;
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyBoard { width, height }.into());
        }

        let cells = decode_cells(width, height, data)?;
        let board = Self {
            width,
            height,
            cell_size,
            half_cell_size,
            data: data.iter().map(|line| line.as_ref().to_string()).collect(),
            cells,
        };

        debug!(
            "棋盤建立完成: {}x{} 大格, cell_size {}, 金礦 {}, 紅寶石 {}",
            width,
            height,
            cell_size,
            board.count_content(CellContent::Gold),
            board.count_content(CellContent::Ruby),
        );
        Ok(board)
    }

    /// 從關卡設定建立棋盤
    pub fn from_level(level: &LevelType) -> Result<Self> {
        Self::new(level.size, level.cell_size, &level.data)
    }

    /// 從關卡 TOML 建立棋盤
    pub fn from_toml(level_toml: &str) -> Result<Self> {
        let level = parse_level_toml(level_toml)?;
        Self::from_level(&level)
    }

    // ------------------------------------------------------------------------
    // 結構參數
    // ------------------------------------------------------------------------

    pub fn size(&self) -> (Coord, Coord) {
        (self.width, self.height)
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    /// 子偏移每軸的最大絕對值 `(cell_size - 1) / 2`
    pub fn half_cell_size(&self) -> Offset {
        self.half_cell_size
    }

    /// 建構時的原始地圖文字
    pub fn data(&self) -> &[String] {
        &self.data
    }

    pub fn is_valid_cell(&self, cell: LargeCell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    // ------------------------------------------------------------------------
    // 座標轉換
    // ------------------------------------------------------------------------

    /// 是否位於大格中心
    pub fn is_center(&self, pos: Position) -> bool {
        pos.offset == SubOffset::CENTER
    }

    /// 大格座標轉為該大格中心的位置
    pub fn lc_to_sc_center(&self, cell: LargeCell) -> Position {
        Position::new(cell, SubOffset::CENTER)
    }

    /// 位置所在的大格
    pub fn sc_to_lc(&self, pos: Position) -> LargeCell {
        pos.cell
    }

    // ------------------------------------------------------------------------
    // 內容存取
    // ------------------------------------------------------------------------

    pub fn cell(&self, cell: LargeCell) -> Option<&ContentMap> {
        self.cells.get(cell.y)?.get(cell.x)
    }

    /// 依列優先順序列出所有大格
    pub fn cells(&self) -> impl Iterator<Item = (LargeCell, &ContentMap)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, map)| (LargeCell { x, y }, map))
        })
    }

    /// 讀取位置上的內容（以子偏移的正負號決定槽位）
    ///
    /// 斜向子偏移沒有槽位，視為 `Empty`。
    ///
    /// # Panics
    /// 大格超出棋盤時 panic；`step` 與 `lc_to_sc_center` 不會產生這種位置。
    pub fn get_cell_content(&self, pos: Position) -> CellContent {
        let map = &self.cells[pos.cell.y][pos.cell.x];
        match Slot::from_offset(pos.offset) {
            Some(slot) => map[slot],
            None => CellContent::Empty,
        }
    }

    /// 寫入位置上的內容，覆蓋舊值
    ///
    /// 斜向子偏移沒有槽位，寫入會被忽略。
    ///
    /// # Panics
    /// 大格超出棋盤時 panic。
    pub fn set_cell_content(&mut self, pos: Position, content: CellContent) {
        self.replace_cell_content(pos, content);
    }

    /// 挖掘：把位置上的內容換成 `Empty` 並回傳原內容
    ///
    /// # Panics
    /// 大格超出棋盤時 panic。
    pub fn take_cell_content(&mut self, pos: Position) -> CellContent {
        self.replace_cell_content(pos, CellContent::Empty)
    }

    /// 帶邊界檢查的 `get_cell_content`
    pub fn try_get_cell_content(&self, pos: Position) -> Result<CellContent> {
        self.check_cell(pos.cell)?;
        Ok(self.get_cell_content(pos))
    }

    /// 帶邊界與軸向檢查的 `set_cell_content`，回傳舊值
    pub fn try_set_cell_content(
        &mut self,
        pos: Position,
        content: CellContent,
    ) -> Result<CellContent> {
        self.check_cell(pos.cell)?;
        if Slot::from_offset(pos.offset).is_none() {
            return Err(BoardError::NotAxisAligned {
                x: pos.offset.x,
                y: pos.offset.y,
            }
            .into());
        }
        Ok(self.replace_cell_content(pos, content))
    }

    /// 全棋盤中指定內容的槽位數
    pub fn count_content(&self, content: CellContent) -> usize {
        self.cells
            .iter()
            .flatten()
            .map(|map| map.count(content))
            .sum()
    }

    /// 以原始地圖格式輸出目前內容（除錯用）
    pub fn render_ascii(&self) -> Vec<String> {
        render_ascii(&self.cells, &self.data)
    }

    fn replace_cell_content(&mut self, pos: Position, content: CellContent) -> CellContent {
        let map = &mut self.cells[pos.cell.y][pos.cell.x];
        match Slot::from_offset(pos.offset) {
            Some(slot) => {
                trace!("{} [{}] 寫入 {}", pos, slot, content);
                map.set(slot, content)
            }
            None => {
                warn!("斜向位置 {} 沒有槽位，忽略寫入 {}", pos, content);
                CellContent::Empty
            }
        }
    }

    fn check_cell(&self, cell: LargeCell) -> Result<()> {
        if self.is_valid_cell(cell) {
            return Ok(());
        }
        Err(BoardError::OutOfBounds {
            x: cell.x,
            y: cell.y,
            width: self.width,
            height: self.height,
        }
        .into())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board(size=({}, {}), cell_size={}, data=[",
            self.width, self.height, self.cell_size
        )?;
        for line in &self.data {
            write!(f, "\n    {}", line)?;
        }
        write!(f, "\n])")
    }
}
