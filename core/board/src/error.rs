//! 錯誤處理系統
//!
//! 建構期錯誤（設定、地圖解碼）一律回傳 `Error`；
//! 移動時的無效方向與越界不是錯誤，由 `step` 回傳 `None`。

use crate::alias::{Coord, Offset};
use crate::component::Slot;
use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// 頂層錯誤，包含原始錯誤和 context 鏈
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    contexts: Vec<String>,
}

/// 錯誤種類
#[derive(Debug, ThisError)]
pub enum ErrorKind {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// 棋盤參數錯誤
#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("格子大小必須為奇數: {cell_size}")]
    EvenCellSize { cell_size: usize },
    #[error("格子大小過大: {cell_size}")]
    CellSizeTooLarge { cell_size: usize },
    #[error("棋盤尺寸不可為零: ({width}, {height})")]
    EmptyBoard { width: Coord, height: Coord },
}

/// 地圖資料載入錯誤
#[derive(Debug, ThisError)]
pub enum LoadError {
    #[error("無法辨識的符號 {symbol:?}（{slot}）於第 {line} 行第 {column} 欄")]
    UnknownSymbol {
        symbol: char,
        slot: Slot,
        line: usize,
        column: usize,
    },
    #[error("地圖行數不足: 需要第 {line} 行，共 {available} 行")]
    MissingLine { line: usize, available: usize },
    #[error("第 {line} 行過短: 需要第 {column} 欄")]
    LineTooShort { line: usize, column: usize },
    #[error("{format} 反序列化失敗: {reason}")]
    DeserializeError { format: String, reason: String },
}

/// 棋盤存取錯誤
#[derive(Debug, ThisError)]
pub enum BoardError {
    #[error("位置超出棋盤邊界: ({x}, {y}) 邊界 ({width}, {height})")]
    OutOfBounds {
        x: Coord,
        y: Coord,
        width: Coord,
        height: Coord,
    },
    #[error("子偏移不是軸向: ({x}, {y})")]
    NotAxisAligned { x: Offset, y: Offset },
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// 添加錯誤上下文，自動記錄呼叫位置
    #[track_caller]
    pub fn context<C: Into<String>>(mut self, context: C) -> Self {
        let loc = std::panic::Location::caller();
        let msg = format!("{} [{}:{}]", context.into(), loc.file(), loc.line());
        self.contexts.push(msg);
        self
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        for ctx in &self.contexts {
            write!(f, "\n  {}", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl<E: Into<ErrorKind>> From<E> for Error {
    fn from(error: E) -> Self {
        Self {
            kind: error.into(),
            contexts: Vec::new(),
        }
    }
}

/// Result 擴展 trait，用於添加錯誤上下文
pub trait Context<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Result<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|e| e.context(context))
    }
}
