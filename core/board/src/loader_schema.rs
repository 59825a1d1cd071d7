//! 關卡設定檔（TOML）的資料結構

use crate::alias::Coord;
use crate::component::LargeCell;
use crate::error::{LoadError, Result};
use serde::{Deserialize, Serialize};

/// 關卡設定
///
/// ```toml
/// name = "tutorial"
/// size = [2, 1]
/// cell_size = 3
/// start = [0, 0]
/// data = [
///     "### ###",
///     "#G    #",
///     "### ###",
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelType {
    pub name: String,
    /// 大格數量 `[寬, 高]`
    pub size: (Coord, Coord),
    /// 每個大格的步數，必須為奇數
    pub cell_size: usize,
    /// 起始大格，預設左上角
    #[serde(default = "default_start")]
    pub start: (Coord, Coord),
    pub data: Vec<String>,
}

impl LevelType {
    pub fn start_cell(&self) -> LargeCell {
        let (x, y) = self.start;
        LargeCell { x, y }
    }
}

fn default_start() -> (Coord, Coord) {
    (0, 0)
}

/// 反序列化關卡 TOML
pub fn parse_level_toml(level_toml: &str) -> Result<LevelType> {
    toml::from_str(level_toml).map_err(|e| {
        LoadError::DeserializeError {
            format: "level.toml".to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}
