//! 挖礦遊戲棋盤模型
//!
//! 兩層座標：大格（`LargeCell`）存放內容，子偏移（`SubOffset`）描述大格內的細部位置。

pub mod alias;
pub mod component;
pub mod constants;
pub mod error;
pub mod loader;
pub mod loader_schema;
pub mod logic;

pub use component::{CellContent, ContentMap, LargeCell, Position, Slot, SubOffset};
pub use error::{Error, ErrorKind, Result};
pub use logic::board::Board;
pub use logic::movement::Direction;
