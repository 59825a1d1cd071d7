//! 核心業務邏輯

pub mod board;
pub mod movement;
