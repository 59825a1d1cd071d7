//! 關卡檢視工具
//!
//! 用法：`board_cli <level.toml> [moves]`
//!
//! 從關卡起點依序套用 `moves`（例如 `rrdd`，每個字元一步），
//! 經過的槽位都會被挖空，最後印出棋盤與收集到的寶物。
//! 以 `RUST_LOG=debug` 查看棋盤細節。

use anyhow::{Context, Result, bail};
use digger_board::component::CellContent;
use digger_board::{Board, Position};
use digger_board::loader_schema::parse_level_toml;
use log::{debug, info, warn};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("用法: board_cli <level.toml> [moves]");
    };
    let moves = args.next().unwrap_or_default();

    let level_toml =
        std::fs::read_to_string(&path).with_context(|| format!("無法讀取關卡檔 {}", path))?;
    let level = parse_level_toml(&level_toml).with_context(|| format!("關卡檔 {}", path))?;
    let mut board = Board::from_level(&level).with_context(|| format!("關卡 {}", level.name))?;

    let start = level.start_cell();
    if !board.is_valid_cell(start) {
        bail!("起點 ({}, {}) 不在棋盤內", start.x, start.y);
    }

    let mut current = board.lc_to_sc_center(start);
    let mut collected = Vec::new();
    dig(&mut board, current, &mut collected);

    for key in moves.chars() {
        match board.step_key(current, &key.to_string()) {
            Some(next) => {
                current = next;
                dig(&mut board, current, &mut collected);
            }
            None => warn!("{} 無法往 {:?} 移動", current, key),
        }
    }

    println!("{}", level.name);
    for line in board.render_ascii() {
        println!("{}", line);
    }
    println!("位置: {}", current);
    println!(
        "收集: 金礦 {}, 紅寶石 {}",
        count(&collected, CellContent::Gold),
        count(&collected, CellContent::Ruby)
    );
    println!(
        "剩餘: 金礦 {}, 紅寶石 {}",
        board.count_content(CellContent::Gold),
        board.count_content(CellContent::Ruby)
    );

    Ok(())
}

/// 挖空目前槽位，寶物記入 `collected`
fn dig(board: &mut Board, pos: Position, collected: &mut Vec<CellContent>) {
    let content = board.take_cell_content(pos);
    match content {
        CellContent::Gold | CellContent::Ruby => {
            info!("{} 挖到 {}", pos, content);
            collected.push(content);
        }
        CellContent::Rock => debug!("{} 挖開岩石", pos),
        CellContent::Empty => {}
    }
}

fn count(collected: &[CellContent], content: CellContent) -> usize {
    collected.iter().filter(|c| **c == content).count()
}
