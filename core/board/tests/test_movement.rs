//! 移動（step）測試

mod test_helpers;

use digger_board::component::{CellContent, Position};
use digger_board::logic::movement::{Direction, step_in_direction};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::{HashSet, VecDeque};
use strum::IntoEnumIterator;
use test_helpers::{open_board, pos, sample_board};

#[test]
fn test_edge_lc_movement() {
    let board = sample_board();
    assert_eq!(board.step_key(pos(0, 0, 0, 0), "u"), None);
    assert_eq!(board.step_key(pos(0, 0, 0, 0), "l"), None);
    assert_eq!(board.step_key(pos(4, 4, 0, 0), "r"), None);
    assert_eq!(board.step_key(pos(4, 4, 0, 0), "d"), None);

    // 邊緣大格往內仍可移動
    assert_eq!(board.step_key(pos(0, 0, 0, 0), "r"), Some(pos(0, 0, 1, 0)));
    assert_eq!(board.step_key(pos(0, 0, 0, 0), "d"), Some(pos(0, 0, 0, 1)));
    assert_eq!(board.step_key(pos(4, 4, 0, 0), "l"), Some(pos(4, 4, -1, 0)));
    assert_eq!(board.step_key(pos(4, 4, 0, 0), "u"), Some(pos(4, 4, 0, -1)));
}

#[test]
fn test_step_out_of_bound() {
    let board = sample_board();
    // (起點, 被拒絕的方向)
    let test_data = [
        (pos(0, 0, 0, -1), Direction::Up),
        (pos(0, 0, -1, 0), Direction::Left),
        (pos(0, 2, 0, 0), Direction::Left),
        (pos(2, 0, 0, 0), Direction::Up),
        (pos(4, 2, 0, 0), Direction::Right),
        (pos(2, 4, 0, 0), Direction::Down),
        (pos(4, 0, 1, 0), Direction::Right),
        (pos(0, 4, 0, 1), Direction::Down),
    ];
    for (idx, (from, direction)) in test_data.into_iter().enumerate() {
        assert_eq!(
            step_in_direction(&board, from, direction),
            None,
            "Case {}, direction {:?}",
            idx,
            direction
        );
    }
}

#[test]
fn test_cell_boundary_carry() {
    let board = sample_board();
    let test_data = [
        (pos(0, 0, 1, 0), "r", pos(1, 0, -1, 0)),
        (pos(0, 0, 0, 1), "d", pos(0, 1, 0, -1)),
        (pos(1, 1, -1, 0), "l", pos(0, 1, 1, 0)),
        (pos(1, 1, 0, -1), "u", pos(1, 0, 0, 1)),
        (pos(3, 3, 1, 0), "r", pos(4, 3, -1, 0)),
        (pos(3, 3, 0, 1), "d", pos(3, 4, 0, -1)),
    ];
    for (idx, (from, key, expected)) in test_data.into_iter().enumerate() {
        assert_eq!(board.step_key(from, key), Some(expected), "Case {}", idx);
    }
}

#[test]
fn test_step_within_cell() {
    let board = sample_board();
    let test_data = [
        (pos(1, 1, 0, 0), Direction::Right, pos(1, 1, 1, 0)),
        (pos(1, 1, 0, 0), Direction::Left, pos(1, 1, -1, 0)),
        (pos(1, 1, 0, 0), Direction::Up, pos(1, 1, 0, -1)),
        (pos(1, 1, 0, 0), Direction::Down, pos(1, 1, 0, 1)),
        (pos(1, 1, 1, 0), Direction::Left, pos(1, 1, 0, 0)),
        (pos(1, 1, 0, -1), Direction::Down, pos(1, 1, 0, 0)),
        (pos(1, 0, -1, 0), Direction::Right, pos(1, 0, 0, 0)),
    ];
    for (idx, (from, direction, expected)) in test_data.into_iter().enumerate() {
        assert_eq!(board.step(from, direction), Some(expected), "Case {}", idx);
    }
}

#[test]
fn test_invalid_sc_coordinates() {
    let board = sample_board();
    // 離開軸線的移動一律拒絕
    assert_eq!(board.step_key(pos(1, 1, 0, 1), "r"), None);
    assert_eq!(board.step_key(pos(1, 1, 0, 1), "l"), None);
    assert_eq!(board.step_key(pos(1, 1, 1, 0), "u"), None);
    assert_eq!(board.step_key(pos(1, 1, 1, 0), "d"), None);
}

#[test]
fn test_unknown_direction() {
    let mut board = sample_board();
    let before = board.clone();
    for key in ["q", "", "x", "U", "right", "ud"] {
        for from in [pos(1, 1, 0, 1), pos(0, 0, 0, 0), pos(4, 4, -1, 0)] {
            assert_eq!(board.step_key(from, key), None, "key {:?} from {}", key, from);
        }
    }
    assert_eq!(board, before);

    // 內容不受影響
    board.set_cell_content(pos(0, 0, 0, 0), CellContent::Ruby);
    assert_eq!(board.step_key(pos(0, 0, 0, 0), "?"), None);
    assert_eq!(board.get_cell_content(pos(0, 0, 0, 0)), CellContent::Ruby);
}

#[test]
fn test_larger_cell_size_carry() {
    // cell_size 5 => half 2
    let board = open_board(2, 1, 5);
    assert_eq!(board.step_key(pos(0, 0, 1, 0), "r"), Some(pos(0, 0, 2, 0)));
    assert_eq!(board.step_key(pos(0, 0, 2, 0), "r"), Some(pos(1, 0, -2, 0)));
    assert_eq!(board.step_key(pos(1, 0, -2, 0), "l"), Some(pos(0, 0, 2, 0)));
    assert_eq!(board.step_key(pos(1, 0, 0, 0), "r"), None);
    assert_eq!(board.step_key(pos(1, 0, 0, 0), "u"), None);
    assert_eq!(board.step_key(pos(1, 0, 0, 0), "d"), None);
}

#[test]
fn test_unit_cell_size_moves_cell_by_cell() {
    // cell_size 1 => half 0，每一步都跨到相鄰大格中心
    let board = open_board(3, 3, 1);
    assert_eq!(board.step_key(pos(0, 0, 0, 0), "r"), Some(pos(1, 0, 0, 0)));
    assert_eq!(board.step_key(pos(1, 0, 0, 0), "d"), Some(pos(1, 1, 0, 0)));
    assert_eq!(board.step_key(pos(1, 1, 0, 0), "l"), Some(pos(0, 1, 0, 0)));
    assert_eq!(board.step_key(pos(0, 1, 0, 0), "u"), Some(pos(0, 0, 0, 0)));
    assert_eq!(board.step_key(pos(2, 2, 0, 0), "r"), None);
}

#[test]
fn test_walk_across_row() {
    let board = open_board(3, 1, 3);
    let mut current = pos(0, 0, 0, 0);
    let mut path = vec![current];
    while let Some(next) = board.step(current, Direction::Right) {
        path.push(next);
        current = next;
    }
    assert_eq!(
        path,
        vec![
            pos(0, 0, 0, 0),
            pos(0, 0, 1, 0),
            pos(1, 0, -1, 0),
            pos(1, 0, 0, 0),
            pos(1, 0, 1, 0),
            pos(2, 0, -1, 0),
            pos(2, 0, 0, 0),
        ]
    );
}

#[test]
fn test_single_cell_board_cannot_move() {
    let board = open_board(1, 1, 5);
    for direction in Direction::iter() {
        assert_eq!(board.step(pos(0, 0, 0, 0), direction), None, "{:?}", direction);
    }
}

/// 從起點以 BFS 收集所有可到達位置
fn reachable_from(board: &digger_board::Board, start: Position) -> HashSet<Position> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        for direction in Direction::iter() {
            if let Some(next) = board.step(current, direction) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }
    seen
}

#[test]
fn test_reachable_positions_stay_axis_aligned() {
    let board = sample_board();
    let reachable = reachable_from(&board, pos(0, 0, 0, 0));

    assert_eq!(reachable.len(), 105);
    let half = board.half_cell_size();
    for p in &reachable {
        assert!(p.offset.x == 0 || p.offset.y == 0, "{}", p);
        assert!(p.offset.x.abs() <= half && p.offset.y.abs() <= half, "{}", p);
        assert!(board.is_valid_cell(board.sc_to_lc(*p)), "{}", p);
    }
}

#[test]
fn test_reachable_count_by_cell_size() {
    // 中心 w*h 個，相鄰中心之間各有 (cell_size - 1) 個位置
    for (width, height, cell_size) in [(1, 1, 3), (2, 1, 3), (3, 2, 5), (4, 4, 7), (2, 3, 1)] {
        let board = open_board(width, height, cell_size);
        let reachable = reachable_from(&board, pos(0, 0, 0, 0));
        let links = height * (width - 1) + width * (height - 1);
        let expected = width * height + (cell_size - 1) * links;
        assert_eq!(
            reachable.len(),
            expected,
            "board {}x{} cell_size {}",
            width,
            height,
            cell_size
        );
        for x in 0..width {
            for y in 0..height {
                assert!(reachable.contains(&pos(x, y, 0, 0)));
            }
        }
    }
}

fn global_coord(p: Position, cell_size: usize) -> (i32, i32) {
    let size = cell_size as i32;
    (
        p.cell.x as i32 * size + p.offset.x,
        p.cell.y as i32 * size + p.offset.y,
    )
}

#[test]
fn test_random_walk_keeps_invariants() {
    let cell_size = 5;
    let board = open_board(6, 4, cell_size);
    let half = board.half_cell_size();
    let directions: Vec<Direction> = Direction::iter().collect();
    let mut rng = rand::rng();

    let mut current = pos(rng.random_range(0..6), rng.random_range(0..4), 0, 0);
    for _ in 0..10_000 {
        let direction = *directions.choose(&mut rng).unwrap();
        if let Some(next) = board.step(current, direction) {
            assert!(next.offset.x == 0 || next.offset.y == 0, "{}", next);
            assert!(next.offset.x.abs() <= half && next.offset.y.abs() <= half);
            assert!(board.is_valid_cell(next.cell), "{}", next);

            // 換算成全域細格座標後，每一步恰好移動一格
            let (dx, dy) = direction.delta();
            let (bx, by) = global_coord(current, cell_size);
            let (ax, ay) = global_coord(next, cell_size);
            assert_eq!((ax - bx, ay - by), (dx, dy), "{} -> {}", current, next);
            current = next;
        }
    }
}
