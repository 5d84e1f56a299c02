//! 3x3 local-shape pattern matching.
//!
//! The catalog holds 13 base shapes written from the mover's perspective.
//! Characters: `X` the player, `O` the opponent, `x` anything but an
//! opponent stone, `o` anything but a player stone, `.` an empty cell,
//! space an off-board cell (past the edge or offline), `?` anything.
//! `x`, `o`, and `?` match off-board cells too.
//!
//! The working set is the catalog closed under the dihedral symmetries:
//! four rotations, then a vertical mirror of each, then a horizontal mirror
//! of each, deduplicated (at most 104 distinct stencils). Matching a board
//! cell samples its 3x3 neighborhood and tries every stencil.

use std::sync::OnceLock;

use crate::board::{Board, Color, Coord};
use crate::chains::effective_liberties_of_move;
use crate::hooks::{MoveRng, Pacer};
use crate::movegen::{Move, random_index};

/// Base shapes. Row `i` of an entry covers board column `x - 1 + i`;
/// character `j` of a row covers board row `y - 1 + j`.
const PATTERN_SRC: [[&str; 3]; 13] = [
    // hane: enclosing
    ["XOX", "...", "???"],
    // hane: non-cutting
    ["XO.", "...", "?.?"],
    // hane: magari
    ["XO?", "X..", "o.?"],
    // diagonal attachment
    [".O.", "X..", "..."],
    // unprotected cut
    ["XO?", "O.x", "?x?"],
    // peeped cut
    ["XO?", "O.X", "???"],
    // push through
    ["?X?", "O.O", "xxx"],
    // cut keima
    ["OX?", "x.O", "???"],
    // side chase
    ["X.?", "O.?", "   "],
    // block side cut
    ["OX?", "X.O", "   "],
    // block side connection
    ["?X?", "o.O", "   "],
    // sagari at the edge
    ["?XO", "o.o", "   "],
    // side cut
    ["?OX", "X.O", "   "],
];

type Stencil = [[u8; 3]; 3];

static EXPANDED: OnceLock<Vec<Stencil>> = OnceLock::new();

fn to_stencil(rows: &[&str; 3]) -> Stencil {
    let mut stencil = [[b'?'; 3]; 3];
    for (i, row) in rows.iter().enumerate() {
        for (j, byte) in row.bytes().take(3).enumerate() {
            stencil[i][j] = byte;
        }
    }
    stencil
}

fn rotate90(stencil: &Stencil) -> Stencil {
    let mut out = [[b'?'; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = stencil[2 - j][i];
        }
    }
    out
}

fn vertical_mirror(stencil: &Stencil) -> Stencil {
    [stencil[2], stencil[1], stencil[0]]
}

fn horizontal_mirror(stencil: &Stencil) -> Stencil {
    let mut out = *stencil;
    for row in out.iter_mut() {
        row.reverse();
    }
    out
}

/// Catalog closed under the 8-way dihedral group, deduplicated in
/// first-produced order. Built once, on first use.
fn expanded_patterns() -> &'static [Stencil] {
    EXPANDED.get_or_init(|| {
        let base: Vec<Stencil> = PATTERN_SRC.iter().map(to_stencil).collect();
        let mut rotated = base.clone();
        let mut turned = base;
        for _ in 0..3 {
            turned = turned.iter().map(rotate90).collect();
            rotated.extend(turned.iter().copied());
        }
        let mut mirrored = rotated.clone();
        mirrored.extend(rotated.iter().map(vertical_mirror));
        let mut all = mirrored.clone();
        all.extend(mirrored.iter().map(horizontal_mirror));

        let mut unique = Vec::new();
        for stencil in all {
            if !unique.contains(&stencil) {
                unique.push(stencil);
            }
        }
        unique
    })
}

/// Does one stencil cell accept the given board cell? `None` is off-board.
fn cell_matches(rule: u8, cell: Option<Color>, player: Color) -> bool {
    let opponent = player.opponent();
    match rule {
        b'X' => cell == Some(player),
        b'O' => cell == Some(opponent),
        b'x' => cell != Some(opponent),
        b'o' => cell != Some(player),
        b'.' => cell == Some(Color::Empty),
        b' ' => cell.is_none(),
        b'?' => true,
        _ => false,
    }
}

/// Sample the 3x3 neighborhood around `(x, y)`; out-of-bounds and offline
/// cells sample as `None`.
fn neighborhood(board: &Board, x: usize, y: usize) -> [[Option<Color>; 3]; 3] {
    let mut cells = [[None; 3]; 3];
    for (i, row) in cells.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            let nx = (x + i).checked_sub(1);
            let ny = (y + j).checked_sub(1);
            if let (Some(nx), Some(ny)) = (nx, ny) {
                *cell = board.get(nx, ny).map(|p| p.color);
            }
        }
    }
    cells
}

/// Whether any expanded stencil accepts the neighborhood of `(x, y)` for
/// `player`. The symmetric closure makes this verdict invariant under board
/// rotation and mirroring.
pub fn point_matches_any_pattern(board: &Board, x: usize, y: usize, player: Color) -> bool {
    let cells = neighborhood(board, x, y);
    expanded_patterns().iter().any(|stencil| {
        stencil.iter().enumerate().all(|(i, row)| {
            row.iter()
                .enumerate()
                .all(|(j, &rule)| cell_matches(rule, cells[i][j], player))
        })
    })
}

/// Uniform pick among the available points whose neighborhood matches a
/// stencil. With `smart`, a match must also keep more than one effective
/// liberty after the placement. Pauses once per scanned column.
pub fn pattern_move(
    board: &Board,
    player: Color,
    available: &[Coord],
    smart: bool,
    rng: &mut dyn MoveRng,
    pacer: &mut dyn Pacer,
) -> Option<Move> {
    let mut matches: Vec<Coord> = Vec::new();
    for x in 0..board.size() {
        for y in 0..board.size() {
            if !available.contains(&(x, y)) || board.get(x, y).is_none() {
                continue;
            }
            if !point_matches_any_pattern(board, x, y, player) {
                continue;
            }
            if smart && effective_liberties_of_move(board, x, y, player).len() <= 1 {
                continue;
            }
            matches.push((x, y));
        }
        pacer.pause();
    }
    if matches.is_empty() {
        return None;
    }
    let (x, y) = matches[random_index(rng, matches.len())];
    Some(Move {
        point: (x, y),
        old_liberty_count: None,
        new_liberty_count: None,
        creates_life: false,
    })
}
