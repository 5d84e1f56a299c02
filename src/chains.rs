//! Chain discovery, liberty computation, and capture resolution.
//!
//! A chain is a maximal orthogonally-connected set of same-color cells;
//! empty cells chain together the same way. Discovery scans the board
//! column-major and flood-fills from each unassigned cell, so chain ids (the
//! first-scanned member coordinate) are a deterministic function of the
//! board. Offline holes block the flood and belong to no chain.

use std::collections::{HashMap, HashSet};

use crate::board::{Board, Color, Coord};

/// An analyzed chain: its id, color, member points, and liberty list.
///
/// Empty-colored chains carry an empty liberty list.
#[derive(Clone, Debug)]
pub struct Chain {
    pub id: Coord,
    pub color: Color,
    pub points: Vec<Coord>,
    pub liberties: Vec<Coord>,
}

/// Assign chain ids and liberty lists to every non-offline cell.
///
/// With `reset_first`, all prior analysis is cleared; otherwise only cells
/// with no chain id are (re)assigned, which lets callers patch up a board
/// after a partial edit.
pub fn update_chains(board: &mut Board, reset_first: bool) {
    if reset_first {
        board.clear_analysis();
    }
    let size = board.size();
    for x in 0..size {
        for y in 0..size {
            let color = match board.get(x, y) {
                Some(point) if point.chain.is_none() => point.color,
                _ => continue,
            };
            let members = flood_fill(board, (x, y), color);
            let liberties = if color == Color::Empty {
                None
            } else {
                Some(chain_liberties(board, &members))
            };
            for &(mx, my) in &members {
                if let Some(point) = board.get_mut(mx, my) {
                    point.chain = Some((x, y));
                    point.liberties = liberties.clone();
                }
            }
        }
    }
}

/// Collect the connected same-color component containing `start`.
fn flood_fill(board: &Board, start: Coord, color: Color) -> Vec<Coord> {
    let mut members = vec![start];
    let mut seen: HashSet<Coord> = HashSet::from([start]);
    let mut stack = vec![start];
    while let Some((cx, cy)) = stack.pop() {
        for (nx, ny) in board.neighbor_coords(cx, cy) {
            if seen.contains(&(nx, ny)) {
                continue;
            }
            if let Some(neighbor) = board.get(nx, ny) {
                if neighbor.color == color {
                    seen.insert((nx, ny));
                    members.push((nx, ny));
                    stack.push((nx, ny));
                }
            }
        }
    }
    members
}

/// The deduplicated empty orthogonal neighbors of a member set, in
/// first-encountered order.
fn chain_liberties(board: &Board, members: &[Coord]) -> Vec<Coord> {
    let mut liberties = Vec::new();
    for &(mx, my) in members {
        for (nx, ny) in board.neighbor_coords(mx, my) {
            if board.get(nx, ny).map(|p| p.color) == Some(Color::Empty)
                && !liberties.contains(&(nx, ny))
            {
                liberties.push((nx, ny));
            }
        }
    }
    liberties
}

/// Group the board's analyzed points into [`Chain`] records, ordered by the
/// column-major first appearance of each chain id.
pub fn collect_chains(board: &Board) -> Vec<Chain> {
    let mut order: Vec<Coord> = Vec::new();
    let mut by_id: HashMap<Coord, Chain> = HashMap::new();
    for point in board.points() {
        let Some(id) = point.chain else { continue };
        by_id
            .entry(id)
            .or_insert_with(|| {
                order.push(id);
                Chain {
                    id,
                    color: point.color,
                    points: Vec::new(),
                    liberties: point.liberties.clone().unwrap_or_default(),
                }
            })
            .points
            .push((point.x, point.y));
    }
    order.into_iter().filter_map(|id| by_id.remove(&id)).collect()
}

/// Distinct stone chains orthogonally adjacent to `chain`, in the order the
/// scan of its members encounters them.
pub fn neighboring_chains<'a>(
    board: &Board,
    chain: &Chain,
    all_chains: &'a [Chain],
) -> Vec<&'a Chain> {
    let mut ids: Vec<Coord> = Vec::new();
    for &(x, y) in &chain.points {
        for neighbor in board.neighbors(x, y) {
            let Some(id) = neighbor.chain else { continue };
            if neighbor.color != Color::Empty && id != chain.id && !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    ids.into_iter()
        .filter_map(|id| all_chains.iter().find(|c| c.id == id))
        .collect()
}

/// Remove every chain left without liberties after a placement by `moved`.
///
/// Captures take precedence over suicide: if any opposing chain has zero
/// liberties it is removed (all of them are), and friendly chains are left
/// alone. Only when no opposing chain dies are friendly zero-liberty chains
/// removed. Returns the cleared coordinates (empty when nothing died).
pub fn update_captures(board: &mut Board, moved: Color) -> Vec<Coord> {
    update_chains(board, true);
    let chains = collect_chains(board);
    let enemy = moved.opponent();

    let dead = |color: Color| -> Vec<Coord> {
        chains
            .iter()
            .filter(|c| c.color == color && c.color != Color::Empty && c.liberties.is_empty())
            .flat_map(|c| c.points.iter().copied())
            .collect()
    };

    let mut doomed = dead(enemy);
    if doomed.is_empty() {
        doomed = dead(moved);
    }

    for &(x, y) in &doomed {
        if let Some(point) = board.get_mut(x, y) {
            point.color = Color::Empty;
            point.chain = None;
            point.liberties = None;
        }
    }
    if !doomed.is_empty() {
        update_chains(board, true);
    }
    doomed
}

/// Produce the board that results from `player` placing at `(x, y)`,
/// including any captures, without touching the input board.
pub fn evaluate_move_result(board: &Board, x: usize, y: usize, player: Color) -> Board {
    let mut next = board.clone();
    if let Some(point) = next.get_mut(x, y) {
        point.color = player;
        point.chain = None;
        point.liberties = None;
        update_captures(&mut next, player);
    }
    next
}

/// The liberties a new stone at `(x, y)` would share with the chain it joins:
/// empty orthogonal neighbors of the point plus the current liberties of
/// every adjacent friendly chain, deduplicated, excluding the point itself.
pub fn effective_liberties_of_move(board: &Board, x: usize, y: usize, player: Color) -> Vec<Coord> {
    let mut liberties: Vec<Coord> = Vec::new();
    for (nx, ny) in board.neighbor_coords(x, y) {
        if board.get(nx, ny).map(|p| p.color) == Some(Color::Empty)
            && !liberties.contains(&(nx, ny))
        {
            liberties.push((nx, ny));
        }
    }
    for neighbor in board.neighbors(x, y) {
        if neighbor.color != player {
            continue;
        }
        if let Some(chain_libs) = &neighbor.liberties {
            for &lib in chain_libs {
                if !liberties.contains(&lib) {
                    liberties.push(lib);
                }
            }
        }
    }
    liberties.retain(|&coord| coord != (x, y));
    liberties
}
