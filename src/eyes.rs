//! Eye detection and disputed-territory analysis.
//!
//! A potential eye is an empty chain bordered exclusively by one player's
//! stone chains. Confirmation is the subtle part: with several bordering
//! chains, a candidate still counts as an eye for any single chain that
//! fully encircles it on its own, which is established by blanking the other
//! bordering chains on an evaluation copy and re-running chain analysis.

use std::collections::{HashMap, HashSet};

use itertools::Itertools;

use crate::board::{Board, Color, Coord};
use crate::chains::{Chain, collect_chains, neighboring_chains, update_chains};
use crate::rules::{BoardState, all_valid_moves};

/// An empty chain whose borders are all one player's chains.
#[derive(Clone, Debug)]
pub struct PotentialEye {
    pub points: Vec<Coord>,
    pub neighbor_chain_ids: Vec<Coord>,
}

/// Largest empty-chain size still considered an eye candidate.
fn max_eye_size(board: &Board) -> usize {
    ((board.live_cell_count() as f64 * 0.4) as usize).min(11)
}

/// Enumerate the empty chains bordered only by `player`'s chains.
///
/// Candidates are capped at `min(0.4 * live cells, 11)` points; larger empty
/// regions are open territory, not eye shapes.
pub fn find_potential_eyes(board: &Board, player: Color) -> Vec<PotentialEye> {
    let chains = collect_chains(board);
    let cap = max_eye_size(board);
    let mut eyes = Vec::new();
    for chain in chains
        .iter()
        .filter(|c| c.color == Color::Empty && c.points.len() <= cap)
    {
        let neighbors = neighboring_chains(board, chain, &chains);
        if neighbors.is_empty() || neighbors.iter().any(|c| c.color != player) {
            continue;
        }
        eyes.push(PotentialEye {
            points: chain.points.clone(),
            neighbor_chain_ids: neighbors.iter().map(|c| c.id).collect(),
        });
    }
    eyes
}

/// Bounding box of a point set: (min x, max x, min y, max y).
fn spread(points: &[Coord]) -> (usize, usize, usize, usize) {
    let min_x = points.iter().map(|p| p.0).min().unwrap_or(0);
    let max_x = points.iter().map(|p| p.0).max().unwrap_or(0);
    let min_y = points.iter().map(|p| p.1).min().unwrap_or(0);
    let max_y = points.iter().map(|p| p.1).max().unwrap_or(0);
    (min_x, max_x, min_y, max_y)
}

/// Cheap reject before building an evaluation board: a chain can only
/// encircle a region it reaches past on all four sides, with the board edge
/// standing in for "past" at the rim.
fn could_encircle(board: &Board, candidate: &[Coord], chain: &Chain) -> bool {
    let edge = board.size() - 1;
    let (c_min_x, c_max_x, c_min_y, c_max_y) = spread(candidate);
    let (n_min_x, n_max_x, n_min_y, n_max_y) = spread(&chain.points);
    let wraps_west = n_min_x < c_min_x || (c_min_x == 0 && n_min_x == 0);
    let wraps_east = n_max_x > c_max_x || (c_max_x == edge && n_max_x == edge);
    let wraps_south = n_min_y < c_min_y || (c_min_y == 0 && n_min_y == 0);
    let wraps_north = n_max_y > c_max_y || (c_max_y == edge && n_max_y == edge);
    wraps_west && wraps_east && wraps_south && wraps_north
}

/// Of the chains bordering `candidate`, those that encircle it on their own.
///
/// For each contender, every *other* bordering chain is blanked on a copy of
/// the board; if the candidate's grown region then borders exactly one chain,
/// the contender surrounds it without help.
fn chains_fully_encircling(
    board: &Board,
    candidate: &PotentialEye,
    all_chains: &[Chain],
) -> Vec<Coord> {
    let Some(&(sample_x, sample_y)) = candidate.points.first() else {
        return Vec::new();
    };
    let mut encircling = Vec::new();
    for &id in &candidate.neighbor_chain_ids {
        let Some(contender) = all_chains.iter().find(|c| c.id == id) else {
            continue;
        };
        if !could_encircle(board, &candidate.points, contender) {
            continue;
        }

        let mut evaluation = board.clone();
        for &other_id in &candidate.neighbor_chain_ids {
            if other_id == id {
                continue;
            }
            let Some(other) = all_chains.iter().find(|c| c.id == other_id) else {
                continue;
            };
            for &(x, y) in &other.points {
                if let Some(point) = evaluation.get_mut(x, y) {
                    point.color = Color::Empty;
                    point.chain = None;
                    point.liberties = None;
                }
            }
        }
        update_chains(&mut evaluation, true);

        let region_id = evaluation.get(sample_x, sample_y).and_then(|p| p.chain);
        let new_chains = collect_chains(&evaluation);
        let bordering = new_chains
            .iter()
            .find(|c| Some(c.id) == region_id)
            .map(|region| neighboring_chains(&evaluation, region, &new_chains).len())
            .unwrap_or(0);
        if bordering == 1 {
            encircling.push(id);
        }
    }
    encircling
}

/// Map each of `player`'s chains to the eye point-groups it controls.
///
/// A chain with two or more entries here is alive.
pub fn eyes_by_chain(board: &Board, player: Color) -> HashMap<Coord, Vec<Vec<Coord>>> {
    let chains = collect_chains(board);
    let mut eyes: HashMap<Coord, Vec<Vec<Coord>>> = HashMap::new();
    for candidate in find_potential_eyes(board, player) {
        match candidate.neighbor_chain_ids.as_slice() {
            [] => {}
            [only] => eyes.entry(*only).or_default().push(candidate.points.clone()),
            _ => {
                for id in chains_fully_encircling(board, &candidate, &chains) {
                    eyes.entry(id).or_default().push(candidate.points.clone());
                }
            }
        }
    }
    eyes
}

/// Ids of `player`'s chains holding at least two eyes.
pub fn living_chain_ids(board: &Board, player: Color) -> HashSet<Coord> {
    eyes_by_chain(board, player)
        .into_iter()
        .filter(|(_, eyes)| eyes.len() >= 2)
        .map(|(id, _)| id)
        .collect()
}

/// The moves worth contesting for `player`.
///
/// Starts from every legal move, optionally drops points inside the player's
/// own two-eyed regions, and drops the interior of opponent-controlled empty
/// regions unless a bordering opponent chain is attackable there: few
/// liberties, in contact with the player, and with every liberty inside the
/// candidate region.
pub fn find_disputed_territory(
    state: &BoardState,
    player: Color,
    exclude_friendly_eyes: bool,
) -> Vec<Coord> {
    let mut moves = all_valid_moves(state, player);
    if exclude_friendly_eyes {
        let friendly_eyes: HashSet<Coord> = eyes_by_chain(&state.board, player)
            .values()
            .filter(|eyes| eyes.len() >= 2)
            .flat_map(|eyes| eyes.iter().flatten().copied())
            .collect();
        moves.retain(|point| !friendly_eyes.contains(point));
    }

    let opponent = player.opponent();
    let chains = collect_chains(&state.board);
    let mut opponent_territory: HashSet<Coord> = HashSet::new();
    let mut attackable_interior: HashSet<Coord> = HashSet::new();

    for candidate in find_potential_eyes(&state.board, opponent) {
        opponent_territory.extend(candidate.points.iter().copied());
        let interior: HashSet<Coord> = candidate.points.iter().copied().collect();
        for id in &candidate.neighbor_chain_ids {
            let Some(border) = chains.iter().find(|c| c.id == *id) else {
                continue;
            };
            if border.liberties.len() > 4 {
                continue;
            }
            let touches_player = neighboring_chains(&state.board, border, &chains)
                .iter()
                .any(|c| c.color == player);
            if !touches_player {
                continue;
            }
            if border.liberties.iter().all(|lib| interior.contains(lib)) {
                attackable_interior.extend(border.liberties.iter().copied());
            }
        }
    }

    moves.retain(|point| !opponent_territory.contains(point) || attackable_interior.contains(point));
    moves
}

/// Moves whose empty chain (of at most `max_chain_size` points) borders both
/// colors, meaning the area is still being fought over.
pub fn disputed_territory_moves(
    board: &Board,
    available: &[Coord],
    max_chain_size: usize,
) -> Vec<Coord> {
    let chains = collect_chains(board);
    available
        .iter()
        .copied()
        .filter(|&(x, y)| {
            let Some(id) = board.get(x, y).and_then(|p| p.chain) else {
                return false;
            };
            let Some(chain) = chains
                .iter()
                .find(|c| c.id == id && c.points.len() <= max_chain_size)
            else {
                return false;
            };
            let colors: Vec<Color> = neighboring_chains(board, chain, &chains)
                .iter()
                .map(|c| c.color)
                .unique()
                .collect();
            colors.contains(&Color::Black) && colors.contains(&Color::White)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::Opponent;

    fn analyzed(simple: &[&str]) -> Board {
        let mut board = Board::from_simple(simple);
        update_chains(&mut board, true);
        board
    }

    #[test]
    fn test_single_point_eye() {
        // Black surrounds (0, 0).
        let board = analyzed(&[".X...", "XX...", ".....", ".....", "....."]);
        let eyes = find_potential_eyes(&board, Color::Black);
        assert_eq!(eyes.len(), 1);
        assert_eq!(eyes[0].points, vec![(0, 0)]);
        assert_eq!(eyes[0].neighbor_chain_ids.len(), 1);
    }

    #[test]
    fn test_open_region_is_not_an_eye() {
        // The big empty area also borders nothing but Black, yet exceeds the
        // size cap, so only the corner point qualifies.
        let board = analyzed(&[".X...", "XX...", ".....", ".....", "....."]);
        let eyes = find_potential_eyes(&board, Color::Black);
        assert!(eyes.iter().all(|eye| eye.points.len() == 1));
    }

    #[test]
    fn test_mixed_borders_disqualify() {
        // (1, 1) touches both colors, so it is nobody's eye.
        let board = analyzed(&[".XO..", "X.O..", "OO...", ".....", "....."]);
        let black = find_potential_eyes(&board, Color::Black);
        assert!(black.iter().all(|eye| !eye.points.contains(&(1, 1))));
        let white = find_potential_eyes(&board, Color::White);
        assert!(white.iter().all(|eye| !eye.points.contains(&(1, 1))));
    }

    #[test]
    fn test_two_eyes_make_a_living_chain() {
        // One Black chain enclosing eyes at (0, 0) and (0, 2).
        let board = analyzed(&[".X.X.", "XXXX.", ".....", ".....", "....."]);
        let eyes = eyes_by_chain(&board, Color::Black);
        assert_eq!(eyes.len(), 1);
        let groups = eyes.values().next().unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(living_chain_ids(&board, Color::Black).len(), 1);
    }

    #[test]
    fn test_split_border_confirmed_by_encirclement() {
        // Two Black chains share the border of (0, 0): the column wall and
        // the lone corner stone. Neither encircles it alone, so the point is
        // not credited to either chain.
        let board = analyzed(&[".X...", "X.X..", "XXX..", ".....", "....."]);
        let pocket_controllers: Vec<_> = eyes_by_chain(&board, Color::Black)
            .into_iter()
            .filter(|(_, groups)| groups.iter().any(|g| g.contains(&(0, 0))))
            .collect();
        assert!(pocket_controllers.is_empty());
    }

    #[test]
    fn test_encircling_chain_keeps_eye_despite_second_border() {
        // A Black rim encloses a ring-shaped cavity that also borders the
        // lone Black stone in its middle. Blanking the middle stone shows
        // the rim encircles the cavity on its own, so the rim keeps the eye.
        let board = analyzed(&["XXXXX", "X...X", "X.X.X", "X...X", "XXXXX"]);
        let eyes = eyes_by_chain(&board, Color::Black);
        let rim_groups = eyes.get(&(0, 0)).expect("rim controls the cavity");
        assert_eq!(rim_groups.len(), 1);
        assert_eq!(rim_groups[0].len(), 8);
        // The middle stone cannot encircle anything.
        assert!(!eyes.contains_key(&(2, 2)));
    }

    #[test]
    fn test_disputed_territory_excludes_settled_regions() {
        // Black alive on the left, White alive on the right, nothing to
        // fight over.
        let board = [".X.X.", "XXXXX", "XXXXX", "OOOOO", ".O.O."];
        let state = BoardState::from_simple(&board, Opponent::Illuminati, Color::Black);
        let disputed = find_disputed_territory(&state, Color::Black, true);
        assert!(disputed.is_empty());
    }

    #[test]
    fn test_disputed_territory_keeps_attackable_interior() {
        // The White corner group's only liberty is its own one-point pocket
        // and it leans on Black: the pocket stays attackable.
        let board = [".OX..", "OOX..", "XX...", ".....", "....."];
        let state = BoardState::from_simple(&board, Opponent::Illuminati, Color::Black);
        let disputed = find_disputed_territory(&state, Color::Black, true);
        assert!(disputed.contains(&(0, 0)));
        assert!(disputed.contains(&(3, 3)));
    }

    #[test]
    fn test_disputed_moves_require_both_colors() {
        let board = analyzed(&["X.O..", ".....", ".....", ".....", "....."]);
        let available: Vec<Coord> = board
            .coords()
            .filter(|&(x, y)| board.get(x, y).is_some_and(|p| p.color == Color::Empty))
            .collect();
        // The whole empty region touches both colors.
        let contested = disputed_territory_moves(&board, &available, usize::MAX);
        assert_eq!(contested.len(), available.len());
        // But no single-point empty chain exists.
        assert!(disputed_territory_moves(&board, &available, 1).is_empty());
    }
}
