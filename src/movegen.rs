//! Candidate-move generators and the per-decision options table.
//!
//! Every generator reads the analyzed board plus the disputed-territory
//! filter (`available`) and returns at most one [`Move`]. Generators are
//! pure apart from RNG draws; hypothetical placements run on evaluation
//! copies through [`evaluate_move_result`], never on the input board.
//!
//! [`MoveOptions`] memoizes each generator per decision, since personas probe
//! the same slots repeatedly and some generators are expensive.

use std::collections::HashSet;

use crate::board::{Board, Color, Coord};
use crate::chains::{collect_chains, effective_liberties_of_move, evaluate_move_result};
use crate::eyes::{disputed_territory_moves, eyes_by_chain};
use crate::hooks::{MoveRng, Pacer};
use crate::patterns::pattern_move;
use crate::rules::BoardState;

/// A candidate move with the liberty bookkeeping generators use to
/// communicate strength.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Move {
    pub point: Coord,
    pub old_liberty_count: Option<i32>,
    pub new_liberty_count: Option<i32>,
    pub creates_life: bool,
}

impl Move {
    fn at(point: Coord) -> Self {
        Move {
            point,
            old_liberty_count: None,
            new_liberty_count: None,
            creates_life: false,
        }
    }
}

/// Uniform index draw, mapping one `random()` call onto `0..len`.
pub(crate) fn random_index(rng: &mut dyn MoveRng, len: usize) -> usize {
    ((rng.random() * len as f64) as usize).min(len.saturating_sub(1))
}

/// Open-area candidates: available points whose four orthogonal neighbors all
/// exist and are empty. Once the board has no such points left, falls back to
/// single-point disputed territory so the endgame still fills contested dame.
fn expansion_candidates(board: &Board, available: &[Coord]) -> Vec<Coord> {
    let open: Vec<Coord> = available
        .iter()
        .copied()
        .filter(|&(x, y)| {
            board
                .neighbors(x, y)
                .filter(|p| p.color == Color::Empty)
                .count()
                == 4
        })
        .collect();
    if !open.is_empty() {
        return open;
    }
    disputed_territory_moves(board, available, 1)
}

/// Uniform pick among the open-area candidates.
pub fn expansion_move(
    board: &Board,
    available: &[Coord],
    rng: &mut dyn MoveRng,
) -> Option<Move> {
    let candidates = expansion_candidates(board, available);
    if candidates.is_empty() {
        return None;
    }
    Some(Move::at(candidates[random_index(rng, candidates.len())]))
}

/// Expansion candidates that land a one-space jump from a friendly stone.
pub fn jump_move(
    board: &Board,
    player: Color,
    available: &[Coord],
    rng: &mut dyn MoveRng,
) -> Option<Move> {
    let candidates: Vec<Coord> = expansion_candidates(board, available)
        .into_iter()
        .filter(|&(x, y)| {
            [
                Some((x, y + 2)),
                Some((x + 2, y)),
                y.checked_sub(2).map(|ny| (x, ny)),
                x.checked_sub(2).map(|nx| (nx, y)),
            ]
            .into_iter()
            .flatten()
            .any(|(nx, ny)| board.get(nx, ny).map(|p| p.color) == Some(player))
        })
        .collect();
    if candidates.is_empty() {
        return None;
    }
    Some(Move::at(candidates[random_index(rng, candidates.len())]))
}

/// Liberties of friendly chains where playing keeps the merged chain healthy.
///
/// For each such point the new liberty count is the effective-liberty union
/// after the placement, and the old count is the weakest adjacent friendly
/// chain (99 with no friendly neighbor). Only moves with more than one
/// resulting liberty that do not shrink the weakest neighbor survive.
fn liberty_growth_moves(board: &Board, player: Color, available: &[Coord]) -> Vec<Move> {
    let chains = collect_chains(board);
    let mut moves = Vec::new();
    let mut seen: HashSet<Coord> = HashSet::new();
    for chain in chains.iter().filter(|c| c.color == player) {
        for &(x, y) in &chain.liberties {
            if !available.contains(&(x, y)) || !seen.insert((x, y)) {
                continue;
            }
            let new_count = effective_liberties_of_move(board, x, y, player).len() as i32;
            let old_count = board
                .neighbors(x, y)
                .filter(|p| p.color == player)
                .filter_map(|p| p.liberties.as_ref().map(|libs| libs.len() as i32))
                .min()
                .unwrap_or(99);
            if new_count > 1 && new_count >= old_count {
                moves.push(Move {
                    point: (x, y),
                    old_liberty_count: Some(old_count),
                    new_liberty_count: Some(new_count),
                    creates_life: false,
                });
            }
        }
    }
    moves
}

fn liberty_gain(mv: &Move) -> i32 {
    mv.new_liberty_count.unwrap_or(0) - mv.old_liberty_count.unwrap_or(0)
}

/// Uniform pick among the liberty-growth moves with the largest gain.
pub fn growth_move(
    board: &Board,
    player: Color,
    available: &[Coord],
    rng: &mut dyn MoveRng,
) -> Option<Move> {
    let candidates = liberty_growth_moves(board, player, available);
    let best = candidates.iter().map(liberty_gain).max()?;
    let top: Vec<Move> = candidates
        .into_iter()
        .filter(|mv| liberty_gain(mv) == best)
        .collect();
    Some(top[random_index(rng, top.len())])
}

/// Growth restricted to chains in immediate danger: at most one liberty now,
/// strictly more afterwards.
pub fn defend_move(
    board: &Board,
    player: Color,
    available: &[Coord],
    rng: &mut dyn MoveRng,
) -> Option<Move> {
    let candidates: Vec<Move> = liberty_growth_moves(board, player, available)
        .into_iter()
        .filter(|mv| {
            mv.old_liberty_count.unwrap_or(99) <= 1
                && mv.new_liberty_count > mv.old_liberty_count
        })
        .collect();
    let best = candidates.iter().map(liberty_gain).max()?;
    if best < 1 {
        return None;
    }
    let top: Vec<Move> = candidates
        .into_iter()
        .filter(|mv| liberty_gain(mv) == best)
        .collect();
    Some(top[random_index(rng, top.len())])
}

/// Number of orthogonally-connected components in a coordinate set.
fn connected_group_count(points: &[Coord]) -> usize {
    let mut unvisited: HashSet<Coord> = points.iter().copied().collect();
    let mut groups = 0;
    while let Some(&start) = unvisited.iter().next() {
        groups += 1;
        let mut stack = vec![start];
        unvisited.remove(&start);
        while let Some((x, y)) = stack.pop() {
            let neighbors = [
                Some((x, y + 1)),
                Some((x + 1, y)),
                y.checked_sub(1).map(|ny| (x, ny)),
                x.checked_sub(1).map(|nx| (nx, y)),
            ];
            for (nx, ny) in neighbors.into_iter().flatten() {
                if unvisited.remove(&(nx, ny)) {
                    stack.push((nx, ny));
                }
            }
        }
    }
    groups
}

/// Pressure an enemy chain: capture when it is in atari, atari it when that
/// is safe (or the persona is not playing smart), otherwise tighten the net.
///
/// Moves record the weakest adjacent enemy chain's liberty count and that
/// count minus one; the player's own effective liberties only gate the
/// classification. Moves that lower the player's liberties to two or fewer
/// without threatening a weak chain are discarded outright.
pub fn surround_move(
    board: &Board,
    player: Color,
    available: &[Coord],
    smart: bool,
) -> Option<Move> {
    let opponent = player.opponent();
    let chains = collect_chains(board);
    if available.is_empty() {
        return None;
    }

    let mut liberties: Vec<Coord> = Vec::new();
    for chain in chains.iter().filter(|c| c.color == opponent) {
        for &lib in &chain.liberties {
            if available.contains(&lib) && !liberties.contains(&lib) {
                liberties.push(lib);
            }
        }
    }

    let mut captures = Vec::new();
    let mut ataris = Vec::new();
    let mut surrounds = Vec::new();

    for (x, y) in liberties {
        let own_liberty_count = effective_liberties_of_move(board, x, y, player).len() as i32;

        let weakest = board
            .neighbors(x, y)
            .filter(|p| p.color == opponent)
            .filter_map(|p| p.chain)
            .filter_map(|id| chains.iter().find(|c| c.id == id))
            .min_by_key(|c| c.liberties.len());
        let Some(weakest) = weakest else { continue };
        let enemy_liberty_count = weakest.liberties.len() as i32;

        if own_liberty_count <= 2 && enemy_liberty_count > 2 {
            continue;
        }

        let mv = Move {
            point: (x, y),
            old_liberty_count: Some(enemy_liberty_count),
            new_liberty_count: Some(enemy_liberty_count - 1),
            creates_life: false,
        };

        if enemy_liberty_count <= 1 {
            captures.push(mv);
        } else if enemy_liberty_count == 2
            && (own_liberty_count >= 2
                || (connected_group_count(&weakest.liberties) == 1 && weakest.points.len() > 3)
                || !smart)
        {
            ataris.push(mv);
        } else if own_liberty_count >= 2 {
            surrounds.push(mv);
        }
    }

    captures
        .into_iter()
        .chain(ataris)
        .chain(surrounds)
        .next()
}

/// Liberties of endangered friendly chains that could still grow into eyes.
///
/// A candidate must keep at least two supportive neighbors (friendly or
/// off-board) and one empty neighbor, and the hypothetical placement must
/// either create a new living group or add an eye-holding chain without
/// losing a living group. Life-creating moves sort first.
fn eye_creation_moves(
    board: &Board,
    player: Color,
    available: &[Coord],
    max_liberties: usize,
) -> Vec<Move> {
    let current_eyes = eyes_by_chain(board, player);
    let living: HashSet<Coord> = current_eyes
        .iter()
        .filter(|(_, groups)| groups.len() >= 2)
        .map(|(id, _)| *id)
        .collect();
    let current_living_count = living.len();
    let current_eye_count = current_eyes.len();

    let chains = collect_chains(board);
    let mut candidates: Vec<Coord> = Vec::new();
    for chain in chains.iter().filter(|c| {
        c.color == player
            && c.points.len() > 1
            && c.liberties.len() <= max_liberties
            && !living.contains(&c.id)
    }) {
        for &(x, y) in &chain.liberties {
            if !available.contains(&(x, y)) || candidates.contains(&(x, y)) {
                continue;
            }
            let neighborhood = [
                board.get(x, y + 1),
                board.get(x + 1, y),
                y.checked_sub(1).and_then(|ny| board.get(x, ny)),
                x.checked_sub(1).and_then(|nx| board.get(nx, y)),
            ];
            let supportive = neighborhood
                .iter()
                .filter(|cell| cell.is_none_or(|p| p.color == player))
                .count();
            let has_empty = neighborhood
                .iter()
                .any(|cell| cell.is_some_and(|p| p.color == Color::Empty));
            if supportive >= 2 && has_empty {
                candidates.push((x, y));
            }
        }
    }

    let mut moves = Vec::new();
    for (x, y) in candidates {
        let evaluation = evaluate_move_result(board, x, y, player);
        let new_eyes = eyes_by_chain(&evaluation, player);
        let new_living_count = new_eyes.values().filter(|groups| groups.len() >= 2).count();
        let new_eye_count = new_eyes.len();
        if new_living_count > current_living_count
            || (new_living_count == current_living_count && new_eye_count > current_eye_count)
        {
            moves.push(Move {
                point: (x, y),
                old_liberty_count: None,
                new_liberty_count: None,
                creates_life: new_living_count > current_living_count,
            });
        }
    }
    moves.sort_by_key(|mv| !mv.creates_life);
    moves
}

/// Best eye-creating move for the player, life-makers first.
pub fn eye_move(board: &Board, player: Color, available: &[Coord]) -> Option<Move> {
    eye_creation_moves(board, player, available, 99).into_iter().next()
}

/// Deny the opponent an eye, but only when the denial is forced: a unique
/// life-creating move, or (failing that) a unique eye-creating one.
pub fn eye_block_move(board: &Board, player: Color, available: &[Coord]) -> Option<Move> {
    let opponent_moves = eye_creation_moves(board, player.opponent(), available, 5);
    let (two_eye, one_eye): (Vec<Move>, Vec<Move>) = opponent_moves
        .into_iter()
        .partition(|mv| mv.creates_life);
    if two_eye.len() == 1 {
        return two_eye.into_iter().next();
    }
    if two_eye.is_empty() && one_eye.len() == 1 {
        return one_eye.into_iter().next();
    }
    None
}

/// Claim a wholly unclaimed 3x3 corner, checking the four corners in a fixed
/// order and returning the corner's inner point.
///
/// A corner qualifies with at least seven playable cells and no stones. The
/// generator reads only the board; it ignores the available-space filter.
pub fn corner_move(board: &Board) -> Option<Move> {
    let edge = board.size().saturating_sub(1);
    let near = edge.saturating_sub(2);
    let windows = [
        ((near, near), (edge, edge), (near, near)),
        ((0, near), (2, edge), (2, near)),
        ((0, 0), (2, 2), (2, 2)),
        ((near, 0), (edge, 2), (near, 2)),
    ];
    for ((x1, y1), (x2, y2), inner) in windows {
        if corner_is_open(board, x1, y1, x2, y2) {
            return Some(Move::at(inner));
        }
    }
    None
}

fn corner_is_open(board: &Board, x1: usize, y1: usize, x2: usize, y2: usize) -> bool {
    let mut playable = 0;
    for x in x1..=x2 {
        for y in y1..=y2 {
            match board.get(x, y) {
                Some(point) if point.color != Color::Empty => return false,
                Some(_) => playable += 1,
                None => {}
            }
        }
    }
    playable >= 7
}

/// Uniform pick over the available spaces, gated on the board still having
/// contested territory so a pointless extension is never preferred to a pass.
pub fn random_move(board: &Board, available: &[Coord], rng: &mut dyn MoveRng) -> Option<Move> {
    if available.is_empty() {
        return None;
    }
    if disputed_territory_moves(board, available, usize::MAX).is_empty() {
        return None;
    }
    Some(Move::at(available[random_index(rng, available.len())]))
}

/// Lazily-evaluated, memoized generator table for one decision.
///
/// Each slot runs its generator at most once; personas and the orchestrator
/// may probe slots in any order and any number of times. Every getter
/// invocation pauses through the host's [`Pacer`] first.
pub struct MoveOptions<'a> {
    state: &'a BoardState,
    player: Color,
    smart: bool,
    available: Vec<Coord>,
    rng: &'a mut dyn MoveRng,
    pacer: &'a mut dyn Pacer,
    expansion: Option<Option<Move>>,
    jump: Option<Option<Move>>,
    growth: Option<Option<Move>>,
    defend: Option<Option<Move>>,
    surround: Option<Option<Move>>,
    eye_move: Option<Option<Move>>,
    eye_block: Option<Option<Move>>,
    corner: Option<Option<Move>>,
    random: Option<Option<Move>>,
    pattern: Option<Option<Move>>,
}

impl<'a> MoveOptions<'a> {
    pub fn new(
        state: &'a BoardState,
        player: Color,
        smart: bool,
        available: Vec<Coord>,
        rng: &'a mut dyn MoveRng,
        pacer: &'a mut dyn Pacer,
    ) -> Self {
        MoveOptions {
            state,
            player,
            smart,
            available,
            rng,
            pacer,
            expansion: None,
            jump: None,
            growth: None,
            defend: None,
            surround: None,
            eye_move: None,
            eye_block: None,
            corner: None,
            random: None,
            pattern: None,
        }
    }

    pub fn available_spaces(&self) -> &[Coord] {
        &self.available
    }

    pub fn expansion(&mut self) -> Option<Move> {
        self.pacer.pause();
        if self.expansion.is_none() {
            self.expansion = Some(expansion_move(
                &self.state.board,
                &self.available,
                &mut *self.rng,
            ));
        }
        self.expansion.flatten()
    }

    pub fn jump(&mut self) -> Option<Move> {
        self.pacer.pause();
        if self.jump.is_none() {
            self.jump = Some(jump_move(
                &self.state.board,
                self.player,
                &self.available,
                &mut *self.rng,
            ));
        }
        self.jump.flatten()
    }

    pub fn growth(&mut self) -> Option<Move> {
        self.pacer.pause();
        if self.growth.is_none() {
            self.growth = Some(growth_move(
                &self.state.board,
                self.player,
                &self.available,
                &mut *self.rng,
            ));
        }
        self.growth.flatten()
    }

    pub fn defend(&mut self) -> Option<Move> {
        self.pacer.pause();
        if self.defend.is_none() {
            self.defend = Some(defend_move(
                &self.state.board,
                self.player,
                &self.available,
                &mut *self.rng,
            ));
        }
        self.defend.flatten()
    }

    pub fn surround(&mut self) -> Option<Move> {
        self.pacer.pause();
        if self.surround.is_none() {
            self.surround = Some(surround_move(
                &self.state.board,
                self.player,
                &self.available,
                self.smart,
            ));
        }
        self.surround.flatten()
    }

    pub fn eye_move(&mut self) -> Option<Move> {
        self.pacer.pause();
        if self.eye_move.is_none() {
            self.eye_move = Some(eye_move(&self.state.board, self.player, &self.available));
        }
        self.eye_move.flatten()
    }

    pub fn eye_block(&mut self) -> Option<Move> {
        self.pacer.pause();
        if self.eye_block.is_none() {
            self.eye_block = Some(eye_block_move(
                &self.state.board,
                self.player,
                &self.available,
            ));
        }
        self.eye_block.flatten()
    }

    pub fn corner(&mut self) -> Option<Move> {
        self.pacer.pause();
        if self.corner.is_none() {
            self.corner = Some(corner_move(&self.state.board));
        }
        self.corner.flatten()
    }

    pub fn random(&mut self) -> Option<Move> {
        self.pacer.pause();
        if self.random.is_none() {
            self.random = Some(random_move(&self.state.board, &self.available, &mut *self.rng));
        }
        self.random.flatten()
    }

    pub fn pattern(&mut self) -> Option<Move> {
        self.pacer.pause();
        if self.pattern.is_none() {
            self.pattern = Some(pattern_move(
                &self.state.board,
                self.player,
                &self.available,
                self.smart,
                &mut *self.rng,
                &mut *self.pacer,
            ));
        }
        self.pattern.flatten()
    }

    /// The surround result when it finishes a chain off entirely.
    pub fn capture(&mut self) -> Option<Move> {
        let surround = self.surround()?;
        (surround.new_liberty_count == Some(0)).then_some(surround)
    }

    /// The defend result when it rescues a chain out of atari.
    pub fn defend_capture(&mut self) -> Option<Move> {
        let defend = self.defend()?;
        (defend.old_liberty_count == Some(1) && defend.new_liberty_count > defend.old_liberty_count)
            .then_some(defend)
    }

    /// Whether any of the shape-driven generators produced a move; the
    /// Illuminati persona reaches for patterns unconditionally when not.
    pub fn has_shape_moves(&mut self) -> bool {
        self.eye_move().is_some()
            || self.eye_block().is_some()
            || self.growth().is_some()
            || self.surround().is_some()
            || self.expansion().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::update_chains;
    use crate::hooks::SequenceRng;

    fn analyzed(simple: &[&str]) -> Board {
        let mut board = Board::from_simple(simple);
        update_chains(&mut board, true);
        board
    }

    fn empties(board: &Board) -> Vec<Coord> {
        board
            .coords()
            .filter(|&(x, y)| board.get(x, y).is_some_and(|p| p.color == Color::Empty))
            .collect()
    }

    #[test]
    fn test_expansion_prefers_open_space() {
        let board = analyzed(&["X....", ".....", ".....", ".....", "....."]);
        let available = empties(&board);
        let mut rng = SequenceRng::constant(0.0);
        let mv = expansion_move(&board, &available, &mut rng).unwrap();
        // Every candidate has four empty neighbors, which rules out all
        // edge points and anything next to the stone.
        let (x, y) = mv.point;
        assert_eq!(
            board
                .neighbors(x, y)
                .filter(|p| p.color == Color::Empty)
                .count(),
            4
        );
    }

    #[test]
    fn test_jump_lands_two_from_friend() {
        let board = analyzed(&["....", "X...", "....", "...."]);
        let available = empties(&board);
        let mut rng = SequenceRng::constant(0.0);
        let mv = jump_move(&board, Color::Black, &available, &mut rng)
            .expect("(1, 2) jumps from the stone at (1, 0)");
        let (x, y) = mv.point;
        let reaches = [(x, y + 2), (x + 2, y)]
            .into_iter()
            .chain(y.checked_sub(2).map(|ny| (x, ny)))
            .chain(x.checked_sub(2).map(|nx| (nx, y)))
            .any(|(nx, ny)| board.get(nx, ny).map(|p| p.color) == Some(Color::Black));
        assert!(reaches);
    }

    #[test]
    fn test_growth_extends_weak_chain() {
        let board = analyzed(&["XO...", "X....", ".....", ".....", "....."]);
        let available = empties(&board);
        let mut rng = SequenceRng::constant(0.0);
        let mv = growth_move(&board, Color::Black, &available, &mut rng).unwrap();
        assert!(mv.new_liberty_count.unwrap() > 1);
        assert!(mv.new_liberty_count >= mv.old_liberty_count);
    }

    #[test]
    fn test_defend_rescues_atari() {
        // Black (0, 0) has one liberty left at (0, 1); extending there
        // climbs back to two.
        let board = analyzed(&["X....", "O....", ".....", ".....", "....."]);
        let available = empties(&board);
        let mut rng = SequenceRng::constant(0.0);
        let mv = defend_move(&board, Color::Black, &available, &mut rng).unwrap();
        assert_eq!(mv.point, (0, 1));
        assert_eq!(mv.old_liberty_count, Some(1));
        assert!(mv.new_liberty_count.unwrap() > 1);
    }

    #[test]
    fn test_defend_none_when_safe() {
        let board = analyzed(&["X....", ".....", ".....", ".....", "....."]);
        let available = empties(&board);
        let mut rng = SequenceRng::constant(0.0);
        assert!(defend_move(&board, Color::Black, &available, &mut rng).is_none());
    }

    #[test]
    fn test_surround_captures_atari_chain() {
        // White at (1, 1) has its last liberty at (1, 2).
        let board = analyzed(&[".X...", "XO...", ".X...", ".....", "....."]);
        let available = empties(&board);
        let mv = surround_move(&board, Color::Black, &available, true).unwrap();
        assert_eq!(mv.point, (1, 2));
        assert_eq!(mv.new_liberty_count, Some(0));
    }

    #[test]
    fn test_surround_discards_self_weakening() {
        // The White stone keeps three liberties; crawling against it into
        // the corner would leave Black with two or fewer of its own.
        let board = analyzed(&[".....", "O....", ".....", ".....", "....."]);
        let available = vec![(0, 0)];
        let mv = surround_move(&board, Color::Black, &available, true);
        assert!(mv.is_none());
    }

    #[test]
    fn test_capture_derivation() {
        let board = [".X...", "XO...", ".X...", ".....", "....."];
        let state = BoardState::from_simple(&board, crate::persona::Opponent::Illuminati, Color::Black);
        let available = empties(&state.board);
        let mut rng = SequenceRng::constant(0.0);
        let mut pacer = crate::hooks::NoPacer;
        let mut options = MoveOptions::new(
            &state,
            Color::Black,
            true,
            available,
            &mut rng,
            &mut pacer,
        );
        let capture = options.capture().unwrap();
        assert_eq!(capture.point, (1, 2));
        assert_eq!(capture.new_liberty_count, Some(0));
    }

    #[test]
    fn test_eye_move_completes_second_eye() {
        // The Black wall owns one finished eye at (0, 0); playing (0, 3)
        // walls off a second eye at (0, 2) and makes the chain alive.
        let board = analyzed(&[".X...", "XXXX.", ".....", ".....", "....."]);
        let available = empties(&board);
        let mv = eye_move(&board, Color::Black, &available).unwrap();
        assert_eq!(mv.point, (0, 3));
        assert!(mv.creates_life);
    }

    #[test]
    fn test_corner_on_empty_board() {
        let board = analyzed(&[".....", ".....", ".....", ".....", "....."]);
        let mv = corner_move(&board).unwrap();
        assert_eq!(mv.point, (2, 2));
    }

    #[test]
    fn test_corner_order_and_rejection() {
        // Stone in the upper-right window pushes the choice to the next
        // corner in the fixed order.
        let board = analyzed(&[".....", ".....", ".....", "...X.", "....."]);
        let mv = corner_move(&board).unwrap();
        assert_eq!(mv.point, (2, 2));
        // A full board yields nothing.
        let full = analyzed(&["XXXXX", "XXXXX", "XXXXX", "XXXXX", "XXXXX"]);
        assert!(corner_move(&full).is_none());
    }

    #[test]
    fn test_corner_needs_seven_playable_cells() {
        // A fully offline board has no playable corner cells at all.
        let board = analyzed(&["#####", "#####", "#####", "#####", "#####"]);
        assert!(corner_move(&board).is_none());

        // Three holes drop the first corner window to six playable cells;
        // the scan moves on to the next corner.
        let holed = analyzed(&[".....", ".....", "....#", "...#.", "..#.."]);
        let mv = corner_move(&holed).unwrap();
        assert_eq!(mv.point, (2, 2));
    }

    #[test]
    fn test_random_gated_on_contest() {
        let contested = analyzed(&["X.O..", ".....", ".....", ".....", "....."]);
        let available = empties(&contested);
        let mut rng = SequenceRng::constant(0.5);
        assert!(random_move(&contested, &available, &mut rng).is_some());

        let settled = analyzed(&["X....", ".....", ".....", ".....", "....."]);
        let available = empties(&settled);
        assert!(random_move(&settled, &available, &mut rng).is_none());
    }

    #[test]
    fn test_options_memoize() {
        let board = [".....", ".....", ".....", ".....", "....."];
        let state = BoardState::from_simple(&board, crate::persona::Opponent::Illuminati, Color::Black);
        let available = empties(&state.board);
        let mut rng = SequenceRng::new(vec![0.1, 0.7, 0.3, 0.9]);
        let mut pacer = crate::hooks::NoPacer;
        let mut options = MoveOptions::new(
            &state,
            Color::Black,
            true,
            available,
            &mut rng,
            &mut pacer,
        );
        let first = options.expansion();
        let second = options.expansion();
        assert_eq!(first, second);
    }

    #[test]
    fn test_connected_group_count() {
        assert_eq!(connected_group_count(&[(0, 0), (0, 1), (1, 1)]), 1);
        assert_eq!(connected_group_count(&[(0, 0), (2, 2)]), 2);
        assert_eq!(connected_group_count(&[]), 0);
    }
}
