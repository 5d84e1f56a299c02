//! Game state and move legality.
//!
//! The adjudicator classifies a hypothetical placement rather than erroring:
//! every outcome, including suicide and superko repetition, is a value of
//! [`Validity`]. A fast path answers from the already-analyzed board when it
//! can; the slow path materializes the placement with
//! [`evaluate_move_result`] and compares the result against the recorded
//! board history. Only the history stored in [`BoardState`] participates in
//! superko; the caller owns and extends that history.

use std::fmt;

use crate::board::{Board, Color, Coord};
use crate::chains::{evaluate_move_result, update_chains};
use crate::persona::Opponent;

/// The decision core's output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Play {
    Move { x: usize, y: usize },
    Pass,
    GameOver,
}

/// Classification of a hypothetical move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Validity {
    GameOver,
    NotYourTurn,
    PointBroken,
    PointNotEmpty,
    NoSuicide,
    BoardRepeated,
    Valid,
    Invalid,
}

impl Validity {
    pub fn message(self) -> &'static str {
        match self {
            Validity::GameOver => "the game is over",
            Validity::NotYourTurn => "it is not this player's turn",
            Validity::PointBroken => "the point is offline",
            Validity::PointNotEmpty => "the point is not empty",
            Validity::NoSuicide => "suicide is not allowed",
            Validity::BoardRepeated => "the move would repeat a previous board",
            Validity::Valid => "the move is valid",
            Validity::Invalid => "the move is invalid",
        }
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Snapshot of a game consumed by one decision.
///
/// The board handed in is analyzed once at construction and treated as
/// read-only afterwards; all simulation happens on clones. `previous_player`
/// of `None` means the game has ended. `previous_boards` holds the textual
/// snapshots checked by the superko rule. The cheat counters are opaque to
/// the decision core and only carried through.
#[derive(Clone, Debug)]
pub struct BoardState {
    pub board: Board,
    pub previous_player: Option<Color>,
    pub previous_boards: Vec<String>,
    pub ai: Opponent,
    pub pass_count: u32,
    pub black_cheat_count: u32,
    pub white_cheat_count: u32,
}

impl BoardState {
    /// Take ownership of a board, install chain analysis, and wrap it in a
    /// fresh state with no history.
    pub fn new(mut board: Board, previous_player: Option<Color>, ai: Opponent) -> Self {
        update_chains(&mut board, true);
        BoardState {
            board,
            previous_player,
            previous_boards: Vec::new(),
            ai,
            pass_count: 0,
            black_cheat_count: 0,
            white_cheat_count: 0,
        }
    }

    /// Fresh decision state for a SimpleBoard with `to_move` next to play.
    pub fn from_simple<S: AsRef<str>>(columns: &[S], ai: Opponent, to_move: Color) -> Self {
        Self::new(Board::from_simple(columns), Some(to_move.opponent()), ai)
    }
}

/// True when any recorded prior board shows `player`'s stone at `(x, y)`.
///
/// Snapshots are concatenated columns, so the cell sits at `x * size + y`.
fn move_seen_in_history(state: &BoardState, x: usize, y: usize, player: Color) -> bool {
    let index = x * state.board.size() + y;
    let stone = player.to_char();
    state
        .previous_boards
        .iter()
        .any(|text| text.as_bytes().get(index).copied() == Some(stone as u8))
}

/// Classify the placement of `player`'s stone at `(x, y)`.
///
/// With `allow_fast`, cheap checks on the current analysis settle the common
/// cases, tolerating a one-position superko window (a prior stone of the
/// same color on the target point forces the slow path). The slow path plays
/// the move on a clone and inspects the result.
pub fn evaluate_if_move_is_valid(
    state: &BoardState,
    x: usize,
    y: usize,
    player: Color,
    allow_fast: bool,
) -> Validity {
    if state.previous_player.is_none() {
        return Validity::GameOver;
    }
    if state.previous_player == Some(player) {
        return Validity::NotYourTurn;
    }
    let Some(point) = state.board.get(x, y) else {
        return Validity::PointBroken;
    };
    if point.color != Color::Empty {
        return Validity::PointNotEmpty;
    }

    if allow_fast {
        let played_before = move_seen_in_history(state, x, y, player);
        let has_empty_neighbor = state
            .board
            .neighbors(x, y)
            .any(|p| p.color == Color::Empty);
        if has_empty_neighbor && !played_before {
            return Validity::Valid;
        }

        let friendly_has_room = state.board.neighbors(x, y).any(|p| {
            p.color == player && p.liberties.as_ref().is_some_and(|libs| libs.len() > 1)
        });
        if friendly_has_room && !played_before {
            return Validity::Valid;
        }

        let captures_something = state.board.neighbors(x, y).any(|p| {
            p.color == player.opponent()
                && p.liberties.as_ref().is_some_and(|libs| libs.len() <= 1)
        });
        if captures_something && !played_before {
            return Validity::Valid;
        }

        if !has_empty_neighbor && !captures_something && !friendly_has_room {
            return Validity::NoSuicide;
        }
    }

    let result = evaluate_move_result(&state.board, x, y, player);
    if result.get(x, y).map(|p| p.color) != Some(player) {
        return Validity::NoSuicide;
    }
    let text = result.to_text();
    if state.previous_boards.iter().any(|prior| *prior == text) {
        return Validity::BoardRepeated;
    }
    Validity::Valid
}

/// Every point where `player` may legally play, by the fast-path adjudicator,
/// in column-major order.
pub fn all_valid_moves(state: &BoardState, player: Color) -> Vec<Coord> {
    state
        .board
        .coords()
        .filter(|&(x, y)| evaluate_if_move_is_valid(state, x, y, player, true) == Validity::Valid)
        .collect()
}
