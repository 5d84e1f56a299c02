//! The decision orchestrator.
//!
//! One public entry point turns a board snapshot into a [`Play`]: pick the
//! smart flag, compute the disputed-territory filter, let the persona probe
//! the lazy generator table, and fall back to a uniformly-chosen reasonable
//! move (or a pass) when the persona has no preference. The host's pacer is
//! awaited on entry and before the result is emitted.

use log::debug;

use crate::board::{Color, Coord};
use crate::eyes::find_disputed_territory;
use crate::hooks::{MoveRng, Pacer};
use crate::movegen::{MoveOptions, random_index};
use crate::persona::{Opponent, priority_move};
use crate::rules::{BoardState, Play, Validity, evaluate_if_move_is_valid};

/// Decide a play for `player` against the given opponent persona.
///
/// Always returns: a move that passes the fast-path adjudicator, a pass, or
/// game-over when the state says the game already ended.
pub fn get_move(
    state: &BoardState,
    player: Color,
    opponent: Opponent,
    rng: &mut dyn MoveRng,
    pacer: &mut dyn Pacer,
) -> Play {
    pacer.pause();
    if state.previous_player.is_none() {
        return Play::GameOver;
    }

    let smart = opponent.smart(rng.random());
    let available = find_disputed_territory(state, player, smart);
    debug!(
        "{} to move vs {}: smart={}, {} disputed points",
        player.to_char(),
        opponent.name(),
        smart,
        available.len()
    );

    let roll = rng.random();
    let mut options = MoveOptions::new(state, player, smart, available, &mut *rng, &mut *pacer);

    if let Some((x, y)) = priority_move(&mut options, opponent, roll) {
        drop(options);
        pacer.pause();
        return Play::Move { x, y };
    }

    // No strong preference: pool the reasonable generators in fixed order,
    // re-check legality, and pick one uniformly.
    let raw = [
        options.growth(),
        options.surround(),
        options.defend(),
        options.expansion(),
        options.pattern(),
        options.eye_move(),
        options.eye_block(),
    ];
    drop(options);
    let candidates: Vec<Coord> = raw
        .into_iter()
        .flatten()
        .map(|mv| mv.point)
        .filter(|&(x, y)| {
            evaluate_if_move_is_valid(state, x, y, player, true) == Validity::Valid
        })
        .collect();
    debug!("fallback pool holds {} candidates", candidates.len());

    pacer.pause();
    if candidates.is_empty() {
        Play::Pass
    } else {
        let (x, y) = candidates[random_index(rng, candidates.len())];
        Play::Move { x, y }
    }
}

/// Convenience wrapper: build a fresh decision state from a SimpleBoard with
/// `player` to move, then decide.
pub fn get_move_from_simple<S: AsRef<str>>(
    columns: &[S],
    opponent: Opponent,
    player: Color,
    rng: &mut dyn MoveRng,
    pacer: &mut dyn Pacer,
) -> Play {
    let state = BoardState::from_simple(columns, opponent, player);
    get_move(&state, player, opponent, rng, pacer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::{FastRng, NoPacer, SequenceRng};

    #[test]
    fn test_game_over_short_circuits() {
        let mut state = BoardState::from_simple(
            &["...", "...", "..."],
            Opponent::Illuminati,
            Color::Black,
        );
        state.previous_player = None;
        let mut rng = FastRng::seeded(1);
        let play = get_move(&state, Color::Black, Opponent::Illuminati, &mut rng, &mut NoPacer);
        assert_eq!(play, Play::GameOver);
    }

    #[test]
    fn test_empty_board_opens_in_corner() {
        let board = [".....", ".....", ".....", ".....", "....."];
        let mut rng = FastRng::seeded(99);
        let play = get_move_from_simple(
            &board,
            Opponent::Illuminati,
            Color::Black,
            &mut rng,
            &mut NoPacer,
        );
        assert_eq!(play, Play::Move { x: 2, y: 2 });
    }

    #[test]
    fn test_returned_moves_are_legal() {
        let board = ["X.O..", ".XO..", "..X..", "...O.", "....."];
        for seed in 0..20 {
            for opponent in [
                Opponent::Netburners,
                Opponent::SlumSnakes,
                Opponent::TheBlackHand,
                Opponent::Tetrads,
                Opponent::Daedalus,
                Opponent::Illuminati,
            ] {
                let state = BoardState::from_simple(&board, opponent, Color::Black);
                let mut rng = FastRng::seeded(seed);
                let play = get_move(&state, Color::Black, opponent, &mut rng, &mut NoPacer);
                match play {
                    Play::Move { x, y } => {
                        assert_eq!(
                            evaluate_if_move_is_valid(&state, x, y, Color::Black, true),
                            Validity::Valid,
                            "illegal move from {} with seed {}",
                            opponent.name(),
                            seed
                        );
                    }
                    Play::Pass => {}
                    Play::GameOver => panic!("unexpected game over"),
                }
            }
        }
    }

    #[test]
    fn test_deterministic_with_fixed_rng() {
        let board = ["X.O..", ".XO..", "..X..", "...O.", "....."];
        let mut first_rng = SequenceRng::constant(0.0);
        let first = get_move_from_simple(
            &board,
            Opponent::Netburners,
            Color::Black,
            &mut first_rng,
            &mut NoPacer,
        );
        let mut second_rng = SequenceRng::constant(0.0);
        let second = get_move_from_simple(
            &board,
            Opponent::Netburners,
            Color::Black,
            &mut second_rng,
            &mut NoPacer,
        );
        assert_eq!(first, second);
    }
}
