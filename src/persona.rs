//! Opponent personas: fixed priority orderings over the move generators.
//!
//! Each persona short-circuits on the first generator that produces a move,
//! with probability gates driven by a single random draw per decision.
//! The Illuminati ordering doubles as the shared subroutine the weaker
//! personas defer to on their low-probability branches.

use log::debug;

use crate::board::Coord;
use crate::movegen::MoveOptions;

/// The closed set of computer opponents.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Opponent {
    NoAi,
    Netburners,
    SlumSnakes,
    TheBlackHand,
    Tetrads,
    Daedalus,
    Illuminati,
}

impl Opponent {
    /// Resolve a display name. Unknown names (including the redacted
    /// "????????????") resolve to Illuminati.
    pub fn from_name(name: &str) -> Opponent {
        match name {
            "No AI" => Opponent::NoAi,
            "Netburners" => Opponent::Netburners,
            "Slum Snakes" => Opponent::SlumSnakes,
            "The Black Hand" => Opponent::TheBlackHand,
            "Tetrads" => Opponent::Tetrads,
            "Daedalus" => Opponent::Daedalus,
            _ => Opponent::Illuminati,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Opponent::NoAi => "No AI",
            Opponent::Netburners => "Netburners",
            Opponent::SlumSnakes => "Slum Snakes",
            Opponent::TheBlackHand => "The Black Hand",
            Opponent::Tetrads => "Tetrads",
            Opponent::Daedalus => "Daedalus",
            Opponent::Illuminati => "Illuminati",
        }
    }

    /// Whether this decision applies the quality filters, given one coin
    /// flip. Netburners never does; Slum Snakes and The Black Hand only
    /// sometimes.
    pub fn smart(self, roll: f64) -> bool {
        match self {
            Opponent::Netburners => false,
            Opponent::SlumSnakes => roll <= 0.3,
            Opponent::TheBlackHand => roll <= 0.8,
            _ => true,
        }
    }
}

/// Ask the persona for its priority move. `None` means no strong preference;
/// the orchestrator then falls back to the reasonable-move pool.
pub fn priority_move(
    options: &mut MoveOptions<'_>,
    opponent: Opponent,
    roll: f64,
) -> Option<Coord> {
    let choice = match opponent {
        Opponent::NoAi => None,
        Opponent::Netburners => netburners_move(options, roll),
        Opponent::SlumSnakes => slum_snakes_move(options, roll),
        Opponent::TheBlackHand => black_hand_move(options, roll),
        Opponent::Tetrads => tetrads_move(options, roll),
        Opponent::Daedalus => daedalus_move(options, roll),
        Opponent::Illuminati => illuminati_move(options, roll),
    };
    debug!("{} priority move: {:?}", opponent.name(), choice);
    choice
}

fn illuminati_move(options: &mut MoveOptions<'_>, roll: f64) -> Option<Coord> {
    if let Some(mv) = options.capture() {
        return Some(mv.point);
    }
    if let Some(mv) = options.defend_capture() {
        return Some(mv.point);
    }
    if let Some(mv) = options.eye_move() {
        return Some(mv.point);
    }
    if let Some(mv) = options.surround() {
        if mv.new_liberty_count.unwrap_or(9) <= 1 {
            return Some(mv.point);
        }
    }
    if let Some(mv) = options.eye_block() {
        return Some(mv.point);
    }
    if let Some(mv) = options.corner() {
        return Some(mv.point);
    }
    let has_shape_moves = options.has_shape_moves();
    if roll > 0.25 || !has_shape_moves {
        if let Some(mv) = options.pattern() {
            return Some(mv.point);
        }
    }
    if roll > 0.4 {
        if let Some(mv) = options.jump() {
            return Some(mv.point);
        }
    }
    if roll < 0.6 {
        if let Some(mv) = options.surround() {
            if mv.new_liberty_count.unwrap_or(9) <= 2 {
                return Some(mv.point);
            }
        }
    }
    None
}

fn daedalus_move(options: &mut MoveOptions<'_>, roll: f64) -> Option<Coord> {
    if roll < 0.9 {
        illuminati_move(options, roll)
    } else {
        None
    }
}

fn tetrads_move(options: &mut MoveOptions<'_>, roll: f64) -> Option<Coord> {
    if let Some(mv) = options.capture() {
        return Some(mv.point);
    }
    if let Some(mv) = options.defend_capture() {
        return Some(mv.point);
    }
    if let Some(mv) = options.pattern() {
        return Some(mv.point);
    }
    if let Some(mv) = options.surround() {
        if mv.new_liberty_count.unwrap_or(9) <= 1 {
            return Some(mv.point);
        }
    }
    if roll < 0.4 {
        return illuminati_move(options, roll);
    }
    None
}

fn black_hand_move(options: &mut MoveOptions<'_>, roll: f64) -> Option<Coord> {
    if let Some(mv) = options.capture() {
        return Some(mv.point);
    }
    if let Some(mv) = options.surround() {
        if mv.new_liberty_count.unwrap_or(9) <= 1 {
            return Some(mv.point);
        }
    }
    if let Some(mv) = options.defend_capture() {
        return Some(mv.point);
    }
    if let Some(mv) = options.surround() {
        if mv.new_liberty_count.unwrap_or(9) <= 2 {
            return Some(mv.point);
        }
    }
    if roll < 0.3 {
        return illuminati_move(options, roll);
    }
    if roll < 0.75 {
        if let Some(mv) = options.surround() {
            return Some(mv.point);
        }
    }
    if roll < 0.8 {
        if let Some(mv) = options.random() {
            return Some(mv.point);
        }
    }
    None
}

fn slum_snakes_move(options: &mut MoveOptions<'_>, roll: f64) -> Option<Coord> {
    if let Some(mv) = options.defend_capture() {
        return Some(mv.point);
    }
    if roll < 0.2 {
        return illuminati_move(options, roll);
    }
    if roll < 0.6 {
        if let Some(mv) = options.growth() {
            return Some(mv.point);
        }
    }
    if roll < 0.65 {
        if let Some(mv) = options.random() {
            return Some(mv.point);
        }
    }
    None
}

fn netburners_move(options: &mut MoveOptions<'_>, roll: f64) -> Option<Coord> {
    if roll < 0.2 {
        return illuminati_move(options, roll);
    }
    if roll < 0.4 {
        if let Some(mv) = options.expansion() {
            return Some(mv.point);
        }
    }
    if roll < 0.6 {
        if let Some(mv) = options.growth() {
            return Some(mv.point);
        }
    }
    if roll < 0.75 {
        if let Some(mv) = options.random() {
            return Some(mv.point);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;
    use crate::hooks::{NoPacer, SequenceRng};
    use crate::rules::BoardState;

    fn options_on<'a>(
        state: &'a BoardState,
        rng: &'a mut SequenceRng,
        pacer: &'a mut NoPacer,
    ) -> MoveOptions<'a> {
        let available: Vec<_> = state
            .board
            .coords()
            .filter(|&(x, y)| {
                state
                    .board
                    .get(x, y)
                    .is_some_and(|p| p.color == Color::Empty)
            })
            .collect();
        MoveOptions::new(state, Color::Black, true, available, rng, pacer)
    }

    #[test]
    fn test_name_round_trip() {
        for opponent in [
            Opponent::NoAi,
            Opponent::Netburners,
            Opponent::SlumSnakes,
            Opponent::TheBlackHand,
            Opponent::Tetrads,
            Opponent::Daedalus,
            Opponent::Illuminati,
        ] {
            assert_eq!(Opponent::from_name(opponent.name()), opponent);
        }
    }

    #[test]
    fn test_unknown_names_become_illuminati() {
        assert_eq!(Opponent::from_name("????????????"), Opponent::Illuminati);
        assert_eq!(Opponent::from_name("anyone else"), Opponent::Illuminati);
    }

    #[test]
    fn test_smart_flags() {
        assert!(!Opponent::Netburners.smart(0.0));
        assert!(Opponent::SlumSnakes.smart(0.3));
        assert!(!Opponent::SlumSnakes.smart(0.31));
        assert!(Opponent::TheBlackHand.smart(0.8));
        assert!(!Opponent::TheBlackHand.smart(0.81));
        assert!(Opponent::Illuminati.smart(0.99));
        assert!(Opponent::Daedalus.smart(0.99));
    }

    #[test]
    fn test_illuminati_prefers_capture() {
        // White in atari at (1, 1); every persona that checks captures
        // first must take it.
        let board = [".X...", "XO...", ".X...", ".....", "....."];
        let state = BoardState::from_simple(&board, Opponent::Illuminati, Color::Black);
        let mut rng = SequenceRng::constant(0.5);
        let mut pacer = NoPacer;
        let mut options = options_on(&state, &mut rng, &mut pacer);
        assert_eq!(
            priority_move(&mut options, Opponent::Illuminati, 0.5),
            Some((1, 2))
        );
    }

    #[test]
    fn test_daedalus_defers_or_abstains() {
        let board = [".....", ".....", ".....", ".....", "....."];
        let state = BoardState::from_simple(&board, Opponent::Daedalus, Color::Black);
        let mut rng = SequenceRng::constant(0.0);
        let mut pacer = NoPacer;
        let mut options = options_on(&state, &mut rng, &mut pacer);
        // Below 0.9 Daedalus plays like Illuminati, which claims a corner.
        assert_eq!(
            priority_move(&mut options, Opponent::Daedalus, 0.0),
            Some((2, 2))
        );
        let mut rng = SequenceRng::constant(0.0);
        let mut pacer = NoPacer;
        let mut options = options_on(&state, &mut rng, &mut pacer);
        assert_eq!(priority_move(&mut options, Opponent::Daedalus, 0.95), None);
    }

    #[test]
    fn test_no_ai_has_no_preference() {
        let board = [".....", ".....", ".....", ".....", "....."];
        let state = BoardState::from_simple(&board, Opponent::NoAi, Color::Black);
        let mut rng = SequenceRng::constant(0.0);
        let mut pacer = NoPacer;
        let mut options = options_on(&state, &mut rng, &mut pacer);
        assert_eq!(priority_move(&mut options, Opponent::NoAi, 0.0), None);
    }

    #[test]
    fn test_netburners_expansion_branch() {
        let board = [".....", ".....", ".....", ".....", "....."];
        let state = BoardState::from_simple(&board, Opponent::Netburners, Color::Black);
        let mut rng = SequenceRng::constant(0.0);
        let mut pacer = NoPacer;
        let mut options = options_on(&state, &mut rng, &mut pacer);
        // roll = 0.3: skip the Illuminati branch, take expansion.
        let choice = priority_move(&mut options, Opponent::Netburners, 0.3);
        let (x, y) = choice.expect("expansion move on an open board");
        assert_eq!(
            state
                .board
                .neighbors(x, y)
                .filter(|p| p.color == Color::Empty)
                .count(),
            4
        );
    }
}
