//! Tengen: a persona-driven Go move engine for small boards.
//!
//! Given a textual board snapshot, a side to move, and an opponent persona,
//! the engine selects a single legal move or passes. The board analysis
//! (chains, liberties, eyes, disputed territory) feeds a set of candidate
//! generators, and each persona composes those generators with its own
//! priorities.
//!
//! ## Modules
//!
//! - [`board`] - Board data model, neighbors, SimpleBoard text round-trip
//! - [`chains`] - Chain discovery, liberties, capture resolution
//! - [`rules`] - Board state, move legality, superko
//! - [`eyes`] - Eye detection and disputed-territory analysis
//! - [`movegen`] - Candidate-move generators and the memoized options table
//! - [`patterns`] - 3x3 local-shape pattern matching
//! - [`persona`] - Opponent personas and their priority orderings
//! - [`engine`] - The decision orchestrator
//! - [`hooks`] - Injected RNG and pacing capabilities
//!
//! ## Example
//!
//! ```
//! use tengen::board::Color;
//! use tengen::engine::get_move_from_simple;
//! use tengen::hooks::{FastRng, NoPacer};
//! use tengen::persona::Opponent;
//! use tengen::rules::Play;
//!
//! let board = [".....", ".....", ".....", ".....", "....."];
//! let play = get_move_from_simple(
//!     &board,
//!     Opponent::Illuminati,
//!     Color::Black,
//!     &mut FastRng::seeded(7),
//!     &mut NoPacer,
//! );
//! // An empty 5x5 opening always claims a corner point.
//! assert_eq!(play, Play::Move { x: 2, y: 2 });
//! ```

pub mod board;
pub mod chains;
pub mod engine;
pub mod eyes;
pub mod hooks;
pub mod movegen;
pub mod patterns;
pub mod persona;
pub mod rules;
