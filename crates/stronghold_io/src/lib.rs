//! stronghold_io — parsing of operator command-log lines into the types
//! `stronghold_core` scores, plus the embedded fixture corpus used to seed
//! integration tests.
//!
//! Scope is deliberately narrow: the two line shapes that show up in a
//! player's chat/command log (`/execute ... run tp` for a throw, `/tp` for
//! a confirmed stronghold location), and nothing that looks like a general
//! Minecraft command parser.

#![forbid(unsafe_code)]

pub mod fixture;
pub mod parse;

pub use fixture::{load_tests_from_str, ProgressionCase, SAMPLE_1};
pub use parse::{parse_teleport_line, parse_throw_line, ParseError};
