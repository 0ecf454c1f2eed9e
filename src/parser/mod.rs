//! Document parsers for the keymap and board description formats.
//!
//! Parsers consume already-loaded text; reading files (and discovering
//! where QMK keeps them) is the calling collaborator's job. Both formats
//! are json5/hjson-style structured text as QMK ships them.

pub mod board;
pub mod keymap;

pub use board::parse_board_str;
pub use keymap::parse_keymap_str;
