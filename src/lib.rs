//! ANSI Escape Sequence Decoder
//!
//! An incremental decoder for terminal output. Bytes may arrive in chunks of
//! any size; the decoder keeps partial sequences between writes and reports
//! text, control codes, cursor motion, SGR attributes and OSC commands to a
//! [`Handler`](parser::Handler).
//!
//! - `parser`: decoder state machine, control code tables, colors
//! - `app`: configuration

pub mod app;
pub mod parser;
