//! Terminal escape sequence decoder
//!
//! A stateful decoder that turns a byte stream into [`Handler`] callbacks.
//! Control code and SGR tables, the 256-color model and the parameter parser
//! are exposed as standalone helpers.

mod codes;
mod color;
mod event;
mod handler;
mod osc;
mod params;
mod sgr;
mod state;

pub use codes::{CsiCode, C0, C1};
pub use color::{Color, Rgba};
pub use event::{Event, Recorder};
pub use handler::{Handler, NullHandler};
pub use params::{parameter_ints, parameter_strings};
pub use sgr::Sgr;
pub use state::{DecodeState, Decoder};
