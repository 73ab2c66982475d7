//! vtcore - a DEC VT102 terminal emulator core
//!
//! vtcore maintains the screen state a terminal renderer paints: a
//! rectangular character grid with per-cell colors, a cursor, scrolling
//! margins and per-line dirty flags, all driven by the raw byte stream a
//! host program (a shell, `vi`, `less`) emits.
//!
//! # What it does
//!
//! - **Escape sequence parsing**: C0 controls, single-character escapes and
//!   CSI sequences with up to 16 parameters, per ECMA-48 / DEC VT102
//! - **Screen editing**: cursor motion, erasure, scrolling regions,
//!   insert/delete of lines and characters, tab expansion
//! - **Graphic rendition**: the eight VT102 colors, packed one byte per cell
//! - **Damage tracking**: per-line dirty flags a renderer consumes and clears
//! - **Host replies**: the device-attributes identification string, routed
//!   to a caller-supplied sink
//!
//! # What it leaves to the caller
//!
//! Rendering, pseudo-terminal management, transport and keyboard handling
//! all live outside this crate. The core consumes bytes via
//! [`Vt102::feed`], exposes the grid through [`Vt102::screen`], and writes
//! nothing anywhere except the [`HostWriter`] the caller installs.

pub mod emulator;
pub mod term;

pub use emulator::{HostWriter, Vt102};
pub use term::parser::{Response, VtParser, MAX_PARAMS};
pub use term::state::{
    attr_bg, attr_fg, pack_attr, Color, ScreenError, TermScreen, DEFAULT_BG, DEFAULT_FG,
    MIN_COLS, MIN_ROWS,
};
