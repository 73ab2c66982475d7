//! VT102 command stream parser.
//!
//! Consumes host bytes one at a time and drives the screen backend. The
//! machine recognizes C0 controls, single-character escapes and CSI
//! sequences; unknown input is dropped without disturbing the session.

use super::state::TermScreen;

/// Most CSI parameters a sequence may carry; extras are dropped.
pub const MAX_PARAMS: usize = 16;

/// Reply that needs to be sent back to the host program.
///
/// The core performs no I/O itself; whoever owns the transport writes these
/// bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Device attributes response: the VT102 identification string.
    DeviceAttributes,
}

impl Response {
    pub fn to_bytes(&self) -> &'static [u8] {
        match self {
            Response::DeviceAttributes => b"\x1b[?6c",
        }
    }
}

#[derive(Clone, Copy, Default, PartialEq)]
enum ParserState {
    #[default]
    Ground,
    Escape,
    Csi,
}

/// Parser state machine
pub struct VtParser {
    state: ParserState,
    params: Vec<u16>,
    current_param: Option<u16>,
    priv_marker: Option<u8>,
}

impl Default for VtParser {
    fn default() -> Self {
        Self::new()
    }
}

impl VtParser {
    pub fn new() -> Self {
        Self {
            state: ParserState::Ground,
            params: Vec::with_capacity(MAX_PARAMS),
            current_param: None,
            priv_marker: None,
        }
    }

    /// Feed a single byte to the parser, applying any completed operation to
    /// the screen. Never fails; a reply is returned when the host asked a
    /// question the terminal must answer.
    pub fn feed(&mut self, byte: u8, screen: &mut TermScreen) -> Option<Response> {
        match self.state {
            ParserState::Ground => self.ground(byte, screen),
            ParserState::Escape => self.escape(byte, screen),
            ParserState::Csi => self.csi(byte, screen),
        }
    }

    fn enter_escape(&mut self) {
        self.state = ParserState::Escape;
        self.params.clear();
        self.current_param = None;
        self.priv_marker = None;
    }

    fn ground(&mut self, byte: u8, screen: &mut TermScreen) -> Option<Response> {
        match byte {
            0x08 => screen.backspace(),
            0x09 => screen.horizontal_tab(),
            0x0A | 0x0B | 0x0C => screen.linefeed(),
            0x0D => screen.carriage_return(),
            0x1B => self.enter_escape(),
            0x00..=0x1F => {} // BEL and the remaining C0 controls are ignored
            _ => screen.display_char(byte),
        }
        None
    }

    fn escape(&mut self, byte: u8, screen: &mut TermScreen) -> Option<Response> {
        match byte {
            b'[' => {
                // parameter buffers were cleared when ESC arrived
                self.state = ParserState::Csi;
                return None;
            }
            b'D' => screen.linefeed(),
            b'E' => {
                screen.carriage_return();
                screen.linefeed();
            }
            b'M' => screen.reverse_index(),
            b'c' => screen.reset(),
            _ => {} // unsupported single-character escape
        }
        self.state = ParserState::Ground;
        None
    }

    fn csi(&mut self, byte: u8, screen: &mut TermScreen) -> Option<Response> {
        match byte {
            b'?' if self.params.is_empty()
                && self.current_param.is_none()
                && self.priv_marker.is_none() =>
            {
                self.priv_marker = Some(byte);
            }
            b'0'..=b'9' => {
                let digit = (byte - b'0') as u16;
                self.current_param = Some(
                    self.current_param
                        .unwrap_or(0)
                        .saturating_mul(10)
                        .saturating_add(digit),
                );
            }
            b';' => {
                let param = self.current_param.take().unwrap_or(0);
                if self.params.len() < MAX_PARAMS {
                    self.params.push(param);
                }
            }
            0x40..=0x7E => {
                if let Some(param) = self.current_param.take() {
                    if self.params.len() < MAX_PARAMS {
                        self.params.push(param);
                    }
                }
                let response = self.dispatch(byte, screen);
                self.state = ParserState::Ground;
                return response;
            }
            _ => {
                // not valid inside a control sequence - abort
                self.state = ParserState::Ground;
            }
        }
        None
    }

    fn dispatch(&self, final_byte: u8, screen: &mut TermScreen) -> Option<Response> {
        if self.priv_marker.is_some() {
            // no DEC private modes are implemented
            tracing::debug!(
                "ignored private CSI: params={:?}, final={:?}",
                self.params,
                final_byte as char
            );
            return None;
        }

        let p1 = self.params.first().copied();
        let p2 = self.params.get(1).copied();

        match final_byte {
            b'A' => screen.move_relative(0, -(p1.unwrap_or(1).max(1) as i32)),
            b'B' => screen.move_relative(0, p1.unwrap_or(1).max(1) as i32),
            b'C' => screen.move_relative(p1.unwrap_or(1).max(1) as i32, 0),
            b'D' => screen.move_relative(-(p1.unwrap_or(1).max(1) as i32), 0),
            b'G' => screen.move_column(p1.unwrap_or(1).max(1) - 1),
            b'H' | b'f' => {
                let row = p1.unwrap_or(1).max(1);
                let col = p2.unwrap_or(1).max(1);
                screen.move_absolute(col - 1, row - 1);
            }
            b'J' => match p1.unwrap_or(0) {
                0 => screen.erase_display_from_cursor(),
                1 => screen.erase_display_to_cursor(),
                2 => screen.erase_display(),
                other => tracing::debug!("unhandled ED mode {}", other),
            },
            b'K' => match p1.unwrap_or(0) {
                0 => screen.erase_line_from_cursor(),
                1 => screen.erase_line_to_cursor(),
                2 => screen.erase_line(),
                other => tracing::debug!("unhandled EL mode {}", other),
            },
            b'L' => screen.insert_lines(p1.unwrap_or(1).max(1)),
            b'M' => screen.delete_lines(p1.unwrap_or(1).max(1)),
            b'P' => screen.delete_characters(p1.unwrap_or(1).max(1)),
            b'c' => return Some(Response::DeviceAttributes),
            b'm' => {
                if self.params.is_empty() {
                    screen.select_graphic_rendition(&[0]);
                } else {
                    screen.select_graphic_rendition(&self.params);
                }
            }
            b'r' => {
                let top = p1.unwrap_or(1).max(1);
                // a zero or missing bottom parameter means the last row
                let bottom = match p2 {
                    Some(p) if p != 0 => p,
                    _ => screen.rows,
                };
                screen.set_margins(top - 1, bottom - 1);
            }
            _ => {
                tracing::debug!(
                    "unknown CSI: params={:?}, final={:?}",
                    self.params,
                    final_byte as char
                );
            }
        }
        None
    }
}
