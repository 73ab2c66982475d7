//! High-level emulator combining the parser and the screen backend.

use crate::term::parser::VtParser;
use crate::term::state::{ScreenError, TermScreen};

/// Sink for bytes the terminal sends back to the host program, such as the
/// device-attributes identification string.
///
/// The sink is supplied by the caller and owns whatever transport carries the
/// reply; the core itself never performs I/O.
pub trait HostWriter {
    fn host_write(&mut self, bytes: &[u8]);
}

impl<F: FnMut(&[u8])> HostWriter for F {
    fn host_write(&mut self, bytes: &[u8]) {
        self(bytes)
    }
}

/// A VT102 terminal emulator core.
///
/// Owns one parser and one screen. Feed it the byte stream a host program
/// emits; read the resulting grid, cursor and dirty flags through
/// [`Vt102::screen`]. Replies the terminal must send back to the host go to
/// the installed [`HostWriter`], or are dropped when none is installed.
///
/// The core is single-threaded and never blocks; callers wanting to share it
/// across threads must wrap it in their own exclusion.
///
/// # Example
///
/// ```
/// use vtcore::Vt102;
///
/// let mut term = Vt102::new(80, 24);
/// term.feed_bytes(b"\x1b[31mhi");
/// assert_eq!(&term.screen().line_chars(0)[..2], b"hi");
/// assert_eq!(term.screen().line_attrs(0)[0], 0x01);
/// ```
pub struct Vt102 {
    screen: TermScreen,
    parser: VtParser,
    host: Option<Box<dyn HostWriter>>,
}

impl Vt102 {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            screen: TermScreen::new(cols, rows),
            parser: VtParser::new(),
            host: None,
        }
    }

    /// Install the sink that receives host-directed replies.
    pub fn set_host_writer(&mut self, writer: impl HostWriter + 'static) {
        self.host = Some(Box::new(writer));
    }

    /// Advance the emulator by one byte of host output.
    pub fn feed(&mut self, byte: u8) {
        if let Some(reply) = self.parser.feed(byte, &mut self.screen) {
            if let Some(host) = self.host.as_mut() {
                host.host_write(reply.to_bytes());
            }
        }
    }

    /// Feed a whole chunk of host output in order.
    pub fn feed_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.feed(byte);
        }
    }

    /// Resize the screen. On allocation failure the emulator is unchanged.
    pub fn resize(&mut self, cols: u16, rows: u16) -> Result<(), ScreenError> {
        self.screen.resize(cols, rows)
    }

    pub fn screen(&self) -> &TermScreen {
        &self.screen
    }

    /// Mutable screen access, for renderers clearing dirty flags.
    pub fn screen_mut(&mut self) -> &mut TermScreen {
        &mut self.screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn da_reply_reaches_host_writer() {
        let captured = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&captured);

        let mut term = Vt102::new(80, 24);
        term.set_host_writer(move |bytes: &[u8]| {
            sink.borrow_mut().extend_from_slice(bytes);
        });
        term.feed_bytes(b"\x1b[c");
        assert_eq!(*captured.borrow(), vec![0x1B, 0x5B, 0x3F, 0x36, 0x63]);
    }

    #[test]
    fn da_reply_dropped_without_host_writer() {
        let mut term = Vt102::new(80, 24);
        term.feed_bytes(b"\x1b[c");
        assert_eq!((term.screen().cursor_x, term.screen().cursor_y), (0, 0));
    }

    #[test]
    fn resize_flows_through() {
        let mut term = Vt102::new(80, 24);
        term.feed_bytes(b"hello");
        term.resize(40, 12).unwrap();
        assert_eq!((term.screen().cols, term.screen().rows), (40, 12));
        assert_eq!(&term.screen().line_chars(0)[..5], b"hello");
    }
}
