// sink.rs - Where rendered generations go

use std::io::{self, Write};

/// ANSI: cursor home, then erase the whole display.
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Output surface for rendered frames.
pub trait FrameSink {
    fn clear_screen(&mut self) -> io::Result<()>;
    fn write_frame(&mut self, frame: &str) -> io::Result<()>;
}

/// Writes frames to any `io::Write`, clearing with ANSI escapes.
/// Use `io::stdout()` for a terminal, a `Vec<u8>` to capture output.
#[derive(Debug)]
pub struct TermSink<W: Write> {
    out: W,
}

impl<W: Write> TermSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for TermSink<W> {
    fn clear_screen(&mut self) -> io::Result<()> {
        self.out.write_all(CLEAR_SCREEN.as_bytes())
    }

    fn write_frame(&mut self, frame: &str) -> io::Result<()> {
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }
}
