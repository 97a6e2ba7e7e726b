//! A crossterm terminal session and event loop for a `Ui`.

use std::io::{self, Stderr, Write};

use crossterm::{
    QueueableCommand, cursor as ccursor, event as cevent, execute,
    style::{self, Attribute, Color},
    terminal,
};
use scopeguard::defer;
use tracing::{debug, error};
use trellis::{Expanse, TermBuf, Ui, event::Event, render::Attr};

/// Draws cell buffers to stderr.
pub struct CrosstermRender {
    /// Output handle.
    fp: Stderr,
}

impl Default for CrosstermRender {
    fn default() -> Self {
        Self { fp: io::stderr() }
    }
}

impl CrosstermRender {
    /// Queue the styling for an attribute.
    fn style(&mut self, attr: Attr) -> io::Result<()> {
        self.fp.queue(style::SetAttribute(Attribute::Reset))?;
        match attr {
            Attr::Normal => {}
            Attr::Focused => {
                self.fp.queue(style::SetBackgroundColor(Color::DarkBlue))?;
            }
            Attr::Selected => {
                self.fp.queue(style::SetBackgroundColor(Color::Blue))?;
                self.fp.queue(style::SetAttribute(Attribute::Bold))?;
            }
            Attr::Cursor => {
                self.fp.queue(style::SetAttribute(Attribute::Reverse))?;
            }
        }
        Ok(())
    }

    /// Draw a whole buffer and flush.
    pub fn draw(&mut self, buf: &TermBuf) -> io::Result<()> {
        let size = buf.size();
        let mut current = None;
        for y in 0..size.h {
            self.fp.queue(ccursor::MoveTo(0, y as u16))?;
            for x in 0..size.w {
                let Some(cell) = buf.get((x, y)) else {
                    continue;
                };
                if cell.continuation {
                    continue;
                }
                if current != Some(cell.attr) {
                    self.style(cell.attr)?;
                    current = Some(cell.attr);
                }
                self.fp.queue(style::Print(cell.ch))?;
            }
        }
        self.fp.queue(style::SetAttribute(Attribute::Reset))?;
        self.fp.flush()
    }
}

/// Current terminal size.
fn term_size() -> io::Result<Expanse> {
    let (w, h) = terminal::size()?;
    Ok(Expanse::new(w.into(), h.into()))
}

/// Run `ui` on the terminal until it requests exit. Raw mode and the
/// alternate screen are restored on every exit path.
pub fn runloop(mut ui: Ui) -> io::Result<()> {
    let mut stderr = io::stderr();
    terminal::enable_raw_mode()?;
    execute!(stderr, terminal::EnterAlternateScreen, ccursor::Hide)?;
    defer! {
        let mut stderr = io::stderr();
        #[allow(unused_must_use)]
        {
            execute!(stderr, terminal::LeaveAlternateScreen, ccursor::Show);
            terminal::disable_raw_mode();
        }
    }

    let mut render = CrosstermRender::default();
    let mut buf = TermBuf::new(term_size()?);
    loop {
        if let Err(e) = ui.render(&mut buf) {
            error!("render failed: {e}");
        }
        render.draw(&buf)?;

        let Some(event) = Event::from_crossterm(cevent::read()?) else {
            continue;
        };
        if let Event::Resize(size) = event {
            debug!("resize to {}x{}", size.w, size.h);
            buf = TermBuf::new(size);
        }
        ui.event(event);
        if ui.exit_requested() {
            return Ok(());
        }
    }
}
