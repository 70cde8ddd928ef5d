//! Crossterm terminal driver for trove.
//!
//! [`CrosstermDriver`] implements [`trove_core::Driver`]: it switches the
//! terminal to raw mode on an alternate screen, turns key presses into
//! [`Msg`]s and writes frame diffs glyph by glyph.

use std::error::Error;
use std::io::{self, Write};
use std::sync::mpsc::Sender;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use trove_core::{AttrMask, Color, Driver, Frame, Key, Msg};

/// How long a poll waits for the first event before handing control back.
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        let (r, g, b) = c.rgb();
        CtColor::Rgb { r, g, b }
    }
}

fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        _ => None,
    }
}

/// Translate one terminal event. Ctrl-C becomes [`Msg::Quit`] since raw
/// mode swallows the signal.
fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) => {
            if kind == KeyEventKind::Release {
                return None;
            }
            if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
                return Some(Msg::Quit);
            }
            to_key(code).map(Msg::Key)
        }
        Event::Resize(cols, rows) => Some(Msg::Resize {
            rows: rows as i32,
            cols: cols as i32,
        }),
        _ => None,
    }
}

/// A terminal back-end using crossterm.
///
/// Each canvas position is written at the same terminal column and row, so
/// the model decides how wide a board cell is drawn.
#[derive(Debug, Default)]
pub struct CrosstermDriver {
    active: bool,
}

impl CrosstermDriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<(), Box<dyn Error>> {
        terminal::enable_raw_mode()?;
        self.active = true;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        log::debug!("terminal driver initialised");
        Ok(())
    }

    fn poll_msgs(&mut self, tx: &Sender<Msg>) -> Result<(), Box<dyn Error>> {
        if !event::poll(POLL_TIMEOUT)? {
            return Ok(());
        }
        // Drain everything already buffered so key repeat does not lag.
        loop {
            if let Some(msg) = to_msg(event::read()?) {
                tx.send(msg)?;
            }
            if !event::poll(Duration::ZERO)? {
                return Ok(());
            }
        }
    }

    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn Error>> {
        let mut stdout = io::stdout();

        for fc in &frame.cells {
            let (Ok(col), Ok(row)) = (u16::try_from(fc.pos.col), u16::try_from(fc.pos.row)) else {
                continue;
            };
            let style = fc.glyph.style;
            queue!(
                stdout,
                cursor::MoveTo(col, row),
                SetForegroundColor(to_ct_color(style.fg)),
                SetBackgroundColor(to_ct_color(style.bg))
            )?;

            let bold = style.attrs.contains(AttrMask::BOLD);
            if bold {
                queue!(stdout, SetAttribute(Attribute::Bold))?;
            }
            queue!(stdout, Print(fc.glyph.ch))?;
            if bold {
                queue!(stdout, SetAttribute(Attribute::Reset))?;
            }
        }

        stdout.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        log::debug!("terminal restored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn arrows_map_to_keys() {
        assert_eq!(to_msg(press(KeyCode::Up, KeyModifiers::NONE)), Some(Msg::Key(Key::ArrowUp)));
        assert_eq!(
            to_msg(press(KeyCode::Left, KeyModifiers::NONE)),
            Some(Msg::Key(Key::ArrowLeft))
        );
        assert_eq!(
            to_msg(press(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(Msg::Key(Key::Char('j')))
        );
        assert_eq!(
            to_msg(press(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Msg::Key(Key::Space))
        );
    }

    #[test]
    fn ctrl_c_quits() {
        assert_eq!(
            to_msg(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Msg::Quit)
        );
    }

    #[test]
    fn releases_and_unknown_keys_are_dropped() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(to_msg(release), None);
        assert_eq!(to_msg(press(KeyCode::F(1), KeyModifiers::NONE)), None);
    }

    #[test]
    fn resize_swaps_axes() {
        assert_eq!(
            to_msg(Event::Resize(80, 24)),
            Some(Msg::Resize { rows: 24, cols: 80 })
        );
    }

    #[test]
    fn default_color_resets() {
        assert_eq!(to_ct_color(Color::DEFAULT), CtColor::Reset);
        assert_eq!(
            to_ct_color(Color::from_rgb(1, 2, 3)),
            CtColor::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
