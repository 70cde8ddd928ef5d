//! The Elm-style application loop: [`Model`], [`Driver`], [`Effect`],
//! [`App`].

use std::error::Error;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::geom::Bounds;
use crate::glyph::Glyph;
use crate::grid::{Frame, FrameCell, Grid, compute_frame};
use crate::messages::Msg;

/// A side-effect returned by [`Model::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Stop the application loop after this message.
    End,
}

/// The application model.
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state into `canvas`. The canvas is cleared to
    /// blank glyphs before every call.
    fn draw(&self, canvas: &mut Grid<Glyph>);
}

/// Back-end driver (terminal, scripted test harness, ...).
pub trait Driver {
    /// Prepare the back-end for drawing.
    fn init(&mut self) -> Result<(), Box<dyn Error>>;

    /// Push any pending input through `tx`. May block briefly waiting for
    /// input but must return so the loop can redraw.
    fn poll_msgs(&mut self, tx: &Sender<Msg>) -> Result<(), Box<dyn Error>>;

    /// Write a computed frame to the screen.
    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn Error>>;

    /// Restore the back-end. Called exactly once, also after errors.
    fn close(&mut self);
}

/// Configuration for creating an [`App`].
pub struct AppConfig<M: Model, D: Driver> {
    pub model: M,
    pub driver: D,
    /// Canvas size in character cells.
    pub rows: i32,
    pub cols: i32,
}

/// The main application runner.
pub struct App<M: Model, D: Driver> {
    model: M,
    driver: D,
    bounds: Bounds,
    // Last flushed canvas; `None` forces a full redraw.
    shown: Option<Grid<Glyph>>,
}

impl<M: Model, D: Driver> App<M, D> {
    pub fn new(config: AppConfig<M, D>) -> Self {
        Self {
            model: config.model,
            driver: config.driver,
            bounds: Bounds::new(config.rows, config.cols),
            shown: None,
        }
    }

    /// Run the loop until the model returns [`Effect::End`].
    ///
    /// 1. Initialises the driver and sends `Msg::Init`.
    /// 2. poll → update → draw → diff → flush, strictly in sequence.
    /// 3. Closes the driver, also when init or the loop failed.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        if let Err(err) = self.driver.init() {
            self.driver.close();
            return Err(err);
        }
        let result = self.event_loop();
        self.driver.close();
        result
    }

    fn event_loop(&mut self) -> Result<(), Box<dyn Error>> {
        let (tx, rx): (Sender<Msg>, Receiver<Msg>) = mpsc::channel();
        tx.send(Msg::Init).ok();

        loop {
            if self.process_pending(&rx)? {
                log::debug!("model requested end of loop");
                return Ok(());
            }
            self.driver.poll_msgs(&tx)?;
        }
    }

    /// Drain queued messages, update the model, draw, diff and flush.
    /// Returns `true` once the model asked to stop.
    fn process_pending(&mut self, rx: &Receiver<Msg>) -> Result<bool, Box<dyn Error>> {
        let mut needs_draw = false;
        let mut ended = false;

        while let Ok(msg) = rx.try_recv() {
            if matches!(msg, Msg::Resize { .. }) {
                // The terminal may have dropped what was on screen.
                self.shown = None;
            }
            log::trace!("update: {msg:?}");
            needs_draw = true;
            if let Some(Effect::End) = self.model.update(msg) {
                ended = true;
                break;
            }
        }

        if needs_draw {
            self.redraw()?;
        }
        Ok(ended)
    }

    fn redraw(&mut self) -> Result<(), Box<dyn Error>> {
        let mut canvas = Grid::filled(self.bounds.rows, self.bounds.cols, Glyph::default());
        self.model.draw(&mut canvas);

        let frame = match &self.shown {
            Some(prev) => compute_frame(prev, &canvas),
            None => full_frame(&canvas),
        };
        if !frame.is_empty() {
            self.driver.flush(frame)?;
        }
        self.shown = Some(canvas);
        Ok(())
    }

    /// Consume the app and hand back the model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Consume the app and hand back both the model and the driver.
    pub fn into_parts(self) -> (M, D) {
        (self.model, self.driver)
    }
}

fn full_frame(canvas: &Grid<Glyph>) -> Frame {
    Frame {
        cells: canvas
            .iter()
            .map(|(pos, &glyph)| FrameCell { pos, glyph })
            .collect(),
        bounds: canvas.bounds(),
    }
}
