//! The game model: turns key presses into moves and draws the board, the
//! hint path and the status lines.

use trove_core::{AttrMask, Color, Effect, Glyph, Grid, Key, Model, Msg, Position, Style};

use crate::hint::nearest_treasure_path;
use crate::state::GridState;
use crate::tile::Tile;

const PLAYER_FG: Color = Color::from_rgb(248, 248, 242);
const TREASURE_FG: Color = Color::from_rgb(241, 196, 15);
const OBSTACLE_FG: Color = Color::from_rgb(150, 155, 170);
const FLOOR_FG: Color = Color::from_rgb(98, 100, 106);
const HINT_FG: Color = Color::from_rgb(80, 200, 200);
const COLLECTED_FG: Color = Color::from_rgb(170, 140, 80);
const STATUS_FG: Color = Color::from_rgb(200, 200, 200);
const WIN_FG: Color = Color::from_rgb(80, 200, 80);

/// Screen columns per board cell.
pub const CELL_WIDTH: i32 = 2;
/// Rows drawn below the board: status, help and message lines.
const FOOTER_ROWS: i32 = 3;
const MIN_COLS: i32 = 40;

const HELP_LINE: &str = "arrows/hjkl: move   q/Esc: quit";
const WIN_LINE: &str = "All treasures found! Press any key.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Playing,
    Won,
}

/// Treasure hunt model for the [`App`](trove_core::App) loop.
pub struct HuntModel {
    state: GridState,
    mode: Mode,
    hint: Option<Vec<Position>>,
    moves: u32,
}

impl HuntModel {
    pub fn new(state: GridState) -> Self {
        let hint = nearest_treasure_path(&state);
        Self {
            state,
            mode: Mode::Playing,
            hint,
            moves: 0,
        }
    }

    /// Canvas size `(rows, cols)` that fits the board and footer.
    pub fn canvas_size(&self) -> (i32, i32) {
        let size = self.state.size();
        (size + FOOTER_ROWS, (size * CELL_WIDTH).max(MIN_COLS))
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// Current hint path, player first.
    pub fn hint(&self) -> Option<&[Position]> {
        self.hint.as_deref()
    }

    pub fn is_won(&self) -> bool {
        self.mode == Mode::Won
    }

    /// Movement keys delivered to the board, blocked ones included.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    fn update_playing(&mut self, key: Key) -> Option<Effect> {
        if matches!(key, Key::Char('q') | Key::Escape) {
            return Some(Effect::End);
        }
        let dir = key.direction()?;
        self.moves += 1;
        if self.state.move_player(dir) {
            log::info!("game won after {} moves", self.moves);
            self.mode = Mode::Won;
            self.hint = None;
        } else {
            self.hint = nearest_treasure_path(&self.state);
            if self.hint.is_none() {
                log::debug!("no treasure reachable from {}", self.state.player());
            }
        }
        None
    }

    fn draw_board(&self, canvas: &mut Grid<Glyph>) {
        for (p, &tile) in self.state.grid() {
            let glyph = match tile {
                Tile::Player => Glyph::new('@', fg(PLAYER_FG).with_attrs(AttrMask::BOLD)),
                Tile::Treasure => Glyph::new('$', fg(TREASURE_FG).with_attrs(AttrMask::BOLD)),
                Tile::Obstacle => Glyph::new('#', fg(OBSTACLE_FG)),
                Tile::CollectedTreasure => Glyph::new('+', fg(COLLECTED_FG)),
                Tile::Empty => Glyph::new('·', fg(FLOOR_FG)),
            };
            canvas.set(screen_pos(p), glyph);
        }

        // The path's ends stay visible as the player and the treasure.
        if let Some(path) = &self.hint {
            let inner = path.len().saturating_sub(1);
            for &p in path.iter().take(inner).skip(1) {
                canvas.set(screen_pos(p), Glyph::new('*', fg(HINT_FG)));
            }
        }
    }

    fn draw_footer(&self, canvas: &mut Grid<Glyph>) {
        let row = self.state.size();
        let mut status = format!(
            "Treasures: {}/{}",
            self.state.treasures_found(),
            self.state.total_treasures()
        );
        match (self.mode, &self.hint) {
            (Mode::Won, _) => {}
            (Mode::Playing, Some(path)) => {
                status.push_str(&format!("   Nearest: {} steps", path.len() - 1));
            }
            (Mode::Playing, None) => status.push_str("   Nearest: no path"),
        }
        draw_text(canvas, row, &status, fg(STATUS_FG));
        draw_text(canvas, row + 1, HELP_LINE, fg(FLOOR_FG));
        if self.mode == Mode::Won {
            draw_text(canvas, row + 2, WIN_LINE, fg(WIN_FG).with_attrs(AttrMask::BOLD));
        }
    }
}

impl Model for HuntModel {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Init => {
                log::debug!(
                    "starting {}x{} hunt for {} treasures",
                    self.state.size(),
                    self.state.size(),
                    self.state.total_treasures()
                );
                None
            }
            Msg::Quit => Some(Effect::End),
            Msg::Resize { .. } => None,
            Msg::Key(key) => match self.mode {
                Mode::Playing => self.update_playing(key),
                Mode::Won => Some(Effect::End),
            },
        }
    }

    fn draw(&self, canvas: &mut Grid<Glyph>) {
        self.draw_board(canvas);
        self.draw_footer(canvas);
    }
}

fn fg(color: Color) -> Style {
    Style::default().with_fg(color)
}

fn screen_pos(p: Position) -> Position {
    Position::new(p.row, p.col * CELL_WIDTH)
}

fn draw_text(canvas: &mut Grid<Glyph>, row: i32, text: &str, style: Style) {
    for (col, ch) in (0..canvas.cols()).zip(text.chars()) {
        canvas.set(Position::new(row, col), Glyph::new(ch, style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trove_core::{App, AppConfig, ScriptedDriver};

    const OPEN: &str = "
        @...$
        .....
        .....
        .....
        .....";

    fn model(pic: &str) -> HuntModel {
        HuntModel::new(GridState::from_layout(pic).unwrap())
    }

    /// Run `keys` through the app loop and return the model and the final
    /// screen, one string per row.
    fn play(model: HuntModel, keys: &[Key]) -> (HuntModel, Vec<String>) {
        let (rows, cols) = model.canvas_size();
        let mut app = App::new(AppConfig {
            model,
            driver: ScriptedDriver::new(keys.iter().map(|&k| Msg::key(k))),
            rows,
            cols,
        });
        app.run().unwrap();
        let (model, driver) = app.into_parts();
        assert!(driver.is_closed());
        let screen = driver.screen_text().lines().map(String::from).collect();
        (model, screen)
    }

    #[test]
    fn canvas_fits_board_and_footer() {
        assert_eq!(model(OPEN).canvas_size(), (8, 40));
        let mut pic = format!("@{}\n", "$".repeat(29));
        for _ in 1..30 {
            pic.push_str(&".".repeat(30));
            pic.push('\n');
        }
        assert_eq!(model(&pic).canvas_size(), (33, 60));
    }

    #[test]
    fn first_screen_shows_board_hint_and_status() {
        let (m, screen) = play(model(OPEN), &[]);
        assert_eq!(screen[0], "@ * * * $");
        assert_eq!(screen[1], "· · · · ·");
        assert_eq!(screen[5], "Treasures: 0/1   Nearest: 4 steps");
        assert_eq!(screen[6], HELP_LINE);
        assert_eq!(screen[7], "");
        assert_eq!(m.hint().map(<[Position]>::len), Some(5));
    }

    #[test]
    fn arrows_and_vi_keys_move_and_refresh_the_hint() {
        let (m, screen) = play(model(OPEN), &[Key::ArrowRight, Key::Char('l')]);
        assert_eq!(m.state().player(), Position::new(0, 2));
        assert_eq!(m.moves(), 2);
        assert_eq!(screen[0], "· · @ * $");
        assert_eq!(screen[5], "Treasures: 0/1   Nearest: 2 steps");

        let vi = [Key::Char('j'), Key::Char('j'), Key::Char('k'), Key::Char('h')];
        let (m, _) = play(model(OPEN), &vi);
        assert_eq!(m.state().player(), Position::new(1, 0));
        assert_eq!(m.hint().map(|p| p[0]), Some(Position::new(1, 0)));
    }

    #[test]
    fn collecting_the_last_treasure_wins() {
        let (m, screen) = play(
            model(
                "
                @$.
                ...
                ...",
            ),
            &[Key::ArrowRight],
        );
        assert!(m.is_won());
        assert_eq!(m.hint(), None);
        assert_eq!(screen[0], "@ + ·");
        assert_eq!(screen[3], "Treasures: 1/1");
        assert_eq!(screen[5], WIN_LINE);
    }

    #[test]
    fn any_key_ends_after_a_win() {
        let mut m = model(
            "
            @$.
            ...
            ...",
        );
        assert_eq!(m.update(Msg::key(Key::ArrowRight)), None);
        assert!(m.is_won());
        let before = m.state().clone();
        assert_eq!(m.update(Msg::key(Key::ArrowDown)), Some(Effect::End));
        assert_eq!(m.state(), &before);
    }

    #[test]
    fn quit_keys_end_while_playing() {
        for msg in [Msg::key(Key::Char('q')), Msg::key(Key::Escape), Msg::Quit] {
            let mut m = model(OPEN);
            assert_eq!(m.update(msg), Some(Effect::End));
        }
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut m = model(OPEN);
        for key in [Key::Enter, Key::Space, Key::Char('x')] {
            assert_eq!(m.update(Msg::key(key)), None);
        }
        assert_eq!(m.moves(), 0);
        assert_eq!(m.state().player(), Position::ORIGIN);
    }

    #[test]
    fn walled_in_player_sees_no_path() {
        let (m, screen) = play(
            model(
                "
                $#..
                #@#.
                .#.$
                ....",
            ),
            &[Key::ArrowUp],
        );
        assert_eq!(m.hint(), None);
        assert_eq!(screen[1], "# @ # ·");
        assert_eq!(screen[4], "Treasures: 0/2   Nearest: no path");
    }
}
