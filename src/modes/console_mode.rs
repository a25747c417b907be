use crossterm::{
    cursor,
    event::{poll, read, Event, KeyCode, KeyEventKind},
    queue,
    style::{Color, Print, Stylize},
    terminal::{
        disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use smallvec::{SmallVec, ToSmallVec};

use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crate::data::{Command, Program, MAX_CON_HEIGHT, MAX_CON_WIDTH};
use crate::graphics::{Argb, Pixel};

const ERROR: u8 = 6;
const MAX_SEGMENTS: usize = 48;

pub struct ConsoleProps {
    pub cols: u16,
    pub rows: u16,
    pub max_width: u16,
    pub max_height: u16,
}

impl ConsoleProps {
    pub fn new() -> Self {
        Self {
            cols: 80,
            rows: 24,
            max_width: MAX_CON_WIDTH,
            max_height: MAX_CON_HEIGHT,
        }
    }

    /// Store the cell size and hand back the canvas size in pixels.
    /// A cell is one pixel wide and two pixels tall (half blocks).
    pub fn set_size(&mut self, s: (u16, u16)) -> (u16, u16) {
        self.cols = s.0;
        self.rows = s.1;

        (s.0.min(self.max_width), s.1.min(self.max_height) * 2)
    }

    pub fn origin(&self, canvas_cols: u16, canvas_rows: u16) -> (u16, u16) {
        (
            self.cols.saturating_sub(canvas_cols) / 2,
            self.rows.saturating_sub(canvas_rows) / 2,
        )
    }
}

fn near(a: Argb, b: Argb, error: u8) -> bool {
    let [_, r1, g1, b1] = a.decompose();
    let [_, r2, g2, b2] = b.decompose();

    r1.abs_diff(r2) <= error && g1.abs_diff(g2) <= error && b1.abs_diff(b2) <= error
}

struct ColoredString {
    pub string: SmallVec<[char; MAX_CON_WIDTH as usize]>,
    pub fg: Argb,
    pub bg: Argb,
    error: u8,
}

impl ColoredString {
    pub fn new(ch: char, fg: Argb, bg: Argb, error: u8) -> Self {
        Self {
            string: [ch].to_smallvec(),
            fg,
            bg,
            error,
        }
    }

    pub fn append(&mut self, ch: char, fg: Argb, bg: Argb) -> bool {
        if near(self.fg, fg, self.error) && near(self.bg, bg, self.error) {
            self.string.push(ch);
            return true;
        }

        false
    }
}

/// Compress similar pixels into one string with the same
/// color. Hopefully this reduces IO performance cost.
trait StyledLine {
    fn init() -> Self;
    fn clear_line(&mut self);
    fn push_pixel(&mut self, ch: char, fg: Argb, bg: Argb);
    fn queue_print(&self, stdout: &mut Stdout);
}

impl StyledLine for SmallVec<[ColoredString; MAX_SEGMENTS]> {
    fn init() -> Self {
        let mut out = Self::new();
        out.push(ColoredString::new('\0', Argb::black(), Argb::black(), ERROR));
        out
    }

    fn clear_line(&mut self) {
        self.clear();
        self.push(ColoredString::new('\0', Argb::black(), Argb::black(), ERROR));
    }

    fn push_pixel(&mut self, ch: char, fg: Argb, bg: Argb) {
        if let Some(last) = self.last_mut() {
            if last.append(ch, fg, bg) {
                return;
            }
        }

        self.push(ColoredString::new(ch, fg, bg, ERROR));
    }

    fn queue_print(&self, stdout: &mut Stdout) {
        for ColoredString { string, fg, bg, .. } in self {
            let [_, r, g, b] = fg.decompose();
            let [_, br, bgg, bb] = bg.decompose();

            let _ = queue!(
                stdout,
                Print(
                    string
                        .iter()
                        .collect::<String>()
                        .with(Color::Rgb { r, g, b })
                        .on(Color::Rgb {
                            r: br,
                            g: bgg,
                            b: bb
                        })
                )
            );
        }
    }
}

impl Program {
    /// Half-block renderer: every cell shows two vertically stacked
    /// pixels, top in the foreground color, bottom in the background.
    pub fn print_block(&self, stdout: &mut Stdout) {
        let width = self.pix.width();
        let height = self.pix.height();

        let canvas_cols = width as u16;
        let canvas_rows = (height / 2) as u16;
        let origin = self.console.origin(canvas_cols, canvas_rows);

        let mut line = SmallVec::<[ColoredString; MAX_SEGMENTS]>::init();

        for y_base in (0..height.saturating_sub(1)).step_by(2) {
            let cy = origin.1 + y_base as u16 / 2;
            let _ = queue!(stdout, cursor::MoveTo(origin.0, cy));

            for x in 0..width {
                let idx = y_base * width + x;

                let top = self.pix.pixel(idx);
                let bottom = self.pix.pixel(idx + width);

                line.push_pixel('▀', top, bottom);
            }

            line.queue_print(stdout);
            line.clear_line();
        }
    }
}

fn eval_key(code: KeyCode) -> Command {
    match code {
        KeyCode::Esc => Command::Close,

        KeyCode::Char(' ') => Command::TogglePause,

        KeyCode::Char('1') => Command::SelectSlider(0),
        KeyCode::Char('2') => Command::SelectSlider(1),
        KeyCode::Char('3') => Command::SelectSlider(2),

        KeyCode::Char('-') => Command::SliderDown,
        KeyCode::Char('=') => Command::SliderUp,

        KeyCode::Char('/') => Command::ResetSliders,

        KeyCode::Char('q') => Command::TogglePanel(0),
        KeyCode::Char('w') => Command::TogglePanel(1),
        KeyCode::Char('e') => Command::TogglePanel(2),
        KeyCode::Char('r') => Command::TogglePanel(3),

        _ => Command::Blank,
    }
}

pub fn con_main(mut prog: Program) -> std::io::Result<()> {
    let mut stdout = stdout();

    enable_raw_mode()?;
    queue!(stdout, EnterAlternateScreen, cursor::Hide, Clear(ClearType::All))?;
    stdout.flush()?;

    prog.update_size(size()?);
    prog.print_readout();

    let mut fps = fps_clock::FpsClock::new((prog.get_milli_hz() / 1000).max(1));

    let mut cmds: Vec<Command> = Vec::new();
    let mut exit = false;

    while !exit {
        while poll(Duration::ZERO)? {
            match read()? {
                Event::Key(event) if event.kind == KeyEventKind::Press => {
                    let cmd = eval_key(event.code);
                    if cmd.is_close_requested() {
                        exit = true;
                    }
                    cmds.push(cmd);
                }

                Event::Resize(w, h) => {
                    prog.update_size((w, h));
                    queue!(stdout, Clear(ClearType::All))?;
                }

                _ => {}
            }
        }

        prog.eval_commands(&mut cmds);

        prog.tick();
        prog.render();
        prog.print_block(&mut stdout);
        stdout.flush()?;

        fps.tick();
    }

    queue!(stdout, cursor::Show, LeaveAlternateScreen)?;
    stdout.flush()?;
    disable_raw_mode()?;

    Ok(())
}
