pub mod log;
pub mod reader;

use std::time::Duration;

use crate::graphics::PixelBuffer;
use crate::math::rng::SinRng;
use crate::modes::Mode;
use crate::scene::{Scene, BACKGROUND};
use crate::widgets::{accordion::Accordion, calculator::Calculator};

pub const DEFAULT_MILLI_HZ: u32 = 60 * 1000;
pub const CAP_MILLI_HZ: u32 = 144 * 1000;

pub const DEFAULT_WIN_W: u16 = 320;
pub const DEFAULT_WIN_H: u16 = 180;
pub const DEFAULT_WIN_SCALE: u8 = 2;

pub const MAX_WIDTH: u16 = 1920;
pub const MAX_HEIGHT: u16 = 1080;

#[cfg(feature = "terminal")]
pub const MAX_CON_WIDTH: u16 = 192;
#[cfg(feature = "terminal")]
pub const MAX_CON_HEIGHT: u16 = 54;

#[derive(PartialEq)]
pub enum RefreshRateMode {
    Sync,
    Specified,
}

/// Main program struct. Constructed once in `main` and moved into
/// whichever mode runs the loop; there is no global instance.
pub struct Program {
    scale: u8,
    hidden: bool,
    paused: bool,

    pub pix: PixelBuffer,
    pub scene: Scene,
    pub calc: Calculator,
    pub faq: Accordion,

    pub mode: Mode,

    pub milli_hz: u32,
    pub refresh_rate_mode: RefreshRateMode,
    pub refresh_rate: Duration,

    rng: SinRng,

    #[cfg(feature = "terminal")]
    pub console: crate::modes::console_mode::ConsoleProps,
}

#[derive(Debug, PartialEq)]
pub enum Command {
    SelectSlider(usize),
    SliderUp,
    SliderDown,
    ResetSliders,
    TogglePanel(usize),
    TogglePause,
    Hidden(bool),
    Blank,
    Close,
}

impl Command {
    pub fn is_close_requested(&self) -> bool {
        *self == Command::Close
    }
}

impl Program {
    pub fn new() -> Self {
        let mut rng = SinRng::from_entropy();

        let mut pix = PixelBuffer::new(DEFAULT_WIN_W as usize, DEFAULT_WIN_H as usize);
        pix.set_background(BACKGROUND);

        let scene = Scene::new(DEFAULT_WIN_W as f32, DEFAULT_WIN_H as f32, &mut rng);

        let rate = Duration::from_micros(1_000_000 * 1000 / DEFAULT_MILLI_HZ as u64);

        Self {
            scale: DEFAULT_WIN_SCALE,
            hidden: false,
            paused: false,

            pix,
            scene,
            calc: Calculator::new(),
            faq: Accordion::with_default_faq(),

            mode: Mode::default(),

            milli_hz: DEFAULT_MILLI_HZ,
            refresh_rate_mode: RefreshRateMode::Sync,
            refresh_rate: rate,

            rng,

            #[cfg(feature = "terminal")]
            console: crate::modes::console_mode::ConsoleProps::new(),
        }
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn get_milli_hz(&self) -> u32 {
        self.milli_hz
    }

    pub fn eval_command(&mut self, cmd: &Command) -> bool {
        use Command::*;

        match cmd {
            Blank | Close => false,

            &SelectSlider(i) => {
                self.calc.select(i);
                self.print_readout();
                false
            }

            SliderUp => {
                self.calc.increase();
                self.print_readout();
                false
            }

            SliderDown => {
                self.calc.decrease();
                self.print_readout();
                false
            }

            ResetSliders => {
                self.calc.reset();
                self.print_readout();
                false
            }

            &TogglePanel(i) => {
                self.toggle_panel(i);
                false
            }

            TogglePause => {
                self.paused ^= true;
                true
            }

            &Hidden(b) => {
                self.hidden = b;
                false
            }
        }
    }

    pub fn eval_commands(&mut self, cmds: &mut Vec<Command>) -> bool {
        let mut redraw = false;
        for cmd in cmds.iter() {
            redraw |= self.eval_command(cmd);
        }
        cmds.clear();

        redraw
    }

    /// One unit of animation work. Paused scenes hold still but keep
    /// rendering.
    pub fn tick(&mut self) {
        if !self.paused {
            self.scene.step();
        }
    }

    pub fn render(&mut self) {
        self.scene.render(&mut self.pix);
    }

    pub fn print_message(&self, message: String) {
        log::write_to_stdout(&message, self.mode);
    }

    pub fn print_readout(&self) {
        let r = self.calc.readout();
        let marker = ["missed calls", "conversion rate", "avg transaction"][self.calc.active()];

        self.print_message(format!(
            "missed calls {} | conversion {} | avg transaction {} -> lost revenue {}  (adjusting: {})\r\n",
            r.missed_label, r.rate_label, r.avg_label, r.lost_revenue_label, marker
        ));
    }

    pub fn toggle_panel(&mut self, index: usize) {
        let Some(panel) = self.faq.toggle(index) else {
            return;
        };

        let message = if panel.is_expanded() {
            format!("[-] {}\r\n    {}\r\n", panel.title, panel.body)
        } else {
            format!("[+] {}\r\n", panel.title)
        };

        self.print_message(message);
    }

    pub fn update_size<T>(&mut self, s: (T, T))
    where
        T: Copy,
        u16: TryFrom<T>,
    {
        #[allow(unused_mut)]
        let (mut w, mut h) = match (u16::try_from(s.0), u16::try_from(s.1)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => panic!("Size overflow!"),
        };

        match &self.mode {
            Mode::Win => {}

            _ => {
                #[cfg(feature = "terminal")]
                {
                    (w, h) = self.console.set_size((w, h));
                }
            }
        }

        self.pix.resize(w as usize, h as usize);
        self.scene.rebuild(w as f32, h as f32, &mut self.rng);
    }

    pub fn change_fps_frac(&mut self, milli_hz: u32) {
        let fps = milli_hz as f32 / 1000.0;
        self.milli_hz = milli_hz;
        self.refresh_rate = Duration::from_micros((1_000_000.0 / fps) as u64);
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.rng = SinRng::with_seed(seed);
        let (w, h) = self.scene.viewport();
        self.scene.rebuild(w, h, &mut self.rng);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_freezes_phase() {
        let mut prog = Program::new();
        prog.eval_command(&Command::TogglePause);

        let before = prog.scene.clusters()[0].circles()[0].phase();
        prog.tick();
        prog.tick();
        let after = prog.scene.clusters()[0].circles()[0].phase();

        assert_eq!(before, after);

        prog.eval_command(&Command::TogglePause);
        prog.tick();
        assert!(prog.scene.clusters()[0].circles()[0].phase() > after);
    }

    #[test]
    fn resize_rebuilds_the_grid() {
        let mut prog = Program::new();
        let before = prog.scene.clusters().len();

        prog.update_size((900u16, 600u16));
        let after = prog.scene.clusters().len();

        assert!(after > before);
        assert_eq!(prog.pix.sizeu(), (900, 600));
    }

    #[test]
    fn commands_drive_the_calculator() {
        let mut prog = Program::new();

        let mut cmds = vec![Command::SelectSlider(1), Command::SliderUp];
        prog.eval_commands(&mut cmds);

        assert!(cmds.is_empty());
        assert_eq!(prog.calc.conversion_rate.raw(), "21");
    }

    #[test]
    fn panel_commands_toggle_state() {
        let mut prog = Program::new();

        prog.eval_command(&Command::TogglePanel(2));
        assert!(prog.faq.is_expanded(2));

        prog.eval_command(&Command::TogglePanel(2));
        assert!(!prog.faq.is_expanded(2));

        // out of range degrades silently
        prog.eval_command(&Command::TogglePanel(42));
    }
}
