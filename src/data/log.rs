use crate::modes::Mode;

macro_rules! eprintln_red {
    ($arg:tt) => {
        eprintln!("\x1B[31;1m{}\x1B[0m", $arg);
    };
}

macro_rules! format_red {
    ($arg:tt) => {
        format!("\x1B[31;1m{}\x1B[0m", $arg)
    };
}

pub(crate) use eprintln_red;
pub(crate) use format_red;

/// Terminal mode owns the alternate screen, so plain prints have to
/// step outside of it for a moment to stay visible.
pub fn write_to_stdout(string: &str, mode: Mode) {
    use std::io::Write;

    if mode.is_con() {
        #[cfg(feature = "terminal")]
        {
            use crossterm::{
                style::Print,
                terminal::{EnterAlternateScreen, LeaveAlternateScreen},
            };

            let _ = crossterm::queue!(
                std::io::stdout(),
                LeaveAlternateScreen,
                Print(string),
                EnterAlternateScreen
            );
        }

        return;
    }

    print!("{}", string);
    let _ = std::io::stdout().flush();
}
