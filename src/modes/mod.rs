#[cfg(feature = "terminal")]
pub mod console_mode;

pub mod windowed_mode;

#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Mode {
    Win,
    ConBlock,
}

impl Mode {
    pub fn default() -> Mode {
        Mode::Win
    }

    pub fn is_con(&self) -> bool {
        matches!(self, Mode::ConBlock)
    }
}
