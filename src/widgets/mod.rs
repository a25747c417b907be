pub mod accordion;
pub mod calculator;
