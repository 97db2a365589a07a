pub mod add;
pub mod calculator;
pub mod log;
pub mod view;
