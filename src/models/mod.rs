pub mod duration;
pub mod overnight;
pub mod shift;
