pub mod catalog;
pub mod outfit;
