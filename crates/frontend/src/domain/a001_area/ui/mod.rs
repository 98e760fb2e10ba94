pub mod details;
pub mod filter;
pub mod grid;
pub mod map;
