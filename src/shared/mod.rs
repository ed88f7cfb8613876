pub mod theme;
pub mod types;
