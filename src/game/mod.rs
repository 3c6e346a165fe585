pub mod angle;
pub mod arena;
pub mod collision;
pub mod config;
pub mod constants;
pub mod growth;
pub mod math;
pub mod snake;
pub mod types;
