pub mod app;
pub mod board;
pub mod config;
pub mod paths;
