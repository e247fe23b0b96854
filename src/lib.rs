pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod select;
pub mod storage;
pub mod tmdb;
