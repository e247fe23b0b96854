//! 映画メタデータAPI連携

pub mod tmdb;
