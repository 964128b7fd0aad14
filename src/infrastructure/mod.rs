// Infrastructure layer module
// Contains the database adapter and startup connectivity probe

pub mod db;
pub mod repositories;
