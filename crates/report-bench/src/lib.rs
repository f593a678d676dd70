pub mod cli;
pub mod data;
pub mod error;
pub mod reader;
pub mod results;
pub mod runner;
pub mod schema;
