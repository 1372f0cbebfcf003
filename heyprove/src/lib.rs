pub mod battery;
mod cli;
mod error;
pub mod parse;

pub use cli::Cli;
pub use error::Error;
