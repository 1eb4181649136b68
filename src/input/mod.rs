pub mod handler;

pub use handler::{map_key, Command};
