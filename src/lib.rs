pub mod constants;
pub mod game;
pub mod input;
pub mod ui;
