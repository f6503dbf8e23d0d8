//! Terminal front end: menu loop, prompts and table rendering.

pub mod console;
pub mod controller;
pub mod errors;
pub mod menu;
pub mod render;

pub use console::{Console, ConsoleError, InputError};
pub use controller::Controller;
pub use menu::{MenuChoice, MenuOption};
