pub mod app;
pub mod config;
pub mod console;
pub mod display;
pub mod input;
pub mod logging;
pub mod session;

pub use config::Config;
pub use console::Console;
pub use session::{Session, SessionEnd};
