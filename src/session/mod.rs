pub mod commands;
pub mod controller;
pub mod error;
pub mod state;

pub use controller::SessionController;
pub use error::SessionError;
pub use state::{SessionSnapshot, SessionStatus};
