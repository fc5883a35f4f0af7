//! Controllers - orchestration between domain state and collaborators.

pub mod session;

pub use session::SessionController;
