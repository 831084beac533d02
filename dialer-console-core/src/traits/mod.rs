//! Storage layer abstraction trait definition

mod session_store;

pub use session_store::SessionStore;
