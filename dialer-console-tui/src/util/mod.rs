//! Terminal plumbing

mod terminal;

pub use terminal::{Term, init_terminal, restore_terminal};
