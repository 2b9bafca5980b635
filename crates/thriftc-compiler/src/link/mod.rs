//! Linking: replacing name references with handles.
//!
//! Runs after every definition of a module has been compiled and the scope
//! has been assembled, so forward and mutually recursive references always
//! resolve. Link failures are only ever unresolved names.

mod error;
mod linker;


pub use error::LinkError;
pub use linker::{Linker, link};
