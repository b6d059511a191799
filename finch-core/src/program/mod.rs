//! Command lists and the authoring session that builds them

pub mod list;
pub mod session;

pub use list::CommandList;
pub use session::{AuthoringError, Entered, Session};
