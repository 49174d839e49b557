pub mod document;
pub mod workspace;

pub use document::{Document, NewDocument};
pub use workspace::{NewWorkspace, Workspace};
