pub mod answers;
pub mod catalog;
pub mod completion;
pub mod dashboard;
pub mod error;
pub mod store;
pub mod tracker;
pub mod validation;
pub mod weekly;

pub mod types;

pub use crate::catalog::Catalog;
pub use crate::error::TrackerError;
pub use crate::store::Store;
pub use crate::tracker::{RequestContext, Tracker};
