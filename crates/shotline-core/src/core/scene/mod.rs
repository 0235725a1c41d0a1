//! The versioned scene store and the work units it serves.

pub mod errors;
pub mod store;
pub mod units;

pub use errors::{ErrorKind, StoreError, StoreResult};
pub use store::{EditVersion, OpenTarget, PublishPlan, SceneStore};
pub use units::UnitCatalog;
