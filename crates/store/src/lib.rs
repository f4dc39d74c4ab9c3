pub mod error;
pub mod event;
pub mod models;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use event::{ChangeKind, StoreEvent};
pub use store::{Entity, Store, Txn, new_id};
