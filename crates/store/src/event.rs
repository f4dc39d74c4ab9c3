use serde::Serialize;

/// A committed change to one collection, delivered to subscribers of that
/// collection name.
#[derive(Debug, Clone, Serialize)]
pub struct StoreEvent {
    pub collection: &'static str,
    pub change: ChangeKind,
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Added,
    Updated,
    Deleted,
}
