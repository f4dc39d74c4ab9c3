use dashmap::DashMap;
use parking_lot::RwLock;
use tokio::sync::broadcast;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::event::{ChangeKind, StoreEvent};
use crate::models::{
    Complaint, FeeRecord, FoodFeedback, HealthRecord, LeaveApplication, Notification, Room,
    StaffMember, Student,
};

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Generates a fresh record id.
pub fn new_id() -> String {
    nanoid::nanoid!(12)
}

/// Binds a record type to its collection slot in the registry.
pub trait Entity: Clone + Send + Sync + 'static {
    const COLLECTION: &'static str;

    fn id(&self) -> &str;
    fn slot(collections: &Collections) -> &Vec<Self>;
    fn slot_mut(collections: &mut Collections) -> &mut Vec<Self>;
}

/// Every collection the store owns. Each keeps insertion order.
#[derive(Debug, Default)]
pub struct Collections {
    students: Vec<Student>,
    rooms: Vec<Room>,
    complaints: Vec<Complaint>,
    leave_applications: Vec<LeaveApplication>,
    notifications: Vec<Notification>,
    staff: Vec<StaffMember>,
    fee_records: Vec<FeeRecord>,
    health_records: Vec<HealthRecord>,
    food_feedback: Vec<FoodFeedback>,
}

/// Process-wide registry of every collection, guarded by a single lock.
///
/// All mutation funnels through one write acquisition. Change events are
/// published after the write lands and before the lock is released, so a
/// subscriber that re-reads on notification always observes the commit.
/// Reads hand out clones; the only mutation path is `update`'s closure.
pub struct Store {
    collections: RwLock<Collections>,
    subscribers: DashMap<&'static str, broadcast::Sender<StoreEvent>>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(Collections::default()),
            subscribers: DashMap::new(),
        }
    }

    /// Snapshot of a whole collection, in insertion order.
    pub fn all<T: Entity>(&self) -> Vec<T> {
        T::slot(&self.collections.read()).clone()
    }

    pub fn find<T: Entity>(&self, id: &str) -> Option<T> {
        T::slot(&self.collections.read())
            .iter()
            .find(|r| r.id() == id)
            .cloned()
    }

    pub fn get<T: Entity>(&self, id: &str) -> StoreResult<T> {
        self.find(id).ok_or_else(|| StoreError::NotFound {
            collection: T::COLLECTION,
            id: id.to_string(),
        })
    }

    /// Appends one record. Ids must be unique within the collection.
    pub fn add<T: Entity>(&self, record: T) -> StoreResult<()> {
        self.with(|tx| tx.add(record))
    }

    /// Finds the record by id and applies `apply` to it in place.
    /// Returns the updated record.
    pub fn update<T: Entity>(&self, id: &str, apply: impl FnOnce(&mut T)) -> StoreResult<T> {
        self.with(|tx| tx.update(id, apply))
    }

    pub fn remove<T: Entity>(&self, id: &str) -> StoreResult<()> {
        self.with(|tx| tx.remove::<T>(id))
    }

    /// Runs `f` under one write acquisition. Writes to several collections
    /// inside `f` commit together and their events are delivered together.
    pub fn with<R>(&self, f: impl FnOnce(&mut Txn<'_>) -> R) -> R {
        let mut guard = self.collections.write();
        let mut txn = Txn {
            collections: &mut *guard,
            pending: Vec::new(),
        };
        let out = f(&mut txn);
        let Txn { pending, .. } = txn;
        for event in pending {
            self.publish(event);
        }
        out
    }

    /// Registers interest in one collection name. The receiver sees every
    /// change committed after this call.
    pub fn subscribe(&self, collection: &'static str) -> broadcast::Receiver<StoreEvent> {
        self.subscribers
            .entry(collection)
            .or_insert_with(|| broadcast::channel(EVENT_CHANNEL_CAPACITY).0)
            .subscribe()
    }

    fn publish(&self, event: StoreEvent) {
        debug!(
            collection = event.collection,
            id = %event.id,
            change = ?event.change,
            "store change"
        );
        if let Some(sender) = self.subscribers.get(event.collection) {
            // Send only fails when every receiver is gone; nothing to do then.
            let _ = sender.send(event);
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// A write transaction over the registry. Mutations apply in place; their
/// change events are queued and delivered when the transaction ends.
pub struct Txn<'a> {
    collections: &'a mut Collections,
    pending: Vec<StoreEvent>,
}

impl Txn<'_> {
    pub fn all<T: Entity>(&self) -> Vec<T> {
        T::slot(self.collections).clone()
    }

    pub fn find<T: Entity>(&self, id: &str) -> Option<&T> {
        T::slot(self.collections).iter().find(|r| r.id() == id)
    }

    pub fn get<T: Entity>(&self, id: &str) -> StoreResult<&T> {
        self.find(id).ok_or_else(|| StoreError::NotFound {
            collection: T::COLLECTION,
            id: id.to_string(),
        })
    }

    pub fn add<T: Entity>(&mut self, record: T) -> StoreResult<()> {
        let id = record.id().to_string();
        let slot = T::slot_mut(self.collections);
        if slot.iter().any(|r| r.id() == id) {
            return Err(StoreError::DuplicateId {
                collection: T::COLLECTION,
                id,
            });
        }
        slot.push(record);
        self.pending.push(StoreEvent {
            collection: T::COLLECTION,
            change: ChangeKind::Added,
            id,
        });
        Ok(())
    }

    pub fn update<T: Entity>(&mut self, id: &str, apply: impl FnOnce(&mut T)) -> StoreResult<T> {
        let slot = T::slot_mut(self.collections);
        let Some(record) = slot.iter_mut().find(|r| r.id() == id) else {
            return Err(StoreError::NotFound {
                collection: T::COLLECTION,
                id: id.to_string(),
            });
        };
        apply(record);
        let updated = record.clone();
        self.pending.push(StoreEvent {
            collection: T::COLLECTION,
            change: ChangeKind::Updated,
            id: updated.id().to_string(),
        });
        Ok(updated)
    }

    /// Filter-and-reassign removal by id.
    pub fn remove<T: Entity>(&mut self, id: &str) -> StoreResult<()> {
        let slot = T::slot_mut(self.collections);
        let before = slot.len();
        slot.retain(|r| r.id() != id);
        if slot.len() == before {
            return Err(StoreError::NotFound {
                collection: T::COLLECTION,
                id: id.to_string(),
            });
        }
        self.pending.push(StoreEvent {
            collection: T::COLLECTION,
            change: ChangeKind::Deleted,
            id: id.to_string(),
        });
        Ok(())
    }
}

impl Entity for Student {
    const COLLECTION: &'static str = "students";

    fn id(&self) -> &str {
        &self.id
    }
    fn slot(collections: &Collections) -> &Vec<Self> {
        &collections.students
    }
    fn slot_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.students
    }
}

impl Entity for Room {
    const COLLECTION: &'static str = "rooms";

    fn id(&self) -> &str {
        &self.id
    }
    fn slot(collections: &Collections) -> &Vec<Self> {
        &collections.rooms
    }
    fn slot_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.rooms
    }
}

impl Entity for Complaint {
    const COLLECTION: &'static str = "complaints";

    fn id(&self) -> &str {
        &self.id
    }
    fn slot(collections: &Collections) -> &Vec<Self> {
        &collections.complaints
    }
    fn slot_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.complaints
    }
}

impl Entity for LeaveApplication {
    const COLLECTION: &'static str = "leave_applications";

    fn id(&self) -> &str {
        &self.id
    }
    fn slot(collections: &Collections) -> &Vec<Self> {
        &collections.leave_applications
    }
    fn slot_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.leave_applications
    }
}

impl Entity for Notification {
    const COLLECTION: &'static str = "notifications";

    fn id(&self) -> &str {
        &self.id
    }
    fn slot(collections: &Collections) -> &Vec<Self> {
        &collections.notifications
    }
    fn slot_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.notifications
    }
}

impl Entity for StaffMember {
    const COLLECTION: &'static str = "staff";

    fn id(&self) -> &str {
        &self.id
    }
    fn slot(collections: &Collections) -> &Vec<Self> {
        &collections.staff
    }
    fn slot_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.staff
    }
}

impl Entity for FeeRecord {
    const COLLECTION: &'static str = "fee_records";

    fn id(&self) -> &str {
        &self.id
    }
    fn slot(collections: &Collections) -> &Vec<Self> {
        &collections.fee_records
    }
    fn slot_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.fee_records
    }
}

impl Entity for HealthRecord {
    const COLLECTION: &'static str = "health_records";

    fn id(&self) -> &str {
        &self.id
    }
    fn slot(collections: &Collections) -> &Vec<Self> {
        &collections.health_records
    }
    fn slot_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.health_records
    }
}

impl Entity for FoodFeedback {
    const COLLECTION: &'static str = "food_feedback";

    fn id(&self) -> &str {
        &self.id
    }
    fn slot(collections: &Collections) -> &Vec<Self> {
        &collections.food_feedback
    }
    fn slot_mut(collections: &mut Collections) -> &mut Vec<Self> {
        &mut collections.food_feedback
    }
}
