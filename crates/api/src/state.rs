use hostelhub_config::Settings;
use hostelhub_services::{
    ComplaintService, FeeService, LeaveService, NotificationService, RoomService, StudentService,
};
use hostelhub_store::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub store: Arc<Store>,
    pub students: Arc<StudentService>,
    pub rooms: Arc<RoomService>,
    pub complaints: Arc<ComplaintService>,
    pub leaves: Arc<LeaveService>,
    pub fees: Arc<FeeService>,
    pub notifications: Arc<NotificationService>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let store = Arc::new(Store::new());
        let students = Arc::new(StudentService::new(store.clone()));
        let rooms = Arc::new(RoomService::new(store.clone()));
        let complaints = Arc::new(ComplaintService::new(store.clone()));
        let leaves = Arc::new(LeaveService::new(store.clone()));
        let fees = Arc::new(FeeService::new(store.clone()));
        let notifications = Arc::new(NotificationService::new(store.clone()));

        Self {
            settings,
            store,
            students,
            rooms,
            complaints,
            leaves,
            fees,
            notifications,
        }
    }
}
