pub mod complaint;
pub mod error;
pub mod export;
pub mod fee;
pub mod leave;
pub mod notification;
pub mod room;
pub mod student;

pub use complaint::ComplaintService;
pub use error::{WorkflowError, WorkflowResult};
pub use fee::FeeService;
pub use leave::LeaveService;
pub use notification::NotificationService;
pub use room::RoomService;
pub use student::StudentService;
