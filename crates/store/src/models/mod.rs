pub mod complaint;
pub mod fee_record;
pub mod food_feedback;
pub mod health_record;
pub mod leave_application;
pub mod notification;
pub mod role;
pub mod room;
pub mod staff;
pub mod student;

pub use complaint::{Complaint, ComplaintCategory, ComplaintStatus};
pub use fee_record::{FeeRecord, FeeStatus};
pub use food_feedback::{FoodFeedback, Meal};
pub use health_record::HealthRecord;
pub use leave_application::{LeaveApplication, LeaveStatus, LeaveType};
pub use notification::{Notification, NotificationPriority, NotificationType};
pub use role::Role;
pub use room::{Room, RoomStatus};
pub use staff::{Shift, StaffDesignation, StaffMember};
pub use student::Student;
