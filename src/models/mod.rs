pub mod appointment;
pub mod time_slot;
pub mod user;

pub use appointment::{Appointment, AppointmentStatus};
pub use time_slot::TimeSlot;
pub use user::{DoctorProfile, Role, User, UserKind};
