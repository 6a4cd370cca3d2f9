pub mod admin;
pub mod booking;
pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod session;
pub mod storage;

pub use admin::{AdminOverview, AdminService};
pub use booking::{BookingService, DoctorStats};
pub use error::MediBookError;
pub use seed::initialize_demo_data;
pub use session::Session;
pub use storage::Store;
pub use storage::in_memory::InMemoryStore;

#[cfg(test)]
mod tests;
