use log::info;

use crate::error::MediBookError;
use crate::models::{Appointment, AppointmentStatus, Role, User};
use crate::storage::{Store, keys};

/// System-wide counts and revenue for the admin dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminOverview {
    pub total_users: usize,
    pub total_patients: usize,
    pub total_doctors: usize,
    pub total_appointments: usize,
    /// Sum of the fee of each completed appointment's doctor
    pub total_revenue: u64,
}

/// Read-only derived statistics plus administrative hard deletes. Role
/// enforcement (for instance, refusing to delete admin accounts) lives at
/// the presentation layer, not here.
pub struct AdminService {
    store: Store,
}

impl AdminService {
    pub fn new(store: Store) -> Self {
        AdminService { store }
    }

    pub async fn users(&self) -> Vec<User> {
        self.store.get(keys::USERS, Vec::new()).await
    }

    pub async fn appointments(&self) -> Vec<Appointment> {
        self.store.get(keys::APPOINTMENTS, Vec::new()).await
    }

    /// Counts and revenue derived from the current collections. A completed
    /// appointment whose doctor no longer exists contributes zero revenue.
    pub async fn overview(&self) -> AdminOverview {
        let users = self.users().await;
        let appointments = self.appointments().await;

        let total_patients = users
            .iter()
            .filter(|u| u.role() == Role::Patient)
            .count();
        let doctors: Vec<&User> = users.iter().filter(|u| u.is_doctor()).collect();

        let total_revenue = appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Completed)
            .map(|a| {
                doctors
                    .iter()
                    .find(|d| d.id == a.doctor_id)
                    .and_then(|d| d.doctor_profile().map(|p| p.fees))
                    .unwrap_or(0)
            })
            .sum();

        AdminOverview {
            total_users: users.len(),
            total_patients,
            total_doctors: doctors.len(),
            total_appointments: appointments.len(),
            total_revenue,
        }
    }

    /// Removes the user unconditionally. Appointments referencing the user
    /// are left in place; orphaned references are an accepted state.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), MediBookError> {
        info!("Deleting user {}", user_id);
        let users = self.users().await;
        let remaining: Vec<User> = users.into_iter().filter(|u| u.id != user_id).collect();
        self.store.set(keys::USERS, &remaining).await
    }

    /// Removes the appointment unconditionally.
    pub async fn delete_appointment(&self, appointment_id: &str) -> Result<(), MediBookError> {
        info!("Deleting appointment {}", appointment_id);
        let appointments = self.appointments().await;
        let remaining: Vec<Appointment> = appointments
            .into_iter()
            .filter(|a| a.id != appointment_id)
            .collect();
        self.store.set(keys::APPOINTMENTS, &remaining).await
    }
}
