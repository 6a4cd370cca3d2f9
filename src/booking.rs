use chrono::Utc;
use log::{debug, info, warn};
use uuid::Uuid;

use crate::error::MediBookError;
use crate::models::{Appointment, AppointmentStatus, TimeSlot, User};
use crate::storage::{Store, keys};

/// Summary numbers for one doctor's dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoctorStats {
    pub total_appointments: usize,
    /// Appointments still scheduled for today's date
    pub today_scheduled: usize,
    pub distinct_patients: usize,
    /// Completed appointments times the doctor's own fee
    pub earnings: u64,
}

/// Appointment creation, status transitions and the doctor/patient-scoped
/// read paths behind the dashboards.
pub struct BookingService {
    store: Store,
}

impl BookingService {
    pub fn new(store: Store) -> Self {
        BookingService { store }
    }

    /// A patient's appointments in store insertion order.
    pub async fn appointments_for_patient(&self, patient_id: &str) -> Vec<Appointment> {
        let appointments: Vec<Appointment> = self.store.get(keys::APPOINTMENTS, Vec::new()).await;
        appointments
            .into_iter()
            .filter(|a| a.patient_id == patient_id)
            .collect()
    }

    /// A doctor's appointments, most recently booked first.
    pub async fn appointments_for_doctor(&self, doctor_id: &str) -> Vec<Appointment> {
        let appointments: Vec<Appointment> = self.store.get(keys::APPOINTMENTS, Vec::new()).await;
        let mut scoped: Vec<Appointment> = appointments
            .into_iter()
            .filter(|a| a.doctor_id == doctor_id)
            .collect();
        scoped.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        scoped
    }

    /// Books a new appointment for `patient` with `doctor`. Display names
    /// are denormalized into the record at this point.
    ///
    /// The seeded slot calendar is not consulted here, so nothing prevents
    /// two bookings of the same doctor, date and time.
    pub async fn book(
        &self,
        patient: &User,
        doctor: &User,
        date: &str,
        time: &str,
        reason: &str,
    ) -> Result<Appointment, MediBookError> {
        info!(
            "Booking appointment for patient {} with doctor {}",
            patient.id, doctor.id
        );
        if date.trim().is_empty() {
            return Err(MediBookError::MissingField("date"));
        }
        if time.trim().is_empty() {
            return Err(MediBookError::MissingField("time"));
        }
        if reason.trim().is_empty() {
            return Err(MediBookError::MissingField("reason"));
        }
        if !doctor.is_doctor() {
            warn!("Booking target {} is not a doctor", doctor.id);
            return Err(MediBookError::NotADoctor(doctor.id.clone()));
        }

        let appointment = Appointment {
            id: format!("appt-{}", Uuid::new_v4()),
            patient_id: patient.id.clone(),
            patient_name: patient.name.clone(),
            doctor_id: doctor.id.clone(),
            doctor_name: doctor.name.clone(),
            date: date.to_string(),
            time: time.to_string(),
            status: AppointmentStatus::Scheduled,
            reason: reason.to_string(),
            created_at: Utc::now(),
        };

        let mut appointments: Vec<Appointment> =
            self.store.get(keys::APPOINTMENTS, Vec::new()).await;
        appointments.push(appointment.clone());
        self.store.set(keys::APPOINTMENTS, &appointments).await?;

        debug!("Appointment {} created", appointment.id);
        Ok(appointment)
    }

    /// Rewrites the status of the appointment with `appointment_id` and
    /// persists the collection. An unknown id is a silent no-op; callers are
    /// expected to hold an id from a just-listed collection.
    ///
    /// Nothing stops a rewrite of an already-terminal appointment; the
    /// intended semantics are unsettled, so the behavior is left as is.
    pub async fn transition(
        &self,
        appointment_id: &str,
        status: AppointmentStatus,
    ) -> Result<(), MediBookError> {
        let mut appointments: Vec<Appointment> =
            self.store.get(keys::APPOINTMENTS, Vec::new()).await;
        let mut found = false;
        for appointment in appointments.iter_mut() {
            if appointment.id == appointment_id {
                info!("Appointment {} -> {}", appointment_id, status);
                appointment.status = status;
                found = true;
            }
        }
        if !found {
            debug!("Transition of unknown appointment {} ignored", appointment_id);
            return Ok(());
        }
        self.store.set(keys::APPOINTMENTS, &appointments).await
    }

    /// The user with this id, provided it holds the doctor role. Absent when
    /// the account was never a doctor or has been deleted.
    pub async fn doctor_profile(&self, doctor_id: &str) -> Option<User> {
        let users: Vec<User> = self.store.get(keys::USERS, Vec::new()).await;
        users.into_iter().find(|u| u.id == doctor_id && u.is_doctor())
    }

    /// All doctors, in store order.
    pub async fn doctors(&self) -> Vec<User> {
        let users: Vec<User> = self.store.get(keys::USERS, Vec::new()).await;
        users.into_iter().filter(|u| u.is_doctor()).collect()
    }

    /// Case-insensitive search over doctor name and specialization, with an
    /// optional exact specialization filter.
    pub async fn search_doctors(&self, term: &str, specialization: Option<&str>) -> Vec<User> {
        let term = term.to_lowercase();
        self.doctors()
            .await
            .into_iter()
            .filter(|u| {
                let profile = match u.doctor_profile() {
                    Some(profile) => profile,
                    None => return false,
                };
                let matches_term = term.is_empty()
                    || u.name.to_lowercase().contains(&term)
                    || profile.specialization.to_lowercase().contains(&term);
                let matches_spec = specialization
                    .map(|s| profile.specialization == s)
                    .unwrap_or(true);
                matches_term && matches_spec
            })
            .collect()
    }

    /// Distinct doctor specializations, in first-seen order.
    pub async fn specializations(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for doctor in self.doctors().await {
            if let Some(profile) = doctor.doctor_profile() {
                if !seen.contains(&profile.specialization) {
                    seen.push(profile.specialization.clone());
                }
            }
        }
        seen
    }

    /// The seeded slot calendar for one doctor.
    pub async fn slots_for_doctor(&self, doctor_id: &str) -> Vec<TimeSlot> {
        let slots: Vec<TimeSlot> = self.store.get(keys::TIME_SLOTS, Vec::new()).await;
        slots
            .into_iter()
            .filter(|s| s.doctor_id == doctor_id)
            .collect()
    }

    /// Dashboard numbers for one doctor. Earnings are the completed count
    /// times the doctor's own fee; a missing doctor account yields zero.
    pub async fn doctor_stats(&self, doctor_id: &str) -> DoctorStats {
        let appointments = self.appointments_for_doctor(doctor_id).await;
        let fee = self
            .doctor_profile(doctor_id)
            .await
            .and_then(|u| u.doctor_profile().map(|p| p.fees))
            .unwrap_or(0);

        let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        let today_scheduled = appointments
            .iter()
            .filter(|a| a.date == today && a.status == AppointmentStatus::Scheduled)
            .count();
        let completed = appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Completed)
            .count();
        let mut patients: Vec<&str> = appointments.iter().map(|a| a.patient_id.as_str()).collect();
        patients.sort_unstable();
        patients.dedup();

        DoctorStats {
            total_appointments: appointments.len(),
            today_scheduled,
            distinct_patients: patients.len(),
            earnings: completed as u64 * fee,
        }
    }
}
