//! Canonical demo data, written once per fresh store.

use chrono::{Days, Utc};
use log::{debug, info};

use crate::error::MediBookError;
use crate::models::{
    Appointment, AppointmentStatus, DoctorProfile, TimeSlot, User, UserKind,
};
use crate::storage::{Store, keys};

const MORNING_SLOTS: [&str; 3] = ["09:00", "10:00", "11:00"];
const AFTERNOON_SLOTS: [&str; 4] = ["14:00", "15:00", "16:00", "17:00"];
const SLOT_DAYS: u64 = 7;

/// Populates the store with the demo users, the per-doctor slot calendar for
/// the next seven days and one scheduled appointment. Idempotent: when the
/// `users` key is already present this performs no writes, so every fresh
/// environment starts from the same state.
pub async fn initialize_demo_data(store: &Store) -> Result<(), MediBookError> {
    if store.contains(keys::USERS).await? {
        debug!("Demo data already present, skipping seed");
        return Ok(());
    }

    info!("Seeding demo data");
    let users = demo_users();
    let time_slots = demo_time_slots(&users);
    let appointments = demo_appointments();

    store.set(keys::USERS, &users).await?;
    store.set(keys::TIME_SLOTS, &time_slots).await?;
    store.set(keys::APPOINTMENTS, &appointments).await?;
    Ok(())
}

fn demo_users() -> Vec<User> {
    let now = Utc::now();
    let mut users = vec![
        User {
            id: "admin-1".to_string(),
            email: "admin@hospital.com".to_string(),
            password: "admin123".to_string(),
            name: "Admin User".to_string(),
            phone: None,
            created_at: now,
            kind: UserKind::Admin,
        },
        User {
            id: "patient-1".to_string(),
            email: "patient@example.com".to_string(),
            password: "patient123".to_string(),
            name: "John Doe".to_string(),
            phone: Some("123-456-7890".to_string()),
            created_at: now,
            kind: UserKind::Patient,
        },
    ];

    users.push(demo_doctor(
        "doctor-1",
        "dr.smith@hospital.com",
        "Dr. Sarah Smith",
        "123-456-7891",
        DoctorProfile {
            specialization: "Cardiology".to_string(),
            experience: 15,
            qualification: "MD, FACC".to_string(),
            rating: 4.8,
            fees: 150,
            about: "Experienced cardiologist specializing in preventive cardiology and heart disease management.".to_string(),
            availability: Vec::new(),
        },
    ));
    users.push(demo_doctor(
        "doctor-2",
        "dr.johnson@hospital.com",
        "Dr. Michael Johnson",
        "123-456-7892",
        DoctorProfile {
            specialization: "Dermatology".to_string(),
            experience: 10,
            qualification: "MD, FAAD".to_string(),
            rating: 4.6,
            fees: 120,
            about: "Specialized in skin conditions, cosmetic dermatology, and skin cancer prevention.".to_string(),
            availability: Vec::new(),
        },
    ));
    users.push(demo_doctor(
        "doctor-3",
        "dr.williams@hospital.com",
        "Dr. Emily Williams",
        "123-456-7893",
        DoctorProfile {
            specialization: "Pediatrics".to_string(),
            experience: 12,
            qualification: "MD, FAAP".to_string(),
            rating: 4.9,
            fees: 100,
            about: "Compassionate pediatrician dedicated to child health and development.".to_string(),
            availability: Vec::new(),
        },
    ));
    users.push(demo_doctor(
        "doctor-4",
        "dr.brown@hospital.com",
        "Dr. Robert Brown",
        "123-456-7894",
        DoctorProfile {
            specialization: "Orthopedics".to_string(),
            experience: 18,
            qualification: "MD, FAAOS".to_string(),
            rating: 4.7,
            fees: 180,
            about: "Expert in joint replacement surgery and sports medicine.".to_string(),
            availability: Vec::new(),
        },
    ));

    users
}

fn demo_doctor(id: &str, email: &str, name: &str, phone: &str, profile: DoctorProfile) -> User {
    User {
        id: id.to_string(),
        email: email.to_string(),
        password: "doctor123".to_string(),
        name: name.to_string(),
        phone: Some(phone.to_string()),
        created_at: Utc::now(),
        kind: UserKind::Doctor(profile),
    }
}

/// One slot per doctor, day (tomorrow through day seven) and start time.
fn demo_time_slots(users: &[User]) -> Vec<TimeSlot> {
    let today = Utc::now().date_naive();
    let mut slots = Vec::new();
    for doctor in users.iter().filter(|u| u.is_doctor()) {
        for day in 1..=SLOT_DAYS {
            let date = (today + Days::new(day)).format("%Y-%m-%d").to_string();
            for start in MORNING_SLOTS.iter().chain(AFTERNOON_SLOTS.iter()) {
                slots.push(TimeSlot {
                    id: format!("slot-{}-{}-{}", doctor.id, date, start),
                    doctor_id: doctor.id.clone(),
                    date: date.clone(),
                    start_time: start.to_string(),
                    end_time: slot_end(start),
                    is_booked: false,
                });
            }
        }
    }
    slots
}

fn slot_end(start: &str) -> String {
    let hour: u32 = start
        .split(':')
        .next()
        .and_then(|h| h.parse().ok())
        .unwrap_or(0);
    format!("{}:00", hour + 1)
}

fn demo_appointments() -> Vec<Appointment> {
    let now = Utc::now();
    let tomorrow = (now.date_naive() + Days::new(1)).format("%Y-%m-%d").to_string();
    vec![Appointment {
        id: "appt-1".to_string(),
        patient_id: "patient-1".to_string(),
        patient_name: "John Doe".to_string(),
        doctor_id: "doctor-1".to_string(),
        doctor_name: "Dr. Sarah Smith".to_string(),
        date: tomorrow,
        time: "10:00".to_string(),
        status: AppointmentStatus::Scheduled,
        reason: "Regular checkup".to_string(),
        created_at: now,
    }]
}
