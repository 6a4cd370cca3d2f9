use chrono::{Days, Utc};

use crate::booking::BookingService;
use crate::models::{Appointment, AppointmentStatus, Role, TimeSlot, User};
use crate::seed::initialize_demo_data;
use crate::storage::keys;
use crate::tests::seeded_store;

#[tokio::test]
async fn test_seed_is_idempotent() {
    let store = seeded_store().await;
    let users: Vec<User> = store.get(keys::USERS, Vec::new()).await;
    let slots: Vec<TimeSlot> = store.get(keys::TIME_SLOTS, Vec::new()).await;
    let appointments: Vec<Appointment> = store.get(keys::APPOINTMENTS, Vec::new()).await;

    initialize_demo_data(&store).await.unwrap();

    let users_again: Vec<User> = store.get(keys::USERS, Vec::new()).await;
    let slots_again: Vec<TimeSlot> = store.get(keys::TIME_SLOTS, Vec::new()).await;
    let appointments_again: Vec<Appointment> = store.get(keys::APPOINTMENTS, Vec::new()).await;
    assert_eq!(users_again, users);
    assert_eq!(slots_again, slots);
    assert_eq!(appointments_again, appointments);
}

#[tokio::test]
async fn test_seed_populates_canonical_users() {
    let store = seeded_store().await;
    let users: Vec<User> = store.get(keys::USERS, Vec::new()).await;

    assert_eq!(users.len(), 6);
    assert_eq!(users.iter().filter(|u| u.role() == Role::Admin).count(), 1);
    assert_eq!(users.iter().filter(|u| u.role() == Role::Patient).count(), 1);
    assert_eq!(users.iter().filter(|u| u.is_doctor()).count(), 4);

    let dermatologist = users.iter().find(|u| u.id == "doctor-2").unwrap();
    assert_eq!(dermatologist.name, "Dr. Michael Johnson");
    let profile = dermatologist.doctor_profile().unwrap();
    assert_eq!(profile.specialization, "Dermatology");
    assert_eq!(profile.fees, 120);
}

#[tokio::test]
async fn test_seed_generates_weekly_slot_calendar() {
    let store = seeded_store().await;
    let slots: Vec<TimeSlot> = store.get(keys::TIME_SLOTS, Vec::new()).await;

    // 4 doctors x 7 days x 7 slots per day
    assert_eq!(slots.len(), 4 * 7 * 7);
    assert!(slots.iter().all(|s| !s.is_booked));

    let tomorrow = (Utc::now().date_naive() + Days::new(1))
        .format("%Y-%m-%d")
        .to_string();
    let first = slots
        .iter()
        .find(|s| s.doctor_id == "doctor-1" && s.date == tomorrow && s.start_time == "09:00")
        .unwrap();
    assert_eq!(first.end_time, "10:00");
    assert_eq!(first.id, format!("slot-doctor-1-{}-09:00", tomorrow));
}

#[tokio::test]
async fn test_seeded_appointment_is_visible_to_its_doctor() {
    let store = seeded_store().await;
    let booking = BookingService::new(store);

    let appointments = booking.appointments_for_doctor("doctor-1").await;
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].id, "appt-1");
    assert_eq!(appointments[0].status, AppointmentStatus::Scheduled);
    assert_eq!(appointments[0].patient_name, "John Doe");
}
