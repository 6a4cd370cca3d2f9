use log::{error, info};
use medibook::config::CONFIG;
use medibook::models::AppointmentStatus;
use medibook::{AdminService, BookingService, InMemoryStore, MediBookError, Session, Store};

/// Runs a short end-to-end demo against a fresh in-memory store: seed the
/// canonical data, sign in as the demo patient, book and complete a visit,
/// then print the admin overview.
#[tokio::main]
async fn main() -> Result<(), MediBookError> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(CONFIG.log_level.as_str()),
    )
    .init();
    info!("Starting medibook demo with config {:?}", *CONFIG);

    let store = Store::new(InMemoryStore::new());
    if CONFIG.seed_demo_data {
        medibook::initialize_demo_data(&store).await?;
    }

    let mut session = Session::restore(store.clone()).await;
    let patient = session.login("patient@example.com", "patient123").await?;
    info!("Signed in as {} ({})", patient.name, patient.id);

    let booking = BookingService::new(store.clone());
    let doctor = match booking.doctor_profile("doctor-2").await {
        Some(doctor) => doctor,
        None => {
            error!("Seeded doctor-2 is missing, nothing to demo");
            return Ok(());
        }
    };
    let appointment = booking
        .book(&patient, &doctor, "2025-01-10", "14:00", "checkup")
        .await?;
    info!(
        "Booked {} with {} on {} at {}",
        appointment.id, appointment.doctor_name, appointment.date, appointment.time
    );

    booking
        .transition(&appointment.id, AppointmentStatus::Completed)
        .await?;

    let admin = AdminService::new(store);
    let overview = admin.overview().await;
    info!(
        "{} users, {} doctors, {} appointments, revenue {}",
        overview.total_users,
        overview.total_doctors,
        overview.total_appointments,
        overview.total_revenue
    );

    session.logout().await?;
    Ok(())
}
