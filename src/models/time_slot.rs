use serde::{Deserialize, Serialize};

/// One bookable hour owned by a single doctor.
///
/// Slots are written once by the seed initializer. The booking workflow
/// reads them for display but does not mark them booked; `is_booked` is
/// informational seed data.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: String,
    pub doctor_id: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// 24h clock, `HH:MM`
    pub start_time: String,
    pub end_time: String,
    pub is_booked: bool,
}
