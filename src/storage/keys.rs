//! Persisted-state key layout. Key names are part of the stored format and
//! must not change between releases.

/// Array of all users; doctor records carry the flattened profile fields.
pub const USERS: &str = "users";

/// Array of seeded per-doctor time slots.
pub const TIME_SLOTS: &str = "timeSlots";

/// Array of appointments, in booking order.
pub const APPOINTMENTS: &str = "appointments";

/// The single authenticated user, absent when logged out.
pub const CURRENT_USER: &str = "currentUser";
