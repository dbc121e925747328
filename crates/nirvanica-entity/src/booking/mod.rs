//! Booking entity: record, status, room selection, and partial updates.

pub mod model;
pub mod room;
pub mod status;
pub mod update;

pub use model::{BookingDraft, BookingRecord};
pub use room::RoomSelection;
pub use status::BookingStatus;
pub use update::BookingUpdate;
