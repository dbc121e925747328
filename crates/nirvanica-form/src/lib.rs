//! # nirvanica-form
//!
//! The booking form controller: a headless state machine covering guest
//! counters, room selection, date rules, the live price summary, batch
//! validation, and the preview → confirm flow. A rendering layer drives
//! it through discrete actions and reads derived view state back; the
//! original page's DOM wiring is exactly that rendering layer and is out
//! of scope here.

pub mod controller;
pub mod dates;
pub mod flow;
pub mod guests;
pub mod rooms;
pub mod stepper;
pub mod summary;
pub mod validation;

pub use controller::BookingForm;
pub use flow::FlowStage;
pub use rooms::RoomAdjust;
