//! # PolyKit Core
//!
//! Core types shared by the PolyKit crates: the error taxonomy used by the
//! plot model and store, the change-notification event bus the store
//! publishes to, and the default constants of the editor.

pub mod constants;
pub mod error;
pub mod event_bus;

pub use error::{CanvasError, HistoryDirection};

pub use event_bus::{
    CanvasEvent, EventBus, EventBusError, EventCategory, EventFilter,
    SubscriptionId,
};
