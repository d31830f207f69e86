//! # Event Bus Module
//!
//! Change notification between the plot store and its observers.
//!
//! ## Overview
//!
//! The plot store publishes one [`CanvasEvent`] after every committed
//! mutation. Observers either register a synchronous handler, which runs
//! before `publish` returns and therefore always sees the post-mutation
//! state, or take a broadcast receiver for async consumption.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use polykit_core::event_bus::{CanvasEvent, EventBus, EventCategory, EventFilter};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::History]),
//!     |event| println!("history moved: {}", event.description()),
//! );
//!
//! bus.publish(CanvasEvent::Cleared).ok();
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
