//! Top-level application state.
//!
//! Owns the splitter, the flow geometry standing in for a rendering host,
//! the document listener table, the event bus and the card store, and
//! routes host events and explorer actions between them.

mod cards;
mod core;
mod dispatch;
mod event_handler;
mod reports;
mod resize_drag;

#[cfg(test)]
mod tests;

pub use core::SashApp;
