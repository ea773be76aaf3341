//! Scan lifecycle events for reporting collaborators.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::ScanEventHandler;
pub use types::{RuleFaultEvent, ScanCompleteEvent, ScanStartedEvent};
