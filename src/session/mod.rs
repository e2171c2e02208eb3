//! Presentation-adapter boundary.
//!
//! A front end owns a `Session`, forwards taps to it, and polls it from its
//! event loop. The session remembers when the last mismatched pair should
//! be turned back over and does so on the first poll after that deadline.
//!
//! Time is always passed in by the caller, so the session never blocks or
//! spawns anything and behaves identically under test.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use memory_match::core::MemoryConfig;
//! use memory_match::session::Session;
//!
//! let mut session = Session::new(MemoryConfig::default().with_seed(3)).unwrap();
//! let start = Instant::now();
//!
//! let first = session.snapshot().cards[0].id;
//! session.tap(first, start);
//!
//! // Nothing scheduled after a single tap
//! assert!(session.deadline().is_none());
//! assert!(!session.poll(start + Duration::from_secs(1)));
//! ```

mod scheduler;
#[allow(clippy::module_inception)]
mod session;

pub use scheduler::FlipBackTimer;
pub use session::Session;
