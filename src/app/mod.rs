//! Application layer coordinating filter state, events and evaluation.
//!
//! This module sits between the external event source and the query engine.
//! It owns the mutable [`FilterState`] and turns each incoming [`Event`] into
//! one update plus one evaluation.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Event → handle_event → FilterState update → evaluate → QueryResult
//! ```
//!
//! # Modules
//!
//! - [`handler`]: Event type and dispatch
//! - [`modes`]: Sort field and direction selectors
//! - [`session`]: Catalog and state owner for one user
//! - [`state`]: Filter criteria and their update operations
//!
//! # Example
//!
//! ```rust
//! use vitrine::{handle_event, Catalog, CategoryRules, Event, Session};
//!
//! let mut session = Session::new(Catalog::ingest(vec![], &CategoryRules::default()), 6);
//! let result = handle_event(&mut session, &Event::PageChanged { page: 4 });
//! assert_eq!(result.current_page, 1);
//! ```

pub mod handler;
pub mod modes;
pub mod session;
pub mod state;

pub use handler::{handle_event, Event};
pub use modes::{SortBy, SortOrder};
pub use session::Session;
pub use state::{FilterState, DEFAULT_PER_PAGE};
