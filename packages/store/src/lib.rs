//! # Sitekit Store
//!
//! Where section documents live between edits.
//!
//! [`ContentStore`] is the backend seam: [`RestStore`] for the hosted table,
//! [`MemoryStore`] for tests and dry runs, [`UnconfiguredStore`] when no
//! credentials are set. [`ContentFacade`] sits on top and always has a full
//! set of content to show, whatever the backend does.
//!
//! A configured store is only written by a signed-in user: an
//! [`AuthProvider`] signs in, [`AccessGate`] decides, and the provider's
//! access token is handed to [`RestStore::with_access_token`].

mod auth;
mod error;
mod facade;
mod memory;
mod rest;
mod store;

pub use auth::{AccessGate, AuthProvider, MemoryAuth, RestAuth, User};
pub use error::{AuthError, StoreError};
pub use facade::{ContentFacade, LOAD_ERROR};
pub use memory::MemoryStore;
pub use rest::{RestConfig, RestStore};
pub use store::{ContentStore, StoredRow, UnconfiguredStore};
