//! In-memory identity store implementing both repository traits.

mod identity_store;

pub use identity_store::InMemoryIdentityStore;
