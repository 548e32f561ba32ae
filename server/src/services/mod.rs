//! Service implementations
//!
//! Real implementations of the store and verifier traits for production use

pub mod carrier_directory;
pub mod fmcsa_registry;
pub mod load_store;

#[cfg(test)]
pub mod tests;

// Re-export service implementations
pub use carrier_directory::StaticCarrierDirectory;
pub use fmcsa_registry::FmcsaRegistry;
pub use load_store::InMemoryLoadStore;
