//! Persistence collaborator — profile and trip storage.

mod http;
mod memory;
mod traits;

pub use http::HttpStore;
pub use memory::MemoryStore;
pub use traits::TravelStore;
