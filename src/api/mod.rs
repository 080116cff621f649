pub mod client;
pub mod traits;
pub mod types;

pub use client::{FetchError, HospitableClient};
pub use traits::ReservationSource;
