#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod session;

// Re-export commonly used types for convenience
pub use domain::{Department, ObjectDetail, ObjectId, SearchFilter, resolve_department};
pub use ports::{CatalogError, CatalogPort, CatalogResult};
pub use services::Explorer;
pub use session::{PAGE_SIZE, SessionState};
