//! Market data aggregate: normalized transactions, their ordering and
//! filtering, and the access interface to the transactions API.

pub mod entities;
pub mod normalizer;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use normalizer::*;
pub use repositories::*;
pub use services::*;
pub use value_objects::*;
