//! Core value types.

mod seed;
mod space_point;

pub use seed::Seed;
pub use space_point::{InternalSpacePoint, SpacePoint};
