//! Entity structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for patches
//! - A `Serialize` response projection where the raw row is not safe to
//!   expose (users carry their password hash)

pub mod post;
pub mod user;
