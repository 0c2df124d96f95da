//! Domain models, wire DTOs, and operation parameter types.
//!
//! Each domain module holds three layers of types:
//!
//! - **DTOs** - serde-serializable request/response shapes exposed over HTTP,
//!   annotated with `ToSchema` for the OpenAPI document.
//! - **Domain models** - the shapes the service layer works with; converted from
//!   entity models at the repository boundary.
//! - **Params** - validated inputs for create/update operations. DTO-to-params
//!   conversion performs field validation and collects one message per violated
//!   field, so invalid requests never reach a service method.

pub mod api;
pub mod player;
pub mod tournament;

#[cfg(test)]
mod test;
