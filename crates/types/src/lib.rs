//! Shared schema and response types for the termline prompt library.
//!
//! This crate centralizes the value types that describe a command schema
//! (`Command` / `Param`), the outcome of one interactive read cycle
//! (`Response` / `ParamValue`), and the styling knobs an embedding
//! application can tune (`Styles`, `CursorShape`).

pub mod response;
pub mod schema;
pub mod styles;

pub use response::{ParamValue, Response, ResponseType};
pub use schema::{Command, Param, ParamModifier, ParamType};
pub use styles::{CursorShape, Styles};
