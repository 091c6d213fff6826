//! Prime-field arithmetic, Horner evaluation and Lagrange interpolation for
//! threshold secret sharing.

pub mod error;
pub mod field_element;
pub mod interpolation;
pub mod macros;
pub mod poly;
pub mod prelude;
pub mod traits;

pub use error::{MathError, Result};
pub use field_element::FieldElement;
