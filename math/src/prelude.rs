pub use crate::{fe, fe_vec, poly};
pub use crate::{
    field_element::FieldElement,
    interpolation::{interpolate_at, interpolate_constant_at_zero},
    poly::{horner, Polynomial},
    traits::{FiniteField, Inverse},
};
pub use num_traits::{ConstOne, ConstZero, One, Zero};
