//! Shared macros for constructing core math primitives.
//!
//! The field modulus is a type parameter, so the target type has to be
//! known from context (an annotation or a typed binding).

/// Simplifies constructing [`FieldElement`](crate::field_element::FieldElement)s.
///
/// ```
/// use sss_math::prelude::*;
///
/// let a: FieldElement<307> = fe!(42);
/// let b: FieldElement<307> = fe!(-12); // translates to `307 - 12`
/// assert_eq!(a + b, fe!(30));
/// ```
#[macro_export]
macro_rules! fe {
    ($value:expr) => {
        $crate::field_element::FieldElement::from($value)
    };
}

/// Create a [`Vec`] of [`FieldElement`](crate::field_element::FieldElement)s.
///
/// ```
/// use sss_math::prelude::*;
///
/// let repeated: Vec<FieldElement<307>> = fe_vec![7; 3];
/// assert_eq!(repeated, vec![FieldElement::from(7); 3]);
///
/// let points: Vec<FieldElement<307>> = fe_vec![1, 2, 3];
/// assert_eq!(points[2].value(), 3);
/// ```
#[macro_export]
macro_rules! fe_vec {
    ($b:expr; $n:expr) => {
        vec![$crate::field_element::FieldElement::from($b); $n]
    };
    ($($b:expr),* $(,)?) => {
        vec![$($crate::field_element::FieldElement::from($b)),*]
    };
}

/// Construct a [`Polynomial`](crate::poly::Polynomial) from coefficients,
/// lowest degree first.
///
/// ```
/// use sss_math::prelude::*;
///
/// let p: Polynomial<FieldElement<307>> = poly![62, 10];
/// assert_eq!(p.evaluate(fe!(2)), fe!(82));
/// ```
#[macro_export]
macro_rules! poly {
    () => {{
        $crate::poly::Polynomial::zero()
    }};
    ($($coeff:expr),+ $(,)?) => {{
        $crate::poly::Polynomial::from($crate::fe_vec![$($coeff),+])
    }};
}
