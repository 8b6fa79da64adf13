//! Checked downcasts of dynamically typed values.

use std::any::{Any, type_name};

use crate::{PureError, PureResult};

/// Borrow `value` as a `T`.
///
/// # Errors
///
/// Returns [`PureError::InvalidCast`] naming `T` when `value` holds a
/// different type.
///
/// # Examples
///
/// ```
/// use std::any::Any;
/// use pure_lib::cast_to;
///
/// let boxed: Box<dyn Any> = Box::new(7_u32);
/// assert_eq!(cast_to::<u32>(boxed.as_ref())?, &7);
/// assert!(cast_to::<i64>(boxed.as_ref()).is_err());
/// # Ok::<(), pure_lib::PureError>(())
/// ```
pub fn cast_to<T: Any>(value: &dyn Any) -> PureResult<&T> {
    value.downcast_ref::<T>().ok_or(PureError::InvalidCast {
        expected: type_name::<T>(),
    })
}

/// Take ownership of `value` as a `T`.
///
/// # Errors
///
/// Returns [`PureError::InvalidCast`] naming `T` when `value` holds a
/// different type. The original box is dropped in that case.
pub fn cast_box<T: Any>(value: Box<dyn Any>) -> PureResult<Box<T>> {
    value.downcast::<T>().map_err(|_| PureError::InvalidCast {
        expected: type_name::<T>(),
    })
}

#[cfg(test)]
mod tests {
    use std::any::Any;

    use super::{cast_box, cast_to};
    use crate::PureError;

    #[test]
    fn borrows_matching_type() {
        let value: Box<dyn Any> = Box::new(String::from("hello"));
        assert!(matches!(cast_to::<String>(value.as_ref()), Ok(s) if s == "hello"));
    }

    #[test]
    fn names_requested_type_on_mismatch() {
        let value: Box<dyn Any> = Box::new(1_u8);
        let Err(err) = cast_to::<String>(value.as_ref()) else {
            panic!("expected a u8 to refuse casting to String");
        };
        assert!(
            matches!(err, PureError::InvalidCast { expected } if expected.ends_with("String"))
        );
    }

    #[test]
    fn takes_ownership_of_matching_type() {
        let value: Box<dyn Any> = Box::new(vec![1, 2, 3]);
        let Ok(numbers) = cast_box::<Vec<i32>>(value) else {
            panic!("expected the vector to cast back");
        };
        assert_eq!(*numbers, vec![1, 2, 3]);
        let other: Box<dyn Any> = Box::new('x');
        assert!(cast_box::<Vec<i32>>(other).is_err());
    }
}
