//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Either<E, _>` directly.
//! [`TypeConstructor`] recovers that ability with a GAT: an implementing type
//! names the value it currently carries (`Inner`) and how to re-apply the same
//! constructor to another value type (`WithType<B>`).
//!
//! Capabilities that are defined once and reused across computation types, such
//! as [`MonadThrow`](crate::effect::MonadThrow), are built on top of this trait.
//!
//! # Example
//!
//! ```rust
//! use reader_either::control::Either;
//! use reader_either::typeclass::TypeConstructor;
//!
//! fn relabel<T: TypeConstructor>(_value: &T) -> &'static str {
//!     std::any::type_name::<T::WithType<String>>()
//! }
//!
//! let value: Either<u8, i32> = Either::Right(1);
//! assert!(relabel(&value).contains("String"));
//! ```

#[cfg(feature = "control")]
use crate::control::Either;

/// A type constructor applied to a value type.
///
/// # Laws
///
/// **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is the same
/// type as `F`.
pub trait TypeConstructor {
    /// The value type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(feature = "control")]
impl<E, A> TypeConstructor for Either<E, A> {
    type Inner = A;
    type WithType<B> = Either<E, B>;
}

impl<A, E> TypeConstructor for Result<A, E> {
    type Inner = A;
    type WithType<B> = Result<B, E>;
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;

    #[test]
    fn either_inner_is_the_success_type() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Either<String, i32>>();
    }

    #[test]
    fn either_with_type_keeps_the_failure_type() {
        fn assert_with_type<E, A, B>()
        where
            Either<E, A>: TypeConstructor<Inner = A, WithType<B> = Either<E, B>>,
        {
        }

        assert_with_type::<String, i32, bool>();
        assert_with_type::<(), Vec<u8>, String>();
    }

    #[test]
    fn result_with_type_keeps_the_error_type() {
        fn assert_with_type<A, E, B>()
        where
            Result<A, E>: TypeConstructor<Inner = A, WithType<B> = Result<B, E>>,
        {
        }

        assert_with_type::<i32, String, bool>();
        assert_with_type::<String, std::io::Error, i32>();
    }
}
