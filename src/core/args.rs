// This module gives constructor argument lists a type. Rust has no variadic constructors, so
// a list of arguments is a tuple of up to eight elements and ArgList provides the two
// reshapings the allocator conventions need: prepending the AllocatorArg tag and the allocator
// reference, or appending the allocator reference. Construct<Args> is the constructibility
// relation the builder checks a package against. It comes with blanket rules for the empty
// list (Default), a single value of the target type (move) and a borrowed one (Clone); every
// other list is declared by the type itself.

//! Argument lists and constructibility.
//!
//! Rust has no variadic constructors, so an argument list is a tuple and "a
//! constructor taking these arguments" is an implementation of
//! [`Construct`] for that tuple. [`ArgList`] gives every tuple up to eight
//! elements the type-level prepend and append the allocator conventions need.

use super::capability::AllocatorArg;

/// A tuple of constructor arguments.
pub trait ArgList: Sized {
    /// Number of arguments in the list.
    const LEN: usize;

    /// `(AllocatorArg, &A, args...)`
    type Leading<'a, A: 'a>;

    /// `(args..., &A)`
    type Trailing<'a, A: 'a>;

    fn lead<'a, A: 'a>(self, tag: AllocatorArg, alloc: &'a A) -> Self::Leading<'a, A>;

    fn trail<'a, A: 'a>(self, alloc: &'a A) -> Self::Trailing<'a, A>;
}

macro_rules! arg_list {
    ($len:expr; $($name:ident)*) => {
        impl<$($name,)*> ArgList for ($($name,)*) {
            const LEN: usize = $len;

            type Leading<'a, A: 'a> = (AllocatorArg, &'a A, $($name,)*);

            type Trailing<'a, A: 'a> = ($($name,)* &'a A,);

            #[inline(always)]
            #[allow(non_snake_case)]
            fn lead<'a, A: 'a>(self, tag: AllocatorArg, alloc: &'a A) -> Self::Leading<'a, A> {
                let ($($name,)*) = self;
                (tag, alloc, $($name,)*)
            }

            #[inline(always)]
            #[allow(non_snake_case)]
            fn trail<'a, A: 'a>(self, alloc: &'a A) -> Self::Trailing<'a, A> {
                let ($($name,)*) = self;
                ($($name,)* alloc,)
            }
        }
    };
}

arg_list!(0;);
arg_list!(1; P0);
arg_list!(2; P0 P1);
arg_list!(3; P0 P1 P2);
arg_list!(4; P0 P1 P2 P3);
arg_list!(5; P0 P1 P2 P3 P4);
arg_list!(6; P0 P1 P2 P3 P4 P5);
arg_list!(7; P0 P1 P2 P3 P4 P5 P6);
arg_list!(8; P0 P1 P2 P3 P4 P5 P6 P7);

/// `Self` can be constructed from the argument tuple `Args`.
///
/// Three forms hold for every type that qualifies: `()` through [`Default`],
/// `(Self,)` by move and `(&Self,)` through [`Clone`]. Any other argument
/// list, including the allocator-carrying ones, is declared by the type.
///
/// A type declaring a convention must provide the matching constructor:
///
/// ```compile_fail,E0277
/// use uses_alloc::{make_value, ConstructionTarget, Flat, LeadingTag, UsesAllocator};
///
/// struct Widget;
///
/// impl UsesAllocator<u8> for Widget {
///     type Convention = LeadingTag;
/// }
///
/// impl ConstructionTarget<u8> for Widget {
///     type Dispatch = Flat;
/// }
///
/// let arena = 0u8;
/// let _: Widget = make_value(&arena, (1i32,));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be constructed from `{Args}`",
    label = "no constructor for this argument list",
    note = "types declaring allocator-awareness must accept the leading-tag or trailing package; other types must accept the arguments unchanged"
)]
pub trait Construct<Args>: Sized {
    fn construct(args: Args) -> Self;
}

impl<T: Default> Construct<()> for T {
    #[inline(always)]
    fn construct((): ()) -> Self {
        T::default()
    }
}

impl<T> Construct<(T,)> for T {
    #[inline(always)]
    fn construct((value,): (T,)) -> Self {
        value
    }
}

impl<'r, T: Clone> Construct<(&'r T,)> for T {
    #[inline(always)]
    fn construct((value,): (&'r T,)) -> Self {
        value.clone()
    }
}

impl<'r> Construct<(&'r str,)> for String {
    fn construct((value,): (&'r str,)) -> Self {
        value.to_owned()
    }
}
