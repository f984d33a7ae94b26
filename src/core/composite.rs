// This module recognises paired values, the one composite shape that is built piecewise
// rather than in a single constructor call. Composite exposes the two components of a pair
// (first and second) along with assembly from and decomposition into those components; it is
// implemented for the crate's Pair struct and for plain 2-tuples. PiecewiseArgs describes
// the call shapes a composite accepts and splits each of them into one argument list per
// component: nothing (both default), two positional values, an existing pair by value or by
// reference, or explicit per-component argument tuples behind the PiecewiseConstruct marker.
// The builder consults these splits when recursing into each component with the same
// allocator.

//! Composite (paired) values and their piecewise argument splitting.

use super::args::ArgList;

/// Marker requesting piecewise construction from explicit per-component
/// argument tuples: `(PiecewiseConstruct, first_args, second_args)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PiecewiseConstruct;

/// A value made of exactly two components.
pub trait Composite: Sized {
    type First;
    type Second;

    fn from_parts(first: Self::First, second: Self::Second) -> Self;

    fn into_parts(self) -> (Self::First, Self::Second);

    fn first(&self) -> &Self::First;

    fn second(&self) -> &Self::Second;
}

/// Two named components constructed independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair<F, S> {
    pub first: F,
    pub second: S,
}

impl<F, S> Pair<F, S> {
    pub const fn new(first: F, second: S) -> Self {
        Self { first, second }
    }
}

impl<F, S> From<(F, S)> for Pair<F, S> {
    fn from((first, second): (F, S)) -> Self {
        Self { first, second }
    }
}

impl<F, S> Composite for Pair<F, S> {
    type First = F;
    type Second = S;

    #[inline(always)]
    fn from_parts(first: F, second: S) -> Self {
        Self { first, second }
    }

    #[inline(always)]
    fn into_parts(self) -> (F, S) {
        (self.first, self.second)
    }

    fn first(&self) -> &F {
        &self.first
    }

    fn second(&self) -> &S {
        &self.second
    }
}

impl<F, S> Composite for (F, S) {
    type First = F;
    type Second = S;

    #[inline(always)]
    fn from_parts(first: F, second: S) -> Self {
        (first, second)
    }

    #[inline(always)]
    fn into_parts(self) -> (F, S) {
        self
    }

    fn first(&self) -> &F {
        &self.0
    }

    fn second(&self) -> &S {
        &self.1
    }
}

/// An argument list accepted by the composite `P`, split per component.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid argument list for the composite `{P}`",
    note = "composites accept `()`, `(first, second)`, `(pair,)`, `(&pair,)` or `(PiecewiseConstruct, first_args, second_args)`"
)]
pub trait PiecewiseArgs<P: Composite> {
    type First: ArgList;
    type Second: ArgList;

    fn split(self) -> (Self::First, Self::Second);
}

impl<P: Composite> PiecewiseArgs<P> for () {
    type First = ();
    type Second = ();

    #[inline(always)]
    fn split(self) -> ((), ()) {
        ((), ())
    }
}

impl<P: Composite, X, Y> PiecewiseArgs<P> for (X, Y) {
    type First = (X,);
    type Second = (Y,);

    #[inline(always)]
    fn split(self) -> ((X,), (Y,)) {
        let (x, y) = self;
        ((x,), (y,))
    }
}

impl<P: Composite> PiecewiseArgs<P> for (P,) {
    type First = (P::First,);
    type Second = (P::Second,);

    #[inline(always)]
    fn split(self) -> ((P::First,), (P::Second,)) {
        let (first, second) = self.0.into_parts();
        ((first,), (second,))
    }
}

impl<'r, P: Composite> PiecewiseArgs<P> for (&'r P,) {
    type First = (&'r P::First,);
    type Second = (&'r P::Second,);

    #[inline(always)]
    fn split(self) -> ((&'r P::First,), (&'r P::Second,)) {
        let pair = self.0;
        ((pair.first(),), (pair.second(),))
    }
}

impl<P: Composite, FA: ArgList, SA: ArgList> PiecewiseArgs<P> for (PiecewiseConstruct, FA, SA) {
    type First = FA;
    type Second = SA;

    #[inline(always)]
    fn split(self) -> (FA, SA) {
        (self.1, self.2)
    }
}
