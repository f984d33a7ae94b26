// This module declares bumpalo's arena collections as allocator-aware targets. Both String and
// Vec from bumpalo::collections take their Bump as the final constructor argument, so they use
// the trailing convention: empty, with capacity, from borrowed contents, and as a copy of a
// collection living in another arena. Nested inside pairs they receive the same arena as their
// sibling components.

//! `bumpalo` collections as allocator-aware targets.
//!
//! Both collections take their arena as the last constructor argument, so
//! they follow the trailing convention against [`Bump`].

use bumpalo::collections::{String as BumpString, Vec as BumpVec};
use bumpalo::Bump;

use crate::core::{Construct, ConstructionTarget, Flat, TrailingArg, UsesAllocator};

impl UsesAllocator<Bump> for BumpString<'_> {
    type Convention = TrailingArg;
}

impl ConstructionTarget<Bump> for BumpString<'_> {
    type Dispatch = Flat;
}

impl<'b> Construct<(&'b Bump,)> for BumpString<'b> {
    fn construct((bump,): (&'b Bump,)) -> Self {
        BumpString::new_in(bump)
    }
}

impl<'s, 'b> Construct<(&'s str, &'b Bump)> for BumpString<'b> {
    fn construct((text, bump): (&'s str, &'b Bump)) -> Self {
        BumpString::from_str_in(text, bump)
    }
}

impl<'b> Construct<(usize, &'b Bump)> for BumpString<'b> {
    fn construct((capacity, bump): (usize, &'b Bump)) -> Self {
        BumpString::with_capacity_in(capacity, bump)
    }
}

/// Copy into another arena.
impl<'r, 'x, 'b> Construct<(&'r BumpString<'x>, &'b Bump)> for BumpString<'b> {
    fn construct((source, bump): (&'r BumpString<'x>, &'b Bump)) -> Self {
        BumpString::from_str_in(source.as_str(), bump)
    }
}

impl<T> UsesAllocator<Bump> for BumpVec<'_, T> {
    type Convention = TrailingArg;
}

impl<T> ConstructionTarget<Bump> for BumpVec<'_, T> {
    type Dispatch = Flat;
}

impl<'b, T> Construct<(&'b Bump,)> for BumpVec<'b, T> {
    fn construct((bump,): (&'b Bump,)) -> Self {
        BumpVec::new_in(bump)
    }
}

impl<'b, T> Construct<(usize, &'b Bump)> for BumpVec<'b, T> {
    fn construct((capacity, bump): (usize, &'b Bump)) -> Self {
        BumpVec::with_capacity_in(capacity, bump)
    }
}

impl<'r, 'b, T: Clone> Construct<(&'r [T], &'b Bump)> for BumpVec<'b, T> {
    fn construct((items, bump): (&'r [T], &'b Bump)) -> Self {
        let mut vec = BumpVec::with_capacity_in(items.len(), bump);
        vec.extend_from_slice(items);
        vec
    }
}

/// Copy into another arena.
impl<'r, 'x, 'b, T: Clone> Construct<(&'r BumpVec<'x, T>, &'b Bump)> for BumpVec<'b, T> {
    fn construct((source, bump): (&'r BumpVec<'x, T>, &'b Bump)) -> Self {
        let mut vec = BumpVec::with_capacity_in(source.len(), bump);
        vec.extend_from_slice(source);
        vec
    }
}
