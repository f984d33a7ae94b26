// This module declares the allocator-parameterised containers from allocator-api2 and
// hashbrown as allocator-aware targets. Each of them stores its allocator by value, so for
// an allocator B the container type is parameterised over &B (which is how bumpalo's Bump and
// other shared allocators implement the allocator-api2 Allocator trait). Construction takes
// the allocator as the final argument, which makes all of them trailing-convention types:
// new_in for the empty container, with_capacity_in for a preallocated one and, for Box,
// new_in with the boxed value.

//! `allocator-api2` and `hashbrown` containers as allocator-aware targets.

use allocator_api2::alloc::Allocator;
use allocator_api2::boxed::Box as AllocBox;
use allocator_api2::vec::Vec as AllocVec;
use hashbrown::{hash_map::HashMap, DefaultHashBuilder};

use crate::core::{Construct, ConstructionTarget, Flat, TrailingArg, UsesAllocator};

impl<'b, T, B> UsesAllocator<B> for AllocVec<T, &'b B>
where
    &'b B: Allocator,
{
    type Convention = TrailingArg;
}

impl<'b, T, B> ConstructionTarget<B> for AllocVec<T, &'b B>
where
    &'b B: Allocator,
{
    type Dispatch = Flat;
}

impl<'b, T, B> Construct<(&'b B,)> for AllocVec<T, &'b B>
where
    &'b B: Allocator,
{
    fn construct((alloc,): (&'b B,)) -> Self {
        AllocVec::new_in(alloc)
    }
}

impl<'b, T, B> Construct<(usize, &'b B)> for AllocVec<T, &'b B>
where
    &'b B: Allocator,
{
    fn construct((capacity, alloc): (usize, &'b B)) -> Self {
        AllocVec::with_capacity_in(capacity, alloc)
    }
}

impl<'b, T, B> UsesAllocator<B> for AllocBox<T, &'b B>
where
    &'b B: Allocator,
{
    type Convention = TrailingArg;
}

impl<'b, T, B> ConstructionTarget<B> for AllocBox<T, &'b B>
where
    &'b B: Allocator,
{
    type Dispatch = Flat;
}

impl<'b, T, B> Construct<(T, &'b B)> for AllocBox<T, &'b B>
where
    &'b B: Allocator,
{
    fn construct((value, alloc): (T, &'b B)) -> Self {
        AllocBox::new_in(value, alloc)
    }
}

impl<'b, K, V, B> UsesAllocator<B> for HashMap<K, V, DefaultHashBuilder, &'b B>
where
    &'b B: Allocator,
{
    type Convention = TrailingArg;
}

impl<'b, K, V, B> ConstructionTarget<B> for HashMap<K, V, DefaultHashBuilder, &'b B>
where
    &'b B: Allocator,
{
    type Dispatch = Flat;
}

impl<'b, K, V, B> Construct<(&'b B,)> for HashMap<K, V, DefaultHashBuilder, &'b B>
where
    &'b B: Allocator,
{
    fn construct((alloc,): (&'b B,)) -> Self {
        HashMap::new_in(alloc)
    }
}

impl<'b, K, V, B> Construct<(usize, &'b B)> for HashMap<K, V, DefaultHashBuilder, &'b B>
where
    &'b B: Allocator,
{
    fn construct((capacity, alloc): (usize, &'b B)) -> Self {
        HashMap::with_capacity_in(capacity, alloc)
    }
}
