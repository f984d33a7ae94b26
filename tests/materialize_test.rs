// This test suite validates the object materializer. Values returned by make_value must equal
// values built directly from the package, in-place construction must initialize caller storage
// for pairs mixing leading-tag and allocator-api2 components, raw placement must return the
// pointer it was given and checked placement must reject a null destination. Nested pairs must
// pass the same arena to every component, and a panicking constructor must unwind to the caller.

//! Test object materialization.
//!
//! Values built through `make_value` and the in-place entry points must equal
//! values built directly from the package contents.

use std::mem::MaybeUninit;

use allocator_api2::vec::Vec as AllocVec;
use bumpalo::collections::{String as BumpString, Vec as BumpVec};
use bumpalo::Bump;
use uses_alloc::{
    build_construction_args, construct_at, construct_in_place, make_value, try_construct_at,
    AllocatorArg, Construct, ConstructionTarget, Flat, LeadingTag, Pair, PiecewiseConstruct,
    PlacementError, UsesAllocator,
};

/// Arena-backed record using the leading-tag convention.
#[derive(Debug, PartialEq)]
struct Record<'b> {
    name: BumpString<'b>,
    tags: BumpVec<'b, u16>,
}

impl UsesAllocator<Bump> for Record<'_> {
    type Convention = LeadingTag;
}

impl ConstructionTarget<Bump> for Record<'_> {
    type Dispatch = Flat;
}

impl<'b, 's> Construct<(AllocatorArg, &'b Bump, &'s str, u16)> for Record<'b> {
    fn construct((_, bump, name, tag): (AllocatorArg, &'b Bump, &'s str, u16)) -> Self {
        let mut tags = BumpVec::new_in(bump);
        tags.push(tag);
        Record {
            name: BumpString::from_str_in(name, bump),
            tags,
        }
    }
}

/// Panics on construction, to check nothing is swallowed.
struct Faulty;

uses_alloc::not_allocator_aware!(Faulty);

impl Construct<(u8,)> for Faulty {
    fn construct((code,): (u8,)) -> Self {
        panic!("constructor failed with code {code}");
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_make_value_matches_direct_construction() {
    init_logging();
    let arena = Bump::new();

    let via_make: Record<'_> = make_value(&arena, ("alpha", 3u16));
    let package = build_construction_args::<Record<'_>, _, _>(&arena, ("alpha", 3u16));
    let direct = Record::construct(package);

    assert_eq!(via_make, direct);
    assert_eq!(via_make.name.as_str(), "alpha");
    assert_eq!(via_make.tags.as_slice(), &[3]);
}

#[test]
fn test_construct_in_place_pair() {
    init_logging();
    let arena = Bump::new();
    let mut slot = MaybeUninit::<Pair<Record<'_>, AllocVec<u32, &Bump>>>::uninit();

    let pair = construct_in_place(
        &mut slot,
        &arena,
        (PiecewiseConstruct, ("beta", 9u16), (4usize,)),
    );
    pair.second.push(42);

    assert_eq!(pair.first.name.as_str(), "beta");
    assert!(pair.second.capacity() >= 4);
    assert_eq!(pair.second.as_slice(), &[42]);

    // SAFETY: initialized by construct_in_place above.
    unsafe { slot.assume_init_drop() };
}

#[test]
fn test_construct_at_and_checked_variant() {
    init_logging();
    let arena = Bump::new();

    let mut storage = MaybeUninit::<Record<'_>>::uninit();
    let ptr = storage.as_mut_ptr();
    let returned = unsafe { construct_at(ptr, &arena, ("gamma", 1u16)) };
    assert_eq!(returned, ptr);
    let record = unsafe { storage.assume_init() };
    assert_eq!(record.name.as_str(), "gamma");

    let result = unsafe {
        try_construct_at::<Record<'_>, _, _>(std::ptr::null_mut(), &arena, ("delta", 2u16))
    };
    assert!(matches!(result, Err(PlacementError::Null { .. })));
}

#[test]
fn test_arena_reused_by_nested_components() {
    let arena = Bump::new();
    let pair: Pair<Pair<i32, BumpString<'_>>, Record<'_>> = make_value(
        &arena,
        (PiecewiseConstruct, (7i32, "inner"), ("outer", 5u16)),
    );

    assert_eq!(pair.first.first, 7);
    assert_eq!(pair.first.second.as_str(), "inner");
    assert_eq!(pair.second.name.as_str(), "outer");
}

#[test]
#[should_panic(expected = "constructor failed with code 7")]
fn test_constructor_panic_propagates() {
    let arena = Bump::new();
    let _: Faulty = make_value(&arena, (7u8,));
}
