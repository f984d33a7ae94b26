// This module holds the object materializer, the consumer side of the argument package
// builder. make_value returns the constructed value, construct_in_place writes it into a
// caller-owned MaybeUninit slot, construct_at writes through a raw pointer under the usual
// placement contract and try_construct_at rejects null or misaligned destinations with a
// PlacementError before anything is constructed. Each entry point builds the package and
// hands it to the constructor in one expression, so packages never outlive the call. Every
// construction is traced at trace level with the target type name and its package shape.

//! Object materializer.
//!
//! Both entry points compute the package with the builder and hand it to the
//! target's constructor in the same expression. There is no branching here
//! and no error handling: a panicking constructor unwinds straight through.

use std::mem::MaybeUninit;
use std::ptr::NonNull;

use super::args::Construct;
use super::builder::Buildable;
use super::error::{PlacementError, PlacementResult};

fn trace_construction<'a, T, A, Args>(site: &str)
where
    A: 'a,
    T: Buildable<'a, A, Args>,
{
    if log::log_enabled!(log::Level::Trace) {
        log::trace!(
            "{}: {} with {}",
            site,
            std::any::type_name::<T>(),
            T::shape()
        );
    }
}

/// Construct a `T` by value, threading `alloc` through as `T` requires.
#[inline]
pub fn make_value<'a, T, A, Args>(alloc: &'a A, args: Args) -> T
where
    A: 'a,
    T: Buildable<'a, A, Args> + Construct<<T as Buildable<'a, A, Args>>::Package>,
{
    trace_construction::<T, A, Args>("make_value");
    T::construct(T::build_args(alloc, args))
}

/// Construct a `T` into caller-provided uninitialized storage.
///
/// Returns the now-initialized value. Like [`MaybeUninit::write`], the old
/// contents of `slot` are not dropped.
#[inline]
pub fn construct_in_place<'s, 'a, T, A, Args>(
    slot: &'s mut MaybeUninit<T>,
    alloc: &'a A,
    args: Args,
) -> &'s mut T
where
    A: 'a,
    T: Buildable<'a, A, Args> + Construct<<T as Buildable<'a, A, Args>>::Package>,
{
    trace_construction::<T, A, Args>("construct_in_place");
    slot.write(T::construct(T::build_args(alloc, args)))
}

/// Construct a `T` at `ptr` and return the same pointer, now denoting a
/// live `T`.
///
/// # Safety
///
/// `ptr` must be valid for writes of `size_of::<T>()` bytes and aligned for
/// `T`. Whatever `ptr` pointed to before is overwritten without being
/// dropped.
#[inline]
pub unsafe fn construct_at<'a, T, A, Args>(ptr: *mut T, alloc: &'a A, args: Args) -> *mut T
where
    A: 'a,
    T: Buildable<'a, A, Args> + Construct<<T as Buildable<'a, A, Args>>::Package>,
{
    trace_construction::<T, A, Args>("construct_at");
    let value = T::construct(T::build_args(alloc, args));
    // SAFETY: upheld by the caller.
    unsafe { ptr.write(value) };
    ptr
}

/// [`construct_at`] with null and alignment checks.
///
/// Nothing is constructed when a check fails.
///
/// # Safety
///
/// A non-null, aligned `ptr` must be valid for writes of `size_of::<T>()`
/// bytes.
pub unsafe fn try_construct_at<'a, T, A, Args>(
    ptr: *mut T,
    alloc: &'a A,
    args: Args,
) -> PlacementResult<NonNull<T>>
where
    A: 'a,
    T: Buildable<'a, A, Args> + Construct<<T as Buildable<'a, A, Args>>::Package>,
{
    let type_name = std::any::type_name::<T>();
    let Some(target) = NonNull::new(ptr) else {
        return Err(PlacementError::Null { type_name });
    };
    let align = std::mem::align_of::<T>();
    if (ptr as usize) % align != 0 {
        return Err(PlacementError::Misaligned {
            type_name,
            addr: ptr as usize,
            align,
        });
    }
    // SAFETY: non-null and aligned checked above, size upheld by the caller.
    unsafe { construct_at(target.as_ptr(), alloc, args) };
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::{ConstructionTarget, Flat};
    use crate::core::capability::{TrailingArg, UsesAllocator};
    use crate::core::composite::Pair;

    struct Arena {
        id: u32,
    }

    #[derive(Debug, PartialEq)]
    struct Slot {
        owner: u32,
        value: u64,
    }

    impl UsesAllocator<Arena> for Slot {
        type Convention = TrailingArg;
    }

    impl ConstructionTarget<Arena> for Slot {
        type Dispatch = Flat;
    }

    impl<'a> Construct<(u64, &'a Arena)> for Slot {
        fn construct((value, arena): (u64, &'a Arena)) -> Self {
            Slot {
                owner: arena.id,
                value,
            }
        }
    }

    #[test]
    fn test_make_value() {
        let arena = Arena { id: 9 };
        let slot: Slot = make_value(&arena, (42u64,));
        assert_eq!(slot, Slot { owner: 9, value: 42 });
    }

    #[test]
    fn test_construct_in_place() {
        let arena = Arena { id: 3 };
        let mut storage = MaybeUninit::<Pair<u64, Slot>>::uninit();
        let built = construct_in_place(&mut storage, &arena, (1u64, 2u64));
        assert_eq!(built.first, 1);
        assert_eq!(built.second, Slot { owner: 3, value: 2 });
    }

    #[test]
    fn test_construct_at_returns_same_pointer() {
        let arena = Arena { id: 5 };
        let mut storage = MaybeUninit::<Slot>::uninit();
        let ptr = storage.as_mut_ptr();
        let returned = unsafe { construct_at(ptr, &arena, (7u64,)) };
        assert_eq!(returned, ptr);
        let slot = unsafe { storage.assume_init() };
        assert_eq!(slot, Slot { owner: 5, value: 7 });
    }

    #[test]
    fn test_try_construct_at_rejects_null() {
        let arena = Arena { id: 0 };
        let result = unsafe { try_construct_at::<Slot, _, _>(std::ptr::null_mut(), &arena, (1u64,)) };
        assert!(matches!(result, Err(PlacementError::Null { .. })));
    }

    #[test]
    fn test_try_construct_at_rejects_misaligned() {
        let arena = Arena { id: 0 };
        let mut buffer = [0u64; 2];
        let misaligned = unsafe { (buffer.as_mut_ptr() as *mut u8).add(1) } as *mut u64;
        let result = unsafe { try_construct_at(misaligned, &arena, (1u64,)) };
        match result {
            Err(PlacementError::Misaligned { align, addr, .. }) => {
                assert_eq!(align, std::mem::align_of::<u64>());
                assert_eq!(addr, misaligned as usize);
            }
            other => panic!("expected misaligned error, got {:?}", other),
        }
        assert_eq!(buffer, [0, 0]);
    }

    #[test]
    fn test_try_construct_at_writes_value() {
        let arena = Arena { id: 8 };
        let mut storage = MaybeUninit::<Slot>::uninit();
        let target = unsafe { try_construct_at(storage.as_mut_ptr(), &arena, (11u64,)) }.unwrap();
        assert_eq!(target.as_ptr(), storage.as_mut_ptr());
        assert_eq!(unsafe { storage.assume_init() }, Slot { owner: 8, value: 11 });
    }
}
