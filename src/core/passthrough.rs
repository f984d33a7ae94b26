// This module declares the types that never take an allocator. not_allocator_aware! expands to
// the UsesAllocator and ConstructionTarget impls for a pass-through type, for every allocator
// type at once, and is exported so downstream crates can declare their own plain types the
// same way. It is applied here to the primitive scalars, String and string slices; Option and
// the standard Vec get generic impls since the macro takes concrete types only.

//! Pass-through declarations for types that never take an allocator.

/// Declare types that never receive an allocator, for any allocator type.
///
/// Their argument packages are the caller's arguments, unchanged.
///
/// ```ignore
/// struct Point { x: i32, y: i32 }
/// uses_alloc::not_allocator_aware!(Point);
/// ```
#[macro_export]
macro_rules! not_allocator_aware {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<A> $crate::UsesAllocator<A> for $ty {
                type Convention = $crate::NotAllocatorAware;
            }

            impl<A> $crate::ConstructionTarget<A> for $ty {
                type Dispatch = $crate::Flat;
            }
        )+
    };
}

not_allocator_aware!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    &'static str,
);

impl<T, A> crate::UsesAllocator<A> for Option<T> {
    type Convention = crate::NotAllocatorAware;
}

impl<T, A> crate::ConstructionTarget<A> for Option<T> {
    type Dispatch = crate::Flat;
}

impl<T, A> crate::UsesAllocator<A> for Vec<T> {
    type Convention = crate::NotAllocatorAware;
}

impl<T, A> crate::ConstructionTarget<A> for Vec<T> {
    type Dispatch = crate::Flat;
}
