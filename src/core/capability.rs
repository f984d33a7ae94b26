// This module answers the capability question at the heart of allocator-aware construction:
// given a target type, an allocator type and an argument list, does the type want the
// allocator at all, and if so in which calling convention. The answer is a type, not a value.
// UsesAllocator carries a type-wide Declaration drawn from a sealed set of four markers:
// NotAllocatorAware, LeadingTag and TrailingArg fix one answer for every argument list, while
// ByArguments defers to a ConventionFor<A, Args> impl per argument list, for types whose
// leading-tag constructors cover some lists and trailing constructors cover others. Select
// resolves a declaration plus an argument list to one of the three package conventions; each
// convention knows how to reshape an argument tuple into the package the constructor expects.
// Supports<LEADING, TRAILING> lets a type state which conventions it accepts and resolves the
// preference order (leading wins), refusing to compile when neither is available.
// ConventionKind mirrors the conventions at runtime purely for introspection and logging.

//! Capability query for allocator-aware types.
//!
//! A type opts in by implementing [`UsesAllocator`] for the allocator it
//! accepts. The associated declaration decides how the allocator is
//! injected:
//!
//! - [`NotAllocatorAware`]: arguments pass through untouched.
//! - [`LeadingTag`]: `(AllocatorArg, &alloc, args...)`.
//! - [`TrailingArg`]: `(args..., &alloc)`.
//! - [`ByArguments`]: one of the two above, chosen per argument list through
//!   [`ConventionFor`].
//!
//! The set is closed; [`Declaration`] and [`Convention`] are sealed.

use std::fmt;

use super::args::ArgList;

/// Marker announcing that the next argument is an allocator.
///
/// Carries no data. Constructors using the leading convention take it as
/// their first parameter so the allocator cannot be mistaken for an ordinary
/// argument of the same type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AllocatorArg;

/// Runtime mirror of a [`Convention`] marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConventionKind {
    NotAllocatorAware,
    LeadingTag,
    TrailingArg,
}

impl ConventionKind {
    /// Whether the allocator ends up in the argument package.
    pub const fn injects_allocator(self) -> bool {
        !matches!(self, ConventionKind::NotAllocatorAware)
    }
}

impl fmt::Display for ConventionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConventionKind::NotAllocatorAware => write!(f, "pass-through"),
            ConventionKind::LeadingTag => write!(f, "leading-tag"),
            ConventionKind::TrailingArg => write!(f, "trailing"),
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::NotAllocatorAware {}
    impl Sealed for super::LeadingTag {}
    impl Sealed for super::TrailingArg {}
    impl Sealed for super::ByArguments {}
}

/// How an allocator is threaded into a constructor's argument list.
pub trait Convention: sealed::Sealed {
    const KIND: ConventionKind;

    /// The argument package produced from `Args` under this convention.
    type Package<'a, A: 'a, Args: ArgList>;

    /// Reshape `args` into this convention's package.
    fn package<'a, A: 'a, Args: ArgList>(alloc: &'a A, args: Args) -> Self::Package<'a, A, Args>;
}

/// The type never receives the allocator.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotAllocatorAware;

/// The allocator is passed first, behind an [`AllocatorArg`] tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadingTag;

/// The allocator is appended after every ordinary argument.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailingArg;

/// The convention is declared per argument list with [`ConventionFor`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ByArguments;

/// What a type declares through [`UsesAllocator::Convention`].
pub trait Declaration: sealed::Sealed {
    /// Whether the allocator is injected at all.
    const AWARE: bool;
}

impl Declaration for NotAllocatorAware {
    const AWARE: bool = false;
}

impl Declaration for LeadingTag {
    const AWARE: bool = true;
}

impl Declaration for TrailingArg {
    const AWARE: bool = true;
}

impl Declaration for ByArguments {
    const AWARE: bool = true;
}

/// A convention that places the allocator in the package.
pub trait Injecting: Convention + Declaration {}

impl Injecting for LeadingTag {}
impl Injecting for TrailingArg {}

impl Convention for NotAllocatorAware {
    const KIND: ConventionKind = ConventionKind::NotAllocatorAware;

    type Package<'a, A: 'a, Args: ArgList> = Args;

    #[inline(always)]
    fn package<'a, A: 'a, Args: ArgList>(_alloc: &'a A, args: Args) -> Args {
        args
    }
}

impl Convention for LeadingTag {
    const KIND: ConventionKind = ConventionKind::LeadingTag;

    type Package<'a, A: 'a, Args: ArgList> = <Args as ArgList>::Leading<'a, A>;

    #[inline(always)]
    fn package<'a, A: 'a, Args: ArgList>(alloc: &'a A, args: Args) -> Self::Package<'a, A, Args> {
        args.lead(AllocatorArg, alloc)
    }
}

impl Convention for TrailingArg {
    const KIND: ConventionKind = ConventionKind::TrailingArg;

    type Package<'a, A: 'a, Args: ArgList> = <Args as ArgList>::Trailing<'a, A>;

    #[inline(always)]
    fn package<'a, A: 'a, Args: ArgList>(alloc: &'a A, args: Args) -> Self::Package<'a, A, Args> {
        args.trail(alloc)
    }
}

/// Declares whether `Self` accepts an allocator of type `A` during construction.
///
/// Implement it with the convention your constructors follow. Types that
/// accept both conventions should use [`Supports`] so the preference order is
/// applied for them:
///
/// ```ignore
/// impl UsesAllocator<Bump> for Interned<'_> {
///     type Convention = <Supports<true, true> as SelectConvention>::Selected;
/// }
/// ```
///
/// Types whose conventions differ between argument lists declare
/// [`ByArguments`] and one [`ConventionFor`] per list.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not declare whether it uses an allocator of type `{A}`",
    label = "missing `UsesAllocator<{A}>` declaration",
    note = "use `not_allocator_aware!` for types that never take an allocator"
)]
pub trait UsesAllocator<A> {
    type Convention: Declaration;
}

/// Convention used for one argument list of a [`ByArguments`] type.
///
/// Only conventions that inject the allocator are accepted; an
/// allocator-aware type never silently drops it:
///
/// ```compile_fail,E0277
/// use uses_alloc::{ByArguments, ConventionFor, NotAllocatorAware, UsesAllocator};
///
/// struct Cache;
///
/// impl UsesAllocator<u8> for Cache {
///     type Convention = ByArguments;
/// }
///
/// impl ConventionFor<u8, (i32,)> for Cache {
///     type Convention = NotAllocatorAware;
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` declares no allocator convention for the arguments `{Args}`",
    label = "missing `ConventionFor<{A}, {Args}>` declaration",
    note = "types declaring `ByArguments` need one `ConventionFor` impl per argument list"
)]
pub trait ConventionFor<A, Args> {
    type Convention: Injecting;
}

/// Resolves a [`Declaration`] to the [`Convention`] used for `T` built from
/// `Args`.
pub trait Select<T: ?Sized, A, Args>: Declaration {
    type Convention: Convention;
}

impl<T: ?Sized, A, Args> Select<T, A, Args> for NotAllocatorAware {
    type Convention = NotAllocatorAware;
}

impl<T: ?Sized, A, Args> Select<T, A, Args> for LeadingTag {
    type Convention = LeadingTag;
}

impl<T: ?Sized, A, Args> Select<T, A, Args> for TrailingArg {
    type Convention = TrailingArg;
}

impl<T, A, Args> Select<T, A, Args> for ByArguments
where
    T: ConventionFor<A, Args> + ?Sized,
{
    type Convention = <T as ConventionFor<A, Args>>::Convention;
}

/// Convention `T` follows when built from `Args` with allocator `A`.
pub type Resolved<T, A, Args> =
    <<T as UsesAllocator<A>>::Convention as Select<T, A, Args>>::Convention;

/// Declaration of which allocator conventions a type's constructors support.
#[derive(Debug, Clone, Copy, Default)]
pub struct Supports<const LEADING: bool, const TRAILING: bool>;

/// Resolves a [`Supports`] declaration to the convention actually used.
///
/// A type that declares neither convention does not compile:
///
/// ```compile_fail,E0277
/// use uses_alloc::{SelectConvention, Supports, UsesAllocator};
///
/// struct Buffer;
///
/// impl UsesAllocator<u8> for Buffer {
///     type Convention = <Supports<false, false> as SelectConvention>::Selected;
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "construction with an allocator must be possible when allocator-awareness is declared true",
    label = "neither the leading-tag nor the trailing convention is supported"
)]
pub trait SelectConvention {
    type Selected: Injecting;
}

impl SelectConvention for Supports<true, true> {
    type Selected = LeadingTag;
}

impl SelectConvention for Supports<true, false> {
    type Selected = LeadingTag;
}

impl SelectConvention for Supports<false, true> {
    type Selected = TrailingArg;
}

/// Whether `T` takes an allocator of type `A`.
pub const fn uses_allocator<T, A>() -> bool
where
    T: UsesAllocator<A>,
{
    <T::Convention as Declaration>::AWARE
}

/// The convention `T` follows for allocator `A` and arguments `Args`.
pub const fn convention_of<T, A, Args>() -> ConventionKind
where
    T: UsesAllocator<A>,
    T::Convention: Select<T, A, Args>,
{
    <Resolved<T, A, Args> as Convention>::KIND
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Arena;

    struct Both;
    struct LeadOnly;
    struct TrailOnly;
    struct Plain;

    impl UsesAllocator<Arena> for Both {
        type Convention = <Supports<true, true> as SelectConvention>::Selected;
    }

    impl UsesAllocator<Arena> for LeadOnly {
        type Convention = <Supports<true, false> as SelectConvention>::Selected;
    }

    impl UsesAllocator<Arena> for TrailOnly {
        type Convention = <Supports<false, true> as SelectConvention>::Selected;
    }

    impl UsesAllocator<Arena> for Plain {
        type Convention = NotAllocatorAware;
    }

    struct PerList;

    impl UsesAllocator<Arena> for PerList {
        type Convention = ByArguments;
    }

    impl ConventionFor<Arena, (i32,)> for PerList {
        type Convention = <Supports<true, true> as SelectConvention>::Selected;
    }

    impl ConventionFor<Arena, (char,)> for PerList {
        type Convention = <Supports<false, true> as SelectConvention>::Selected;
    }

    #[test]
    fn test_leading_preferred_when_both_supported() {
        assert_eq!(convention_of::<Both, Arena, (i32,)>(), ConventionKind::LeadingTag);
        assert_eq!(convention_of::<LeadOnly, Arena, ()>(), ConventionKind::LeadingTag);
        assert_eq!(convention_of::<TrailOnly, Arena, ()>(), ConventionKind::TrailingArg);
        assert_eq!(convention_of::<Plain, Arena, (u8, u8)>(), ConventionKind::NotAllocatorAware);
    }

    #[test]
    fn test_convention_chosen_per_argument_list() {
        assert!(uses_allocator::<PerList, Arena>());
        assert_eq!(convention_of::<PerList, Arena, (i32,)>(), ConventionKind::LeadingTag);
        assert_eq!(convention_of::<PerList, Arena, (char,)>(), ConventionKind::TrailingArg);
    }

    #[test]
    fn test_uses_allocator_query() {
        const PLAIN: bool = uses_allocator::<Plain, Arena>();
        assert!(!PLAIN);
        assert!(uses_allocator::<Both, Arena>());
        assert!(uses_allocator::<TrailOnly, Arena>());
    }

    #[test]
    fn test_convention_packages() {
        let arena = Arena;

        let (a, b) = NotAllocatorAware::package(&arena, (1u8, 2u8));
        assert_eq!((a, b), (1, 2));

        let (tag, alloc, x) = LeadingTag::package(&arena, (7i32,));
        assert_eq!(tag, AllocatorArg);
        assert!(std::ptr::eq(alloc, &arena));
        assert_eq!(x, 7);

        let (x, y, alloc) = TrailingArg::package(&arena, (7i32, 'c'));
        assert_eq!((x, y), (7, 'c'));
        assert!(std::ptr::eq(alloc, &arena));
    }

    #[test]
    fn test_convention_display() {
        assert_eq!(ConventionKind::LeadingTag.to_string(), "leading-tag");
        assert_eq!(ConventionKind::TrailingArg.to_string(), "trailing");
        assert_eq!(ConventionKind::NotAllocatorAware.to_string(), "pass-through");
    }
}
