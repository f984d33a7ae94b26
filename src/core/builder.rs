// This module is the argument package builder: the dispatcher that decides, per target type
// and entirely at compile time, which arguments reach the constructor. Every target carries a
// ConstructionTarget descriptor naming its dispatch strategy. Flat targets resolve their
// UsesAllocator declaration against the caller's argument list and turn the tuple into a
// pass-through, leading-tag or trailing package, requiring the type to be constructible from
// exactly that package.
// Piecewise targets (composites) split the caller's arguments per component and recurse into
// the builder once for each component with the same allocator, producing a PiecewisePackage.
// Composite dispatch never looks at the composite's own allocator declaration. Buildable is
// the bound callers write; PackageShape reports the chosen shape for tests, logs and tooling.

//! Argument package builder.
//!
//! ```text
//! build(T, alloc, args):
//!     T is composite       -> Piecewise(build(First, ..), build(Second, ..))
//!     T not allocator-aware -> args
//!     T leading-tag         -> (AllocatorArg, alloc, args...)
//!     T trailing            -> (args..., alloc)
//! ```
//!
//! Packages borrow the allocator and may borrow caller arguments. Their
//! lifetimes keep them from outliving either, so the usual pattern is to hand
//! them straight to [`Construct::construct`] (or use the materializer).

use std::fmt;

use super::args::{ArgList, Construct};
use super::capability::{Convention, ConventionKind, Resolved, Select, UsesAllocator};
use super::composite::{Composite, PiecewiseArgs};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Flat {}
    impl Sealed for super::Piecewise {}
}

/// Dispatch strategy named by a [`ConstructionTarget`].
pub trait DispatchKind: sealed::Sealed {
    const PIECEWISE: bool;
}

/// Single constructor call, allocator injected per [`UsesAllocator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Flat;

/// Component-wise construction of a [`Composite`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Piecewise;

impl DispatchKind for Flat {
    const PIECEWISE: bool = false;
}

impl DispatchKind for Piecewise {
    const PIECEWISE: bool = true;
}

/// Type descriptor consulted by the builder.
///
/// Composites use [`Piecewise`]; everything else uses [`Flat`] together with
/// a [`UsesAllocator`] declaration.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a construction target for allocator `{A}`",
    note = "declare `ConstructionTarget<{A}>` with `Dispatch = Flat` (plus `UsesAllocator<{A}>`), or `Dispatch = Piecewise` for composites"
)]
pub trait ConstructionTarget<A> {
    type Dispatch: DispatchKind;
}

impl<F, S, A> ConstructionTarget<A> for super::composite::Pair<F, S> {
    type Dispatch = Piecewise;
}

impl<F, S, A> ConstructionTarget<A> for (F, S) {
    type Dispatch = Piecewise;
}

/// Whether `T` is assembled piecewise for allocator `A`.
pub const fn is_composite<T, A>() -> bool
where
    T: ConstructionTarget<A>,
{
    <T::Dispatch as DispatchKind>::PIECEWISE
}

/// Package builder for one dispatch strategy.
pub trait Dispatch<'a, T, A: 'a, Args> {
    type Package;

    fn build(alloc: &'a A, args: Args) -> Self::Package;

    fn shape() -> PackageShape;
}

/// Package a flat target receives for `Args`.
pub type FlatPackage<'a, T, A, Args> = <Resolved<T, A, Args> as Convention>::Package<'a, A, Args>;

impl<'a, T, A, Args> Dispatch<'a, T, A, Args> for Flat
where
    A: 'a,
    Args: ArgList,
    T: UsesAllocator<A> + Construct<FlatPackage<'a, T, A, Args>>,
    T::Convention: Select<T, A, Args>,
{
    type Package = FlatPackage<'a, T, A, Args>;

    #[inline(always)]
    fn build(alloc: &'a A, args: Args) -> Self::Package {
        <Resolved<T, A, Args> as Convention>::package(alloc, args)
    }

    fn shape() -> PackageShape {
        PackageShape::Flat {
            convention: <Resolved<T, A, Args> as Convention>::KIND,
            arity: Args::LEN,
        }
    }
}

/// Package for a composite: one sub-package per component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiecewisePackage<F, S> {
    pub first: F,
    pub second: S,
}

impl<'a, P, A, Args> Dispatch<'a, P, A, Args> for Piecewise
where
    A: 'a,
    P: Composite,
    Args: PiecewiseArgs<P>,
    P::First: Buildable<'a, A, <Args as PiecewiseArgs<P>>::First>,
    P::Second: Buildable<'a, A, <Args as PiecewiseArgs<P>>::Second>,
{
    type Package = PiecewisePackage<
        <P::First as Buildable<'a, A, <Args as PiecewiseArgs<P>>::First>>::Package,
        <P::Second as Buildable<'a, A, <Args as PiecewiseArgs<P>>::Second>>::Package,
    >;

    #[inline(always)]
    fn build(alloc: &'a A, args: Args) -> Self::Package {
        let (first, second) = args.split();
        PiecewisePackage {
            first: <P::First as Buildable<'a, A, _>>::build_args(alloc, first),
            second: <P::Second as Buildable<'a, A, _>>::build_args(alloc, second),
        }
    }

    fn shape() -> PackageShape {
        PackageShape::Piecewise(
            Box::new(<P::First as Buildable<'a, A, <Args as PiecewiseArgs<P>>::First>>::shape()),
            Box::new(<P::Second as Buildable<'a, A, <Args as PiecewiseArgs<P>>::Second>>::shape()),
        )
    }
}

impl<P, F, S> Construct<PiecewisePackage<F, S>> for P
where
    P: Composite,
    P::First: Construct<F>,
    P::Second: Construct<S>,
{
    #[inline(always)]
    fn construct(package: PiecewisePackage<F, S>) -> Self {
        P::from_parts(
            <P::First as Construct<F>>::construct(package.first),
            <P::Second as Construct<S>>::construct(package.second),
        )
    }
}

/// `Self` has an argument package for allocator `A` and arguments `Args`.
///
/// Implemented for every [`ConstructionTarget`] whose dispatch strategy
/// accepts `Args`; this is the bound generic callers write.
pub trait Buildable<'a, A: 'a, Args>: Sized {
    type Package;

    fn build_args(alloc: &'a A, args: Args) -> Self::Package;

    fn shape() -> PackageShape;
}

impl<'a, T, A, Args> Buildable<'a, A, Args> for T
where
    A: 'a,
    T: ConstructionTarget<A>,
    T::Dispatch: Dispatch<'a, T, A, Args>,
{
    type Package = <T::Dispatch as Dispatch<'a, T, A, Args>>::Package;

    #[inline(always)]
    fn build_args(alloc: &'a A, args: Args) -> Self::Package {
        <T::Dispatch as Dispatch<'a, T, A, Args>>::build(alloc, args)
    }

    fn shape() -> PackageShape {
        <T::Dispatch as Dispatch<'a, T, A, Args>>::shape()
    }
}

/// Compute the arguments `T`'s constructor must receive.
///
/// Pure: the allocator is only borrowed into the package, never touched.
///
/// A type that does not take an allocator must accept the arguments
/// unchanged; otherwise the call does not compile:
///
/// ```compile_fail,E0277
/// use uses_alloc::{build_construction_args, not_allocator_aware};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// not_allocator_aware!(Point);
///
/// let arena = 0u8;
/// let _ = build_construction_args::<Point, _, _>(&arena, (1i32, 2i32));
/// ```
#[inline(always)]
pub fn build_construction_args<'a, T, A, Args>(alloc: &'a A, args: Args) -> T::Package
where
    T: Buildable<'a, A, Args>,
{
    T::build_args(alloc, args)
}

/// The package shape [`build_construction_args`] produces for these types.
pub fn package_shape<'a, T, A, Args>() -> PackageShape
where
    A: 'a,
    T: Buildable<'a, A, Args>,
{
    T::shape()
}

/// Shape of an argument package, for inspection only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageShape {
    /// One constructor call with `arity` caller arguments.
    Flat {
        convention: ConventionKind,
        arity: usize,
    },
    /// Independent packages for the first and second component.
    Piecewise(Box<PackageShape>, Box<PackageShape>),
}

impl PackageShape {
    /// Convention of a flat package.
    pub fn convention(&self) -> Option<ConventionKind> {
        match self {
            PackageShape::Flat { convention, .. } => Some(*convention),
            PackageShape::Piecewise(..) => None,
        }
    }

    pub fn is_piecewise(&self) -> bool {
        matches!(self, PackageShape::Piecewise(..))
    }

    /// Whether the allocator appears anywhere in the package.
    pub fn injects_allocator(&self) -> bool {
        match self {
            PackageShape::Flat { convention, .. } => convention.injects_allocator(),
            PackageShape::Piecewise(first, second) => {
                first.injects_allocator() || second.injects_allocator()
            }
        }
    }
}

impl fmt::Display for PackageShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageShape::Flat { convention, arity } => {
                let args = std::iter::repeat("_").take(*arity);
                let slots: Vec<&str> = match convention {
                    ConventionKind::NotAllocatorAware => args.collect(),
                    ConventionKind::LeadingTag => ["tag", "alloc"].into_iter().chain(args).collect(),
                    ConventionKind::TrailingArg => args.chain(["alloc"]).collect(),
                };
                write!(f, "({})", slots.join(", "))
            }
            PackageShape::Piecewise(first, second) => {
                write!(f, "piecewise[{}, {}]", first, second)
            }
        }
    }
}
