//! uses-alloc - allocator-aware construction.
//!
//! Given a target type, a borrowed allocator and constructor arguments, this
//! crate computes the arguments the type's constructor must actually receive:
//! the arguments unchanged when the type does not take an allocator, the
//! allocator behind an [`AllocatorArg`] tag in leading position, or the
//! allocator appended last. Paired values are built piecewise, each component
//! with its own package and the same allocator. The choice is made by trait
//! resolution; an impossible construction fails to compile.
//!
//! # Primary Usage
//!
//! ```ignore
//! use bumpalo::{collections::String as BumpString, Bump};
//! use uses_alloc::{make_value, Pair};
//!
//! let arena = Bump::new();
//!
//! // i32 ignores the arena, the bump string receives it as its last argument.
//! let pair: Pair<i32, BumpString<'_>> = make_value(&arena, (5, "x"));
//! ```
//!
//! # Architecture
//!
//! - [`core`] - Capability query, composites, package builder, materializer
//! - [`arena`] - Declarations for `bumpalo`, `allocator-api2` and `hashbrown` containers

pub mod arena;
pub mod core;

pub use crate::core::{
    // Capability query
    convention_of, uses_allocator, AllocatorArg, ByArguments, Convention, ConventionFor,
    ConventionKind, Declaration, Injecting, LeadingTag, NotAllocatorAware, Resolved, Select,
    SelectConvention, Supports, TrailingArg, UsesAllocator,
    // Argument lists
    ArgList, Construct,
    // Composites
    Composite, Pair, PiecewiseArgs, PiecewiseConstruct,
    // Package builder
    build_construction_args, is_composite, package_shape, Buildable, ConstructionTarget, Flat,
    PackageShape, Piecewise, PiecewisePackage,
    // Materializer
    construct_at, construct_in_place, make_value, try_construct_at, PlacementError,
    PlacementResult,
};
