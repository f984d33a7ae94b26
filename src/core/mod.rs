// This module is the hub of uses-alloc's construction machinery. It exports the pieces that
// together decide, per target type and at compile time, which arguments a constructor
// receives when an allocator is in play: the capability query (UsesAllocator and the three
// conventions), argument lists and constructibility (ArgList, Construct), the composite
// recognizer (Composite, Pair, PiecewiseArgs), the argument package builder
// (ConstructionTarget, Buildable, build_construction_args) and the object materializer
// (make_value, construct_in_place, construct_at). Runtime errors are limited to checked
// placement and live in error.

//! Core allocator-aware construction infrastructure.
//!
//! # Key Components
//!
//! ## Capability Query (`capability`)
//! - [`UsesAllocator`] declares whether a type takes an allocator
//! - Sealed conventions: [`NotAllocatorAware`], [`LeadingTag`], [`TrailingArg`]
//! - [`ByArguments`] + [`ConventionFor`] choose the convention per argument list
//! - [`Supports`] resolves types accepting both conventions to leading-tag
//!
//! ## Composite Recognizer (`composite`)
//! - [`Composite`] components of paired values
//! - [`PiecewiseArgs`] call shapes accepted by composites
//!
//! ## Argument Package Builder (`builder`)
//! - [`ConstructionTarget`] descriptor: [`Flat`] or [`Piecewise`]
//! - [`build_construction_args`] and [`PackageShape`] introspection
//!
//! ## Object Materializer (`materialize`)
//! - [`make_value`], [`construct_in_place`], [`construct_at`]
//!
//! # Design Principles
//!
//! 1. **Compile-time dispatch**: the package shape is a type, never a runtime flag
//! 2. **Borrowed allocators**: packages hold `&A` and cannot outlive it
//! 3. **Hard failures**: an impossible construction is a compile error

pub mod args;
pub mod builder;
pub mod capability;
pub mod composite;
pub mod error;
pub mod materialize;
pub mod passthrough;
pub mod test_utils;

pub use args::{ArgList, Construct};

pub use builder::{
    build_construction_args,
    is_composite,
    package_shape,
    Buildable,
    ConstructionTarget,
    Dispatch,
    DispatchKind,
    Flat,
    FlatPackage,
    PackageShape,
    Piecewise,
    PiecewisePackage,
};

pub use capability::{
    convention_of,
    uses_allocator,
    AllocatorArg,
    ByArguments,
    Convention,
    ConventionFor,
    ConventionKind,
    Declaration,
    Injecting,
    LeadingTag,
    NotAllocatorAware,
    Resolved,
    Select,
    SelectConvention,
    Supports,
    TrailingArg,
    UsesAllocator,
};

pub use composite::{Composite, Pair, PiecewiseArgs, PiecewiseConstruct};

pub use error::{PlacementError, PlacementResult};

pub use materialize::{construct_at, construct_in_place, make_value, try_construct_at};
