// This module groups the allocator-aware declarations for third-party containers: bump covers
// bumpalo's own collections against Bump, api2 covers the allocator-api2 Vec and Box and the
// hashbrown HashMap against any allocator reference implementing the allocator-api2 Allocator
// trait. The modules only contribute trait impls that the builder resolves.

//! Allocator-aware declarations for third-party containers.
//!
//! - [`bump`]: `bumpalo::collections::{String, Vec}` against `Bump`.
//! - [`api2`]: `allocator_api2::{vec::Vec, boxed::Box}` and `hashbrown::HashMap`
//!   against any `B` where `&B: Allocator`.
//!
//! Nothing here is called directly; the modules only add trait impls the
//! builder picks up.

pub mod api2;
pub mod bump;
