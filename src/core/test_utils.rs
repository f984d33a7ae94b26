// This module provides the arena fixture shared by unit tests. TestContext owns a bumpalo Bump
// that construction calls borrow as their allocator, optionally with a bounded first chunk,
// and reports how many bytes the arena has reserved so tests can check that pass-through
// construction leaves it untouched. The helpers run a closure against a fresh context.

//! Test utilities for arena-based testing.
//!
//! Arena-backed tests borrow a `Bump` from a [`test::TestContext`] so each
//! test gets its own bounded allocator and can inspect how much it used.
