//! # vcall - Manual Virtual Dispatch Demonstration
//!
//! `vcall` hand-builds the structures a compiler synthesizes for polymorphic
//! objects: a per-variant dispatch table of function pointers and a
//! per-entity reference to one of those tables. Indirect calls resolve
//! through the entity's current table on every dispatch, so retargeting the
//! reference changes behavior at an unchanged call site.
//!
//! ## Quick Start
//!
//! ```rust
//! use vcall::{Entity, Op, Variant};
//!
//! let mut out = Vec::<u8>::new();
//! let mut e = Entity::new(Variant::Base, 10);
//! e.dispatch(Op::Foo, &mut out).unwrap();   // Base::foo
//! e.retarget(Variant::Derived);
//! e.dispatch(Op::Foo, &mut out).unwrap();   // Derived::foo, same call site
//! ```
//!
//! The [`demo`] module scripts the full demonstration trace; the `vcall`
//! binary writes it to stdout.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use vcall_core::{
    // Error types
    DispatchError,
    // Entity
    Entity,
    // Table layout
    Op,
    OpFn,
    OperationTable,
    // Registry
    Variant,
    registry,
};

pub mod demo;
