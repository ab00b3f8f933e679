//! # vcall-core
//!
//! Hand-rolled virtual dispatch, the way a compiler would lay it out.
//!
//! This crate builds by hand the two structures a compiler synthesizes for
//! polymorphic objects, then exposes the operations that exercise them:
//!
//! - [`OperationTable`] — a fixed record of three function pointers
//!   (`destroy`, `foo`, `bar`), one record per behavioral variant. The two
//!   variant tables live as immutable `static` items in [`registry`] and are
//!   shared by every entity of that variant.
//! - [`Entity`] — the object representation: a reference to one table plus
//!   an integer payload. The table reference is set at construction and may
//!   be reassigned later with [`Entity::retarget`].
//!
//! Every call goes through the entity's *current* table reference, so a
//! single call site changes behavior when the entity is retargeted. That
//! call-time resolution is the whole point of the mechanism; nothing here
//! ever caches a resolved slot.
//!
//! Selectors come in two forms: the strongly-typed [`Variant`] and [`Op`]
//! enums, and checked by-name lookups that return [`DispatchError`] for
//! unrecognized names.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod entity;
mod error;
pub mod registry;
mod table;

pub use entity::Entity;
pub use error::DispatchError;
pub use registry::Variant;
pub use table::{Op, OpFn, OperationTable};
