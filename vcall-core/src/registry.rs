//! The table registry: the two variant tables as process-wide constants.
//!
//! Exactly two [`OperationTable`] instances exist, one per variant. They are
//! plain `static` items, immutable after initialization and owned by nobody;
//! every entity of a variant shares that variant's table by reference.
//! Adding a third variant means adding a third static and a third [`Variant`]
//! arm, not changing any lookup logic.

use crate::entity::Entity;
use crate::error::DispatchError;
use crate::table::OperationTable;
use std::fmt;
use std::io::Write;
use std::ptr;
use std::str::FromStr;

/// The named behavioral variants the registry holds tables for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// The base behavior set.
    Base,
    /// The overriding behavior set.
    Derived,
}

impl Variant {
    /// The shared table holding this variant's slot implementations.
    pub fn table(self) -> &'static OperationTable {
        match self {
            Variant::Base => &BASE,
            Variant::Derived => &DERIVED,
        }
    }

    /// The variant name as it appears in by-name lookups.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Base => "Base",
            Variant::Derived => "Derived",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Base" => Ok(Variant::Base),
            "Derived" => Ok(Variant::Derived),
            other => Err(DispatchError::UnknownVariant(other.to_string())),
        }
    }
}

/// The shared table for [`Variant::Base`].
pub static BASE: OperationTable = OperationTable {
    destroy: base::destroy,
    foo: base::foo,
    bar: base::bar,
};

/// The shared table for [`Variant::Derived`].
pub static DERIVED: OperationTable = OperationTable {
    destroy: derived::destroy,
    foo: derived::foo,
    bar: derived::bar,
};

/// Look up the table for a strongly-typed variant selector.
///
/// Infallible: only known variants exist at this call's type.
pub fn get_table(variant: Variant) -> &'static OperationTable {
    variant.table()
}

/// Look up the table for a variant by name.
///
/// Unknown names are a caller error and are rejected rather than silently
/// mapped to a default table.
pub fn lookup(name: &str) -> Result<&'static OperationTable, DispatchError> {
    Ok(name.parse::<Variant>()?.table())
}

/// Recover the variant a table belongs to, by pointer identity.
///
/// Returns `None` for a table that is not one of the two registry statics.
/// An entity can only ever be bound through [`Variant::table`], so `None`
/// indicates a broken invariant on the caller's side.
pub fn variant_of(table: &'static OperationTable) -> Option<Variant> {
    if ptr::eq(table, &BASE) {
        Some(Variant::Base)
    } else if ptr::eq(table, &DERIVED) {
        Some(Variant::Derived)
    } else {
        None
    }
}

mod base {
    use super::{Entity, Write};

    pub(super) fn destroy(_entity: &mut Entity, out: &mut dyn Write) -> std::io::Result<()> {
        // Entities are plain values; there is nothing to free.
        writeln!(out, "[Base::~Base] destroying")
    }

    pub(super) fn foo(entity: &mut Entity, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "[Base::foo] payload={}", entity.payload)
    }

    pub(super) fn bar(entity: &mut Entity, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "[Base::bar] payload={}", entity.payload)
    }
}

mod derived {
    use super::{Entity, Write};

    pub(super) fn destroy(_entity: &mut Entity, out: &mut dyn Write) -> std::io::Result<()> {
        // Teardown is not chained: Base teardown does not run after this.
        writeln!(out, "[Derived::~Derived] destroying (Base teardown not chained)")
    }

    pub(super) fn foo(entity: &mut Entity, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "[Derived::foo]  payload={} (overrides Base::foo)", entity.payload)
    }

    pub(super) fn bar(entity: &mut Entity, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "[Derived::bar] payload={} (overrides Base::bar)", entity.payload)
    }
}
