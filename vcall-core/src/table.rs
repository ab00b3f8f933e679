//! The dispatch table layout.
//!
//! An [`OperationTable`] is what a compiler would emit as a vtable: an
//! ordered, fixed-size record of function pointers, one per virtual
//! operation. Every slot shares the [`OpFn`] signature, so selecting a slot
//! is the only decision point between behavioral variants.

use crate::entity::Entity;
use crate::error::DispatchError;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Signature shared by every slot in an [`OperationTable`].
///
/// The first argument is the entity the call was dispatched on; the second
/// is the sink the operation writes its trace line to. Operation bodies may
/// touch `payload`, nothing else fails except the sink write.
pub type OpFn = fn(&mut Entity, &mut dyn Write) -> std::io::Result<()>;

/// One behavioral variant's dispatch table.
///
/// Tables hold nothing but the three slots. Variant identity is not stored
/// here; it is recovered by comparing a table's address against the two
/// registry statics, exactly as the simulated ABI would compare vtable
/// pointers. See [`registry::variant_of`](crate::registry::variant_of).
///
/// The two process-wide instances are immutable after initialization, so a
/// table is safe to share across threads; entities are not.
#[derive(Debug)]
pub struct OperationTable {
    /// Variant-specific teardown. Never deallocates; entities are plain
    /// values owned by their scope.
    pub destroy: OpFn,
    /// The first demonstration operation.
    pub foo: OpFn,
    /// The second demonstration operation.
    pub bar: OpFn,
}

/// Selector for one of the three table slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// The `destroy` slot.
    Destroy,
    /// The `foo` slot.
    Foo,
    /// The `bar` slot.
    Bar,
}

impl Op {
    /// Read this selector's slot out of `table`.
    ///
    /// Callers resolve against the entity's current table on every call;
    /// the returned pointer must not be cached across calls.
    pub fn resolve(self, table: &OperationTable) -> OpFn {
        match self {
            Op::Destroy => table.destroy,
            Op::Foo => table.foo,
            Op::Bar => table.bar,
        }
    }

    /// The slot name as it appears in by-name dispatch.
    pub fn name(self) -> &'static str {
        match self {
            Op::Destroy => "destroy",
            Op::Foo => "foo",
            Op::Bar => "bar",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Op {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "destroy" => Ok(Op::Destroy),
            "foo" => Ok(Op::Foo),
            "bar" => Ok(Op::Bar),
            other => Err(DispatchError::UnknownOperation(other.to_string())),
        }
    }
}
