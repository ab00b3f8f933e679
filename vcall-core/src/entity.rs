//! The polymorphic object representation.

use crate::error::DispatchError;
use crate::registry::{self, Variant};
use crate::table::{Op, OperationTable};
use std::io::Write;

/// A polymorphic object: a dispatch table reference plus payload data.
///
/// The table reference is the object's only link to behavior. It is a
/// `&'static` reference, so it can never be null while the entity is live;
/// it is set together with `payload` at construction and reassigned only by
/// [`Entity::retarget`]. Entities are plain values owned by their scope,
/// with no teardown of their own; the `destroy` slot is a traced operation
/// like any other.
///
/// Entities are not thread-safe. [`dispatch`](Entity::dispatch) and
/// [`retarget`](Entity::retarget) both use the table reference without
/// synchronization, so an entity must stay confined to one owning context.
#[derive(Debug)]
pub struct Entity {
    table: &'static OperationTable,
    /// Per-instance state, read by the operation bodies.
    pub payload: i32,
}

impl Entity {
    /// Construct an entity bound to `variant`'s table.
    ///
    /// Both fields are set before the value exists, so no partially
    /// initialized entity is ever observable.
    pub fn new(variant: Variant, payload: i32) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(variant = %variant, payload, "constructing entity");
        Self {
            table: variant.table(),
            payload,
        }
    }

    /// Construct an entity from a variant name.
    ///
    /// Unknown names are rejected; see [`DispatchError::UnknownVariant`].
    pub fn named(variant: &str, payload: i32) -> Result<Self, DispatchError> {
        Ok(Self::new(variant.parse()?, payload))
    }

    /// The table this entity currently dispatches through.
    pub fn table(&self) -> &'static OperationTable {
        self.table
    }

    /// The variant this entity is currently bound to.
    ///
    /// Recovered from the table reference by pointer identity. The table
    /// field can only be set through [`Variant::table`], so a miss here is
    /// a broken invariant and treated as fatal.
    pub fn variant(&self) -> Variant {
        registry::variant_of(self.table)
            .expect("entity table must be one of the registry statics")
    }

    /// Invoke one of the three operations, resolving the implementation
    /// through the entity's current table.
    ///
    /// Resolution happens on every call. The slot read and the indirect
    /// call are deliberately separate steps so the mechanism stays visible:
    /// retargeting between two calls changes which implementation the same
    /// call site reaches.
    pub fn dispatch(&mut self, op: Op, out: &mut dyn Write) -> Result<(), DispatchError> {
        #[cfg(feature = "tracing")]
        tracing::trace!(op = %op, variant = %self.variant(), "dispatching through table");
        // Resolve against the current table; never cache the slot.
        let slot = op.resolve(self.table);
        slot(self, out)?;
        Ok(())
    }

    /// Invoke an operation by name.
    pub fn dispatch_named(&mut self, op: &str, out: &mut dyn Write) -> Result<(), DispatchError> {
        self.dispatch(op.parse()?, out)
    }

    /// Rebind this entity to `variant`'s table, leaving `payload` untouched.
    ///
    /// Subsequent dispatches use the new variant's implementations. This
    /// models a vtable-pointer overwrite in the simulated ABI; here it is a
    /// type-checked reassignment, so the entity can never end up pointing
    /// at anything but a registry table.
    pub fn retarget(&mut self, variant: Variant) {
        #[cfg(feature = "tracing")]
        tracing::debug!(from = %self.variant(), to = %variant, "retargeting entity");
        self.table = variant.table();
    }

    /// Rebind this entity to the table of the variant named `variant`.
    pub fn retarget_named(&mut self, variant: &str) -> Result<(), DispatchError> {
        self.retarget(variant.parse()?);
        Ok(())
    }
}
