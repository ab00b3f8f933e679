//! Retargeting: runtime reassignment of an entity's table reference.

use vcall::{Entity, Op, Variant};

fn trace_of(entity: &mut Entity, op: Op) -> String {
    let mut out = Vec::<u8>::new();
    entity.dispatch(op, &mut out).expect("dispatch must succeed");
    String::from_utf8(out).expect("trace output is UTF-8")
}

#[test]
fn retarget_preserves_payload() {
    let mut a = Entity::new(Variant::Base, 10);
    let before = a.payload;
    a.retarget(Variant::Derived);
    assert_eq!(a.payload, before, "retargeting must not touch payload");
}

#[test]
fn retarget_takes_effect_on_the_next_dispatch() {
    let mut a = Entity::new(Variant::Base, 10);
    assert_eq!(trace_of(&mut a, Op::Foo), "[Base::foo] payload=10\n");

    a.retarget(Variant::Derived);
    assert_eq!(
        trace_of(&mut a, Op::Foo),
        "[Derived::foo]  payload=10 (overrides Base::foo)\n",
        "the unchanged call site must now reach Derived's slot"
    );
    assert_eq!(
        trace_of(&mut a, Op::Bar),
        "[Derived::bar] payload=10 (overrides Base::bar)\n"
    );
}

#[test]
fn retarget_back_restores_original_behavior() {
    let mut a = Entity::new(Variant::Derived, 7);
    a.retarget(Variant::Base);
    assert_eq!(a.variant(), Variant::Base);
    assert_eq!(trace_of(&mut a, Op::Foo), "[Base::foo] payload=7\n");
}

#[test]
fn teardown_uses_the_variant_at_time_of_call() {
    let mut a = Entity::new(Variant::Base, 10);
    a.retarget(Variant::Derived);
    assert_eq!(
        trace_of(&mut a, Op::Destroy),
        "[Derived::~Derived] destroying (Base teardown not chained)\n",
        "destroy resolves through the current table like any other slot"
    );
}

#[test]
fn retarget_by_name_matches_typed_retarget() {
    let mut a = Entity::new(Variant::Base, 3);
    a.retarget_named("Derived")
        .expect("known variant name must retarget");
    assert_eq!(a.variant(), Variant::Derived);
    assert_eq!(a.payload, 3);
}

#[test]
fn retarget_by_unknown_name_leaves_entity_untouched() {
    let mut a = Entity::new(Variant::Base, 3);
    let err = a
        .retarget_named("Sideways")
        .expect_err("unknown variant name must be rejected");
    assert!(err.to_string().contains("Sideways"));
    assert_eq!(
        a.variant(),
        Variant::Base,
        "a failed retarget must not change the binding"
    );
    assert_eq!(a.payload, 3);
}
