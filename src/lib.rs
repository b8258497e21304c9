//! # Decorator & Output-Target Transforms (Native Core)
//!
//! Compile-time transforms run by the build driver before codegen:
//!
//! 1. **`@Listen` to static metadata**: legacy event-name spellings are
//!    reduced to one canonical form, each decorated member's listener is
//!    synthesized into a `ListenerMetadata` record, and all records land in
//!    a single static `listeners` class member the runtime consumes without
//!    re-parsing decorators.
//! 2. **Output-target validation**: the user's configured output targets
//!    are checked against the closed kind catalog, dispatched to per-kind
//!    validators, and reassembled in fixed kind order.
//!
//! ## Invariants
//!
//! 1. **Single pass**: each transform runs once per build, synchronously;
//!    re-running the listener transform on its own output is a silent no-op.
//! 2. **No unwinding**: bad input produces `Diagnostic` records, never a
//!    panic across the bridge. Errors are recoverable; halting the build on
//!    them is the driver's policy.
//! 3. **Deterministic diagnostics**: diagnostic order matches member and
//!    record traversal order, which the driver's console output and tests
//!    observe.
//! 4. **Pure transforms**: inputs are never mutated; outputs are fresh
//!    values with decorators omitted and defaults filled.

#[cfg(feature = "napi")]
use napi_derive::napi;

mod diagnostics;
mod ir;
mod normalize;
mod output_targets;
mod synthesize;
mod transform;

#[cfg(test)]
mod pipeline_tests;

pub use diagnostics::{Diagnostic, Severity};
pub use ir::{
    ClassMember, Decorator, DecoratorArg, ListenOptions, ListenTarget, ListenerMetadata,
    StaticMember,
};
pub use normalize::{normalize_event_name, NormalizedEvent};
pub use output_targets::{
    valid_output_types, validate_output_targets, DefaultValidators, OutputTargetKind,
    OutputTargetRecord, OutputValidators, ValidatedOutputTargets,
};
pub use synthesize::{synthesize_listener, to_listener_literal};
pub use transform::{
    listen_decorators_to_static, ListenTransformOutput, LISTENERS_STATIC, LISTEN_DECORATOR,
};

#[cfg(feature = "napi")]
pub use output_targets::validate_output_targets_native;
#[cfg(feature = "napi")]
pub use transform::transform_listeners_native;

#[cfg(feature = "napi")]
#[napi]
pub fn transforms_bridge() -> String {
    "Transforms Native Bridge Connected".to_string()
}
