//! Canonical listener metadata synthesis.
//!
//! Pure combination of a normalized event name, explicit options, and
//! inferred defaults into one `ListenerMetadata` record, plus its
//! serialization to the literal data node stored on the class.

use lazy_static::lazy_static;
use std::collections::HashSet;

use crate::ir::{ListenOptions, ListenTarget, ListenerMetadata};

lazy_static! {
    /// Event names that default to passive listeners when the decorator does
    /// not say otherwise. Matches the browsers' scroll-blocking event set.
    static ref PASSIVE_TRUE_DEFAULTS: HashSet<&'static str> = [
        "dragstart", "drag", "dragend", "dragenter", "dragover", "dragleave", "drop",
        "mouseenter", "mouseover", "mousemove", "mousedown", "mouseup", "mouseleave",
        "mouseout", "mousewheel",
        "pointerover", "pointerenter", "pointerdown", "pointermove", "pointerup",
        "pointercancel", "pointerout", "pointerleave",
        "resize",
        "scroll",
        "touchstart", "touchmove", "touchend", "touchenter", "touchleave", "touchcancel",
        "wheel",
    ]
    .iter()
    .copied()
    .collect();
}

/// Build the canonical metadata record for one listener.
///
/// Deterministic and pure: same inputs, same record, no ordering dependency.
pub fn synthesize_listener(
    name: &str,
    target: Option<ListenTarget>,
    method_name: &str,
    opts: &ListenOptions,
) -> ListenerMetadata {
    ListenerMetadata {
        name: name.to_string(),
        method: method_name.to_string(),
        target,
        capture: opts.capture.unwrap_or(false),
        passive: opts
            .passive
            .unwrap_or_else(|| PASSIVE_TRUE_DEFAULTS.contains(name.to_lowercase().as_str())),
        disabled: opts.enabled == Some(false),
    }
}

/// Serialize a listener record to the literal data node embedded in the
/// synthesized static member.
pub fn to_listener_literal(meta: &ListenerMetadata) -> serde_json::Value {
    serde_json::to_value(meta).unwrap_or(serde_json::Value::Null)
}
