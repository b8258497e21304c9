//! `@Listen` decorator to static metadata transform.
//!
//! Scans the ordered class members once, strips the first `@Listen`
//! decorator from each decorated member, and collects the synthesized
//! listener records into a single static `listeners` member. The transform
//! is pure: input members are left untouched and the output is a fresh
//! member list, so re-running it on already-processed members is a silent
//! no-op that synthesizes nothing.

#[cfg(feature = "napi")]
use napi_derive::napi;
use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostic;
use crate::ir::{ClassMember, DecoratorArg, ListenOptions, StaticMember};
use crate::normalize::normalize_event_name;
use crate::synthesize::{synthesize_listener, to_listener_literal};

pub const LISTEN_DECORATOR: &str = "Listen";

/// Name of the synthesized static collection member.
pub const LISTENERS_STATIC: &str = "listeners";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListenTransformOutput {
    /// Input members with consumed decorators omitted, original order kept.
    pub members: Vec<ClassMember>,
    /// `Some` only when at least one listener record was synthesized.
    pub static_member: Option<StaticMember>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Run the transform over one class's members.
///
/// Diagnostics come out in member-then-sub-event traversal order, which is
/// observable to the driver and pinned by tests.
pub fn listen_decorators_to_static(members: &[ClassMember]) -> ListenTransformOutput {
    let mut listeners: Vec<serde_json::Value> = Vec::new();
    let mut diagnostics = Vec::new();

    let members = members
        .iter()
        .map(|member| listen_decorator_to_static(member, &mut listeners, &mut diagnostics))
        .collect();

    let static_member = if listeners.is_empty() {
        None
    } else {
        Some(StaticMember {
            name: LISTENERS_STATIC.to_string(),
            value: serde_json::Value::Array(listeners),
        })
    };

    ListenTransformOutput {
        members,
        static_member,
        diagnostics,
    }
}

fn listen_decorator_to_static(
    member: &ClassMember,
    listeners: &mut Vec<serde_json::Value>,
    diagnostics: &mut Vec<Diagnostic>,
) -> ClassMember {
    // Only the first @Listen per member is consumed; any further ones stay
    // on the member untouched.
    let found = member
        .decorators
        .iter()
        .position(|d| d.name == LISTEN_DECORATOR);
    let Some(index) = found else {
        return member.clone();
    };

    let mut stripped = member.clone();
    let decorator = stripped.decorators.remove(index);

    let listen_text = match decorator.args.first() {
        Some(DecoratorArg::Text(text)) => text,
        _ => {
            diagnostics.push(Diagnostic::error(format!(
                "@Listen() on \"{}\" requires an event name string as its first argument.",
                member.name
            )));
            return stripped;
        }
    };
    let opts = match decorator.args.get(1) {
        Some(DecoratorArg::Options(opts)) => opts.clone(),
        _ => ListenOptions::default(),
    };

    let event_names: Vec<&str> = listen_text.split(',').collect();
    if event_names.len() > 1 {
        diagnostics.push(Diagnostic::warn(
            "Deprecated @Listen() feature. Use multiple @Listen() decorators instead of \
             a comma-separated list of event names.",
        ));
    }

    for event_name in event_names {
        let (normalized, event_diagnostics) = normalize_event_name(event_name.trim(), opts.target);
        diagnostics.extend(event_diagnostics);

        let meta = synthesize_listener(&normalized.name, normalized.target, &member.name, &opts);
        listeners.push(to_listener_literal(&meta));
    }

    stripped
}

// ═══════════════════════════════════════════════════════════════════════════════
// NAPI ENTRY POINT
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "napi")]
#[napi]
pub fn transform_listeners_native(members_json: String) -> String {
    let members: Vec<ClassMember> = match serde_json::from_str(&members_json) {
        Ok(parsed) => parsed,
        Err(e) => {
            let failed = ListenTransformOutput {
                members: vec![],
                static_member: None,
                diagnostics: vec![Diagnostic::error(format!(
                    "Failed to parse class member JSON: {}",
                    e
                ))],
            };
            return serde_json::to_string(&failed).unwrap_or_default();
        }
    };

    let output = listen_decorators_to_static(&members);
    serde_json::to_string(&output).unwrap_or_default()
}
