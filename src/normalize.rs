//! Legacy `@Listen` event-name normalization.
//!
//! Two deprecated spellings are still accepted and reduced to the canonical
//! form: a target prefix (`"window:click"`) and a keycode suffix
//! (`"keydown.enter"`). The prefix form keeps working behind a deprecation
//! warning; the keycode form is reported as an error but the truncated name
//! is still used so one stale decorator cannot abort the whole pass.

use lazy_static::lazy_static;
use std::collections::HashSet;

use crate::diagnostics::Diagnostic;
use crate::ir::ListenTarget;

lazy_static! {
    static ref VALID_KEYCODE_SUFFIXES: HashSet<&'static str> = [
        "enter", "escape", "space", "tab", "up", "right", "down", "left",
    ]
    .iter()
    .copied()
    .collect();
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEvent {
    pub name: String,
    pub target: Option<ListenTarget>,
}

/// Reduce a raw `@Listen` event name to its canonical form.
///
/// An explicit `target` option disables target-prefix parsing entirely; the
/// raw name is then only checked for the keycode suffix.
pub fn normalize_event_name(
    raw: &str,
    explicit_target: Option<ListenTarget>,
) -> (NormalizedEvent, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let mut name = raw.to_string();
    let mut target = explicit_target;

    // DEPRECATED: `TARGET:event` prefix syntax. Only the prefix comparison
    // is case-insensitive.
    if target.is_none() {
        let mut parts = raw.splitn(2, ':');
        if let (Some(prefix), Some(event)) = (parts.next(), parts.next()) {
            let prefix = prefix.trim().to_lowercase();
            if let Some(parsed) = ListenTarget::parse(&prefix) {
                name = event.trim().to_string();
                target = Some(parsed);
                diagnostics.push(Diagnostic::warn(format!(
                    "Deprecated @Listen() feature. Use @Listen('{}', {{ target: '{}' }}) instead.",
                    name, prefix
                )));
            }
        }
    }

    // DEPRECATED: `event.KEY` keycode suffix. Exactly two dot segments
    // trigger the check; three or more pass through untouched, so event
    // names that legitimately contain dots keep working.
    let segments: Vec<&str> = name.split('.').collect();
    if segments.len() == 2 && VALID_KEYCODE_SUFFIXES.contains(segments[1]) {
        name = segments[0].to_string();
        diagnostics.push(Diagnostic::error(
            "Deprecated @Listen() feature. Using a keycode suffix is no longer supported, \
             check \"event.key\" within the handler instead.",
        ));
    }

    (NormalizedEvent { name, target }, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;

    fn normalize(raw: &str) -> (NormalizedEvent, Vec<Diagnostic>) {
        normalize_event_name(raw, None)
    }

    #[test]
    fn plain_name_is_identity() {
        let (ev, diags) = normalize("click");
        assert_eq!(ev.name, "click");
        assert_eq!(ev.target, None);
        assert!(diags.is_empty());
    }

    #[test]
    fn target_prefix_is_split_and_warned() {
        let (ev, diags) = normalize("window:click");
        assert_eq!(ev.name, "click");
        assert_eq!(ev.target, Some(ListenTarget::Window));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert!(diags[0].message.contains("{ target: 'window' }"));
    }

    #[test]
    fn target_prefix_match_is_case_insensitive() {
        let (ev, diags) = normalize("WINDOW: click");
        assert_eq!(ev.name, "click");
        assert_eq!(ev.target, Some(ListenTarget::Window));
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn unknown_prefix_passes_through() {
        let (ev, diags) = normalize("host:click");
        assert_eq!(ev.name, "host:click");
        assert_eq!(ev.target, None);
        assert!(diags.is_empty());
    }

    #[test]
    fn explicit_target_disables_prefix_parsing() {
        let (ev, diags) = normalize_event_name("window:click", Some(ListenTarget::Body));
        assert_eq!(ev.name, "window:click");
        assert_eq!(ev.target, Some(ListenTarget::Body));
        assert!(diags.is_empty());
    }

    #[test]
    fn keycode_suffix_is_dropped_with_error() {
        let (ev, diags) = normalize("click.enter");
        assert_eq!(ev.name, "click");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Error);
    }

    #[test]
    fn three_dot_segments_are_exempt() {
        let (ev, diags) = normalize("click.enter.extra");
        assert_eq!(ev.name, "click.enter.extra");
        assert!(diags.is_empty());
    }

    #[test]
    fn non_keycode_suffix_is_kept() {
        let (ev, diags) = normalize("my.event");
        assert_eq!(ev.name, "my.event");
        assert!(diags.is_empty());
    }

    // Pins the historical asymmetry: the prefix check lowercases, the
    // suffix check does not.
    #[test]
    fn keycode_suffix_match_is_case_sensitive() {
        let (ev, diags) = normalize("click.Enter");
        assert_eq!(ev.name, "click.Enter");
        assert!(diags.is_empty());
    }

    #[test]
    fn prefix_and_suffix_compose() {
        let (ev, diags) = normalize("body:keydown.escape");
        assert_eq!(ev.name, "keydown");
        assert_eq!(ev.target, Some(ListenTarget::Body));
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert_eq!(diags[1].severity, Severity::Error);
    }
}
