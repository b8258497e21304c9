//! End-to-end invariant tests for the transform pipeline:
//! - diagnostic ordering follows deterministic member/record traversal
//! - legacy syntax reduction composes with metadata synthesis
//! - the output-target registry's fixed kind precedence

#[cfg(test)]
mod tests {
    use crate::diagnostics::Severity;
    use crate::ir::{ClassMember, Decorator, DecoratorArg, ListenOptions, ListenTarget};
    use crate::output_targets::{
        valid_output_types, validate_output_targets, DefaultValidators, OutputTargetRecord,
    };
    use crate::transform::{listen_decorators_to_static, LISTEN_DECORATOR};

    fn listen_member(name: &str, event: &str, opts: Option<ListenOptions>) -> ClassMember {
        let mut args = vec![DecoratorArg::Text(event.to_string())];
        if let Some(opts) = opts {
            args.push(DecoratorArg::Options(opts));
        }
        ClassMember {
            name: name.to_string(),
            decorators: vec![Decorator {
                name: LISTEN_DECORATOR.to_string(),
                args,
            }],
        }
    }

    #[test]
    fn legacy_prefix_flows_into_static_member() {
        let members = vec![listen_member("onClick", "window:click", None)];
        let out = listen_decorators_to_static(&members);

        assert_eq!(out.diagnostics.len(), 1);
        assert_eq!(out.diagnostics[0].severity, Severity::Warning);

        let records = out.static_member.unwrap().value;
        assert_eq!(records[0]["name"], "click");
        assert_eq!(records[0]["target"], "window");
        assert_eq!(records[0]["method"], "onClick");
    }

    #[test]
    fn diagnostics_follow_member_traversal_order() {
        let members = vec![
            listen_member("onKeys", "click,keydown", None),
            ClassMember {
                name: "render".to_string(),
                decorators: vec![],
            },
            listen_member("onEnter", "keydown.enter", None),
        ];
        let out = listen_decorators_to_static(&members);

        // Comma warning from the first member, then the keycode error from
        // the third. Never interleaved, never reordered.
        assert_eq!(out.diagnostics.len(), 2);
        assert_eq!(out.diagnostics[0].severity, Severity::Warning);
        assert_eq!(out.diagnostics[1].severity, Severity::Error);

        let records = out.static_member.unwrap().value;
        let names: Vec<&str> = records
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["click", "keydown", "keydown"]);
    }

    #[test]
    fn passive_default_applies_after_normalization() {
        // "body:mousedown" normalizes to "mousedown", which is in the
        // passive-by-default set.
        let members = vec![listen_member("onDown", "body:mousedown", None)];
        let out = listen_decorators_to_static(&members);

        let records = out.static_member.unwrap().value;
        assert_eq!(records[0]["passive"], true);
        assert_eq!(records[0]["target"], "body");
    }

    #[test]
    fn explicit_target_wins_over_prefix() {
        let members = vec![listen_member(
            "onClick",
            "window:click",
            Some(ListenOptions {
                target: Some(ListenTarget::Document),
                ..Default::default()
            }),
        )];
        let out = listen_decorators_to_static(&members);

        assert!(out.diagnostics.is_empty());
        let records = out.static_member.unwrap().value;
        assert_eq!(records[0]["name"], "window:click");
        assert_eq!(records[0]["target"], "document");
    }

    #[test]
    fn registry_reorders_mixed_kinds_and_reports_unknowns() {
        let record = |t: &str| OutputTargetRecord {
            target_type: t.to_string(),
            ..Default::default()
        };
        let targets = vec![
            record("www"),
            record("bogus"),
            record("dist-lazy"),
            record("dist-collection"),
        ];
        let (normalized, diagnostics) =
            validate_output_targets(&targets, &valid_output_types(), &DefaultValidators);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("\"bogus\""));

        let types: Vec<&str> = normalized.iter().map(|t| t.target_type.as_str()).collect();
        assert_eq!(types, vec!["dist-collection", "dist-lazy", "www"]);
    }
}
