//! Output-target configuration validation.
//!
//! The user config carries an ordered list of output-target records. This
//! pass flags unknown `type` strings, partitions the recognized records by
//! kind, hands each partition to its validator, and reassembles the
//! normalized list in fixed kind order (collection, custom-elements, lazy,
//! www). Cross-kind input order is deliberately not preserved; order within
//! a kind is.

#[cfg(feature = "napi")]
use napi_derive::napi;
use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostic;

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDS AND KINDS
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputTargetRecord {
    #[serde(rename = "type")]
    pub target_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<bool>,
}

/// The closed set of output-target kinds this compiler emits.
///
/// Both the allow-list and the dispatch below derive from this enum, so
/// adding a kind without wiring its validator is a compile error instead of
/// a silently dropped record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTargetKind {
    DistCollection,
    DistCustomElements,
    DistLazy,
    Www,
}

impl OutputTargetKind {
    /// Fixed validation and output order.
    pub const ALL: [OutputTargetKind; 4] = [
        OutputTargetKind::DistCollection,
        OutputTargetKind::DistCustomElements,
        OutputTargetKind::DistLazy,
        OutputTargetKind::Www,
    ];

    pub fn type_str(self) -> &'static str {
        match self {
            OutputTargetKind::DistCollection => "dist-collection",
            OutputTargetKind::DistCustomElements => "dist-custom-elements",
            OutputTargetKind::DistLazy => "dist-lazy",
            OutputTargetKind::Www => "www",
        }
    }

    pub fn classify(record: &OutputTargetRecord) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.type_str() == record.target_type)
    }
}

/// Allow-list of valid `type` strings, derived from the kind enum.
pub fn valid_output_types() -> Vec<&'static str> {
    OutputTargetKind::ALL.iter().map(|k| k.type_str()).collect()
}

// ═══════════════════════════════════════════════════════════════════════════════
// PER-KIND VALIDATORS
// ═══════════════════════════════════════════════════════════════════════════════

/// Per-kind validation collaborators. Each method receives the records of
/// its kind in user order and returns the normalized sub-list plus any
/// diagnostics it raised.
pub trait OutputValidators {
    fn validate_collection(
        &self,
        targets: Vec<OutputTargetRecord>,
    ) -> (Vec<OutputTargetRecord>, Vec<Diagnostic>);

    fn validate_custom_elements(
        &self,
        targets: Vec<OutputTargetRecord>,
    ) -> (Vec<OutputTargetRecord>, Vec<Diagnostic>);

    fn validate_lazy(
        &self,
        targets: Vec<OutputTargetRecord>,
    ) -> (Vec<OutputTargetRecord>, Vec<Diagnostic>);

    fn validate_www(
        &self,
        targets: Vec<OutputTargetRecord>,
    ) -> (Vec<OutputTargetRecord>, Vec<Diagnostic>);
}

/// Stock defaulting behavior for each kind.
pub struct DefaultValidators;

impl DefaultValidators {
    fn default_dir(
        mut targets: Vec<OutputTargetRecord>,
        dir: &str,
    ) -> (Vec<OutputTargetRecord>, Vec<Diagnostic>) {
        for t in &mut targets {
            if t.dir.is_none() {
                t.dir = Some(dir.to_string());
            }
        }
        (targets, vec![])
    }
}

impl OutputValidators for DefaultValidators {
    fn validate_collection(
        &self,
        targets: Vec<OutputTargetRecord>,
    ) -> (Vec<OutputTargetRecord>, Vec<Diagnostic>) {
        Self::default_dir(targets, "dist/collection")
    }

    fn validate_custom_elements(
        &self,
        targets: Vec<OutputTargetRecord>,
    ) -> (Vec<OutputTargetRecord>, Vec<Diagnostic>) {
        Self::default_dir(targets, "dist/components")
    }

    fn validate_lazy(
        &self,
        targets: Vec<OutputTargetRecord>,
    ) -> (Vec<OutputTargetRecord>, Vec<Diagnostic>) {
        let (mut targets, diagnostics) = Self::default_dir(targets, "dist");
        for t in &mut targets {
            if t.empty.is_none() {
                t.empty = Some(true);
            }
        }
        (targets, diagnostics)
    }

    fn validate_www(
        &self,
        targets: Vec<OutputTargetRecord>,
    ) -> (Vec<OutputTargetRecord>, Vec<Diagnostic>) {
        let (mut targets, diagnostics) = Self::default_dir(targets, "www");
        for t in &mut targets {
            if t.empty.is_none() {
                t.empty = Some(true);
            }
            let mut base_url = t.base_url.take().unwrap_or_else(|| "/".to_string());
            if !base_url.ends_with('/') {
                base_url.push('/');
            }
            t.base_url = Some(base_url);
        }
        (targets, diagnostics)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// REGISTRY
// ═══════════════════════════════════════════════════════════════════════════════

/// Validate the user's output-target list.
///
/// Unknown-type detection and kind dispatch are independent passes: a record
/// with a bad `type` is reported in input order first, and a record no kind
/// claims is excluded from the output without a second diagnostic.
pub fn validate_output_targets(
    user_targets: &[OutputTargetRecord],
    allowed_types: &[&str],
    validators: &dyn OutputValidators,
) -> (Vec<OutputTargetRecord>, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();

    for target in user_targets {
        if !allowed_types.contains(&target.target_type.as_str()) {
            diagnostics.push(Diagnostic::error(format!(
                "invalid outputTarget type \"{}\". Valid outputTarget types include: {}",
                target.target_type,
                allowed_types
                    .iter()
                    .map(|t| format!("\"{}\"", t))
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }
    }

    let mut normalized = Vec::new();
    for kind in OutputTargetKind::ALL {
        let partition: Vec<OutputTargetRecord> = user_targets
            .iter()
            .filter(|t| OutputTargetKind::classify(t) == Some(kind))
            .cloned()
            .collect();

        let (mut validated, kind_diagnostics) = match kind {
            OutputTargetKind::DistCollection => validators.validate_collection(partition),
            OutputTargetKind::DistCustomElements => validators.validate_custom_elements(partition),
            OutputTargetKind::DistLazy => validators.validate_lazy(partition),
            OutputTargetKind::Www => validators.validate_www(partition),
        };
        normalized.append(&mut validated);
        diagnostics.extend(kind_diagnostics);
    }

    (normalized, diagnostics)
}

// ═══════════════════════════════════════════════════════════════════════════════
// NAPI ENTRY POINT
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedOutputTargets {
    pub output_targets: Vec<OutputTargetRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

#[cfg(feature = "napi")]
#[napi]
pub fn validate_output_targets_native(targets_json: String) -> String {
    let targets: Vec<OutputTargetRecord> = match serde_json::from_str(&targets_json) {
        Ok(parsed) => parsed,
        Err(e) => {
            let failed = ValidatedOutputTargets {
                output_targets: vec![],
                diagnostics: vec![Diagnostic::error(format!(
                    "Failed to parse output target JSON: {}",
                    e
                ))],
            };
            return serde_json::to_string(&failed).unwrap_or_default();
        }
    };

    let allowed = valid_output_types();
    let (output_targets, diagnostics) =
        validate_output_targets(&targets, &allowed, &DefaultValidators);
    serde_json::to_string(&ValidatedOutputTargets {
        output_targets,
        diagnostics,
    })
    .unwrap_or_default()
}
