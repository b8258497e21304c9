use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════════
// CLASS IR (decorator path input)
// ═══════════════════════════════════════════════════════════════════════════════

/// One class member as shipped by the build driver: its name plus whatever
/// decorator invocations were attached to it in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassMember {
    pub name: String,
    #[serde(default)]
    pub decorators: Vec<Decorator>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decorator {
    pub name: String,
    #[serde(default)]
    pub args: Vec<DecoratorArg>,
}

/// Positional decorator argument. `@Listen` takes a string literal first and
/// an optional options object second; anything else is a user error the
/// transform reports instead of crashing on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DecoratorArg {
    Text(String),
    Options(ListenOptions),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ListenOptions {
    pub target: Option<ListenTarget>,
    pub capture: Option<bool>,
    pub passive: Option<bool>,
    pub enabled: Option<bool>,
}

/// Where the runtime attaches the listener when it is not the host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListenTarget {
    Parent,
    Body,
    Document,
    Window,
}

impl ListenTarget {
    /// Parse an already-lowercased target string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "parent" => Some(ListenTarget::Parent),
            "body" => Some(ListenTarget::Body),
            "document" => Some(ListenTarget::Document),
            "window" => Some(ListenTarget::Window),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListenTarget::Parent => "parent",
            ListenTarget::Body => "body",
            ListenTarget::Document => "document",
            ListenTarget::Window => "window",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SYNTHESIZED OUTPUT (decorator path)
// ═══════════════════════════════════════════════════════════════════════════════

/// Canonical listener record. One per event name per decorated member; the
/// runtime wires handlers straight from these without re-parsing decorators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListenerMetadata {
    pub name: String,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<ListenTarget>,
    pub capture: bool,
    pub passive: bool,
    pub disabled: bool,
}

/// A synthesized class-level static member holding a literal data node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticMember {
    pub name: String,
    pub value: serde_json::Value,
}
