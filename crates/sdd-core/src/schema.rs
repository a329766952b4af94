//! Shape validation for raw agent definitions.
//!
//! Validation is total: any YAML value yields either a normalized
//! [`AgentDefinition`] or a [`ValidationError`] listing every offending field.

use crate::agent::{AgentDefinition, DEFAULT_EMOJI};
use serde_yaml::{Mapping, Value};
use std::fmt;

/// Minimum number of characters in `systemPrompt`.
pub const MIN_SYSTEM_PROMPT_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn has_issue(&self, field: &str) -> bool {
        self.issues.iter().any(|i| i.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .issues
            .iter()
            .map(|i| format!("{}: {}", i.field, i.message))
            .collect();
        write!(f, "schema validation failed ({})", parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// Validate a parsed definition document.
pub fn validate(raw: &Value) -> Result<AgentDefinition, ValidationError> {
    let Some(map) = raw.as_mapping() else {
        return Err(ValidationError {
            issues: vec![FieldIssue {
                field: "definition",
                message: "expected a mapping of fields".to_string(),
            }],
        });
    };

    let mut issues = Vec::new();

    let name = required_string(map, "name", 1, &mut issues);
    let role = required_string(map, "role", 1, &mut issues);
    let system_prompt = required_string(map, "systemPrompt", MIN_SYSTEM_PROMPT_LEN, &mut issues);
    let emoji = optional_string(map, "emoji", &mut issues);
    let description = optional_string(map, "description", &mut issues);
    let rules = optional_string_list(map, "rules", &mut issues);
    let tools = optional_string_list(map, "tools", &mut issues);

    if !issues.is_empty() {
        return Err(ValidationError { issues });
    }

    Ok(AgentDefinition {
        name: name.unwrap_or_default(),
        role: role.unwrap_or_default(),
        emoji: emoji.unwrap_or_else(|| DEFAULT_EMOJI.to_string()),
        system_prompt: system_prompt.unwrap_or_default(),
        rules,
        tools,
        description,
    })
}

fn required_string(
    map: &Mapping,
    field: &'static str,
    min_len: usize,
    issues: &mut Vec<FieldIssue>,
) -> Option<String> {
    match map.get(field) {
        None | Some(Value::Null) => {
            issues.push(FieldIssue {
                field,
                message: "is required".to_string(),
            });
            None
        }
        Some(Value::String(s)) if s.chars().count() < min_len => {
            let message = if min_len <= 1 {
                "must not be empty".to_string()
            } else {
                format!("must be at least {min_len} characters")
            };
            issues.push(FieldIssue { field, message });
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            issues.push(FieldIssue {
                field,
                message: "expected a string".to_string(),
            });
            None
        }
    }
}

fn optional_string(
    map: &Mapping,
    field: &'static str,
    issues: &mut Vec<FieldIssue>,
) -> Option<String> {
    match map.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            issues.push(FieldIssue {
                field,
                message: "expected a string".to_string(),
            });
            None
        }
    }
}

fn optional_string_list(
    map: &Mapping,
    field: &'static str,
    issues: &mut Vec<FieldIssue>,
) -> Vec<String> {
    match map.get(field) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Sequence(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for (idx, item) in items.iter().enumerate() {
                match item {
                    Value::String(s) => out.push(s.clone()),
                    _ => {
                        issues.push(FieldIssue {
                            field,
                            message: format!("item {idx} must be a string"),
                        });
                    }
                }
            }
            out
        }
        Some(_) => {
            issues.push(FieldIssue {
                field,
                message: "expected a list of strings".to_string(),
            });
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn minimal_definition_gets_defaults() {
        let def = validate(&parse(
            "name: Coder\nrole: Builder\nsystemPrompt: Write clean code for the user.\n",
        ))
        .unwrap();
        assert_eq!(def.name, "Coder");
        assert_eq!(def.emoji, DEFAULT_EMOJI);
        assert!(def.rules.is_empty());
        assert!(def.tools.is_empty());
        assert_eq!(def.description, None);
    }

    #[test]
    fn full_definition_preserves_order() {
        let def = validate(&parse(
            r#"
name: Reviewer
role: Critic
emoji: "🔍"
systemPrompt: Review every change carefully.
description: Reviews pull requests
rules: ["b first", "a second"]
tools: [Read, Grep]
"#,
        ))
        .unwrap();
        assert_eq!(def.emoji, "🔍");
        assert_eq!(def.rules, vec!["b first", "a second"]);
        assert_eq!(def.tools, vec!["Read", "Grep"]);
        assert_eq!(def.description.as_deref(), Some("Reviews pull requests"));
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let err = validate(&parse("emoji: x\n")).unwrap_err();
        assert!(err.has_issue("name"));
        assert!(err.has_issue("role"));
        assert!(err.has_issue("systemPrompt"));
        assert_eq!(err.issues.len(), 3);
    }

    #[test]
    fn short_system_prompt_fails() {
        let err = validate(&parse("name: A\nrole: B\nsystemPrompt: too short\n")).unwrap_err();
        assert!(err.has_issue("systemPrompt"));
        assert!(err.to_string().contains("at least 10 characters"));
    }

    #[test]
    fn system_prompt_at_floor_passes() {
        assert!(validate(&parse("name: A\nrole: B\nsystemPrompt: '0123456789'\n")).is_ok());
    }

    #[test]
    fn empty_name_fails() {
        let err = validate(&parse(
            "name: ''\nrole: B\nsystemPrompt: long enough prompt\n",
        ))
        .unwrap_err();
        assert!(err.has_issue("name"));
        assert!(!err.has_issue("role"));
    }

    #[test]
    fn wrong_types_never_panic() {
        let inputs = [
            "~",
            "42",
            "- a\n- b\n",
            "name: [x]\nrole: {a: 1}\nsystemPrompt: 12345678901\n",
            "name: A\nrole: B\nsystemPrompt: long enough prompt\nrules: nope\n",
            "name: A\nrole: B\nsystemPrompt: long enough prompt\ntools: [1, two]\n",
            "name: A\nrole: B\nsystemPrompt: long enough prompt\nemoji: 5\n",
        ];
        for input in inputs {
            assert!(validate(&parse(input)).is_err(), "expected failure: {input}");
        }
    }
}
