//! Provisioning model rendering
//!
//! Layout of one feature block:
//!
//! ```text
//! [feature name=app version=1.0.0]
//!
//! [variables]
//!   port=8080
//!
//! [settings]
//!   org.osgi.service.http.port=${port}
//!
//! [artifacts]
//!   org.example/core/1.0.0
//!
//! [artifacts startLevel=20]
//!   org.example/web/1.0.0
//!
//! [configurations]
//!   org.example.Service
//!     enabled=B"true"
//! ```
//!
//! Empty sections are left out. Configuration values are quoted with the
//! Felix config escapes (`\"`, `\\`, `\n`, `\r`, `\t`, `\uXXXX`). Variables,
//! settings, PIDs and property names are written unquoted, so control
//! characters in them are rejected.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{self, Result};
use crate::feature::{Bundle, Configuration, Feature};

const INDENT: &str = "  ";

/// Render `features` in order as one provisioning model document
///
/// # Errors
///
/// Returns `ConversionFailed` naming the feature when an unquoted entry
/// contains a control character.
pub fn render(features: &[Feature], source: &str) -> Result<String> {
    let mut out = format!("# Generated by fm2pm from {source}\n");
    for feature in features {
        out.push('\n');
        render_feature(&mut out, feature)?;
    }
    Ok(out)
}

/// Check that `text` stays on one line of the document
fn single_line<'a>(feature: &Feature, section: &str, text: &'a str) -> Result<&'a str> {
    if text.chars().any(char::is_control) {
        return Err(error::conversion::failed(
            feature.id.to_string(),
            format!("{section} entry {text:?} contains a line break or control character"),
        ));
    }
    Ok(text)
}

fn render_feature(out: &mut String, feature: &Feature) -> Result<()> {
    out.push_str(&format!(
        "[feature name={} version={}]\n",
        feature.id.artifact_id(),
        feature.id.version()
    ));
    let labelled = [
        ("", &feature.title),
        ("", &feature.description),
        ("Vendor: ", &feature.vendor),
        ("License: ", &feature.license),
    ];
    for (label, comment) in labelled {
        if let Some(comment) = comment {
            out.push_str(&format!("# {label}{}\n", comment.replace(['\r', '\n'], " ")));
        }
    }

    if !feature.variables.is_empty() {
        out.push_str("\n[variables]\n");
        for (key, value) in &feature.variables {
            let key = single_line(feature, "variables", key)?;
            let value = single_line(feature, "variables", value.as_deref().unwrap_or_default())?;
            out.push_str(&format!("{INDENT}{key}={value}\n"));
        }
    }

    if !feature.framework_properties.is_empty() {
        out.push_str("\n[settings]\n");
        for (key, value) in &feature.framework_properties {
            let key = single_line(feature, "settings", key)?;
            let value = single_line(feature, "settings", value)?;
            out.push_str(&format!("{INDENT}{key}={value}\n"));
        }
    }

    for (start_order, bundles) in group_by_start_order(&feature.bundles) {
        match start_order {
            Some(level) => out.push_str(&format!("\n[artifacts startLevel={level}]\n")),
            None => out.push_str("\n[artifacts]\n"),
        }
        for bundle in bundles {
            out.push_str(&format!("{INDENT}{}\n", bundle.id.to_mvn_path()));
        }
    }

    if !feature.configurations.is_empty() {
        out.push_str("\n[configurations]\n");
        for (pid, properties) in &feature.configurations {
            render_configuration(out, feature, pid, properties)?;
        }
    }
    Ok(())
}

/// Bundles without start order first, then by ascending start order
fn group_by_start_order(bundles: &[Bundle]) -> BTreeMap<Option<u32>, Vec<&Bundle>> {
    let mut groups: BTreeMap<Option<u32>, Vec<&Bundle>> = BTreeMap::new();
    for bundle in bundles {
        groups.entry(bundle.start_order).or_default().push(bundle);
    }
    groups
}

fn render_configuration(
    out: &mut String,
    feature: &Feature,
    pid: &str,
    properties: &Configuration,
) -> Result<()> {
    // Factory configurations are named `factoryPid~name` in features
    let pid = single_line(feature, "configurations", pid)?;
    out.push_str(&format!("{INDENT}{}\n", pid.replace('~', "-")));
    for (key, value) in properties {
        let key = single_line(feature, "configurations", key)?;
        out.push_str(&format!("{INDENT}{INDENT}{key}={}\n", format_value(value)));
    }
    Ok(())
}

/// Typed configuration value notation
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "\"\"".to_string(),
        Value::Bool(b) => format!("B\"{b}\""),
        Value::Number(n) if n.is_i64() || n.is_u64() => format!("L\"{n}\""),
        Value::Number(n) => format!("D\"{n}\""),
        Value::String(s) => quote(s),
        Value::Array(items) => format_array(items),
        Value::Object(_) => quote(&value.to_string()),
    }
}

fn format_array(items: &[Value]) -> String {
    let prefix = if !items.is_empty() && items.iter().all(Value::is_boolean) {
        "B"
    } else if !items.is_empty() && items.iter().all(|v| v.is_i64() || v.is_u64()) {
        "L"
    } else if !items.is_empty() && items.iter().all(Value::is_number) {
        "D"
    } else {
        ""
    };

    let elements = items
        .iter()
        .map(|item| match item {
            Value::String(s) => quote(s),
            other => quote(&other.to_string()),
        })
        .collect::<Vec<_>>()
        .join(",");

    format!("{prefix}[{elements}]")
}

fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
