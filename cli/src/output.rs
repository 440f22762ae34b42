//! Terminal rendering of catalogs and results

use anyhow::Result;
use colored::Colorize;
use kubecall_domain::{OperationCatalog, ToolDefinition, ToolOutput};

/// Human-readable catalog listing, one block per operation
pub fn format_catalog(catalog: &OperationCatalog) -> String {
    let mut out = String::new();
    for def in catalog.definitions() {
        out.push_str(&format_definition(def));
        out.push('\n');
    }
    out
}

fn format_definition(def: &ToolDefinition) -> String {
    let hints = match def.hints.as_str() {
        "destructive" => def.hints.as_str().red().to_string(),
        "mutating" => def.hints.as_str().yellow().to_string(),
        other => other.green().to_string(),
    };
    let mut out = format!("{} [{}] {}\n", def.name.bold(), hints, def.title.dimmed());
    out.push_str(&format!("    {}\n", def.description));
    for param in &def.parameters {
        let marker = if param.required { "*" } else { " " };
        let default = param
            .default
            .as_ref()
            .map(|d| format!(" (default: {})", d))
            .unwrap_or_default();
        out.push_str(&format!(
            "    {}{} <{}>{}: {}\n",
            marker, param.name, param.param_type, default, param.description
        ));
    }
    out
}

/// Catalog as a JSON array of tool definitions
pub fn format_catalog_json(catalog: &OperationCatalog) -> Result<String> {
    let defs: Vec<&ToolDefinition> = catalog.definitions().collect();
    Ok(serde_json::to_string_pretty(&defs)?)
}

/// Result record exactly as `{"output": ..., "error": ...}`
pub fn format_output_json(output: &ToolOutput) -> Result<String> {
    Ok(serde_json::to_string(output)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_listing_mentions_every_operation() {
        colored::control::set_override(false);
        let catalog = OperationCatalog::standard();
        let text = format_catalog(&catalog);
        for name in catalog.names() {
            assert!(text.contains(name), "missing {name}");
        }
        assert!(text.contains("k8s_delete [destructive]"));
        assert!(text.contains("*pod_name <string>"));
        assert!(text.contains("num_lines <integer> (default: 50)"));
    }

    #[test]
    fn test_catalog_json_carries_hints() {
        let json = format_catalog_json(&OperationCatalog::standard()).unwrap();
        let defs: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(defs.len(), 20);
        let drain = defs.iter().find(|d| d["name"] == "k8s_drain").unwrap();
        assert_eq!(drain["hints"]["destructiveHint"], true);
        assert_eq!(drain["hints"]["readOnlyHint"], false);
    }

    #[test]
    fn test_output_json_shape() {
        let json = format_output_json(&ToolOutput::failure("denied")).unwrap();
        assert_eq!(json, r#"{"output":"denied","error":true}"#);
    }
}
