//! CLI command definitions

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use kubecall_application::KubectlSettings;
use kubecall_domain::{ToolCall, ToolDefinition};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::{Path, PathBuf};

/// CLI arguments for kubecall
#[derive(Parser, Debug)]
#[command(name = "kubecall")]
#[command(author, version, about = "Typed Kubernetes administration tools backed by kubectl")]
#[command(long_about = r#"
kubecall exposes a fixed catalog of Kubernetes operations (get, logs, apply,
scale, drain, top, ...) with typed parameters. Each call is validated, turned
into a kubectl argument vector, run without a shell, and reported as
{"output": ..., "error": ...}.

Configuration files are loaded from (in priority order):
1. KUBECALL_* env      e.g. KUBECALL_KUBECTL__CONTEXT=staging
2. --config <path>     Explicit config file
3. ./kubecall.toml     Project-level config
4. ~/.config/kubecall/config.toml   Global config

Example:
  kubecall list
  kubecall call k8s_get --arg resource_type=pods --arg all_namespaces=true
  kubecall call k8s_logs --args '{"pod_name": "web-0", "num_lines": 100}'
  kubecall call k8s_apply --input-file deployment.yaml --arg namespace=dev
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// kubectl binary to run
    #[arg(long, value_name = "PATH", global = true)]
    pub binary: Option<String>,

    /// Kubeconfig file passed to every command
    #[arg(long, value_name = "PATH", global = true)]
    pub kubeconfig: Option<String>,

    /// Kubeconfig context passed to every command
    #[arg(long, value_name = "NAME", global = true)]
    pub context: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the available operations
    List {
        /// Print tool definitions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run one operation
    Call {
        /// Operation name (e.g. k8s_get)
        operation: String,

        /// Arguments as a JSON object
        #[arg(long, value_name = "JSON")]
        args: Option<String>,

        /// Single argument; integer and boolean VALUEs are parsed, others kept as text (repeatable)
        #[arg(long = "arg", value_name = "KEY=VALUE")]
        arg: Vec<String>,

        /// Read the `content` argument from a file ("-" for stdin)
        #[arg(long, value_name = "PATH")]
        input_file: Option<PathBuf>,

        /// Print the result record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show configuration sources and effective kubectl settings
    Config,
}

impl Cli {
    /// Apply command-line overrides on top of loaded settings
    pub fn apply_overrides(&self, mut settings: KubectlSettings) -> KubectlSettings {
        if let Some(binary) = &self.binary {
            settings.binary = binary.clone();
        }
        if let Some(kubeconfig) = &self.kubeconfig {
            settings.kubeconfig = Some(kubeconfig.clone());
        }
        if let Some(context) = &self.context {
            settings.context = Some(context.clone());
        }
        settings
    }
}

/// Assemble a [`ToolCall`] from `--args`, `--arg` pairs and `--input-file`.
///
/// Later sources win: pairs override the JSON object, the input file
/// overrides any `content` given either way. `definition` decides how a
/// pair's value is typed; an unknown operation keeps every value a string.
pub fn build_call(
    operation: &str,
    definition: Option<&ToolDefinition>,
    args: Option<&str>,
    pairs: &[String],
    input_file: Option<&Path>,
) -> Result<ToolCall> {
    let mut arguments = match args {
        Some(json) => match serde_json::from_str::<Value>(json).context("--args is not valid JSON")? {
            Value::Object(map) => map,
            _ => bail!("--args must be a JSON object"),
        },
        None => Map::new(),
    };

    for pair in pairs {
        let (key, raw) = split_pair(pair)?;
        let param_type = definition
            .and_then(|d| d.parameter(key))
            .map(|p| p.param_type.as_str());
        arguments.insert(key.to_string(), typed_value(raw, param_type));
    }

    if let Some(path) = input_file {
        arguments.insert("content".to_string(), Value::String(read_input(path)?));
    }

    let mut call = ToolCall::new(operation);
    call.arguments = arguments;
    Ok(call)
}

fn split_pair(pair: &str) -> Result<(&str, &str)> {
    let Some((key, raw)) = pair.split_once('=') else {
        bail!("--arg expects KEY=VALUE, got '{}'", pair);
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("--arg has an empty key: '{}'", pair);
    }
    Ok((key, raw))
}

/// `null` clears a parameter; integer and boolean parameters take the value
/// as JSON when it parses. Everything else stays the raw string.
fn typed_value(raw: &str, param_type: Option<&str>) -> Value {
    if raw == "null" {
        return Value::Null;
    }
    match param_type {
        Some("integer" | "boolean") => {
            serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
        }
        _ => Value::String(raw.to_string()),
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kubecall_domain::{OperationCatalog, OperationPlan};
    use serde_json::json;

    #[test]
    fn test_parse_call_subcommand() {
        let cli = Cli::try_parse_from([
            "kubecall",
            "-vv",
            "call",
            "k8s_get",
            "--arg",
            "resource_type=pods",
            "--context",
            "dev",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.context.as_deref(), Some("dev"));
        match cli.command {
            Command::Call { operation, arg, .. } => {
                assert_eq!(operation, "k8s_get");
                assert_eq!(arg, vec!["resource_type=pods"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_apply_overrides() {
        let cli = Cli::try_parse_from(["kubecall", "--binary", "kubectl-1.30", "list"]).unwrap();
        let settings = cli.apply_overrides(KubectlSettings::default().with_context("prod"));
        assert_eq!(settings.binary, "kubectl-1.30");
        assert_eq!(settings.context.as_deref(), Some("prod"));
    }

    fn definition(operation: &str) -> Option<&'static ToolDefinition> {
        static CATALOG: std::sync::LazyLock<OperationCatalog> =
            std::sync::LazyLock::new(OperationCatalog::standard);
        CATALOG.get(operation).map(|e| &e.definition)
    }

    fn call(operation: &str, args: Option<&str>, pairs: &[&str]) -> ToolCall {
        let pairs: Vec<String> = pairs.iter().map(|p| p.to_string()).collect();
        build_call(operation, definition(operation), args, &pairs, None).unwrap()
    }

    fn tokens(call: &ToolCall) -> Vec<String> {
        let catalog = OperationCatalog::standard();
        match catalog.get(&call.tool_name).unwrap().plan(call.arguments_value()).unwrap() {
            OperationPlan::Command(args) => args.tokens().to_vec(),
            OperationPlan::Wait(_) => panic!("expected a command"),
        }
    }

    #[test]
    fn test_pairs_follow_parameter_types() {
        let call = call(
            "k8s_get",
            None,
            &[
                "resource_type=pods",
                "all_namespaces=true",
                "namespace=null",
                "output=json",
            ],
        );

        assert_eq!(
            call.arguments_value(),
            json!({
                "resource_type": "pods",
                "all_namespaces": true,
                "namespace": null,
                "output": "json"
            })
        );
    }

    #[test]
    fn test_json_looking_strings_stay_strings() {
        let patch = call(
            "k8s_patch",
            None,
            &[
                "resource_type=deployment",
                "name=api",
                r#"patch={"spec":{"replicas":2}}"#,
            ],
        );
        assert_eq!(
            tokens(&patch),
            [
                "patch",
                "deployment",
                "api",
                "-n",
                "default",
                "--patch",
                r#"{"spec":{"replicas":2}}"#,
                "--type=strategic"
            ]
        );

        let logs = call("k8s_logs", None, &["pod_name=123"]);
        assert_eq!(tokens(&logs)[..2], ["logs", "123"]);

        let get = call("k8s_get", None, &["resource_type=pods", "name=true"]);
        assert_eq!(tokens(&get)[..3], ["get", "pods", "true"]);
    }

    #[test]
    fn test_unparsable_integer_is_left_for_validation() {
        let call = call("k8s_scale", None, &["replicas=many"]);
        assert_eq!(call.arguments_value(), json!({"replicas": "many"}));
    }

    #[test]
    fn test_unknown_operation_keeps_strings() {
        let call = call("k8s_explode", None, &["count=3", "force=null"]);
        assert_eq!(call.arguments_value(), json!({"count": "3", "force": null}));
    }

    #[test]
    fn test_pairs_override_json_args() {
        let call = call(
            "k8s_logs",
            Some(r#"{"pod_name": "web", "num_lines": 10}"#),
            &["num_lines=20"],
        );
        assert_eq!(call.arguments_value(), json!({"pod_name": "web", "num_lines": 20}));
    }

    #[test]
    fn test_args_must_be_an_object() {
        assert!(build_call("k8s_get", None, Some("[1, 2]"), &[], None).is_err());
        assert!(build_call("k8s_get", None, Some("{"), &[], None).is_err());
    }

    #[test]
    fn test_malformed_pair() {
        assert!(build_call("k8s_get", None, None, &["resource_type".to_string()], None).is_err());
        assert!(build_call("k8s_get", None, None, &["=pods".to_string()], None).is_err());
    }

    #[test]
    fn test_value_may_contain_equals() {
        let call = call("k8s_top_pods", None, &["label_selector=app=web"]);
        assert_eq!(call.arguments.get("label_selector"), Some(&json!("app=web")));
    }
}
