//! Typed parameters for each kubectl operation.
//!
//! Every struct carries its defaults in its `Default` impl, and
//! `#[serde(default)]` makes the JSON path use the same table: a missing
//! key takes the default, an explicit `null` clears an optional value.
//!
//! | Field | Default | Applies to |
//! |-------|---------|------------|
//! | `namespace` | `"default"` | logs, describe, patch, rollout, scale, delete, run, exec, port-forward |
//! | `namespace` | none | get, apply, set image, top pods |
//! | `num_lines` | `50` | logs |
//! | `patch_type` | `"strategic"` | patch |
//! | `ignore_daemonsets` | `true` | drain |
//! | `resource_type` | `"pod"` | port-forward |
//! | boolean switches | `false` | everywhere else |
//!
//! Required strings default to empty and are rejected by `validate()`.

use serde::{Deserialize, Serialize};

use crate::command::invocation::present;
use crate::core::error::ValidationError;

pub const DEFAULT_NAMESPACE: &str = "default";
pub const DEFAULT_LOG_LINES: u32 = 50;

fn default_namespace() -> Option<String> {
    Some(DEFAULT_NAMESPACE.to_string())
}

/// Reject an empty or whitespace-only required string
pub(crate) fn require(parameter: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::missing(parameter))
    } else {
        Ok(())
    }
}

/// Sort key accepted by `kubectl top`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Cpu,
    Memory,
}

impl SortBy {
    pub const ALLOWED: [&'static str; 2] = ["cpu", "memory"];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Cpu => "cpu",
            SortBy::Memory => "memory",
        }
    }

    /// Parse an optional raw value, citing it on failure
    pub fn parse_opt(value: Option<&str>) -> Result<Option<Self>, ValidationError> {
        match present(value) {
            None => Ok(None),
            Some("cpu") => Ok(Some(SortBy::Cpu)),
            Some("memory") => Ok(Some(SortBy::Memory)),
            Some(other) => Err(ValidationError::invalid_value(
                "sort_by",
                other,
                &Self::ALLOWED,
            )),
        }
    }
}

/// Patch strategy accepted by `kubectl patch --type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchType {
    Strategic,
    Merge,
    Json,
}

impl PatchType {
    pub const ALLOWED: [&'static str; 3] = ["strategic", "merge", "json"];

    pub fn as_str(&self) -> &'static str {
        match self {
            PatchType::Strategic => "strategic",
            PatchType::Merge => "merge",
            PatchType::Json => "json",
        }
    }

    pub fn parse_opt(value: Option<&str>) -> Result<Option<Self>, ValidationError> {
        match present(value) {
            None => Ok(None),
            Some("strategic") => Ok(Some(PatchType::Strategic)),
            Some("merge") => Ok(Some(PatchType::Merge)),
            Some("json") => Ok(Some(PatchType::Json)),
            Some(other) => Err(ValidationError::invalid_value(
                "patch_type",
                other,
                &Self::ALLOWED,
            )),
        }
    }
}

// ==================== Inspection ====================

/// `k8s_logs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogsParams {
    pub pod_name: String,
    pub namespace: Option<String>,
    pub num_lines: Option<u32>,
}

impl Default for LogsParams {
    fn default() -> Self {
        Self {
            pod_name: String::new(),
            namespace: default_namespace(),
            num_lines: Some(DEFAULT_LOG_LINES),
        }
    }
}

impl LogsParams {
    pub fn new(pod_name: impl Into<String>) -> Self {
        Self {
            pod_name: pod_name.into(),
            ..Self::default()
        }
    }

    pub fn with_namespace(mut self, namespace: Option<&str>) -> Self {
        self.namespace = namespace.map(String::from);
        self
    }

    pub fn with_num_lines(mut self, num_lines: Option<u32>) -> Self {
        self.num_lines = num_lines;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("pod_name", &self.pod_name)
    }
}

/// `k8s_get`
///
/// An explicit `name` wins over `all_namespaces`: the broader selector is
/// dropped silently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GetParams {
    pub resource_type: String,
    pub name: Option<String>,
    pub all_namespaces: Option<bool>,
    pub namespace: Option<String>,
    pub output: Option<String>,
}

impl GetParams {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_all_namespaces(mut self, all: bool) -> Self {
        self.all_namespaces = Some(all);
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("resource_type", &self.resource_type)
    }

    /// `all_namespaces` after precedence resolution
    pub fn effective_all_namespaces(&self) -> bool {
        self.all_namespaces.unwrap_or(false) && present(self.name.as_deref()).is_none()
    }
}

/// `k8s_describe`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DescribeParams {
    pub name: String,
    pub resource_type: String,
    pub namespace: Option<String>,
}

impl Default for DescribeParams {
    fn default() -> Self {
        Self {
            name: String::new(),
            resource_type: String::new(),
            namespace: default_namespace(),
        }
    }
}

impl DescribeParams {
    pub fn new(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_type: resource_type.into(),
            ..Self::default()
        }
    }

    pub fn with_namespace(mut self, namespace: Option<&str>) -> Self {
        self.namespace = namespace.map(String::from);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("resource_type", &self.resource_type)
    }
}

// ==================== Mutation ====================

/// `k8s_apply` sends the manifest on stdin, never as a token
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApplyParams {
    pub content: String,
    pub namespace: Option<String>,
}

impl ApplyParams {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            namespace: None,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("content", &self.content)
    }
}

/// `k8s_patch`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatchParams {
    pub name: String,
    pub resource_type: String,
    pub patch: String,
    pub namespace: Option<String>,
    pub patch_type: Option<String>,
}

impl Default for PatchParams {
    fn default() -> Self {
        Self {
            name: String::new(),
            resource_type: String::new(),
            patch: String::new(),
            namespace: default_namespace(),
            patch_type: Some(PatchType::Strategic.as_str().to_string()),
        }
    }
}

impl PatchParams {
    pub fn new(
        resource_type: impl Into<String>,
        name: impl Into<String>,
        patch: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            resource_type: resource_type.into(),
            patch: patch.into(),
            ..Self::default()
        }
    }

    pub fn with_namespace(mut self, namespace: Option<&str>) -> Self {
        self.namespace = namespace.map(String::from);
        self
    }

    pub fn with_patch_type(mut self, patch_type: impl Into<String>) -> Self {
        self.patch_type = Some(patch_type.into());
        self
    }

    pub fn validate(&self) -> Result<Option<PatchType>, ValidationError> {
        require("name", &self.name)?;
        require("resource_type", &self.resource_type)?;
        require("patch", &self.patch)?;
        PatchType::parse_opt(self.patch_type.as_deref())
    }
}

/// `k8s_set_image`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SetImageParams {
    pub resource_name: String,
    pub resource_type: String,
    /// `container1=image1,container2=image2`
    pub container_images: String,
    pub namespace: Option<String>,
}

impl SetImageParams {
    pub fn new(
        resource_type: impl Into<String>,
        resource_name: impl Into<String>,
        container_images: impl Into<String>,
    ) -> Self {
        Self {
            resource_name: resource_name.into(),
            resource_type: resource_type.into(),
            container_images: container_images.into(),
            namespace: None,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("resource_name", &self.resource_name)?;
        require("resource_type", &self.resource_type)?;
        require("container_images", &self.container_images)
    }
}

/// Shared shape of `k8s_rollout_restart` and `k8s_rollout_status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeploymentParams {
    pub name: String,
    pub namespace: Option<String>,
}

impl Default for DeploymentParams {
    fn default() -> Self {
        Self {
            name: String::new(),
            namespace: default_namespace(),
        }
    }
}

impl DeploymentParams {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_namespace(mut self, namespace: Option<&str>) -> Self {
        self.namespace = namespace.map(String::from);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)
    }
}

/// `k8s_rollout_restart`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RolloutRestartParams(pub DeploymentParams);

/// `k8s_rollout_status`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RolloutStatusParams(pub DeploymentParams);

/// `k8s_scale`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaleParams {
    pub name: String,
    pub resource_type: String,
    pub replicas: Option<u32>,
    pub namespace: Option<String>,
}

impl Default for ScaleParams {
    fn default() -> Self {
        Self {
            name: String::new(),
            resource_type: String::new(),
            replicas: None,
            namespace: default_namespace(),
        }
    }
}

impl ScaleParams {
    pub fn new(resource_type: impl Into<String>, name: impl Into<String>, replicas: u32) -> Self {
        Self {
            name: name.into(),
            resource_type: resource_type.into(),
            replicas: Some(replicas),
            ..Self::default()
        }
    }

    pub fn with_namespace(mut self, namespace: Option<&str>) -> Self {
        self.namespace = namespace.map(String::from);
        self
    }

    pub fn validate(&self) -> Result<u32, ValidationError> {
        require("name", &self.name)?;
        require("resource_type", &self.resource_type)?;
        self.replicas.ok_or_else(|| ValidationError::missing("replicas"))
    }
}

/// `k8s_delete`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeleteParams {
    pub name: String,
    pub resource_type: String,
    pub namespace: Option<String>,
}

impl Default for DeleteParams {
    fn default() -> Self {
        Self {
            name: String::new(),
            resource_type: String::new(),
            namespace: default_namespace(),
        }
    }
}

impl DeleteParams {
    pub fn new(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_type: resource_type.into(),
            ..Self::default()
        }
    }

    pub fn with_namespace(mut self, namespace: Option<&str>) -> Self {
        self.namespace = namespace.map(String::from);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("resource_type", &self.resource_type)
    }
}

/// `wait_for_x_seconds`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WaitParams {
    pub seconds: Option<u64>,
}

impl WaitParams {
    pub fn new(seconds: u64) -> Self {
        Self {
            seconds: Some(seconds),
        }
    }

    pub fn validate(&self) -> Result<u64, ValidationError> {
        self.seconds.ok_or_else(|| ValidationError::missing("seconds"))
    }
}

// ==================== Cluster and nodes ====================

/// `k8s_cluster_info`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClusterInfoParams {}

/// Shared shape of `k8s_cordon` and `k8s_uncordon`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeParams {
    pub node_name: String,
}

impl NodeParams {
    pub fn new(node_name: impl Into<String>) -> Self {
        Self {
            node_name: node_name.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("node_name", &self.node_name)
    }
}

/// `k8s_cordon`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CordonParams(pub NodeParams);

/// `k8s_uncordon`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UncordonParams(pub NodeParams);

/// `k8s_drain`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DrainParams {
    pub node_name: String,
    pub ignore_daemonsets: Option<bool>,
    pub delete_emptydir_data: Option<bool>,
}

impl Default for DrainParams {
    fn default() -> Self {
        Self {
            node_name: String::new(),
            ignore_daemonsets: Some(true),
            delete_emptydir_data: Some(false),
        }
    }
}

impl DrainParams {
    pub fn new(node_name: impl Into<String>) -> Self {
        Self {
            node_name: node_name.into(),
            ..Self::default()
        }
    }

    pub fn with_ignore_daemonsets(mut self, ignore: bool) -> Self {
        self.ignore_daemonsets = Some(ignore);
        self
    }

    pub fn with_delete_emptydir_data(mut self, delete: bool) -> Self {
        self.delete_emptydir_data = Some(delete);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("node_name", &self.node_name)
    }
}

// ==================== Workloads ====================

/// `k8s_run_pod`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunPodParams {
    pub name: String,
    pub image: String,
    pub namespace: Option<String>,
    pub command: Option<String>,
}

impl Default for RunPodParams {
    fn default() -> Self {
        Self {
            name: String::new(),
            image: String::new(),
            namespace: default_namespace(),
            command: None,
        }
    }
}

impl RunPodParams {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            ..Self::default()
        }
    }

    pub fn with_namespace(mut self, namespace: Option<&str>) -> Self {
        self.namespace = namespace.map(String::from);
        self
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("image", &self.image)
    }
}

/// `k8s_exec`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExecParams {
    pub pod_name: String,
    pub command: String,
    pub namespace: Option<String>,
    pub container: Option<String>,
}

impl Default for ExecParams {
    fn default() -> Self {
        Self {
            pod_name: String::new(),
            command: String::new(),
            namespace: default_namespace(),
            container: None,
        }
    }
}

impl ExecParams {
    pub fn new(pod_name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            pod_name: pod_name.into(),
            command: command.into(),
            ..Self::default()
        }
    }

    pub fn with_namespace(mut self, namespace: Option<&str>) -> Self {
        self.namespace = namespace.map(String::from);
        self
    }

    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = Some(container.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("pod_name", &self.pod_name)?;
        require("command", &self.command)
    }
}

/// `k8s_port_forward`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortForwardParams {
    pub resource_name: String,
    /// `local_port:remote_port`
    pub ports: String,
    pub namespace: Option<String>,
    pub resource_type: Option<String>,
}

impl Default for PortForwardParams {
    fn default() -> Self {
        Self {
            resource_name: String::new(),
            ports: String::new(),
            namespace: default_namespace(),
            resource_type: Some("pod".to_string()),
        }
    }
}

impl PortForwardParams {
    pub fn new(resource_name: impl Into<String>, ports: impl Into<String>) -> Self {
        Self {
            resource_name: resource_name.into(),
            ports: ports.into(),
            ..Self::default()
        }
    }

    pub fn with_namespace(mut self, namespace: Option<&str>) -> Self {
        self.namespace = namespace.map(String::from);
        self
    }

    pub fn with_resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("resource_name", &self.resource_name)?;
        require("ports", &self.ports)
    }
}

// ==================== Metrics ====================

/// `k8s_top_pods`
///
/// `namespace` and `all_namespaces` together are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TopPodsParams {
    pub pod_name: Option<String>,
    pub namespace: Option<String>,
    pub all_namespaces: Option<bool>,
    pub containers: Option<bool>,
    pub label_selector: Option<String>,
    pub sort_by: Option<String>,
    pub no_headers: Option<bool>,
}

impl TopPodsParams {
    pub fn validate(&self) -> Result<Option<SortBy>, ValidationError> {
        if present(self.namespace.as_deref()).is_some() && self.all_namespaces.unwrap_or(false) {
            return Err(ValidationError::mutually_exclusive(
                "namespace",
                "all_namespaces",
            ));
        }
        SortBy::parse_opt(self.sort_by.as_deref())
    }
}

/// `k8s_top_nodes`
///
/// `node_name` and `label_selector` together are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TopNodesParams {
    pub node_name: Option<String>,
    pub sort_by: Option<String>,
    pub label_selector: Option<String>,
    pub no_headers: Option<bool>,
}

impl TopNodesParams {
    pub fn validate(&self) -> Result<Option<SortBy>, ValidationError> {
        if present(self.node_name.as_deref()).is_some()
            && present(self.label_selector.as_deref()).is_some()
        {
            return Err(ValidationError::mutually_exclusive(
                "node_name",
                "label_selector",
            ));
        }
        SortBy::parse_opt(self.sort_by.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_keys_take_declared_defaults() {
        let params: LogsParams = serde_json::from_value(json!({"pod_name": "web"})).unwrap();
        assert_eq!(params.namespace.as_deref(), Some("default"));
        assert_eq!(params.num_lines, Some(50));

        let params: DrainParams = serde_json::from_value(json!({"node_name": "n1"})).unwrap();
        assert_eq!(params.ignore_daemonsets, Some(true));
        assert_eq!(params.delete_emptydir_data, Some(false));

        let params: PortForwardParams =
            serde_json::from_value(json!({"resource_name": "web", "ports": "8080:80"})).unwrap();
        assert_eq!(params.resource_type.as_deref(), Some("pod"));
    }

    #[test]
    fn test_explicit_null_clears_a_defaulted_value() {
        let params: DescribeParams = serde_json::from_value(
            json!({"name": "web", "resource_type": "pod", "namespace": null}),
        )
        .unwrap();
        assert_eq!(params.namespace, None);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result: Result<GetParams, _> =
            serde_json::from_value(json!({"resource_type": "pods", "label": "app=web"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_rollout_params_are_flat_on_the_wire() {
        let params: RolloutRestartParams =
            serde_json::from_value(json!({"name": "api", "namespace": "prod"})).unwrap();
        assert_eq!(params.0.name, "api");
        assert_eq!(params.0.namespace.as_deref(), Some("prod"));
    }

    #[test]
    fn test_required_string_must_be_non_empty() {
        assert_eq!(
            GetParams::new("").validate(),
            Err(ValidationError::missing("resource_type"))
        );
        assert_eq!(
            ExecParams::new("web", "   ").validate(),
            Err(ValidationError::missing("command"))
        );
        assert!(LogsParams::new("web").validate().is_ok());
    }

    #[test]
    fn test_required_numbers_must_be_present() {
        assert_eq!(
            WaitParams::default().validate(),
            Err(ValidationError::missing("seconds"))
        );
        let mut scale = ScaleParams::new("deployment", "api", 3);
        assert_eq!(scale.validate(), Ok(3));
        scale.replicas = None;
        assert_eq!(scale.validate(), Err(ValidationError::missing("replicas")));
    }

    #[test]
    fn test_negative_replicas_fail_to_decode() {
        let result: Result<ScaleParams, _> = serde_json::from_value(
            json!({"name": "api", "resource_type": "deployment", "replicas": -1}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_sort_by_enumeration() {
        assert_eq!(SortBy::parse_opt(None), Ok(None));
        assert_eq!(SortBy::parse_opt(Some("")), Ok(None));
        assert_eq!(SortBy::parse_opt(Some("cpu")), Ok(Some(SortBy::Cpu)));
        assert_eq!(SortBy::parse_opt(Some("memory")), Ok(Some(SortBy::Memory)));

        let err = SortBy::parse_opt(Some("disk")).unwrap_err();
        assert_eq!(err.parameter(), Some("sort_by"));
        assert!(err.to_string().contains("disk"));
        assert!(err.to_string().contains("'cpu' or 'memory'"));
    }

    #[test]
    fn test_patch_type_enumeration() {
        let params = PatchParams::new("deployment", "api", "{}");
        assert_eq!(params.validate(), Ok(Some(PatchType::Strategic)));

        let params = params.with_patch_type("xml");
        assert!(matches!(
            params.validate(),
            Err(ValidationError::InvalidValue { ref parameter, .. }) if parameter == "patch_type"
        ));
    }

    #[test]
    fn test_get_name_wins_over_all_namespaces() {
        let params = GetParams::new("pods").with_all_namespaces(true);
        assert!(params.effective_all_namespaces());

        let params = params.with_name("web");
        assert!(!params.effective_all_namespaces());
    }

    #[test]
    fn test_top_pods_namespace_conflicts_with_all_namespaces() {
        let params = TopPodsParams {
            namespace: Some("kube-system".to_string()),
            all_namespaces: Some(true),
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ValidationError::mutually_exclusive(
                "namespace",
                "all_namespaces"
            ))
        );
    }

    #[test]
    fn test_top_nodes_name_conflicts_with_selector() {
        let params = TopNodesParams {
            node_name: Some("n1".to_string()),
            label_selector: Some("role=worker".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ValidationError::mutually_exclusive(
                "node_name",
                "label_selector"
            ))
        );
    }
}
