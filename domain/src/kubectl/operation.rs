//! kubectl operations: metadata, validation and planning per tool name

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::args;
use super::params::{
    ApplyParams, ClusterInfoParams, CordonParams, DeleteParams, DescribeParams, DrainParams,
    ExecParams, GetParams, LogsParams, PatchParams, PortForwardParams, RolloutRestartParams,
    RolloutStatusParams, RunPodParams, ScaleParams, SetImageParams, TopNodesParams,
    TopPodsParams, UncordonParams, WaitParams,
};
use crate::command::invocation::CommandArgs;
use crate::core::error::ValidationError;
use crate::tool::{ToolDefinition, ToolHints, ToolParameter};

/// What executing an operation amounts to once its parameters are valid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationPlan {
    /// Run kubectl with these tokens (and stdin payload, if any)
    Command(CommandArgs),
    /// Suspend without spawning anything
    Wait(Duration),
}

/// A named kubectl operation with typed parameters.
///
/// `plan` validates first and only then builds; a `ValidationError` means
/// nothing may be spawned.
pub trait KubectlOperation: DeserializeOwned {
    /// Tool name exposed to callers (e.g. `k8s_get`)
    const NAME: &'static str;

    /// Metadata advertised in the catalog
    fn definition() -> ToolDefinition;

    fn plan(&self) -> Result<OperationPlan, ValidationError>;
}

fn namespace(description: &str, default: Option<&str>) -> ToolParameter {
    let param = ToolParameter::optional("namespace", description);
    match default {
        Some(ns) => param.with_default(ns),
        None => param,
    }
}

fn switch(name: &str, description: &str, default: bool) -> ToolParameter {
    ToolParameter::optional(name, description)
        .with_type("boolean")
        .with_default(default)
}

fn sort_by() -> ToolParameter {
    ToolParameter::optional("sort_by", "Sort by 'cpu' or 'memory'")
}

// ==================== Inspection ====================

impl KubectlOperation for LogsParams {
    const NAME: &'static str = "k8s_logs";

    fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            "Get Kubernetes Pod Logs",
            "Get logs from a Kubernetes pod.",
            ToolHints::READ_ONLY,
        )
        .with_parameter(ToolParameter::required(
            "pod_name",
            "The name of the pod to get logs from",
        ))
        .with_parameter(namespace(
            "The namespace of the pod to get logs from",
            Some("default"),
        ))
        .with_parameter(
            ToolParameter::optional("num_lines", "The number of lines to get from the logs")
                .with_type("integer")
                .with_default(50),
        )
    }

    fn plan(&self) -> Result<OperationPlan, ValidationError> {
        self.validate()?;
        Ok(OperationPlan::Command(args::logs(self)))
    }
}

impl KubectlOperation for GetParams {
    const NAME: &'static str = "k8s_get";

    fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            "Get Kubernetes Resources",
            "Get information about Kubernetes resources.",
            ToolHints::READ_ONLY,
        )
        .with_parameter(ToolParameter::required(
            "resource_type",
            "The type of resource to get information about (deployment, service, pod, node, ...)",
        ))
        .with_parameter(ToolParameter::optional(
            "name",
            "The name of the resource to get information about. If not provided, all resources of the given type will be returned",
        ))
        .with_parameter(switch(
            "all_namespaces",
            "Whether to get resources from all namespaces",
            false,
        ))
        .with_parameter(namespace("The namespace to get resources from", None))
        .with_parameter(ToolParameter::optional(
            "output",
            "Output format (wide, yaml, json)",
        ))
    }

    fn plan(&self) -> Result<OperationPlan, ValidationError> {
        self.validate()?;
        Ok(OperationPlan::Command(args::get(self)))
    }
}

impl KubectlOperation for DescribeParams {
    const NAME: &'static str = "k8s_describe";

    fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            "Describe Kubernetes Resource",
            "Describe a Kubernetes resource in detail.",
            ToolHints::READ_ONLY,
        )
        .with_parameter(ToolParameter::required(
            "name",
            "The name of the resource to describe",
        ))
        .with_parameter(ToolParameter::required(
            "resource_type",
            "The type of resource to describe (deployment, service, pod, node, ...)",
        ))
        .with_parameter(namespace("The namespace of the resource", Some("default")))
    }

    fn plan(&self) -> Result<OperationPlan, ValidationError> {
        self.validate()?;
        Ok(OperationPlan::Command(args::describe(self)))
    }
}

impl KubectlOperation for RolloutStatusParams {
    const NAME: &'static str = "k8s_rollout_status";

    fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            "Check Kubernetes Rollout Status",
            "Check the rollout status of a Kubernetes deployment.",
            ToolHints::READ_ONLY,
        )
        .with_parameter(ToolParameter::required(
            "name",
            "The name of the deployment to check rollout status",
        ))
        .with_parameter(namespace("The namespace of the deployment", Some("default")))
    }

    fn plan(&self) -> Result<OperationPlan, ValidationError> {
        self.0.validate()?;
        Ok(OperationPlan::Command(args::rollout_status(&self.0)))
    }
}

impl KubectlOperation for ClusterInfoParams {
    const NAME: &'static str = "k8s_cluster_info";

    fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            "Get Kubernetes Cluster Information",
            "Get information about the Kubernetes cluster.",
            ToolHints::READ_ONLY,
        )
    }

    fn plan(&self) -> Result<OperationPlan, ValidationError> {
        Ok(OperationPlan::Command(args::cluster_info()))
    }
}

// ==================== Mutation ====================

impl KubectlOperation for ApplyParams {
    const NAME: &'static str = "k8s_apply";

    fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            "Apply Kubernetes Manifest",
            "Apply a Kubernetes manifest from provided YAML content.",
            ToolHints::MUTATING,
        )
        .with_parameter(ToolParameter::required(
            "content",
            "The YAML manifest content to apply",
        ))
        .with_parameter(namespace("The namespace to apply the manifest to", None))
    }

    fn plan(&self) -> Result<OperationPlan, ValidationError> {
        self.validate()?;
        Ok(OperationPlan::Command(args::apply(self)))
    }
}

impl KubectlOperation for PatchParams {
    const NAME: &'static str = "k8s_patch";

    fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            "Patch Kubernetes Resource",
            "Patch a Kubernetes resource.",
            ToolHints::MUTATING,
        )
        .with_parameter(ToolParameter::required(
            "name",
            "The name of the resource to patch",
        ))
        .with_parameter(ToolParameter::required(
            "resource_type",
            "The type of resource to patch",
        ))
        .with_parameter(ToolParameter::required(
            "patch",
            "The patch to apply (JSON or YAML)",
        ))
        .with_parameter(namespace("The namespace of the resource", Some("default")))
        .with_parameter(
            ToolParameter::optional("patch_type", "The type of patch (strategic, merge, json)")
                .with_default("strategic"),
        )
    }

    fn plan(&self) -> Result<OperationPlan, ValidationError> {
        let patch_type = self.validate()?;
        Ok(OperationPlan::Command(args::patch(self, patch_type)))
    }
}

impl KubectlOperation for SetImageParams {
    const NAME: &'static str = "k8s_set_image";

    fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            "Update Kubernetes Container Images",
            "Update container images for a Kubernetes resource.",
            ToolHints::MUTATING,
        )
        .with_parameter(ToolParameter::required(
            "resource_name",
            "The name of the resource to update",
        ))
        .with_parameter(ToolParameter::required(
            "resource_type",
            "The type of resource to update",
        ))
        .with_parameter(ToolParameter::required(
            "container_images",
            "Container image updates in format 'container1=image1,container2=image2'",
        ))
        .with_parameter(namespace("The namespace of the resource", None))
    }

    fn plan(&self) -> Result<OperationPlan, ValidationError> {
        self.validate()?;
        Ok(OperationPlan::Command(args::set_image(self)))
    }
}

impl KubectlOperation for RolloutRestartParams {
    const NAME: &'static str = "k8s_rollout_restart";

    fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            "Restart Kubernetes Deployment",
            "Restart a Kubernetes deployment.",
            ToolHints::MUTATING,
        )
        .with_parameter(ToolParameter::required(
            "name",
            "The name of the deployment to restart",
        ))
        .with_parameter(namespace("The namespace of the deployment", Some("default")))
    }

    fn plan(&self) -> Result<OperationPlan, ValidationError> {
        self.0.validate()?;
        Ok(OperationPlan::Command(args::rollout_restart(&self.0)))
    }
}

impl KubectlOperation for ScaleParams {
    const NAME: &'static str = "k8s_scale";

    fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            "Scale Kubernetes Resource",
            "Scale a Kubernetes resource.",
            ToolHints::MUTATING,
        )
        .with_parameter(ToolParameter::required(
            "name",
            "The name of the resource to scale",
        ))
        .with_parameter(ToolParameter::required(
            "resource_type",
            "The type of resource to scale",
        ))
        .with_parameter(
            ToolParameter::required("replicas", "The number of replicas to scale to")
                .with_type("integer"),
        )
        .with_parameter(namespace("The namespace of the resource", Some("default")))
    }

    fn plan(&self) -> Result<OperationPlan, ValidationError> {
        let replicas = self.validate()?;
        Ok(OperationPlan::Command(args::scale(self, replicas)))
    }
}

impl KubectlOperation for DeleteParams {
    const NAME: &'static str = "k8s_delete";

    fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            "Delete Kubernetes Resource",
            "Delete a Kubernetes resource.",
            ToolHints::DESTRUCTIVE,
        )
        .with_parameter(ToolParameter::required(
            "name",
            "The name of the resource to delete",
        ))
        .with_parameter(ToolParameter::required(
            "resource_type",
            "The type of resource to delete",
        ))
        .with_parameter(namespace("The namespace of the resource", Some("default")))
    }

    fn plan(&self) -> Result<OperationPlan, ValidationError> {
        self.validate()?;
        Ok(OperationPlan::Command(args::delete(self)))
    }
}

impl KubectlOperation for WaitParams {
    const NAME: &'static str = "wait_for_x_seconds";

    fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            "Wait for Specified Duration",
            "Wait for a specified number of seconds.",
            ToolHints::READ_ONLY,
        )
        .with_parameter(
            ToolParameter::required("seconds", "The number of seconds to wait")
                .with_type("integer"),
        )
    }

    fn plan(&self) -> Result<OperationPlan, ValidationError> {
        let seconds = self.validate()?;
        Ok(OperationPlan::Wait(Duration::from_secs(seconds)))
    }
}

// ==================== Nodes ====================

impl KubectlOperation for CordonParams {
    const NAME: &'static str = "k8s_cordon";

    fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            "Cordon Kubernetes Node",
            "Cordon a Kubernetes node to prevent new pods from being scheduled.",
            ToolHints::MUTATING,
        )
        .with_parameter(ToolParameter::required(
            "node_name",
            "The name of the node to cordon",
        ))
    }

    fn plan(&self) -> Result<OperationPlan, ValidationError> {
        self.0.validate()?;
        Ok(OperationPlan::Command(args::cordon(&self.0)))
    }
}

impl KubectlOperation for UncordonParams {
    const NAME: &'static str = "k8s_uncordon";

    fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            "Uncordon Kubernetes Node",
            "Uncordon a Kubernetes node to allow new pods to be scheduled.",
            ToolHints::MUTATING,
        )
        .with_parameter(ToolParameter::required(
            "node_name",
            "The name of the node to uncordon",
        ))
    }

    fn plan(&self) -> Result<OperationPlan, ValidationError> {
        self.0.validate()?;
        Ok(OperationPlan::Command(args::uncordon(&self.0)))
    }
}

impl KubectlOperation for DrainParams {
    const NAME: &'static str = "k8s_drain";

    fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            "Drain Kubernetes Node",
            "Drain a Kubernetes node by evicting all pods.",
            ToolHints::DESTRUCTIVE,
        )
        .with_parameter(ToolParameter::required(
            "node_name",
            "The name of the node to drain",
        ))
        .with_parameter(switch(
            "ignore_daemonsets",
            "Whether to ignore DaemonSets when draining",
            true,
        ))
        .with_parameter(switch(
            "delete_emptydir_data",
            "Whether to delete emptyDir data when draining",
            false,
        ))
    }

    fn plan(&self) -> Result<OperationPlan, ValidationError> {
        self.validate()?;
        Ok(OperationPlan::Command(args::drain(self)))
    }
}

// ==================== Workloads ====================

impl KubectlOperation for RunPodParams {
    const NAME: &'static str = "k8s_run_pod";

    fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            "Run Kubernetes Pod",
            "Run a temporary pod in the Kubernetes cluster.",
            ToolHints::MUTATING,
        )
        .with_parameter(ToolParameter::required("name", "The name of the pod to run"))
        .with_parameter(ToolParameter::required(
            "image",
            "The container image to run",
        ))
        .with_parameter(namespace("The namespace to run the pod in", Some("default")))
        .with_parameter(ToolParameter::optional(
            "command",
            "The command to run in the pod",
        ))
    }

    fn plan(&self) -> Result<OperationPlan, ValidationError> {
        self.validate()?;
        Ok(OperationPlan::Command(args::run_pod(self)))
    }
}

impl KubectlOperation for ExecParams {
    const NAME: &'static str = "k8s_exec";

    fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            "Execute Command in Kubernetes Pod",
            "Execute a command inside a Kubernetes pod.",
            ToolHints::MUTATING,
        )
        .with_parameter(ToolParameter::required(
            "pod_name",
            "The name of the pod to execute command in",
        ))
        .with_parameter(ToolParameter::required(
            "command",
            "The command to execute inside the pod",
        ))
        .with_parameter(namespace("The namespace of the pod", Some("default")))
        .with_parameter(ToolParameter::optional(
            "container",
            "The container name (if pod has multiple containers)",
        ))
    }

    fn plan(&self) -> Result<OperationPlan, ValidationError> {
        self.validate()?;
        Ok(OperationPlan::Command(args::exec(self)))
    }
}

impl KubectlOperation for PortForwardParams {
    const NAME: &'static str = "k8s_port_forward";

    fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            "Port Forward to Kubernetes Resource",
            "Port forward to a Kubernetes resource.",
            ToolHints::MUTATING,
        )
        .with_parameter(ToolParameter::required(
            "resource_name",
            "The name of the resource to port forward to",
        ))
        .with_parameter(ToolParameter::required(
            "ports",
            "Port mapping in format 'local_port:remote_port'",
        ))
        .with_parameter(namespace("The namespace of the resource", Some("default")))
        .with_parameter(
            ToolParameter::optional(
                "resource_type",
                "The type of resource (pod, service, deployment)",
            )
            .with_default("pod"),
        )
    }

    fn plan(&self) -> Result<OperationPlan, ValidationError> {
        self.validate()?;
        Ok(OperationPlan::Command(args::port_forward(self)))
    }
}

// ==================== Metrics ====================

impl KubectlOperation for TopPodsParams {
    const NAME: &'static str = "k8s_top_pods";

    fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            "Get Kubernetes Pod Resource Usage",
            "Get resource usage metrics for Kubernetes pods.",
            ToolHints::READ_ONLY,
        )
        .with_tag("metrics")
        .with_parameter(ToolParameter::optional(
            "pod_name",
            "The name of the pod to get metrics for",
        ))
        .with_parameter(namespace("The namespace of the pod", None))
        .with_parameter(switch(
            "all_namespaces",
            "Whether to get metrics from all namespaces",
            false,
        ))
        .with_parameter(switch(
            "containers",
            "Whether to show container-level metrics",
            false,
        ))
        .with_parameter(ToolParameter::optional(
            "label_selector",
            "Label selector to filter pods",
        ))
        .with_parameter(sort_by())
        .with_parameter(switch("no_headers", "Whether to hide column headers", false))
    }

    fn plan(&self) -> Result<OperationPlan, ValidationError> {
        let sort_by = self.validate()?;
        Ok(OperationPlan::Command(args::top_pods(self, sort_by)))
    }
}

impl KubectlOperation for TopNodesParams {
    const NAME: &'static str = "k8s_top_nodes";

    fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            "Get Kubernetes Node Resource Usage",
            "Get resource usage metrics for Kubernetes nodes.",
            ToolHints::READ_ONLY,
        )
        .with_tag("metrics")
        .with_parameter(ToolParameter::optional(
            "node_name",
            "The name of the node to get metrics for",
        ))
        .with_parameter(sort_by())
        .with_parameter(ToolParameter::optional(
            "label_selector",
            "Label selector to filter nodes",
        ))
        .with_parameter(switch("no_headers", "Whether to hide column headers", false))
    }

    fn plan(&self) -> Result<OperationPlan, ValidationError> {
        let sort_by = self.validate()?;
        Ok(OperationPlan::Command(args::top_nodes(self, sort_by)))
    }
}
