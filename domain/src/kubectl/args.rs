//! Argument builders
//!
//! Each function maps already-validated parameters to the kubectl tokens
//! that follow the binary name. They never fail and never touch a process;
//! the order of appends is the order kubectl sees.

use super::params::{
    ApplyParams, DeleteParams, DeploymentParams, DescribeParams, DrainParams, ExecParams,
    GetParams, LogsParams, NodeParams, PatchParams, PatchType, PortForwardParams, RunPodParams,
    ScaleParams, SetImageParams, SortBy, TopNodesParams, TopPodsParams,
};
use crate::command::invocation::{CommandArgs, present};

/// `logs <pod> [-n ns] [--tail N]`
pub fn logs(p: &LogsParams) -> CommandArgs {
    let tail = p.num_lines.map(|n| n.to_string());
    CommandArgs::new(["logs"])
        .arg(&p.pod_name)
        .option("-n", p.namespace.as_deref())
        .option("--tail", tail.as_deref())
}

/// `get <type> [name] [-n ns] [-o fmt] [-A]`
pub fn get(p: &GetParams) -> CommandArgs {
    CommandArgs::new(["get"])
        .arg(&p.resource_type)
        .arg_opt(p.name.as_deref())
        .option("-n", p.namespace.as_deref())
        .option("-o", p.output.as_deref())
        .flag("-A", p.effective_all_namespaces())
}

/// `describe <type> <name> [-n ns]`
pub fn describe(p: &DescribeParams) -> CommandArgs {
    CommandArgs::new(["describe"])
        .arg(&p.resource_type)
        .arg(&p.name)
        .option("-n", p.namespace.as_deref())
}

/// `apply -f - [-n ns]`, manifest on stdin
pub fn apply(p: &ApplyParams) -> CommandArgs {
    CommandArgs::new(["apply", "-f", "-"])
        .option("-n", p.namespace.as_deref())
        .with_input(p.content.as_str())
}

/// `patch <type> <name> [-n ns] --patch <json> [--type=<strategy>]`
pub fn patch(p: &PatchParams, patch_type: Option<PatchType>) -> CommandArgs {
    let args = CommandArgs::new(["patch"])
        .arg(&p.resource_type)
        .arg(&p.name)
        .option("-n", p.namespace.as_deref())
        .arg("--patch")
        .arg(&p.patch);
    match patch_type {
        Some(t) => args.arg(format!("--type={}", t.as_str())),
        None => args,
    }
}

/// `set image <type>/<name> <container=image>... [-n ns]`
pub fn set_image(p: &SetImageParams) -> CommandArgs {
    CommandArgs::new(["set", "image"])
        .arg(format!("{}/{}", p.resource_type, p.resource_name))
        .words(&p.container_images)
        .option("-n", p.namespace.as_deref())
}

/// `rollout restart deployment/<name> [-n ns]`
pub fn rollout_restart(p: &DeploymentParams) -> CommandArgs {
    rollout("restart", p)
}

/// `rollout status deployment/<name> [-n ns]`
pub fn rollout_status(p: &DeploymentParams) -> CommandArgs {
    rollout("status", p)
}

fn rollout(action: &str, p: &DeploymentParams) -> CommandArgs {
    CommandArgs::new(["rollout", action])
        .arg(format!("deployment/{}", p.name))
        .option("-n", p.namespace.as_deref())
}

/// `scale <type>/<name> --replicas=N [-n ns]`
pub fn scale(p: &ScaleParams, replicas: u32) -> CommandArgs {
    CommandArgs::new(["scale"])
        .arg(format!("{}/{}", p.resource_type, p.name))
        .arg(format!("--replicas={}", replicas))
        .option("-n", p.namespace.as_deref())
}

/// `delete <type> <name> [-n ns]`
pub fn delete(p: &DeleteParams) -> CommandArgs {
    CommandArgs::new(["delete"])
        .arg(&p.resource_type)
        .arg(&p.name)
        .option("-n", p.namespace.as_deref())
}

pub fn cluster_info() -> CommandArgs {
    CommandArgs::new(["cluster-info"])
}

pub fn cordon(p: &NodeParams) -> CommandArgs {
    CommandArgs::new(["cordon"]).arg(&p.node_name)
}

pub fn uncordon(p: &NodeParams) -> CommandArgs {
    CommandArgs::new(["uncordon"]).arg(&p.node_name)
}

/// `drain <node> [--ignore-daemonsets] [--delete-emptydir-data]`
pub fn drain(p: &DrainParams) -> CommandArgs {
    CommandArgs::new(["drain"])
        .arg(&p.node_name)
        .flag("--ignore-daemonsets", p.ignore_daemonsets.unwrap_or(false))
        .flag(
            "--delete-emptydir-data",
            p.delete_emptydir_data.unwrap_or(false),
        )
}

/// `run <name> --image=<image> [-n ns] [--command -- <words>...]`
pub fn run_pod(p: &RunPodParams) -> CommandArgs {
    let args = CommandArgs::new(["run"])
        .arg(&p.name)
        .arg(format!("--image={}", p.image))
        .option("-n", p.namespace.as_deref());
    match present(p.command.as_deref()) {
        Some(command) => args.arg("--command").arg("--").words(command),
        None => args,
    }
}

/// `exec <pod> [-n ns] [-c container] -- <words>...`
pub fn exec(p: &ExecParams) -> CommandArgs {
    CommandArgs::new(["exec"])
        .arg(&p.pod_name)
        .option("-n", p.namespace.as_deref())
        .option("-c", p.container.as_deref())
        .arg("--")
        .words(&p.command)
}

/// `port-forward <target> <ports> [-n ns]`
///
/// Pods are addressed by bare name; anything else as `type/name`.
pub fn port_forward(p: &PortForwardParams) -> CommandArgs {
    let target = match present(p.resource_type.as_deref()) {
        Some(kind) if kind != "pod" => format!("{}/{}", kind, p.resource_name),
        _ => p.resource_name.clone(),
    };
    CommandArgs::new(["port-forward"])
        .arg(target)
        .arg(&p.ports)
        .option("-n", p.namespace.as_deref())
}

/// Options common to `top pods` and `top nodes`
#[derive(Debug, Clone, Default)]
pub struct TopArgs<'a> {
    pub name: Option<&'a str>,
    pub namespace: Option<&'a str>,
    pub all_namespaces: bool,
    pub containers: bool,
    pub label_selector: Option<&'a str>,
    pub sort_by: Option<SortBy>,
    pub no_headers: bool,
}

/// `top <kind> [name] [-A | -n ns] [--containers] [--no-headers] [-l sel] [--sort-by key]`
pub fn top(kind: &str, t: &TopArgs<'_>) -> CommandArgs {
    let args = CommandArgs::new(["top", kind]).arg_opt(t.name);
    let args = if t.all_namespaces {
        args.arg("-A")
    } else {
        args.option("-n", t.namespace)
    };
    args.flag("--containers", t.containers)
        .flag("--no-headers", t.no_headers)
        .option("-l", t.label_selector)
        .option("--sort-by", t.sort_by.map(|s| s.as_str()))
}

pub fn top_pods(p: &TopPodsParams, sort_by: Option<SortBy>) -> CommandArgs {
    top(
        "pods",
        &TopArgs {
            name: p.pod_name.as_deref(),
            namespace: p.namespace.as_deref(),
            all_namespaces: p.all_namespaces.unwrap_or(false),
            containers: p.containers.unwrap_or(false),
            label_selector: p.label_selector.as_deref(),
            sort_by,
            no_headers: p.no_headers.unwrap_or(false),
        },
    )
}

pub fn top_nodes(p: &TopNodesParams, sort_by: Option<SortBy>) -> CommandArgs {
    top(
        "nodes",
        &TopArgs {
            name: p.node_name.as_deref(),
            label_selector: p.label_selector.as_deref(),
            sort_by,
            no_headers: p.no_headers.unwrap_or(false),
            ..TopArgs::default()
        },
    )
}
