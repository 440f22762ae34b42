//! Operation catalog: the fixed name → operation table

use std::collections::BTreeMap;

use serde_json::Value;

use super::operation::{KubectlOperation, OperationPlan};
use super::params::{
    ApplyParams, ClusterInfoParams, CordonParams, DeleteParams, DescribeParams, DrainParams,
    ExecParams, GetParams, LogsParams, PatchParams, PortForwardParams, RolloutRestartParams,
    RolloutStatusParams, RunPodParams, ScaleParams, SetImageParams, TopNodesParams,
    TopPodsParams, UncordonParams, WaitParams,
};
use crate::core::error::ValidationError;
use crate::tool::ToolDefinition;

type PlanFn = fn(Value) -> Result<OperationPlan, ValidationError>;

/// One registered operation
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub definition: ToolDefinition,
    plan: PlanFn,
}

impl CatalogEntry {
    fn of<O: KubectlOperation>() -> Self {
        Self {
            definition: O::definition(),
            plan: decode_and_plan::<O>,
        }
    }

    /// Decode JSON arguments and plan the operation
    pub fn plan(&self, arguments: Value) -> Result<OperationPlan, ValidationError> {
        (self.plan)(arguments)
    }
}

fn decode_and_plan<O: KubectlOperation>(arguments: Value) -> Result<OperationPlan, ValidationError> {
    let arguments = match arguments {
        Value::Null => Value::Object(serde_json::Map::new()),
        other => other,
    };
    let op: O = serde_json::from_value(arguments).map_err(|e| {
        ValidationError::InvalidArguments {
            operation: O::NAME.to_string(),
            message: e.to_string(),
        }
    })?;
    op.plan()
}

/// All operations, keyed by tool name.
///
/// Built once from the static list; names are unique.
#[derive(Debug, Clone)]
pub struct OperationCatalog {
    entries: BTreeMap<&'static str, CatalogEntry>,
}

impl OperationCatalog {
    pub fn standard() -> Self {
        let mut catalog = Self {
            entries: BTreeMap::new(),
        };
        catalog.register::<LogsParams>();
        catalog.register::<GetParams>();
        catalog.register::<DescribeParams>();
        catalog.register::<ApplyParams>();
        catalog.register::<PatchParams>();
        catalog.register::<SetImageParams>();
        catalog.register::<RolloutRestartParams>();
        catalog.register::<ScaleParams>();
        catalog.register::<DeleteParams>();
        catalog.register::<WaitParams>();
        catalog.register::<RolloutStatusParams>();
        catalog.register::<ClusterInfoParams>();
        catalog.register::<CordonParams>();
        catalog.register::<UncordonParams>();
        catalog.register::<DrainParams>();
        catalog.register::<RunPodParams>();
        catalog.register::<ExecParams>();
        catalog.register::<PortForwardParams>();
        catalog.register::<TopPodsParams>();
        catalog.register::<TopNodesParams>();
        catalog
    }

    fn register<O: KubectlOperation>(&mut self) {
        self.entries.insert(O::NAME, CatalogEntry::of::<O>());
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn definitions(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.entries.values().map(|e| &e.definition)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for OperationCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
