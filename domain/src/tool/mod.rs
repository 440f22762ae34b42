//! Tool domain module
//!
//! Describes how operations are presented to a calling agent and what they
//! hand back.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ToolDefinition│───▶│ ToolCall     │───▶│ ToolOutput   │
//! │ (catalog)    │    │ (invocation) │    │ (result)     │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! Each [`ToolDefinition`] carries [`ToolHints`] so the caller can tell
//! read-only tools from mutating and destructive ones:
//!
//! | Hints | Examples |
//! |-------|----------|
//! | **read-only** | `k8s_get`, `k8s_logs`, `k8s_top_pods` |
//! | **mutating** | `k8s_apply`, `k8s_scale`, `k8s_cordon` |
//! | **destructive** | `k8s_delete`, `k8s_drain` |

pub mod entities;
pub mod value_objects;

pub use entities::{ToolCall, ToolDefinition, ToolHints, ToolParameter};
pub use value_objects::ToolOutput;
