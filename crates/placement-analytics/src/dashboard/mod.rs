mod directory;
pub mod domain;
pub mod flow;
pub mod hierarchy;
pub mod network;
pub mod roster;
mod snapshot;
pub mod source;
pub mod stats;

pub use directory::DepartmentDirectory;
pub use domain::{PlacementStatus, StudentRecord};
pub use flow::{build_flow, FlowGraph, FlowLayer, FlowLink, FlowNode};
pub use hierarchy::{build_hierarchy, HierarchyNode};
pub use network::{build_network, NetworkGraph, NetworkLink, NetworkNode, NodeKind};
pub use roster::{filter_and_sort, SortDirection, SortKey};
pub use snapshot::{DepartmentDashboard, COMPANY_SHARE_SLICES};
pub use source::{MockDirectory, RecordFormat, RecordImporter, RecordSourceError};
pub use stats::{compute_stats, DemandSource, DemandTable, DepartmentStats, SimulatedDemand};
