//! Status icons for CLI output

use crate::domain::definition::ResourceKind;

pub struct StatusIcon;

impl StatusIcon {
    /// Operation succeeded / resource present
    pub const SUCCESS: &'static str = "✓";

    /// Operation failed / resource absent
    pub const ERROR: &'static str = "✗";

    pub const WORKLOAD: &'static str = "🔷";
    pub const SERVICE: &'static str = "🌐";

    pub fn get_kind_icon(kind: ResourceKind) -> &'static str {
        match kind {
            ResourceKind::Workload => Self::WORKLOAD,
            ResourceKind::Service => Self::SERVICE,
        }
    }

    pub fn get_presence_icon(found: bool) -> &'static str {
        if found {
            Self::SUCCESS
        } else {
            Self::ERROR
        }
    }
}
