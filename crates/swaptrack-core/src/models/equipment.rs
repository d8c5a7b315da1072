//! Equipment records attached to a site.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Vendor;

/// Which side of the swap a piece of equipment belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EquipmentRole {
    /// Module being removed
    Legacy,
    /// Ericsson module being installed
    Target,
}

impl EquipmentRole {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentRole::Legacy => "legacy",
            EquipmentRole::Target => "target",
        }
    }

    /// Module type label recorded on the equipment.
    pub fn equipment_type(&self) -> &'static str {
        match self {
            EquipmentRole::Legacy => "Legacy-Module",
            EquipmentRole::Target => "Ericsson-Module",
        }
    }
}

impl FromStr for EquipmentRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" | "swapped" => Ok(EquipmentRole::Legacy),
            "target" | "install" => Ok(EquipmentRole::Target),
            _ => Err(format!("Invalid equipment role: {s}")),
        }
    }
}

/// A piece of radio equipment at a site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Equipment {
    /// Generated identifier
    pub id: String,

    /// Legacy or target side of the swap
    pub role: EquipmentRole,

    /// Module type label, e.g. `Legacy-Module`
    pub equipment_type: String,

    /// Manufacturer
    pub vendor: Vendor,

    /// Model name, e.g. `BBU3900` or `BB 6630`
    #[serde(default)]
    pub model: String,

    /// Serial number, stored upper-case
    #[serde(default)]
    pub serial_number: String,
}

impl Equipment {
    /// Creates an empty record for the given side of the swap.
    pub fn new(role: EquipmentRole, vendor: Vendor) -> Self {
        Self {
            id: uuid::Uuid::new_v4().simple().to_string(),
            role,
            equipment_type: role.equipment_type().to_string(),
            vendor,
            model: String::new(),
            serial_number: String::new(),
        }
    }
}
