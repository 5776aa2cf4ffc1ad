mod credentials;
mod locations;
mod tokens;
mod versions;

pub use credentials::Role;
pub use locations::{
    Capability, ConnectorFormat, ConnectorType, EnergySourceCategory, EnvironmentalImpactCategory,
    Facility, ImageCategory, ParkingRestriction, ParkingType, PowerType, Status,
};
pub use tokens::TokenType;
pub use versions::{InterfaceRole, ModuleId, VersionNumber};
