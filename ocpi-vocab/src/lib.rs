//! Closed vocabularies of OCPI 2.2.1.
//!
//! Each vocabulary is a fieldless enum implementing [`Vocabulary`]. Raw OCPI values enter through
//! [`Vocabulary::parse`] (or `FromStr`/`TryFrom`/serde, which all route through it) and leave through
//! [`Vocabulary::raw`]. Values outside a vocabulary are rejected with
//! [`VocabularyError::UnknownEnumValue`]; deciding whether to tolerate them is left to the caller.

pub use catalog::{catalog, find_domain, parse_any, DomainInfo, DomainListing, EntryInfo};
pub use domains::{
    Capability, ConnectorFormat, ConnectorType, EnergySourceCategory, EnvironmentalImpactCategory,
    Facility, ImageCategory, InterfaceRole, ModuleId, ParkingRestriction, ParkingType, PowerType,
    Role, Status, TokenType, VersionNumber,
};
pub use error::{IntoOcpiStatus, VocabularyError, VocabularyResult};
pub use status::{band_of, StatusBand, StatusCode};
pub use vocabulary::{Entry, Members, RawForm, RawValue, Vocabulary};

mod catalog;
mod domains;
mod error;
mod serde;
mod status;
mod vocabulary;
