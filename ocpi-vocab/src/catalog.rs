use core::{fmt, str::FromStr};

use serde::Serialize;

use crate::{
    domains::{
        Capability, ConnectorFormat, ConnectorType, EnergySourceCategory,
        EnvironmentalImpactCategory, Facility, ImageCategory, InterfaceRole, ModuleId,
        ParkingRestriction, ParkingType, PowerType, Role, Status, TokenType, VersionNumber,
    },
    error::{VocabularyError, VocabularyResult},
    status::StatusCode,
    vocabulary::{Entry, RawForm, RawValue, Vocabulary},
};

/// A member of some vocabulary, with the vocabulary's type erased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntryInfo {
    pub domain: &'static str,
    pub name: &'static str,
    pub raw: RawValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl EntryInfo {
    fn from_entry<V: Vocabulary>(entry: &Entry<V>) -> Self {
        Self {
            domain: V::DOMAIN,
            name: entry.name(),
            raw: entry.raw().to_raw_value(),
            description: entry.description(),
        }
    }
}

/// Serializable listing of one vocabulary, as produced for documentation.
#[derive(Debug, Clone, Serialize)]
pub struct DomainListing {
    pub domain: &'static str,
    pub members: Vec<EntryInfo>,
}

/// Runtime handle on one vocabulary of the catalog.
pub struct DomainInfo {
    name: &'static str,
    entries: fn() -> Vec<EntryInfo>,
    parse: fn(&str) -> VocabularyResult<EntryInfo>,
}

impl DomainInfo {
    const fn of<V>() -> Self
    where
        V: Vocabulary + FromStr<Err = VocabularyError>,
    {
        Self {
            name: V::DOMAIN,
            entries: entries_of::<V>,
            parse: parse_as::<V>,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn entries(&self) -> Vec<EntryInfo> {
        (self.entries)()
    }

    /// Resolves the text form of a raw value; status codes take their decimal form.
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError::UnknownEnumValue`] if `raw` is not a member of this domain.
    pub fn parse(&self, raw: &str) -> VocabularyResult<EntryInfo> {
        (self.parse)(raw)
    }

    #[must_use]
    pub fn listing(&self) -> DomainListing {
        DomainListing {
            domain: self.name,
            members: self.entries(),
        }
    }
}

impl fmt::Debug for DomainInfo {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DomainInfo")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn entries_of<V: Vocabulary>() -> Vec<EntryInfo> {
    V::members().map(EntryInfo::from_entry).collect()
}

fn parse_as<V>(raw: &str) -> VocabularyResult<EntryInfo>
where
    V: Vocabulary + FromStr<Err = VocabularyError>,
{
    let member = raw.parse::<V>()?;
    Ok(EntryInfo::from_entry(member.entry()))
}

static CATALOG: [DomainInfo; 17] = [
    DomainInfo::of::<StatusCode>(),
    DomainInfo::of::<Role>(),
    DomainInfo::of::<VersionNumber>(),
    DomainInfo::of::<ModuleId>(),
    DomainInfo::of::<InterfaceRole>(),
    DomainInfo::of::<Capability>(),
    DomainInfo::of::<ConnectorFormat>(),
    DomainInfo::of::<ConnectorType>(),
    DomainInfo::of::<EnergySourceCategory>(),
    DomainInfo::of::<EnvironmentalImpactCategory>(),
    DomainInfo::of::<Facility>(),
    DomainInfo::of::<ImageCategory>(),
    DomainInfo::of::<ParkingRestriction>(),
    DomainInfo::of::<ParkingType>(),
    DomainInfo::of::<PowerType>(),
    DomainInfo::of::<Status>(),
    DomainInfo::of::<TokenType>(),
];

/// Every vocabulary of the registry, in a fixed order.
#[must_use]
pub fn catalog() -> &'static [DomainInfo] {
    &CATALOG
}

/// Looks a vocabulary up by its domain name, e.g. `"ConnectorType"`.
///
/// # Errors
///
/// Returns [`VocabularyError::UnknownDomain`] if no vocabulary has that name.
pub fn find_domain(domain: &str) -> VocabularyResult<&'static DomainInfo> {
    CATALOG
        .iter()
        .find(|info| info.name == domain)
        .ok_or_else(|| VocabularyError::UnknownDomain {
            domain: domain.to_owned(),
        })
}

/// Resolves `raw` within the vocabulary named `domain`.
///
/// # Errors
///
/// Returns [`VocabularyError::UnknownDomain`] for an unknown domain name and
/// [`VocabularyError::UnknownEnumValue`] for a value outside the domain.
pub fn parse_any(domain: &str, raw: &str) -> VocabularyResult<EntryInfo> {
    tracing::debug!(domain, raw, "Resolving value through catalog");
    find_domain(domain)?.parse(raw)
}
