use crate::status::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VocabularyError {
    /// A raw value that no member of `domain` maps to.
    #[error("Unknown {domain} value '{raw_value}'")]
    UnknownEnumValue {
        domain: &'static str,
        raw_value: String,
    },

    /// A numeric status code outside the success/client/server/hub bands.
    #[error("Status code {code} does not belong to any OCPI status band")]
    InvalidStatusCode { code: u16 },

    /// A domain name that is not part of the catalog.
    ///
    /// Raised only by [`find_domain`](crate::find_domain) and [`parse_any`](crate::parse_any),
    /// never by [`Vocabulary::parse`](crate::Vocabulary::parse).
    #[error("Unknown vocabulary '{domain}'")]
    UnknownDomain { domain: String },
}

impl VocabularyError {
    pub(crate) fn unknown_value(domain: &'static str, raw_value: impl ToString) -> Self {
        Self::UnknownEnumValue {
            domain,
            raw_value: raw_value.to_string(),
        }
    }
}

pub type VocabularyResult<T, E = VocabularyError> = Result<T, E>;

/// Maps a registry failure onto the status code an OCPI response should carry.
pub trait IntoOcpiStatus {
    fn ocpi_status(&self) -> StatusCode;
}

impl IntoOcpiStatus for VocabularyError {
    fn ocpi_status(&self) -> StatusCode {
        match self {
            Self::UnknownEnumValue { .. } | Self::UnknownDomain { .. } => {
                StatusCode::InvalidOrMissingParameters
            }
            Self::InvalidStatusCode { .. } => StatusCode::ClientError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_value_message_names_domain_and_value() {
        let error = VocabularyError::unknown_value("ConnectorType", "TYPE2");
        assert_eq!(error.to_string(), "Unknown ConnectorType value 'TYPE2'");
        assert_eq!(error.ocpi_status(), StatusCode::InvalidOrMissingParameters);
    }

    #[test]
    fn invalid_status_code_maps_to_generic_client_error() {
        let error = VocabularyError::InvalidStatusCode { code: 9999 };
        assert_eq!(
            error.to_string(),
            "Status code 9999 does not belong to any OCPI status band"
        );
        assert_eq!(error.ocpi_status(), StatusCode::ClientError);
    }
}
