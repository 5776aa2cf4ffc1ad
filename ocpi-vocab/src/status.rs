use core::{fmt, ops::RangeInclusive, str::FromStr};

use serde::Serialize;

use crate::{
    error::{VocabularyError, VocabularyResult},
    vocabulary::{closed_domain, Vocabulary},
};

closed_domain! {
    /// OCPI 5. Status codes, carried in the `status_code` field of every response.
    pub enum StatusCode: u16 {
        Success = 1000 as "SUCCESS" => "Generic success code.",

        ClientError = 2000 as "CLIENT_ERROR" => "Generic client error.",
        InvalidOrMissingParameters = 2001 as "INVALID_OR_MISSING_PARAMETERS"
            => "Invalid or missing parameters, for example: missing last_updated field in a PATCH request.",
        NotEnoughInformation = 2002 as "NOT_ENOUGH_INFORMATION"
            => "Not enough information, for example: Authorization request with too little information.",
        UnknownLocation = 2003 as "UNKNOWN_LOCATION"
            => "Unknown Location, for example: Command: START_SESSION with unknown location.",
        UnknownToken = 2004 as "UNKNOWN_TOKEN"
            => "Unknown Token, for example: 'real-time' authorization of an unknown Token.",

        ServerError = 3000 as "SERVER_ERROR" => "Generic server error.",
        UnableToUseTheClientsApi = 3001 as "UNABLE_TO_USE_THE_CLIENTS_API"
            => "Unable to use the client's API.",
        UnsupportedVersion = 3002 as "UNSUPPORTED_VERSION" => "Unsupported version.",
        NoMatchingEndpoints = 3003 as "NO_MATCHING_ENDPOINTS_OR_EXPECTED_ENDPOINTS_MISSING_BETWEEN_PARTIES"
            => "No matching endpoints or expected endpoints missing between parties.",

        HubError = 4000 as "HUB_ERROR" => "Generic hub error.",
        UnknownReceiver = 4001 as "UNKNOWN_RECEIVER" => "Unknown receiver (TO address is unknown).",
        TimeoutOnForwardedRequest = 4002 as "TIMEOUT_ON_FORWARDED_REQUEST"
            => "Timeout on forwarded request (message is forwarded, but request times out).",
        ConnectionProblem = 4003 as "CONNECTION_PROBLEM"
            => "Connection problem (receiving party is not connected).",
    }
}

impl StatusCode {
    #[must_use]
    pub fn code(self) -> u16 {
        *self.raw()
    }

    #[must_use]
    pub fn band(self) -> StatusBand {
        match self {
            Self::Success => StatusBand::Success,
            Self::ClientError
            | Self::InvalidOrMissingParameters
            | Self::NotEnoughInformation
            | Self::UnknownLocation
            | Self::UnknownToken => StatusBand::ClientError,
            Self::ServerError
            | Self::UnableToUseTheClientsApi
            | Self::UnsupportedVersion
            | Self::NoMatchingEndpoints => StatusBand::ServerError,
            Self::HubError
            | Self::UnknownReceiver
            | Self::TimeoutOnForwardedRequest
            | Self::ConnectionProblem => StatusBand::HubError,
        }
    }

    #[must_use]
    pub fn is_success(self) -> bool {
        self.band().is_success()
    }
}

/// Accepts the decimal form of a code, e.g. `"2001"`.
impl FromStr for StatusCode {
    type Err = VocabularyError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let code = raw
            .parse::<u16>()
            .map_err(|_error| VocabularyError::unknown_value(Self::DOMAIN, raw))?;
        Self::parse(&code)
    }
}

/// Category of a status code, given by its thousands digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusBand {
    /// 1xxx
    Success,
    /// 2xxx: errors detected by the server in the message sent by a client.
    ClientError,
    /// 3xxx: errors detected by the client in the message sent by a server.
    ServerError,
    /// 4xxx: errors detected by a hub while routing a message.
    HubError,
}

impl StatusBand {
    pub const ALL: [Self; 4] = [
        Self::Success,
        Self::ClientError,
        Self::ServerError,
        Self::HubError,
    ];

    /// Determines the band of any numeric code, declared member or not.
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError::InvalidStatusCode`] if the thousands digit is not 1 to 4.
    pub fn of(code: u16) -> VocabularyResult<Self> {
        match code / 1000 {
            1 => Ok(Self::Success),
            2 => Ok(Self::ClientError),
            3 => Ok(Self::ServerError),
            4 => Ok(Self::HubError),
            _ => Err(VocabularyError::InvalidStatusCode { code }),
        }
    }

    /// The generic `x000` code of the band.
    #[must_use]
    pub fn generic(self) -> StatusCode {
        match self {
            Self::Success => StatusCode::Success,
            Self::ClientError => StatusCode::ClientError,
            Self::ServerError => StatusCode::ServerError,
            Self::HubError => StatusCode::HubError,
        }
    }

    #[must_use]
    pub fn range(self) -> RangeInclusive<u16> {
        let start = self.generic().code();
        start..=start + 999
    }

    #[must_use]
    pub fn is_success(self) -> bool {
        self == Self::Success
    }

    #[must_use]
    pub fn is_error(self) -> bool {
        !self.is_success()
    }
}

impl fmt::Display for StatusBand {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Success => "success",
            Self::ClientError => "client error",
            Self::ServerError => "server error",
            Self::HubError => "hub error",
        })
    }
}

/// See [`StatusBand::of`].
///
/// # Errors
///
/// Returns [`VocabularyError::InvalidStatusCode`] for codes outside 1000..=4999.
pub fn band_of(code: u16) -> VocabularyResult<StatusBand> {
    StatusBand::of(code)
}
