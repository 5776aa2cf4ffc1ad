use crate::vocabulary::closed_domain;

closed_domain! {
    /// OCPI 6.1.5. `VersionNumber` enum: the versions this vocabulary covers.
    pub enum VersionNumber: str {
        V2_2_1 = "2.2.1" as "v221" => "OCPI version 2.2.1",
    }
}

closed_domain! {
    /// OCPI 6.2.4.1. `ModuleID` enum: identifier of the module an endpoint implements.
    pub enum ModuleId: str {
        Cdrs = "cdrs",
        ChargingProfiles = "chargingprofiles",
        Commands = "commands",
        Credentials = "credentials"
            => "Required for all implementations. The role field has no function for this module.",
        HubClientInfo = "hubclientinfo",
        Locations = "locations",
        Sessions = "sessions",
        Tariffs = "tariffs",
        Tokens = "tokens",
        Versions = "versions",
    }
}

closed_domain! {
    /// OCPI 6.2.4.2. `InterfaceRole` enum
    pub enum InterfaceRole: str {
        Sender = "SENDER"
            => "Interface implemented by the owner of data, so the Receiver can Pull information from the data Sender/owner.",
        Receiver = "RECEIVER"
            => "Interface implemented by the receiver of data, so the Sender/owner can Push information to the Receiver.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::Vocabulary;

    #[test]
    fn version_name_differs_from_token() {
        assert_eq!(VersionNumber::V2_2_1.name(), "v221");
        assert_eq!(VersionNumber::V2_2_1.raw(), "2.2.1");
        assert_eq!("2.2.1".parse::<VersionNumber>(), Ok(VersionNumber::V2_2_1));
        assert!("2.2".parse::<VersionNumber>().is_err());
    }

    #[test]
    fn module_ids_are_lower_case() {
        assert_eq!("hubclientinfo".parse::<ModuleId>(), Ok(ModuleId::HubClientInfo));
        assert!("HUBCLIENTINFO".parse::<ModuleId>().is_err());
        assert!(ModuleId::Credentials.describe().is_some());
        assert_eq!(ModuleId::Tariffs.describe(), None);
    }
}
