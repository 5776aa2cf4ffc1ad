use crate::vocabulary::closed_domain;

closed_domain! {
    /// OCPI 16.5.1. `Role` enum: the role a party plays in the OCPI network.
    pub enum Role: str {
        Cpo = "CPO" => "Charging Point Operator. Operates a network of Charge Points.",
        Emsp = "EMSP" => "e-Mobility Service Provider. Gives EV drivers access to charging services.",
        Hub = "HUB" => "Can connect one or more CPOs to one or more eMSPs.",
        Nap = "NAP"
            => "National Access Point. Provides a national database with all (public) charging locations.",
        Nsp = "NSP"
            => "Navigation Service Provider. Provides EV drivers with location information of Charge Points.",
        Other = "OTHER" => "Other role.",
        Scsp = "SCSP"
            => "Smart Charging Service Provider. Provides Smart Charging service to other parties.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::VocabularyError, vocabulary::Vocabulary};

    #[test]
    fn roles_are_upper_case_tokens() {
        assert_eq!("EMSP".parse::<Role>(), Ok(Role::Emsp));
        assert_eq!(
            "eMSP".parse::<Role>(),
            Err(VocabularyError::UnknownEnumValue {
                domain: "Role",
                raw_value: "eMSP".to_owned(),
            })
        );
        assert_eq!(Role::Scsp.raw(), "SCSP");
    }
}
