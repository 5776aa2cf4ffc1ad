use ocpi_vocab::{
    band_of, parse_any, ConnectorType, ModuleId, StatusBand, StatusCode, Vocabulary,
    VocabularyError,
};
use proptest::prelude::*;

proptest! {
    /// Arbitrary text is either a declared token or rejected with the text it was given.
    #[test]
    fn connector_type_is_closed(raw in "\\PC{0,24}") {
        match ConnectorType::parse(&raw) {
            Ok(member) => prop_assert_eq!(member.raw(), raw.as_str()),
            Err(error) => prop_assert_eq!(
                error,
                VocabularyError::UnknownEnumValue {
                    domain: "ConnectorType",
                    raw_value: raw.clone(),
                }
            ),
        }
    }

    /// Changing the case of a lower-case module id never yields a member.
    #[test]
    fn module_ids_are_case_sensitive(index in 0usize..10) {
        let entry = ModuleId::members().nth(index).expect("ten module ids");
        let shouted = entry.raw().to_uppercase();
        prop_assert!(ModuleId::parse(&shouted).is_err());
    }

    /// Every code is either declared, or rejected by the registry while still having a band.
    #[test]
    fn status_codes_and_bands(code in any::<u16>()) {
        let band = band_of(code);
        match StatusCode::try_from(code) {
            Ok(member) => {
                prop_assert_eq!(&band, &Ok(member.band()));
                prop_assert_eq!(member.code(), code);
            }
            Err(VocabularyError::UnknownEnumValue { domain, raw_value }) => {
                prop_assert_eq!(domain, "StatusCode");
                prop_assert_eq!(raw_value, code.to_string());
            }
            Err(error) => prop_assert!(false, "unexpected error {error}"),
        }
        if (1000..5000).contains(&code) {
            let band = band.expect("code inside a band");
            prop_assert!(band.range().contains(&code));
        } else {
            prop_assert_eq!(&band, &Err(VocabularyError::InvalidStatusCode { code }));
        }
    }

    #[test]
    fn catalog_parsing_agrees_with_typed_parsing(raw in "[A-Z_0-9]{1,20}") {
        let typed = ConnectorType::parse(&raw).map(|member| member.name());
        let erased = parse_any("ConnectorType", &raw).map(|entry| entry.name);
        prop_assert_eq!(typed, erased);
    }
}

#[test]
fn client_error_band_range() {
    assert_eq!(StatusBand::ClientError.range(), 2000..=2999);
}
