use std::{collections::HashSet, fmt::Debug};

use ocpi_vocab::{
    catalog, Capability, ConnectorFormat, ConnectorType, EnergySourceCategory,
    EnvironmentalImpactCategory, Facility, ImageCategory, InterfaceRole, IntoOcpiStatus, ModuleId,
    ParkingRestriction, ParkingType, PowerType, RawForm, Role, Status, StatusCode, TokenType,
    VersionNumber, Vocabulary, VocabularyError,
};
use serde::{de::DeserializeOwned, Serialize};

const NOT_A_VALUE: &str = "__not_a_real_value__";

fn assert_round_trip<V: Vocabulary>() {
    for entry in V::members() {
        let member = entry.member();
        assert_eq!(V::parse(member.raw()), Ok(member), "{}::{member:?}", V::DOMAIN);
        assert_eq!(member.raw(), entry.raw());
        assert_eq!(member.name(), entry.name());
        assert_eq!(member.describe(), entry.description());
    }
}

fn assert_unique<V: Vocabulary>() {
    let mut names = HashSet::new();
    let mut raws = HashSet::new();
    let mut members = HashSet::new();
    for entry in V::members() {
        assert!(names.insert(entry.name()), "duplicate name {}", entry.name());
        assert!(
            raws.insert(entry.raw().to_raw_value()),
            "duplicate raw value {}",
            entry.raw()
        );
        assert!(members.insert(entry.member().position()));
    }
    assert_eq!(names.len(), V::members().len());
}

fn assert_closed<V>()
where
    V: Vocabulary<Input = str>,
{
    assert_eq!(
        V::parse(NOT_A_VALUE),
        Err(VocabularyError::UnknownEnumValue {
            domain: V::DOMAIN,
            raw_value: NOT_A_VALUE.to_owned(),
        })
    );
    assert!(V::parse("").is_err());
}

fn assert_json_round_trip<V>()
where
    V: Vocabulary + Serialize + DeserializeOwned + Debug,
{
    for entry in V::members() {
        let member = entry.member();
        let json = serde_json::to_value(member).expect("vocabulary members serialize");
        let back: V = serde_json::from_value(json).expect("serialized member parses");
        assert_eq!(back, member);
    }
}

macro_rules! for_every_text_domain {
    ($check:ident) => {
        $check::<Role>();
        $check::<VersionNumber>();
        $check::<ModuleId>();
        $check::<InterfaceRole>();
        $check::<Capability>();
        $check::<ConnectorFormat>();
        $check::<ConnectorType>();
        $check::<EnergySourceCategory>();
        $check::<EnvironmentalImpactCategory>();
        $check::<Facility>();
        $check::<ImageCategory>();
        $check::<ParkingRestriction>();
        $check::<ParkingType>();
        $check::<PowerType>();
        $check::<Status>();
        $check::<TokenType>();
    };
}

#[test]
fn every_member_round_trips() {
    for_every_text_domain!(assert_round_trip);
    assert_round_trip::<StatusCode>();
}

#[test]
fn names_and_raw_values_are_unique() {
    for_every_text_domain!(assert_unique);
    assert_unique::<StatusCode>();
}

#[test]
fn unknown_values_are_rejected() {
    for_every_text_domain!(assert_closed);
    assert_eq!(
        StatusCode::try_from(9999),
        Err(VocabularyError::UnknownEnumValue {
            domain: "StatusCode",
            raw_value: "9999".to_owned(),
        })
    );
}

#[test]
fn json_uses_ocpi_tokens() {
    for_every_text_domain!(assert_json_round_trip);
    assert_json_round_trip::<StatusCode>();

    assert_eq!(
        serde_json::to_string(&ConnectorType::Iec60309_2Single16).expect("serializes"),
        r#""IEC_60309_2_single_16""#
    );
    assert_eq!(
        serde_json::to_string(&StatusCode::UnknownLocation).expect("serializes"),
        "2003"
    );
    assert_eq!(
        serde_json::to_string(&[Capability::Reservable, Capability::RfidReader])
            .expect("serializes"),
        r#"["RESERVABLE","RFID_READER"]"#
    );
}

#[test]
fn json_rejects_values_outside_vocabulary() {
    let error = serde_json::from_str::<ConnectorType>(r#""TYPE2""#).expect_err("not a member");
    assert!(
        error.to_string().contains("Unknown ConnectorType value 'TYPE2'"),
        "{error}"
    );

    let error = serde_json::from_str::<StatusCode>("2005").expect_err("not a member");
    assert!(error.to_string().contains("Unknown StatusCode value '2005'"), "{error}");

    for (json, raw) in [("70000", "70000"), ("-1", "-1")] {
        let error = serde_json::from_str::<StatusCode>(json).expect_err("outside u16");
        let expected = format!("Unknown StatusCode value '{raw}'");
        assert!(error.to_string().contains(&expected), "{error}");
    }

    assert!(serde_json::from_str::<StatusCode>(r#""1000""#).is_err());
    assert!(serde_json::from_str::<Status>("1").is_err());
}

#[test]
fn rejected_values_map_to_invalid_parameters() {
    let error = "TYPE2".parse::<ConnectorType>().expect_err("not a member");
    assert_eq!(error.ocpi_status(), StatusCode::InvalidOrMissingParameters);
    assert_eq!(error.ocpi_status().code(), 2001);
}

#[test]
fn declaration_order_is_preserved() {
    let tokens: Vec<_> = PowerType::members().map(|entry| entry.raw()).collect();
    assert_eq!(
        tokens,
        ["AC_1_PHASE", "AC_2_PHASE", "AC_2_PHASE_SPLIT", "AC_3_PHASE", "DC"]
    );
    let codes: Vec<_> = StatusCode::members().map(|entry| *entry.raw()).collect();
    assert_eq!(
        codes,
        [1000, 2000, 2001, 2002, 2003, 2004, 3000, 3001, 3002, 3003, 4000, 4001, 4002, 4003]
    );
}

#[test]
fn catalog_covers_every_domain() {
    let names: Vec<_> = catalog().iter().map(|info| info.name()).collect();
    assert_eq!(
        names,
        [
            "StatusCode",
            "Role",
            "VersionNumber",
            "ModuleId",
            "InterfaceRole",
            "Capability",
            "ConnectorFormat",
            "ConnectorType",
            "EnergySourceCategory",
            "EnvironmentalImpactCategory",
            "Facility",
            "ImageCategory",
            "ParkingRestriction",
            "ParkingType",
            "PowerType",
            "Status",
            "TokenType",
        ]
    );
    for info in catalog() {
        for entry in info.entries() {
            assert_eq!(info.parse(&entry.raw.to_string()), Ok(entry));
        }
    }
}
