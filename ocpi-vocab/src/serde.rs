use std::borrow::Cow;

use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

use crate::{error::VocabularyError, vocabulary::Vocabulary};

pub(crate) fn serialize_member<V, S>(member: V, serializer: S) -> Result<S::Ok, S::Error>
where
    V: Vocabulary,
    V::Input: Serialize,
    S: Serializer,
{
    member.raw().serialize(serializer)
}

pub(crate) fn deserialize_text<'de, V, D>(deserializer: D) -> Result<V, D::Error>
where
    V: Vocabulary<Input = str>,
    D: Deserializer<'de>,
{
    let raw: Cow<'de, str> = Deserialize::deserialize(deserializer)?;
    V::parse(&raw).map_err(D::Error::custom)
}

pub(crate) fn deserialize_code<'de, V, D>(deserializer: D) -> Result<V, D::Error>
where
    V: Vocabulary<Input = u16>,
    D: Deserializer<'de>,
{
    // Wide enough for negative and out-of-range numbers, which are reported like any other
    // non-member.
    let code = i64::deserialize(deserializer)?;
    let code = u16::try_from(code)
        .map_err(|_| VocabularyError::unknown_value(V::DOMAIN, code))
        .map_err(D::Error::custom)?;
    V::parse(&code).map_err(D::Error::custom)
}
