use core::{fmt, iter::FusedIterator, slice};

use serde::Serialize;

use crate::error::{VocabularyError, VocabularyResult};

/// A closed OCPI value domain.
///
/// Every implementor is a fieldless enum whose members are listed, in declaration order, in
/// [`Vocabulary::TABLE`]. The table is the only place a member's symbolic name, raw OCPI token and
/// description live; the enum itself carries nothing but the discriminant.
pub trait Vocabulary: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Borrowed form of the external representation (`str` for token domains, `u16` for codes).
    type Input: ?Sized + RawForm;

    /// Name used when reporting values outside the domain, e.g. `"ConnectorType"`.
    const DOMAIN: &'static str;

    const TABLE: &'static [Entry<Self>];

    /// Index of `self` in [`Vocabulary::TABLE`].
    fn position(self) -> usize;

    #[allow(
        clippy::indexing_slicing,
        reason = "TABLE is generated from the same member list as the enum"
    )]
    fn entry(self) -> &'static Entry<Self> {
        &Self::TABLE[self.position()]
    }

    /// All members in declaration order. The iterator can be cloned to restart it.
    #[must_use]
    fn members() -> Members<Self> {
        Members {
            entries: Self::TABLE.iter(),
        }
    }

    /// Resolves a raw OCPI value to its member.
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError::UnknownEnumValue`] if `raw` matches no member. Values are never
    /// coerced; matching is exact and case-sensitive.
    fn parse(raw: &Self::Input) -> VocabularyResult<Self> {
        Self::TABLE
            .iter()
            .find(|entry| entry.raw == raw)
            .map(Entry::member)
            .ok_or_else(|| {
                tracing::trace!(
                    domain = Self::DOMAIN,
                    raw_value = %raw,
                    "Rejected value outside closed vocabulary"
                );
                VocabularyError::unknown_value(Self::DOMAIN, raw)
            })
    }

    /// The canonical external representation; `parse(member.raw()) == member`.
    fn raw(self) -> &'static Self::Input {
        self.entry().raw
    }

    /// Symbolic name as written in the OCPI document.
    fn name(self) -> &'static str {
        self.entry().name
    }

    fn describe(self) -> Option<&'static str> {
        self.entry().description
    }
}

/// Raw representations a vocabulary can be keyed by.
pub trait RawForm: PartialEq + fmt::Debug + fmt::Display + 'static {
    fn to_raw_value(&'static self) -> RawValue;
}

impl RawForm for str {
    fn to_raw_value(&'static self) -> RawValue {
        RawValue::Text(self)
    }
}

impl RawForm for u16 {
    fn to_raw_value(&'static self) -> RawValue {
        RawValue::Code(*self)
    }
}

/// Type-erased raw value, used where domains of different kinds are handled together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    Text(&'static str),
    Code(u16),
}

impl fmt::Display for RawValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => formatter.write_str(text),
            Self::Code(code) => write!(formatter, "{code}"),
        }
    }
}

/// One row of a vocabulary's member table.
pub struct Entry<V: Vocabulary> {
    pub(crate) member: V,
    pub(crate) name: &'static str,
    pub(crate) raw: &'static V::Input,
    pub(crate) description: Option<&'static str>,
}

impl<V: Vocabulary> Entry<V> {
    #[must_use]
    pub fn member(&self) -> V {
        self.member
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn raw(&self) -> &'static V::Input {
        self.raw
    }

    #[must_use]
    pub fn description(&self) -> Option<&'static str> {
        self.description
    }
}

impl<V: Vocabulary> fmt::Debug for Entry<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Entry")
            .field("member", &self.member)
            .field("name", &self.name)
            .field("raw", &format_args!("{}", self.raw))
            .field("description", &self.description)
            .finish()
    }
}

/// Iterator over the members of a vocabulary, see [`Vocabulary::members`].
pub struct Members<V: Vocabulary> {
    entries: slice::Iter<'static, Entry<V>>,
}

impl<V: Vocabulary> Clone for Members<V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<V: Vocabulary> fmt::Debug for Members<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.entries.clone()).finish()
    }
}

impl<V: Vocabulary> Iterator for Members<V> {
    type Item = &'static Entry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<V: Vocabulary> DoubleEndedIterator for Members<V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back()
    }
}

impl<V: Vocabulary> ExactSizeIterator for Members<V> {}

impl<V: Vocabulary> FusedIterator for Members<V> {}

/// Declares a closed vocabulary.
///
/// Token domains (`: str`) are keyed by their OCPI string; the symbolic name defaults to the token
/// and can be overridden with `as "NAME"`. Code domains (`: u16`) always name their members.
/// A trailing `=> "text"` attaches a description.
macro_rules! closed_domain {
    (@name $raw:literal) => {
        $raw
    };
    (@name $raw:literal, $name:literal) => {
        $name
    };
    (@description) => {
        None
    };
    (@description $description:literal) => {
        Some($description)
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $domain:ident: str {
            $(
                $variant:ident = $raw:literal $(as $name:literal)? $(=> $description:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[allow(clippy::doc_markdown, reason = "member docs quote the OCPI document text")]
        $vis enum $domain {
            $(
                $(#[doc = $description])?
                $variant,
            )*
        }

        impl $crate::vocabulary::Vocabulary for $domain {
            type Input = str;

            const DOMAIN: &'static str = stringify!($domain);

            const TABLE: &'static [$crate::vocabulary::Entry<Self>] = &[
                $(
                    $crate::vocabulary::Entry {
                        member: Self::$variant,
                        name: closed_domain!(@name $raw $(, $name)?),
                        raw: $raw,
                        description: closed_domain!(@description $($description)?),
                    },
                )*
            ];

            fn position(self) -> usize {
                self as usize
            }
        }

        impl ::core::fmt::Display for $domain {
            fn fmt(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                formatter.write_str(<Self as $crate::vocabulary::Vocabulary>::raw(*self))
            }
        }

        impl ::core::str::FromStr for $domain {
            type Err = $crate::error::VocabularyError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                <Self as $crate::vocabulary::Vocabulary>::parse(raw)
            }
        }

        impl ::serde::Serialize for $domain {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                $crate::serde::serialize_member(*self, serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $domain {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                $crate::serde::deserialize_text(deserializer)
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $domain:ident: u16 {
            $(
                $variant:ident = $code:literal as $name:literal $(=> $description:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[allow(clippy::doc_markdown, reason = "member docs quote the OCPI document text")]
        $vis enum $domain {
            $(
                $(#[doc = $description])?
                $variant,
            )*
        }

        impl $crate::vocabulary::Vocabulary for $domain {
            type Input = u16;

            const DOMAIN: &'static str = stringify!($domain);

            const TABLE: &'static [$crate::vocabulary::Entry<Self>] = &[
                $(
                    $crate::vocabulary::Entry {
                        member: Self::$variant,
                        name: $name,
                        raw: &$code,
                        description: closed_domain!(@description $($description)?),
                    },
                )*
            ];

            fn position(self) -> usize {
                self as usize
            }
        }

        impl ::core::fmt::Display for $domain {
            fn fmt(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(formatter, "{}", <Self as $crate::vocabulary::Vocabulary>::raw(*self))
            }
        }

        impl TryFrom<u16> for $domain {
            type Error = $crate::error::VocabularyError;

            fn try_from(code: u16) -> Result<Self, Self::Error> {
                <Self as $crate::vocabulary::Vocabulary>::parse(&code)
            }
        }

        impl ::serde::Serialize for $domain {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                $crate::serde::serialize_member(*self, serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $domain {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                $crate::serde::deserialize_code(deserializer)
            }
        }
    };
}

pub(crate) use closed_domain;
