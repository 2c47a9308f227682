//! Domain model for catalog records.
//!
//! # Design
//! Records arrive in two layers. `RawWork` / `RawContributor` mirror the wire
//! format field-for-field and are deliberately permissive: every field except
//! `id` falls back to its default when absent or `null`. `Work` / `Contributor`
//! are the validated domain values built from them. The only rule enforced
//! during that step is id positivity; the service is trusted for everything
//! else.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::error::CatalogError;

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A person record exactly as the service sends it.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RawContributor {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub death_year: Option<i32>,
}

/// A book record exactly as the service sends it.
///
/// `id` is signed so that out-of-range values survive decoding and are
/// rejected by the domain check rather than by serde.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RawWork {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Vec<RawContributor>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub translators: Vec<RawContributor>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subjects: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bookshelves: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<String>,
    #[serde(default)]
    pub copyright: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub media_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub formats: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub download_count: u64,
}

/// A person associated with a work, as author or translator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contributor {
    pub name: String,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
}

impl Contributor {
    pub fn decode(raw: RawContributor) -> Self {
        Self {
            name: raw.name,
            birth_year: raw.birth_year,
            death_year: raw.death_year,
        }
    }
}

impl From<RawContributor> for Contributor {
    fn from(raw: RawContributor) -> Self {
        Self::decode(raw)
    }
}

/// A single catalog entry.
///
/// Fields are private so a `Work` can only be obtained through `decode`,
/// which guarantees `id() >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Work {
    id: u64,
    title: String,
    authors: Vec<Contributor>,
    translators: Vec<Contributor>,
    subjects: Vec<String>,
    bookshelves: Vec<String>,
    languages: Vec<String>,
    copyright: bool,
    media_type: String,
    formats: BTreeMap<String, String>,
    download_count: u64,
}

impl Work {
    /// Validate and convert a raw record.
    ///
    /// Fails with `InvalidIdentifier` when `raw.id < 1`. An unknown
    /// (`null`) copyright status is read as not copyrighted.
    pub fn decode(raw: RawWork) -> Result<Self, CatalogError> {
        if raw.id < 1 {
            return Err(CatalogError::InvalidIdentifier(raw.id));
        }

        Ok(Self {
            id: raw.id as u64,
            title: raw.title,
            authors: raw.authors.into_iter().map(Contributor::decode).collect(),
            translators: raw.translators.into_iter().map(Contributor::decode).collect(),
            subjects: raw.subjects,
            bookshelves: raw.bookshelves,
            languages: raw.languages,
            copyright: raw.copyright.unwrap_or(false),
            media_type: raw.media_type,
            formats: raw.formats,
            download_count: raw.download_count,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn authors(&self) -> &[Contributor] {
        &self.authors
    }

    pub fn translators(&self) -> &[Contributor] {
        &self.translators
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn bookshelves(&self) -> &[String] {
        &self.bookshelves
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn copyright(&self) -> bool {
        self.copyright
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn formats(&self) -> &BTreeMap<String, String> {
        &self.formats
    }

    /// URL registered under `key`, if the work offers that format.
    pub fn format(&self, key: &str) -> Option<&str> {
        self.formats.get(key).map(String::as_str)
    }

    pub fn download_count(&self) -> u64 {
        self.download_count
    }
}

impl TryFrom<RawWork> for Work {
    type Error = CatalogError;

    fn try_from(raw: RawWork) -> Result<Self, Self::Error> {
        Self::decode(raw)
    }
}
