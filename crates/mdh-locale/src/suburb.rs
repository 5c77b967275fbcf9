//! Suburb records and the suburb table.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::LocaleError;

/// Australian state or territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum State {
    /// New South Wales.
    Nsw,
    /// Victoria.
    Vic,
    /// Queensland.
    Qld,
    /// Western Australia.
    Wa,
    /// South Australia.
    Sa,
    /// Tasmania.
    Tas,
    /// Northern Territory.
    Nt,
    /// Australian Capital Territory.
    Act,
}

impl State {
    /// All states and territories.
    pub const ALL: [Self; 8] = [
        Self::Nsw,
        Self::Vic,
        Self::Qld,
        Self::Wa,
        Self::Sa,
        Self::Tas,
        Self::Nt,
        Self::Act,
    ];

    /// Upper-case postal abbreviation ("NSW", "QLD", ...).
    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Nsw => "NSW",
            Self::Vic => "VIC",
            Self::Qld => "QLD",
            Self::Wa => "WA",
            Self::Sa => "SA",
            Self::Tas => "TAS",
            Self::Nt => "NT",
            Self::Act => "ACT",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for State {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|state| state.abbreviation().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| LocaleError::UnknownState(s.to_owned()))
    }
}

impl TryFrom<String> for State {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for State {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.abbreviation())
    }
}

/// State and region of one suburb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuburbInfo {
    /// State or territory.
    pub state: State,
    /// Free-text grouping label (e.g. "Greater Sydney").
    pub region: String,
}

/// Raw record as authored; state stays a string so one bad record is skipped
/// instead of rejecting the whole table.
#[derive(Deserialize)]
struct RawSuburb {
    state: String,
    region: String,
}

/// Suburb slug → info, in the order the table was authored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuburbTable {
    entries: IndexMap<String, SuburbInfo>,
}

impl SuburbTable {
    /// Parse the `australian-suburbs.json` document.
    ///
    /// Slugs are lower-cased. Records with an unknown state, and slugs that
    /// collide after lower-casing, are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if the document is not a JSON object of
    /// `{state, region}` records.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: IndexMap<String, RawSuburb> = serde_json::from_str(json)?;
        let mut entries = IndexMap::with_capacity(raw.len());

        for (slug, record) in raw {
            let state = match record.state.parse::<State>() {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!(suburb = %slug, error = %e, "Skipping suburb record");
                    continue;
                }
            };
            let key = slug.to_lowercase();
            if entries.contains_key(&key) {
                tracing::warn!(suburb = %slug, "Skipping duplicate suburb slug");
                continue;
            }
            entries.insert(
                key,
                SuburbInfo {
                    state,
                    region: record.region,
                },
            );
        }

        Ok(Self { entries })
    }

    /// Insert or replace a suburb, keeping its original position if present.
    pub fn insert(&mut self, slug: impl Into<String>, info: SuburbInfo) {
        self.entries.insert(slug.into().to_lowercase(), info);
    }

    /// Case-insensitive lookup.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&SuburbInfo> {
        self.entries.get(slug.to_lowercase().as_str())
    }

    /// Whether `slug` (case-insensitive) is a known suburb.
    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.get(slug).is_some()
    }

    /// Iterate suburbs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SuburbInfo)> {
        self.entries.iter().map(|(slug, info)| (slug.as_str(), info))
    }

    /// Number of suburbs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, SuburbInfo)> for SuburbTable {
    fn from_iter<I: IntoIterator<Item = (S, SuburbInfo)>>(iter: I) -> Self {
        let mut table = Self::default();
        for (slug, info) in iter {
            table.insert(slug, info);
        }
        table
    }
}
