//! Item Entity
//!
//! A lost or found object reported on the board, with reporter contact info.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque item identifier.
///
/// The hosted store hands out either integer keys or string keys (uuids);
/// the original representation is kept so it round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        ItemId::Number(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::Text(value.to_string())
    }
}

/// Whether the reporter lost the object or found it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Lost,
    Found,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Lost => "lost",
            ItemType::Found => "found",
        }
    }

    /// Capitalised form used in subjects and email templates
    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Lost => "Lost",
            ItemType::Found => "Found",
        }
    }
}

/// A reported item as stored by the storage backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(deserialize_with = "deserialize_reported_at")]
    pub date_reported: DateTime<Utc>,
    #[serde(default)]
    pub reporter_name: String,
    #[serde(default)]
    pub reporter_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter_phone: Option<String>,
}

impl Item {
    /// Create an item with empty descriptive fields
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>, item_type: ItemType, date_reported: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            location: String::new(),
            category: String::new(),
            item_type,
            image: None,
            date_reported,
            reporter_name: String::new(),
            reporter_email: String::new(),
            reporter_phone: None,
        }
    }

    /// Image to show, falling back to `placeholder` when the item has none
    pub fn image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.image.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => placeholder,
        }
    }

    /// Category with its first letter upper-cased ("electronics" -> "Electronics")
    pub fn category_label(&self) -> String {
        let mut chars = self.category.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn phone_label(&self) -> &str {
        match self.reporter_phone.as_deref() {
            Some(phone) if !phone.is_empty() => phone,
            _ => "Not provided",
        }
    }

    /// Apply every field present in `patch`
    pub fn apply(&mut self, patch: &ItemPatch) {
        if let Some(v) = &patch.title { self.title = v.clone(); }
        if let Some(v) = &patch.description { self.description = v.clone(); }
        if let Some(v) = &patch.location { self.location = v.clone(); }
        if let Some(v) = &patch.category { self.category = v.clone(); }
        if let Some(v) = &patch.reporter_name { self.reporter_name = v.clone(); }
        if let Some(v) = &patch.reporter_email { self.reporter_email = v.clone(); }
        if let Some(v) = &patch.reporter_phone { self.reporter_phone = Some(v.clone()); }
    }

    /// True when every field present in `patch` already holds the patched value
    pub fn reflects(&self, patch: &ItemPatch) -> bool {
        fn same(field: &str, wanted: &Option<String>) -> bool {
            wanted.as_deref().map_or(true, |w| w == field)
        }
        same(&self.title, &patch.title)
            && same(&self.description, &patch.description)
            && same(&self.location, &patch.location)
            && same(&self.category, &patch.category)
            && same(&self.reporter_name, &patch.reporter_name)
            && same(&self.reporter_email, &patch.reporter_email)
            && same(self.reporter_phone.as_deref().unwrap_or(""), &patch.reporter_phone)
    }
}

/// Offset-less layouts some stores use for `timestamp without time zone`
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a report timestamp. Values without an offset are taken as UTC.
pub fn parse_reported_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    // Postgres text form, e.g. "2026-10-01 09:30:00+00"
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
}

fn deserialize_reported_at<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_reported_at(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognised dateReported {:?}", raw)))
}

/// Partial update sent to the storage backend; absent fields are untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter_phone: Option<String>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        *self == ItemPatch::default()
    }
}
