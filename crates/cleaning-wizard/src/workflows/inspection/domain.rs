use serde::{Deserialize, Serialize};

use super::items::ItemReportList;

/// Answer to the property-damage and conduct questions on the checklist.
///
/// There is no unanswered state: the form starts on "no issue".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    #[default]
    #[serde(rename = "none")]
    NoIssue,
    Resolved,
    Claimed,
}

impl ClaimStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoIssue => "No issue found",
            Self::Resolved => "Issue found, settled with the company",
            Self::Claimed => "Issue found, compensation requested",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Damage,
    Lost,
    #[default]
    Unset,
}

impl ItemKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Damage => "Damaged",
            Self::Lost => "Lost",
            Self::Unset => "Unspecified",
        }
    }
}

/// Whether the customer kept the before/after photos taken during the visit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhotoPreference {
    Saved,
    NoNeed,
    #[default]
    Unset,
}

impl PhotoPreference {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Saved => "Photos saved by customer",
            Self::NoNeed => "Photos not needed",
            Self::Unset => "Unanswered",
        }
    }

    pub const fn is_answered(self) -> bool {
        !matches!(self, Self::Unset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

/// One damaged or lost belonging reported under a `Claimed` property status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReport {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: ItemKind,
    #[serde(default)]
    pub remarks: String,
}

impl ItemReport {
    pub fn empty(id: ItemId) -> Self {
        Self {
            id,
            name: String::new(),
            kind: ItemKind::Unset,
            remarks: String::new(),
        }
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// PNG signature captured from the signing pad, kept as a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SignatureImage {
    data_url: String,
}

impl SignatureImage {
    /// Accepts `data:image/<subtype>[;base64],<payload>`. A blank pad or an
    /// image with no payload is refused so the customer is prompted to sign.
    pub fn from_data_url(raw: &str) -> Result<Self, SignatureError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SignatureError::Empty);
        }

        let rest = trimmed
            .strip_prefix("data:image/")
            .ok_or(SignatureError::NotAnImage)?;
        let (_, payload) = rest.split_once(',').ok_or(SignatureError::NotAnImage)?;
        if payload.trim().is_empty() {
            return Err(SignatureError::Empty);
        }

        Ok(Self {
            data_url: trimmed.to_string(),
        })
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    pub fn media_type(&self) -> &str {
        let header = self
            .data_url
            .strip_prefix("data:")
            .and_then(|rest| rest.split(',').next())
            .unwrap_or_default();
        header.split(';').next().unwrap_or_default()
    }
}

impl TryFrom<String> for SignatureImage {
    type Error = SignatureError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_data_url(&value)
    }
}

impl From<SignatureImage> for String {
    fn from(value: SignatureImage) -> Self {
        value.data_url
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    #[error("請先進行簽名 (please sign before saving)")]
    Empty,
    #[error("signature must be an image data URL")]
    NotAnImage,
}

/// Customer-facing acceptance checklist filled in at the end of a visit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectionRecord {
    pub customer_name: String,
    /// Item 1: the visit was completed as expected.
    pub acknowledged_service_complete: bool,
    /// Item 2.
    pub property_status: ClaimStatus,
    pub item_reports: ItemReportList,
    /// Item 3.
    pub conduct_status: ClaimStatus,
    pub conduct_detail: String,
    /// Item 4.
    pub photo_preference: PhotoPreference,
    /// Item 5.
    pub privacy_acknowledged: bool,
    /// Item 6, optional.
    pub marketing_consent: bool,
    pub signature: Option<SignatureImage>,
}

impl InspectionRecord {
    pub fn for_customer(name: impl Into<String>) -> Self {
        Self {
            customer_name: name.into(),
            ..Self::default()
        }
    }
}
