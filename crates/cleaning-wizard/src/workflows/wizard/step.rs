use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Inspection,
    ProviderFees,
    Payment,
}

impl WizardStep {
    pub const fn ordered() -> [Self; 3] {
        [Self::Inspection, Self::ProviderFees, Self::Payment]
    }

    /// Position shown in the progress indicator, starting at 1.
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Inspection => 1,
            Self::ProviderFees => 2,
            Self::Payment => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Inspection => "Customer inspection",
            Self::ProviderFees => "Provider fees",
            Self::Payment => "Payment",
        }
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Inspection => Some(Self::ProviderFees),
            Self::ProviderFees => Some(Self::Payment),
            Self::Payment => None,
        }
    }

    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Inspection => None,
            Self::ProviderFees => Some(Self::Inspection),
            Self::Payment => Some(Self::ProviderFees),
        }
    }
}
