use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Voice models offered by the synthesis service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoiceModel {
    #[serde(rename = "aura-asteria-en")]
    Asteria,
    #[serde(rename = "aura-luna-en")]
    Luna,
    #[serde(rename = "aura-stella-en")]
    Stella,
    #[serde(rename = "aura-athena-en")]
    Athena,
    #[serde(rename = "aura-hera-en")]
    Hera,
    #[serde(rename = "aura-orion-en")]
    Orion,
    #[serde(rename = "aura-arcas-en")]
    Arcas,
    #[serde(rename = "aura-perseus-en")]
    Perseus,
    #[serde(rename = "aura-angus-en")]
    Angus,
    #[serde(rename = "aura-orpheus-en")]
    Orpheus,
    #[serde(rename = "aura-helios-en")]
    Helios,
    #[serde(rename = "aura-zeus-en")]
    Zeus,
}

impl VoiceModel {
    pub const ALL: [VoiceModel; 12] = [
        VoiceModel::Asteria,
        VoiceModel::Luna,
        VoiceModel::Stella,
        VoiceModel::Athena,
        VoiceModel::Hera,
        VoiceModel::Orion,
        VoiceModel::Arcas,
        VoiceModel::Perseus,
        VoiceModel::Angus,
        VoiceModel::Orpheus,
        VoiceModel::Helios,
        VoiceModel::Zeus,
    ];

    /// Model name as understood by the synthesis service
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceModel::Asteria => "aura-asteria-en",
            VoiceModel::Luna => "aura-luna-en",
            VoiceModel::Stella => "aura-stella-en",
            VoiceModel::Athena => "aura-athena-en",
            VoiceModel::Hera => "aura-hera-en",
            VoiceModel::Orion => "aura-orion-en",
            VoiceModel::Arcas => "aura-arcas-en",
            VoiceModel::Perseus => "aura-perseus-en",
            VoiceModel::Angus => "aura-angus-en",
            VoiceModel::Orpheus => "aura-orpheus-en",
            VoiceModel::Helios => "aura-helios-en",
            VoiceModel::Zeus => "aura-zeus-en",
        }
    }
}

impl Default for VoiceModel {
    fn default() -> Self {
        VoiceModel::Asteria
    }
}

impl std::fmt::Display for VoiceModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown voice model: {0}")]
pub struct UnknownVoiceModel(pub String);

impl FromStr for VoiceModel {
    type Err = UnknownVoiceModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        VoiceModel::ALL
            .iter()
            .copied()
            .find(|voice| voice.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownVoiceModel(s.to_string()))
    }
}
