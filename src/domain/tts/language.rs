use serde::{Deserialize, Serialize};

/// Languages the speech providers have voices for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageCode {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "ga")]
    Irish,
}

impl LanguageCode {
    /// Get the ISO 639-1 code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::English => "en",
            LanguageCode::Spanish => "es",
            LanguageCode::French => "fr",
            LanguageCode::German => "de",
            LanguageCode::Italian => "it",
            LanguageCode::Portuguese => "pt",
            LanguageCode::Irish => "ga",
        }
    }

    /// Parse an ISO 639-1 or 639-3 code, with or without a region suffix
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase();
        let base = code.split(['-', '_']).next().unwrap_or_default();
        match base {
            "en" | "eng" => Some(LanguageCode::English),
            "es" | "spa" => Some(LanguageCode::Spanish),
            "fr" | "fra" | "fre" => Some(LanguageCode::French),
            "de" | "deu" | "ger" => Some(LanguageCode::German),
            "it" | "ita" => Some(LanguageCode::Italian),
            "pt" | "por" => Some(LanguageCode::Portuguese),
            "ga" | "gle" => Some(LanguageCode::Irish),
            _ => None,
        }
    }

    /// Like [`LanguageCode::from_code`], falling back to English
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_else(|| {
            tracing::warn!(language = code, "Unsupported language, falling back to English");
            LanguageCode::English
        })
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Get the appropriate Polly voice ID for a language
pub fn get_voice_for_language(language: LanguageCode) -> &'static str {
    match language {
        LanguageCode::English => "Joanna",
        LanguageCode::Spanish => "Lupe",
        LanguageCode::French => "Lea",
        LanguageCode::German => "Vicki",
        LanguageCode::Italian => "Bianca",
        LanguageCode::Portuguese => "Ines",
        LanguageCode::Irish => "Niamh",
    }
}
