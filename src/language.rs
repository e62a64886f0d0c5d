/// Display languages supported by the catalog service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    Arabic,
    German,
    #[default]
    English,
    Spanish,
    SpanishMexico,
    French,
    Indonesian,
    Italian,
    Japanese,
    Korean,
    Polish,
    Portuguese,
    Russian,
    Thai,
    Turkish,
    Vietnamese,
    ChineseSimplified,
    ChineseTraditional,
}

impl Language {
    /// Returns the locale code the catalog service expects (e.g. "en-US", "de-DE")
    pub fn code(&self) -> &'static str {
        match self {
            Language::Arabic => "ar-AE",
            Language::German => "de-DE",
            Language::English => "en-US",
            Language::Spanish => "es-ES",
            Language::SpanishMexico => "es-MX",
            Language::French => "fr-FR",
            Language::Indonesian => "id-ID",
            Language::Italian => "it-IT",
            Language::Japanese => "ja-JP",
            Language::Korean => "ko-KR",
            Language::Polish => "pl-PL",
            Language::Portuguese => "pt-BR",
            Language::Russian => "ru-RU",
            Language::Thai => "th-TH",
            Language::Turkish => "tr-TR",
            Language::Vietnamese => "vi-VN",
            Language::ChineseSimplified => "zh-CN",
            Language::ChineseTraditional => "zh-TW",
        }
    }

    /// Returns the English name of the language
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Arabic => "Arabic",
            Language::German => "German",
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::SpanishMexico => "Spanish (Mexico)",
            Language::French => "French",
            Language::Indonesian => "Indonesian",
            Language::Italian => "Italian",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Polish => "Polish",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
            Language::Thai => "Thai",
            Language::Turkish => "Turkish",
            Language::Vietnamese => "Vietnamese",
            Language::ChineseSimplified => "Chinese (Simplified)",
            Language::ChineseTraditional => "Chinese (Traditional)",
        }
    }

    /// Parse a full locale code (e.g. "de-DE"), case-insensitive
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    /// Parse a two-letter language code (e.g. "de") into its primary locale
    pub fn from_short_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "ar" => Some(Language::Arabic),
            "de" => Some(Language::German),
            "en" => Some(Language::English),
            "es" => Some(Language::Spanish),
            "fr" => Some(Language::French),
            "id" => Some(Language::Indonesian),
            "it" => Some(Language::Italian),
            "ja" => Some(Language::Japanese),
            "ko" => Some(Language::Korean),
            "pl" => Some(Language::Polish),
            "pt" => Some(Language::Portuguese),
            "ru" => Some(Language::Russian),
            "th" => Some(Language::Thai),
            "tr" => Some(Language::Turkish),
            "vi" => Some(Language::Vietnamese),
            "zh" => Some(Language::ChineseSimplified),
            _ => None,
        }
    }

    /// Parse an English language name (e.g. "German")
    pub fn from_full_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(name))
    }

    /// Parse a locale code, a short code or a full name
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::from_code(s)
            .or_else(|| Self::from_short_code(s))
            .or_else(|| Self::from_full_name(s))
    }

    /// Returns all supported languages
    pub fn all() -> &'static [Language] {
        &[
            Language::Arabic,
            Language::German,
            Language::English,
            Language::Spanish,
            Language::SpanishMexico,
            Language::French,
            Language::Indonesian,
            Language::Italian,
            Language::Japanese,
            Language::Korean,
            Language::Polish,
            Language::Portuguese,
            Language::Russian,
            Language::Thai,
            Language::Turkish,
            Language::Vietnamese,
            Language::ChineseSimplified,
            Language::ChineseTraditional,
        ]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
