/// Language code used when none is given.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Display name used for codes missing from [`LANGUAGES`].
pub const FALLBACK_LANGUAGE_NAME: &str = "English";

/// Supported language codes and their display names.
pub static LANGUAGES: &[(&str, &str)] = &[
    // Indian languages
    ("hi", "Hindi (हिंदी)"),
    ("bn", "Bengali (বাংলা)"),
    ("te", "Telugu (తెలుగు)"),
    ("mr", "Marathi (मराठी)"),
    ("ta", "Tamil (தமிழ்)"),
    ("ur", "Urdu (اردو)"),
    ("gu", "Gujarati (ગુજરાતી)"),
    ("kn", "Kannada (ಕನ್ನಡ)"),
    ("ml", "Malayalam (മലയാളം)"),
    ("pa", "Punjabi (ਪੰਜਾਬੀ)"),
    ("or", "Odia (ଓଡ଼ିଆ)"),
    ("as", "Assamese (অসমীয়া)"),
    ("mai", "Maithili (मैथिली)"),
    ("sa", "Sanskrit (संस्कृतम्)"),
    ("ks", "Kashmiri (कॉशुर)"),
    ("sd", "Sindhi (سنڌي)"),
    // International languages
    ("en", "English"),
    ("es", "Spanish (Español)"),
    ("fr", "French (Français)"),
    ("de", "German (Deutsch)"),
    ("it", "Italian (Italiano)"),
    ("pt", "Portuguese (Português)"),
    ("nl", "Dutch (Nederlands)"),
    ("pl", "Polish (Polski)"),
    ("ru", "Russian (Русский)"),
    ("ja", "Japanese (日本語)"),
    ("ko", "Korean (한국어)"),
    ("zh", "Chinese (中文)"),
    ("ar", "Arabic (العربية)"),
    ("th", "Thai (ไทย)"),
    ("vi", "Vietnamese (Tiếng Việt)"),
    ("id", "Indonesian (Bahasa Indonesia)"),
    ("tr", "Turkish (Türkçe)"),
    ("he", "Hebrew (עברית)"),
    ("fa", "Persian (فارسی)"),
    ("uk", "Ukrainian (Українська)"),
    ("ro", "Romanian (Română)"),
    ("sv", "Swedish (Svenska)"),
    ("no", "Norwegian (Norsk)"),
    ("da", "Danish (Dansk)"),
    ("fi", "Finnish (Suomi)"),
    ("cs", "Czech (Čeština)"),
    ("hu", "Hungarian (Magyar)"),
    ("el", "Greek (Ελληνικά)"),
];

/// Look up the display name for a language code.
pub fn lookup(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

/// Display name for a code, falling back to English for unknown codes.
pub fn language_name(code: &str) -> &'static str {
    lookup(code).unwrap_or(FALLBACK_LANGUAGE_NAME)
}

pub fn is_supported(code: &str) -> bool {
    lookup(code).is_some()
}
