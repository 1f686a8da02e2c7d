//! Display names for language tags, in English and in the language itself.
//!
//! Lookup is by full tag first (`pt-BR`), then by primary language (`pt`).
//! The table holds the widely deployed languages and a few regional
//! variants, not the whole CLDR set: a tag outside it gets its own code as
//! both names (see `locale_from_code`). Add a row when configuring such a
//! locale.

use unic_langid::LanguageIdentifier;

/// `(tag, english name, self name)`
const NAMES: &[(&str, &str, &str)] = &[
    ("af", "Afrikaans", "Afrikaans"),
    ("am", "Amharic", "አማርኛ"),
    ("ar", "Arabic", "العربية"),
    ("az", "Azerbaijani", "azərbaycan"),
    ("be", "Belarusian", "беларуская"),
    ("bg", "Bulgarian", "български"),
    ("bn", "Bangla", "বাংলা"),
    ("bs", "Bosnian", "bosanski"),
    ("ca", "Catalan", "català"),
    ("cs", "Czech", "čeština"),
    ("cy", "Welsh", "Cymraeg"),
    ("da", "Danish", "dansk"),
    ("de", "German", "Deutsch"),
    ("de-AT", "Austrian German", "Österreichisches Deutsch"),
    ("de-CH", "Swiss High German", "Schweizer Hochdeutsch"),
    ("el", "Greek", "Ελληνικά"),
    ("en", "English", "English"),
    ("en-AU", "Australian English", "Australian English"),
    ("en-CA", "Canadian English", "Canadian English"),
    ("en-GB", "British English", "British English"),
    ("en-US", "American English", "American English"),
    ("es", "Spanish", "español"),
    ("es-419", "Latin American Spanish", "español latinoamericano"),
    ("es-ES", "European Spanish", "español de España"),
    ("es-MX", "Mexican Spanish", "español de México"),
    ("et", "Estonian", "eesti"),
    ("eu", "Basque", "euskara"),
    ("fa", "Persian", "فارسی"),
    ("fi", "Finnish", "suomi"),
    ("fil", "Filipino", "Filipino"),
    ("fr", "French", "français"),
    ("fr-CA", "Canadian French", "français canadien"),
    ("fr-CH", "Swiss French", "français suisse"),
    ("ga", "Irish", "Gaeilge"),
    ("gl", "Galician", "galego"),
    ("gu", "Gujarati", "ગુજરાતી"),
    ("he", "Hebrew", "עברית"),
    ("hi", "Hindi", "हिन्दी"),
    ("hr", "Croatian", "hrvatski"),
    ("hu", "Hungarian", "magyar"),
    ("hy", "Armenian", "հայերեն"),
    ("id", "Indonesian", "Indonesia"),
    ("is", "Icelandic", "íslenska"),
    ("it", "Italian", "italiano"),
    ("ja", "Japanese", "日本語"),
    ("ka", "Georgian", "ქართული"),
    ("kk", "Kazakh", "қазақ тілі"),
    ("km", "Khmer", "ខ្មែរ"),
    ("kn", "Kannada", "ಕನ್ನಡ"),
    ("ko", "Korean", "한국어"),
    ("ky", "Kyrgyz", "кыргызча"),
    ("lo", "Lao", "ລາວ"),
    ("lt", "Lithuanian", "lietuvių"),
    ("lv", "Latvian", "latviešu"),
    ("mk", "Macedonian", "македонски"),
    ("ml", "Malayalam", "മലയാളം"),
    ("mn", "Mongolian", "монгол"),
    ("mr", "Marathi", "मराठी"),
    ("ms", "Malay", "Melayu"),
    ("my", "Burmese", "မြန်မာ"),
    ("nb", "Norwegian Bokmål", "norsk bokmål"),
    ("ne", "Nepali", "नेपाली"),
    ("nl", "Dutch", "Nederlands"),
    ("no", "Norwegian Bokmål", "norsk bokmål"),
    ("pa", "Punjabi", "ਪੰਜਾਬੀ"),
    ("pl", "Polish", "polski"),
    ("pt", "Portuguese", "português"),
    ("pt-BR", "Brazilian Portuguese", "português"),
    ("pt-PT", "European Portuguese", "português europeu"),
    ("ro", "Romanian", "română"),
    ("ru", "Russian", "русский"),
    ("si", "Sinhala", "සිංහල"),
    ("sk", "Slovak", "slovenčina"),
    ("sl", "Slovenian", "slovenščina"),
    ("sq", "Albanian", "shqip"),
    ("sr", "Serbian", "српски"),
    ("sv", "Swedish", "svenska"),
    ("sw", "Swahili", "Kiswahili"),
    ("ta", "Tamil", "தமிழ்"),
    ("te", "Telugu", "తెలుగు"),
    ("th", "Thai", "ไทย"),
    ("tr", "Turkish", "Türkçe"),
    ("uk", "Ukrainian", "українська"),
    ("ur", "Urdu", "اردو"),
    ("uz", "Uzbek", "o‘zbek"),
    ("vi", "Vietnamese", "Tiếng Việt"),
    ("zh", "Chinese", "中文"),
    ("zh-Hans", "Simplified Chinese", "简体中文"),
    ("zh-Hant", "Traditional Chinese", "繁體中文"),
    ("zu", "Zulu", "isiZulu"),
];

fn lookup(tag: &str) -> Option<(&'static str, &'static str)> {
    NAMES
        .iter()
        .find(|(t, _, _)| t.eq_ignore_ascii_case(tag))
        .map(|(_, en, local)| (*en, *local))
}

/// English and self names for `langid`, if known.
pub fn names_for(langid: &LanguageIdentifier) -> Option<(&'static str, &'static str)> {
    lookup(&langid.to_string()).or_else(|| lookup(langid.language.as_str()))
}
