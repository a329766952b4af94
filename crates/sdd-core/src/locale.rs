use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

/// Supported output locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    PtBr,
    Es,
}

impl Locale {
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::PtBr, Locale::Es]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::PtBr => "pt_br",
            Locale::Es => "es",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::PtBr => "Português (Brasil)",
            Locale::Es => "Español",
        }
    }

    fn language(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::PtBr => "pt",
            Locale::Es => "es",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a requested locale to a supported one.
///
/// Case- and separator-insensitive (`PT-BR` ≡ `pt_br`). An exact key match
/// wins, then a match on the primary language subtag (`es-MX` → `es`).
/// Anything else resolves to [`Locale::En`].
pub fn resolve_locale(requested: &str) -> Locale {
    let normalized = requested.trim().to_lowercase().replace('-', "_");

    if let Some(exact) = Locale::all().iter().find(|l| l.as_str() == normalized) {
        return *exact;
    }

    let language = normalized.split('_').next().unwrap_or_default();
    Locale::all()
        .iter()
        .find(|l| l.language() == language)
        .copied()
        .unwrap_or_default()
}

/// The compliance sentence that is always the first rule of every agent.
pub fn language_rule(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Always reply in English unless told otherwise.",
        Locale::PtBr => {
            "Responda sempre em Português (Brasil), a menos que solicitado o contrário."
        }
        Locale::Es => "Responda siempre en Español, a menos que se solicite lo contrario.",
    }
}
