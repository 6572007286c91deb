//! Locale resolution and display-string dictionaries.
//!
//! # Responsibility
//! - Pick one supported locale from an environment locale tag.
//! - Hand out the fixed-shape dictionary for that locale.
//!
//! # Invariants
//! - Every locale dictionary has the same key set.
//! - The session locale is resolved once and cached for the process.

mod strings;

pub use strings::{QuadrantLabels, QuadrantText, Translations};

use crate::model::quadrant::{Quadrant, QuadrantDescriptor};
use log::info;
use once_cell::sync::OnceCell;
use std::fmt::{Display, Formatter};

/// Environment variables consulted for the locale, in priority order.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

static SESSION_LOCALE: OnceCell<Locale> = OnceCell::new();

/// Supported UI languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Ru,
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Ru, Locale::Zh];

    /// Resolves a locale tag such as `ru_RU.UTF-8` or `zh-Hans` by prefix.
    ///
    /// Anything that is not Russian or Chinese resolves to English.
    pub fn from_tag(tag: &str) -> Self {
        let normalized = tag.trim().to_ascii_lowercase();
        if normalized.starts_with("ru") {
            Self::Ru
        } else if normalized.starts_with("zh") {
            Self::Zh
        } else {
            Self::En
        }
    }

    /// Resolves the locale from `LC_ALL`, `LC_MESSAGES` then `LANG`.
    pub fn from_env() -> Self {
        Self::from_tag(&env_locale_tag().unwrap_or_default())
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
            Self::Zh => "zh",
        }
    }

    /// Dictionary for this locale.
    pub fn translations(self) -> &'static Translations {
        match self {
            Self::En => &strings::EN,
            Self::Ru => &strings::RU,
            Self::Zh => &strings::ZH,
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Returns the session locale, resolving it on first use.
///
/// `preferred` is only consulted on that first call; later calls return
/// the cached value even if the environment has changed.
pub fn session_locale(preferred: Option<&str>) -> Locale {
    *SESSION_LOCALE.get_or_init(|| {
        let locale = match preferred.map(str::trim).filter(|tag| !tag.is_empty()) {
            Some(tag) => Locale::from_tag(tag),
            None => Locale::from_env(),
        };
        info!("event=locale_resolved module=i18n status=ok locale={locale}");
        locale
    })
}

/// Localized descriptors for all four quadrants in display order.
pub fn quadrant_descriptors(translations: &Translations) -> [QuadrantDescriptor; 4] {
    Quadrant::ALL.map(|quadrant| {
        let text = translations.quadrants.get(quadrant);
        QuadrantDescriptor::new(quadrant, text.title, text.subtitle)
    })
}

fn env_locale_tag() -> Option<String> {
    LOCALE_ENV_VARS.iter().find_map(|name| {
        std::env::var(name)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}
