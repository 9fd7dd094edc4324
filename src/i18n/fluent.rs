// SPDX-License-Identifier: MPL-2.0
use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("current_locale", &self.current_locale)
            .field("available_locales", &self.available_locales)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Builds bundles from the embedded `.ftl` files, then from `extra_dir`
    /// if given. A file in `extra_dir` replaces the embedded one for the
    /// same locale.
    pub fn new(cli_lang: Option<String>, extra_dir: Option<String>, config: &Config) -> Self {
        let mut sources: HashMap<LanguageIdentifier, String> = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = locale_from_filename(filename) else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                sources.insert(locale, String::from_utf8_lossy(content.data.as_ref()).into_owned());
            }
        }

        if let Some(dir) = extra_dir {
            load_directory(Path::new(&dir), &mut sources);
        }

        let mut bundles = HashMap::new();
        for (locale, source) in sources {
            bundles.insert(locale.clone(), build_bundle(locale, source));
        }

        let mut available_locales: Vec<LanguageIdentifier> = bundles.keys().cloned().collect();
        available_locales.sort_by_key(ToString::to_string);

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap_or_default();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn locale_from_filename(filename: &str) -> Option<LanguageIdentifier> {
    filename.strip_suffix(".ftl")?.parse().ok()
}

fn load_directory(dir: &Path, sources: &mut HashMap<LanguageIdentifier, String>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("cannot read translations from {}: {}", dir.display(), err);
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(locale) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(locale_from_filename)
        else {
            continue;
        };
        match fs::read_to_string(&path) {
            Ok(content) => {
                sources.insert(locale, content);
            }
            Err(err) => log::warn!("skipping {}: {}", path.display(), err),
        }
    }
}

fn build_bundle(locale: LanguageIdentifier, source: String) -> FluentBundle<FluentResource> {
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((partial, errors)) => {
            log::warn!("{} has {} FTL syntax errors", locale, errors.len());
            partial
        }
    };

    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Titles are inserted into plain text widgets, not bidi-aware markup.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        log::warn!("{} has {} duplicate FTL entries", locale, errors.len());
    }
    bundle
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.general.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. Check OS locale, then its bare language
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
            if let Some(lang) = available
                .iter()
                .find(|candidate| candidate.language == os_lang.language)
            {
                return Some(lang.clone());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn locales(list: &[&str]) -> Vec<LanguageIdentifier> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn resolve_locale_prefers_cli() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let available = locales(&["en-US", "ko"]);
        let lang = resolve_locale(Some("ko".to_string()), &config, &available);
        assert_eq!(lang, Some("ko".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_uses_config() {
        let mut config = Config::default();
        config.general.language = Some("ko".to_string());
        let available = locales(&["en-US", "ko"]);
        let lang = resolve_locale(None, &config, &available);
        assert_eq!(lang, Some("ko".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_ignores_unavailable_cli_value() {
        let mut config = Config::default();
        config.general.language = Some("ko".to_string());
        let available = locales(&["en-US", "ko"]);
        let lang = resolve_locale(Some("xx".to_string()), &config, &available);
        assert_eq!(lang, Some("ko".parse().unwrap()));
    }

    #[test]
    fn embedded_locales_are_available() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        let available: Vec<String> = i18n.available_locales().iter().map(|l| l.to_string()).collect();
        assert!(available.contains(&"en-US".to_string()));
        assert!(available.contains(&"ko".to_string()));
    }

    #[test]
    fn empty_state_message_is_localized() {
        let en = I18n::new(Some("en-US".into()), None, &Config::default());
        let ko = I18n::new(Some("ko".into()), None, &Config::default());
        assert_eq!(en.tr("gallery-empty"), "No images found.");
        assert_eq!(ko.tr("gallery-empty"), "이미지를 찾을 수 없습니다.");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn extra_directory_overrides_embedded_strings() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("en-US.ftl"), "gallery-empty = Nothing here\n")
            .expect("write failed");

        let i18n = I18n::new(
            Some("en-US".into()),
            Some(dir.path().to_string_lossy().into_owned()),
            &Config::default(),
        );
        assert_eq!(i18n.tr("gallery-empty"), "Nothing here");
    }

    #[test]
    fn arguments_are_interpolated() {
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        let text = i18n.tr_with_args("viewer-counter", &[("current", "2"), ("total", "5")]);
        assert_eq!(text, "2 / 5");
    }
}
