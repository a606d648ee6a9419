use anyhow::Result;
use i18n_embed::{
    fluent::{fluent_language_loader, FluentLanguageLoader},
    DesktopLanguageRequester,
};
use lazy_static::lazy_static;
use rust_embed::RustEmbed;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "i18n"]
struct Localizations;

lazy_static! {
    pub static ref I18N_LOADER: FluentLanguageLoader = load_i18n();
}

#[macro_export]
macro_rules! fl {
    ($message_id:literal) => {{
        i18n_embed_fl::fl!($crate::I18N_LOADER, $message_id)
    }};

    ($message_id:literal, $($args:expr),*) => {{
        i18n_embed_fl::fl!($crate::I18N_LOADER, $message_id, $($args), *)
    }};
}

fn new_loader() -> FluentLanguageLoader {
    let language_loader: FluentLanguageLoader = fluent_language_loader!();
    // messages go to terminals, which print bidi isolation marks literally
    language_loader.set_use_isolating(false);

    language_loader
}

fn load_i18n() -> FluentLanguageLoader {
    let language_loader = new_loader();
    let requested_languages = DesktopLanguageRequester::requested_languages();
    if let Err(e) = i18n_embed::select(&language_loader, &Localizations, &requested_languages) {
        log::warn!("unable to load translations: {}", e);
    }

    language_loader
}

/// Loads `lang` into `loader`. Returns `false` when only the fallback
/// language could be selected.
fn select_into(loader: &FluentLanguageLoader, lang: &LanguageIdentifier) -> Result<bool> {
    let selected = i18n_embed::select(loader, &Localizations, &[lang.clone()])?;

    Ok(selected.iter().any(|l| l.language == lang.language))
}

/// Switches the UI language, falling back to English for missing messages.
pub fn select_language(lang: &LanguageIdentifier) -> Result<()> {
    if !select_into(&I18N_LOADER, lang)? {
        log::warn!("no translation available for {}, using en-US", lang);
    }

    Ok(())
}

#[test]
fn test_fallback_messages() {
    select_language(&"en-US".parse().unwrap()).unwrap();
    assert_eq!(crate::fl!("near-the"), "near the");
    assert_eq!(crate::fl!("quake-count", count = 3), "3 earthquakes");
    assert_eq!(
        crate::fl!("error-prefix", error = "boom"),
        "Error: boom"
    );
}

#[test]
fn test_select_available_language() {
    let loader = new_loader();
    assert!(select_into(&loader, &"zh-CN".parse().unwrap()).unwrap());
    assert_eq!(loader.get("near-the"), "靠近");
}

#[test]
fn test_select_missing_language() {
    let loader = new_loader();
    assert!(!select_into(&loader, &"fr".parse().unwrap()).unwrap());
    assert_eq!(loader.get("near-the"), "near the");
}

#[test]
fn test_arguments_not_isolated() {
    let loader = new_loader();
    select_into(&loader, &"en-US".parse().unwrap()).unwrap();
    let mut args = std::collections::HashMap::new();
    args.insert("count", "12");
    assert_eq!(loader.get_args("quake-count", args), "12 earthquakes");
}
