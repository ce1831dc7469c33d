//! Copy-through handling for files that contain no messages

use crate::diagnostics::Diagnostics;
use crate::locale::Locale;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Token in an output path template replaced by the locale
pub const LOCALE_TOKEN: &str = "{locale}";
/// Token in an output path template replaced by the file's relative path
pub const PATH_TOKEN: &str = "{path}";

/// Compute where the copy of `relative_path` for `locale` is written
pub type OutputPathFn = dyn Fn(&Locale, &Path) -> PathBuf + Send + Sync;

/// Build an [`OutputPathFn`] from a template such as `dist/{locale}/{path}`
///
/// A template without `{path}` is treated as a directory the relative path is
/// joined onto.
pub fn output_path_fn(template: &str) -> Box<OutputPathFn> {
    let template = template.to_string();
    Box::new(move |locale: &Locale, relative_path: &Path| {
        let with_locale = template.replace(LOCALE_TOKEN, &locale.to_string());
        if with_locale.contains(PATH_TOKEN) {
            PathBuf::from(with_locale.replace(PATH_TOKEN, &relative_path.to_string_lossy()))
        } else {
            Path::new(&with_locale).join(relative_path)
        }
    })
}

/// Writes an unmodified copy of a file for every locale
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetTranslationHandler;

impl AssetTranslationHandler {
    /// Any file can be copied through
    pub fn can_translate(&self, _relative_path: &Path, _contents: &[u8]) -> bool {
        true
    }

    /// Write `contents` once per target locale, and once more for the source
    /// locale when given
    ///
    /// Failures are recorded in `diagnostics`; the remaining locales are still
    /// written.
    pub fn translate(
        &self,
        diagnostics: &mut Diagnostics,
        relative_path: &Path,
        contents: &[u8],
        output_path: &OutputPathFn,
        target_locales: &[Locale],
        source_locale: Option<&Locale>,
    ) {
        for locale in target_locales.iter().chain(source_locale) {
            self.write_asset(diagnostics, output_path, locale, relative_path, contents);
        }
    }

    fn write_asset(
        &self,
        diagnostics: &mut Diagnostics,
        output_path: &OutputPathFn,
        locale: &Locale,
        relative_path: &Path,
        contents: &[u8],
    ) {
        let path = output_path(locale, relative_path);
        let written = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|()| fs::write(&path, contents));

        match written {
            Ok(()) => debug!("Copied asset {:?} to {:?}", relative_path, path),
            Err(err) => diagnostics.error(format!(
                "Unable to write {} for locale {}: {}",
                path.display(),
                locale,
                err
            )),
        }
    }
}
