/*!
 * Catalog repository: a directory of per-language TS catalogs.
 *
 * Applications ship one catalog per language next to each other
 * (`app_de.ts`, `app_zh-cn.ts`, ...) and install the one matching the
 * user's locale at startup. The repository scans such a directory once,
 * builds a translator per catalog and answers locale selection queries.
 */

use std::path::{Path, PathBuf};
use log::{debug, warn};

use crate::catalog::TranslationCatalog;
use crate::errors::RepositoryError;
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::translator::Translator;

/// One loaded catalog with its derived locale
#[derive(Debug, Clone)]
struct RepositoryEntry {
    /// Locale tag the catalog serves
    locale: String,

    /// File the catalog came from
    path: PathBuf,

    /// Lookup table built from the catalog
    translator: Translator,
}

/// All catalogs found in a languages directory, selectable by locale
#[derive(Debug, Clone, Default)]
pub struct CatalogRepository {
    entries: Vec<RepositoryEntry>,
}

impl CatalogRepository {
    /// Scan a directory for `.ts` catalogs and load them all.
    ///
    /// The locale of each catalog comes from its TS header `language`
    /// attribute, falling back to the file-name suffix (`app_zh-cn.ts`
    /// yields `zh-cn`). Catalogs with no derivable locale are skipped
    /// with a warning; a catalog that fails to parse fails the scan.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self, RepositoryError> {
        let dir = dir.as_ref();
        let files = FileManager::find_catalogs(dir)
            .map_err(|e| RepositoryError::Scan(e.to_string()))?;

        let mut entries = Vec::new();

        for path in files {
            let catalog =
                TranslationCatalog::parse_file(&path).map_err(|source| RepositoryError::Load {
                    path: path.display().to_string(),
                    source,
                })?;

            let locale = match derive_locale(&catalog, &path) {
                Some(locale) => locale,
                None => {
                    warn!(
                        "Skipping catalog with no derivable locale: {}",
                        path.display()
                    );
                    continue;
                }
            };

            debug!("Loaded catalog '{}' for locale {}", path.display(), locale);

            entries.push(RepositoryEntry {
                locale,
                path,
                translator: Translator::from_catalog(&catalog),
            });
        }

        Ok(Self { entries })
    }

    /// Select the best catalog for a locale: an exact locale match wins,
    /// then the first catalog sharing the language subtag ("zh" matches
    /// "zh_CN"). Returns `None` when nothing matches.
    pub fn select(&self, locale: &str) -> Option<&Translator> {
        if let Some(entry) = self
            .entries
            .iter()
            .find(|e| language_utils::locales_match(&e.locale, locale))
        {
            return Some(&entry.translator);
        }

        self.entries
            .iter()
            .find(|e| language_utils::languages_match(&e.locale, locale))
            .map(|e| &e.translator)
    }

    /// Translator for an exact locale tag
    pub fn get(&self, locale: &str) -> Option<&Translator> {
        self.entries
            .iter()
            .find(|e| language_utils::locales_match(&e.locale, locale))
            .map(|e| &e.translator)
    }

    /// Locales available in the repository, in file order
    pub fn locales(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.locale.as_str()).collect()
    }

    /// Path of the catalog serving a locale
    pub fn catalog_path(&self, locale: &str) -> Option<&Path> {
        self.entries
            .iter()
            .find(|e| language_utils::locales_match(&e.locale, locale))
            .map(|e| e.path.as_path())
    }

    /// Number of loaded catalogs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the repository holds no catalogs
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Locale of a catalog: TS header first, file-name suffix second
fn derive_locale(catalog: &TranslationCatalog, path: &Path) -> Option<String> {
    if let Some(language) = &catalog.language {
        if !language.is_empty() {
            return Some(language.clone());
        }
    }

    path.file_stem()
        .and_then(|stem| language_utils::locale_from_stem(&stem.to_string_lossy()))
}
