use anyhow::{Context as _, Result, anyhow};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::catalog::TranslationCatalog;
use crate::file_utils::FileManager;
use crate::repository::CatalogRepository;
use crate::stats::CatalogStats;
use crate::translator::Translator;
use crate::validation::ValidationService;

// @module: Application controller for catalog operations

/// Main application controller for catalog queries, statistics,
/// validation and export
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        Ok(Self { config })
    }

    /// Look up one (context, source) pair in a catalog file.
    ///
    /// Returns the display string and whether the table actually had an
    /// entry. With no entry the display string is the source itself.
    pub fn query(
        &self,
        file: &Path,
        context: &str,
        source: &str,
        comment: Option<&str>,
    ) -> Result<(String, bool)> {
        let catalog = TranslationCatalog::parse_file(file)
            .with_context(|| format!("Failed to load catalog: {}", file.display()))?;

        let translator =
            Translator::with_policy(&catalog, self.config.empty_translation_fallback);

        let comment = comment.unwrap_or("");
        match translator.lookup_with_comment(context, source, comment) {
            Some(translation) => Ok((translation.to_string(), true)),
            None => Ok((source.to_string(), false)),
        }
    }

    /// Run the query command: print the display string, or under raw
    /// mode print only real entries. Returns whether the lookup hit.
    pub fn run_query(
        &self,
        file: &Path,
        context: &str,
        source: &str,
        comment: Option<&str>,
        raw: bool,
    ) -> Result<bool> {
        let (display, hit) = self.query(file, context, source, comment)?;

        if raw {
            if hit {
                println!("{}", display);
            }
        } else {
            println!("{}", display);
            if !hit {
                debug!(
                    "No entry for '{}' in context '{}', printed source fallback",
                    source, context
                );
            }
        }

        Ok(hit)
    }

    /// Run the stats command over a catalog file or a directory of them
    pub fn run_stats(&self, path: &Path, json: bool, per_context: bool) -> Result<()> {
        let all_stats: Vec<CatalogStats> = self
            .load_catalogs(path)?
            .iter()
            .map(CatalogStats::from_catalog)
            .collect();

        if json {
            println!("{}", serde_json::to_string_pretty(&all_stats)?);
            return Ok(());
        }

        for stats in &all_stats {
            print_stats_text(stats, per_context);
        }

        Ok(())
    }

    /// Run the validate command. Returns whether every catalog passed.
    pub fn run_validate(&self, path: &Path, strict: bool) -> Result<bool> {
        let catalogs = self.load_catalogs(path)?;
        let service = ValidationService::new(self.config.validation.clone());

        let progress = if catalogs.len() > 1 {
            Some(directory_progress_bar(catalogs.len()))
        } else {
            None
        };

        let mut all_passed = true;

        for catalog in &catalogs {
            let name = catalog
                .source_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<memory>".to_string());

            if let Some(pb) = &progress {
                pb.set_message(name.clone());
            }

            let report = service.validate(catalog);
            for finding in &report.findings {
                println!("{}: {}", name, finding);
            }

            let passed = report.passed(strict);
            if !passed {
                all_passed = false;
            }

            info!(
                "{}: {} findings ({} errors, {} warnings)",
                name,
                report.findings.len(),
                report.error_count(),
                report.warning_count()
            );

            if let Some(pb) = &progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = &progress {
            pb.finish_with_message("validation done");
        }

        Ok(all_passed)
    }

    /// Run the list command over a languages directory.
    ///
    /// Without a locale (and with no configured default) every served
    /// locale is listed. With one, prints the catalog that would be
    /// installed for it; returns whether any catalog serves it.
    pub fn run_list(&self, dir: &Path, locale: Option<&str>) -> Result<bool> {
        let repository = CatalogRepository::load_dir(dir)
            .with_context(|| format!("Failed to scan catalog directory: {}", dir.display()))?;

        let requested = locale.or(self.config.default_locale.as_deref());

        match requested {
            Some(requested) => match repository.select(requested) {
                Some(translator) => {
                    println!(
                        "{} ({} entries)",
                        translator.language().unwrap_or(requested),
                        translator.len()
                    );
                    Ok(true)
                }
                None => {
                    warn!("No catalog serves locale '{}'", requested);
                    Ok(false)
                }
            },
            None => {
                for served in repository.locales() {
                    if let Some(translator) = repository.get(served) {
                        println!("{}\t{} entries", served, translator.len());
                    }
                }
                Ok(true)
            }
        }
    }

    /// Run the fmt command: canonicalize a catalog to the lupdate layout.
    ///
    /// Hand-edited catalogs drift in whitespace and attribute details;
    /// a parse-and-rewrite settles them back into the canonical form
    /// without touching any payload.
    pub fn run_fmt(&self, file: &Path, output: Option<&Path>) -> Result<()> {
        let catalog = TranslationCatalog::parse_file(file)
            .with_context(|| format!("Failed to load catalog: {}", file.display()))?;

        let target = output.unwrap_or(file);
        catalog
            .write_to_file(target)
            .with_context(|| format!("Failed to write catalog: {}", target.display()))?;

        info!("Rewrote {} ({} messages)", target.display(), catalog.message_count());
        Ok(())
    }

    /// Run the export command: JSON rendition of one catalog, to a file
    /// or stdout
    pub fn run_export(&self, file: &Path, output: Option<&Path>, pretty: bool) -> Result<()> {
        let catalog = TranslationCatalog::parse_file(file)
            .with_context(|| format!("Failed to load catalog: {}", file.display()))?;

        let json = if pretty {
            serde_json::to_string_pretty(&catalog)?
        } else {
            serde_json::to_string(&catalog)?
        };

        match output {
            Some(path) => {
                FileManager::write_to_file(path, &json)?;
                info!("Exported {} to {}", file.display(), path.display());
            }
            None => println!("{}", json),
        }

        Ok(())
    }

    /// Load the catalog at a path, or every catalog under a directory
    fn load_catalogs(&self, path: &Path) -> Result<Vec<TranslationCatalog>> {
        let files: Vec<PathBuf> = if FileManager::dir_exists(path) {
            let found = FileManager::find_catalogs(path)?;
            if found.is_empty() {
                warn!("No .ts catalogs found under {}", path.display());
            }
            found
        } else if FileManager::file_exists(path) {
            vec![path.to_path_buf()]
        } else {
            return Err(anyhow!("No such file or directory: {}", path.display()));
        };

        files
            .iter()
            .map(|file| {
                TranslationCatalog::parse_file(file)
                    .with_context(|| format!("Failed to load catalog: {}", file.display()))
            })
            .collect()
    }
}

/// Progress bar for directory-wide operations
fn directory_progress_bar(total: usize) -> ProgressBar {
    let progress_bar = ProgressBar::new(total as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress_bar.set_style(style);
    progress_bar
}

/// Plain-text stats report for one catalog
fn print_stats_text(stats: &CatalogStats, per_context: bool) {
    let name = stats.file.as_deref().unwrap_or("<memory>");
    match &stats.language {
        Some(language) => println!("{} ({})", name, language),
        None => println!("{}", name),
    }

    println!(
        "  contexts: {}  messages: {}  finished: {} ({:.1}%)  unfinished: {}  vanished: {}  obsolete: {}",
        stats.contexts,
        stats.counts.messages,
        stats.counts.finished,
        stats.coverage() * 100.0,
        stats.counts.unfinished,
        stats.counts.vanished,
        stats.counts.obsolete,
    );

    if stats.counts.empty_finished > 0 {
        println!(
            "  finished with empty translation: {}",
            stats.counts.empty_finished
        );
    }

    if per_context {
        for context in &stats.per_context {
            println!(
                "    {}: {}/{} finished ({:.1}%)",
                context.name,
                context.counts.finished,
                context.counts.messages,
                context.counts.coverage() * 100.0,
            );
        }
    }
}
