/*!
 * Validation service that orchestrates all validators.
 *
 * This module provides a unified interface for running all validation
 * checks on a parsed catalog and collecting their findings into one
 * report.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::TranslationCatalog;

use super::accelerators::AcceleratorValidator;
use super::markup::MarkupValidator;
use super::placeholders::{PlaceholderIssue, PlaceholderValidator};
use super::structure::{StructureIssue, StructureValidator};

/// Configuration for the validation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Whether validation is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to validate catalog structure and key uniqueness
    #[serde(default = "default_true")]
    pub structure_validation: bool,

    /// Whether to validate accelerator mnemonics
    #[serde(default = "default_true")]
    pub accelerator_validation: bool,

    /// Whether to validate placeholder markers
    #[serde(default = "default_true")]
    pub placeholder_validation: bool,

    /// Whether to validate rich-text markup balance
    #[serde(default = "default_true")]
    pub markup_validation: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            structure_validation: true,
            accelerator_validation: true,
            placeholder_validation: true,
            markup_validation: true,
        }
    }
}

/// How serious a finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Suspicious but displayable
    Warning,
    /// Broken at display time or structurally wrong
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One validation finding
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// How serious the finding is
    pub severity: Severity,

    /// Context of the offending message, when the finding has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// Source string of the offending message, when the finding has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Human-readable description
    pub detail: String,
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: ", self.severity)?;
        if let Some(context) = &self.context {
            write!(f, "[{}] ", context)?;
        }
        if let Some(source) = &self.source {
            write!(f, "'{}': ", source)?;
        }
        write!(f, "{}", self.detail)
    }
}

/// Aggregated result of validating one catalog
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// All findings, in validator order
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    /// Number of error-severity findings
    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count()
    }

    /// Number of warning-severity findings
    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }

    /// Whether the catalog passes: no errors, and under strict mode no
    /// warnings either
    pub fn passed(&self, strict: bool) -> bool {
        if strict {
            self.findings.is_empty()
        } else {
            self.error_count() == 0
        }
    }
}

/// Orchestrates all validators over one catalog
pub struct ValidationService {
    config: ValidationConfig,
}

impl ValidationService {
    /// Create a service with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a service with the default configuration
    pub fn with_defaults() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Run all enabled validators and collect their findings
    pub fn validate(&self, catalog: &TranslationCatalog) -> ValidationReport {
        let mut report = ValidationReport::default();

        if !self.config.enabled {
            debug!("Validation disabled, returning empty report");
            return report;
        }

        if self.config.structure_validation {
            for issue in StructureValidator::validate(catalog) {
                report.findings.push(structure_finding(issue));
            }
        }

        if self.config.accelerator_validation {
            for finding in AcceleratorValidator::validate(catalog) {
                report.findings.push(Finding {
                    severity: Severity::Warning,
                    context: Some(finding.context),
                    source: Some(finding.source),
                    detail: finding.issue.to_string(),
                });
            }
        }

        if self.config.placeholder_validation {
            for finding in PlaceholderValidator::validate(catalog) {
                let severity = match finding.issue {
                    PlaceholderIssue::MissingPlaceholder { .. } => Severity::Error,
                    PlaceholderIssue::CountMismatch { .. } => Severity::Warning,
                };
                report.findings.push(Finding {
                    severity,
                    context: Some(finding.context),
                    source: Some(finding.source),
                    detail: finding.issue.to_string(),
                });
            }
        }

        if self.config.markup_validation {
            for finding in MarkupValidator::validate(catalog) {
                report.findings.push(Finding {
                    severity: Severity::Warning,
                    context: Some(finding.context),
                    source: Some(finding.source),
                    detail: finding.issue.to_string(),
                });
            }
        }

        debug!(
            "Validation produced {} findings ({} errors)",
            report.findings.len(),
            report.error_count()
        );

        report
    }
}

/// Map a structure issue to a finding with the right severity
fn structure_finding(issue: StructureIssue) -> Finding {
    let severity = match &issue {
        StructureIssue::DuplicateMessage { .. }
        | StructureIssue::EmptySource { .. }
        | StructureIssue::EmptyContextName => Severity::Error,
        StructureIssue::EmptyContext { .. } | StructureIssue::InvalidLocale { .. } => {
            Severity::Warning
        }
    };

    let (context, source) = match &issue {
        StructureIssue::DuplicateMessage {
            context, source, ..
        } => (Some(context.clone()), Some(source.clone())),
        StructureIssue::EmptySource { context } => (Some(context.clone()), None),
        StructureIssue::EmptyContext { context } => (Some(context.clone()), None),
        StructureIssue::EmptyContextName | StructureIssue::InvalidLocale { .. } => (None, None),
    };

    Finding {
        severity,
        context,
        source,
        detail: issue.to_string(),
    }
}
