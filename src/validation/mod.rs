/*!
 * Validation module for catalog quality assurance.
 *
 * This module provides validation for translation catalogs:
 * - Structure validation (duplicate keys, empty names and sources, locale tags)
 * - Accelerator validation (keyboard mnemonic preservation)
 * - Placeholder validation (%1-style argument markers)
 * - Markup validation (rich-text tag balance)
 *
 * # Architecture
 *
 * - `structure`: Validates catalog shape and key uniqueness
 * - `accelerators`: Validates keyboard mnemonics in labels
 * - `placeholders`: Validates argument marker preservation
 * - `markup`: Validates rich-text tag balance
 * - `service`: Orchestrates all validators
 *
 * Findings are data, not errors: a catalog that parses always yields a
 * report, and the caller decides what severity fails the run.
 */

pub mod accelerators;
pub mod markup;
pub mod placeholders;
pub mod service;
pub mod structure;

// Re-export main types
pub use service::{Finding, Severity, ValidationConfig, ValidationReport, ValidationService};
