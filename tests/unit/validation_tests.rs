/*!
 * Tests for catalog validation
 */

use tscat::catalog::{Context, Message, TranslationCatalog, TranslationStatus};
use tscat::validation::accelerators::{mnemonics, AcceleratorValidator};
use tscat::validation::markup::MarkupValidator;
use tscat::validation::placeholders::PlaceholderValidator;
use tscat::validation::structure::{StructureIssue, StructureValidator};
use tscat::validation::{Severity, ValidationConfig, ValidationService};

/// Build a catalog around a handful of messages in one context
fn catalog_with_messages(messages: Vec<Message>) -> TranslationCatalog {
    let mut catalog = TranslationCatalog::new(Some("zh_CN".to_string()));
    let mut context = Context::new("MainWindow");
    context.messages = messages;
    catalog.contexts.push(context);
    catalog
}

/// Test mnemonic extraction handles escapes and edge shapes
#[test]
fn test_mnemonics_withVariousLabels_shouldExtractCorrectly() {
    assert_eq!(mnemonics("E&xit"), vec!['x']);
    assert_eq!(mnemonics("(&X)退出"), vec!['X']);
    assert_eq!(mnemonics("Copy &address"), vec!['a']);
    assert_eq!(mnemonics("Fish && Chips"), Vec::<char>::new());
    assert_eq!(mnemonics("trailing&"), Vec::<char>::new());
    assert_eq!(mnemonics("no marker"), Vec::<char>::new());
    assert_eq!(mnemonics("&First && &Second"), vec!['F', 'S']);
}

/// Test a dropped mnemonic is reported
#[test]
fn test_accelerators_withDroppedMnemonic_shouldReport() {
    let catalog = catalog_with_messages(vec![
        Message::new("E&xit", "退出"),
        Message::new("&Run", "(&R)运行"),
    ]);

    let findings = AcceleratorValidator::validate(&catalog);

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].source, "E&xit");
}

/// Test unfinished entries are not held to the mnemonic rule
#[test]
fn test_accelerators_withUnfinishedEntry_shouldNotReport() {
    let catalog = catalog_with_messages(vec![Message::with_status(
        "E&xit",
        "",
        TranslationStatus::Unfinished,
    )]);

    assert!(AcceleratorValidator::validate(&catalog).is_empty());
}

/// Test a dropped placeholder is reported
#[test]
fn test_placeholders_withDroppedMarker_shouldReport() {
    let catalog = catalog_with_messages(vec![
        Message::new("Button %1", "按钮"),
        Message::new("Axes %1 Neg", "Axes %1 Neg"),
    ]);

    let findings = PlaceholderValidator::validate(&catalog);

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].source, "Button %1");
}

/// Test a repeated marker with diverging counts is reported
#[test]
fn test_placeholders_withCountMismatch_shouldReport() {
    let catalog = catalog_with_messages(vec![Message::new("%1 of %1", "%1 / 全部")]);

    let findings = PlaceholderValidator::validate(&catalog);

    assert_eq!(findings.len(), 1);
}

/// Test unbalanced and dropped style tags are reported
#[test]
fn test_markup_withUnbalancedTags_shouldReport() {
    let unbalanced = catalog_with_messages(vec![Message::new(
        "<b>No gamepad</b>",
        "<b>未发现手柄",
    )]);
    let findings = MarkupValidator::validate(&unbalanced);
    assert_eq!(findings.len(), 1);

    let dropped = catalog_with_messages(vec![Message::new("<b>No gamepad</b>", "未发现手柄")]);
    let findings = MarkupValidator::validate(&dropped);
    assert_eq!(findings.len(), 1);

    let preserved = catalog_with_messages(vec![Message::new(
        "<b>No gamepad</b>",
        "<b>未发现手柄</b>",
    )]);
    assert!(MarkupValidator::validate(&preserved).is_empty());
}

/// Test duplicate keys within a context are reported
#[test]
fn test_structure_withDuplicateKey_shouldReport() {
    let catalog = catalog_with_messages(vec![
        Message::new("Select", "选中"),
        Message::new("Select", "选择"),
    ]);

    let issues = StructureValidator::validate(&catalog);

    assert!(issues
        .iter()
        .any(|i| matches!(i, StructureIssue::DuplicateMessage { .. })));
}

/// Test the same source with different comments is not a duplicate
#[test]
fn test_structure_withDistinctComments_shouldNotReport() {
    let mut first = Message::new("Select", "选中");
    first.comment = Some("button label".to_string());
    let second = Message::new("Select", "选择");

    let catalog = catalog_with_messages(vec![first, second]);
    let issues = StructureValidator::validate(&catalog);

    assert!(issues.is_empty());
}

/// Test an unrecognized locale tag is reported
#[test]
fn test_structure_withBogusLocale_shouldReport() {
    // The real-world case: a shipped catalog declaring "cn_ZH"
    let mut catalog = TranslationCatalog::new(Some("cn_ZH".to_string()));
    let mut context = Context::new("MainWindow");
    context.messages.push(Message::new("Select", "选中"));
    catalog.contexts.push(context);

    let issues = StructureValidator::validate(&catalog);

    assert!(issues
        .iter()
        .any(|i| matches!(i, StructureIssue::InvalidLocale { .. })));
}

/// Test empty contexts and empty sources are reported
#[test]
fn test_structure_withEmptyShapes_shouldReport() {
    let mut catalog = TranslationCatalog::new(Some("de".to_string()));
    catalog.contexts.push(Context::new("Empty"));
    let mut context = Context::new("MainWindow");
    context.messages.push(Message::new("", "x"));
    catalog.contexts.push(context);

    let issues = StructureValidator::validate(&catalog);

    assert!(issues
        .iter()
        .any(|i| matches!(i, StructureIssue::EmptyContext { .. })));
    assert!(issues
        .iter()
        .any(|i| matches!(i, StructureIssue::EmptySource { .. })));
}

/// Test the service aggregates findings with severities
#[test]
fn test_service_withMixedDefects_shouldAggregateBySeverity() {
    let catalog = catalog_with_messages(vec![
        Message::new("Button %1", "按钮"),
        Message::new("E&xit", "退出"),
    ]);

    let service = ValidationService::with_defaults();
    let report = service.validate(&catalog);

    // Dropped placeholder is an error, dropped mnemonic a warning
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.warning_count(), 1);
    assert!(!report.passed(false));
    assert!(!report.passed(true));

    assert!(report
        .findings
        .iter()
        .any(|f| f.severity == Severity::Error && f.detail.contains("%1")));
}

/// Test warnings alone pass unless strict
#[test]
fn test_service_withWarningsOnly_shouldPassUnlessStrict() {
    let catalog = catalog_with_messages(vec![Message::new("E&xit", "退出")]);

    let report = ValidationService::with_defaults().validate(&catalog);

    assert_eq!(report.error_count(), 0);
    assert!(report.passed(false));
    assert!(!report.passed(true));
}

/// Test validator toggles suppress their findings
#[test]
fn test_service_withDisabledValidator_shouldSkipItsFindings() {
    let catalog = catalog_with_messages(vec![Message::new("E&xit", "退出")]);

    let config = ValidationConfig {
        accelerator_validation: false,
        ..ValidationConfig::default()
    };
    let report = ValidationService::new(config).validate(&catalog);

    assert!(report.findings.is_empty());

    let disabled = ValidationConfig {
        enabled: false,
        ..ValidationConfig::default()
    };
    let catalog = catalog_with_messages(vec![Message::new("Button %1", "按钮")]);
    let report = ValidationService::new(disabled).validate(&catalog);

    assert!(report.findings.is_empty());
}

/// Test a clean catalog produces no findings
#[test]
fn test_service_withCleanCatalog_shouldPass() {
    let catalog = catalog_with_messages(vec![
        Message::new("E&xit", "(&X)退出"),
        Message::new("Button %1", "按钮 %1"),
        Message::new("<b>No gamepad</b>", "<b>未发现手柄</b>"),
    ]);

    let report = ValidationService::with_defaults().validate(&catalog);

    assert!(report.findings.is_empty());
    assert!(report.passed(true));
}
