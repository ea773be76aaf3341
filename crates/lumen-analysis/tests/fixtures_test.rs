//! End-to-end scans of JSON fixture apps with the built-in catalogs.

mod common;

use lumen_analysis::{RuleCatalog, ScanEngine};
use lumen_core::config::LumenConfig;
use lumen_core::{EvaluationContext, Severity, Surface, WcagCriterion};

use common::{ids, load_app};

#[test]
fn expense_canvas_app() {
    let root = load_app("expense_canvas.json");
    let ctx = EvaluationContext::new(Surface::CanvasApp, "Expenses");
    let outcome = ScanEngine::new(RuleCatalog::all()).scan(&root, &ctx);

    assert!(outcome.faults.is_empty());
    assert_eq!(
        ids(&outcome.findings),
        vec![
            "CONTRAST:INSUFFICIENT:lblHint",
            "ALT_TEXT:MISSING:imgBanner",
            "IMAGES_OF_TEXT:NAME:imgBanner",
            "INPUT_PURPOSE:MISSING:txtFirstName",
            "RESIZE_TEXT:OVERFLOW_CLIP:galItems",
            "LINK_PURPOSE:GENERIC:lnkMore",
            "TAB_ORDER:POSITIVE_INDEX:btnSubmit",
        ]
    );
    assert_eq!(outcome.nodes_visited, 9);

    let counts = outcome.count_by_severity();
    assert_eq!(counts.get(&Severity::High), Some(&2));
    assert_eq!(counts.get(&Severity::Medium), Some(&4));
    assert_eq!(counts.get(&Severity::Low), Some(&1));
    assert_eq!(outcome.weighted_score(), 2 * 10 + 4 * 3 + 1);
}

#[test]
fn model_driven_surface_skips_canvas_only_rules() {
    let root = load_app("expense_canvas.json");
    let ctx = EvaluationContext::new(Surface::ModelDrivenApp, "Expenses");
    let outcome = ScanEngine::new(RuleCatalog::all()).scan(&root, &ctx);

    assert_eq!(outcome.findings.len(), 5);
    assert_eq!(outcome.findings_for_rule("TAB_ORDER").count(), 0);
    assert_eq!(outcome.findings_for_rule("RESIZE_TEXT").count(), 0);
}

#[test]
fn findings_carry_context_and_references() {
    let root = load_app("expense_canvas.json");
    let ctx = EvaluationContext::new(Surface::CanvasApp, "Expenses").with_screen("Fallback");
    let outcome = ScanEngine::new(RuleCatalog::visual()).scan(&root, &ctx);

    let contrast = &outcome.findings[0];
    assert_eq!(contrast.rule_id, "CONTRAST");
    assert_eq!(contrast.control_type, "Label");
    assert_eq!(contrast.app_name, "Expenses");
    assert_eq!(contrast.surface, Surface::CanvasApp);
    assert_eq!(contrast.screen.as_deref(), Some("Fallback"), "child nodes carry no screen of their own");
    assert_eq!(contrast.wcag_criterion, Some(WcagCriterion::ContrastMinimum));
    assert!(contrast.wcag_reference.contains("1.4.3"));
    assert!(!contrast.section508_reference.is_empty());
}

#[test]
fn portal_links() {
    let root = load_app("portal_links.json");
    let ctx = EvaluationContext::new(Surface::PortalPage, "Contoso Portal");
    let outcome = ScanEngine::new(RuleCatalog::basic()).scan(&root, &ctx);

    assert_eq!(
        ids(&outcome.findings),
        vec![
            "ACCESSIBLE_LABEL:MISSING:lnkEmpty",
            "LINK_PURPOSE:EMPTY:lnkEmpty",
            "LINK_PURPOSE:URL_TEXT:lnkUrl",
            "LINK_PURPOSE:AMBIGUOUS_ACTION:lnkEdit",
        ]
    );
    assert!(outcome.findings[3].section508_reference.contains("E205.4"));
}

#[test]
fn engine_from_config() {
    let config = LumenConfig::from_toml(
        "[scan]\nparallel = true\nthreads = 2\n[rules]\ncatalogs = [\"basic\"]\ndisabled_rules = [\"ACCESSIBLE_LABEL\"]\n",
    )
    .unwrap();
    let engine = ScanEngine::from_config(&config).unwrap();
    assert_eq!(
        engine.catalog().ids(),
        vec!["ALT_TEXT", "TAB_ORDER", "INPUT_PURPOSE", "LINK_PURPOSE"]
    );

    let root = load_app("portal_links.json");
    let ctx = config.scan.context();
    let outcome = engine.scan(&root, &ctx);
    assert_eq!(outcome.findings.len(), 3);
    assert_eq!(outcome.findings[0].app_name, "unnamed-app");
}

#[test]
fn findings_serialize_to_json() {
    let root = load_app("portal_links.json");
    let ctx = EvaluationContext::new(Surface::PortalPage, "Contoso Portal");
    let outcome = ScanEngine::new(RuleCatalog::basic()).scan(&root, &ctx);

    let json = serde_json::to_value(&outcome.findings).unwrap();
    let first = &json[0];
    assert_eq!(first["control_id"], "lnkEmpty");
    assert_eq!(first["severity"], "Medium");
    assert_eq!(first["wcag_criterion"], "4.1.2");
}
