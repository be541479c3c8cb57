//! Project file -> session -> export workflow

use ecodesign_app::catalog::load_catalog_with_override;
use ecodesign_app::export::export_comparison;
use ecodesign_app::project_file::{load_project, save_project};
use ecodesign_app::ComparisonSession;
use ecodesign_domain::model::{Category, ProjectParameters, ILLUSTRATIVE_PARAMETERS};
use ecodesign_domain::service::{calculate, PercentageSuggestion};
use ecodesign_types::Error;
use tempfile::tempdir;

#[test]
fn test_saved_project_reloads_identically() {
    let dir = tempdir().unwrap();
    for name in ["project.json", "project.toml"] {
        let path = dir.path().join(name);
        save_project(&path, &ILLUSTRATIVE_PARAMETERS).unwrap();
        assert_eq!(load_project(&path).unwrap(), ILLUSTRATIVE_PARAMETERS, "{}", name);
    }
}

#[test]
fn test_missing_project_file() {
    let dir = tempdir().unwrap();
    let err = load_project(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::FileNotFound(_)));
}

#[test]
fn test_catalog_defaults_feed_a_session() {
    let catalog = load_catalog_with_override(None).unwrap();
    let mut session = ComparisonSession::new(catalog.project_defaults());
    let before = session.result().clone();
    assert_eq!(before, calculate(&ILLUSTRATIVE_PARAMETERS));

    session
        .apply_suggestion(&PercentageSuggestion::new().with(Category::Aluminum, 100.0))
        .unwrap();
    let after = session.result().clone();
    let aluminum = after.carbon_breakdown(Category::Aluminum);
    assert_eq!(aluminum.mixed, aluminum.eco);
    assert!(after.carbon.totals.mixed < before.carbon.totals.mixed);
}

#[test]
fn test_session_parameters_save_and_export() {
    let dir = tempdir().unwrap();
    let mut session = ComparisonSession::new(ProjectParameters::illustrative());
    session.update(|p| {
        p.project.description = "School extension".to_string();
        p.concrete.reinforcement.enabled = true;
    });
    let outcome = session.optimize(5.0);
    assert!(outcome.surcharge_pct() <= 5.0 + 1e-9);

    let project_path = dir.path().join("optimized.json");
    save_project(&project_path, session.parameters()).unwrap();
    let reloaded = load_project(&project_path).unwrap();
    assert_eq!(&reloaded, session.parameters());

    let result = session.result().clone();
    let xlsx = dir.path().join("out.xlsx");
    let csv = dir.path().join("out.csv");
    export_comparison(&result, &reloaded, "EUR", &xlsx).unwrap();
    export_comparison(&result, &reloaded, "EUR", &csv).unwrap();
    assert!(xlsx.exists());
    assert!(std::fs::read_to_string(&csv).unwrap().starts_with("axis,category"));

    let err = export_comparison(&result, &reloaded, "EUR", &dir.path().join("out.pdf")).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
}
