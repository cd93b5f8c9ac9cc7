use noether_check::core::Ideal;
use noether_check::{AnnotatedModule, ModuleReporter, TheoremConfig, VerificationEngine};

#[tokio::test]
async fn test_fixture_report() {
    let engine = VerificationEngine::new(ModuleReporter::new(TheoremConfig::fixture()));
    let report = engine.run().await.unwrap();

    assert_eq!(report.module, "M");
    assert_eq!(report.annihilator, Ideal::new(&["ann(M)"]));
    assert_eq!(report.associated_primes.len(), 2);
    assert!(report.intersection.same_generators(&Ideal::new(&["y"])));
    assert_eq!(report.radical, Ideal::new(&["√(ann(M))"]));
    assert!(report.theorem_holds);
}

#[test]
fn test_outcome_ignores_computed_sets() {
    let mut config = TheoremConfig::fixture();
    config.report.module_name = "N".to_string();
    config.report.associated_primes = vec![Ideal::new(&["a"]), Ideal::new(&["b"])];

    let report = ModuleReporter::new(config).run();

    assert!(report.intersection.is_empty());
    assert!(!report.sets_agree());
    assert!(report.theorem_holds);
}

#[test]
fn test_no_associated_primes() {
    let report = AnnotatedModule::new("M").verify_theorem(&[]);

    assert!(report.intersection.is_empty());
    assert_eq!(report.intersection.to_string(), "{}");
    assert!(report.theorem_holds);
}
