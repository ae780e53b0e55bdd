//! Practice engine integration tests.
//!
//! Exercises the public API the way an embedding tool would: a simulated
//! tree, a detected component, and practices evaluated through the runner.

use std::path::Path;
use std::sync::Arc;

use praxis::inspector::{FileInspector, MemoryInspector};
use praxis::practice::catalog::PropertiesFileUsed;
use praxis::practice::{Practice, PracticeContext, PracticeEvaluation, PracticeId, PracticeRunner};
use praxis::project::{detect_language, Language, ProjectComponent};

const POM_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
  <modelVersion>4.0.0</modelVersion>
  <groupId>com.example</groupId>
  <artifactId>demo</artifactId>
  <version>0.0.1-SNAPSHOT</version>
</project>
"#;

fn java_context(fs: Arc<MemoryInspector>) -> PracticeContext {
    PracticeContext::new(Some(fs), ProjectComponent::new("/repo", Language::Java))
}

#[test]
fn properties_file_drives_the_verdict() {
    let fs = Arc::new(MemoryInspector::with_files([
        ("/target/config/application.properties", "server.port=8080"),
        ("pom.xml", POM_XML),
    ]));
    let ctx = java_context(fs);

    assert_eq!(
        PropertiesFileUsed.evaluate(&ctx).unwrap(),
        PracticeEvaluation::Practicing
    );
}

#[test]
fn absence_of_properties_is_a_confirmed_negative() {
    let fs = Arc::new(MemoryInspector::with_files([("pom.xml", POM_XML)]));
    let ctx = java_context(fs);

    assert_eq!(
        PropertiesFileUsed.evaluate(&ctx).unwrap(),
        PracticeEvaluation::NotPracticing
    );
}

#[test]
fn missing_inspector_wins_over_everything() {
    // Unknown regardless of what any tree would say, and regardless of
    // applicability.
    for language in [Language::Java, Language::Ruby] {
        let ctx = PracticeContext::without_inspector(ProjectComponent::new("/repo", language));
        assert_eq!(
            PropertiesFileUsed.evaluate(&ctx).unwrap(),
            PracticeEvaluation::Unknown
        );
    }
}

#[test]
fn applicability_is_gated_by_language_only() {
    for (language, expected) in [
        (Language::Java, true),
        (Language::Kotlin, true),
        (Language::Ruby, false),
    ] {
        let ctx = PracticeContext::without_inspector(ProjectComponent::new("/repo", language));
        assert_eq!(PropertiesFileUsed.is_applicable(&ctx), expected);
    }
}

#[test]
fn evaluation_is_idempotent_until_the_cache_is_purged() {
    let fs = Arc::new(MemoryInspector::with_files([
        ("config/application.properties", "server.port=8080"),
        ("pom.xml", POM_XML),
    ]));
    let ctx = java_context(fs.clone());

    assert_eq!(
        PropertiesFileUsed.evaluate(&ctx).unwrap(),
        PracticeEvaluation::Practicing
    );

    // The tree changes mid-scan; cached listings still answer.
    fs.clear();
    assert_eq!(
        PropertiesFileUsed.evaluate(&ctx).unwrap(),
        PracticeEvaluation::Practicing
    );

    // After a purge the new tree state is visible.
    fs.purge_cache();
    assert_eq!(
        PropertiesFileUsed.evaluate(&ctx).unwrap(),
        PracticeEvaluation::NotPracticing
    );
}

#[test]
fn detection_feeds_the_component_the_practices_gate_on() {
    let fs = Arc::new(MemoryInspector::with_files([
        ("pom.xml", POM_XML),
        ("config/application.properties", "server.port=8080"),
    ]));

    let language = detect_language(fs.as_ref()).unwrap();
    assert_eq!(language, Language::Java);

    let ctx = PracticeContext::new(Some(fs), ProjectComponent::new("/repo", language));
    let report = PracticeRunner::with_builtins().run(&ctx);

    let props = report
        .outcomes
        .iter()
        .find(|o| o.id == PracticeId::new("properties-file-used"))
        .expect("worked example runs for Java projects");
    assert_eq!(props.evaluation, PracticeEvaluation::Practicing);
}

#[test]
fn ruby_project_skips_java_family_practices() {
    let fs = Arc::new(MemoryInspector::with_files([
        ("Gemfile", "source 'https://rubygems.org'"),
        ("README.md", "# app"),
    ]));
    let ctx = PracticeContext::new(Some(fs), ProjectComponent::new("/repo", Language::Ruby));

    let report = PracticeRunner::with_builtins().run(&ctx);

    assert!(report
        .outcomes
        .iter()
        .all(|o| o.id != PracticeId::new("properties-file-used")));
    assert!(report.skipped >= 2);
}

#[test]
fn scan_without_inspector_still_completes() {
    let ctx = PracticeContext::without_inspector(ProjectComponent::new("/repo", Language::Java));
    let report = PracticeRunner::with_builtins().run(&ctx);

    assert!(!report.outcomes.is_empty());
    assert!(report
        .outcomes
        .iter()
        .all(|o| o.evaluation == PracticeEvaluation::Unknown));
}

#[test]
fn content_practice_reads_through_the_inspector() {
    let fs = Arc::new(MemoryInspector::with_files([(
        ".gitignore",
        "*.class\ntarget/\n",
    )]));
    assert_eq!(
        fs.content(Path::new(".gitignore")).unwrap(),
        "*.class\ntarget/\n"
    );

    let ctx = java_context(fs);
    let report = PracticeRunner::with_builtins().run(&ctx);
    let gitignore = report
        .outcomes
        .iter()
        .find(|o| o.id == PracticeId::new("java-gitignore-correctly-set"))
        .unwrap();
    assert_eq!(gitignore.evaluation, PracticeEvaluation::Practicing);
}
