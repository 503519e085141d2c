//! Tests for override resolution

use super::*;
use crate::criteria::parse_criteria;
use crate::DEFAULT_INDENT_GLYPH;
use tempfile::TempDir;

const HEADER: &str = "### DoD";

fn default_criteria() -> CriteriaSet {
    parse_criteria("dod:\n  - Tests added\n  - Docs updated\n", DEFAULT_INDENT_GLYPH).unwrap()
}

fn config_for(root: &Path) -> GateConfig {
    GateConfig {
        header: HEADER.to_string(),
        ..GateConfig::new(root)
    }
}

fn override_description(path: &str) -> String {
    format!("Implements the feature.\n\n```yaml\ndod_yaml: {path}\n```\n")
}

#[test]
fn test_empty_description_keeps_default() {
    let temp = TempDir::new().unwrap();
    let resolution = resolve(default_criteria(), "", &config_for(temp.path())).unwrap();

    assert!(!resolution.replaced);
    assert_eq!(resolution.criteria, default_criteria());
}

#[test]
fn test_description_without_fence_keeps_default() {
    let temp = TempDir::new().unwrap();
    let resolution = resolve(
        default_criteria(),
        "Just prose.\n```yaml\ndod_yaml: alt.yaml\n```\nmore prose",
        &config_for(temp.path()),
    )
    .unwrap();

    assert!(!resolution.replaced);
    assert_eq!(resolution.criteria, default_criteria());
}

#[test]
fn test_fence_without_key_keeps_default() {
    let temp = TempDir::new().unwrap();
    let resolution = resolve(
        default_criteria(),
        "Text\n```yaml\nsomething_else: alt.yaml\n```",
        &config_for(temp.path()),
    )
    .unwrap();

    assert!(!resolution.replaced);
    assert_eq!(resolution.criteria, default_criteria());
}

#[test]
fn test_unparseable_fence_keeps_default() {
    let temp = TempDir::new().unwrap();
    let resolution = resolve(
        default_criteria(),
        "Text\n```yaml\nthis is: not: valid: yaml:::\n```",
        &config_for(temp.path()),
    )
    .unwrap();

    assert!(!resolution.replaced);
}

#[test]
fn test_missing_file_keeps_default() {
    let temp = TempDir::new().unwrap();
    let resolution = resolve(
        default_criteria(),
        &override_description("absent.yaml"),
        &config_for(temp.path()),
    )
    .unwrap();

    assert!(!resolution.replaced);
    assert_eq!(resolution.criteria, default_criteria());
}

#[test]
fn test_existing_file_replaces_criteria() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("alt.yaml"), "dod: [\"Only one item\"]\n").unwrap();

    let resolution = resolve(
        default_criteria(),
        &override_description("alt.yaml"),
        &config_for(temp.path()),
    )
    .unwrap();

    assert!(resolution.replaced);
    assert_eq!(resolution.criteria.len(), 1);
    assert_eq!(resolution.criteria.last().text, "Only one item");
}

#[test]
fn test_invalid_override_file_is_fatal() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("alt.yaml"), "checks: []\n").unwrap();

    let result = resolve(
        default_criteria(),
        &override_description("alt.yaml"),
        &config_for(temp.path()),
    );

    assert!(matches!(result, Err(ConfigError::MissingDod)));
}

#[test]
fn test_override_before_posted_checklist() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("alt.yaml"), "dod:\n  - Only one item\n").unwrap();

    let description = format!(
        "{}\n{HEADER}\n- [ ] Only one item\n",
        override_description("alt.yaml")
    );
    let resolution = resolve(default_criteria(), &description, &config_for(temp.path())).unwrap();

    assert!(resolution.replaced);
    assert_eq!(resolution.criteria.last().text, "Only one item");
}

#[test]
fn test_override_after_checklist_is_ignored() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("alt.yaml"), "dod:\n  - Only one item\n").unwrap();

    let description = format!(
        "{HEADER}\n- [ ] Tests added\n- [ ] Docs updated\n\n{}",
        override_description("alt.yaml")
    );
    let resolution = resolve(default_criteria(), &description, &config_for(temp.path())).unwrap();

    assert!(!resolution.replaced);
}

#[test]
fn test_override_outside_repository_ignored() {
    let temp = TempDir::new().unwrap();
    let inner = temp.path().join("repo");
    std::fs::create_dir(&inner).unwrap();
    std::fs::write(temp.path().join("alt.yaml"), "dod:\n  - Escaped\n").unwrap();

    let resolution = resolve(
        default_criteria(),
        &override_description("../alt.yaml"),
        &config_for(&inner),
    )
    .unwrap();
    assert!(!resolution.replaced);

    let absolute = temp.path().join("alt.yaml");
    let resolution = resolve(
        default_criteria(),
        &override_description(&absolute.display().to_string()),
        &config_for(&inner),
    )
    .unwrap();
    assert!(!resolution.replaced);
}

#[test]
fn test_nested_override_path() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".github");
    std::fs::create_dir(&dir).unwrap();
    std::fs::write(dir.join("dod-docs.yml"), "dod:\n  - Docs proofread\n").unwrap();

    let resolution = resolve(
        default_criteria(),
        &override_description("./.github/dod-docs.yml"),
        &config_for(temp.path()),
    )
    .unwrap();

    assert!(resolution.replaced);
    assert_eq!(resolution.criteria.last().text, "Docs proofread");
}

#[test]
fn test_parse_directive_strips_checklist() {
    let description = format!("{HEADER}\n```yaml\ndod_yaml: alt.yaml\n```");
    assert_eq!(parse_directive(&description, HEADER), None);

    let directive = parse_directive("```yaml\ndod_yaml: alt.yaml\n```\n\n", HEADER).unwrap();
    assert_eq!(directive.dod_yaml, PathBuf::from("alt.yaml"));
}

#[test]
fn test_longer_closing_fence_still_overrides() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("alt.yaml"), "dod:\n  - Only one item\n").unwrap();

    let resolution = resolve(
        default_criteria(),
        "Docs only.\n\n```yaml\ndod_yaml: alt.yaml\n````\n",
        &config_for(temp.path()),
    )
    .unwrap();

    assert!(resolution.replaced);
    assert_eq!(resolution.criteria.last().text, "Only one item");
}
