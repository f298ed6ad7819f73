// tests/resolver_test.rs
//
// End-to-end coverage of the resolution policy through the public API,
// using the mock tag source in place of a real repository.

use dynamic_versioning::config::Directives;
use dynamic_versioning::domain::BumpKind;
use dynamic_versioning::git::{MockTagSource, TagSource};
use dynamic_versioning::resolver::{resolve, ResolutionInput};
use dynamic_versioning::DynamicVersioningError;

fn resolve_with(directives: Directives, source: &MockTagSource) -> Result<String, DynamicVersioningError> {
    let description = source.describe()?;
    resolve(&ResolutionInput::from_parts(directives, description))
}

#[test]
fn test_new_version_override_supremacy() {
    let directives = Directives {
        new_version: Some("9.9.9".to_string()),
        version_bump: Some(BumpKind::Minor),
        current_version: Some("1.0.0".to_string()),
        dev_version: true,
    };
    let source = MockTagSource::with_tag("v4.2.7", 12);

    assert_eq!(resolve_with(directives, &source).unwrap(), "9.9.9");
}

#[test]
fn test_minor_bump_from_tag() {
    let directives = Directives {
        version_bump: Some(BumpKind::Minor),
        ..Directives::default()
    };
    let source = MockTagSource::with_tag("v1.2.3", 0);

    assert_eq!(resolve_with(directives, &source).unwrap(), "1.3.0");
}

#[test]
fn test_default_mode_is_dev_with_major_bump() {
    let source = MockTagSource::with_tag("v4.2.7", 12);

    assert_eq!(
        resolve_with(Directives::default(), &source).unwrap(),
        "5.0.0.dev12"
    );
}

#[test]
fn test_dev_version_with_patch_bump() {
    let directives = Directives {
        version_bump: Some(BumpKind::Patch),
        dev_version: true,
        ..Directives::default()
    };
    let source = MockTagSource::with_tag("v4.2.7", 12);

    assert_eq!(resolve_with(directives, &source).unwrap(), "4.2.8.dev12");
}

#[test]
fn test_dev_version_at_tag_has_no_suffix() {
    let directives = Directives {
        dev_version: true,
        ..Directives::default()
    };
    let source = MockTagSource::with_tag("v4.2.7", 0);

    assert_eq!(resolve_with(directives, &source).unwrap(), "4.2.7");
}

#[test]
fn test_bump_without_any_source_bootstraps() {
    let directives = Directives {
        version_bump: Some(BumpKind::Major),
        ..Directives::default()
    };
    let source = MockTagSource::new();

    assert_eq!(resolve_with(directives, &source).unwrap(), "0.0.1");
}

#[test]
fn test_dev_version_without_any_source_fails() {
    let directives = Directives {
        dev_version: true,
        ..Directives::default()
    };
    let source = MockTagSource::new();

    assert!(matches!(
        resolve_with(directives, &source).unwrap_err(),
        DynamicVersioningError::NoVersionSource(_)
    ));
}

#[test]
fn test_dev_version_without_tag_uses_fallback() {
    let directives = Directives {
        current_version: Some("2.0.0".to_string()),
        dev_version: true,
        ..Directives::default()
    };
    // no annotated tags; 0 commits-since-tag means the fallback is used as-is
    let source = MockTagSource::new();

    assert_eq!(resolve_with(directives, &source).unwrap(), "2.0.0");
}

#[test]
fn test_malformed_tag_falls_through_to_fallback() {
    let directives = Directives {
        version_bump: Some(BumpKind::Minor),
        current_version: Some("1.2.3".to_string()),
        ..Directives::default()
    };
    let source = MockTagSource::with_tag("nightly-build", 4);

    assert_eq!(resolve_with(directives, &source).unwrap(), "1.3.0");
}

#[test]
fn test_tag_with_describe_suffix_still_parses() {
    let source = MockTagSource::with_tag("v1.0.0", 3);
    let directives = Directives {
        version_bump: Some(BumpKind::Patch),
        dev_version: true,
        ..Directives::default()
    };

    assert_eq!(resolve_with(directives, &source).unwrap(), "1.0.1.dev3");
}

#[test]
fn test_bogus_bump_kind_rejected_at_boundary() {
    assert!(matches!(
        "bogus".parse::<BumpKind>().unwrap_err(),
        DynamicVersioningError::InvalidBumpKind(_)
    ));
}

#[test]
fn test_fetch_failure_does_not_block_resolution() {
    let source = MockTagSource::with_tag("v1.2.3", 1).failing_fetch();
    assert!(source.fetch_tags("origin").is_err());

    // local tag data is still good enough to resolve
    let directives = Directives {
        version_bump: Some(BumpKind::Patch),
        ..Directives::default()
    };
    assert_eq!(resolve_with(directives, &source).unwrap(), "1.2.4");
}
