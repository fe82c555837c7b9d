//! Integration tests for common Foundation workflows.
//!
//! These tests cover a plugin starting up on top of Foundation, from loading
//! Foundation's config to rendering its first message.

use foundation::prelude::*;
use foundation::foundation_platform::MemoryResources;
use foundation::{CONFIG_FILE, VERSION};
use foundation_testing::*;
use std::fs;
use std::sync::Arc;

fn foundation_host() -> Arc<MockPlatform> {
    Arc::new(MockPlatform::new())
}

// =============================================================================
// Foundation config
// =============================================================================

#[test]
fn test_default_config_is_created() {
    let platform = foundation_host();
    let foundation = Foundation::load(platform.clone()).unwrap();

    assert!(foundation.config_path().exists());
    assert_eq!(foundation.config(), &FoundationConfig::default());
    assert_logged(&platform, "Created default config.yml");

    let written = fs::read_to_string(foundation.config_path()).unwrap();
    assert!(written.contains("reconcile_policy: permissive"));
}

#[test]
fn test_bundled_config_resource_takes_precedence() {
    let platform = Arc::new(
        MockPlatform::new().with_resource(CONFIG_FILE, "reconcile_policy: strict\n"),
    );

    let foundation = Foundation::load(platform).unwrap();

    assert_eq!(foundation.config().reconcile_policy, ReconcilePolicy::Strict);
}

#[test]
fn test_existing_config_is_read() {
    let platform = foundation_host();
    fs::create_dir_all(platform.data_directory()).unwrap();
    fs::write(
        platform.data_directory().join(CONFIG_FILE),
        "reconcile_policy: strict\nprefix:\n  info: \"§b\"\n",
    )
    .unwrap();

    let foundation = Foundation::load(platform.clone()).unwrap();

    assert_eq!(foundation.config().reconcile_policy, ReconcilePolicy::Strict);
    assert_eq!(foundation.prefix_styles().info, "§b");
    assert_eq!(foundation.prefix_styles().error, PrefixStyles::default().error);
    assert_eq!(platform.call_count(), 0);
}

#[test]
fn test_invalid_config_is_rejected() {
    let platform = foundation_host();
    fs::create_dir_all(platform.data_directory()).unwrap();
    fs::write(
        platform.data_directory().join(CONFIG_FILE),
        "prefix:\n  separator: \"\"\n",
    )
    .unwrap();

    let err = Foundation::load(platform).unwrap_err();
    assert!(err.to_string().contains("prefix.separator"));
}

#[test]
fn test_unknown_policy_is_rejected() {
    let platform = foundation_host();
    fs::create_dir_all(platform.data_directory()).unwrap();
    fs::write(
        platform.data_directory().join(CONFIG_FILE),
        "reconcile_policy: lenient\n",
    )
    .unwrap();

    assert!(matches!(
        Foundation::load(platform),
        Err(FoundationError::Config(_))
    ));
}

#[test]
fn test_policy_name_ignores_case() {
    let platform = foundation_host();
    fs::create_dir_all(platform.data_directory()).unwrap();
    fs::write(
        platform.data_directory().join(CONFIG_FILE),
        "reconcile_policy: Strict\n",
    )
    .unwrap();

    let foundation = Foundation::load(platform).unwrap();
    assert_eq!(foundation.config().reconcile_policy, ReconcilePolicy::Strict);
}

// =============================================================================
// Plugin lang files
// =============================================================================

#[test]
fn test_plugin_lang_uses_foundation_settings() {
    let foundation = Foundation::with_config(
        foundation_host(),
        FoundationConfig {
            reconcile_policy: ReconcilePolicy::Strict,
            prefix: PrefixStyles::default().with_color(MessageType::Error, "§4"),
        },
    );

    let fixture = LangFixture::new(
        "denied: \"{{prefix \\\"error\\\"}}You can't do that, {{player}}\"\n",
    )
    .with_disk("denied: \"{{prefix \\\"error\\\"}}No, {{player}}\"\nold: Gone\n");

    let lang = foundation.lang(fixture.shared()).load().unwrap();

    assert_eq!(lang.options().policy, ReconcilePolicy::Strict);
    assert_keys(lang.keys(), &["denied"]);
    assert_eq!(
        lang.get_with("denied", &[TagResolver::single("player", "Steve")])
            .unwrap()
            .as_deref(),
        Some("§4Error §8» §7No, Steve")
    );
    assert_logged(&fixture.platform(), "Removed keys: old");
}

#[test]
fn test_plugin_startup_on_server_and_proxy() {
    let foundation = Foundation::load(foundation_host()).unwrap();
    let resources = MemoryResources::new().with("lang.yml", "hello: Hello!\n");
    let data = tempfile::TempDir::new().unwrap();

    let platforms = [
        foundation::foundation_platform::server(
            "MyPlugin",
            resources.clone(),
            data.path().join("server"),
        ),
        foundation::foundation_platform::proxy(
            resources,
            Logger::new("myplugin"),
            data.path().join("proxy"),
        ),
    ];

    for platform in platforms {
        let lang = foundation.lang(platform.clone()).load().unwrap();
        assert_eq!(lang.get("hello").unwrap().as_deref(), Some("Hello!"));
        assert!(platform.data_directory().join("lang.yml").exists());
    }
}

#[test]
fn test_shared_after_load() {
    let fixture = LangFixture::new("a: Hello\n");
    let lang = Arc::new(RosettaLang::load(fixture.shared()).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let lang = Arc::clone(&lang);
            std::thread::spawn(move || lang.get("a").unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("Hello"));
    }
}

#[test]
fn test_version_metadata() {
    assert!(!VERSION.is_empty());
    assert!(!foundation::DESCRIPTION.is_empty());
}

#[test]
fn test_bundled_resources() {
    let resources = foundation::resources();
    assert!(resources.contains(CONFIG_FILE));
    assert!(!resources.contains("lang.yml"));
}
