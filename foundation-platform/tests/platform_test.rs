//! Integration tests for foundation-platform

use foundation_log::Logger;
use foundation_platform::*;
use std::fs;
use std::io::Read;
use tempfile::TempDir;

fn read(platform: &dyn Platform, name: &str) -> Option<String> {
    let mut resource = platform.get_resource(name)?;
    let mut out = String::new();
    resource.read_to_string(&mut out).unwrap();
    Some(out)
}

#[test]
fn test_server_platform() {
    let data = TempDir::new().unwrap();
    let platform = server(
        "MyPlugin",
        MemoryResources::new().with("lang.yml", "a: Hello\n"),
        data.path(),
    );

    assert_eq!(platform.data_directory(), data.path());
    assert_eq!(read(platform.as_ref(), "lang.yml").as_deref(), Some("a: Hello\n"));
    assert_eq!(read(platform.as_ref(), "config.yml"), None);

    platform.info("info line");
    platform.warn("warn line");
}

#[test]
fn test_proxy_platform_with_directory_resources() {
    let resources = TempDir::new().unwrap();
    fs::write(resources.path().join("lang.yml"), "a: Hi\n").unwrap();
    let data = TempDir::new().unwrap();

    let platform = proxy(
        DirectoryResources::new(resources.path()),
        Logger::new("myplugin"),
        data.path().join("myplugin"),
    );

    assert_eq!(platform.data_directory(), data.path().join("myplugin"));
    assert_eq!(read(platform.as_ref(), "lang.yml").as_deref(), Some("a: Hi\n"));
}

#[test]
fn test_platforms_are_interchangeable() {
    let data = TempDir::new().unwrap();
    let platforms = vec![
        server("A", MemoryResources::new().with("x", "1"), data.path()),
        proxy(
            MemoryResources::new().with("x", "1"),
            Logger::new("B"),
            data.path(),
        ),
    ];

    for platform in &platforms {
        assert_eq!(read(platform.as_ref(), "x").as_deref(), Some("1"));
    }
}
