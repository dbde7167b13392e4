use strata::core::{BuildMode, PipelineConfigurator, SourcemapPolicy};
use strata::utils::{EnvFlags, COVERAGE_FLAG};

fn coverage_flags() -> EnvFlags {
    let mut flags = EnvFlags::new();
    flags.set(COVERAGE_FLAG, "true");
    flags
}

#[test]
fn test_production_build_without_flags() {
    let config = PipelineConfigurator::derive(BuildMode::Production, &EnvFlags::new());

    assert_eq!(config.plugins.len(), 4);
    assert_eq!(config.sourcemap, SourcemapPolicy::Off);
    assert!(config.output.empty_out_dir);
    assert_eq!(config.base, "./");
}

#[test]
fn test_production_build_with_coverage() {
    let config = PipelineConfigurator::derive(BuildMode::Production, &coverage_flags());

    assert_eq!(config.plugins.len(), 5);
    assert_eq!(config.sourcemap, SourcemapPolicy::Inline);

    let coverage = config
        .plugins
        .iter()
        .find(|p| p.name == "coverage")
        .expect("coverage plugin present");

    assert_eq!(
        coverage.options.get("include"),
        Some(&serde_json::Value::from("src/*"))
    );
    assert_eq!(
        coverage.options.get("instrumentInProduction"),
        Some(&serde_json::Value::Bool(true))
    );
}

#[test]
fn test_emitted_assets_route_by_suffix() {
    let config = PipelineConfigurator::derive(BuildMode::Production, &EnvFlags::new());
    let routes = &config.output.asset_routes;

    assert_eq!(routes.route("index.css").as_str(), "static/css/[name].[hash].[ext]");
    assert_eq!(routes.route("logo.png").as_str(), "static/media/[name].[hash].[ext]");
    assert_eq!(routes.route("font.woff2").as_str(), "static/media/[name].[hash].[ext]");

    // Scripts go through the dedicated entry/chunk fields, not the router
    assert_eq!(
        config.output.entry_file_names.as_str(),
        "static/js/[name].[hash].js"
    );
    assert_eq!(
        config.output.chunk_file_names.as_str(),
        "static/js/[name].[hash].js"
    );
}

#[test]
fn test_cache_busting_paths_never_collide() {
    let config = PipelineConfigurator::derive(BuildMode::Production, &EnvFlags::new());

    let template = config.output.asset_routes.route("app.css");
    let first = template.resolve("app.css", b".a { margin: 0; }");
    let second = template.resolve("app.css", b".a { margin: 1px; }");

    assert_ne!(first, second);

    // Byte-identical content may reuse a cache entry keyed by the hash
    let third = template.resolve("app.css", b".a { margin: 0; }");
    assert_eq!(first, third);
}

#[test]
fn test_identical_inputs_serialize_identically() {
    let flags = coverage_flags();

    let first =
        serde_json::to_vec(&PipelineConfigurator::derive(BuildMode::Production, &flags)).unwrap();
    let second =
        serde_json::to_vec(&PipelineConfigurator::derive(BuildMode::Production, &flags)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_dev_server_settings_fixed_across_inputs() {
    for mode in [BuildMode::Development, BuildMode::Production, BuildMode::Test] {
        for flags in [EnvFlags::new(), coverage_flags()] {
            let config = PipelineConfigurator::derive(mode, &flags);
            assert_eq!(config.server.port, 3000);
            assert!(!config.server.open);
        }
    }
}

#[test]
fn test_env_file_drives_derivation() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join(".env.production"),
        "STRATA_COVERAGE=true\n",
    )
    .unwrap();

    let flags = EnvFlags::load_from_files(temp_dir.path(), "production").unwrap();
    let config = PipelineConfigurator::derive(BuildMode::Production, &flags);

    assert_eq!(config.plugins.len(), 5);
    assert_eq!(config.sourcemap, SourcemapPolicy::Inline);
}

#[test]
fn test_configuration_round_trips_through_json() {
    let config = PipelineConfigurator::derive(BuildMode::Production, &coverage_flags());

    let json = serde_json::to_string(&config).unwrap();
    let restored: strata::core::BuildConfiguration = serde_json::from_str(&json).unwrap();

    assert_eq!(config, restored);
}
