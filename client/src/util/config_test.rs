use super::*;

#[test]
fn meta_selector_quotes_name() {
    assert_eq!(meta_selector("CYBERNET_API_BASE"), "meta[name=\"CYBERNET_API_BASE\"]");
}

#[cfg(not(feature = "csr"))]
#[test]
fn load_config_defaults_without_overrides() {
    let cfg = load_config();
    assert_eq!(cfg.particle_count, PortalConfig::default().particle_count);
}
