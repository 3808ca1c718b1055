use super::*;

#[test]
fn module_card_id_slugifies_name() {
    assert_eq!(module_card_id("Neural Interface"), "module-neural-interface");
    assert_eq!(module_card_id("Data Analytics"), "module-data-analytics");
}

#[test]
fn module_names_are_unique() {
    let mut ids: Vec<String> = MODULES.iter().map(|(name, _)| module_card_id(name)).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), MODULES.len());
}
