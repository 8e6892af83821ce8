use msched_gen::{
    generate, EntityKind, GenerateOptions, GroupTable, OverrideValue, ParameterCatalog,
    ScopedField,
};

fn options() -> GenerateOptions {
    GenerateOptions::new(100, 3)
}

#[test]
fn group_member_fans_out_to_every_station() {
    let mut groups = GroupTable::new();
    groups.insert(EntityKind::Station, "lowEl", ["A", "B"]);
    let mut catalog = ParameterCatalog::new();
    catalog.add_flag("subnetting").unwrap();
    catalog
        .add_scoped("stationMinElevation", "lowEl", vec![5.0])
        .unwrap();

    let table = generate(&catalog, &groups, &options()).unwrap();
    assert_eq!(table.len(), 2);
    for record in &table {
        assert_eq!(
            record.override_value(ScopedField::StationMinElevation, "A"),
            Some(OverrideValue::Real(5.0))
        );
        assert_eq!(
            record.override_value(ScopedField::StationMinElevation, "B"),
            Some(OverrideValue::Real(5.0))
        );
        assert!(record
            .override_value(ScopedField::StationMinElevation, "lowEl")
            .is_none());
    }
}

#[test]
fn resolve_returns_members_in_declared_order() {
    let mut groups = GroupTable::new();
    groups.insert(EntityKind::Source, "geodetic", ["1357-769", "0552+398", "1357-769"]);
    assert_eq!(
        groups.resolve(EntityKind::Source, "geodetic"),
        vec!["1357-769".to_string(), "0552+398".to_string()]
    );
    assert_eq!(
        groups.resolve(EntityKind::Source, "3C273"),
        vec!["3C273".to_string()]
    );
}

#[test]
fn groups_are_looked_up_per_entity_class() {
    let mut groups = GroupTable::new();
    groups.insert(EntityKind::Station, "core", ["WETTZELL", "ONSALA60"]);
    assert_eq!(
        groups.resolve(EntityKind::Baseline, "core"),
        vec!["core".to_string()]
    );
}

#[test]
fn literal_member_is_kept_as_opaque_key() {
    let mut catalog = ParameterCatalog::new();
    catalog
        .add_scoped("baselineWeight", "WETTZELL-ONSALA60", vec![1.5, 3.0])
        .unwrap();
    let table = generate(&catalog, &GroupTable::new(), &options()).unwrap();
    let values: Vec<_> = table
        .iter()
        .map(|r| r.override_value(ScopedField::BaselineWeight, "WETTZELL-ONSALA60"))
        .collect();
    assert_eq!(
        values,
        vec![Some(OverrideValue::Real(1.5)), Some(OverrideValue::Real(3.0))]
    );
    assert!(table.iter().all(|r| r.station.is_empty() && r.source.is_empty()));
}

#[test]
fn count_fields_round_half_away_from_zero() {
    let mut catalog = ParameterCatalog::new();
    catalog
        .add_scoped("stationMaxScan", "WETTZELL", vec![299.5, 600.2])
        .unwrap();
    catalog
        .add_scoped("sourceMinRepeat", "0552+398", vec![1799.4])
        .unwrap();
    let table = generate(&catalog, &GroupTable::new(), &options()).unwrap();
    let scans: Vec<_> = table
        .iter()
        .map(|r| r.override_value(ScopedField::StationMaxScan, "WETTZELL"))
        .collect();
    assert_eq!(
        scans,
        vec![Some(OverrideValue::Count(300)), Some(OverrideValue::Count(600))]
    );
    assert!(table.iter().all(|r| r.override_value(ScopedField::SourceMinRepeat, "0552+398")
        == Some(OverrideValue::Count(1799))));
}

#[test]
fn records_are_independent_copies() {
    let mut groups = GroupTable::new();
    groups.insert(EntityKind::Station, "all", ["A", "B", "C"]);
    let mut catalog = ParameterCatalog::new();
    catalog
        .add_scoped("stationWeight", "all", vec![1.0, 2.0])
        .unwrap();
    let mut table = generate(&catalog, &groups, &options()).unwrap();
    table[0].set_override(ScopedField::StationWeight, &["A".to_string()], 9.0);
    assert_eq!(
        table[1].override_value(ScopedField::StationWeight, "A"),
        Some(OverrideValue::Real(2.0))
    );
}
