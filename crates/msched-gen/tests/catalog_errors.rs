use msched_core::MschedError;
use msched_gen::{
    count_combinations, from_yaml_slice, generate, GenerateOptions, GroupTable,
    MultiSchedConfig, ParameterCatalog,
};

#[test]
fn unknown_flag_is_rejected() {
    let mut catalog = ParameterCatalog::new();
    let err = catalog.add_flag("fillinmode_sometimes").unwrap_err();
    assert!(matches!(err, MschedError::UnknownParameter(_)));
}

#[test]
fn names_must_match_their_declaration_path() {
    let mut catalog = ParameterCatalog::new();
    assert!(matches!(
        catalog.add_flag("weightDuration"),
        Err(MschedError::UnknownParameter(_))
    ));
    assert!(matches!(
        catalog.add_numeric("stationWeight", vec![1.0]),
        Err(MschedError::UnknownParameter(_))
    ));
    assert!(matches!(
        catalog.add_scoped("subnetting_minSourceAngle", "WETTZELL", vec![1.0]),
        Err(MschedError::UnknownParameter(_))
    ));
    assert!(matches!(
        catalog.add_scoped("stationMinSNR", "WETTZELL", vec![1.0]),
        Err(MschedError::UnknownParameter(_))
    ));
    assert!(catalog.is_empty());
}

#[test]
fn empty_candidate_lists_are_rejected() {
    let mut catalog = ParameterCatalog::new();
    assert!(matches!(
        catalog.add_numeric("weightSkyCoverage", Vec::new()),
        Err(MschedError::EmptyDimension(_))
    ));
    assert!(matches!(
        catalog.add_scoped("sourceWeight", "3C273", Vec::new()),
        Err(MschedError::EmptyDimension(_))
    ));
}

#[test]
fn redeclaration_replaces_candidates_in_place() {
    let mut catalog = ParameterCatalog::new();
    catalog.add_numeric("skyCoverageInfluenceTime", vec![1.0]).unwrap();
    catalog.add_numeric("skyCoverageInfluenceDistance", vec![2.0]).unwrap();
    catalog
        .add_numeric("skyCoverageInfluenceTime", vec![3.0, 4.0])
        .unwrap();
    catalog.add_flag("subnetting").unwrap();
    catalog.add_flag("subnetting").unwrap();
    assert_eq!(catalog.numeric().len(), 2);
    assert_eq!(catalog.numeric()[0].values, vec![3.0, 4.0]);
    assert_eq!(catalog.flags().len(), 1);
}

#[test]
fn huge_products_fail_instead_of_wrapping() {
    let mut catalog = ParameterCatalog::new();
    let values: Vec<f64> = (0..1000).map(f64::from).collect();
    for station in ["A", "B", "C", "D", "E", "F", "G"] {
        catalog
            .add_scoped("stationMaxWait", station, values.clone())
            .unwrap();
    }
    let options = GenerateOptions::new(10, 1);
    assert!(matches!(
        count_combinations(&catalog, &options),
        Err(MschedError::CombinatorialOverflow(_))
    ));
    assert!(matches!(
        generate(&catalog, &GroupTable::new(), &options),
        Err(MschedError::CombinatorialOverflow(_))
    ));
}

#[test]
fn countable_but_unallocatable_tables_fail_cleanly() {
    let mut catalog = ParameterCatalog::new();
    let values: Vec<f64> = (0..1000).map(f64::from).collect();
    for station in ["A", "B", "C", "D", "E", "F"] {
        catalog
            .add_scoped("stationMaxWait", station, values.clone())
            .unwrap();
    }
    let options = GenerateOptions::new(10, 1);
    assert_eq!(
        count_combinations(&catalog, &options).unwrap(),
        1_000_000_000_000_000_000
    );
    let err = generate(&catalog, &GroupTable::new(), &options).unwrap_err();
    assert!(matches!(err, MschedError::CombinatorialOverflow(_)));
    assert_eq!(err.info().code, "table-too-large");
}

#[test]
fn catalog_files_are_validated_on_load() {
    let yaml = b"flags: [subnetting, notAFlag]\n";
    let err = from_yaml_slice::<ParameterCatalog>(yaml).unwrap_err();
    assert!(matches!(err, MschedError::Serde(_)));
    assert!(err.to_string().contains("notAFlag"));

    let yaml = b"numeric:\n  - name: weightDuration\n    values: []\n";
    assert!(from_yaml_slice::<ParameterCatalog>(yaml).is_err());

    let yaml = b"flags: [subnetting]\nscopd:\n  - name: stationMaxWait\n    member: WETTZELL\n    values: [10, 20]\n";
    let err = from_yaml_slice::<ParameterCatalog>(yaml).unwrap_err();
    assert!(matches!(err, MschedError::Serde(_)));
    assert!(err.to_string().contains("scopd"));

    let yaml = b"scoped:\n  - name: stationMaxWait\n    membr: WETTZELL\n    member: ONSALA60\n    values: [10]\n";
    assert!(from_yaml_slice::<ParameterCatalog>(yaml).is_err());
}

#[test]
fn configuration_sections_reject_unknown_keys() {
    let yaml = b"catalog:\n  flags: [subnetting]\ngroup:\n  station:\n    lowEl: [WETTZELL]\noptions:\n  max_size: 4\n  seed: 1\n";
    assert!(from_yaml_slice::<MultiSchedConfig>(yaml).is_err());

    let yaml = b"catalog:\n  flags: [subnetting]\noptions:\n  max_size: 4\n  seed: 1\n  sed: 2\n";
    assert!(from_yaml_slice::<MultiSchedConfig>(yaml).is_err());

    let yaml = b"catalog:\n  flags: [subnetting]\noptions:\n  max_size: 4\n  seed: 1\n";
    let config = from_yaml_slice::<MultiSchedConfig>(yaml).unwrap();
    assert_eq!(count_combinations(&config.catalog, &config.options).unwrap(), 2);
}

#[test]
fn misspelled_entry_keys_are_reported_as_yaml_decode_errors() {
    let yaml = b"flags: [subnetting]\nnumeric:\n  - name: weightDuration\n    value: [1.0]\n";
    let err = from_yaml_slice::<ParameterCatalog>(yaml).unwrap_err();
    let info = err.info();
    assert_eq!(info.code, "yaml-decode");
    assert_eq!(info.context.get("format").map(String::as_str), Some("yaml"));
    assert!(info.message.contains("value"));
}
