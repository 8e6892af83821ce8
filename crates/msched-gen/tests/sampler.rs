use msched_core::MschedError;
use msched_gen::{generate, sample, GenerateOptions, GroupTable, ParameterCatalog};

fn table() -> Vec<u32> {
    (0..100).collect()
}

#[test]
fn same_seed_gives_identical_sample() {
    let a = sample(table(), 10, 42).unwrap();
    let b = sample(table(), 10, 42).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 10);
}

#[test]
fn different_seeds_give_different_samples() {
    let a = sample(table(), 10, 1).unwrap();
    let b = sample(table(), 10, 42).unwrap();
    assert_ne!(a, b);
}

#[test]
fn sample_draws_distinct_records_from_the_table() {
    let mut drawn = sample(table(), 30, 9).unwrap();
    drawn.sort_unstable();
    drawn.dedup();
    assert_eq!(drawn.len(), 30);
    assert!(drawn.iter().all(|v| *v < 100));
}

#[test]
fn small_tables_pass_through_unchanged() {
    assert_eq!(sample(table(), 100, 5).unwrap(), table());
    assert_eq!(sample(table(), 1000, 5).unwrap(), table());
}

#[test]
fn zero_max_size_is_rejected() {
    let err = sample(table(), 0, 5).unwrap_err();
    assert!(matches!(err, MschedError::InvalidSampleSize(_)));

    let mut catalog = ParameterCatalog::new();
    catalog.add_flag("subnetting").unwrap();
    let err = generate(&catalog, &GroupTable::new(), &GenerateOptions::new(0, 5)).unwrap_err();
    assert!(matches!(err, MschedError::InvalidSampleSize(_)));
}

#[test]
fn generated_sample_is_reproducible() {
    let mut catalog = ParameterCatalog::new();
    for flag in ["subnetting", "fillinmode_duringScanSelection", "fillinmode_aPosteriori"] {
        catalog.add_flag(flag).unwrap();
    }
    catalog
        .add_numeric("skyCoverageInfluenceTime", vec![900.0, 1800.0, 2700.0])
        .unwrap();
    let options = GenerateOptions::new(5, 2024);
    let a = generate(&catalog, &GroupTable::new(), &options).unwrap();
    let b = generate(&catalog, &GroupTable::new(), &options).unwrap();
    assert_eq!(a.len(), 5);
    assert_eq!(a, b);
}
