//! Sharing the installed catalog between threads.

use super::{apnic, apnic_objects};
use crate::common::init_logging;
use rpsl_schema::{Catalog, RpslObject, SchemaConfig, install};
use std::thread;

#[test]
fn test_racing_installs_publish_one_catalog() {
    init_logging();
    let config = SchemaConfig::default();
    let installed: Vec<&'static Catalog> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| install(&config).expect("Failed to install catalog")))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("install thread panicked"))
            .collect()
    });
    let first = installed[0];
    assert!(installed.iter().all(|catalog| std::ptr::eq(*catalog, first)));
    assert!(std::ptr::eq(rpsl_schema::active().expect("installed"), first));
}

#[test]
fn test_fixtures_validate_the_same_on_every_thread() {
    let catalog = apnic();
    let objects: Vec<RpslObject> = apnic_objects()
        .iter()
        .map(|text| RpslObject::parse(text).expect("fixture parses"))
        .collect();
    let expected: Vec<_> = objects.iter().map(|object| catalog.validate(object)).collect();

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let results: Vec<_> = objects.iter().map(|object| catalog.validate(object)).collect();
                assert_eq!(results, expected);
            });
        }
    });
}
