//! Tests for the shared random source

use core_kernel::FakeSource;
use rand::Rng;
use std::sync::Arc;
use std::thread;

#[test]
fn test_shared_instance_is_stable() {
    let handles: Vec<_> = (0..8).map(|_| thread::spawn(FakeSource::shared)).collect();
    let first = FakeSource::shared();
    for handle in handles {
        let other = handle.join().unwrap();
        assert!(Arc::ptr_eq(&first, &other));
    }
}

#[test]
fn test_entropy_source_has_no_seed() {
    assert_eq!(FakeSource::from_entropy().seed(), None);
    assert_eq!(FakeSource::shared().seed(), None);
}

#[test]
fn test_different_seeds_diverge() {
    let a: u64 = FakeSource::seeded(1).with_rng(|rng| rng.gen());
    let b: u64 = FakeSource::seeded(2).with_rng(|rng| rng.gen());
    assert_ne!(a, b);
}

#[test]
fn test_concurrent_draws_are_all_delivered() {
    let source = Arc::new(FakeSource::seeded(99));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let source = Arc::clone(&source);
            thread::spawn(move || {
                (0..250)
                    .map(|_| source.with_rng(|rng| rng.gen_range(0..10u32)))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let draws: Vec<u32> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    assert_eq!(draws.len(), 1000);
    assert!(draws.iter().all(|d| *d < 10));
}

#[test]
fn test_survives_poisoned_lock() {
    let source = Arc::new(FakeSource::seeded(5));
    let poisoner = Arc::clone(&source);
    let result = thread::spawn(move || {
        let _: () = poisoner.with_rng(|_| panic!("boom"));
    })
    .join();
    assert!(result.is_err());

    let draws: Vec<u8> = source.with_rng(|rng| (0..4).map(|_| rng.gen()).collect());
    assert_eq!(draws.len(), 4);
}
