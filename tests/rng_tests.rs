//! RNG tests for baccarat-engine
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие шу
//! - корректную работу fisher_yates()
//! - равномерность тасовки
//! - границы next_below / next_unit

use std::collections::HashMap;

use baccarat_engine::domain::table::TableConfig;
use baccarat_engine::engine::{fisher_yates, RandomSource, Shoe};
use baccarat_engine::infra::{DeterministicRng, SystemRng};

/// RNG, который всегда возвращает 0 и запоминает запрошенные границы.
#[derive(Default)]
struct ZeroRng {
    bounds: Vec<usize>,
}

impl RandomSource for ZeroRng {
    fn next_below(&mut self, bound: usize) -> usize {
        self.bounds.push(bound);
        0
    }

    fn next_unit(&mut self) -> f64 {
        0.0
    }
}

//
// TEST 1 — DeterministicRng reproducibility
//
#[test]
fn deterministic_rng_same_seed_same_shoe() {
    let cfg = TableConfig::default();
    let a = Shoe::new(&cfg, &mut DeterministicRng::from_seed(123));
    let b = Shoe::new(&cfg, &mut DeterministicRng::from_seed(123));

    assert_eq!(a.cards(), b.cards(), "Same seed must produce identical shoe");
}

//
// TEST 2 — different seeds produce different shoes
//
#[test]
fn deterministic_rng_different_seeds_different_shoe() {
    let cfg = TableConfig::default();
    let a = Shoe::new(&cfg, &mut DeterministicRng::from_seed(111));
    let b = Shoe::new(&cfg, &mut DeterministicRng::from_seed(222));

    assert_ne!(a.cards(), b.cards(), "Different seeds must produce different shoe");
}

//
// TEST 3 — Fisher–Yates: swap i с позицией из [0, i], i идёт сверху вниз
//
#[test]
fn fisher_yates_walks_from_last_index_down() {
    let mut rng = ZeroRng::default();
    let mut v = vec![0, 1, 2, 3];

    fisher_yates(&mut v, &mut rng);

    // i=3 ↔ 0, i=2 ↔ 0, i=1 ↔ 0
    assert_eq!(v, vec![1, 2, 3, 0]);
    assert_eq!(rng.bounds, vec![4, 3, 2]);
}

//
// TEST 4 — пустой и одноэлементный срез не трогают RNG
//
#[test]
fn fisher_yates_on_tiny_slices_is_noop() {
    let mut rng = ZeroRng::default();

    let mut empty: Vec<u32> = Vec::new();
    fisher_yates(&mut empty, &mut rng);

    let mut one = vec![7u32];
    fisher_yates(&mut one, &mut rng);

    assert!(empty.is_empty());
    assert_eq!(one, vec![7]);
    assert!(rng.bounds.is_empty());
}

//
// TEST 5 — все 6 перестановок трёх элементов примерно равновероятны
//
#[test]
fn fisher_yates_is_uniform_over_permutations() {
    let mut rng = DeterministicRng::from_seed(2024);
    let mut counts: HashMap<Vec<u8>, u32> = HashMap::new();
    const TRIALS: u32 = 60_000;

    for _ in 0..TRIALS {
        let mut v = vec![0u8, 1, 2];
        fisher_yates(&mut v, &mut rng);
        *counts.entry(v).or_default() += 1;
    }

    assert_eq!(counts.len(), 6);
    let expected = TRIALS as f64 / 6.0;
    for (perm, n) in &counts {
        let deviation = (*n as f64 - expected).abs() / expected;
        assert!(deviation < 0.05, "permutation {perm:?} appeared {n} times");
    }
}

//
// TEST 6 — границы значений
//
#[test]
fn rng_outputs_stay_in_range() {
    let mut det = DeterministicRng::from_seed(5);
    let mut sys = SystemRng::default();

    for bound in 1..50usize {
        assert!(det.next_below(bound) < bound);
        assert!(sys.next_below(bound) < bound);
    }
    for _ in 0..1_000 {
        let u = det.next_unit();
        assert!((0.0..1.0).contains(&u));
        let u = sys.next_unit();
        assert!((0.0..1.0).contains(&u));
    }
}

//
// TEST 7 — seed из байтов тоже детерминирован
//
#[test]
fn seed_bytes_are_reproducible() {
    let mut a = DeterministicRng::from_seed_bytes([9u8; 32]);
    let mut b = DeterministicRng::from_seed_bytes([9u8; 32]);

    let xs: Vec<usize> = (0..20).map(|_| a.next_below(1000)).collect();
    let ys: Vec<usize> = (0..20).map(|_| b.next_below(1000)).collect();
    assert_eq!(xs, ys);
}
