use rand::rngs::StdRng;
use rand::SeedableRng;

// Each integration test binary pulls in only the helpers it uses.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

#[allow(dead_code)]
pub fn assert_f64_near(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
        actual,
        expected,
        (actual - expected).abs(),
        tolerance
    );
}
