use super::*;

#[test]
fn same_identifier_same_stream() {
    let mut a = SeededRng::from_identifier("avatar-1234");
    let mut b = SeededRng::from_identifier("avatar-1234");
    for _ in 0..32 {
        assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
    }
}

#[test]
fn draws_stay_in_unit_interval() {
    let mut rng = SeededRng::from_identifier("bounds");
    for _ in 0..1024 {
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn different_identifiers_diverge() {
    let mut a = SeededRng::from_identifier("user-a");
    let mut b = SeededRng::from_identifier("user-b");
    let a_draws: Vec<u64> = (0..16).map(|_| a.next_f64().to_bits()).collect();
    let b_draws: Vec<u64> = (0..16).map(|_| b.next_f64().to_bits()).collect();
    assert_ne!(a_draws, b_draws);
}
