use super::*;

#[test]
fn test_new_sorts_and_dedups() {
    let sig = Signature::new([3, 1, 3, 0]);
    assert_eq!(sig.indices(), &[0, 1, 3]);
    assert_eq!(sig.len(), 3);
    assert!(sig.contains(3));
    assert!(!sig.contains(2));
}

#[test]
fn test_equality_is_order_independent() {
    assert_eq!(Signature::new([2, 0]), Signature::new([0, 2]));
    assert_ne!(Signature::new([0, 2]), Signature::new([0, 1, 2]));
}

#[test]
fn test_bits() {
    assert_eq!(Signature::from_bits(0b1010), Signature::new([1, 3]));
    assert_eq!(Signature::new([0, 2]).bits(), Some(0b101));
    assert_eq!(Signature::single(64).bits(), None);
    assert!(Signature::from_bits(0).is_empty());
}

#[test]
fn test_key_and_display() {
    let sig = Signature::new([0, 2]);
    assert_eq!(sig.key(), "0,2");
    assert_eq!(sig.to_string(), "{0,2}");
}

#[test]
fn test_order_cardinality_then_indices() {
    let all = Signature::all_nonempty(3).unwrap();
    let keys: Vec<String> = all.iter().map(Signature::key).collect();
    assert_eq!(
        keys,
        vec!["0", "1", "2", "0,1", "0,2", "1,2", "0,1,2"]
    );
    assert_eq!(all.last(), Some(&Signature::full(3)));
}

#[test]
fn test_all_nonempty_counts() {
    assert!(Signature::all_nonempty(0).unwrap().is_empty());
    assert_eq!(Signature::all_nonempty(4).unwrap().len(), 15);
    assert_eq!(
        Signature::all_nonempty(MAX_REGION_ARITY).unwrap().len(),
        (1usize << MAX_REGION_ARITY) - 1
    );
}

#[test]
fn test_all_nonempty_limit() {
    let err = Signature::all_nonempty(MAX_REGION_ARITY + 1).unwrap_err();
    assert_eq!(
        err,
        VennError::TooManyRegions {
            arity: MAX_REGION_ARITY + 1,
            max: MAX_REGION_ARITY
        }
    );
}
