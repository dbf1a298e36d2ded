use super::*;
use crate::input::mutations::gene_of;
use crate::model::{NamedSet, Signature};
use crate::pipeline::stage2_partition::partition;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn genes() -> Vec<String> {
    vec!["S".to_string(), "N".to_string(), "ORF1a".to_string()]
}

fn by_gene(m: &str) -> String {
    gene_of(m).to_string()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_universe_completeness() {
    let sets = vec![
        NamedSet::new("A", ["S:484K"]),
        NamedSet::new("B", Vec::<String>::new()),
    ];
    let result = partition(&sets).unwrap();
    let grouped =
        group_by_category(&result, by_gene, &genes(), UnknownCategoryPolicy::default()).unwrap();

    assert_eq!(
        grouped.categories().collect::<Vec<_>>(),
        vec!["S", "N", "ORF1a"]
    );
    let s = grouped.get("S").unwrap();
    assert_eq!(s.elements_for(&Signature::single(0)).unwrap(), strings(&["S:484K"]));
    assert!(grouped.get("N").unwrap().is_empty());
    assert!(grouped.get("ORF1a").unwrap().is_empty());
    assert!(
        grouped
            .get("ORF1a")
            .unwrap()
            .elements_for(&Signature::full(2))
            .unwrap()
            .is_empty()
    );
    assert!(grouped.get("E").is_none());
    assert!(grouped.dropped().is_empty());
}

#[test]
fn test_unknown_category_errors_by_default() {
    let sets = vec![
        NamedSet::new("A", ["S:484K", "Z:1A"]),
        NamedSet::new("B", ["S:484K"]),
    ];
    let result = partition(&sets).unwrap();
    let err =
        group_by_category(&result, by_gene, &genes(), UnknownCategoryPolicy::default()).unwrap_err();
    assert_eq!(
        err,
        VennError::UnknownCategory {
            element: "Z:1A".to_string(),
            category: "Z".to_string(),
        }
    );
}

#[test]
fn test_unknown_category_drop_is_opt_in() {
    let sets = vec![
        NamedSet::new("A", ["S:484K", "Z:1A", "Y:9T"]),
        NamedSet::new("B", ["S:484K", "N:203K"]),
    ];
    let result = partition(&sets).unwrap();
    let grouped =
        group_by_category(&result, by_gene, &genes(), UnknownCategoryPolicy::Drop).unwrap();

    assert_eq!(grouped.dropped(), &strings(&["Y:9T", "Z:1A"]));
    assert_eq!(
        grouped
            .get("S")
            .unwrap()
            .elements_for(&Signature::full(2))
            .unwrap(),
        strings(&["S:484K"])
    );
    assert_eq!(
        grouped
            .get("N")
            .unwrap()
            .elements_for(&Signature::single(1))
            .unwrap(),
        strings(&["N:203K"])
    );
}

#[test]
fn test_classes_split_by_category() {
    let sets = vec![
        NamedSet::new("A", ["S:1A", "N:2B", "S:3C"]),
        NamedSet::new("B", ["S:3C", "N:2B", "ORF1a:5D"]),
    ];
    let result = partition(&sets).unwrap();
    let grouped =
        group_by_category(&result, by_gene, &genes(), UnknownCategoryPolicy::Error).unwrap();

    let s = grouped.get("S").unwrap();
    assert_eq!(s.classes().len(), 2);
    assert_eq!(s.elements_for(&Signature::single(0)).unwrap(), strings(&["S:1A"]));
    assert_eq!(s.elements_for(&Signature::full(2)).unwrap(), strings(&["S:3C"]));

    let n = grouped.get("N").unwrap();
    assert_eq!(n.elements_for(&Signature::full(2)).unwrap(), strings(&["N:2B"]));
    assert!(n.elements_for(&Signature::single(0)).unwrap().is_empty());

    let orf = grouped.get("ORF1a").unwrap();
    assert_eq!(
        orf.elements_for(&Signature::single(1)).unwrap(),
        strings(&["ORF1a:5D"])
    );
    assert_eq!(orf.arity(), 2);
    assert_eq!(orf.labels(), result.labels());
}

#[test]
fn test_duplicate_universe_entries_collapse() {
    let sets = vec![
        NamedSet::new("A", ["S:1A"]),
        NamedSet::new("B", ["N:1A"]),
    ];
    let result = partition(&sets).unwrap();
    let universe = ["S", "N", "S"];
    let grouped =
        group_by_category(&result, by_gene, &universe, UnknownCategoryPolicy::Error).unwrap();
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped.categories().collect::<Vec<_>>(), vec!["S", "N"]);
}

#[test]
fn test_invalid_signature_in_category() {
    let sets = vec![NamedSet::new("A", ["S:1A"]), NamedSet::new("B", ["S:1A"])];
    let result = partition(&sets).unwrap();
    let grouped =
        group_by_category(&result, by_gene, &genes(), UnknownCategoryPolicy::Error).unwrap();
    assert_eq!(
        grouped
            .get("N")
            .unwrap()
            .elements_for(&Signature::single(5))
            .unwrap_err(),
        VennError::InvalidSignature { index: 5, arity: 2 }
    );
}

fn arb_sets() -> impl Strategy<Value = Vec<BTreeSet<String>>> {
    prop::collection::vec(prop::collection::btree_set("[a-d]:[0-9]{1,2}", 0..16), 2..5)
}

proptest! {
    #[test]
    fn prop_grouping_preserves_membership(raw in arb_sets()) {
        let sets: Vec<NamedSet> = raw
            .iter()
            .enumerate()
            .map(|(i, e)| NamedSet::new(format!("S{i}"), e.iter().cloned()))
            .collect();
        let result = partition(&sets).unwrap();
        let universe = ["a", "b", "c", "d"];
        let grouped =
            group_by_category(&result, by_gene, &universe, UnknownCategoryPolicy::Error).unwrap();

        prop_assert_eq!(grouped.len(), 4);
        let mut seen = BTreeSet::new();
        for (gene, part) in grouped.iter() {
            for class in part.classes() {
                for element in &class.elements {
                    prop_assert_eq!(gene_of(element), gene);
                    prop_assert!(seen.insert(element.clone()));
                    let original = result.elements_for(&class.signature).unwrap();
                    prop_assert!(original.contains(element));
                }
            }
        }
        let union: BTreeSet<String> = result.elements().map(str::to_string).collect();
        prop_assert_eq!(seen, union);
    }
}
