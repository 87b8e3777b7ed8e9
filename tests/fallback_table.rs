// tests/fallback_table.rs
//
// Behavior of the shipped trigger→augmentation table: exclusivity,
// ordering, and the unchanged-record guarantee.

use recipe_attribute_extractor::{ExtractionRecord, FallbackTable};

#[test]
fn only_the_first_matching_rule_fires() {
    let table = FallbackTable::builtin();
    let mut rec = ExtractionRecord::default();
    // "coffee" precedes "espresso" in table order; both triggers are present
    table.augment(&mut rec, "an espresso machine makes great coffee");
    assert!(rec.keywords.contains(&"hot drink".to_string()));
    assert!(
        !rec.keywords.contains(&"espresso".to_string()),
        "espresso rule must not fire as well: {:?}",
        rec.keywords
    );
}

#[test]
fn compound_triggers_shadow_their_prefixes() {
    let table = FallbackTable::builtin();
    let mut rec = ExtractionRecord::default();
    let fired = table
        .augment(&mut rec, "a smoothie bowl for breakfast")
        .expect("rule fires");
    assert_eq!(fired.trigger, "smoothie bowl");
    assert!(rec.keywords.contains(&"smoothie bowl".to_string()));
}

#[test]
fn plain_smoothie_still_has_its_own_rule() {
    let table = FallbackTable::builtin();
    let mut rec = ExtractionRecord::default();
    let fired = table
        .augment(&mut rec, "avocado smoothie with ice")
        .expect("rule fires");
    assert_eq!(fired.trigger, "smoothie");
}

#[test]
fn record_without_any_trigger_is_returned_unchanged_by_value() {
    let table = FallbackTable::builtin();
    let mut rec = ExtractionRecord {
        category: String::new(),
        calories: "250".into(),
        time: "15".into(),
        keywords: vec!["noodles".into()],
        keywords_name: vec!["noodles".into()],
    };
    let before = rec.clone();
    assert!(table.augment(&mut rec, "noodles").is_none());
    assert_eq!(rec, before);
}

#[test]
fn oat_and_almond_milk_share_keywords_but_not_names() {
    let table = FallbackTable::builtin();

    let mut oat = ExtractionRecord::default();
    table.augment(&mut oat, "latte with oat milk");
    // "latte" precedes both milk rules, so force texts without it
    let mut oat_only = ExtractionRecord::default();
    table.augment(&mut oat_only, "porridge with oat milk");
    let mut almond_only = ExtractionRecord::default();
    table.augment(&mut almond_only, "pancakes with almond milk");

    assert_eq!(oat_only.keywords, almond_only.keywords);
    assert_eq!(oat_only.keywords_name, ["oat milk"]);
    assert_eq!(almond_only.keywords_name, ["almond milk"]);
    // and the latte text really did take the coffee-family rule instead
    assert!(oat.keywords.contains(&"caffeinated".to_string()));
}
