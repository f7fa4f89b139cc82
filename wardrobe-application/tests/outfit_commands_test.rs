mod common;

use pretty_assertions::assert_eq;
use serde_json::json;
use wardrobe_application::commands::{
    add_item, build_lock, create_outfit, delete_outfit, remove_item, rename_outfit, save_outfit,
};
use wardrobe_application::queries::{
    describe_asset, diff_stored_outfits, get_outfit, list_outfits, search_catalog, CatalogQuery,
};
use wardrobe_application::AppError;
use wardrobe_domain::{ColorSpec, ItemConfig, LockKind, PropertyBag};

use common::state;

#[test]
fn add_item_replaces_same_group() {
    let state = state();
    let mut outfit = create_outfit("Evening", "night out");

    add_item(&state, &mut outfit, ItemConfig::new("Hands", "Rope").with_color("Red")).unwrap();
    add_item(&state, &mut outfit, ItemConfig::new("Hands", "Rope").with_color("Blue")).unwrap();

    assert_eq!(outfit.items.len(), 1);
    assert_eq!(outfit.items[0].group, "Hands");
    assert_eq!(outfit.items[0].color, Some(ColorSpec::from("Blue")));
}

#[test]
fn add_item_rejects_unknown_asset() {
    let state = state();
    let mut outfit = create_outfit("Evening", "");
    let result = add_item(&state, &mut outfit, ItemConfig::new("Hands", "Ghost"));
    assert!(matches!(result, Err(AppError::AssetNotFound { .. })));
    assert!(outfit.items.is_empty());
}

#[test]
fn remove_item_drops_group() {
    let state = state();
    let mut outfit = create_outfit("Evening", "");
    add_item(&state, &mut outfit, ItemConfig::new("Hands", "Rope")).unwrap();
    remove_item(&mut outfit, "Feet");
    assert_eq!(outfit.items.len(), 1);
    remove_item(&mut outfit, "Hands");
    assert!(outfit.items.is_empty());
}

#[test]
fn build_lock_is_strict() {
    let state = state();
    let mut overrides = PropertyBag::new();
    overrides.insert("Password".to_string(), json!("hunter2"));

    let lock = build_lock(&state, "PasswordPadlock", Some(&overrides)).unwrap();
    assert_eq!(lock.kind, LockKind::PasswordPadlock);
    assert_eq!(lock.field("Password"), Some(&json!("hunter2")));

    let result = build_lock(&state, "bogus-kind", None);
    assert!(matches!(result, Err(AppError::UnknownLockKind(kind)) if kind == "bogus-kind"));
}

#[test]
fn saved_outfits_are_listed_diffed_renamed_and_deleted() {
    let mut state = state();
    let mut a = create_outfit("A", "first");
    add_item(&state, &mut a, ItemConfig::new("Hands", "Rope")).unwrap();
    let mut b = create_outfit("B", "second");
    add_item(&state, &mut b, ItemConfig::new("Feet", "Cuffs")).unwrap();
    save_outfit(&mut state, &a).unwrap();
    save_outfit(&mut state, &b).unwrap();

    let summaries = list_outfits(&state);
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].name, "A");
    assert_eq!(summaries[0].item_count, 1);
    assert!(summaries[0].saved_at.is_some());

    let changes = diff_stored_outfits(&state, "A", "B").unwrap();
    let labels: Vec<_> = changes.iter().map(|c| (c.group(), c.label())).collect();
    assert_eq!(labels, vec![("Feet", "added"), ("Hands", "removed")]);

    assert!(matches!(rename_outfit(&mut state, "A", "  "), Err(AppError::EmptyName)));
    rename_outfit(&mut state, "A", "C").unwrap();
    assert!(matches!(get_outfit(&state, "A"), Err(AppError::NotFound(_))));
    delete_outfit(&mut state, "C").unwrap();
    assert_eq!(list_outfits(&state).len(), 1);
}

#[test]
fn catalog_queries_filter_and_describe() {
    let state = state();
    let rope = search_catalog(
        &state,
        CatalogQuery {
            text: Some("rope".to_string()),
            ..CatalogQuery::default()
        },
    );
    let keys: Vec<_> = rope.iter().map(|e| e.key().to_string()).collect();
    assert_eq!(keys, vec!["Hands/Rope", "ItemArms/HempRope"]);

    let extended = search_catalog(
        &state,
        CatalogQuery {
            extended_only: true,
            ..CatalogQuery::default()
        },
    );
    assert_eq!(extended.len(), 1);
    assert_eq!(extended[0].extended_option_names, vec!["Hogtied", "BoxTie"]);

    let limited = search_catalog(
        &state,
        CatalogQuery {
            limit: Some(2),
            ..CatalogQuery::default()
        },
    );
    assert_eq!(limited.len(), 2);

    assert_eq!(describe_asset(&state, "Hands", "Rope").unwrap().allowed_colors, vec!["Red", "Blue"]);
    assert!(matches!(describe_asset(&state, "Hands", "Ghost"), Err(AppError::AssetNotFound { .. })));
}
