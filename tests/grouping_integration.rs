// Grouping model integration tests
//
// Randomized checks that grouping never loses or duplicates items and that
// apparel ordering is descending and stable.

use inventory_overview::{
    build_grouped_inventory, BodyPartGroupDef, CharacterInventory, GroupedInventory, InventoryError,
    Item, ItemCategory, ItemDef, ItemDefRegistry, ItemId,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::sync::Arc;

struct RandomInput {
    weapons: Vec<Item>,
    apparels: Vec<Item>,
    miscellaneous: Vec<Item>,
}

fn random_input(rng: &mut StdRng, next_id: &mut u32) -> RandomInput {
    let mut spawn = |def: ItemDef| {
        *next_id += 1;
        Item::new(ItemId(*next_id), Arc::new(def))
    };

    let weapons = (0..rng.gen_range(0..6))
        .map(|i| spawn(ItemDef::weapon(format!("Weapon{}", i), "weapon")))
        .collect();
    // Few distinct list orders so collisions are common
    let apparels = (0..rng.gen_range(0..12))
        .map(|i| {
            let order = rng.gen_range(0..4) * 5;
            spawn(ItemDef::apparel(
                format!("Apparel{}", i),
                "apparel",
                vec![BodyPartGroupDef::new("Group", order)],
            ))
        })
        .collect();
    let miscellaneous = (0..rng.gen_range(0..6))
        .map(|i| spawn(ItemDef::miscellaneous(format!("Misc{}", i), "misc")))
        .collect();

    RandomInput {
        weapons,
        apparels,
        miscellaneous,
    }
}

#[test]
fn test_grouping_is_a_permutation_of_input() {
    let mut rng = StdRng::seed_from_u64(0x1f2e);
    let mut next_id = 0;

    for _ in 0..200 {
        let input = random_input(&mut rng, &mut next_id);
        let expected: HashSet<ItemId> = input
            .weapons
            .iter()
            .chain(&input.apparels)
            .chain(&input.miscellaneous)
            .map(|item| item.id)
            .collect();
        let total = input.weapons.len() + input.apparels.len() + input.miscellaneous.len();

        let grouped = build_grouped_inventory(input.weapons, input.apparels, input.miscellaneous)
            .expect("generated input is well-formed");
        let ordered = grouped.ordered_list();

        assert_eq!(ordered.len(), total);
        let seen: HashSet<ItemId> = ordered.iter().map(|item| item.id).collect();
        assert_eq!(seen.len(), total, "an item appeared twice");
        assert_eq!(seen, expected);
    }
}

#[test]
fn test_category_precedence_and_order() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut next_id = 0;

    for _ in 0..200 {
        let input = random_input(&mut rng, &mut next_id);
        let weapon_ids: Vec<ItemId> = input.weapons.iter().map(|item| item.id).collect();
        let misc_ids: Vec<ItemId> = input.miscellaneous.iter().map(|item| item.id).collect();
        let apparel_input: Vec<(ItemId, i32)> = input
            .apparels
            .iter()
            .map(|item| (item.id, item.primary_list_order().unwrap_or_default()))
            .collect();

        let grouped = GroupedInventory::new(input.weapons, input.apparels, input.miscellaneous)
            .expect("generated input is well-formed");
        let ordered = grouped.ordered_list();

        // weapons, then apparel, then miscellaneous
        let categories: Vec<ItemCategory> = ordered.iter().map(|item| item.category()).collect();
        let mut sorted_categories = categories.clone();
        sorted_categories.sort_by_key(|category| ItemCategory::ALL.iter().position(|c| c == category));
        assert_eq!(categories, sorted_categories);

        let ordered_ids: Vec<ItemId> = ordered.iter().map(|item| item.id).collect();
        let weapon_count = weapon_ids.len();
        let apparel_count = apparel_input.len();
        assert_eq!(&ordered_ids[..weapon_count], weapon_ids.as_slice());
        assert_eq!(&ordered_ids[weapon_count + apparel_count..], misc_ids.as_slice());

        // apparel: non-increasing, ties in input order
        let apparel_out = &ordered[weapon_count..weapon_count + apparel_count];
        for pair in apparel_out.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let (order_a, order_b) = (a.primary_list_order(), b.primary_list_order());
            assert!(order_a >= order_b);
            if order_a == order_b {
                let pos = |id: ItemId| apparel_input.iter().position(|(input_id, _)| *input_id == id);
                assert!(pos(a.id) < pos(b.id), "equal list orders must keep input order");
            }
        }
    }
}

#[test]
fn test_reference_scenario_from_registry_defs() {
    let mut defs = ItemDefRegistry::new();
    defs.register(ItemDef::weapon("Sword", "Sword"));
    defs.register(ItemDef::weapon("Bow", "Bow"));
    defs.register(ItemDef::apparel("Hat", "Hat", vec![BodyPartGroupDef::new("UpperHead", 5)]));
    defs.register(ItemDef::apparel("Coat", "Coat", vec![BodyPartGroupDef::new("Torso", 10)]));
    defs.register(ItemDef::apparel("Gloves", "Gloves", vec![BodyPartGroupDef::new("Hands", 5)]));
    defs.register(ItemDef::miscellaneous("Canteen", "Canteen"));

    let mut inventory = CharacterInventory::new("Scout");
    for def in ["Sword", "Hat", "Bow", "Coat", "Canteen", "Gloves"] {
        inventory.add_item(defs.spawn(def).expect("registered def"));
    }

    let grouped = GroupedInventory::from_source(&inventory).expect("well-formed inventory");
    let labels: Vec<&str> = grouped.iter_ordered().map(Item::label).collect();
    assert_eq!(labels, vec!["Sword", "Bow", "Coat", "Hat", "Gloves", "Canteen"]);
}

#[test]
fn test_malformed_apparel_returns_no_grouping() {
    let mut inventory = CharacterInventory::new("Scout");
    inventory.add_item(Item::new(
        ItemId(1),
        Arc::new(ItemDef::apparel("Apparel_Hat", "hat", vec![BodyPartGroupDef::new("UpperHead", 5)])),
    ));
    inventory.add_item(Item::new(ItemId(2), Arc::new(ItemDef::apparel("Apparel_Void", "void", vec![]))));

    let result = GroupedInventory::from_source(&inventory);
    assert_eq!(
        result.err(),
        Some(InventoryError::MalformedApparel {
            item: ItemId(2),
            def_name: "Apparel_Void".to_string(),
        })
    );
}
