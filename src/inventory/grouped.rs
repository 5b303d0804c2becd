//! Grouping of a character's possessions into weapons, apparel and
//! miscellaneous items, with a fixed combined display order.

use super::source::InventorySource;
use super::{InventoryError, InventoryResult};
use crate::item::{Item, ItemCategory, ItemId};

/// Possessions divided into three groups
///
/// The fields may be replaced directly; [`GroupedInventory::ordered_list`] is
/// computed from them on every call.
#[derive(Debug, Clone, Default)]
pub struct GroupedInventory {
    pub weapons: Vec<Item>,
    /// Sorted by descending primary body part group list order
    pub apparels: Vec<Item>,
    pub miscellaneous: Vec<Item>,
}

/// Number of items in each group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub weapons: usize,
    pub apparels: usize,
    pub miscellaneous: usize,
}

impl CategoryCounts {
    pub fn total(&self) -> usize {
        self.weapons + self.apparels + self.miscellaneous
    }
}

impl GroupedInventory {
    /// Group pre-classified items.
    ///
    /// Weapons and miscellaneous items keep their input order. Apparel is
    /// stable-sorted so items sharing a list order stay in input order.
    /// Fails without returning a partial grouping if an item is in the wrong
    /// sequence or an apparel def has no body part group.
    pub fn new(
        weapons: Vec<Item>,
        apparels: Vec<Item>,
        miscellaneous: Vec<Item>,
    ) -> InventoryResult<Self> {
        check_category(&weapons, ItemCategory::Weapon)?;
        check_category(&apparels, ItemCategory::Apparel)?;
        check_category(&miscellaneous, ItemCategory::Miscellaneous)?;

        let mut keys = Vec::with_capacity(apparels.len());
        for apparel in &apparels {
            let list_order = apparel
                .primary_list_order()
                .ok_or_else(|| InventoryError::MalformedApparel {
                    item: apparel.id,
                    def_name: apparel.def.def_name.clone(),
                })?;
            keys.push(list_order);
        }

        // sort_by_key is stable; Reverse keeps equal keys in input order
        let mut keyed: Vec<(i32, Item)> = keys.into_iter().zip(apparels).collect();
        keyed.sort_by_key(|(list_order, _)| std::cmp::Reverse(*list_order));
        let apparels: Vec<Item> = keyed.into_iter().map(|(_, item)| item).collect();

        log::debug!(
            "[GroupedInventory] grouped {} weapons, {} apparels, {} miscellaneous",
            weapons.len(),
            apparels.len(),
            miscellaneous.len()
        );

        Ok(Self {
            weapons,
            apparels,
            miscellaneous,
        })
    }

    /// Group the items a host source currently reports
    pub fn from_source(source: &dyn InventorySource) -> InventoryResult<Self> {
        Self::new(source.weapons(), source.apparels(), source.miscellaneous())
    }

    /// Weapons, then apparel, then miscellaneous items
    pub fn ordered_list(&self) -> Vec<&Item> {
        self.iter_ordered().collect()
    }

    pub fn iter_ordered(&self) -> impl Iterator<Item = &Item> + '_ {
        self.weapons
            .iter()
            .chain(self.apparels.iter())
            .chain(self.miscellaneous.iter())
    }

    pub fn len(&self) -> usize {
        self.weapons.len() + self.apparels.len() + self.miscellaneous.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts {
            weapons: self.weapons.len(),
            apparels: self.apparels.len(),
            miscellaneous: self.miscellaneous.len(),
        }
    }

    /// Which group holds the given item, if any
    pub fn category_of(&self, id: ItemId) -> Option<ItemCategory> {
        ItemCategory::ALL
            .into_iter()
            .find(|category| self.items_in(*category).iter().any(|item| item.id == id))
    }

    pub fn items_in(&self, category: ItemCategory) -> &[Item] {
        match category {
            ItemCategory::Weapon => &self.weapons,
            ItemCategory::Apparel => &self.apparels,
            ItemCategory::Miscellaneous => &self.miscellaneous,
        }
    }
}

/// Free-function form of [`GroupedInventory::new`]
pub fn build_grouped_inventory(
    weapons: Vec<Item>,
    apparels: Vec<Item>,
    miscellaneous: Vec<Item>,
) -> InventoryResult<GroupedInventory> {
    GroupedInventory::new(weapons, apparels, miscellaneous)
}

fn check_category(items: &[Item], expected: ItemCategory) -> InventoryResult<()> {
    match items.iter().find(|item| item.category() != expected) {
        Some(item) => Err(InventoryError::CategoryMismatch {
            item: item.id,
            expected,
            found: item.category(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{BodyPartGroupDef, ItemDef};
    use std::sync::Arc;

    fn weapon(id: u32, name: &str) -> Item {
        Item::new(ItemId(id), Arc::new(ItemDef::weapon(name, name)))
    }

    fn apparel(id: u32, name: &str, list_order: i32) -> Item {
        let def = ItemDef::apparel(name, name, vec![BodyPartGroupDef::new("Group", list_order)]);
        Item::new(ItemId(id), Arc::new(def))
    }

    fn misc(id: u32, name: &str) -> Item {
        Item::new(ItemId(id), Arc::new(ItemDef::miscellaneous(name, name)))
    }

    fn labels(inventory: &GroupedInventory) -> Vec<&str> {
        inventory.ordered_list().into_iter().map(Item::label).collect()
    }

    #[test]
    fn test_reference_scenario() {
        let inventory = GroupedInventory::new(
            vec![weapon(1, "Sword"), weapon(2, "Bow")],
            vec![apparel(3, "Hat", 5), apparel(4, "Coat", 10), apparel(5, "Gloves", 5)],
            vec![misc(6, "Canteen")],
        )
        .expect("well-formed input");

        assert_eq!(labels(&inventory), vec!["Sword", "Bow", "Coat", "Hat", "Gloves", "Canteen"]);
    }

    #[test]
    fn test_empty_inputs() {
        let inventory = GroupedInventory::new(vec![], vec![], vec![]).expect("empty input is valid");
        assert!(inventory.ordered_list().is_empty());
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_apparel_without_body_part_group_fails() {
        let bare = Item::new(ItemId(9), Arc::new(ItemDef::apparel("Apparel_Bare", "bare", vec![])));
        let result = GroupedInventory::new(vec![weapon(1, "Sword")], vec![apparel(2, "Hat", 5), bare], vec![]);

        match result {
            Err(InventoryError::MalformedApparel { item, def_name }) => {
                assert_eq!(item, ItemId(9));
                assert_eq!(def_name, "Apparel_Bare");
            }
            other => panic!("expected MalformedApparel, got {:?}", other),
        }
    }

    #[test]
    fn test_apparel_without_apparel_properties_fails() {
        let mut def = ItemDef::apparel("Apparel_Odd", "odd", vec![]);
        def.apparel = None;
        let odd = Item::new(ItemId(3), Arc::new(def));
        assert!(matches!(
            GroupedInventory::new(vec![], vec![odd], vec![]),
            Err(InventoryError::MalformedApparel { .. })
        ));
    }

    #[test]
    fn test_wrong_category_rejected() {
        let result = GroupedInventory::new(vec![misc(1, "Canteen")], vec![], vec![]);
        assert!(matches!(
            result,
            Err(InventoryError::CategoryMismatch {
                expected: ItemCategory::Weapon,
                found: ItemCategory::Miscellaneous,
                ..
            })
        ));
    }

    #[test]
    fn test_ordered_list_reflects_field_replacement() {
        let mut inventory = GroupedInventory::new(
            vec![weapon(1, "Sword")],
            vec![apparel(2, "Hat", 5)],
            vec![misc(3, "Canteen")],
        )
        .expect("well-formed input");

        inventory.apparels = vec![apparel(4, "Boots", 3), apparel(5, "Parka", 10)];
        assert_eq!(labels(&inventory), vec!["Sword", "Boots", "Parka", "Canteen"]);
        assert_eq!(inventory.len(), 4);
    }

    #[test]
    fn test_counts_and_category_lookup() {
        let inventory = GroupedInventory::new(
            vec![weapon(1, "Sword")],
            vec![apparel(2, "Hat", 5), apparel(3, "Coat", 10)],
            vec![],
        )
        .expect("well-formed input");

        assert_eq!(
            inventory.counts(),
            CategoryCounts {
                weapons: 1,
                apparels: 2,
                miscellaneous: 0
            }
        );
        assert_eq!(inventory.counts().total(), 3);
        assert_eq!(inventory.category_of(ItemId(2)), Some(ItemCategory::Apparel));
        assert_eq!(inventory.category_of(ItemId(1)), Some(ItemCategory::Weapon));
        assert_eq!(inventory.category_of(ItemId(42)), None);
    }

    #[test]
    fn test_multi_group_apparel_sorts_by_first_group() {
        let parka = Item::new(
            ItemId(1),
            Arc::new(ItemDef::apparel(
                "Parka",
                "Parka",
                vec![BodyPartGroupDef::new("Legs", 8), BodyPartGroupDef::new("Torso", 10)],
            )),
        );
        let shirt = apparel(2, "Shirt", 9);
        let inventory = GroupedInventory::new(vec![], vec![parka, shirt], vec![]).expect("valid");
        assert_eq!(labels(&inventory), vec!["Shirt", "Parka"]);
    }
}
