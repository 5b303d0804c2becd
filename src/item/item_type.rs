use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Unique identifier for a single item instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Semantic category an item is grouped under in the overview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Weapon,
    Apparel,
    Miscellaneous,
}

impl ItemCategory {
    /// Categories in display precedence
    pub const ALL: [ItemCategory; 3] = [
        ItemCategory::Weapon,
        ItemCategory::Apparel,
        ItemCategory::Miscellaneous,
    ];
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemCategory::Weapon => "weapon",
            ItemCategory::Apparel => "apparel",
            ItemCategory::Miscellaneous => "miscellaneous",
        };
        f.write_str(name)
    }
}

/// A body part group an apparel covers (torso, head, hands...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyPartGroupDef {
    pub def_name: String,
    /// Higher values are listed first
    pub list_order: i32,
}

impl BodyPartGroupDef {
    pub fn new(def_name: impl Into<String>, list_order: i32) -> Self {
        Self {
            def_name: def_name.into(),
            list_order,
        }
    }
}

/// Apparel-only properties of an item definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApparelProperties {
    /// Covered groups; the first entry is the primary group
    #[serde(default)]
    pub body_part_groups: Vec<BodyPartGroupDef>,
}

/// Shared definition of an item kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDef {
    pub def_name: String,
    pub label: String,
    pub category: ItemCategory,
    #[serde(default)]
    pub apparel: Option<ApparelProperties>,
}

impl ItemDef {
    pub fn weapon(def_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            def_name: def_name.into(),
            label: label.into(),
            category: ItemCategory::Weapon,
            apparel: None,
        }
    }

    pub fn apparel(
        def_name: impl Into<String>,
        label: impl Into<String>,
        body_part_groups: Vec<BodyPartGroupDef>,
    ) -> Self {
        Self {
            def_name: def_name.into(),
            label: label.into(),
            category: ItemCategory::Apparel,
            apparel: Some(ApparelProperties { body_part_groups }),
        }
    }

    pub fn miscellaneous(def_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            def_name: def_name.into(),
            label: label.into(),
            category: ItemCategory::Miscellaneous,
            apparel: None,
        }
    }

    /// Primary body part group, if this def declares any
    pub fn primary_body_part_group(&self) -> Option<&BodyPartGroupDef> {
        self.apparel
            .as_ref()
            .and_then(|apparel| apparel.body_part_groups.first())
    }
}

/// A possession held by a character
#[derive(Debug, Clone)]
pub struct Item {
    pub id: ItemId,
    pub def: Arc<ItemDef>,
    pub stack_count: u32,
}

impl Item {
    pub fn new(id: ItemId, def: Arc<ItemDef>) -> Self {
        Self {
            id,
            def,
            stack_count: 1,
        }
    }

    pub fn with_stack_count(mut self, stack_count: u32) -> Self {
        self.stack_count = stack_count;
        self
    }

    pub fn category(&self) -> ItemCategory {
        self.def.category
    }

    pub fn label(&self) -> &str {
        &self.def.label
    }

    /// Sort key used when ordering apparel
    pub fn primary_list_order(&self) -> Option<i32> {
        self.def.primary_body_part_group().map(|group| group.list_order)
    }
}

/// Items compare by identity, not by definition
impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}
