use chrono::{DateTime, Utc};

/// A persisted item row
///
/// The only entity managed by this service. `id` and `created_at` are
/// assigned by the database on insert and never change afterwards;
/// `updated_at` stays null until the first update.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for creating an item
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
}

/// Field-wise patch for updating an item
///
/// Each `Some` field overwrites the corresponding field on the target
/// record; each `None` field leaves it untouched.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ItemPatch {
    /// Applies the present fields to `item` in place
    pub fn apply(self, item: &mut Item) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(description) = self.description {
            item.description = Some(description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> Item {
        Item {
            id: 1,
            name: "Widget".to_string(),
            description: Some("A widget".to_string()),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn patch_with_only_description_leaves_name_unchanged() {
        let mut item = sample_item();

        let patch = ItemPatch {
            name: None,
            description: Some("Updated".to_string()),
        };
        patch.apply(&mut item);

        assert_eq!(item.name, "Widget");
        assert_eq!(item.description.as_deref(), Some("Updated"));
    }

    #[test]
    fn patch_with_only_name_leaves_description_unchanged() {
        let mut item = sample_item();

        let patch = ItemPatch {
            name: Some("Widget2".to_string()),
            description: None,
        };
        patch.apply(&mut item);

        assert_eq!(item.name, "Widget2");
        assert_eq!(item.description.as_deref(), Some("A widget"));
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut item = sample_item();
        let before = item.clone();

        ItemPatch::default().apply(&mut item);

        assert_eq!(item, before);
    }
}
