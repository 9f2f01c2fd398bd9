pub mod dataset;
pub mod error;
pub mod field;
pub mod item;

pub use dataset::{Dataset, Transaction, UniqueItemCounts};
pub use error::SpecError;
pub use field::{CodeRange, ColumnSpan, FieldKind, FieldSpec};
pub use item::Item;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_name_is_uppercased() {
        let item = Item::new("sex", "male");
        assert_eq!(item.as_str(), "SEX_IS_MALE");
    }

    #[test]
    fn transaction_items_are_name_ordered() {
        let txn = Transaction::new(
            1,
            vec![
                Item::new("SCORE", "[20-32]"),
                Item::new("RACE", "OTHERS"),
                Item::new("SEX", "MALE"),
            ],
        );
        let names: Vec<&str> = txn.items.iter().map(Item::as_str).collect();
        assert_eq!(
            names,
            vec!["RACE_IS_OTHERS", "SCORE_IS_[20-32]", "SEX_IS_MALE"]
        );
    }

    #[test]
    fn item_serializes_transparently() {
        let item = Item::new("RACE", "OTHERS");
        let json = serde_json::to_string(&item).expect("serialize item");
        assert_eq!(json, "\"RACE_IS_OTHERS\"");
        let round: Item = serde_json::from_str(&json).expect("deserialize item");
        assert_eq!(round, item);
    }
}
