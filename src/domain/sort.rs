// src/domain/sort.rs

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Price,
    GardenArea,
    LivingArea,
    ModificationDate,
    CreationDate,
    DisappearanceDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascend,
    Descend,
}

/// `{field, order}` pair the backend orders results by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortField {
    /// Name used on the wire and in option values.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Price => "price",
            SortField::GardenArea => "gardenArea",
            SortField::LivingArea => "livingArea",
            SortField::ModificationDate => "modificationDate",
            SortField::CreationDate => "creationDate",
            SortField::DisappearanceDate => "disappearanceDate",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "price" => Some(SortField::Price),
            "gardenArea" => Some(SortField::GardenArea),
            "livingArea" => Some(SortField::LivingArea),
            "modificationDate" => Some(SortField::ModificationDate),
            "creationDate" => Some(SortField::CreationDate),
            "disappearanceDate" => Some(SortField::DisappearanceDate),
            _ => None,
        }
    }
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascend => "ascend",
            SortOrder::Descend => "descend",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ascend" => Some(SortOrder::Ascend),
            "descend" => Some(SortOrder::Descend),
            _ => None,
        }
    }
}

impl SortSpec {
    pub const fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Split a composite `"<field>-<order>"` value.
    pub fn from_value(value: &str) -> Option<Self> {
        let (field, order) = value.split_once('-')?;
        Some(Self::new(SortField::parse(field)?, SortOrder::parse(order)?))
    }

    pub fn value(&self) -> String {
        format!("{}-{}", self.field.as_str(), self.order.as_str())
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::new(SortField::ModificationDate, SortOrder::Descend)
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption {
    pub label: &'static str,
    pub spec: SortSpec,
}

#[derive(Debug)]
pub struct SortGroup {
    pub label: &'static str,
    pub options: &'static [SortOption],
}

const fn option(label: &'static str, field: SortField, order: SortOrder) -> SortOption {
    SortOption {
        label,
        spec: SortSpec::new(field, order),
    }
}

/// Every ordering the selector offers, grouped the way it is displayed.
pub const SORT_GROUPS: &[SortGroup] = &[
    SortGroup {
        label: "💰 Price",
        options: &[
            option("💰↑ cheapest", SortField::Price, SortOrder::Ascend),
            option("💰↓ most expensive", SortField::Price, SortOrder::Descend),
        ],
    },
    SortGroup {
        label: "🏡 ↔ Area",
        options: &[
            option("🌳↓ biggest gardens", SortField::GardenArea, SortOrder::Descend),
            option("🏠↓ biggest living area", SortField::LivingArea, SortOrder::Descend),
        ],
    },
    SortGroup {
        label: "📅 Dates",
        options: &[
            option("📅↓ modified recently", SortField::ModificationDate, SortOrder::Descend),
            option("📅↑ oldest (online since)", SortField::CreationDate, SortOrder::Ascend),
            option("📅↓ disappeared recently", SortField::DisappearanceDate, SortOrder::Descend),
        ],
    },
];

/// Look a composite value up in the offered set.
pub fn find_option(value: &str) -> Option<&'static SortOption> {
    SORT_GROUPS
        .iter()
        .flat_map(|g| g.options.iter())
        .find(|o| o.spec.value() == value)
}

/// What happened when the selector reported a value.
#[derive(Debug, PartialEq, Eq)]
pub enum Selection {
    Applied(SortSpec),
    Cleared,
    Unknown(String),
}

/// Handle a selector change: nothing selected leaves the sort alone, a known
/// option is decomposed and handed to `set_sort`.
pub fn select_sort(value: Option<&str>, set_sort: impl FnOnce(SortSpec)) -> Selection {
    let value = match value.map(str::trim) {
        None | Some("") => return Selection::Cleared,
        Some(v) => v,
    };

    match find_option(value) {
        Some(option) => {
            set_sort(option.spec);
            Selection::Applied(option.spec)
        }
        None => Selection::Unknown(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_ascend_decomposes() {
        let mut got = None;
        let outcome = select_sort(Some("price-ascend"), |s| got = Some(s));

        let expected = SortSpec::new(SortField::Price, SortOrder::Ascend);
        assert_eq!(got, Some(expected));
        assert_eq!(outcome, Selection::Applied(expected));
        assert_eq!(expected.field.as_str(), "price");
        assert_eq!(expected.order.as_str(), "ascend");
    }

    #[test]
    fn empty_selection_is_a_no_op() {
        let mut called = false;

        assert_eq!(select_sort(None, |_| called = true), Selection::Cleared);
        assert_eq!(select_sort(Some(""), |_| called = true), Selection::Cleared);
        assert!(!called);
    }

    #[test]
    fn values_outside_the_offered_set_are_rejected() {
        let mut called = false;

        // parses, but is not one of the options
        let outcome = select_sort(Some("price-sideways"), |_| called = true);
        assert_eq!(outcome, Selection::Unknown("price-sideways".into()));

        let outcome = select_sort(Some("gardenArea-ascend"), |_| called = true);
        assert_eq!(outcome, Selection::Unknown("gardenArea-ascend".into()));
        assert!(!called);
    }

    #[test]
    fn option_set_is_closed_and_round_trips() {
        let values: Vec<String> = SORT_GROUPS
            .iter()
            .flat_map(|g| g.options.iter())
            .map(|o| o.spec.value())
            .collect();

        assert_eq!(
            values,
            [
                "price-ascend",
                "price-descend",
                "gardenArea-descend",
                "livingArea-descend",
                "modificationDate-descend",
                "creationDate-ascend",
                "disappearanceDate-descend",
            ]
        );
        for v in &values {
            assert_eq!(SortSpec::from_value(v).map(|s| s.value()).as_ref(), Some(v));
        }
    }

    #[test]
    fn default_is_recently_modified() {
        assert_eq!(SortSpec::default().value(), "modificationDate-descend");
    }
}
