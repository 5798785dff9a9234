//! Top-level view selection

/// The currently displayed top-level view.
///
/// Selecting a tab is an unconditional overwrite; there is no history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    /// Product catalog with search and the reviews feed.
    #[default]
    Catalog,

    /// Order history.
    Orders,

    /// Customer profile and favourites.
    Profile,
}

impl Tab {
    /// All tabs, in display order.
    pub const ALL: [Tab; 3] = [Tab::Catalog, Tab::Orders, Tab::Profile];

    /// Display label for the tab bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tab::Catalog => "Catalog",
            Tab::Orders => "Orders",
            Tab::Profile => "Profile",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_the_default_tab() {
        assert_eq!(Tab::default(), Tab::Catalog);
    }

    #[test]
    fn all_lists_each_tab_once_in_display_order() {
        assert_eq!(Tab::ALL, [Tab::Catalog, Tab::Orders, Tab::Profile]);
    }

    #[test]
    fn selection_is_a_plain_overwrite() {
        let mut active = Tab::default();
        assert_eq!(active, Tab::Catalog);

        active = Tab::Orders;
        assert_eq!(active, Tab::Orders);

        active = Tab::Profile;
        assert_eq!(active, Tab::Profile);

        active = Tab::Catalog;
        assert_eq!(active, Tab::Catalog);
    }

    #[test]
    fn labels_match_the_tab_bar() {
        let labels: Vec<&str> = Tab::ALL.iter().map(|tab| tab.label()).collect();

        assert_eq!(labels, ["Catalog", "Orders", "Profile"]);
    }
}
