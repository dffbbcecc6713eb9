//! Candidate filtering and per-category selection

use closet_domain::{Category, Garment, Occasion};

/// How well a garment's formality fits an occasion
///
/// Ordered best first, so the minimum over candidates is the pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Fit {
    /// Declared formality equals the occasion
    Exact,

    /// No declared formality
    Wildcard,
}

/// Rate a garment for an occasion
///
/// `None` when the garment declares a different formality: it is not a
/// candidate in any category.
pub(crate) fn fit(garment: &Garment, occasion: Occasion) -> Option<Fit> {
    match garment.formality {
        None => Some(Fit::Wildcard),
        Some(formality) if formality.suits(occasion) => Some(Fit::Exact),
        Some(_) => None,
    }
}

/// Best candidate in one category
///
/// Better fit wins; among equal fits the earliest garment in the snapshot
/// (first added) wins.
pub(crate) fn pick(
    snapshot: &[Garment],
    category: Category,
    occasion: Occasion,
) -> Option<(&Garment, Fit)> {
    snapshot
        .iter()
        .filter(|g| g.category == category)
        .filter_map(|g| fit(g, occasion).map(|f| (g, f)))
        .min_by_key(|(_, f)| *f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use closet_domain::{Formality, GarmentId};

    fn garment(name: &str, category: Category, formality: Option<Formality>) -> Garment {
        Garment {
            id: GarmentId::new(),
            name: name.to_string(),
            category,
            formality,
            image_reference: None,
        }
    }

    #[test]
    fn test_fit_by_declared_formality() {
        let blazer = garment("Blazer", Category::Top, Some(Formality::Business));
        assert_eq!(fit(&blazer, Occasion::Business), Some(Fit::Exact));
        assert_eq!(fit(&blazer, Occasion::Casual), None);

        let plain = garment("Plain tee", Category::Top, None);
        assert_eq!(fit(&plain, Occasion::Formal), Some(Fit::Wildcard));
    }

    #[test]
    fn test_mismatch_excluded_in_every_category() {
        for category in Category::ALL {
            let item = garment("Item", category, Some(Formality::Formal));
            assert_eq!(fit(&item, Occasion::Casual), None, "{category} should be excluded");
            assert_eq!(fit(&item, Occasion::Formal), Some(Fit::Exact));
        }
    }

    #[test]
    fn test_pick_skips_earlier_mismatched_shoes() {
        let snapshot = vec![
            garment("Patent oxfords", Category::Shoes, Some(Formality::Formal)),
            garment("Canvas shoes", Category::Shoes, None),
        ];
        let (chosen, fit) = pick(&snapshot, Category::Shoes, Occasion::Casual).unwrap();
        assert_eq!(chosen.name, "Canvas shoes");
        assert_eq!(fit, Fit::Wildcard);
    }

    #[test]
    fn test_pick_mismatched_accessory_only_is_none() {
        let snapshot = vec![garment("Bow tie", Category::Accessory, Some(Formality::Formal))];
        assert!(pick(&snapshot, Category::Accessory, Occasion::Casual).is_none());
    }

    #[test]
    fn test_pick_prefers_exact_over_earlier_wildcard() {
        let snapshot = vec![
            garment("Plain tee", Category::Top, None),
            garment("Polo", Category::Top, Some(Formality::Casual)),
        ];
        let (chosen, fit) = pick(&snapshot, Category::Top, Occasion::Casual).unwrap();
        assert_eq!(chosen.name, "Polo");
        assert_eq!(fit, Fit::Exact);
    }

    #[test]
    fn test_pick_ties_go_to_first_added() {
        let snapshot = vec![
            garment("First", Category::Bottom, Some(Formality::Casual)),
            garment("Second", Category::Bottom, Some(Formality::Casual)),
        ];
        let (chosen, _) = pick(&snapshot, Category::Bottom, Occasion::Casual).unwrap();
        assert_eq!(chosen.name, "First");
    }

    #[test]
    fn test_pick_ignores_other_categories() {
        let snapshot = vec![garment("Tee", Category::Top, None)];
        assert!(pick(&snapshot, Category::Bottom, Occasion::Casual).is_none());
    }
}
