//! Reviews

use jiff::civil::Date;

use crate::products::ProductId;

/// A customer review of one product. Read-only feed data.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    /// Reviewer display name
    pub author: String,

    /// Initials shown when no avatar image is available
    pub initials: String,

    /// Star rating, 0–5
    pub rating: u8,

    /// Date the review was posted
    pub posted_on: Date,

    /// Free-text body
    pub body: String,

    /// The product this review concerns
    pub product: ProductId,
}

/// Reviews concerning one product, in feed order.
pub fn for_product(reviews: &[Review], id: ProductId) -> impl Iterator<Item = &Review> {
    reviews.iter().filter(move |review| review.product == id)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn review(author: &str, product: u32) -> Review {
        Review {
            author: author.to_string(),
            initials: "AB".to_string(),
            rating: 5,
            posted_on: date(2024, 11, 15),
            body: "Great value.".to_string(),
            product: ProductId::new(product),
        }
    }

    #[test]
    fn for_product_filters_by_product_id() {
        let reviews = [review("A", 1), review("B", 2), review("C", 1)];

        let authors: Vec<&str> = for_product(&reviews, ProductId::new(1))
            .map(|review| review.author.as_str())
            .collect();

        assert_eq!(authors, ["A", "C"]);
    }

    #[test]
    fn for_product_with_no_match_is_empty() {
        let reviews = [review("A", 1)];

        assert_eq!(for_product(&reviews, ProductId::new(9)).count(), 0);
    }
}
