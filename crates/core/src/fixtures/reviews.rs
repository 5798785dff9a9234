//! Review Fixtures

use jiff::civil::Date;
use serde::Deserialize;

use crate::{fixtures::FixtureError, products::ProductId, reviews::Review};

/// Wrapper for reviews in YAML
#[derive(Debug, Deserialize)]
pub struct ReviewsFixture {
    /// Reviews in feed order
    pub reviews: Vec<ReviewFixture>,
}

/// Review fixture from YAML
#[derive(Debug, Deserialize)]
pub struct ReviewFixture {
    /// Reviewer display name
    pub author: String,

    /// Avatar fallback initials
    pub initials: String,

    /// Star rating, 0–5
    pub rating: u8,

    /// Date posted, e.g. `"2024-11-15"`
    pub date: String,

    /// Free-text body
    pub text: String,

    /// The product this review concerns
    pub product: ProductId,
}

impl TryFrom<ReviewFixture> for Review {
    type Error = FixtureError;

    fn try_from(fixture: ReviewFixture) -> Result<Self, Self::Error> {
        if fixture.rating > 5 {
            return Err(FixtureError::InvalidReviewRating {
                author: fixture.author,
                rating: fixture.rating,
            });
        }

        let posted_on: Date = fixture.date.parse()?;

        Ok(Review {
            author: fixture.author,
            initials: fixture.initials,
            rating: fixture.rating,
            posted_on,
            body: fixture.text,
            product: fixture.product,
        })
    }
}

/// Parse a review feed from reviews fixture YAML.
///
/// # Errors
///
/// Returns an error when parsing fails or a rating or date is invalid.
pub fn reviews_from_str(yaml: &str) -> Result<Vec<Review>, FixtureError> {
    let fixture: ReviewsFixture = serde_norway::from_str(yaml)?;

    fixture.reviews.into_iter().map(Review::try_from).collect()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn reviews_from_str_parses_the_feed() -> TestResult {
        let yaml = r#"
reviews:
  - author: "Alexandra K."
    initials: "AK"
    rating: 5
    date: "2024-11-15"
    text: "Fast delivery, great camera."
    product: 1
  - author: "Maria S."
    initials: "MS"
    rating: 4
    date: "2024-11-12"
    text: "Clean sound for the price."
    product: 2
"#;

        let reviews = reviews_from_str(yaml)?;

        assert_eq!(reviews.len(), 2);

        let first = reviews.first().ok_or("missing first review")?;

        assert_eq!(first.author, "Alexandra K.");
        assert_eq!(first.initials, "AK");
        assert_eq!(first.rating, 5);
        assert_eq!(first.posted_on, date(2024, 11, 15));
        assert_eq!(first.product, ProductId::new(1));

        Ok(())
    }

    #[test]
    fn reviews_from_str_rejects_ratings_above_five() {
        let yaml = r#"
reviews:
  - author: "A."
    initials: "A"
    rating: 6
    date: "2024-11-15"
    text: "!"
    product: 1
"#;

        let result = reviews_from_str(yaml);

        assert!(matches!(
            result,
            Err(FixtureError::InvalidReviewRating { rating: 6, .. })
        ));
    }

    #[test]
    fn reviews_from_str_rejects_bad_dates() {
        let yaml = r#"
reviews:
  - author: "A."
    initials: "A"
    rating: 4
    date: "last tuesday"
    text: "!"
    product: 1
"#;

        let result = reviews_from_str(yaml);

        assert!(matches!(result, Err(FixtureError::Date(_))));
    }
}
