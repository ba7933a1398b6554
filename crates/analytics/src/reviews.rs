//! Customer reviews on a listing page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use agentmart_core::UserId;

/// Reviews shown before the list is expanded.
pub const COLLAPSED_REVIEWS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub user_id: UserId,
    pub user_name: String,
    /// 1 to 5 stars.
    pub rating: u8,
    pub comment: String,
    pub date: DateTime<Utc>,
    /// Reviewer bought the listing.
    pub verified: bool,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewSummary {
    /// `None` when there are no reviews.
    pub average_rating: Option<f64>,
    pub review_count: usize,
    pub verified_count: usize,
}

impl ReviewSummary {
    pub fn from_reviews<'a, I>(reviews: I) -> Self
    where
        I: IntoIterator<Item = &'a Review>,
    {
        let mut summary = ReviewSummary::default();
        let mut stars = 0u64;
        for review in reviews {
            summary.review_count += 1;
            stars += u64::from(review.rating.clamp(1, 5));
            if review.verified {
                summary.verified_count += 1;
            }
        }
        summary.average_rating =
            (summary.review_count > 0).then(|| stars as f64 / summary.review_count as f64);
        summary
    }
}

/// Review list state: collapsed to the first few until expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewList {
    reviews: Vec<Review>,
    show_all: bool,
}

impl ReviewList {
    pub fn new(reviews: Vec<Review>) -> Self {
        Self {
            reviews,
            show_all: false,
        }
    }

    pub fn summary(&self) -> ReviewSummary {
        ReviewSummary::from_reviews(&self.reviews)
    }

    pub fn displayed(&self) -> &[Review] {
        if self.show_all {
            &self.reviews
        } else {
            &self.reviews[..self.reviews.len().min(COLLAPSED_REVIEWS)]
        }
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
    }

    /// Label of the expand/collapse control; `None` when everything fits.
    pub fn toggle_label(&self) -> Option<String> {
        if self.reviews.len() <= COLLAPSED_REVIEWS {
            None
        } else if self.show_all {
            Some("Show Less".to_string())
        } else {
            Some(format!("Show All {} Reviews", self.reviews.len()))
        }
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        self.reviews
            .is_empty()
            .then_some("No reviews yet. Be the first to share your experience!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn review(n: u8, rating: u8, verified: bool) -> Review {
        Review {
            id: format!("r{n}"),
            user_id: UserId::new(),
            user_name: format!("user {n}"),
            rating,
            comment: "useful".to_string(),
            date: Utc.with_ymd_and_hms(2024, 1, u32::from(n), 9, 0, 0).unwrap(),
            verified,
        }
    }

    #[test]
    fn summary_averages_and_counts_verified() {
        let reviews = [review(1, 5, true), review(2, 4, false), review(3, 3, true)];
        let summary = ReviewSummary::from_reviews(&reviews);
        assert_eq!(summary.average_rating, Some(4.0));
        assert_eq!(summary.review_count, 3);
        assert_eq!(summary.verified_count, 2);
        assert_eq!(ReviewSummary::from_reviews(&[]).average_rating, None);
    }

    #[test]
    fn list_collapses_to_first_three() {
        let mut list = ReviewList::new((1..=5).map(|n| review(n, 5, false)).collect());
        assert_eq!(list.displayed().len(), 3);
        assert_eq!(list.displayed()[0].id, "r1");
        assert_eq!(list.toggle_label().as_deref(), Some("Show All 5 Reviews"));

        list.toggle_show_all();
        assert_eq!(list.displayed().len(), 5);
        assert_eq!(list.toggle_label().as_deref(), Some("Show Less"));
    }

    #[test]
    fn short_and_empty_lists() {
        let list = ReviewList::new(vec![review(1, 4, true)]);
        assert_eq!(list.displayed().len(), 1);
        assert_eq!(list.toggle_label(), None);
        assert_eq!(list.empty_message(), None);

        assert!(ReviewList::default().empty_message().is_some());
    }
}
