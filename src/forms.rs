//! Form drafts and their validation.
//!
//! A draft holds the raw strings typed into a form. `validate` turns it into
//! a creation payload or the set of fields to flag; the `submit_*` functions
//! only reach the network once validation passed.

use crate::api::{CatalogClient, Transport};
use crate::error::{Field, FieldErrors, SubmitError};
use crate::models::book::{Book, NewBook};
use crate::models::review::{NewReview, Rating, Review};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub description: String,
    pub year: String,
}

impl BookDraft {
    pub fn validate(&self) -> Result<NewBook, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.insert(Field::Title, "Title is required");
        }
        let author = self.author.trim();
        if author.is_empty() {
            errors.insert(Field::Author, "Author is required");
        }

        let year = match non_blank(&self.year) {
            None => None,
            Some(raw) => match raw.parse::<i32>() {
                Ok(year) => Some(year),
                Err(_) => {
                    errors.insert(Field::Year, "Year must be a whole number");
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewBook {
            title: title.to_string(),
            author: author.to_string(),
            description: non_blank(&self.description).map(str::to_string),
            year,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub book_id: String,
    pub rating: String,
    pub comment: String,
}

impl ReviewDraft {
    pub fn validate(&self) -> Result<NewReview, FieldErrors> {
        let mut errors = FieldErrors::new();

        let book_id = self.book_id.trim();
        if book_id.is_empty() {
            errors.insert(Field::Book, "Select a book");
        }

        let rating = match non_blank(&self.rating) {
            None => {
                errors.insert(Field::Rating, "Select a rating");
                None
            }
            Some(raw) => {
                let rating = raw.parse::<u8>().ok().and_then(Rating::new);
                if rating.is_none() {
                    errors.insert(Field::Rating, "Rating must be a whole number from 1 to 5");
                }
                rating
            }
        };

        match rating {
            Some(rating) if errors.is_empty() => Ok(NewReview {
                book_id: book_id.to_string(),
                rating,
                comment: non_blank(&self.comment).map(str::to_string),
            }),
            _ => Err(errors),
        }
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

/// Validates `draft` and creates the book. Invalid drafts never reach the
/// transport.
pub async fn submit_book<T: Transport>(
    client: &CatalogClient<T>,
    draft: &BookDraft,
) -> Result<Book, SubmitError> {
    let payload = draft.validate()?;
    Ok(client.create_book(&payload).await?)
}

/// Validates `draft` and creates the review.
pub async fn submit_review<T: Transport>(
    client: &CatalogClient<T>,
    draft: &ReviewDraft,
) -> Result<Review, SubmitError> {
    let payload = draft.validate()?;
    Ok(client.create_review(&payload).await?)
}
