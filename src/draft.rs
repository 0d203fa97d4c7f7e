//! Idea Draft Validation
//!
//! Turns raw form fields into a `NewIdea`, with the same length limits the
//! backend enforces so the user sees problems before a round trip.

use thiserror::Error;

use crate::format::parse_coords;
use crate::models::{Category, NewIdea};

pub const TITLE_MIN_CHARS: usize = 5;
pub const TITLE_MAX_CHARS: usize = 500;
pub const DESCRIPTION_MIN_CHARS: usize = 10;

/// Raw form contents
#[derive(Debug, Clone, Default)]
pub struct DraftFields {
    pub title: String,
    pub description: String,
    pub category: String,
    pub coords_text: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Название должно содержать от 5 до 500 символов")]
    TitleLength,
    #[error("Описание должно содержать не менее 10 символов")]
    DescriptionTooShort,
    #[error("Выберите категорию")]
    MissingCategory,
    #[error("Укажите место на карте или выберите адрес")]
    MissingLocation,
}

pub fn build_new_idea(fields: &DraftFields) -> Result<NewIdea, DraftError> {
    let title = fields.title.trim();
    let title_len = title.chars().count();
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&title_len) {
        return Err(DraftError::TitleLength);
    }

    let description = fields.description.trim();
    if description.chars().count() < DESCRIPTION_MIN_CHARS {
        return Err(DraftError::DescriptionTooShort);
    }

    let category = Category::from_key(&fields.category).ok_or(DraftError::MissingCategory)?;
    let coords = parse_coords(&fields.coords_text).ok_or(DraftError::MissingLocation)?;

    Ok(NewIdea {
        title: title.to_string(),
        description: description.to_string(),
        category,
        latitude: coords.lat,
        longitude: coords.lon,
        address: fields.address.trim().to_string(),
        photo_urls: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> DraftFields {
        DraftFields {
            title: "  Новая площадка  ".into(),
            description: "Детская площадка во дворе".into(),
            category: "sport".into(),
            coords_text: "54.006000, 86.636000".into(),
            address: "ул. Ленина, 5".into(),
        }
    }

    #[test]
    fn test_valid_draft() {
        let idea = build_new_idea(&valid()).unwrap();
        assert_eq!(idea.title, "Новая площадка");
        assert_eq!(idea.category, Category::Sport);
        assert_eq!((idea.latitude, idea.longitude), (54.006, 86.636));
        assert!(idea.photo_urls.is_empty());
    }

    #[test]
    fn test_title_limits_count_chars() {
        let mut f = valid();
        f.title = "Парк".into();
        assert_eq!(build_new_idea(&f), Err(DraftError::TitleLength));
        f.title = "Парки".into();
        assert!(build_new_idea(&f).is_ok());
        f.title = "я".repeat(501);
        assert_eq!(build_new_idea(&f), Err(DraftError::TitleLength));
    }

    #[test]
    fn test_short_description() {
        let mut f = valid();
        f.description = "коротко".into();
        assert_eq!(build_new_idea(&f), Err(DraftError::DescriptionTooShort));
    }

    #[test]
    fn test_missing_category_and_location() {
        let mut f = valid();
        f.category = String::new();
        assert_eq!(build_new_idea(&f), Err(DraftError::MissingCategory));

        let mut f = valid();
        f.coords_text = "Кликните на карте".into();
        assert_eq!(build_new_idea(&f), Err(DraftError::MissingLocation));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DraftError::TitleLength.to_string(),
            "Название должно содержать от 5 до 500 символов"
        );
    }
}
