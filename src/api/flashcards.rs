use crate::{errors::ApiError, models::Flashcard, modules::http::HttpClient};

/// Legacy flashcard endpoints, no caching on top of them.
pub struct Flashcards<'a>(pub(super) &'a HttpClient);

impl Flashcards<'_> {
    pub async fn check_answer(&self, word: &str, translation: &str) -> Result<i64, ApiError> {
        self.0
            .get_segments(&["checkAnswer", word, translation])
            .await
    }

    pub async fn reload(&self) -> Result<Flashcard, ApiError> {
        self.0.get("/reloadFlashcard").await
    }
}
