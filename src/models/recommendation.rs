use super::BookRecord;

/// A recommended catalog row with the score it was ranked by
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation<'a> {
    pub score: f32,
    pub book: &'a BookRecord,
}

impl<'a> Recommendation<'a> {
    pub fn title(&self) -> &'a str {
        &self.book.title
    }
}
