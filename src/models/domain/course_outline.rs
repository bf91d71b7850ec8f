use serde::{Deserialize, Serialize};

/// Course outline pulled out of a free-text model response.
///
/// Every field has a zero value (empty string, 0, empty list) which stands in
/// for a field the response did not carry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CourseOutline {
    pub title: String,
    pub description: String,
    pub duration: u32, // hours
    pub chapters: Vec<String>,
}

impl CourseOutline {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.description.is_empty()
            && self.duration == 0
            && self.chapters.is_empty()
    }
}
