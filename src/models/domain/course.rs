use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::CourseOutline;

/// Course document as stored in the courses collection.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CourseRecord {
    pub course_id: String,
    pub course_name: String,
    pub content: CourseOutline,
    #[serde(default)]
    pub modules: BTreeMap<String, Vec<String>>, // chapter name -> module names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CourseRecord {
    pub fn new(course_id: &str, course_name: &str, content: CourseOutline) -> Self {
        CourseRecord {
            course_id: course_id.to_string(),
            course_name: course_name.to_string(),
            content,
            modules: BTreeMap::new(),
            created_at: Some(Utc::now()),
        }
    }
}
