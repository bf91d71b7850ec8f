use async_trait::async_trait;
use mongodb::{
    bson::{doc, Document},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::CourseRecord};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn insert_course(&self, record: CourseRecord) -> AppResult<CourseRecord>;

    /// Stores `modules` under `module_name` on the course. Returns whether a
    /// course with that id exists; an unknown id changes nothing.
    async fn set_modules(
        &self,
        course_id: &str,
        module_name: &str,
        modules: &[String],
    ) -> AppResult<bool>;

    async fn find_by_course_id(&self, course_id: &str) -> AppResult<Option<CourseRecord>>;
}

pub struct MongoCourseRepository {
    collection: Collection<CourseRecord>,
}

impl MongoCourseRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for courses collection");

        let course_id_index = IndexModel::builder()
            .keys(doc! { "course_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("course_id".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(course_id_index).await?;

        log::info!("Successfully created indexes for courses collection");
        Ok(())
    }
}

/// Document path for one entry of the `modules` map. Dots and a leading `$`
/// would be read as path syntax, so they are replaced.
pub fn module_field_path(module_name: &str) -> String {
    let key = module_name.replace('.', "_");
    let key = match key.strip_prefix('$') {
        Some(rest) => format!("_{}", rest),
        None => key,
    };
    format!("modules.{}", key)
}

#[async_trait]
impl CourseRepository for MongoCourseRepository {
    async fn insert_course(&self, record: CourseRecord) -> AppResult<CourseRecord> {
        self.collection.insert_one(&record).await?;
        Ok(record)
    }

    async fn set_modules(
        &self,
        course_id: &str,
        module_name: &str,
        modules: &[String],
    ) -> AppResult<bool> {
        let mut fields = Document::new();
        fields.insert(module_field_path(module_name), modules.to_vec());

        let result = self
            .collection
            .update_one(doc! { "course_id": course_id }, doc! { "$set": fields })
            .await?;

        if result.matched_count == 0 {
            log::warn!("No course '{}' to attach modules to", course_id);
        }
        Ok(result.matched_count > 0)
    }

    async fn find_by_course_id(&self, course_id: &str) -> AppResult<Option<CourseRecord>> {
        let record = self
            .collection
            .find_one(doc! { "course_id": course_id })
            .await?;
        Ok(record)
    }
}
