pub mod course;
pub mod course_outline;
pub mod material;
pub mod question;
pub use course::CourseRecord;
pub use course_outline::CourseOutline;
pub use material::FormattedMaterial;
pub use question::{AnswerReview, Question};
