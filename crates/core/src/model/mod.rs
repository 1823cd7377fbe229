mod answers;
mod catalog;
mod category;
pub mod feedback;
mod ids;
mod step;

pub use answers::{AnswerStore, AnswerValue};
pub use catalog::{CatalogError, Question, QuestionCatalog};
pub use category::{Category, DORMANT_RANGE, GROWING_RANGE};
pub use ids::{FREE_TEXT_MARKER, FieldName, FieldNameError, QuestionId};
pub use step::{Direction, StepChange, StepController};
