pub(crate) mod id;

pub mod article;
pub mod digest;
pub mod keyword;
pub mod todo;

pub use article::{impact_rank, Article, ArticleId, ImpactLevel};
pub use digest::{Digest, FoundArticle};
pub use keyword::{Keyword, KeywordId, NewKeyword};
pub use todo::{NewTodo, Todo, TodoId, TodoPatch};
