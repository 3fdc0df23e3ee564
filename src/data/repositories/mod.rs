mod hosted_repository;
mod rest_repository;

pub use hosted_repository::{HostedRepository, ARTICLES_TABLE, KEYWORDS_TABLE, TODOS_TABLE};
pub use rest_repository::RestRepository;
