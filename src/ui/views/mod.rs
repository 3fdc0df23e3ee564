mod categories;
mod home;
mod keywords;
mod todos;

pub use categories::CategoriesView;
pub use home::HomeView;
pub use keywords::KeywordsView;
pub use todos::TodosView;
