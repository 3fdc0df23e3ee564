pub mod article_card;
pub mod sidebar;
pub mod status;

pub use article_card::article_card;
pub use sidebar::{Page, Sidebar};
pub use status::{error_banner, loading};
