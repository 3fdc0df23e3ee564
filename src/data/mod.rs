pub mod backend;
pub(crate) mod http;
pub mod repositories;

pub use backend::Backend;
pub use repositories::{HostedRepository, RestRepository};
