pub mod navbar;
pub mod page;
pub mod pager;
pub mod search;

pub use navbar::Navbar;
pub use page::Page;
pub use pager::Pager;
pub use search::{ListingStatus, SearchBox};
