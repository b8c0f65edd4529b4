pub mod home;
pub mod liked;
pub mod results;

pub use home::home_page;
pub use liked::{liked_estates, liked_page};
pub use results::{search_page, ResultViewer};
