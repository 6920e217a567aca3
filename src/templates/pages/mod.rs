pub mod full_data;
pub mod home;
pub mod submit;
pub mod two_week;
pub mod user_summary;

pub use full_data::full_data_page;
pub use home::home_page;
pub use submit::submit_page;
pub use two_week::two_week_page;
pub use user_summary::user_summary_page;
