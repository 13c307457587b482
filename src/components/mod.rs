//! UI Components
//!
//! Pages and reusable Leptos components.

mod text_field;
mod nav_bar;
mod notice_banner;
mod login_page;
mod home_page;
mod settings_page;
mod user_dialog;
mod user_table;

pub use text_field::TextField;
pub use nav_bar::NavBar;
pub use notice_banner::NoticeBanner;
pub use login_page::LoginPage;
pub use home_page::HomePage;
pub use settings_page::SettingsPage;
pub use user_dialog::UserDialog;
pub use user_table::UserDataPage;
