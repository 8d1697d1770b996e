pub mod card_list;
pub mod footer;
pub mod help_overlay;
pub mod sidebar;
pub mod top_bar;

pub use card_list::CardList;
pub use footer::Footer;
pub use help_overlay::HelpOverlay;
pub use sidebar::Sidebar;
pub use top_bar::TopBar;
