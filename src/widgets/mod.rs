// Reusable UI widgets

pub mod button;
pub mod dialog;
pub mod flip_card;
pub mod logo;
pub mod menu;
pub mod text_input;
pub mod toast;

pub use button::{Button, BUTTON_HEIGHT};
pub use dialog::{Dialog, DialogVariant};
pub use flip_card::{FlipCardWidget, CARD_HEIGHT};
pub use logo::RemoraLogo;
pub use menu::{Menu, MenuItem, MenuState};
pub use text_input::{TextInputWidget, TextInputWidgetExt};
pub use toast::{Toast, ToastManager, ToastWidget};
