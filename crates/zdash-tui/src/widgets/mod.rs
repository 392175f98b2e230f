//! Custom widget components

mod footer;
mod header;
mod info_card;
mod language_menu;
pub mod modal_overlay;
mod modules_modal;
mod status_badge;

pub use footer::Footer;
pub use header::MainHeader;
pub use info_card::InfoCard;
pub use language_menu::LanguageMenu;
pub use modules_modal::ModulesModal;
pub use status_badge::{StatusBadge, StatusCard};
