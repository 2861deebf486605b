//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod auth;
pub use auth::{use_api, use_auth, AuthProvider, AuthState, LogoutButton};

mod navbar;
pub use navbar::Navbar;

mod modal;
pub use modal::ModalOverlay;

mod post_card;
pub use post_card::PostCard;

mod category_select;
pub use category_select::CategorySelect;

mod login_form;
pub use login_form::LoginForm;

mod post_form;
pub use post_form::PostForm;

mod comments;
pub use comments::{CommentForm, CommentList};

pub mod format;
