// Template context structures for Askama templates, organized by domain.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{get_username, take_flash};
use crate::errors::AppError;

/// One entry in the top navigation.
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Common context shared by all authenticated pages.
/// Templates access these as `ctx.username`, `ctx.nav_items`, etc.
pub struct PageContext {
    pub username: String,
    pub avatar_initial: String,
    pub flash: Option<String>,
    pub nav_items: Vec<NavItem>,
    pub app_name: String,
    pub csrf_token: String,
}

const NAV: &[(&str, &str)] = &[
    ("/dashboard", "Home"),
    ("/sessions", "Sessions"),
    ("/members", "Members"),
    ("/karywalis", "Karywali"),
    ("/resolutions", "Resolutions"),
    ("/debates", "Debates"),
];

impl PageContext {
    pub fn build(
        session: &Session,
        app_name: &str,
        current_path: &str,
    ) -> Result<Self, AppError> {
        let username = get_username(session)?;
        let flash = take_flash(session);
        let csrf_token = csrf::get_or_create_token(session);
        let avatar_initial = username
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string();
        let nav_items = NAV
            .iter()
            .map(|(href, label)| NavItem {
                href,
                label,
                active: *href == current_path,
            })
            .collect();
        Ok(Self {
            username,
            avatar_initial,
            flash,
            nav_items,
            app_name: app_name.to_string(),
            csrf_token,
        })
    }
}

mod common;
mod debate;
mod listing;

pub use self::common::{DashboardTemplate, LoginTemplate};
pub use self::debate::{DebateDetailTemplate, DebateMergeTemplate};
pub use self::listing::{
    DebatesTemplate, KarywalisTemplate, MembersTemplate, ResolutionsTemplate, SessionsTemplate,
};
