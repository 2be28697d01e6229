//! User-menu customization hook.
//!
//! The host registers at most one callback on a [`UserMenu`] and keeps the
//! object in its navigation config. Each resolution seeds a fresh base menu
//! with the "Sign out" entry and hands it to the callback.

use crate::core::context::RequestContext;
use crate::core::error::NavError;
use crate::menu::item::MenuItem;
use crate::menu::root::{Menu, MenuEntry};
use std::fmt;
use std::sync::Arc;

pub const SIGN_OUT_LABEL: &str = "Sign out";
pub const SIGN_OUT_URL: &str = "/logout";

pub type UserMenuCallback = Arc<dyn Fn(&RequestContext, &mut Menu) -> Option<Menu> + Send + Sync>;

#[derive(Clone, Default)]
pub struct UserMenu {
    callback: Option<UserMenuCallback>,
}

impl UserMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the customization callback, replacing any previous one.
    pub fn register<F>(&mut self, callback: F) -> &mut Self
    where
        F: Fn(&RequestContext, &mut Menu) -> Option<Menu> + Send + Sync + 'static,
    {
        self.callback = Some(Arc::new(callback));
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.callback = None;
        self
    }

    pub fn has_custom_user_menu(&self) -> bool {
        self.callback.is_some()
    }

    pub fn default_entry() -> Result<MenuItem, NavError> {
        Ok(MenuItem::make(SIGN_OUT_LABEL, Some(SIGN_OUT_URL))?.with_meta("default", true))
    }

    /// Resolve the user menu for one request.
    ///
    /// `Ok(None)` means nothing is registered and the host's own default
    /// applies.
    pub fn resolve(&self, ctx: &RequestContext) -> Result<Option<Menu>, NavError> {
        let Some(callback) = &self.callback else {
            tracing::trace!("no user menu callback registered");
            return Ok(None);
        };

        let mut base = Menu::default();
        base.append(Self::default_entry()?);

        let menu = callback(ctx, &mut base).unwrap_or(base);

        if let Some(bad) = menu.iter().find(|e| !matches!(e, MenuEntry::Item(_))) {
            tracing::debug!(kind = bad.kind(), label = bad.label(), "rejected user menu entry");
            return Err(NavError::invalid(format!(
                "user menu only supports item entries, got {} '{}'",
                bad.kind(),
                bad.label()
            )));
        }

        tracing::debug!(entries = menu.count(), "resolved user menu");
        Ok(Some(menu))
    }
}

impl fmt::Debug for UserMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserMenu")
            .field("registered", &self.callback.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::group::MenuGroup;

    #[test]
    fn test_unregistered_resolves_none() {
        let um = UserMenu::new();
        assert!(!um.has_custom_user_menu());
        assert!(um.resolve(&RequestContext::new()).expect("resolve").is_none());
    }

    #[test]
    fn test_register_replaces_previous() {
        let mut um = UserMenu::new();
        um.register(|_, _| Some(Menu::default()));
        um.register(|_, _| None);
        let menu = um.resolve(&RequestContext::new()).expect("resolve").expect("menu");
        assert_eq!(menu.count(), 1);
    }

    #[test]
    fn test_group_entry_rejected_at_resolution() {
        let mut um = UserMenu::new();
        um.register(|_, menu| {
            menu.append(MenuGroup::make("Nope", vec![]).expect("group"));
            None
        });
        let err = um.resolve(&RequestContext::new()).unwrap_err();
        assert!(err.to_string().contains("user menu only supports item entries"));
    }
}
