//! One navigation-resolution pass: main menu plus user menu for a request.

use crate::core::context::RequestContext;
use crate::core::error::NavError;
use crate::menu::{Menu, UserMenu};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// What the presentation layer receives for a single request.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationPayload {
    pub menu: JsonValue,
    pub user_menu: Option<JsonValue>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
    /// Serialize hidden entries instead of filtering them out.
    pub include_hidden: bool,
}

/// Resolve `menu` and the user menu against `ctx`.
///
/// The user-menu registration is passed in explicitly; there is no
/// process-global hook.
pub fn resolve_navigation(
    menu: &Menu,
    user_menu: &UserMenu,
    ctx: &RequestContext,
    opts: ResolveOptions,
) -> Result<NavigationPayload, NavError> {
    let render = |m: &Menu| {
        if opts.include_hidden {
            m.to_value(Some(ctx))
        } else {
            m.render(ctx)
        }
    };

    let user = user_menu.resolve(ctx)?;
    Ok(NavigationPayload {
        menu: render(menu),
        user_menu: user.as_ref().map(render),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{MenuGroup, MenuItem};

    #[test]
    fn test_payload_without_user_menu() {
        let mut menu = Menu::default();
        menu.append(MenuItem::make("Home", Some("/")).expect("item"));
        let payload = resolve_navigation(
            &menu,
            &UserMenu::new(),
            &RequestContext::new(),
            ResolveOptions::default(),
        )
        .expect("resolve");
        assert_eq!(payload.menu.as_array().map(Vec::len), Some(1));
        assert!(payload.user_menu.is_none());

        let json = serde_json::to_value(&payload).expect("serialize");
        assert!(json["userMenu"].is_null());
    }

    #[test]
    fn test_include_hidden_keeps_invisible_items() {
        let mut menu = Menu::default();
        menu.append(MenuItem::make("Hidden", None).expect("item").visible_when(|_| false));
        let ctx = RequestContext::new();

        let filtered =
            resolve_navigation(&menu, &UserMenu::new(), &ctx, ResolveOptions::default())
                .expect("resolve");
        assert_eq!(filtered.menu, serde_json::json!([]));

        let all = resolve_navigation(
            &menu,
            &UserMenu::new(),
            &ctx,
            ResolveOptions { include_hidden: true },
        )
        .expect("resolve");
        assert_eq!(all.menu.as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_invalid_user_menu_fails_whole_resolution() {
        let mut um = UserMenu::new();
        um.register(|_, m| {
            m.append(MenuGroup::make("G", vec![]).expect("group"));
            None
        });
        let result = resolve_navigation(
            &Menu::default(),
            &um,
            &RequestContext::new(),
            ResolveOptions::default(),
        );
        assert!(matches!(result, Err(NavError::InvalidArgument(_))));
    }
}
