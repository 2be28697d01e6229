//! Declarative navigation config loaded from TOML.
//!
//! ```toml
//! [[entry]]
//! kind = "section"
//! label = "Content"
//! collapsible = true
//!
//!   [[entry.items]]
//!   label = "Posts"
//!   url = "/admin/posts"
//!
//! [[user_menu]]
//! label = "Profile"
//! url = "/admin/profile"
//! position = "prepend"
//! ```

use crate::core::error::NavError;
use crate::menu::{Badge, Menu, MenuEntry, MenuGroup, MenuItem, MenuSection, SectionEntry, UserMenu};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Item,
    Group,
    Section,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryDef {
    #[serde(default)]
    pub kind: EntryKind,
    pub label: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub badge: Option<JsonValue>,
    #[serde(default)]
    pub badge_type: Option<String>,
    #[serde(default)]
    pub collapsible: bool,
    #[serde(default)]
    pub collapsed: bool,
    #[serde(default)]
    pub state_id: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub meta: BTreeMap<String, JsonValue>,
    #[serde(default)]
    pub items: Vec<EntryDef>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Append,
    Prepend,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserMenuEntryDef {
    pub label: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub badge: Option<JsonValue>,
    #[serde(default)]
    pub badge_type: Option<String>,
    #[serde(default)]
    pub meta: BTreeMap<String, JsonValue>,
    #[serde(default)]
    pub position: Position,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavConfig {
    #[serde(default)]
    pub entry: Vec<EntryDef>,
    #[serde(default)]
    pub user_menu: Vec<UserMenuEntryDef>,
}

pub fn load_nav_config(path: &Path) -> Result<NavConfig, NavError> {
    if !path.exists() {
        return Err(NavError::NotFound(format!(
            "navigation config not found at {}",
            path.display()
        )));
    }
    let content = fs::read_to_string(path).map_err(NavError::IoError)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "loading navigation config");
    NavConfig::from_toml_str(&content)
}

impl NavConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, NavError> {
        toml::from_str(content).map_err(|e| NavError::ConfigError(e.to_string()))
    }

    pub fn build_menu(&self) -> Result<Menu, NavError> {
        let mut menu = Menu::default();
        for def in &self.entry {
            menu.append(build_entry(def)?);
        }
        tracing::debug!(entries = menu.count(), items = menu.item_count(), "built menu from config");
        Ok(menu)
    }

    /// A `UserMenu` that places the configured entries around "Sign out".
    ///
    /// With no `[[user_menu]]` entries nothing is registered.
    pub fn user_menu(&self) -> Result<UserMenu, NavError> {
        let mut user_menu = UserMenu::new();
        if self.user_menu.is_empty() {
            return Ok(user_menu);
        }

        let mut appended = Vec::new();
        let mut prepended = Vec::new();
        for def in &self.user_menu {
            let item = build_item(
                &def.label,
                def.url.as_deref(),
                def.icon.as_deref(),
                def.badge.as_ref(),
                def.badge_type.as_deref(),
                &def.meta,
            )?;
            match def.position {
                Position::Append => appended.push(item),
                Position::Prepend => prepended.push(item),
            }
        }

        user_menu.register(move |_, menu| {
            // reversed so prepended entries keep file order
            for item in prepended.iter().rev() {
                menu.prepend(item.clone());
            }
            menu.add(appended.iter().cloned());
            None
        });
        Ok(user_menu)
    }
}

fn build_item(
    label: &str,
    url: Option<&str>,
    icon: Option<&str>,
    badge: Option<&JsonValue>,
    badge_type: Option<&str>,
    meta: &BTreeMap<String, JsonValue>,
) -> Result<MenuItem, NavError> {
    let mut item = MenuItem::make(label, url)?;
    if let Some(icon) = icon {
        item.set_icon(icon);
    }
    if let Some(badge) = badge {
        item.set_badge(Badge::Static(badge.clone()), badge_type);
    }
    for (k, v) in meta {
        item.set_meta(k.clone(), v.clone());
    }
    Ok(item)
}

fn leaf(def: &EntryDef) -> Result<MenuItem, NavError> {
    if !def.items.is_empty() {
        return Err(NavError::ConfigError(format!(
            "item '{}' cannot have child items",
            def.label
        )));
    }
    build_item(
        &def.label,
        def.url.as_deref(),
        def.icon.as_deref(),
        def.badge.as_ref(),
        def.badge_type.as_deref(),
        &def.meta,
    )
}

fn build_group(def: &EntryDef) -> Result<MenuGroup, NavError> {
    let mut items = Vec::with_capacity(def.items.len());
    for child in &def.items {
        if child.kind != EntryKind::Item {
            return Err(NavError::ConfigError(format!(
                "group '{}' may only contain items",
                def.label
            )));
        }
        items.push(leaf(child)?);
    }
    let mut group = MenuGroup::make(def.label.as_str(), items)?
        .collapsible(def.collapsible)
        .collapsed(def.collapsed);
    if let Some(id) = &def.state_id {
        group = group.state_id(id.as_str());
    }
    if let Some(icon) = &def.icon {
        group = group.with_icon(icon.as_str());
    }
    if let Some(badge) = &def.badge {
        group = group.with_badge(Badge::Static(badge.clone()), def.badge_type.as_deref());
    }
    Ok(group)
}

fn build_section(def: &EntryDef) -> Result<MenuSection, NavError> {
    let mut items = Vec::with_capacity(def.items.len());
    for child in &def.items {
        let entry = match child.kind {
            EntryKind::Item => SectionEntry::Item(leaf(child)?),
            EntryKind::Group => SectionEntry::Group(build_group(child)?),
            EntryKind::Section => {
                return Err(NavError::ConfigError(format!(
                    "section '{}' cannot contain section '{}'",
                    def.label, child.label
                )));
            }
        };
        items.push(entry);
    }
    let mut section = MenuSection::make(def.label.as_str(), items)?
        .collapsible(def.collapsible)
        .collapsed(def.collapsed);
    if let Some(id) = &def.state_id {
        section = section.state_id(id.as_str());
    }
    if let Some(icon) = &def.icon {
        section = section.with_icon(icon.as_str());
    }
    if let Some(path) = &def.path {
        section = section.with_path(path.as_str());
    }
    if let Some(badge) = &def.badge {
        section = section.with_badge(Badge::Static(badge.clone()), def.badge_type.as_deref());
    }
    Ok(section)
}

fn build_entry(def: &EntryDef) -> Result<MenuEntry, NavError> {
    Ok(match def.kind {
        EntryKind::Item => MenuEntry::Item(leaf(def)?),
        EntryKind::Group => MenuEntry::Group(build_group(def)?),
        EntryKind::Section => MenuEntry::Section(build_section(def)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::RequestContext;

    const SAMPLE: &str = r#"
[[entry]]
label = "Dashboard"
url = "/admin"
icon = "heroicon-o-home"

[[entry]]
kind = "section"
label = "Shop"
path = "/admin/shop"
collapsible = true
collapsed = true
badge = 4
badge_type = "warning"

  [[entry.items]]
  label = "Orders"
  url = "/admin/orders"
  [entry.items.meta]
  resource = "order"

  [[entry.items]]
  kind = "group"
  label = "Catalog"
  state_id = "catalog"

    [[entry.items.items]]
    label = "Products"
    url = "/admin/products"

[[user_menu]]
label = "Profile"
url = "/admin/profile"
position = "prepend"

[[user_menu]]
label = "Settings"
url = "/admin/settings"
"#;

    #[test]
    fn test_build_menu_from_toml() {
        let cfg = NavConfig::from_toml_str(SAMPLE).expect("parse");
        let menu = cfg.build_menu().expect("build");
        assert_eq!(menu.count(), 2);
        assert_eq!(menu.item_count(), 3);

        let v = menu.to_value(None);
        assert_eq!(v[0]["icon"], "heroicon-o-home");
        assert_eq!(v[1]["stateId"], "menu_section_shop");
        assert_eq!(v[1]["collapsed"], true);
        assert_eq!(v[1]["badge"], 4);
        assert_eq!(v[1]["badgeType"], "warning");
        assert_eq!(v[1]["path"], "/admin/shop");
        assert_eq!(v[1]["items"][0]["meta"]["resource"], "order");
        assert_eq!(v[1]["items"][1]["stateId"], "catalog");
        assert_eq!(v[1]["items"][1]["items"][0]["label"], "Products");
    }

    #[test]
    fn test_user_menu_positions_around_sign_out() {
        let cfg = NavConfig::from_toml_str(SAMPLE).expect("parse");
        let um = cfg.user_menu().expect("user menu");
        assert!(um.has_custom_user_menu());
        let menu = um
            .resolve(&RequestContext::new())
            .expect("resolve")
            .expect("menu");
        let labels: Vec<&str> = menu.iter().map(MenuEntry::label).collect();
        assert_eq!(labels, vec!["Profile", "Sign out", "Settings"]);
    }

    #[test]
    fn test_empty_user_menu_registers_nothing() {
        let cfg = NavConfig::default();
        assert!(!cfg.user_menu().expect("user menu").has_custom_user_menu());
    }

    #[test]
    fn test_nested_section_is_config_error() {
        let raw = r#"
[[entry]]
kind = "section"
label = "Outer"
  [[entry.items]]
  kind = "section"
  label = "Inner"
"#;
        let cfg = NavConfig::from_toml_str(raw).expect("parse");
        assert!(matches!(cfg.build_menu(), Err(NavError::ConfigError(_))));
    }

    #[test]
    fn test_group_in_group_is_config_error() {
        let raw = r#"
[[entry]]
kind = "group"
label = "Outer"
  [[entry.items]]
  kind = "group"
  label = "Inner"
"#;
        let cfg = NavConfig::from_toml_str(raw).expect("parse");
        assert!(matches!(cfg.build_menu(), Err(NavError::ConfigError(_))));
    }

    #[test]
    fn test_empty_label_surfaces_invalid_argument() {
        let cfg = NavConfig::from_toml_str("[[entry]]\nlabel = \"\"\n").expect("parse");
        assert!(matches!(cfg.build_menu(), Err(NavError::InvalidArgument(_))));
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        assert!(matches!(
            NavConfig::from_toml_str("[[entry]\nlabel="),
            Err(NavError::ConfigError(_))
        ));
    }
}
