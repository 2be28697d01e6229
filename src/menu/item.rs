use crate::core::context::RequestContext;
use crate::core::error::NavError;
use crate::menu::badge::{Badge, BadgeSlot, Visibility};
use serde_json::{Map, Value as JsonValue};
use std::fmt;
use std::sync::Arc;

/// A navigable leaf entry.
#[derive(Clone)]
pub struct MenuItem {
    label: String,
    url: Option<String>,
    icon: Option<String>,
    badge: BadgeSlot,
    visibility: Option<Visibility>,
    meta: Map<String, JsonValue>,
}

impl MenuItem {
    pub fn make(label: impl Into<String>, url: Option<&str>) -> Result<Self, NavError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(NavError::invalid("menu item label cannot be empty or whitespace"));
        }
        Ok(Self {
            label,
            url: url.map(str::to_string),
            icon: None,
            badge: BadgeSlot::default(),
            visibility: None,
            meta: Map::new(),
        })
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.set_url(url);
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.set_icon(icon);
        self
    }

    pub fn with_badge(mut self, badge: impl Into<Badge>, badge_type: Option<&str>) -> Self {
        self.set_badge(badge, badge_type);
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.set_meta(key, value);
        self
    }

    pub fn visible_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&RequestContext) -> bool + Send + Sync + 'static,
    {
        self.visibility = Some(Arc::new(predicate));
        self
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    pub fn set_icon(&mut self, icon: impl Into<String>) -> &mut Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn set_badge(&mut self, badge: impl Into<Badge>, badge_type: Option<&str>) -> &mut Self {
        self.badge.set(badge.into(), badge_type.map(str::to_string));
        self
    }

    pub fn set_meta(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> &mut Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn badge_type(&self) -> Option<&str> {
        self.badge.badge_type.as_deref()
    }

    pub fn meta(&self) -> &Map<String, JsonValue> {
        &self.meta
    }

    pub fn resolve_badge(&self, ctx: Option<&RequestContext>) -> Option<JsonValue> {
        self.badge.resolve(ctx)
    }

    pub fn is_visible(&self, ctx: &RequestContext) -> bool {
        self.visibility.as_ref().is_none_or(|p| p(ctx))
    }

    pub fn to_value(&self, ctx: Option<&RequestContext>) -> JsonValue {
        serde_json::json!({
            "label": self.label,
            "url": self.url,
            "icon": self.icon,
            "badge": self.resolve_badge(ctx),
            "badgeType": self.badge.badge_type,
            "meta": self.meta,
        })
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("label", &self.label)
            .field("url", &self.url)
            .field("icon", &self.icon)
            .field("badge", &self.badge)
            .field("has_visibility", &self.visibility.is_some())
            .field("meta", &self.meta)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_label_is_rejected() {
        assert!(matches!(
            MenuItem::make("", None),
            Err(NavError::InvalidArgument(_))
        ));
        match MenuItem::make("   ", Some("/x")) {
            Err(NavError::InvalidArgument(msg)) => assert!(msg.contains("empty or whitespace")),
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_to_value_shape_with_defaults() {
        let item = MenuItem::make("Dashboard", Some("/admin")).expect("item");
        let v = item.to_value(None);
        assert_eq!(v["label"], "Dashboard");
        assert_eq!(v["url"], "/admin");
        assert!(v["icon"].is_null());
        assert!(v["badge"].is_null());
        assert!(v["badgeType"].is_null());
        assert_eq!(v["meta"], serde_json::json!({}));
    }

    #[test]
    fn test_fluent_setters_chain() {
        let item = MenuItem::make("Orders", None)
            .expect("item")
            .with_url("/admin/orders")
            .with_icon("heroicon-o-shopping-bag")
            .with_badge(12, Some("warning"))
            .with_meta("resource", "order");
        let v = item.to_value(None);
        assert_eq!(v["url"], "/admin/orders");
        assert_eq!(v["icon"], "heroicon-o-shopping-bag");
        assert_eq!(v["badge"], 12);
        assert_eq!(v["badgeType"], "warning");
        assert_eq!(v["meta"]["resource"], "order");
    }

    #[test]
    fn test_visibility_defaults_true_and_uses_predicate() {
        let ctx = RequestContext::new().with_attr("admin", false);
        let open = MenuItem::make("Home", None).expect("item");
        assert!(open.is_visible(&ctx));

        let guarded = MenuItem::make("Users", None)
            .expect("item")
            .visible_when(|c| c.get_bool("admin"));
        assert!(!guarded.is_visible(&ctx));
        assert!(guarded.is_visible(&RequestContext::new().with_attr("admin", true)));
    }

    #[test]
    fn test_unset_badge_resolves_none() {
        let item = MenuItem::make("Home", None).expect("item");
        assert!(item.resolve_badge(None).is_none());
    }
}
