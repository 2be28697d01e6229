use crate::core::context::RequestContext;
use crate::core::error::NavError;
use crate::menu::badge::Badge;
use crate::menu::container::ContainerState;
use crate::menu::item::MenuItem;
use crate::menu::state_id::GROUP_PREFIX;
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Ordered, optionally collapsible list of items.
#[derive(Debug, Clone)]
pub struct MenuGroup {
    state: ContainerState,
    items: Vec<MenuItem>,
}

impl MenuGroup {
    pub fn make(label: impl Into<String>, items: Vec<MenuItem>) -> Result<Self, NavError> {
        Ok(Self {
            state: ContainerState::new(GROUP_PREFIX, label.into(), "group")?,
            items,
        })
    }

    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.state.collapsible = collapsible;
        self
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.state.collapsed = collapsed;
        self
    }

    pub fn state_id(mut self, id: impl Into<String>) -> Self {
        self.state.set_state_id(id.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.state.icon = Some(icon.into());
        self
    }

    pub fn with_badge(mut self, badge: impl Into<Badge>, badge_type: Option<&str>) -> Self {
        self.state.set_badge(badge.into(), badge_type);
        self
    }

    pub fn push(&mut self, item: MenuItem) -> &mut Self {
        self.items.push(item);
        self
    }

    pub fn set_collapsed(&mut self, collapsed: bool) -> &mut Self {
        self.state.collapsed = collapsed;
        self
    }

    pub(crate) fn apply_persisted(&mut self, persisted: &HashMap<String, bool>) -> bool {
        self.state.apply_persisted(persisted)
    }

    pub fn label(&self) -> &str {
        &self.state.label
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Vec<MenuItem> {
        &mut self.items
    }

    pub fn is_collapsible(&self) -> bool {
        self.state.collapsible
    }

    /// Collapsed as the presentation layer sees it.
    pub fn is_collapsed(&self) -> bool {
        self.state.effective_collapsed()
    }

    /// The raw flag, regardless of `collapsible`.
    pub fn is_collapsed_flag(&self) -> bool {
        self.state.collapsed
    }

    pub fn get_state_id(&self) -> &str {
        self.state.state_id()
    }

    pub fn to_value(&self, ctx: Option<&RequestContext>) -> JsonValue {
        let items = self.items.iter().map(|i| i.to_value(ctx)).collect();
        JsonValue::Object(self.state.to_map(items, ctx))
    }

    /// Like `to_value` but drops hidden items. A group whose items are all
    /// hidden renders as nothing.
    pub fn render(&self, ctx: &RequestContext) -> Option<JsonValue> {
        let items: Vec<JsonValue> = self
            .items
            .iter()
            .filter(|i| i.is_visible(ctx))
            .map(|i| i.to_value(Some(ctx)))
            .collect();
        if items.is_empty() && !self.items.is_empty() {
            tracing::trace!(state_id = self.get_state_id(), "group hidden: no visible items");
            return None;
        }
        Some(JsonValue::Object(self.state.to_map(items, Some(ctx))))
    }
}
