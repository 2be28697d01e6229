use crate::core::context::RequestContext;
use crate::core::error::NavError;
use crate::menu::badge::Badge;
use crate::menu::container::ContainerState;
use crate::menu::group::MenuGroup;
use crate::menu::item::MenuItem;
use crate::menu::state_id::SECTION_PREFIX;
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Child of a section. Sections never nest inside sections.
#[derive(Debug, Clone)]
pub enum SectionEntry {
    Item(MenuItem),
    Group(MenuGroup),
}

impl SectionEntry {
    pub fn to_value(&self, ctx: Option<&RequestContext>) -> JsonValue {
        match self {
            SectionEntry::Item(i) => i.to_value(ctx),
            SectionEntry::Group(g) => g.to_value(ctx),
        }
    }

    fn render(&self, ctx: &RequestContext) -> Option<JsonValue> {
        match self {
            SectionEntry::Item(i) => i.is_visible(ctx).then(|| i.to_value(Some(ctx))),
            SectionEntry::Group(g) => g.render(ctx),
        }
    }
}

impl From<MenuItem> for SectionEntry {
    fn from(item: MenuItem) -> Self {
        SectionEntry::Item(item)
    }
}

impl From<MenuGroup> for SectionEntry {
    fn from(group: MenuGroup) -> Self {
        SectionEntry::Group(group)
    }
}

/// Top-level collapsible container of items and groups.
#[derive(Debug, Clone)]
pub struct MenuSection {
    state: ContainerState,
    path: Option<String>,
    items: Vec<SectionEntry>,
}

impl MenuSection {
    pub fn make(label: impl Into<String>, items: Vec<SectionEntry>) -> Result<Self, NavError> {
        Ok(Self {
            state: ContainerState::new(SECTION_PREFIX, label.into(), "section")?,
            path: None,
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

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn push(&mut self, entry: impl Into<SectionEntry>) -> &mut Self {
        self.items.push(entry.into());
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

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn items(&self) -> &[SectionEntry] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Vec<SectionEntry> {
        &mut self.items
    }

    pub fn is_collapsible(&self) -> bool {
        self.state.collapsible
    }

    pub fn is_collapsed(&self) -> bool {
        self.state.effective_collapsed()
    }

    pub fn is_collapsed_flag(&self) -> bool {
        self.state.collapsed
    }

    pub fn get_state_id(&self) -> &str {
        self.state.state_id()
    }

    fn finish(&self, items: Vec<JsonValue>, ctx: Option<&RequestContext>) -> JsonValue {
        let mut map = self.state.to_map(items, ctx);
        map.insert(
            "path".into(),
            self.path.clone().map_or(JsonValue::Null, JsonValue::String),
        );
        JsonValue::Object(map)
    }

    pub fn to_value(&self, ctx: Option<&RequestContext>) -> JsonValue {
        let items = self.items.iter().map(|e| e.to_value(ctx)).collect();
        self.finish(items, ctx)
    }

    pub fn render(&self, ctx: &RequestContext) -> Option<JsonValue> {
        let items: Vec<JsonValue> = self.items.iter().filter_map(|e| e.render(ctx)).collect();
        if items.is_empty() && !self.items.is_empty() {
            tracing::trace!(state_id = self.get_state_id(), "section hidden: no visible entries");
            return None;
        }
        Some(self.finish(items, Some(ctx)))
    }
}
