use crate::core::context::RequestContext;
use crate::menu::group::MenuGroup;
use crate::menu::item::MenuItem;
use crate::menu::section::{MenuSection, SectionEntry};
use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Top-level navigation entry.
#[derive(Debug, Clone)]
pub enum MenuEntry {
    Item(MenuItem),
    Group(MenuGroup),
    Section(MenuSection),
}

impl MenuEntry {
    pub fn label(&self) -> &str {
        match self {
            MenuEntry::Item(i) => i.label(),
            MenuEntry::Group(g) => g.label(),
            MenuEntry::Section(s) => s.label(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            MenuEntry::Item(_) => "item",
            MenuEntry::Group(_) => "group",
            MenuEntry::Section(_) => "section",
        }
    }

    pub fn as_item(&self) -> Option<&MenuItem> {
        match self {
            MenuEntry::Item(i) => Some(i),
            _ => None,
        }
    }

    pub fn to_value(&self, ctx: Option<&RequestContext>) -> JsonValue {
        match self {
            MenuEntry::Item(i) => i.to_value(ctx),
            MenuEntry::Group(g) => g.to_value(ctx),
            MenuEntry::Section(s) => s.to_value(ctx),
        }
    }

    fn render(&self, ctx: &RequestContext) -> Option<JsonValue> {
        match self {
            MenuEntry::Item(i) => i.is_visible(ctx).then(|| i.to_value(Some(ctx))),
            MenuEntry::Group(g) => g.render(ctx),
            MenuEntry::Section(s) => s.render(ctx),
        }
    }
}

impl From<MenuItem> for MenuEntry {
    fn from(item: MenuItem) -> Self {
        MenuEntry::Item(item)
    }
}

impl From<MenuGroup> for MenuEntry {
    fn from(group: MenuGroup) -> Self {
        MenuEntry::Group(group)
    }
}

impl From<MenuSection> for MenuEntry {
    fn from(section: MenuSection) -> Self {
        MenuEntry::Section(section)
    }
}

/// Either kind of collapsible container, borrowed from a menu tree.
#[derive(Debug, Clone, Copy)]
pub enum ContainerRef<'a> {
    Group(&'a MenuGroup),
    Section(&'a MenuSection),
}

impl ContainerRef<'_> {
    pub fn label(&self) -> &str {
        match self {
            ContainerRef::Group(g) => g.label(),
            ContainerRef::Section(s) => s.label(),
        }
    }

    pub fn is_collapsed(&self) -> bool {
        match self {
            ContainerRef::Group(g) => g.is_collapsed(),
            ContainerRef::Section(s) => s.is_collapsed(),
        }
    }
}

/// Ordered navigation tree, built fresh for each request.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    entries: Vec<MenuEntry>,
}

impl Menu {
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }

    pub fn append(&mut self, entry: impl Into<MenuEntry>) -> &mut Self {
        self.entries.push(entry.into());
        self
    }

    pub fn prepend(&mut self, entry: impl Into<MenuEntry>) -> &mut Self {
        self.entries.insert(0, entry.into());
        self
    }

    pub fn add<I, E>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = E>,
        E: Into<MenuEntry>,
    {
        self.entries.extend(entries.into_iter().map(Into::into));
        self
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut Vec<MenuEntry> {
        &mut self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuEntry> {
        self.entries.iter()
    }

    /// Number of leaf items anywhere in the tree.
    pub fn item_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| match e {
                MenuEntry::Item(_) => 1,
                MenuEntry::Group(g) => g.items().len(),
                MenuEntry::Section(s) => s
                    .items()
                    .iter()
                    .map(|c| match c {
                        SectionEntry::Item(_) => 1,
                        SectionEntry::Group(g) => g.items().len(),
                    })
                    .sum(),
            })
            .sum()
    }

    /// Every group and section in the tree, depth-first.
    pub fn containers(&self) -> Vec<ContainerRef<'_>> {
        let mut out = Vec::new();
        for entry in &self.entries {
            match entry {
                MenuEntry::Item(_) => {}
                MenuEntry::Group(g) => out.push(ContainerRef::Group(g)),
                MenuEntry::Section(s) => {
                    out.push(ContainerRef::Section(s));
                    for child in s.items() {
                        if let SectionEntry::Group(g) = child {
                            out.push(ContainerRef::Group(g));
                        }
                    }
                }
            }
        }
        out
    }

    pub fn find_by_state_id(&self, state_id: &str) -> Option<ContainerRef<'_>> {
        self.containers().into_iter().find(|c| match c {
            ContainerRef::Group(g) => g.get_state_id() == state_id,
            ContainerRef::Section(s) => s.get_state_id() == state_id,
        })
    }

    /// Apply persisted client-side collapse state (`stateId -> collapsed`).
    ///
    /// Only collapsible containers are touched. Returns how many were set.
    pub fn apply_collapsed_state(&mut self, state: &HashMap<String, bool>) -> usize {
        let mut applied = 0;
        for entry in &mut self.entries {
            match entry {
                MenuEntry::Item(_) => {}
                MenuEntry::Group(g) => applied += usize::from(g.apply_persisted(state)),
                MenuEntry::Section(s) => {
                    applied += usize::from(s.apply_persisted(state));
                    for child in s.items_mut() {
                        if let SectionEntry::Group(g) = child {
                            applied += usize::from(g.apply_persisted(state));
                        }
                    }
                }
            }
        }
        tracing::debug!(applied, "applied persisted collapse state");
        applied
    }

    pub fn to_value(&self, ctx: Option<&RequestContext>) -> JsonValue {
        JsonValue::Array(self.entries.iter().map(|e| e.to_value(ctx)).collect())
    }

    /// Serialize only what is visible for `ctx`.
    pub fn render(&self, ctx: &RequestContext) -> JsonValue {
        JsonValue::Array(self.entries.iter().filter_map(|e| e.render(ctx)).collect())
    }
}

impl<'a> IntoIterator for &'a Menu {
    type Item = &'a MenuEntry;
    type IntoIter = std::slice::Iter<'a, MenuEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Menu {
    type Item = MenuEntry;
    type IntoIter = std::vec::IntoIter<MenuEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<E: Into<MenuEntry>> FromIterator<E> for Menu {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Menu::new(iter.into_iter().map(Into::into).collect())
    }
}

impl Serialize for Menu {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value(None).serialize(serializer)
    }
}
