//! Collapse state and presentation attributes shared by groups and sections.

use crate::core::context::RequestContext;
use crate::core::error::NavError;
use crate::menu::badge::{Badge, BadgeSlot};
use crate::menu::state_id;
use serde_json::{Map, Value as JsonValue};
use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub(crate) struct ContainerState {
    prefix: &'static str,
    pub label: String,
    pub collapsible: bool,
    pub collapsed: bool,
    pub icon: Option<String>,
    pub badge: BadgeSlot,
    explicit_state_id: Option<String>,
    derived_state_id: OnceLock<String>,
}

impl ContainerState {
    pub fn new(prefix: &'static str, label: String, kind: &str) -> Result<Self, NavError> {
        if label.trim().is_empty() {
            return Err(NavError::invalid(format!(
                "menu {kind} label cannot be empty or whitespace"
            )));
        }
        Ok(Self {
            prefix,
            label,
            collapsible: false,
            collapsed: false,
            icon: None,
            badge: BadgeSlot::default(),
            explicit_state_id: None,
            derived_state_id: OnceLock::new(),
        })
    }

    pub fn set_state_id(&mut self, id: String) {
        self.explicit_state_id = Some(id);
    }

    pub fn set_badge(&mut self, badge: Badge, badge_type: Option<&str>) {
        self.badge.set(badge, badge_type.map(str::to_string));
    }

    pub fn state_id(&self) -> &str {
        match &self.explicit_state_id {
            Some(id) => id,
            None => self
                .derived_state_id
                .get_or_init(|| state_id::derive_state_id(self.prefix, &self.label)),
        }
    }

    /// Collapsed is only reported when the container can actually collapse.
    pub fn effective_collapsed(&self) -> bool {
        self.collapsible && self.collapsed
    }

    /// Take the persisted collapsed flag for this container, if any.
    ///
    /// Non-collapsible containers ignore persisted state.
    pub fn apply_persisted(&mut self, persisted: &HashMap<String, bool>) -> bool {
        if !self.collapsible {
            return false;
        }
        match persisted.get(self.state_id()) {
            Some(&collapsed) => {
                self.collapsed = collapsed;
                true
            }
            None => false,
        }
    }

    pub fn to_map(&self, items: Vec<JsonValue>, ctx: Option<&RequestContext>) -> Map<String, JsonValue> {
        let mut map = Map::new();
        map.insert("label".into(), JsonValue::String(self.label.clone()));
        map.insert("items".into(), JsonValue::Array(items));
        map.insert("collapsible".into(), JsonValue::Bool(self.collapsible));
        map.insert("collapsed".into(), JsonValue::Bool(self.effective_collapsed()));
        map.insert("stateId".into(), JsonValue::String(self.state_id().to_string()));
        map.insert(
            "icon".into(),
            self.icon.clone().map_or(JsonValue::Null, JsonValue::String),
        );
        map.insert(
            "badge".into(),
            self.badge.resolve(ctx).unwrap_or(JsonValue::Null),
        );
        map.insert(
            "badgeType".into(),
            self.badge
                .badge_type
                .clone()
                .map_or(JsonValue::Null, JsonValue::String),
        );
        map
    }
}
