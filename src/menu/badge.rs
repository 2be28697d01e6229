use crate::core::context::RequestContext;
use serde_json::Value as JsonValue;
use std::fmt;
use std::sync::Arc;

/// Supplier invoked on every resolution of a computed badge.
pub type BadgeSupplier = Arc<dyn Fn(Option<&RequestContext>) -> JsonValue + Send + Sync>;

/// Visibility predicate evaluated against the request context.
pub type Visibility = Arc<dyn Fn(&RequestContext) -> bool + Send + Sync>;

#[derive(Clone)]
pub enum Badge {
    Static(JsonValue),
    Computed(BadgeSupplier),
}

impl Badge {
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(Option<&RequestContext>) -> JsonValue + Send + Sync + 'static,
    {
        Badge::Computed(Arc::new(f))
    }

    pub fn resolve(&self, ctx: Option<&RequestContext>) -> JsonValue {
        match self {
            Badge::Static(v) => v.clone(),
            Badge::Computed(f) => f(ctx),
        }
    }
}

impl fmt::Debug for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Badge::Static(v) => f.debug_tuple("Static").field(v).finish(),
            Badge::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

impl From<JsonValue> for Badge {
    fn from(v: JsonValue) -> Self {
        Badge::Static(v)
    }
}

impl From<&str> for Badge {
    fn from(v: &str) -> Self {
        Badge::Static(JsonValue::String(v.to_string()))
    }
}

impl From<String> for Badge {
    fn from(v: String) -> Self {
        Badge::Static(JsonValue::String(v))
    }
}

macro_rules! static_badge_from {
    ($($t:ty),*) => {
        $(impl From<$t> for Badge {
            fn from(v: $t) -> Self {
                Badge::Static(JsonValue::from(v))
            }
        })*
    };
}

static_badge_from!(i32, i64, u32, u64, usize, bool);

/// Badge plus its presentation tag (`"danger"`, `"info"`, ...).
#[derive(Debug, Clone, Default)]
pub(crate) struct BadgeSlot {
    pub badge: Option<Badge>,
    pub badge_type: Option<String>,
}

impl BadgeSlot {
    pub fn set(&mut self, badge: Badge, badge_type: Option<String>) {
        self.badge = Some(badge);
        self.badge_type = badge_type;
    }

    pub fn resolve(&self, ctx: Option<&RequestContext>) -> Option<JsonValue> {
        self.badge.as_ref().map(|b| b.resolve(ctx))
    }
}
