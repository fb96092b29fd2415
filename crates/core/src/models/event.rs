use serde::{Deserialize, Serialize};

/// Category tag of a scheduled itinerary event.
///
/// The set is closed for styling purposes; tags the renderer has no
/// dedicated styling for fall back to `Other`, which is also the
/// deserialization catch-all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Transport,
    Food,
    Sight,
    Shopping,
    Relax,
    #[default]
    #[serde(other)]
    Other,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Transport => write!(f, "transport"),
            EventCategory::Food => write!(f, "food"),
            EventCategory::Sight => write!(f, "sight"),
            EventCategory::Shopping => write!(f, "shopping"),
            EventCategory::Relax => write!(f, "relax"),
            EventCategory::Other => write!(f, "other"),
        }
    }
}

/// Display descriptor for an event category: icon tag plus the color
/// tokens the timeline renderer applies to the event card.
///
/// The core computes all presentation data — the frontend only renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventStyle {
    /// Icon tag (lucide naming, e.g., "utensils", "camera")
    pub icon: &'static str,
    pub color: &'static str,
    pub background: &'static str,
    pub border: &'static str,
    /// Timeline dot color for the event's marker
    pub marker: &'static str,
}

const FOOD_STYLE: EventStyle = EventStyle {
    icon: "utensils",
    color: "text-orange-600",
    background: "bg-orange-50",
    border: "border-orange-200",
    marker: "bg-orange-400",
};

const SIGHT_STYLE: EventStyle = EventStyle {
    icon: "camera",
    color: "text-red-700",
    background: "bg-white",
    border: "border-red-100",
    marker: "bg-red-600",
};

const SHOPPING_STYLE: EventStyle = EventStyle {
    icon: "shopping-bag",
    color: "text-pink-600",
    background: "bg-pink-50",
    border: "border-pink-200",
    marker: "bg-pink-400",
};

const RELAX_STYLE: EventStyle = EventStyle {
    icon: "moon",
    color: "text-indigo-600",
    background: "bg-indigo-50",
    border: "border-indigo-200",
    marker: "bg-indigo-400",
};

const DEFAULT_STYLE: EventStyle = EventStyle {
    icon: "map-pin",
    color: "text-stone-600",
    background: "bg-white",
    border: "border-stone-200",
    marker: "bg-red-600",
};

impl EventCategory {
    /// Look up the display descriptor for this category.
    /// Transport legs render through their own badge path and share the
    /// default descriptor here.
    #[must_use]
    pub fn style(self) -> &'static EventStyle {
        match self {
            EventCategory::Food => &FOOD_STYLE,
            EventCategory::Sight => &SIGHT_STYLE,
            EventCategory::Shopping => &SHOPPING_STYLE,
            EventCategory::Relax => &RELAX_STYLE,
            EventCategory::Transport | EventCategory::Other => &DEFAULT_STYLE,
        }
    }
}

/// Pick the badge icon for a transport leg from keywords in its title.
#[must_use]
pub fn transport_icon(title: &str) -> &'static str {
    if title.contains("飛機") {
        "plane"
    } else if title.contains("巴士") {
        "bus"
    } else if title.contains("走") {
        "footprints"
    } else {
        "train"
    }
}

/// A single scheduled activity within a day's timeline.
///
/// Identity is by `id` (unique across all days). Position within the
/// day's event sequence is significant and is what the reorder
/// operations act on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryEvent {
    pub id: String,

    /// Time label as displayed (e.g., "09:00"); informational only
    pub time: String,

    pub title: String,

    #[serde(default)]
    pub category: EventCategory,

    /// Short must-see/must-eat callout shown as a tag chip
    #[serde(default)]
    pub highlight: Option<String>,

    /// One-line annotation (used by transport legs)
    #[serde(default)]
    pub note: Option<String>,

    /// Longer free-text guide notes
    #[serde(default)]
    pub guide: Option<String>,
}

impl ItineraryEvent {
    pub fn new(
        id: impl Into<String>,
        time: impl Into<String>,
        title: impl Into<String>,
        category: EventCategory,
    ) -> Self {
        Self {
            id: id.into(),
            time: time.into(),
            title: title.into(),
            category,
            highlight: None,
            note: None,
            guide: None,
        }
    }

    pub fn with_highlight(mut self, highlight: impl Into<String>) -> Self {
        self.highlight = Some(highlight.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_guide(mut self, guide: impl Into<String>) -> Self {
        self.guide = Some(guide.into());
        self
    }

    /// Tag-chip text: the highlight with its "必吃：/必買：/必看："
    /// prefix stripped.
    #[must_use]
    pub fn highlight_label(&self) -> Option<String> {
        self.highlight.as_deref().map(|h| {
            h.replace("必吃：", "")
                .replace("必買：", "")
                .replace("必看：", "")
        })
    }

    /// Transport legs have no place to navigate to; everything else does.
    #[must_use]
    pub fn is_navigable(&self) -> bool {
        self.category != EventCategory::Transport
    }
}
