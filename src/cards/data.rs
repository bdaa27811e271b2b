//! Card data consumed by the pipeline.
//!
//! Card lookup itself (database keyed by card id) is an external collaborator;
//! this module only defines the resolved record and the per-component input
//! assembly that decides which asset key, literal text, or override each
//! themed component receives.

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// A resolved card record.
///
/// String fields carry lowercase identifiers as used by theme asset maps
/// (`rarity`, `card_class`, ...). Optional fields are `None` when the
/// corresponding component should not render at all: a hidden race, an
/// uncraftable rarity, no multi-class group.
pub struct CardData {
    /// Card identifier, also the portrait artwork file stem.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Lowercase card category, the layout key into the theme
    /// (`"minion"`, `"spell"`, `"weapon"`, `"hero"`).
    pub category: String,
    pub cost: i32,
    pub attack: i32,
    pub health: i32,
    pub durability: i32,
    /// Localized description text.
    pub description: String,
    /// Elite cards render the elite decoration component.
    pub elite: bool,
    /// Visible race name, `None` when hidden or absent.
    pub race: Option<String>,
    /// Craftable rarity key, `None` for uncraftable or core-set cards.
    pub rarity: Option<String>,
    /// Card set identifier.
    pub card_set: String,
    /// Whether the card's set is craftable; uncraftable sets draw no watermark.
    pub set_craftable: bool,
    /// Multi-class group key, if any.
    pub multi_class: Option<String>,
    /// Class key for the class decoration component.
    pub card_class: String,
}

impl CardData {
    /// Whether the card has a visible race, which offsets the set watermark.
    pub fn has_race(&self) -> bool {
        self.race.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// The themed component slots of a card layout.
///
/// `ALL` fixes the canonical declaration order; components with equal layers
/// paint in this order.
pub enum ComponentKind {
    Description,
    Elite,
    Health,
    Cost,
    Attack,
    Name,
    MultiClass,
    Race,
    Rarity,
    CardSet,
    ClassDecoration,
    Base,
    Portrait,
}

impl ComponentKind {
    /// Canonical declaration order used when collecting layout components.
    pub const ALL: [ComponentKind; 13] = [
        ComponentKind::Description,
        ComponentKind::Elite,
        ComponentKind::Health,
        ComponentKind::Cost,
        ComponentKind::Attack,
        ComponentKind::Name,
        ComponentKind::MultiClass,
        ComponentKind::Race,
        ComponentKind::Rarity,
        ComponentKind::CardSet,
        ComponentKind::ClassDecoration,
        ComponentKind::Base,
        ComponentKind::Portrait,
    ];

    /// Key of this component in theme layout JSON.
    pub fn theme_key(self) -> &'static str {
        match self {
            ComponentKind::Description => "description",
            ComponentKind::Elite => "elite",
            ComponentKind::Health => "health",
            ComponentKind::Cost => "cost",
            ComponentKind::Attack => "attack",
            ComponentKind::Name => "name",
            ComponentKind::MultiClass => "multiClass",
            ComponentKind::Race => "race",
            ComponentKind::Rarity => "rarity",
            ComponentKind::CardSet => "cardSet",
            ComponentKind::ClassDecoration => "classDecoration",
            ComponentKind::Base => "base",
            ComponentKind::Portrait => "portrait",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Per-component render inputs resolved from card data.
pub struct ComponentInputs {
    /// Asset key into the component's image asset map.
    pub key: Option<String>,
    /// Literal text for text/curve draws.
    pub text: Option<String>,
    /// Explicit asset path overriding the asset map (artwork-relative).
    pub override_asset: Option<String>,
}

impl ComponentInputs {
    fn keyed(key: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            ..Self::default()
        }
    }

    fn keyed_text(key: &str, text: impl Into<String>) -> Self {
        Self {
            key: Some(key.to_string()),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Resolve inputs for one component kind, or `None` when the component
    /// does not apply to this card (no error; the component is skipped).
    pub fn for_kind(card: &CardData, kind: ComponentKind) -> Option<Self> {
        match kind {
            ComponentKind::Name => Some(Self::keyed_text("default", card.name.clone())),
            ComponentKind::Elite => card.elite.then(|| Self::keyed("default")),
            ComponentKind::Rarity => card.rarity.as_deref().map(Self::keyed),
            ComponentKind::MultiClass => card.multi_class.as_deref().map(Self::keyed),
            ComponentKind::ClassDecoration => Some(Self::keyed(&card.card_class)),
            ComponentKind::Cost => Some(Self::keyed_text("default", card.cost.to_string())),
            ComponentKind::Health => {
                // Weapons show durability where minions show health.
                let value = if card.category == "weapon" {
                    card.durability
                } else {
                    card.health
                };
                Some(Self::keyed_text("default", value.to_string()))
            }
            ComponentKind::Attack => Some(Self::keyed_text("default", card.attack.to_string())),
            ComponentKind::Race => card
                .race
                .as_deref()
                .map(|race| Self::keyed_text("default", race)),
            ComponentKind::Portrait => Some(Self {
                override_asset: Some(format!("{}.png", card.id)),
                ..Self::default()
            }),
            ComponentKind::Base => Some(Self::keyed("default")),
            ComponentKind::Description => {
                Some(Self::keyed_text("default", card.description.clone()))
            }
            // No key or text; the card-set component draws through its
            // custom handler.
            ComponentKind::CardSet => Some(Self::default()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cards/data.rs"]
mod tests;
