use crate::app::actions::Action;

/// Value of the `data-action` attribute on clickable elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTag {
    Detail,
    Share,
    Order,
}

impl ActionTag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Detail => "detail",
            Self::Share => "share",
            Self::Order => "order",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "detail" => Some(Self::Detail),
            "share" => Some(Self::Share),
            "order" => Some(Self::Order),
            _ => None,
        }
    }
}

/// What the host read off a clicked element inside the catalog container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    /// Set when the click landed inside a product card.
    pub card: Option<CardContext>,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub action: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardContext {
    /// Product id of the card's first tagged button.
    pub first_product_id: Option<String>,
}

impl ClickTarget {
    pub fn in_card(first_product_id: Option<&str>) -> Self {
        Self {
            card: Some(CardContext {
                first_product_id: first_product_id.map(str::to_string),
            }),
            ..Self::default()
        }
    }

    pub fn with_product(mut self, product_id: &str) -> Self {
        self.product_id = Some(product_id.to_string());
        self
    }

    pub fn with_name(mut self, product_name: &str) -> Self {
        self.product_name = Some(product_name.to_string());
        self
    }

    pub fn with_action(mut self, tag: &str) -> Self {
        self.action = Some(tag.to_string());
        self
    }
}

/// Maps a catalog click onto an action. Clicks outside cards resolve to nothing.
pub fn resolve_click(target: &ClickTarget) -> Option<Action> {
    let card = target.card.as_ref()?;

    let Some(product_id) = target.product_id.as_deref().filter(|id| !id.is_empty()) else {
        return card
            .first_product_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| Action::OpenDetail(id.to_string()));
    };

    match target.action.as_deref().and_then(ActionTag::parse) {
        Some(ActionTag::Share) => Some(Action::Share {
            product_id: product_id.to_string(),
            product_name: target.product_name.clone(),
        }),
        _ => Some(Action::OpenDetail(product_id.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_card_is_ignored() {
        let target = ClickTarget::default().with_product("A1").with_action("share");
        assert_eq!(resolve_click(&target), None);
    }

    #[test]
    fn test_share_button() {
        let target = ClickTarget::in_card(Some("A1"))
            .with_product("A1")
            .with_name("白帶魚")
            .with_action("share");

        assert_eq!(
            resolve_click(&target),
            Some(Action::Share {
                product_id: "A1".to_string(),
                product_name: Some("白帶魚".to_string()),
            })
        );
    }

    #[test]
    fn test_detail_button_and_image() {
        let button = ClickTarget::in_card(Some("A1"))
            .with_product("A1")
            .with_action("detail");
        let image = ClickTarget::in_card(Some("A1")).with_product("A1");

        assert_eq!(resolve_click(&button), Some(Action::OpenDetail("A1".to_string())));
        assert_eq!(resolve_click(&image), Some(Action::OpenDetail("A1".to_string())));
    }

    #[test]
    fn test_untagged_element_falls_back_to_card() {
        let title = ClickTarget::in_card(Some("B2"));
        let bare_card = ClickTarget::in_card(None);

        assert_eq!(resolve_click(&title), Some(Action::OpenDetail("B2".to_string())));
        assert_eq!(resolve_click(&bare_card), None);
    }

    #[test]
    fn test_action_tag_round_trip() {
        for tag in [ActionTag::Detail, ActionTag::Share, ActionTag::Order] {
            assert_eq!(ActionTag::parse(tag.as_str()), Some(tag));
        }
        assert_eq!(ActionTag::parse("buy"), None);
    }
}
