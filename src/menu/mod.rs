use serde::{Deserialize, Serialize};

/// Visibility state of the navigation menu. The menu starts hidden and a
/// single gesture flips it; nothing else touches this state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuVisibility {
    Hidden,
    Visible,
}

impl MenuVisibility {
    /// Flip to the other state. Toggling twice restores the original state.
    pub fn toggle(&mut self) {
        *self = match self {
            MenuVisibility::Hidden => MenuVisibility::Visible,
            MenuVisibility::Visible => MenuVisibility::Hidden,
        };
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, MenuVisibility::Hidden)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuVisibility::Hidden => "hidden",
            MenuVisibility::Visible => "visible",
        }
    }
}

impl Default for MenuVisibility {
    fn default() -> Self {
        MenuVisibility::Hidden
    }
}

impl std::fmt::Display for MenuVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_by_default() {
        let menu = MenuVisibility::default();
        assert!(menu.is_hidden());
    }

    #[test]
    fn test_toggle_shows() {
        let mut menu = MenuVisibility::default();
        menu.toggle();
        assert_eq!(menu, MenuVisibility::Visible);
    }

    #[test]
    fn test_double_toggle_is_identity() {
        for start in [MenuVisibility::Hidden, MenuVisibility::Visible] {
            let mut menu = start;
            menu.toggle();
            menu.toggle();
            assert_eq!(menu, start);
        }
    }
}
