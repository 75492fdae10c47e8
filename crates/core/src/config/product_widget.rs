//! Home-screen product widget settings.

use super::ConfigDomain;
use crate::prefs::{Preferences, PreferencesEdit};
use crate::types::{DisplayCompleted, FontSize, WidgetTheme};

pub mod keys {
    use crate::prefs::PrefKey;
    use crate::types::{DisplayCompleted, FontSize, WidgetTheme};

    pub const WIDGET_THEME: PrefKey<WidgetTheme> = PrefKey::new("widget_theme");
    pub const FONT_SIZE: PrefKey<FontSize> = PrefKey::new("font_size");
    pub const DISPLAY_COMPLETED: PrefKey<DisplayCompleted> = PrefKey::new("display_completed");
    pub const COMPLETED_WITH_CHECKBOX: PrefKey<bool> = PrefKey::new("completed_with_checkbox");
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductWidgetConfig {
    pub widget_theme: WidgetTheme,
    pub font_size: FontSize,
    pub display_completed: DisplayCompleted,
    pub completed_with_checkbox: bool,
}

impl ConfigDomain for ProductWidgetConfig {
    const STORE_NAME: &'static str = "product_widget";

    const KEYS: &'static [&'static str] = &[
        keys::WIDGET_THEME.name(),
        keys::FONT_SIZE.name(),
        keys::DISPLAY_COMPLETED.name(),
        keys::COMPLETED_WITH_CHECKBOX.name(),
    ];

    fn read(prefs: &Preferences) -> Self {
        let d = Self::default();
        Self {
            widget_theme: prefs.get_or(keys::WIDGET_THEME, d.widget_theme),
            font_size: prefs.get_or(keys::FONT_SIZE, d.font_size),
            display_completed: prefs.get_or(keys::DISPLAY_COMPLETED, d.display_completed),
            completed_with_checkbox: prefs
                .get_or(keys::COMPLETED_WITH_CHECKBOX, d.completed_with_checkbox),
        }
    }

    fn write(&self, edit: &mut PreferencesEdit) {
        edit.set(keys::WIDGET_THEME, &self.widget_theme)
            .set(keys::FONT_SIZE, &self.font_size)
            .set(keys::DISPLAY_COMPLETED, &self.display_completed)
            .set(keys::COMPLETED_WITH_CHECKBOX, &self.completed_with_checkbox);
    }
}
