use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// Palette and typography applied at the application root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub mode: ThemeMode,
    pub background_default: String,
    pub background_paper: String,
    pub primary: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub font_family: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Dark,
            background_default: "#121212".to_string(),
            background_paper: "#1E1E1E".to_string(),
            primary: "#2196F3".to_string(),
            text_primary: "#FFFFFF".to_string(),
            text_secondary: "#B0B0B0".to_string(),
            font_family: "Quicksand".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Inline style declaring the palette as CSS custom properties.
    pub fn css_variables(&self) -> String {
        format!(
            "--bg-default: {}; --bg-paper: {}; --primary: {}; --text-primary: {}; \
             --text-secondary: {}; --font-family: '{}', sans-serif; color-scheme: {};",
            self.background_default,
            self.background_paper,
            self.primary,
            self.text_primary,
            self.text_secondary,
            self.font_family,
            match self.mode {
                ThemeMode::Dark => "dark",
                ThemeMode::Light => "light",
            }
        )
    }
}
