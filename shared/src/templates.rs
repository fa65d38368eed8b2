//! End-user notification templates
//!
//! Each supported language carries a title and message template. Templates
//! may reference `{appName}`, `{appVersion}`, `{vendor}` and `{deadline}`,
//! which are substituted when the notification is previewed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Languages offered for end-user notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    French,
    German,
    Spanish,
    Japanese,
    ChineseSimplified,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[
            Language::English,
            Language::French,
            Language::German,
            Language::Spanish,
            Language::Japanese,
            Language::ChineseSimplified,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::German => "German",
            Language::Spanish => "Spanish",
            Language::Japanese => "Japanese",
            Language::ChineseSimplified => "Chinese (Simplified)",
        }
    }

    /// Stable identifier used in form values
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::German => "de",
            Language::Spanish => "es",
            Language::Japanese => "ja",
            Language::ChineseSimplified => "zh-CN",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::all().iter().copied().find(|l| l.code() == code)
    }
}

/// Title and body of an end-user notification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationTemplate {
    pub title: String,
    pub message: String,
}

impl NotificationTemplate {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn render(&self, values: &PlaceholderValues) -> NotificationTemplate {
        NotificationTemplate {
            title: values.apply(&self.title),
            message: values.apply(&self.message),
        }
    }
}

/// Values substituted into template placeholders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderValues {
    pub app_name: String,
    pub app_version: String,
    pub vendor: String,
    pub deadline: String,
}

impl PlaceholderValues {
    pub fn apply(&self, template: &str) -> String {
        template
            .replace("{appName}", &self.app_name)
            .replace("{appVersion}", &self.app_version)
            .replace("{vendor}", &self.vendor)
            .replace("{deadline}", &self.deadline)
    }
}

/// Per-language notification templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationCustomizations {
    templates: BTreeMap<Language, NotificationTemplate>,
}

impl Default for NotificationCustomizations {
    fn default() -> Self {
        let mut templates = BTreeMap::new();
        templates.insert(
            Language::English,
            NotificationTemplate::new(
                "Update available for {appName}",
                "{vendor} {appName} {appVersion} will be installed. Please save your work before {deadline}.",
            ),
        );
        templates.insert(
            Language::French,
            NotificationTemplate::new(
                "Mise à jour disponible pour {appName}",
                "{vendor} {appName} {appVersion} sera installé. Veuillez enregistrer votre travail avant {deadline}.",
            ),
        );
        templates.insert(
            Language::German,
            NotificationTemplate::new(
                "Update für {appName} verfügbar",
                "{vendor} {appName} {appVersion} wird installiert. Bitte speichern Sie Ihre Arbeit vor {deadline}.",
            ),
        );
        templates.insert(
            Language::Spanish,
            NotificationTemplate::new(
                "Actualización disponible para {appName}",
                "Se instalará {vendor} {appName} {appVersion}. Guarde su trabajo antes de {deadline}.",
            ),
        );
        templates.insert(
            Language::Japanese,
            NotificationTemplate::new(
                "{appName} の更新があります",
                "{vendor} {appName} {appVersion} がインストールされます。{deadline} までに作業を保存してください。",
            ),
        );
        templates.insert(
            Language::ChineseSimplified,
            NotificationTemplate::new(
                "{appName} 有可用更新",
                "将安装 {vendor} {appName} {appVersion}。请在 {deadline} 之前保存您的工作。",
            ),
        );
        Self { templates }
    }
}

impl NotificationCustomizations {
    /// Template for `language`, falling back to English
    pub fn get(&self, language: Language) -> NotificationTemplate {
        self.templates
            .get(&language)
            .or_else(|| self.templates.get(&Language::English))
            .cloned()
            .unwrap_or_else(|| NotificationTemplate::new("", ""))
    }

    pub fn set_title(&mut self, language: Language, title: impl Into<String>) {
        let mut template = self.get(language);
        template.title = title.into();
        self.templates.insert(language, template);
    }

    pub fn set_message(&mut self, language: Language, message: impl Into<String>) {
        let mut template = self.get(language);
        template.message = message.into();
        self.templates.insert(language, template);
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.templates.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_with_six_languages() {
        let customizations = NotificationCustomizations::default();
        assert_eq!(customizations.languages().count(), 6);
        assert_eq!(
            customizations.languages().collect::<Vec<_>>(),
            Language::all().to_vec()
        );
    }

    #[test]
    fn test_render_substitutes_placeholders() {
        let template = NotificationTemplate::new(
            "Update for {appName}",
            "{vendor} {appName} {appVersion} by {deadline}; {appName} again",
        );
        let values = PlaceholderValues {
            app_name: "Chrome".to_string(),
            app_version: "120.0".to_string(),
            vendor: "Google".to_string(),
            deadline: "Friday".to_string(),
        };

        let rendered = template.render(&values);
        assert_eq!(rendered.title, "Update for Chrome");
        assert_eq!(rendered.message, "Google Chrome 120.0 by Friday; Chrome again");
    }

    #[test]
    fn test_edits_are_per_language() {
        let mut customizations = NotificationCustomizations::default();
        customizations.set_title(Language::French, "Nouveau titre");

        assert_eq!(customizations.get(Language::French).title, "Nouveau titre");
        assert_ne!(customizations.get(Language::English).title, "Nouveau titre");
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("zh-CN"), Some(Language::ChineseSimplified));
        assert_eq!(Language::from_code("xx"), None);
        assert_eq!(Language::default(), Language::English);
    }
}
