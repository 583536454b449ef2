use serde::Serialize;

/// Receives the languages an application is considered to support.
///
/// Called once per locale, in ascending locale order.
pub trait LanguageSink {
    fn add_language(&mut self, percentage: u32, locale: &str);
}

/// A supported language and how complete its translation is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    pub locale: String,
    pub percentage: u32,
}

/// Collects languages in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Languages(Vec<Language>);

impl Languages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, locale: &str) -> Option<u32> {
        self.0
            .iter()
            .find(|l| l.locale == locale)
            .map(|l| l.percentage)
    }
}

impl LanguageSink for Languages {
    fn add_language(&mut self, percentage: u32, locale: &str) {
        self.0.push(Language {
            locale: locale.to_string(),
            percentage,
        });
    }
}

impl<'a> IntoIterator for &'a Languages {
    type Item = &'a Language;
    type IntoIter = std::slice::Iter<'a, Language>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
