use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ListResponse {
    pub results: Vec<NamedResource>,
}

/// Species payload; every field is optional and null-tolerant
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct SpeciesResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub flavor_text_entries: Option<Vec<FlavorTextEntry>>,
    #[serde(default)]
    pub genera: Option<Vec<GenusEntry>>,
    #[serde(default)]
    pub habitat: Option<Label>,
}

/// `{ name }` reference whose name may be missing or null
#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct Label {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct FlavorTextEntry {
    #[serde(default)]
    pub flavor_text: Option<String>,
    #[serde(default)]
    pub language: Option<Label>,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct GenusEntry {
    #[serde(default)]
    pub genus: Option<String>,
    #[serde(default)]
    pub language: Option<Label>,
}

impl Label {
    pub fn is(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }
}

pub(crate) fn in_language(label: Option<&Label>, language: &str) -> bool {
    label.is_some_and(|label| label.is(language))
}
