use serde::{Deserialize, Serialize};

use crate::types::ClassName;

/// Élément d'un document: un nœud porteur de classes et d'un contenu texte.
///
/// Seul `text` est réécrit par le formateur; les autres champs sont
/// conservés tels quels d'un chargement à l'autre.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Element {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(
        default,
        rename = "class",
        deserialize_with = "deserialize_classes",
        serialize_with = "serialize_classes",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub classes: Vec<String>,
    #[serde(default)]
    pub text: String,
}

impl Element {
    /// Correspondance exacte sur un jeton de la liste de classes, comme
    /// `getElementsByClassName`: une classe vide ne correspond jamais.
    #[must_use]
    pub fn has_class(&self, class: &ClassName) -> bool {
        self.classes.iter().any(|c| c == class.as_str())
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// Collection ordonnée d'éléments; l'ordre du document est l'ordre du
/// fichier source et il est préservé à l'écriture.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    #[must_use]
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn by_class_mut<'a>(
        &'a mut self,
        class: &'a ClassName,
    ) -> impl Iterator<Item = &'a mut Element> + 'a {
        self.elements
            .iter_mut()
            .filter(move |element| element.has_class(class))
    }
}

// Le champ `class` accepte la forme attribut ("badge timestamp") et la
// forme liste (["badge", "timestamp"]); il est resérialisé en attribut.
fn deserialize_classes<'de, D>(de: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ClassAttr {
        Attr(String),
        List(Vec<String>),
        Null,
    }

    Ok(match ClassAttr::deserialize(de)? {
        ClassAttr::Attr(value) => value.split_whitespace().map(str::to_string).collect(),
        ClassAttr::List(values) => values
            .iter()
            .flat_map(|value| value.split_whitespace())
            .map(str::to_string)
            .collect(),
        ClassAttr::Null => Vec::new(),
    })
}

fn serialize_classes<S>(classes: &[String], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&classes.join(" "))
}
