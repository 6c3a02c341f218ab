use chrono::format::{Item, StrftimeItems};
use chrono::{Local, TimeZone, Utc};
use tracing::debug;

use crate::document::Document;
use crate::error::FormatError;
use crate::types::{ClassName, Zone};

/// Chaîne écrite à la place d'un champ dont le texte n'est pas un
/// horodatage epoch exploitable.
pub const INVALID_DATE: &str = "Invalid date";

/// Motif de rendu par défaut: `22:13 Tue, 14.11.2023`.
pub const DEFAULT_PATTERN: &str = "%H:%M %a, %d.%m.%Y";

/// Moteur de réécriture: fuseau et motif strftime validés à la
/// construction.
#[derive(Clone, Debug)]
pub struct Formatter {
    zone: Zone,
    pattern: String,
}

/// Compteurs d'une passe de réécriture, pour les logs et les tests.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RewriteStats {
    /// Éléments porteurs de la classe, tous réécrits.
    pub rewritten: usize,
    /// Sous-ensemble réécrit avec le texte de remplacement.
    pub invalid: usize,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            zone: Zone::Local,
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

impl Formatter {
    /// Construit un moteur pour `zone` et `pattern`.
    ///
    /// # Errors
    ///
    /// Retourne une erreur si `pattern` est vide ou n'est pas un motif
    /// strftime valide.
    pub fn new(zone: Zone, pattern: &str) -> std::result::Result<Self, FormatError> {
        if !pattern_is_valid(pattern) {
            return Err(FormatError::Pattern {
                pattern: pattern.to_string(),
            });
        }
        Ok(Self {
            zone,
            pattern: pattern.to_string(),
        })
    }

    /// Formatte un epoch (secondes) dans le fuseau du moteur.
    #[must_use]
    pub fn render_epoch(&self, secs: i64) -> String {
        let rendered = match self.zone {
            Zone::Local => render_in(&Local, secs, &self.pattern),
            Zone::Utc => render_in(&Utc, secs, &self.pattern),
            Zone::Fixed(offset) => render_in(&offset, secs, &self.pattern),
        };
        rendered.unwrap_or_else(|| INVALID_DATE.to_string())
    }

    /// Rend le texte d'un champ: epoch lisible, sinon le remplacement.
    #[must_use]
    pub fn render_text(&self, raw: &str) -> String {
        parse_epoch_seconds(raw).map_or_else(|| INVALID_DATE.to_string(), |s| self.render_epoch(s))
    }

    /// Réécrit, dans l'ordre du document, le texte de chaque élément
    /// portant `class`. Un texte déjà formaté ou illisible devient le
    /// remplacement, jamais une erreur.
    pub fn apply(&self, doc: &mut Document, class: &ClassName) -> RewriteStats {
        let mut stats = RewriteStats::default();
        for element in doc.by_class_mut(class) {
            let rendered = self.render_text(element.text());
            if rendered == INVALID_DATE {
                debug!(text = element.text(), "field is not an epoch timestamp");
                stats.invalid += 1;
            }
            element.set_text(rendered);
            stats.rewritten += 1;
        }
        stats
    }
}

/// Balaye `doc` et réécrit les champs portant `class_name` en date
/// lisible, fuseau local, motif par défaut.
pub fn format_timestamp_fields(doc: &mut Document, class_name: &str) {
    Formatter::default().apply(doc, &ClassName::from(class_name));
}

fn render_in<Tz>(tz: &Tz, secs: i64, pattern: &str) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    tz.timestamp_opt(secs, 0)
        .single()
        .map(|dt| dt.format(pattern).to_string())
}

/// Lecture permissive du texte d'un champ: blancs tolérés, signe et
/// partie fractionnaire acceptés (tronquée vers zéro).
fn parse_epoch_seconds(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(secs) = trimmed.parse::<i64>() {
        return Some(secs);
    }
    let value = trimmed.parse::<f64>().ok()?;
    if !value.is_finite() || value < i64::MIN as f64 || value > i64::MAX as f64 {
        return None;
    }
    Some(value.trunc() as i64)
}

pub(crate) fn pattern_is_valid(pattern: &str) -> bool {
    !pattern.is_empty() && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}
