use std::fmt::{self, Display};
use std::str::FromStr;

use chrono::FixedOffset;

/// Sélecteur de classe, tel que reçu de l'appelant.
///
/// Volontairement non validé: une classe vide ou absente du document
/// produit simplement un ensemble de correspondances vide.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClassName(String);

impl ClassName {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ClassName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ClassName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fuseau dans lequel les horodatages sont rendus.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Zone {
    /// Fuseau local de la machine (défaut).
    Local,
    Utc,
    /// Décalage UTC fixe, ex. `+02:00`.
    Fixed(FixedOffset),
}

impl Default for Zone {
    fn default() -> Self {
        Self::Local
    }
}

impl Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Utc => f.write_str("utc"),
            Self::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

impl FromStr for Zone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "utc" | "z" => Ok(Self::Utc),
            _ => s
                .trim()
                .parse::<FixedOffset>()
                .map(Self::Fixed)
                .map_err(|_| format!("unknown zone: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Zone;
    use std::str::FromStr;

    #[test]
    fn zone_from_str_accepts_variants() {
        assert_eq!(Zone::from_str("local"), Ok(Zone::Local));
        assert_eq!(Zone::from_str("UTC"), Ok(Zone::Utc));
        assert!(matches!(Zone::from_str("+02:00"), Ok(Zone::Fixed(_))));
        assert!(Zone::from_str("mars").is_err());
    }

    #[test]
    fn zone_displays_offsets() {
        let zone = match Zone::from_str("-05:30") {
            Ok(zone) => zone,
            Err(err) => panic!("offset should parse: {err}"),
        };
        assert_eq!(zone.to_string(), "-05:30");
    }
}
