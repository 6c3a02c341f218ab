use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::Result;
use crate::document::Document;
use crate::error::DocumentError;

/// Chemin sentinelle pour stdin/stdout.
pub const STDIO: &str = "-";

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO
}

/// Charge un document JSON depuis un fichier, ou stdin si `path` est
/// absent ou vaut `-`.
///
/// # Errors
///
/// Retourne une erreur si la lecture échoue ou si le contenu n'est pas un
/// document JSON valide.
pub fn load(path: Option<&Path>) -> Result<Document> {
    let raw = match path {
        Some(p) if !is_stdio(p) => {
            std::fs::read_to_string(p).map_err(|source| DocumentError::Read {
                path: p.to_path_buf(),
                source,
            })?
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| DocumentError::Read {
                    path: PathBuf::from(STDIO),
                    source,
                })?;
            buf
        }
    };

    let doc = serde_json::from_str(&raw).map_err(|err| DocumentError::Parse {
        message: err.to_string(),
    })?;
    Ok(doc)
}

/// Écrit le document vers un fichier, ou stdout si `path` est absent ou
/// vaut `-`. La sortie se termine toujours par un saut de ligne.
///
/// # Errors
///
/// Retourne une erreur si la sérialisation ou l'écriture échoue.
pub fn save(doc: &Document, path: Option<&Path>, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(doc)
    } else {
        serde_json::to_string(doc)
    };
    let mut rendered = rendered.map_err(|err| DocumentError::Parse {
        message: err.to_string(),
    })?;
    rendered.push('\n');

    match path {
        Some(p) if !is_stdio(p) => {
            std::fs::write(p, rendered).map_err(|source| DocumentError::Write {
                path: p.to_path_buf(),
                source,
            })?;
        }
        _ => {
            std::io::stdout()
                .write_all(rendered.as_bytes())
                .map_err(|source| DocumentError::Write {
                    path: PathBuf::from(STDIO),
                    source,
                })?;
        }
    }
    Ok(())
}
