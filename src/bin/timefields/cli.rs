use std::path::PathBuf;
use std::str::FromStr;

use clap::{ArgAction, Parser};
use timefields::types::Zone;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rewrites epoch timestamp fields into readable dates", long_about = None)]
pub struct Cli {
    /// Document JSON à transformer ("-" ou absent: stdin).
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Chemin du fichier de configuration TOML.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Classe des champs à réécrire.
    #[arg(long, value_name = "NAME")]
    pub class: Option<String>,

    /// Fuseau de rendu: "local", "utc" ou un décalage fixe (ex. "+02:00").
    #[arg(long, value_parser = Zone::from_str)]
    pub zone: Option<Zone>,

    /// Motif strftime de rendu (ex. "%H:%M %a, %d.%m.%Y").
    #[arg(long, value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Fichier de sortie ("-" ou absent: stdout).
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Réécrit le fichier d'entrée sur place.
    #[arg(long, action = ArgAction::SetTrue)]
    pub in_place: bool,

    /// Sortie JSON indentée.
    #[arg(long, action = ArgAction::SetTrue)]
    pub pretty: bool,

    /// Applique la réécriture sans écrire le résultat, logue seulement.
    #[arg(long, action = ArgAction::SetTrue)]
    pub dry_run: bool,

    /// Utilise un layer JSON pour les logs (`--features json-logs`).
    #[arg(long, action = ArgAction::SetTrue)]
    pub json_logs: bool,

    /// Filtre de logs explicite (ex. "timefields=debug").
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
