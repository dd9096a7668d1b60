use clap::{Args, Parser, Subcommand};
use fiches_common::FilterProfile;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fiches")]
#[command(about = "Génère l'arborescence des fiches techniques depuis un export Excel", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Journal détaillé
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Options communes de lecture de l'export
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Export Excel de suivi de plans
    #[arg(required = true)]
    pub file: PathBuf,

    /// Onglet à lire (défaut : configuration)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Profil de détection (st/ret)
    #[arg(short, long)]
    pub profile: Option<FilterProfile>,

    /// Référentiel matériel JSON (défaut : référentiel intégré)
    #[arg(long)]
    pub referentiel: Option<PathBuf>,

    /// Conserver les espaces multiples dans les noms de dossiers
    #[arg(long)]
    pub keep_spaces: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extrait le chantier et ses fiches en JSON
    Extract {
        #[command(flatten)]
        source: SourceArgs,

        /// Fichier JSON de sortie (défaut : sortie standard)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Affiche le plan de génération (dossier, référence, descriptif)
    Plan {
        #[command(flatten)]
        source: SourceArgs,

        /// Fichier JSON de sortie (défaut : sortie standard)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Génère l'arborescence des fiches
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// Dossier de sortie
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Modèle de fiche JSON
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Nom du dossier racine
        #[arg(long)]
        root_folder: Option<String>,
    },

    /// Liste le référentiel matériel
    Referentiel {
        /// Référentiel matériel JSON
        #[arg(long)]
        referentiel: Option<PathBuf>,
    },

    /// Affiche ou modifie la configuration
    Config {
        /// Onglet par défaut
        #[arg(long)]
        set_sheet: Option<String>,

        /// Profil par défaut (st/ret)
        #[arg(long)]
        set_profile: Option<FilterProfile>,

        /// Affiche la configuration
        #[arg(long)]
        show: bool,
    },
}
