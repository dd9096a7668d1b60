use clap::Parser;
use fiches_common::{ReferenceTable, SanitizeOptions};
use fiches_rust::archive::ArchiveBuilder;
use fiches_rust::cli::{Cli, Commands, SourceArgs};
use fiches_rust::config::Config;
use fiches_rust::error::{FichesError, Result};
use fiches_rust::export;
use fiches_rust::session::Session;
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        if err.is_user_facing() {
            eprintln!("⚠ {}", err);
        } else {
            eprintln!("❌ {}", err);
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

/// Référentiel externe si fourni, sinon intégré
fn load_table(path: Option<&Path>) -> Result<ReferenceTable> {
    match path {
        Some(path) => {
            let table = ReferenceTable::from_file(path)?;
            log::info!("référentiel {} : {} entrées", path.display(), table.len());
            Ok(table)
        }
        None => Ok(ReferenceTable::builtin()),
    }
}

/// Charge le fichier dans la session et analyse l'onglet configuré
fn analyze_source(session: &mut Session, source: &SourceArgs, config: &Config) -> Result<()> {
    let sheet = source.sheet.as_deref().unwrap_or(&config.sheet_name);
    let profile = source.profile.unwrap_or(config.profile);

    session.load_file(&source.file)?;
    if let Some(path) = session.source() {
        log::info!("lecture de {} (onglet \"{}\", profil {})", path.display(), sheet, profile);
    }
    session.analyze(sheet, profile)?;
    Ok(())
}

fn sanitize_options(source: &SourceArgs, config: &Config) -> SanitizeOptions {
    SanitizeOptions {
        marker: source.profile.unwrap_or(config.profile).marker(),
        collapse_whitespace: config.collapse_whitespace && !source.keep_spaces,
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let mut session = Session::default();

    match cli.command {
        Commands::Extract { source, output } => {
            analyze_source(&mut session, &source, &config)?;
            if let Some(project) = session.project() {
                if let Some(path) = export::write_json(project, output.as_deref(), "chantier")? {
                    println!("✔ Chantier enregistré : {}", path.display());
                }
            }
        }

        Commands::Plan { source, output } => {
            let table = load_table(source.referentiel.as_deref().or(config.referentiel_path.as_deref()))?;
            analyze_source(&mut session, &source, &config)?;
            let plans = session.plan(&table, &sanitize_options(&source, &config))?;

            if let Some(path) = export::write_json(&plans, output.as_deref(), "plan")? {
                println!("✔ Plan enregistré : {}", path.display());
            }
        }

        Commands::Generate { source, output, template, root_folder } => {
            println!("📁 fiches - génération de l'arborescence\n");

            let table = load_table(source.referentiel.as_deref().or(config.referentiel_path.as_deref()))?;
            if let Some(template_path) = template.as_deref().or(config.template_path.as_deref()) {
                session.load_template(template_path)?;
            }

            // 1. Lecture
            println!("[1/3] Lecture de l'export...");
            analyze_source(&mut session, &source, &config)?;
            if let Some(project) = session.project() {
                println!(
                    "✔ Chantier « {} » (n° {}) : {} fiches\n",
                    project.project_name,
                    project.project_number,
                    project.items.len()
                );
            }

            // 2. Référentiel
            println!("[2/3] Rapprochement avec le référentiel...");
            let plans = session.plan(&table, &sanitize_options(&source, &config))?;
            let unmatched = plans.iter().filter(|p| p.is_unmatched()).count();
            println!("✔ {} fiches, {} sans correspondance\n", plans.len(), unmatched);

            // 3. Arborescence
            println!("[3/3] Génération de l'arborescence...");
            let project = session.project().ok_or(FichesError::NoProject)?;
            let root = root_folder.as_deref().unwrap_or(&config.root_folder);
            let report = ArchiveBuilder::new(root)
                .with_progress(true)
                .build(&output, project, &plans, session.template())?;
            println!(
                "✔ {} : {} dossiers, {} fichiers écrits",
                report.root.display(),
                report.dirs_written,
                report.files_written
            );
            log::info!(
                "contenu de la racine : {} dossiers, {} fichiers",
                report.total_dirs,
                report.total_files
            );

            println!("\n✅ Génération terminée");
        }

        Commands::Referentiel { referentiel } => {
            let table = load_table(referentiel.as_deref().or(config.referentiel_path.as_deref()))?;
            println!("Référentiel matériel ({} entrées) :", table.len());
            for record in table.iter() {
                println!("  {:<16} {:<24} {}", record.id, record.keyword, record.canonical_reference);
            }
        }

        Commands::Config { set_sheet, set_profile, show } => {
            let mut config = config;

            if let Some(sheet) = set_sheet {
                config.set_sheet_name(sheet)?;
                println!("✔ Onglet par défaut enregistré");
            }

            if let Some(profile) = set_profile {
                config.set_profile(profile)?;
                println!("✔ Profil par défaut enregistré");
            }

            if show {
                println!("Configuration :");
                println!("  Fichier : {}", Config::config_path()?.display());
                println!("  Onglet : {}", config.sheet_name);
                println!("  Profil : {}", config.profile);
                println!("  Dossier racine : {}", config.root_folder);
                println!("  Espaces multiples réduits : {}", if config.collapse_whitespace { "oui" } else { "non" });
                println!(
                    "  Modèle : {}",
                    config.template_path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "intégré".into())
                );
                println!(
                    "  Référentiel : {}",
                    config.referentiel_path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "intégré".into())
                );
            }
        }
    }

    Ok(())
}
