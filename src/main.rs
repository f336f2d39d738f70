use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use markpane::cli::{CliArgs, CliCommand, DocumentSource};
use markpane::config_paths;
use markpane::markdown::{preview_document, CmarkRenderer, MarkupRenderer, PreviewTheme};
use markpane::outline::{extract, Outline};
use markpane::storage::{FileStorage, Storage};
use markpane::{RenderedView, SessionBuilder, SessionConfig};

fn main() -> Result<()> {
    markpane::tracing::init();

    let args = CliArgs::parse();
    let config = SessionConfig::load();
    let source = args.source(&config.storage_slot);
    tracing::debug!("Running {:?} on {:?}", args.command, source);

    match args.command {
        CliCommand::Outline { json, .. } => {
            let view = load_view(&source, config)?;
            print_outline(&view.outline, json)?;
        }
        CliCommand::Render { output, light, .. } => {
            let view = load_view(&source, config)?;
            let theme = if light {
                PreviewTheme::light()
            } else {
                PreviewTheme::default()
            };
            let page = preview_document(&view, &theme);

            match output {
                Some(path) => {
                    fs::write(&path, page)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!("Rendered preview to {}", path.display());
                }
                None => std::io::stdout().write_all(page.as_bytes())?,
            }
        }
        CliCommand::Show => {
            let storage = slot_storage(&source)?;
            match storage.load()? {
                Some(text) => std::io::stdout().write_all(text.as_bytes())?,
                None => eprintln!("No stored document at {}", storage.path().display()),
            }
        }
        CliCommand::Clear => {
            let mut storage = slot_storage(&source)?;
            storage.clear()?;
            eprintln!("Cleared {}", storage.path().display());
        }
        CliCommand::Config { init, force } => {
            let path = config_paths::config_file();
            let exists = path.as_deref().is_some_and(|p| p.exists());

            if init && (!exists || force) {
                let written = config.save()?;
                eprintln!("Wrote {}", written.display());
            } else if init {
                if let Some(path) = &path {
                    eprintln!("{} already exists (use --force to overwrite)", path.display());
                }
            }

            print!("{}", serde_yaml::to_string(&config)?);
        }
    }

    Ok(())
}

fn slot_storage(source: &DocumentSource) -> Result<FileStorage> {
    match source {
        DocumentSource::Slot(slot) => Ok(FileStorage::for_slot(slot)?),
        DocumentSource::File(path) => Ok(FileStorage::new(path)),
    }
}

/// Render a file directly, or open a session over the stored slot
fn load_view(source: &DocumentSource, config: SessionConfig) -> Result<RenderedView> {
    match source {
        DocumentSource::File(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let (outline, stripped) = extract(&text).into_parts();
            Ok(RenderedView::new(
                0,
                outline,
                CmarkRenderer.render(&stripped),
                None,
            ))
        }
        DocumentSource::Slot(slot) => {
            let storage = FileStorage::for_slot(slot)?;
            let (mut session, _) = SessionBuilder::new(storage).config(config).build();
            let view = session.view().clone();
            session.shutdown();
            Ok(view)
        }
    }
}

fn print_outline(outline: &Outline, json: bool) -> Result<()> {
    let mut stdout = std::io::stdout().lock();

    if json {
        serde_json::to_writer_pretty(&mut stdout, &outline.headings)?;
        writeln!(stdout)?;
        return Ok(());
    }

    for heading in &outline.headings {
        let indent = "  ".repeat(usize::from(heading.level.saturating_sub(1)));
        writeln!(stdout, "{}- {} (#{})", indent, heading.text, heading.id)?;
    }
    Ok(())
}
