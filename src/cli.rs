//! Command-line front end

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::gallery::{FilePicker, Gallery, LinePrompt};
use crate::store::Slot;

#[derive(Debug, Parser)]
#[command(name = "picroll", version, about = "Name the people in your pictures")]
pub struct Cli {
    /// Directory holding the database, pictures, config and logs
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show every picture and its name
    List {
        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Copy a picture into the gallery
    Add {
        /// Picture file to import
        path: PathBuf,
    },
    /// Give a picture a new name (read from stdin when NAME is omitted)
    Rename {
        index: usize,
        name: Option<String>,
    },
    /// Print where a picture is stored
    Show { index: usize },
}

#[derive(Serialize)]
struct ListEntry<'a> {
    index: usize,
    name: &'a str,
    image: &'a str,
}

/// Run one command against the gallery, writing results to `out`.
pub fn execute<S: Slot>(
    gallery: &mut Gallery<S>,
    command: Command,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::List { json } => {
            if json {
                let entries: Vec<ListEntry<'_>> = gallery
                    .records()
                    .iter()
                    .enumerate()
                    .map(|(index, record)| ListEntry {
                        index,
                        name: &record.display_name,
                        image: record.image_reference(),
                    })
                    .collect();
                serde_json::to_writer_pretty(&mut *out, &entries)?;
                writeln!(out)?;
            } else if gallery.is_empty() {
                writeln!(out, "No pictures yet. Add one with `picroll add <PATH>`.")?;
            } else {
                for (index, record) in gallery.records().iter().enumerate() {
                    writeln!(
                        out,
                        "{:>3}  {:<24}  {}",
                        index,
                        record.display_name,
                        record.image_reference()
                    )?;
                }
            }
        }
        Command::Add { path } => {
            let mut picker = FilePicker::new(&path);
            let index = gallery.len();
            let added = gallery
                .import(&mut picker)
                .with_context(|| format!("Failed to add {}", path.display()))?;
            if let Some(record) = added {
                writeln!(out, "{:>3}  {}", index, record.display_name)?;
            }
        }
        Command::Rename { index, name } => {
            let changed = match name {
                Some(name) => gallery.rename_to(index, name).map(|()| true),
                None => gallery.rename(index, &mut LinePrompt::stdio()),
            }
            .with_context(|| format!("Failed to rename picture {}", index))?;
            if changed {
                if let Some(record) = gallery.get(index) {
                    writeln!(out, "{:>3}  {}", index, record.display_name)?;
                }
            }
        }
        Command::Show { index } => {
            let path = gallery.image_path(index)?;
            writeln!(out, "{}", path.display())?;
        }
    }
    Ok(())
}
