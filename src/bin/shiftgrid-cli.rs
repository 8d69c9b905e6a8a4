#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use shiftgrid::{
    clock, io, layout_day, layout_week,
    model::{EntryId, ShiftEntry},
    storage::{JsonStorage, Storage},
    BlockGeometry, DayLayout, LayoutError, LayoutOptions, WeekWindow,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de placement des créneaux (vues jour/semaine, sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du planning
    #[arg(long, global = true, default_value = "planning.json")]
    planning: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Args, Debug, Clone, Copy)]
struct GridArgs {
    /// Durée minimale affichée (minutes)
    #[arg(long, default_value_t = 15)]
    min_duration: u32,
    /// Première heure visible
    #[arg(long, default_value_t = 6)]
    day_start_hour: u32,
    /// Dernière heure visible (24 = minuit)
    #[arg(long, default_value_t = 24)]
    day_end_hour: u32,
    /// Fusionne les créneaux aux bornes identiques
    #[arg(long)]
    group: bool,
}

impl GridArgs {
    fn options(self) -> Result<LayoutOptions> {
        if self.day_end_hour > 24 || self.day_start_hour >= self.day_end_hour {
            bail!("visible range must satisfy 0 <= start < end <= 24");
        }
        Ok(LayoutOptions {
            min_duration_minutes: self.min_duration,
            day_start_minutes: self.day_start_hour * 60,
            day_end_minutes: self.day_end_hour * 60,
            group_identical: self.group,
        })
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter un créneau
    Add {
        #[arg(long)]
        label: String,
        /// HH:MM, HH:MM:SS ou horodatage
        #[arg(long)]
        start: String,
        /// Optionnel : absent = durée minimale
        #[arg(long)]
        end: Option<String>,
        /// YYYY-MM-DD (sinon déduite de l'horodatage de début)
        #[arg(long)]
        date: Option<String>,
    },

    /// Importer des créneaux depuis un CSV ou un JSON
    Import {
        #[arg(long, conflicts_with = "json")]
        csv: Option<String>,
        #[arg(long)]
        json: Option<String>,
    },

    /// Supprimer un créneau
    Remove {
        #[arg(long)]
        id: String,
    },

    /// Lister les créneaux
    List,

    /// Placer les créneaux d'une journée
    Day {
        /// YYYY-MM-DD (défaut : aujourd'hui)
        #[arg(long)]
        date: Option<String>,
        #[command(flatten)]
        grid: GridArgs,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Placer les créneaux d'une semaine (lundi → dimanche)
    Week {
        /// Un jour quelconque de la semaine (défaut : aujourd'hui)
        #[arg(long)]
        date: Option<String>,
        /// Décalage en semaines (ex. -1 = semaine précédente)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,
        #[command(flatten)]
        grid: GridArgs,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }

    let storage = JsonStorage::open(&cli.planning)?;
    let mut planning = storage.load_or_default()?;

    match cli.cmd {
        Commands::Add {
            label,
            start,
            end,
            date,
        } => {
            clock::parse_minutes(&start)?;
            if let Some(end) = &end {
                clock::parse_minutes(end)?;
            }
            let mut entry = ShiftEntry::new(label, start, end.unwrap_or_default());
            entry.date = date.as_deref().map(io::parse_date).transpose()?;
            if entry.resolved_date().is_none() {
                bail!("no date: pass --date or a full timestamp as --start");
            }
            println!("{}", entry.id.as_str());
            planning.entries.push(entry);
            storage.save(&planning)?;
        }
        Commands::Import { csv, json } => {
            let entries = match (csv, json) {
                (Some(path), None) => io::import_entries_csv(path)?,
                (None, Some(path)) => io::import_entries_json(path)?,
                _ => bail!("pass exactly one of --csv or --json"),
            };
            let undated = entries.iter().filter(|e| e.resolved_date().is_none()).count();
            if undated > 0 {
                eprintln!("Warning: {undated} entr(y/ies) without date will not show in day/week views");
            }
            println!("Imported {} entr(y/ies)", entries.len());
            planning.entries.extend(entries);
            storage.save(&planning)?;
        }
        Commands::Remove { id } => {
            let id = EntryId::new(id);
            if planning.remove_entry(&id).is_none() {
                return Err(LayoutError::UnknownEntry(id.as_str().to_string()).into());
            }
            storage.save(&planning)?;
        }
        Commands::List => {
            for e in &planning.entries {
                let date = e
                    .resolved_date()
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string());
                let end = if e.end.is_empty() { "-" } else { e.end.as_str() };
                println!(
                    "{} | {} | {} → {} | {}",
                    e.id.as_str(),
                    date,
                    e.start,
                    end,
                    e.label
                );
            }
        }
        Commands::Day {
            date,
            grid,
            out_json,
            out_csv,
        } => {
            let opts = grid.options()?;
            let date = resolve_date(date.as_deref())?;
            let mut day = layout_day(&planning.entries_on(date), &opts);
            day.date = Some(date);
            print_day(&day, &opts);
            export(&[day], out_json, out_csv)?;
        }
        Commands::Week {
            date,
            offset,
            grid,
            out_json,
            out_csv,
        } => {
            let opts = grid.options()?;
            let anchor = resolve_date(date.as_deref())?;
            let window = WeekWindow::containing(anchor)
                .and_then(|w| w.offset(offset))
                .with_context(|| format!("week {anchor} {offset:+} is out of calendar range"))?;
            let days = layout_week(&planning.entries, window, &opts);
            println!("Week {} → {}", window.monday(), window.sunday());
            for day in &days {
                print_day(day, &opts);
            }
            export(&days, out_json, out_csv)?;
        }
    }

    Ok(())
}

fn resolve_date(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(raw) => Ok(io::parse_date(raw)?),
        None => Ok(Local::now().date_naive()),
    }
}

fn print_day(day: &DayLayout, opts: &LayoutOptions) {
    let date = day.date.map(|d| d.format("%a %Y-%m-%d").to_string());
    println!(
        "{} | {} block(s) | {} lane(s)",
        date.as_deref().unwrap_or("-"),
        day.items.len(),
        day.lane_count
    );
    for item in &day.items {
        let g = BlockGeometry::with_options(item, opts);
        println!(
            "  [{}/{}] {} → {} {} (left {:.1}% width {:.1}% top {:.1}% height {:.1}%)",
            item.lane,
            item.lane_count,
            clock::format_minutes(item.start_minutes),
            clock::format_minutes(item.end_minutes),
            item.label,
            g.left_pct,
            g.width_pct,
            g.top_pct,
            g.height_pct
        );
    }
}

fn export(days: &[DayLayout], out_json: Option<String>, out_csv: Option<String>) -> Result<()> {
    if let Some(path) = out_json {
        io::export_layout_json(path, days)?;
    }
    if let Some(path) = out_csv {
        io::export_layout_csv(path, days)?;
    }
    Ok(())
}
