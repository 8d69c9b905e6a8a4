use crate::clock;
use crate::layout::{DayLayout, LayoutError};
use crate::model::ShiftEntry;
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de créneaux depuis CSV: header `date,start,end,label` (date optionnelle)
pub fn import_entries_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<ShiftEntry>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let date = rec.get(0).context("missing date")?.trim();
        let start = rec.get(1).context("missing start")?.trim();
        let end = rec.get(2).unwrap_or("").trim();
        let label = rec.get(3).context("missing label")?.trim();
        if start.is_empty() || label.is_empty() {
            bail!("invalid entry row {} (empty start or label)", line + 2);
        }
        let mut entry = ShiftEntry::new(label, start, end);
        if !date.is_empty() {
            entry.date = Some(parse_date(date).with_context(|| format!("row {}", line + 2))?);
        }
        out.push(entry);
    }
    Ok(out)
}

/// Import JSON : tableau de créneaux, noms de champs souples.
pub fn import_entries_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<ShiftEntry>> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let entries: Vec<ShiftEntry> = serde_json::from_slice(&data)
        .with_context(|| format!("parsing entries {}", path.display()))?;
    Ok(entries)
}

/// Date `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> Result<NaiveDate, LayoutError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| LayoutError::InvalidDate(raw.to_string()))
}

/// Export JSON des journées placées (jolie mise en forme)
pub fn export_layout_json<P: AsRef<Path>>(path: P, layouts: &[DayLayout]) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(layouts)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV des blocs: header `date,label,start,end,lane,lane_count`
pub fn export_layout_csv<P: AsRef<Path>>(path: P, layouts: &[DayLayout]) -> anyhow::Result<()> {
    let file = fs::File::create(path.as_ref())
        .with_context(|| format!("creating {}", path.as_ref().display()))?;
    write_layout_csv(file, layouts)
}

/// Même format que [`export_layout_csv`], vers n'importe quel writer.
pub fn write_layout_csv<W: std::io::Write>(out: W, layouts: &[DayLayout]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(out);
    w.write_record(["date", "label", "start", "end", "lane", "lane_count"])?;
    for day in layouts {
        let date = day.date.map(|d| d.to_string()).unwrap_or_default();
        for item in &day.items {
            let start = clock::format_minutes(item.start_minutes);
            let end = clock::format_minutes(item.end_minutes);
            let lane = item.lane.to_string();
            let lane_count = item.lane_count.to_string();
            w.write_record([
                date.as_str(),
                item.label.as_str(),
                start.as_str(),
                end.as_str(),
                lane.as_str(),
                lane_count.as_str(),
            ])?;
        }
    }
    w.flush()?;
    Ok(())
}
