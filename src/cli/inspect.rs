//! `show` and `list` commands

#![cfg(feature = "native")]

use super::{truncate, OutputFormat, RecordKind};
use colored::Colorize;
use exam_content::{
    BlueprintArea, ContentLibrary, Entry, ExamSection, Lesson, Question, Record, Registry,
    SectionBlock,
};

// ============================================================================
// show
// ============================================================================

pub fn cmd_show(library: &ContentLibrary, id: &str, format: OutputFormat) -> anyhow::Result<()> {
    let entry = library
        .find(id)
        .ok_or_else(|| anyhow::anyhow!("No question or lesson with id '{}'", id))?;

    let rendered = match (format, entry) {
        (OutputFormat::Json, Entry::Question(q)) => serde_json::to_string_pretty(q)?,
        (OutputFormat::Json, Entry::Lesson(l)) => serde_json::to_string_pretty(l)?,
        (OutputFormat::Text, Entry::Question(q)) => render_question(q),
        (OutputFormat::Text, Entry::Lesson(l)) => render_lesson(l),
    };
    println!("{}", rendered);
    Ok(())
}

pub fn render_question(q: &Question) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}  {} {} · {} · {}\n",
        q.id.bold(),
        q.section,
        q.blueprint_area,
        q.difficulty.as_str(),
        q.skill_level.as_str()
    ));
    match &q.subtopic {
        Some(sub) => out.push_str(&format!("{} / {}\n", q.topic, sub)),
        None if !q.topic.is_empty() => out.push_str(&format!("{}\n", q.topic)),
        None => {}
    }
    out.push('\n');
    out.push_str(&format!("{}\n\n", q.prompt));

    for option in &q.options {
        if q.is_correct(&option.id) {
            out.push_str(&format!(
                "  {} {}) {}\n",
                "✓".green(),
                option.id,
                option.text.green()
            ));
        } else {
            out.push_str(&format!("    {}) {}\n", option.id, option.text));
        }
    }

    out.push_str(&format!("\n{}\n{}\n", "Explanation".cyan().bold(), q.explanation));
    if let Some(reference) = &q.reference {
        out.push_str(&format!("{} {}\n", "Reference:".dimmed(), reference));
    }
    out
}

pub fn render_lesson(l: &Lesson) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}  {}\n", l.id.bold(), l.title.bold()));
    out.push_str(&format!(
        "{} {} · lesson {} · {} min · {}\n",
        l.section,
        l.blueprint_area,
        l.order,
        l.duration,
        l.difficulty.as_str()
    ));
    if !l.description.is_empty() {
        out.push_str(&format!("{}\n", l.description));
    }
    if !l.topics.is_empty() {
        out.push_str(&format!("{} {}\n", "Topics:".dimmed(), l.topics.join(", ")));
    }

    for block in l.blocks() {
        out.push('\n');
        out.push_str(&render_block(block));
    }
    out
}

fn render_block(block: &SectionBlock) -> String {
    let mut out = String::new();
    let heading = match block {
        SectionBlock::Warning { .. } => format!("⚠ {}", block.title()).yellow().bold(),
        SectionBlock::Callout { .. } => format!("» {}", block.title()).cyan().bold(),
        _ => block.title().bold(),
    };
    if !block.title().is_empty() {
        out.push_str(&format!("{}\n", heading));
    }

    match block {
        SectionBlock::Text { content, .. }
        | SectionBlock::Callout { content, .. }
        | SectionBlock::Warning { content, .. }
        | SectionBlock::Example { content, .. } => {
            out.push_str(&format!("{}\n", content));
        }
        SectionBlock::Table { headers, rows, .. } => {
            out.push_str(&render_table(headers, rows));
        }
        SectionBlock::List { .. } | SectionBlock::Summary { .. } | SectionBlock::KeyPoints { .. } => {
            for item in block.items().unwrap_or_default() {
                out.push_str(&format!("  • {}\n", item));
            }
        }
    }
    out
}

/// Plain-text table with columns padded to their widest cell
fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let line = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{:<width$}", c, width = widths.get(i).copied().unwrap_or(0)))
            .collect();
        format!("  {}\n", padded.join(" │ ").trim_end())
    };

    let mut out = line(headers);
    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    out.push_str(&format!("  {}\n", rule.join("─┼─")));
    for row in rows {
        out.push_str(&line(row));
    }
    out
}

// ============================================================================
// list
// ============================================================================

pub fn cmd_list(
    library: &ContentLibrary,
    kind: RecordKind,
    section: Option<&str>,
    area: Option<&str>,
) -> anyhow::Result<()> {
    let section: Option<ExamSection> = section.map(str::parse).transpose()?;
    let area: Option<BlueprintArea> = area.map(str::parse).transpose()?;

    let rows = match kind {
        RecordKind::Questions => list_rows(&library.questions, section, area),
        RecordKind::Lessons => list_rows(&library.lessons, section, area),
    };

    if rows.is_empty() {
        println!("{}", "No matching records.".dimmed());
        return Ok(());
    }
    for row in &rows {
        println!("{}", row);
    }
    println!();
    println!("{} record(s)", rows.len());
    Ok(())
}

/// One line per record passing both filters, in registry order
pub fn list_rows<R: Record>(
    registry: &Registry<R>,
    section: Option<ExamSection>,
    area: Option<BlueprintArea>,
) -> Vec<String> {
    let records = match (section, area) {
        (_, Some(area)) => registry.by_blueprint_area(area),
        (Some(section), None) => registry.by_section(section),
        (None, None) => registry.iter().collect(),
    };

    records
        .into_iter()
        .filter(|r| section.map_or(true, |s| r.section() == s))
        .map(|r| {
            format!(
                "{:<14} {:<7} {:<12} {}",
                r.id(),
                r.blueprint_area().to_string(),
                r.difficulty_label(),
                truncate(r.headline(), 60)
            )
        })
        .collect()
}
