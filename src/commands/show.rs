use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use supergroups::model::GroupsData;
use supergroups::table::GroupsCache;

use crate::cli::ShowArgs;

pub fn run(args: ShowArgs) -> Result<()> {
    let cache = GroupsCache::from_dir(&args.data_dir)?;
    let data = cache.load()?;

    info!(
        data_dir = %cache.data_dir().display(),
        supergroups = data.supergroups.len(),
        "groups data loaded"
    );

    let mut output = io::BufWriter::new(io::stdout().lock());
    if args.json {
        write_json_response(&mut output, &data)?;
    } else {
        write_text_response(&mut output, &data, args.limit)?;
    }
    output.flush()?;
    Ok(())
}

fn write_json_response<W: Write>(output: &mut W, data: &GroupsData) -> Result<()> {
    serde_json::to_writer_pretty(&mut *output, data)
        .context("failed to serialize groups json output")?;
    writeln!(output)?;
    Ok(())
}

pub(crate) fn write_text_response<W: Write>(
    output: &mut W,
    data: &GroupsData,
    limit: Option<usize>,
) -> Result<()> {
    let shown = limit.unwrap_or(data.supergroups.len());

    writeln!(output, "Supergroups: {}", data.supergroups.len())?;
    for (index, group) in data.supergroups.iter().take(shown).enumerate() {
        writeln!(output)?;
        writeln!(output, "{}. {}", index + 1, group.name)?;
        if let Some(url) = &group.url {
            writeln!(output, "   url: {url}")?;
        }
        if !group.org.is_empty() {
            writeln!(output, "   org: {}", group.org)?;
        }
        if let Some(url) = &group.about_url {
            writeln!(output, "   about: {url}")?;
        }
        if !group.mission.is_empty() {
            writeln!(output, "   mission: {}", group.mission)?;
        }
        if !group.goals.is_empty() {
            writeln!(output, "   goals: {}", group.goals)?;
        }
        if !group.vision.is_empty() {
            writeln!(output, "   vision: {}", group.vision)?;
        }
        writeln!(
            output,
            "   groups={} subgroups={} teams={}",
            group.groups.len(),
            group.subgroups.len(),
            group.teams.len()
        )?;
    }

    if shown < data.supergroups.len() {
        writeln!(output)?;
        writeln!(output, "... {} more", data.supergroups.len() - shown)?;
    }

    Ok(())
}
