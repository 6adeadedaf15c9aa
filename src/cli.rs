// src/cli.rs
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::config::consts::{DECK_STEM, QUESTION_PREVIEW_CHARS};
use crate::config::options::{ExportFormat, ExportOptions, LoadOptions};
use crate::core::sanitize::preview;
use crate::data::topic_options;
use crate::dataset::brokerage::{pack_text, positioning_script};
use crate::log::{self, Sink};
use crate::query::{self, Filter, MatchMode};
use crate::session::Session;
use crate::store::{self, DatasetCache};
use crate::file;

#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    pub dir: PathBuf,
    pub files: Vec<String>,
    pub dedupe: bool,
    pub filter: Filter,
    pub list_topics: bool,
    pub random: bool,
    pub limit: Option<usize>,
    pub export: Option<String>,
    pub format: ExportFormat,
    pub brokerage: Option<String>,
    pub help: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            files: Vec::new(),
            dedupe: false,
            filter: Filter::default(),
            list_topics: false,
            random: false,
            limit: None,
            export: None,
            format: ExportFormat::Csv,
            brokerage: None,
            help: false,
        }
    }
}

impl Params {
    fn load_options(&self) -> LoadOptions {
        let mut load = LoadOptions::default().with_base_dir(&self.dir);
        load.prefer(&self.files);
        load.dedupe = self.dedupe;
        load
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    log::init(Sink::Stderr);

    let params = parse_args(env::args().skip(1))?;
    if params.help {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }
    let stdout = io::stdout();
    execute(&params, &mut stdout.lock())
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Params> {
    let mut params = Params::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| eyre!("Missing value for {flag}"));
        match a.as_str() {
            "--dir" => params.dir = PathBuf::from(value("--dir")?),
            "--file" => params.files.push(value("--file")?),
            "--dedupe" => params.dedupe = true,
            "--search" => params.filter.term = value("--search")?,
            "--topic" => params.filter.topics.push(value("--topic")?),
            "--match" => {
                let v = value("--match")?;
                params.filter.match_mode = MatchMode::parse(&v).ok_or_else(|| eyre!("Unknown match mode: {v}"))?;
            }
            "--category" => params.filter.category = Filter::choice(&value("--category")?),
            "--tag" => params.filter.tag = Filter::choice(&value("--tag")?),
            "--topics" => params.list_topics = true,
            "--random" => params.random = true,
            "--limit" => {
                let v = value("--limit")?;
                params.limit = Some(v.parse().wrap_err_with(|| format!("Invalid --limit: {v}"))?);
            }
            "--export" | "-o" => params.export = Some(value("--export")?),
            "--format" => {
                let v = value("--format")?;
                params.format = ExportFormat::parse(&v).ok_or_else(|| eyre!("Unknown format: {v}"))?;
            }
            "--brokerage" => params.brokerage = Some(value("--brokerage")?),
            "-h" | "--help" => params.help = true,
            _ => return Err(eyre!("Unknown arg: {a}")),
        }
    }
    Ok(params)
}

/// Run one command against `out`.
pub fn execute<W: Write>(params: &Params, out: &mut W) -> Result<()> {
    let load = params.load_options();
    let mut cache = DatasetCache::new();

    if let Some(name) = &params.brokerage {
        return brokerage(&mut cache, &load, name, out);
    }

    let ds = store::load_objections(&mut cache, &load)
        .map_err(|e| eyre!(e.user_message(&load.candidates)))?;

    if params.list_topics {
        for t in topic_options(&ds.topics) {
            writeln!(out, "{t}")?;
        }
        return Ok(());
    }

    let results = query::query(&ds.entries, &params.filter);
    logf!("Query: {} of {} entries match", results.len(), ds.entries.len());

    if params.random {
        let Some(pick) = query::random_pick(&results, &mut rand::thread_rng()) else {
            return Err(eyre!("No matches to pick from"));
        };
        writeln!(out, "{}\n\n{}", pick.question, pick.answer)?;
        return Ok(());
    }

    let shown = &results[..params.limit.map_or(results.len(), |n| n.min(results.len()))];

    if let Some(target) = &params.export {
        let mut session = Session::new();
        for e in shown {
            session.add_favorite(e);
        }
        let default_name = format!("{DECK_STEM}.{}", params.format.ext());
        let path = file::resolve_single_out_path(target, &default_name)?;
        let mut export = ExportOptions::default();
        export.set_path(&path.to_string_lossy());
        export.format = params.format;
        let written = file::write_deck(&export, &session)?;
        writeln!(out, "Wrote {} entries to {}", session.favorites.len(), written.display())?;
        return Ok(());
    }

    for e in shown {
        writeln!(out, "{}\t{}\t{}", e.id, e.category, preview(&e.question, QUESTION_PREVIEW_CHARS))?;
    }
    Ok(())
}

fn brokerage<W: Write>(cache: &mut DatasetCache, load: &LoadOptions, name: &str, out: &mut W) -> Result<()> {
    let set = store::load_brokerage(cache, load)
        .map_err(|e| eyre!(e.user_message(&load.brokerage_candidates)))?;
    let sheet = &set.sheet;

    let row = sheet
        .find(name)
        .or_else(|| sheet.rows().iter().find(|r| r.brokerage.eq_ignore_ascii_case(name.trim())))
        .ok_or_else(|| eyre!("Unknown brokerage '{name}'. Available: {}", sheet.brokerages().join(", ")))?;

    write!(out, "{}", pack_text(row))?;
    if sheet.funnel_pilot().is_some() {
        writeln!(out, "\n{}", positioning_script(&row.brokerage))?;
    }
    Ok(())
}
