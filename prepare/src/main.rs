use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use unicode_lexclass_prepare::output::{self, Header};
use unicode_lexclass_prepare::{compile, telemetry};
use unicode_lexclass_source::{load_unicode_data, parse_unicode_data};

/// сборка таблицы лексической классификации кодпоинтов из UnicodeData.txt
#[derive(Parser, Debug)]
#[command(name = "prepare")]
struct Args
{
    /// UnicodeData.txt из UCD
    #[arg(long, default_value = "./data/ucd/UnicodeData.txt")]
    input: PathBuf,
    /// куда записать подготовленную таблицу
    #[arg(long, default_value = "./data/classification.rs.txt")]
    output: PathBuf,
    /// версия UCD для заголовка файла
    #[arg(long)]
    ucd_version: Option<String>,
    /// фильтр логирования, если не задан RUST_LOG
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn main() -> anyhow::Result<()>
{
    let args = Args::parse();

    telemetry::initialise(&args.log_filter)?;

    let data = load_unicode_data(&args.input)?;
    let entries = parse_unicode_data(&data)?;

    tracing::info!(path = %args.input.display(), entries = entries.len(), "прочитан UnicodeData.txt");

    let table = compile(entries.into_iter().map(<(u32, &str)>::from))?;

    // таблица должна открываться тем же классификатором, что и у потребителей
    table
        .classifier()
        .context("собранная таблица не прошла проверку")?;

    let file = File::create(&args.output)
        .with_context(|| format!("не удалось создать {}", args.output.display()))?;
    let mut writer = BufWriter::new(file);

    let header = Header {
        ucd_version: args.ucd_version,
    };

    output::write(&table, &header, &mut writer)
        .and_then(|_| writer.flush())
        .with_context(|| format!("не удалось записать {}", args.output.display()))?;

    tracing::info!(path = %args.output.display(), "таблица записана");

    Ok(())
}
