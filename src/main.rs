use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use kanka::kana::{CharType, ConvertFlags};
use kanka::kanji::KanjiData;
use kanka::Utf8Count;

#[derive(Clone, Copy, ValueEnum)]
enum Script {
    Hiragana,
    Katakana,
    Romaji,
}

impl From<Script> for CharType {
    fn from(script: Script) -> CharType {
        match script {
            Script::Hiragana => CharType::Hiragana,
            Script::Katakana => CharType::Katakana,
            Script::Romaji => CharType::Romaji,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Convert between romaji, hiragana and katakana.
    Convert {
        /// Text to convert.
        input: String,
        /// Source script.
        #[arg(long, value_enum, default_value = "romaji")]
        from: Script,
        /// Target script.
        #[arg(long, value_enum, default_value = "hiragana")]
        to: Script,
        /// Use Hepburn style romaji output.
        #[arg(long)]
        hepburn: bool,
        /// Use Kunrei style romaji output.
        #[arg(long)]
        kunrei: bool,
        /// Repeat the vowel instead of using ー in hiragana output.
        #[arg(long)]
        no_prolong_mark: bool,
        /// Strip spaces when converting from romaji.
        #[arg(long)]
        remove_spaces: bool,
    },
    /// Count kanji in files or directories.
    Count {
        /// Files or directories to scan.
        paths: Vec<PathBuf>,
        /// Count every multi-byte character, not just kanji.
        #[arg(long)]
        all: bool,
        /// Strip furigana readings before counting.
        #[arg(long)]
        furigana: bool,
        /// Descend into subdirectories.
        #[arg(long)]
        recurse: bool,
        /// How many of the most frequent tokens to print.
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
    /// Show what the knowledge base knows about a kanji.
    Info {
        /// The kanji to look up.
        kanji: String,
    },
}

#[derive(Parser)]
#[command(name = "kanka", about = "Japanese kanji and kana toolkit")]
struct Args {
    /// Path to the data directory (required by `info`).
    #[arg(long, value_name = "dir")]
    data: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive("kanka=info".parse()?)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .try_init()?;

    let args = Args::parse();

    match args.command {
        Command::Convert {
            input,
            from,
            to,
            hepburn,
            kunrei,
            no_prolong_mark,
            remove_spaces,
        } => {
            let mut flags = ConvertFlags::NONE;
            if hepburn {
                flags |= ConvertFlags::HEPBURN;
            }
            if kunrei {
                flags |= ConvertFlags::KUNREI;
            }
            if no_prolong_mark {
                flags |= ConvertFlags::NO_PROLONG_MARK;
            }
            if remove_spaces {
                flags |= ConvertFlags::REMOVE_SPACES;
            }
            println!("{}", kanka::convert(&input, from.into(), to.into(), flags));
        }
        Command::Count {
            paths,
            all,
            furigana,
            recurse,
            top,
        } => {
            if paths.is_empty() {
                bail!("no files or directories given");
            }
            let mut count = if all {
                Utf8Count::new()
            } else {
                Utf8Count::kanji()
            };
            if furigana {
                count.remove_furigana();
            }
            for path in &paths {
                count
                    .add_file(path, true, false, recurse)
                    .with_context(|| format!("counting '{}'", path.display()))?;
            }
            println!(
                "total: {}, unique: {}, files: {}, directories: {}",
                count.total(),
                count.unique(),
                count.files(),
                count.directories()
            );
            if count.errors() > 0 || count.variants() > 0 || count.combining_marks() > 0 {
                println!(
                    "errors: {}, variants: {}, combining marks: {}",
                    count.errors(),
                    count.variants(),
                    count.combining_marks()
                );
            }
            if furigana {
                println!("furigana replacements: {}", count.replacements());
            }
            let mut tokens: Vec<(&String, &usize)> = count.map().iter().collect();
            tokens.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
            for (token, occurrences) in tokens.into_iter().take(top) {
                println!("{token} {occurrences}");
            }
        }
        Command::Info { kanji } => {
            let Some(dir) = args.data else {
                bail!("'info' needs --data pointing at the data directory");
            };
            let data = KanjiData::load(&dir)?;
            let Some(entry) = data.find(&kanji) else {
                bail!("'{kanji}' not found");
            };
            println!("name: {}", entry.name());
            println!("type: {}", entry.kanji_type());
            println!("radical: {}", entry.radical());
            println!("strokes: {}", entry.strokes().to_string_with_variant());
            if !entry.meaning().is_empty() {
                println!("meaning: {}", entry.meaning());
            }
            if !entry.reading().is_empty() {
                println!("reading: {}", entry.reading());
            }
            if let Some(grade) = entry.grade() {
                println!("grade: {grade}");
            }
            if let Some(level) = entry.level() {
                println!("level: {level}");
            }
            if let Some(kyu) = entry.kyu() {
                println!("kyu: {kyu}");
            }
            if let Some(frequency) = entry.frequency() {
                println!("frequency: {frequency}");
            }
            if let Some(year) = entry.year() {
                println!("year: {year}");
            }
            if let Some(reason) = entry.reason() {
                println!("reason: {reason}");
            }
            if !entry.old_names().is_empty() {
                println!("old names: {}", entry.old_names().join(", "));
            }
            if let Some(new_name) = entry.new_name() {
                println!("new name: {new_name}");
            }
            if !entry.morohashi().is_empty() {
                println!("morohashi: {}", entry.morohashi());
            }
        }
    }

    Ok(())
}
