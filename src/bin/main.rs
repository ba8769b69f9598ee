use clap::Parser;
use crossterm::style::Stylize;
use kosha_core::config::Config;
use kosha_core::core::alphabet::HALANTA;
use kosha_core::core::pratyahara::{form_pratyahara, resolve};
use kosha_core::core::syllable::syllables_text;
use kosha_core::core::types::Linga;
use kosha_core::core::ucchaarana::signature_word;
use kosha_core::core::varna::split_varna;
use kosha_core::lexicon::dhatu::DhatuField;
use kosha_core::lexicon::grid::Table;
use kosha_core::lexicon::shabda::ShabdaField;
use kosha_core::lexicon::MatchKind;
use kosha_core::Kosha;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

const RULE: &str = "+--------------------------------------------------------------------------------+";
const FORMS_LABEL: &str = "रूपाणि";

#[derive(Parser, Debug)]
#[command(name = "kosha_shell", version, about = "Search the dhatupatha and shabdapatha, and analyse Sanskrit text")]
struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Decode the lexicon files even when a snapshot exists
    #[arg(long)]
    rebuild: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match Config::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red(), e);
            return ExitCode::FAILURE;
        }
    };

    let level = if args.verbose {
        Level::DEBUG
    } else {
        config.log_level.parse().unwrap_or(Level::INFO)
    };
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();

    let loaded = if args.rebuild {
        Kosha::load(&config)
    } else {
        Kosha::from_snapshot_or_sources(&config)
    };
    let kosha = match loaded {
        Ok(kosha) => kosha,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red(), e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", "Kosha: dhatupatha and shabdapatha search".bold());
    println!("Type a search string, or 'help' for the list of commands. 'exit' to quit.");

    loop {
        print!("{}", "(kosha) ".cyan());
        if stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match stdin().read_line(&mut input) {
            Ok(0) | Err(_) => break, // Ctrl + D
            Ok(_) => {}
        }
        let line = input.trim();
        let (cmd, arg) = line
            .split_once(char::is_whitespace)
            .map(|(cmd, arg)| (cmd, arg.trim()))
            .unwrap_or((line, ""));

        match cmd {
            "" => continue,
            "exit" | "quit" => break,
            "help" | "?" => print_help(),
            "dhatu" => show_dhatu_matches(&kosha, arg),
            "forms" => show_dhatu_forms(&kosha, arg),
            "shabda" => show_shabda_matches(&kosha, arg),
            "rupa" => show_shabda_forms(&kosha, arg),
            "similar" => show_similar(&kosha, arg),
            "varna" => show_varna(arg, false),
            "viccheda" => show_varna(arg, true),
            "akshara" => show_syllables(arg),
            "pratyahara" => show_pratyahara(arg),
            "form" => show_formed(arg),
            "sthaana" => show_articulation(arg),
            "save" => save(&kosha, &config, arg),
            _ => show_dhatu_matches(&kosha, line),
        }
    }

    println!("Bye");
    ExitCode::SUCCESS
}

fn print_help() {
    let commands = [
        ("dhatu <term>", "search verb roots (prefix the term with ~ to match substrings)"),
        ("forms <index>", "conjugation tables of a verb root"),
        ("shabda <term>", "search nominal stems"),
        ("rupa <index>", "declension table of a nominal stem"),
        ("similar <word> [linga]", "stems sharing the ending of a word"),
        ("varna <text>", "varna decomposition"),
        ("viccheda <text>", "technical varna decomposition"),
        ("akshara <text>", "syllables"),
        ("pratyahara <code>", "letters named by a pratyaahaara"),
        ("form <letters>", "pratyaahaara naming a set of letters"),
        ("sthaana <text>", "place and manner of articulation"),
        ("save [path]", "write the decoded lexicons to a snapshot"),
        ("exit", "quit"),
    ];
    for (usage, what) in commands {
        println!("  {} {}", format!("{usage:<24}").bold(), what);
    }
}

fn search_term(arg: &str) -> (&str, bool) {
    match arg.strip_prefix('~') {
        Some(term) => (term, true),
        None => (arg, false),
    }
}

fn show_result(term: &str, kind: &str, fields: impl Iterator<Item = (&'static str, String)>, desc: &str) {
    println!("{}", RULE);
    println!("  {}: {}", "Search".bold(), term);
    println!("  {}: {}", "Match-Type".bold(), kind);
    for (label, value) in fields {
        println!("  {}: {}", label.bold(), value);
    }
    if !desc.is_empty() {
        println!("  {}: {}", "Description".bold(), desc.green());
    }
    println!("{}", RULE);
}

fn show_dhatu_matches(kosha: &Kosha, arg: &str) {
    let (term, fuzzy) = search_term(arg);
    let dhatupatha = &kosha.dhatupatha;
    let matches = dhatupatha.search(term, fuzzy);
    if matches.is_empty() {
        println!("{}", "No matches.".dim());
    }
    for m in &matches {
        let kind = match m.kind {
            MatchKind::BaseIndex => DhatuField::Baseindex.label(),
            MatchKind::Field(field) => field.label(),
            MatchKind::Form(_) => FORMS_LABEL,
        };
        let fields = dhatupatha
            .options()
            .display_fields
            .iter()
            .map(|&field| (field.label(), m.entry.display(field).into_owned()));
        show_result(term, kind, fields, &m.description());
    }
}

fn show_shabda_matches(kosha: &Kosha, arg: &str) {
    let (term, fuzzy) = search_term(arg);
    let shabdapatha = &kosha.shabdapatha;
    let matches = shabdapatha.search(term, fuzzy);
    if matches.is_empty() {
        println!("{}", "No matches.".dim());
    }
    for m in &matches {
        let kind = match m.kind {
            MatchKind::BaseIndex => ShabdaField::Baseindex.label(),
            MatchKind::Field(field) => field.label(),
            MatchKind::Form(_) => FORMS_LABEL,
        };
        let fields = shabdapatha
            .options()
            .display_fields
            .iter()
            .map(|&field| (field.label(), m.entry.display(field).into_owned()));
        show_result(term, kind, fields, &m.description());
    }
}

fn print_table(table: &Table) {
    for row in table {
        let cells: Vec<String> = row.iter().map(|cell| cell.join(", ")).collect();
        println!("  {}", cells.join(" | "));
    }
}

fn show_dhatu_forms(kosha: &Kosha, arg: &str) {
    let (Some(dhatu), Some(forms)) = (kosha.dhatupatha.get(arg), kosha.dhatupatha.get_forms(arg)) else {
        println!("No dhatu at '{}'.", arg);
        return;
    };
    println!("{}", RULE);
    println!("{} ({}), {}, {}", dhatu.dhatu, dhatu.aupadeshik, dhatu.artha, dhatu.artha_english);
    println!("{}, {}, {}", dhatu.gana.name(), dhatu.pada.name(), dhatu.tags);
    for (label, value) in dhatu.references.labelled() {
        println!("  {}: {}", label.bold(), value);
    }
    println!("{}", RULE);
    for (lakara, table) in forms.iter().filter(|(_, table)| !table.is_empty()) {
        println!();
        println!("{}", lakara.to_string().bold());
        print_table(table);
    }
    println!("{}", RULE);
}

fn show_shabda_forms(kosha: &Kosha, arg: &str) {
    let (Some(shabda), Some(table)) = (kosha.shabdapatha.get(arg), kosha.shabdapatha.get_forms(arg)) else {
        println!("No shabda at '{}'.", arg);
        return;
    };
    println!("{}", RULE);
    println!("{} ({}, {})", shabda.word, shabda.end, shabda.linga.name());
    println!("{}", RULE);
    print_table(&table);
    println!("{}", RULE);
}

fn show_similar(kosha: &Kosha, arg: &str) {
    let (word, linga) = match arg.split_once(char::is_whitespace) {
        Some((word, linga)) => match Linga::parse(linga.trim()) {
            Some(linga) => (word, Some(linga)),
            None => {
                println!("Unknown linga '{}'.", linga.trim());
                return;
            }
        },
        None => (arg, None),
    };
    let similar = kosha.shabdapatha.get_similar(word, linga);
    if similar.is_empty() {
        println!("{}", "No similar words.".dim());
    }
    for (lemma, index, linga) in similar {
        println!("  {} {} ({})", index.to_string().dim(), lemma, linga.name());
    }
}

fn show_varna(arg: &str, technical: bool) {
    for line in split_varna(arg, technical) {
        let words: Vec<String> = line
            .iter()
            .map(|word| word.iter().map(|unit| unit.to_string()).collect::<Vec<_>>().join(" "))
            .collect();
        println!("  {}", words.join("  /  "));
    }
}

fn show_syllables(arg: &str) {
    for line in syllables_text(arg, false) {
        let words: Vec<String> = line.iter().map(|word| word.join(" - ")).collect();
        println!("  {}", words.join("  /  "));
    }
}

fn show_pratyahara(arg: &str) {
    match resolve(arg) {
        None => println!("'{}' is not a pratyaahaara.", arg),
        Some(runs) if runs.is_empty() => println!("'{}' names no letters.", arg),
        Some(runs) => {
            for run in runs {
                let letters: Vec<String> = run.iter().map(char::to_string).collect();
                println!("  {}", letters.join(" "));
            }
        }
    }
}

fn show_formed(arg: &str) {
    let letters: Vec<char> = arg
        .chars()
        .filter(|&c| !c.is_whitespace() && c != ',' && c != HALANTA)
        .collect();
    match form_pratyahara(&letters) {
        Ok(pratyahara) => println!("  {}", pratyahara.to_string().green()),
        Err(e) => println!("  {}", e.to_string().red()),
    }
}

fn show_articulation(arg: &str) {
    for word in arg.split_whitespace() {
        for (letter, signature) in signature_word(word) {
            let [sthaana, aabhyantara, baahya] = signature.describe(false);
            println!("  {} {} | {} | {}", format!("{letter:<6}").bold(), sthaana, aabhyantara, baahya);
        }
    }
}

fn save(kosha: &Kosha, config: &Config, arg: &str) {
    let path = if arg.is_empty() {
        config.snapshot_file.clone()
    } else {
        Some(PathBuf::from(arg))
    };
    let Some(path) = path else {
        println!("No snapshot path configured; give one: save <path>");
        return;
    };
    match kosha.save_snapshot(&path) {
        Ok(()) => println!("Snapshot saved to '{}'", path.display()),
        Err(e) => eprintln!("{} Could not save snapshot: {}", "[ERROR]".red(), e),
    }
}
