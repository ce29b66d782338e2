//! Unimark - selection-aware markdown formatting from the command line.
//!
//! # Usage
//!
//! ```bash
//! unimark edit bold --start 4 --end 9 --file notes.md
//! unimark render --file notes.md
//! unimark share --copy
//! unimark commands
//! unimark open "http://localhost:5173/tools-unimark/?markdown=%23+Hi"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use unimark::clipboard::{CopyStatus, Osc52Clipboard};
use unimark::config::{
    ConfigFlags, DEFAULT_BASE_URL, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags, state_file_path,
};
use unimark::editor::{Command, EditorBuffer};
use unimark::keymap::TOOLBAR;
use unimark::render::{HtmlSanitizer, MarkdownRenderer, RenderOptions};
use unimark::session::Session;
use unimark::store::{FileStore, MemoryStore, ShareUrl, StateStore};
use unimark::transform::{DEFAULT_INDENT_WIDTH, Selection};

/// Selection-aware markdown formatting
#[derive(Parser, Debug)]
#[command(name = "unimark", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,

    /// Render headings without wrapping them in bold
    #[arg(long, global = true)]
    plain_headings: bool,

    /// Spaces added or removed per indent step
    #[arg(long, global = true, value_name = "N")]
    indent_width: Option<usize>,

    /// Base address for share links
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Where the saved text lives
    #[arg(long, global = true, value_name = "PATH")]
    state_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long, global = true)]
    save: bool,

    /// Clear saved defaults
    #[arg(long, global = true)]
    clear: bool,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Apply a formatting command and print the resulting selection
    Edit {
        #[arg(value_enum)]
        command: Command,

        /// Selection start, in UTF-16 code units
        #[arg(long, default_value_t = 0)]
        start: usize,

        /// Selection end, in UTF-16 code units (defaults to start)
        #[arg(long)]
        end: Option<usize>,

        /// Markdown file to edit in place instead of the saved text
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Print the sanitized HTML preview
    Render {
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Copy to the clipboard instead of printing
        #[arg(long)]
        copy: bool,
    },
    /// Print a link that carries the text
    Share {
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Copy to the clipboard instead of printing
        #[arg(long)]
        copy: bool,
    },
    /// Load the text carried by a share link into the saved text
    Open {
        url: String,

        /// Replace saved text that differs from the link
        #[arg(long)]
        prefer_url: bool,
    },
    /// List the formatting commands in toolbar order
    Commands,
}

fn read_markdown(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn configure<S: StateStore>(session: Session<S>, effective: &ConfigFlags) -> Session<S> {
    session
        .with_indent_width(effective.indent_width.unwrap_or(DEFAULT_INDENT_WIDTH))
        .with_render_options(RenderOptions {
            bold_headings: !effective.plain_headings,
        })
}

fn open_session(effective: &ConfigFlags) -> Session<FileStore> {
    let path = effective.state_file.clone().unwrap_or_else(state_file_path);
    configure(
        Session::open(FileStore::new(path), None, |_, _| false),
        effective,
    )
}

/// A session over a file's text that never writes back.
fn file_session(path: &Path, effective: &ConfigFlags) -> Result<Session<MemoryStore>> {
    let store = MemoryStore::with_text(&read_markdown(path)?);
    Ok(configure(Session::open(store, None, |_, _| false), effective))
}

fn report_copy(status: CopyStatus) -> Result<()> {
    if status.is_copied() {
        eprintln!("{}", status.message());
        Ok(())
    } else {
        anyhow::bail!("{}", status.message())
    }
}

fn render<S: StateStore>(session: &mut Session<S>, copy: bool) -> Result<()> {
    if copy {
        let mut clipboard = Osc52Clipboard::stdout();
        report_copy(session.copy_html(&MarkdownRenderer, &HtmlSanitizer, &mut clipboard))
    } else {
        print!("{}", session.html(&MarkdownRenderer, &HtmlSanitizer));
        Ok(())
    }
}

fn share<S: StateStore>(session: &mut Session<S>, share: &ShareUrl, copy: bool) -> Result<()> {
    if copy {
        let mut clipboard = Osc52Clipboard::stdout();
        report_copy(session.copy_share_url(share, &mut clipboard))
    } else {
        println!("{}", session.share_url(share));
        Ok(())
    }
}

fn run(mode: Mode, effective: &ConfigFlags) -> Result<()> {
    match mode {
        Mode::Edit {
            command,
            start,
            end,
            file,
        } => {
            let indent_width = effective.indent_width.unwrap_or(DEFAULT_INDENT_WIDTH);
            let selection = Selection::new(start, end.unwrap_or(start));
            let selection = if let Some(path) = file {
                let mut buffer =
                    EditorBuffer::from_text(&read_markdown(&path)?).with_indent_width(indent_width);
                buffer.select(selection);
                if buffer.apply(command) {
                    fs::write(&path, buffer.text())
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                }
                buffer.selection()
            } else {
                let mut session = open_session(effective);
                session.select(selection);
                session.apply(command);
                session.selection()
            };
            println!("{} {}", selection.start, selection.end);
        }
        Mode::Render { file, copy } => match file {
            Some(path) => render(&mut file_session(&path, effective)?, copy)?,
            None => render(&mut open_session(effective), copy)?,
        },
        Mode::Share { file, copy } => {
            let base = effective.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
            let link =
                ShareUrl::parse(base).with_context(|| format!("Invalid base URL {base}"))?;
            match file {
                Some(path) => share(&mut file_session(&path, effective)?, &link, copy)?,
                None => share(&mut open_session(effective), &link, copy)?,
            }
        }
        Mode::Open { url, prefer_url } => {
            let (text, address) =
                ShareUrl::take_text(&url).with_context(|| format!("Invalid share link {url}"))?;
            if text.is_none() {
                anyhow::bail!("Link carries no markdown text: {url}");
            }
            let path = effective.state_file.clone().unwrap_or_else(state_file_path);
            let session = Session::open(FileStore::new(path), Some(&url), |_, _| {
                if !prefer_url {
                    eprintln!(
                        "[warn] Saved text differs from the link; keeping it (use --prefer-url to replace)"
                    );
                }
                prefer_url
            });
            eprintln!("[info] Editor address: {address}");
            print!("{}", session.text());
        }
        Mode::Commands => {
            for button in TOOLBAR {
                let name = button
                    .command
                    .to_possible_value()
                    .map(|value| value.get_name().to_owned())
                    .unwrap_or_default();
                println!("{name:<14} {}", button.tooltip());
            }
            for (command, key) in [(Command::Indent, "Tab"), (Command::Outdent, "Shift+Tab")] {
                if let Some(value) = command.to_possible_value() {
                    println!("{:<14} {} ({key})", value.get_name(), command.title());
                }
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);
    tracing::debug!(?effective, "resolved configuration");

    run(cli.mode, &effective)
}
