//! Setlist - interactive shell around the playlist engine
//!
//! This is the boundary layer: it seeds the playlist, forwards commands,
//! and re-reads the full state after every mutating call. It holds no
//! playlist state of its own.

#![deny(warnings)]

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use setlist::{Playlist, Song};

/// Setlist - an undoable music playlist, driven from the terminal
#[derive(Parser, Debug)]
#[command(name = "setlist")]
#[command(about = "An undoable music playlist, driven from the terminal", long_about = None)]
struct Cli {
    /// JSON seed file: an array of {title, artist, url, cover?} objects
    #[arg(short, long)]
    seed: Option<PathBuf>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let mut playlist = Playlist::new();

    if let Some(path) = &cli.seed {
        let songs = load_seed(path)?;
        playlist.initialize(songs);
    }

    print_state(&playlist);
    run_shell(&mut playlist)
}

/// Parse a JSON seed file into the initial song sequence
fn load_seed(path: &Path) -> Result<Vec<Song>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading seed file {}", path.display()))?;
    let songs: Vec<Song> = serde_json::from_str(&data)
        .with_context(|| format!("parsing seed file {}", path.display()))?;
    Ok(songs)
}

/// Read commands from stdin until quit/EOF
fn run_shell(playlist: &mut Playlist) -> Result<()> {
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "add" => add(playlist, rest),
            "remove" | "rm" => {
                match playlist.remove_song(rest) {
                    Some(song) => println!("removed \"{}\"", song.title),
                    None => println!("no song titled \"{rest}\""),
                }
                print_state(playlist);
            }
            "next" | "n" => {
                playlist.play_next();
                print_state(playlist);
            }
            "prev" | "p" => {
                playlist.play_previous();
                print_state(playlist);
            }
            "goto" => match rest.parse::<usize>() {
                Ok(index) => {
                    if !playlist.move_cursor_to(index) {
                        println!("playlist is empty");
                    }
                    print_state(playlist);
                }
                Err(_) => println!("usage: goto <index>"),
            },
            "undo" | "u" => {
                if !playlist.undo() {
                    println!("nothing to undo");
                }
                print_state(playlist);
            }
            "redo" | "r" => {
                if !playlist.redo() {
                    println!("nothing to redo");
                }
                print_state(playlist);
            }
            "history" | "h" => print_history(playlist),
            "list" | "ls" => print_state(playlist),
            "help" | "?" => print_help(),
            "quit" | "q" | "exit" => return Ok(()),
            other => println!("unknown command `{other}` (try `help`)"),
        }
    }
}

/// Handle `add title | artist | url [| cover]`
fn add(playlist: &mut Playlist, rest: &str) {
    let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
    let (title, artist, url) = match (fields.first(), fields.get(1), fields.get(2)) {
        (Some(t), Some(a), Some(u)) => (*t, *a, *u),
        _ => {
            println!("usage: add <title> | <artist> | <url> [| <cover>]");
            return;
        }
    };

    let mut song = Song::new(title, artist, url);
    if let Some(cover) = fields.get(3) {
        song = song.with_cover(*cover);
    }

    let before = playlist.len();
    playlist.add_song(song);
    if playlist.len() == before {
        println!("rejected: title, artist and url must all be non-empty");
    }
    print_state(playlist);
}

/// Re-pull and print the full playlist plus the current song
fn print_state(playlist: &Playlist) {
    if playlist.is_empty() {
        println!("(empty playlist)");
        return;
    }

    let cursor = playlist.cursor_index();
    let mut index = 0;
    playlist.for_each(|song| {
        let marker = if Some(index) == cursor { ">" } else { " " };
        println!("{marker} {index:>3}  {} - {}", song.artist, song.title);
        index += 1;
    });

    if let Some(song) = playlist.current_song() {
        println!("now playing: {} - {} ({})", song.artist, song.title, song.url);
    }
}

/// Print undo/redo status
fn print_history(playlist: &Playlist) {
    match playlist.peek_undo() {
        Some(desc) => println!("undo: {desc} ({} deep)", playlist.undo_depth()),
        None => println!("undo: (empty)"),
    }
    match playlist.peek_redo() {
        Some(desc) => println!("redo: {desc} ({} deep)", playlist.redo_depth()),
        None => println!("redo: (empty)"),
    }
}

fn print_help() {
    println!("commands:");
    println!("  add <title> | <artist> | <url> [| <cover>]");
    println!("  remove <title>        delete the first song with this title");
    println!("  next / prev           step the playback cursor");
    println!("  goto <index>          jump the cursor (clamped into bounds)");
    println!("  undo / redo           walk the edit history");
    println!("  history               show undo/redo status");
    println!("  list                  print the playlist");
    println!("  quit");
}
