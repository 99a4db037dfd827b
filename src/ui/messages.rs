//! Icon-prefixed status lines for the terminal.
//!
//! Info and success go to stdout with the command's regular output; warnings
//! and errors go to stderr. Setting `NO_COLOR` drops the escape codes.

use std::env;
use std::fmt;
use std::sync::LazyLock;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

static COLOR: LazyLock<bool> = LazyLock::new(|| env::var_os("NO_COLOR").is_none());

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Level::Info => "\x1b[34m",
            Level::Success => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }
}

fn line(level: Level, msg: &dyn fmt::Display) -> String {
    if *COLOR {
        format!("{}{}{} {}{}", level.color(), BOLD, level.icon(), RESET, msg)
    } else {
        format!("{} {}", level.icon(), msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Info, &msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Success, &msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Level::Warning, &msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Level::Error, &msg));
}

/// Section title used by `meta` and `top`.
pub fn header<T: fmt::Display>(msg: T) {
    if *COLOR {
        println!("{}{}== {} =={}", Level::Info.color(), BOLD, msg, RESET);
    } else {
        println!("== {} ==", msg);
    }
}
