//! Terminal output
//!
//! Values and exports go to stdout uncolored so they can be piped; status
//! lines are colored unless NO_COLOR or the `color` setting says otherwise.

use std::fmt::Display;

use colored::Colorize;

pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub fn warning(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Report a missing path on stderr; stdout stays empty.
pub fn absent(path: &str) {
    warning(&format!("no value at '{}'", path.bold()));
}

/// Confirm a mutation of the document.
pub fn changed(path: &str, detail: &(impl Display + ?Sized)) {
    println!("{} {} {}", "✓".green(), path.cyan(), detail);
}

pub fn action(label: &str, msg: &(impl Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

/// Key/value line, as in `config path`.
pub fn labelled(label: &str, msg: &(impl Display + ?Sized)) {
    println!("{}: {}", label.cyan().bold(), msg);
}

/// Raw data line, never colored.
pub fn info(msg: &(impl Display + ?Sized)) {
    println!("{msg}");
}
