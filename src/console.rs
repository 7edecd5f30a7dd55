use std::io::{self, Write};

pub mod reader;

/// Whether the read loop keeps going after a command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub trait TableConsole {
    // Insert `value` under `key`, honouring the OnDuplicate option
    fn add(&mut self, key: &str, value: &str) -> Result<(), String>;

    // Print the value stored under `key`, or the first value in slot order
    fn find(&mut self, key: Option<&str>) -> Result<(), String>;

    // Remove and print the value under `key`, or any value
    fn remove(&mut self, key: Option<&str>) -> Result<(), String>;

    // Overwrite the value under `key` and print it
    fn modify(&mut self, key: &str, value: &str) -> Result<(), String>;

    // Print every key/value pair in slot order
    fn list(&mut self) -> Result<(), String>;

    // Print the slot layout
    fn dump(&mut self) -> Result<(), String>;

    fn stats(&mut self) -> Result<(), String>;

    // Rebuild the table from `field=value,...` records. Without a capacity the
    // record count is used; without a key field records are keyed by position.
    fn load(
        &mut self,
        capacity: Option<usize>,
        key_field: Option<&str>,
        records: Vec<&str>,
    ) -> Result<(), String>;

    // List the options `set_option` accepts
    fn options(&mut self) -> Result<(), String>;

    fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), String>;

    fn quit(&mut self) -> Result<(), String>;
}

pub struct ConsoleOption {
    pub name: &'static str,
    pub default: &'static str,
    pub vars: &'static [&'static str],
}

// Reply with a found value, or `none`
pub fn value(out: &mut impl Write, value: Option<&str>) -> io::Result<()> {
    writeln!(out, "{}", value.unwrap_or("none"))
}

pub fn ok(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "ok")
}

// `option name <name> type combo default <default> var <var>...`
pub fn option(out: &mut impl Write, opt: &ConsoleOption) -> io::Result<()> {
    write!(out, "option name {} type combo default {}", opt.name, opt.default)?;
    for var in opt.vars {
        write!(out, " var {var}")?;
    }
    writeln!(out)
}
