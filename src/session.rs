use std::io::{self, Write};

use crate::{
    console::{self, ConsoleOption, TableConsole},
    error::TableError,
    hashmap::{HashTable, OnDuplicate},
    record::Record,
};

struct SessionOptions {
    on_duplicate: OnDuplicate,
}

const ON_DUPLICATE: ConsoleOption = ConsoleOption {
    name: "OnDuplicate",
    default: "Fail",
    vars: &["Fail", "Replace"],
};

impl SessionOptions {
    fn default() -> SessionOptions {
        SessionOptions {
            on_duplicate: OnDuplicate::default(),
        }
    }

    fn report(out: &mut impl Write) -> io::Result<()> {
        console::option(out, &ON_DUPLICATE)
    }

    fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), String> {
        match name {
            "OnDuplicate" => {
                let Some(Ok(policy)) = value.map(|x| x.parse::<OnDuplicate>()) else {
                    return Err(format!("Bad argument for OnDuplicate"));
                };
                self.on_duplicate = policy;
                Ok(())
            }
            _ => Err(format!("No such Option: {name}")),
        }
    }
}

// `field=value,field=value`; pairs without `=` are skipped
fn parse_record(raw: &str) -> Vec<(String, String)> {
    raw.split(',')
        .filter_map(|pair| pair.split_once('='))
        .map(|(field, value)| (field.to_string(), value.to_string()))
        .collect()
}

fn reply(written: io::Result<()>) -> Result<(), String> {
    written.map_err(|e| format!("Failed to write reply: {e}"))
}

/// A console bound to one table of string values.
pub struct Session<W: Write> {
    table: HashTable<String>,
    options: SessionOptions,
    out: W,
}

impl Session<io::Stdout> {
    pub fn new(capacity: usize) -> Result<Session<io::Stdout>, TableError> {
        Session::with_output(capacity, io::stdout())
    }
}

impl<W: Write> Session<W> {
    pub fn with_output(capacity: usize, out: W) -> Result<Session<W>, TableError> {
        Ok(Session {
            table: HashTable::new(capacity)?,
            options: SessionOptions::default(),
            out,
        })
    }

    pub fn table(&self) -> &HashTable<String> {
        &self.table
    }

    pub fn output(&self) -> &W {
        &self.out
    }
}

impl<W: Write> TableConsole for Session<W> {
    fn add(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.table
            .add(key, value.to_string(), self.options.on_duplicate)
            .map_err(|e| format!("Failed to add {key}: {e}"))?;
        let written = console::ok(&mut self.out);
        reply(written)
    }

    fn find(&mut self, key: Option<&str>) -> Result<(), String> {
        let found = match key {
            Some(key) => self.table.find(key),
            None => self.table.find_any(),
        };
        let written = console::value(&mut self.out, found.map(String::as_str));
        reply(written)
    }

    fn remove(&mut self, key: Option<&str>) -> Result<(), String> {
        let removed = match key {
            Some(key) => self.table.remove(key),
            None => self.table.remove_any(),
        };
        let written = console::value(&mut self.out, removed.as_deref());
        reply(written)
    }

    fn modify(&mut self, key: &str, value: &str) -> Result<(), String> {
        let modified = self.table.modify(key, value.to_string());
        let written = console::value(&mut self.out, modified.map(String::as_str));
        reply(written)
    }

    fn list(&mut self) -> Result<(), String> {
        let written = self
            .table
            .iter()
            .try_for_each(|(key, value)| writeln!(self.out, "{key} {value}"));
        reply(written)
    }

    fn dump(&mut self) -> Result<(), String> {
        let written = write!(self.out, "{}", self.table);
        reply(written)
    }

    fn stats(&mut self) -> Result<(), String> {
        let written = writeln!(self.out, "{}", self.table.stats());
        reply(written)
    }

    fn load(
        &mut self,
        capacity: Option<usize>,
        key_field: Option<&str>,
        records: Vec<&str>,
    ) -> Result<(), String> {
        let records = records.into_iter().map(str::to_string);
        let on_duplicate = self.options.on_duplicate;
        let loaded = match key_field {
            Some(field) => HashTable::from_sequence_by(
                records,
                capacity,
                |raw: &String| parse_record(raw).field(field).map(|key| key.into_owned()),
                on_duplicate,
            ),
            None => HashTable::from_values(records, capacity, on_duplicate),
        };
        self.table = loaded.map_err(|e| format!("Failed to load records: {e}"))?;
        let written = writeln!(self.out, "loaded {}", self.table.len());
        reply(written)
    }

    fn options(&mut self) -> Result<(), String> {
        let written = SessionOptions::report(&mut self.out);
        reply(written)
    }

    fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), String> {
        self.options.set_option(name, value)?;
        let written = console::ok(&mut self.out);
        reply(written)
    }

    fn quit(&mut self) -> Result<(), String> {
        self.out
            .flush()
            .map_err(|e| format!("Failed to flush output: {e}"))
    }
}
