use crate::console::{Control, TableConsole};

// The rest of the line, so values may contain spaces.
fn rest<'a>(words: impl Iterator<Item = &'a str>) -> Option<String> {
    let joined = words.collect::<Vec<_>>().join(" ");
    (!joined.is_empty()).then_some(joined)
}

pub fn read_console_line(line: &str, dispatch: &mut dyn TableConsole) -> Result<Control, String> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Err(format!("Invalid command: {line}"));
    };
    match command {
        "add" | "modify" => {
            let Some(key) = words.next() else {
                return Err(format!("Missing key in: {line}"));
            };
            let Some(value) = rest(words) else {
                return Err(format!("Missing value in: {line}"));
            };
            if command == "add" {
                dispatch.add(key, &value)?;
            } else {
                dispatch.modify(key, &value)?;
            }
        }
        "find" => dispatch.find(words.next())?,
        "remove" => dispatch.remove(words.next())?,
        "list" => dispatch.list()?,
        "dump" => dispatch.dump()?,
        "stats" => dispatch.stats()?,
        "load" => {
            let Some(capacity) = words.next() else {
                return Err(format!("Missing load capacity in: {line}"));
            };
            let capacity = match capacity {
                "-" => None,
                n => Some(
                    n.parse::<usize>()
                        .map_err(|e| format!("Invalid load capacity {n}: {e}"))?,
                ),
            };
            let Some(key_field) = words.next() else {
                return Err(format!("Missing load key field in: {line}"));
            };
            let key_field = (key_field != "-").then_some(key_field);
            dispatch.load(capacity, key_field, words.collect())?;
        }
        "options" => dispatch.options()?,
        "setoption" => {
            let Some(name_literal) = words.next() else {
                return Err(format!("Invalid setoption line: {line}"));
            };
            if name_literal != "name" {
                return Err(format!("Missing 'name' parameter in: {line}"));
            }
            let Some(option_name) = words.next() else {
                return Err(format!("Missing 'name' value in: {line}"));
            };
            match words.next() {
                None => dispatch.set_option(option_name, None)?,
                Some("value") => {
                    let Some(value) = words.next() else {
                        return Err(format!("Missing 'value' value in: {line}"));
                    };
                    dispatch.set_option(option_name, Some(value))?;
                }
                Some(_) => return Err(format!("Invalid 'value' parameter in: {line}")),
            }
        }
        "quit" => {
            dispatch.quit()?;
            return Ok(Control::Quit);
        }
        _ => return Err(format!("Invalid command: {line}")),
    }
    Ok(Control::Continue)
}
