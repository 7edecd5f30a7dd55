use chainmap::console::{reader, Control};
use chainmap::session::Session;
use std::{env, io};
use tracing::Level;
use tracing_chrome::{ChromeLayerBuilder, FlushGuard};
use tracing_subscriber::prelude::*;

const DEFAULT_CAPACITY: usize = 16;

// CHAINMAP_TRACE=<file> records a Chrome trace instead of logging to stderr.
fn init_tracing() -> Option<FlushGuard> {
    if let Ok(path) = env::var("CHAINMAP_TRACE") {
        let (chrome_layer, guard) = ChromeLayerBuilder::new().file(path).build();
        tracing_subscriber::registry().with(chrome_layer).init();
        Some(guard)
    } else {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_max_level(Level::WARN)
            .init();
        None
    }
}

fn main() -> io::Result<()> {
    let _guard = init_tracing();
    let capacity = match env::args().nth(1) {
        Some(arg) => arg.parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid capacity {arg}: {e}"),
            )
        })?,
        None => DEFAULT_CAPACITY,
    };
    let mut session =
        Session::new(capacity).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let mut buffer = String::new();
    loop {
        if io::stdin().read_line(&mut buffer)? == 0 {
            break;
        }
        if !buffer.trim().is_empty() {
            match reader::read_console_line(&buffer, &mut session) {
                Ok(Control::Quit) => break,
                Ok(Control::Continue) => {}
                Err(e) => eprintln!("{e}"),
            }
        }
        buffer.clear();
    }
    Ok(())
}
