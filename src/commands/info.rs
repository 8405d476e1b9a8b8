use crate::libs::error::Result;
use crate::libs::messages::Message;
use std::io::Write;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", Message::Version(VERSION.to_string()))?;
    Ok(())
}

/// Version line followed by the usage text.
pub fn usage<W: Write>(out: &mut W) -> Result<()> {
    version(out)?;
    writeln!(out, "{}", Message::Usage)?;
    Ok(())
}
