use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("retime version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
