//! Command-line entry point for the `pathwise` engines.
//!
//! All functionality lives in the library crate; this binary only wires
//! up the process.

fn main() -> anyhow::Result<()> {
    pathwise::run()
}
