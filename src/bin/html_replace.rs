use sitesweep::core::constants::snippets;
use sitesweep::core::error::Result;
use sitesweep::replace::replace_in_dir;

use std::path::Path;

/// Rewrite the hardcoded header snippet across every `.html` file in the
/// current directory. No arguments, no prompts; errors terminate the run.
fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<()> {
    let summary = replace_in_dir(Path::new("."), snippets::OLD_HEADER, snippets::NEW_HEADER)?;

    for file_name in &summary.modified {
        println!("Modified: {file_name}");
    }
    println!("Total files modified: {}", summary.modified_count());

    Ok(())
}
