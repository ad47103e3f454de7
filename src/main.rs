use anyhow::Result;

fn main() -> Result<()> {
    alumni_explorer::cli::run()
}
