use anyhow::Result;

fn main() -> Result<()> {
    n2_overlay::run()
}
