use folder_scaffold::{cli, layout};

fn main() -> anyhow::Result<()> {
    cli::run(&layout::FULL)
}
