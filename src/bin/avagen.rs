use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use avagen::{AvatarGenerator, GeneratorConfig};

#[derive(Parser, Debug)]
#[command(name = "avagen", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate an avatar PNG for an identifier.
    Generate(GenerateArgs),
    /// List variant names found in the asset catalog.
    Variants(VariantsArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Identifier seeding the part selection (same id, same avatar).
    #[arg(long)]
    id: String,

    /// Variant (asset subdirectory) to draw parts from.
    #[arg(long)]
    variant: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Asset root directory (overrides the config's parts_location).
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Generator configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct VariantsArgs {
    /// Asset root directory (overrides the config's parts_location).
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Generator configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Variants(args) => cmd_variants(args),
    }
}

fn load_config(
    config: Option<&PathBuf>,
    assets: Option<PathBuf>,
) -> anyhow::Result<GeneratorConfig> {
    let mut cfg = match config {
        Some(path) => GeneratorConfig::from_path(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(root) = assets {
        cfg.parts_location = root;
    }
    Ok(cfg)
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref(), args.assets)?;
    let generator = AvatarGenerator::new(cfg)?;
    let avatar = generator.generate(&args.id, &args.variant)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        avatar.as_rgba8(),
        avatar.width(),
        avatar.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_variants(args: VariantsArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref(), args.assets)?;
    let generator = AvatarGenerator::new(cfg)?;
    for variant in generator.variants() {
        println!("{variant}");
    }
    Ok(())
}
