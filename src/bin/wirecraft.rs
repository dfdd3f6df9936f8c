use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

use wirecraft::{Document, PipelineOpts, RasterOpts, Rasterizer, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "wirecraft", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` wins when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a wireframe document and print the issues as JSON.
    Validate(ValidateArgs),
    /// Print the styled tree as JSON.
    Style(StyleArgs),
    /// Paint every screen to SVG, PNG or a JSON command list.
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input wireframe JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Design-system JSON; replaces one embedded in the document.
    #[arg(long)]
    design: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Apply auto-fixes before validating.
    #[arg(long)]
    fix: bool,

    /// Write the (fixed) document here.
    #[arg(long)]
    write: Option<PathBuf>,

    /// Exit with an error when the document has error-severity issues.
    #[arg(long)]
    strict: bool,
}

#[derive(Parser, Debug)]
struct StyleArgs {
    #[command(flatten)]
    input: InputArgs,

    #[arg(long, value_enum, default_value_t = ThemeChoice::Light)]
    theme: ThemeChoice,

    /// Skip auto-fixes.
    #[arg(long)]
    no_fix: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    #[arg(long, value_enum, default_value_t = FormatChoice::Svg)]
    format: FormatChoice,

    /// Concatenate all screens into one `wireframe.png` (png only).
    #[arg(long)]
    stack: bool,

    /// Viewport width; defaults to `WIRECRAFT_VIEWPORT_WIDTH` or 1440.
    #[arg(long)]
    width: Option<f64>,

    #[arg(long, value_enum, default_value_t = ThemeChoice::Light)]
    theme: ThemeChoice,

    /// Chart placeholder seed; defaults to `WIRECRAFT_CHART_SEED` or 0.
    #[arg(long)]
    seed: Option<u64>,

    /// Device pixels per layout unit (png only).
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Extra directory of .ttf/.otf/.ttc fonts (png only).
    #[arg(long)]
    fonts_dir: Option<PathBuf>,

    /// Paint screens in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Skip auto-fixes.
    #[arg(long)]
    no_fix: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeChoice {
    Light,
    Dark,
}

impl From<ThemeChoice> for ThemeMode {
    fn from(t: ThemeChoice) -> Self {
        match t {
            ThemeChoice::Light => ThemeMode::Light,
            ThemeChoice::Dark => ThemeMode::Dark,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatChoice {
    Svg,
    Png,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Style(args) => cmd_style(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(input: &InputArgs) -> anyhow::Result<Document> {
    let doc = Document::from_path(&input.in_path)
        .with_context(|| format!("load '{}'", input.in_path.display()))?;
    Ok(match &input.design {
        Some(path) => {
            let ds = wirecraft::load_design_system(path)
                .with_context(|| format!("load design system '{}'", path.display()))?;
            doc.with_design_system(Some(ds))
        }
        None => doc,
    })
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{s}");
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let doc = load(&args.input)?;
    let mut def = doc.into_def();

    let fixes = if args.fix {
        wirecraft::auto_fix(&mut def.screens)
    } else {
        wirecraft::FixReport::default()
    };
    let result = wirecraft::validate(&def.screens, def.design_system.as_ref());

    if args.fix {
        print_json(&serde_json::json!({ "fixes": fixes, "validation": result }))?;
    } else {
        print_json(&result)?;
    }

    if let Some(path) = &args.write {
        ensure_parent(path)?;
        let s = serde_json::to_string_pretty(&def).context("serialize document")?;
        std::fs::write(path, s).with_context(|| format!("write '{}'", path.display()))?;
        eprintln!("wrote {}", path.display());
    }

    if args.strict && !result.valid {
        anyhow::bail!("document has {} error(s)", result.stats.errors);
    }
    Ok(())
}

fn cmd_style(args: StyleArgs) -> anyhow::Result<()> {
    let doc = load(&args.input)?;
    let mut def = doc.into_def();
    if !args.no_fix {
        wirecraft::auto_fix(&mut def.screens);
    }
    let styled = wirecraft::beautify(&def.screens, def.design_system.as_ref(), args.theme.into());
    print_json(&styled)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    if args.stack && args.format != FormatChoice::Png {
        anyhow::bail!("--stack is only supported with --format png");
    }
    let doc = load(&args.input)?;

    let mut opts = PipelineOpts::from_env()?
        .with_theme(args.theme.into())
        .with_auto_fix(!args.no_fix)
        .with_parallel(args.parallel)
        .with_threads(args.threads);
    if let Some(w) = args.width {
        opts = opts.with_viewport_width(w);
    }
    if let Some(seed) = args.seed {
        opts = opts.with_chart_seed(seed);
    }

    let out = wirecraft::run(doc, &opts)?;
    for issue in out.validation.errors() {
        eprintln!("{issue}");
    }
    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;

    match args.format {
        FormatChoice::Svg => {
            for (i, page) in out.pages.iter().enumerate() {
                let path = args.out.join(page_file_name(i, &page.screen, "svg"));
                std::fs::write(&path, page.to_svg())
                    .with_context(|| format!("write svg '{}'", path.display()))?;
                eprintln!("wrote {}", path.display());
            }
        }
        FormatChoice::Json => {
            let path = args.out.join("pages.json");
            let s = serde_json::to_string_pretty(&out.pages).context("serialize pages")?;
            std::fs::write(&path, s).with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        FormatChoice::Png => {
            let mut raster = RasterOpts::default().with_scale(args.scale);
            if let Some(dir) = &args.fonts_dir {
                raster = raster.with_fonts_dir(dir);
            }
            let rasterizer = Rasterizer::new(&raster)?;
            let frames = wirecraft::rasterize_pages(&out.pages, &rasterizer, &opts.render_opts())?;

            if args.stack {
                let background = out
                    .pages
                    .first()
                    .map_or(wirecraft::Rgba8::opaque(0xFF, 0xFF, 0xFF), |p| p.background);
                let stacked = wirecraft::stack_pages(&frames, 24, background)?;
                let path = args.out.join("wireframe.png");
                wirecraft::write_png(&stacked, &path)?;
                eprintln!("wrote {}", path.display());
            } else {
                for (i, (page, frame)) in out.pages.iter().zip(&frames).enumerate() {
                    let path = args.out.join(page_file_name(i, &page.screen, "png"));
                    wirecraft::write_png(frame, &path)?;
                    eprintln!("wrote {}", path.display());
                }
            }
        }
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

/// `03-sign-in.svg` style names: index prefix plus a lowercase slug of the screen name.
fn page_file_name(index: usize, screen: &str, ext: &str) -> String {
    let mut slug = String::new();
    for ch in screen.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    let slug = if slug.is_empty() { "screen" } else { slug };
    format!("{index:02}-{slug}.{ext}")
}
