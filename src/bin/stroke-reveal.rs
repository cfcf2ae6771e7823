use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use stroke_reveal::{
    Canvas, RenderOptions, RenderProps, Stroke, StrokeRenderer, SvgDocument,
};

#[derive(Parser, Debug)]
#[command(name = "stroke-reveal", version)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one frame of a stroke reveal.
    Frame(FrameArgs),
    /// Render evenly spaced frames from 0% to 100% revealed.
    Frames(FramesArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Stroke JSON (`path`, `points`, optional `length` and `isInRadical`).
    #[arg(long, required_unless_present = "char_data", conflicts_with = "char_data")]
    stroke: Option<PathBuf>,

    /// Character-data JSON (`strokes`, `medians`, `radStrokes`).
    #[arg(long)]
    char_data: Option<PathBuf>,

    /// Stroke index inside --char-data.
    #[arg(long, default_value_t = 0)]
    index: usize,

    /// Renderer options JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Clip with polygon masks instead of dash offsets (overrides --config).
    #[arg(long)]
    polygon: bool,

    /// Stroke color.
    #[arg(long, default_value = "#555")]
    color: String,

    /// Color used when the stroke belongs to the radical.
    #[arg(long)]
    radical_color: Option<String>,

    /// Outline width of the visible stroke.
    #[arg(long, default_value_t = 2.0)]
    stroke_width: f64,

    /// Stroke opacity.
    #[arg(long, default_value_t = 1.0)]
    opacity: f64,

    /// Output width and height in pixels.
    #[arg(long, default_value_t = 512)]
    size: u32,

    /// viewBox of the glyph coordinate space: "min_x min_y width height".
    #[arg(long, default_value = "0 0 1024 1024")]
    view_box: String,

    /// SVG transform applied to the stroke group, e.g. "translate(0, 900) scale(1, -1)".
    #[arg(long)]
    transform: Option<String>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Revealed fraction in [0, 1].
    #[arg(long, default_value_t = 1.0)]
    portion: f64,

    /// Output SVG path (stdout when neither --svg nor --png is given).
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    png: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Number of frames (at least 2).
    #[arg(long, default_value_t = 10)]
    count: u32,

    /// Output directory for frame_NNNN.svg files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Also rasterize each frame to PNG.
    #[arg(long)]
    png: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read '{}'", path.display()))
}

fn load_stroke(src: &SourceArgs) -> anyhow::Result<Stroke> {
    if let Some(path) = &src.char_data {
        let json = read_text(path)?;
        return Stroke::from_character_json(&json, src.index)
            .with_context(|| format!("load stroke {} from '{}'", src.index, path.display()));
    }
    let path = src
        .stroke
        .as_ref()
        .context("either --stroke or --char-data is required")?;
    let json = read_text(path)?;
    Stroke::from_json_str(&json).with_context(|| format!("parse stroke '{}'", path.display()))
}

fn load_options(src: &SourceArgs) -> anyhow::Result<RenderOptions> {
    let mut opts = match &src.config {
        Some(path) => RenderOptions::from_json_str(&read_text(path)?)
            .with_context(|| format!("parse options '{}'", path.display()))?,
        None => RenderOptions::default(),
    };
    if src.polygon {
        opts.use_polygon_masks = true;
    }
    Ok(opts)
}

fn parse_view_box(s: &str) -> anyhow::Result<[f64; 4]> {
    let parts = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<f64>().with_context(|| format!("viewBox value '{p}'")))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let [x, y, w, h] = parts.as_slice() else {
        anyhow::bail!("viewBox needs four numbers (got '{s}')");
    };
    Ok([*x, *y, *w, *h])
}

fn new_document(src: &SourceArgs) -> anyhow::Result<SvgDocument> {
    let canvas = Canvas {
        width: src.size,
        height: src.size,
    };
    let doc = SvgDocument::new(canvas, parse_view_box(&src.view_box)?);
    Ok(match &src.transform {
        Some(t) => doc.with_root_transform(t),
        None => doc,
    })
}

fn props_for(src: &SourceArgs, portion: f64) -> RenderProps {
    RenderProps {
        display_portion: portion,
        stroke_color: src.color.clone(),
        radical_color: src.radical_color.clone(),
        stroke_width: src.stroke_width,
        opacity: src.opacity,
    }
}

fn write_svg(doc: &SvgDocument, path: &Path) -> anyhow::Result<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, doc.to_svg_string())
        .with_context(|| format!("write svg '{}'", path.display()))
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let stroke = load_stroke(&args.source)?;
    let opts = load_options(&args.source)?;
    let mut doc = new_document(&args.source)?;

    let mut renderer = StrokeRenderer::mount(&stroke, &mut doc, &opts)?;
    renderer.update(&mut doc, &props_for(&args.source, args.portion))?;

    if args.svg.is_none() && args.png.is_none() {
        println!("{}", doc.to_svg_string());
        return Ok(());
    }
    if let Some(path) = &args.svg {
        write_svg(&doc, path)?;
        eprintln!("wrote {}", path.display());
    }
    if let Some(path) = &args.png {
        ensure_parent_dir(path)?;
        doc.save_png(path)?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    if args.count < 2 {
        anyhow::bail!("--count must be at least 2 (got {})", args.count);
    }
    let stroke = load_stroke(&args.source)?;
    let opts = load_options(&args.source)?;
    let mut doc = new_document(&args.source)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut renderer = StrokeRenderer::mount(&stroke, &mut doc, &opts)?;
    let last = f64::from(args.count - 1);
    for i in 0..args.count {
        let portion = f64::from(i) / last;
        renderer.update(&mut doc, &props_for(&args.source, portion))?;

        write_svg(&doc, &args.out_dir.join(format!("frame_{i:04}.svg")))?;
        if args.png {
            doc.save_png(&args.out_dir.join(format!("frame_{i:04}.png")))?;
        }
    }
    renderer.teardown(&mut doc)?;

    eprintln!("wrote {} frames to {}", args.count, args.out_dir.display());
    Ok(())
}
