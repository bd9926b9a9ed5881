// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;
use polyui_layout::{FlexLayoutEngine, LayoutEngine, ScaleContext};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

mod report;

use report::{LayoutDump, TreeOptions};

#[derive(Parser)]
#[command(name = "polyui-layout")]
#[command(about = "Lays out a PolyUI scene file and prints the resulting geometry")]
struct Args {
    /// Path to the scene .json file
    scene_file: String,

    /// Override the window width from the scene
    #[arg(long)]
    width: Option<f32>,

    /// Override the window height from the scene
    #[arg(long)]
    height: Option<f32>,

    /// Output format (tree, json)
    #[arg(long, default_value = "tree")]
    format: String,

    /// Save output to file instead of stdout
    #[arg(long)]
    output: Option<String>,

    /// Show visible sizes of clipped components
    #[arg(long)]
    show_visible: bool,

    /// Show alignment settings
    #[arg(long)]
    show_align: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so json output stays parseable
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    if !Path::new(&args.scene_file).exists() {
        anyhow::bail!("Scene file not found: {}", args.scene_file);
    }

    info!("Loading scene: {}", args.scene_file);
    let scene = polyui_core::load_scene(&args.scene_file)
        .with_context(|| format!("Failed to load scene: {}", args.scene_file))?;

    let window = Vec2::new(
        args.width.unwrap_or(scene.window.x),
        args.height.unwrap_or(scene.window.y),
    );
    if !(window.x > 0.0 && window.y > 0.0) {
        anyhow::bail!("Window size must be positive, got {}x{}", window.x, window.y);
    }
    let scale = ScaleContext::new(window, scene.reference_size());

    let (mut tree, root) = scene.build().context("Failed to build component tree")?;

    let mut engine = FlexLayoutEngine::new().with_debug(args.debug);
    let result = engine.compute_layout(&tree, root, &scale);
    result.apply(&mut tree);
    for problem in &result.diagnostics {
        warn!("{}", problem);
    }
    info!(
        "Laid out {} components in a {}x{} window",
        tree.len(),
        window.x,
        window.y
    );

    let output_text = match args.format.as_str() {
        "tree" => report::render_tree(
            &tree,
            root,
            TreeOptions {
                show_visible: args.show_visible,
                show_align: args.show_align,
            },
        ),
        "json" => {
            let dump = LayoutDump::new(&tree, root, window, &result.diagnostics);
            let mut json = serde_json::to_string_pretty(&dump).context("Failed to serialize layout")?;
            json.push('\n');
            json
        }
        other => anyhow::bail!("Unknown format: {}. Use 'tree' or 'json'", other),
    };

    if let Some(output_file) = args.output {
        fs::write(&output_file, output_text)
            .with_context(|| format!("Failed to write to file: {}", output_file))?;
        info!("Output written to: {}", output_file);
    } else {
        print!("{}", output_text);
    }

    Ok(())
}
