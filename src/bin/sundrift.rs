use std::io::Write as _;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sundrift", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one scroll position and print the scene frame as JSON.
    Frame(FrameArgs),
    /// Evaluate the whole scroll range and print one JSON frame per line.
    Sweep(SweepArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Scroll offset in pixels.
    #[arg(long)]
    scroll: u32,

    /// Viewport height in pixels (must be > 0).
    #[arg(long)]
    viewport: u32,

    /// Evaluate with the reduced-motion preference set.
    #[arg(long)]
    reduced_motion: bool,

    /// Evaluate the pre-mount fallback frame instead of the live one.
    #[arg(long)]
    pre_mount: bool,

    /// Print CSS declarations instead of JSON.
    #[arg(long)]
    css: bool,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Viewport height in pixels (must be > 0).
    #[arg(long)]
    viewport: u32,

    /// Number of steps across the four-viewport scroll range.
    #[arg(long, default_value_t = 64)]
    steps: u32,

    /// Evaluate with the reduced-motion preference set.
    #[arg(long)]
    reduced_motion: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let sample = sundrift::ScrollSample::new(args.scroll, args.viewport)
        .with_context(|| "build scroll sample")?;

    let evaluator = if args.pre_mount {
        sundrift::Evaluator::new(args.reduced_motion)
    } else {
        sundrift::Evaluator::mounted(args.reduced_motion)
    };
    let frame = evaluator.eval_sample(sample);

    let mut out = std::io::stdout().lock();
    if args.css {
        writeln!(out, "background: {}", sundrift::style::background(&frame))?;
        writeln!(out, "color-primary: {}", sundrift::style::primary_color(&frame))?;
        writeln!(
            out,
            "color-secondary: {}",
            sundrift::style::secondary_color(&frame)
        )?;
        writeln!(
            out,
            "transform-container: {}",
            sundrift::style::transform(&frame.motion.container)
        )?;
        writeln!(
            out,
            "transform-headline: {}",
            sundrift::style::transform(&frame.motion.headline)
        )?;
        writeln!(
            out,
            "transform-tagline: {}",
            sundrift::style::transform(&frame.motion.tagline)
        )?;
        writeln!(out, "{}", sundrift::style::phase_declaration(&frame))?;
    } else {
        serde_json::to_writer_pretty(&mut out, &frame).with_context(|| "serialize frame")?;
        writeln!(out)?;
    }
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    if args.steps == 0 {
        anyhow::bail!("sweep needs at least one step");
    }

    let range = u64::from(args.viewport) * u64::from(sundrift::SCROLL_RANGE_VIEWPORTS);
    let evaluator = sundrift::Evaluator::mounted(args.reduced_motion);

    let mut out = std::io::stdout().lock();
    for step in 0..=args.steps {
        let offset = (range * u64::from(step) / u64::from(args.steps)) as u32;
        let sample = sundrift::ScrollSample::new(offset, args.viewport)
            .with_context(|| format!("build scroll sample at step {step}"))?;
        let frame = evaluator.eval_sample(sample);
        serde_json::to_writer(&mut out, &frame).with_context(|| "serialize frame")?;
        writeln!(out)?;
    }
    Ok(())
}
