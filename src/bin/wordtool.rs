use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use word_regions::tools::{
    OVERLAY_RED, crop_boxes, draw_boxes, grayscale_stats, load_raster, load_rgba, mask_stats,
    save_crops,
};
use word_regions::utils::binarization::binarize_with_threshold;
use word_regions::utils::grayscale::rgb_to_gray_mean;
use word_regions::{DetectorConfig, Raster, Result, WordDetector};

#[derive(Parser)]
#[command(name = "wordtool", version, about = "Word region detection tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print one `x0 y0 x1 y1` line per detected word
    Detect {
        #[arg(long)]
        image: PathBuf,
        #[command(flatten)]
        tuning: Tuning,
    },
    /// Draw word boxes over the image and save the result
    Overlay {
        #[arg(long)]
        image: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Outline width in pixels
        #[arg(long, default_value_t = 2)]
        thickness: usize,
        #[command(flatten)]
        tuning: Tuning,
    },
    /// Save each word region as word_{i}.png
    Crop {
        #[arg(long)]
        image: PathBuf,
        #[arg(long)]
        out_dir: PathBuf,
        #[command(flatten)]
        tuning: Tuning,
    },
    /// Print grayscale/binary stats and per-stage counts for an image
    Debug {
        #[arg(long)]
        image: PathBuf,
        #[command(flatten)]
        tuning: Tuning,
    },
}

/// Threshold overrides; anything unset comes from WORDS_* or the defaults
#[derive(Args, Clone, Copy)]
struct Tuning {
    /// Binarization threshold (intensity <= threshold is ink)
    #[arg(long)]
    threshold: Option<u8>,
    /// Minimum component extent in x (exclusive)
    #[arg(long)]
    min_width: Option<usize>,
    /// Minimum component extent in y (exclusive)
    #[arg(long)]
    min_height: Option<usize>,
    /// Maximum horizontal gap merged into one word
    #[arg(long)]
    horizontal: Option<usize>,
    /// Maximum y0 distance from a line's anchor
    #[arg(long)]
    vertical: Option<usize>,
    /// Binarize rows in parallel
    #[arg(long)]
    parallel: bool,
}

impl Tuning {
    fn config(self) -> DetectorConfig {
        let mut config = DetectorConfig::from_env();
        if let Some(t) = self.threshold {
            config.threshold = t;
        }
        if let Some(w) = self.min_width {
            config.min_width = w;
        }
        if let Some(h) = self.min_height {
            config.min_height = h;
        }
        if let Some(h) = self.horizontal {
            config.horizontal_threshold = h;
        }
        if let Some(v) = self.vertical {
            config.vertical_threshold = v;
        }
        config.parallel |= self.parallel;
        config
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Detect { image, tuning } => detect_cmd(&image, tuning.config()),
        Command::Overlay {
            image,
            out,
            thickness,
            tuning,
        } => overlay_cmd(&image, &out, thickness, tuning.config()),
        Command::Crop {
            image,
            out_dir,
            tuning,
        } => crop_cmd(&image, &out_dir, tuning.config()),
        Command::Debug { image, tuning } => debug_cmd(&image, tuning.config()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("wordtool: {err}");
            ExitCode::FAILURE
        }
    }
}

fn detect_cmd(image: &Path, config: DetectorConfig) -> Result<()> {
    let raster = load_raster(image)?;
    let words = WordDetector::with_config(config).detect(&raster);
    for w in &words {
        println!("{} {} {} {}", w.x0, w.y0, w.x1, w.y1);
    }
    Ok(())
}

fn overlay_cmd(image: &Path, out: &Path, thickness: usize, config: DetectorConfig) -> Result<()> {
    let mut rgba = load_rgba(image)?;
    let raster = Raster::from(rgba.clone());
    let words = WordDetector::with_config(config).detect(&raster);
    draw_boxes(&mut rgba, &words, OVERLAY_RED, thickness);
    rgba.save(out)?;
    println!("Drew {} word boxes into {}", words.len(), out.display());
    Ok(())
}

fn crop_cmd(image: &Path, out_dir: &Path, config: DetectorConfig) -> Result<()> {
    let rgba = load_rgba(image)?;
    let raster = Raster::from(rgba.clone());
    let words = WordDetector::with_config(config).detect(&raster);
    let crops = crop_boxes(&rgba, &words);
    let paths = save_crops(out_dir, &crops)?;
    println!("Saved {} word images to {}", paths.len(), out_dir.display());
    Ok(())
}

fn debug_cmd(image: &Path, config: DetectorConfig) -> Result<()> {
    let raster = load_raster(image)?;
    println!(
        "Image: {} ({}x{})",
        image.display(),
        raster.width(),
        raster.height()
    );

    let gray = rgb_to_gray_mean(&raster);
    let gray_stats = grayscale_stats(&gray);
    println!(
        "Grayscale range: {}-{}, average: {}",
        gray_stats.min, gray_stats.max, gray_stats.avg
    );

    let stats = mask_stats(&binarize_with_threshold(&raster, config.threshold));
    println!(
        "Binary: foreground_pixels={} total={} foreground_ratio={:.2}%",
        stats.foreground_pixels,
        stats.total_pixels,
        stats.foreground_ratio * 100.0
    );

    let start = Instant::now();
    let report = WordDetector::with_config(config).detect_with_report(&raster);
    let elapsed = start.elapsed();
    println!(
        "Config: threshold={} min={}x{} horizontal={} vertical={} parallel={}",
        config.threshold,
        config.min_width,
        config.min_height,
        config.horizontal_threshold,
        config.vertical_threshold,
        config.parallel
    );
    println!(
        "Components: {} found, {} kept; lines: {}; words: {}",
        report.component_count,
        report.components.len(),
        report.line_count,
        report.words.len()
    );
    for (i, word) in report.words.iter().take(10).enumerate() {
        println!(
            "  Word {}: {} from {} components",
            i,
            word.bbox,
            word.members.len()
        );
    }
    println!("Pipeline time: {:.2?}", elapsed);
    Ok(())
}
