//! Command-line interface for unshredding single images or whole directories

use crate::algorithm::executor::{ReconstructionConfig, reconstruct_with_observer};
use crate::io::configuration::{
    DEFAULT_PROBE_DEPTH, DEFAULT_RANK_DEPTH, DEFAULT_SEED, INPUT_EXTENSION, OUTPUT_SUFFIX,
    SHRED_SUFFIX,
};
use crate::io::error::{Result, UnshredError, WithContext, invalid_parameter};
use crate::io::image::{export_image, load_rgb_image, render_strips};
use crate::io::progress::ProgressManager;
use crate::io::shred::shred_image;
use crate::spatial::pixels::RgbGrid;
use clap::{ArgAction, Parser};
use log::info;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "unshred")]
#[command(
    author,
    version,
    about = "Reassemble images whose vertical strips were shuffled"
)]
/// Command-line arguments for the unshredder
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image or directory of PNG images to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Output file (single input only; defaults to <input>_unshredded.<ext>)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Extra boundaries folded into the strip width estimate
    #[arg(short, long, default_value_t = DEFAULT_PROBE_DEPTH)]
    pub probe_depth: usize,

    /// Matching rounds over ranked neighbor candidates
    #[arg(short, long, default_value_t = DEFAULT_RANK_DEPTH)]
    pub rank_depth: usize,

    /// Known strip width in pixels (skips detection)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Fail instead of warning when cyclic neighbor chains had to be broken
    #[arg(long)]
    pub strict: bool,

    /// Shred the input into strips of this width instead of reconstructing it
    #[arg(long, value_name = "WIDTH")]
    pub shred: Option<usize>,

    /// Random seed for reproducible shredding
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Increase log detail (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Reconstruction parameters selected on the command line
    pub const fn reconstruction_config(&self) -> ReconstructionConfig {
        ReconstructionConfig {
            probe_depth: self.probe_depth,
            rank_depth: self.rank_depth,
            strip_width: self.width,
            strict: self.strict,
        }
    }

    /// Filename suffix of the files this invocation writes
    pub const fn output_suffix(&self) -> &'static str {
        if self.shred.is_some() {
            SHRED_SUFFIX
        } else {
            OUTPUT_SUFFIX
        }
    }
}

/// Derive `<dir>/<stem><suffix>.<ext>` from an input path
pub fn suffixed_path(input_path: &Path, suffix: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = match input_path.extension() {
        Some(extension) => format!(
            "{}{suffix}.{}",
            stem.to_string_lossy(),
            extension.to_string_lossy()
        ),
        None => format!("{}{suffix}", stem.to_string_lossy()),
    };

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}

/// Orchestrates batch processing of images with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        self.cli.reconstruction_config().validate()?;
        if self.cli.shred == Some(0) {
            return Err(invalid_parameter(
                "shred",
                &0,
                &"strip width must be positive",
            ));
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            let outcome = self.process_file(file, index);
            if let Err(ref error) = outcome {
                if let Some(ref mut pm) = self.progress_manager {
                    pm.fail_file(index, &error.to_string());
                    pm.finish();
                }
            }
            outcome?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Files selected by the target, minus those already processed
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the target does not exist
    /// - `--output` is combined with a directory target
    /// - the directory cannot be read
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;

        if target.is_file() {
            if self.should_process_file(target) {
                Ok(vec![target.clone()])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            if self.cli.output.is_some() {
                return Err(invalid_parameter(
                    "output",
                    &target.display(),
                    &"an explicit output path needs a single input file",
                ));
            }

            let mut files = Vec::new();
            let entries = std::fs::read_dir(target).map_err(|e| UnshredError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;
            for entry in entries {
                let path = entry.with_path(target.clone())?.path();
                if path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
                    && !Self::is_own_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"does not exist",
            ))
        }
    }

    /// Where the result for `input_path` is written
    pub fn output_path(&self, input_path: &Path) -> PathBuf {
        self.cli
            .output
            .clone()
            .unwrap_or_else(|| suffixed_path(input_path, self.cli.output_suffix()))
    }

    // Results of earlier runs sit next to their inputs and must not be re-fed
    fn is_own_output(path: &Path) -> bool {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX) || stem.ends_with(SHRED_SUFFIX))
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path(input_path);
        if output_path.exists() {
            info!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let output_path = self.output_path(input_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let source = load_rgb_image(input_path)?;

        let result = if let Some(strip_width) = self.cli.shred {
            let shredded = shred_image(&source, strip_width, self.cli.seed)?;
            info!(
                "{}: shredded into {} strips, order {:?}",
                input_path.display(),
                shredded.permutation.len(),
                shredded.permutation
            );
            shredded.image
        } else {
            let grid = RgbGrid::from_rgb_image(&source);
            let config = self.cli.reconstruction_config();
            let progress = &mut self.progress_manager;
            let reconstruction = reconstruct_with_observer(&grid, &config, |stage| {
                if let Some(pm) = progress.as_mut() {
                    pm.update_stage(index, stage);
                }
            })?;
            render_strips(&source, &reconstruction.ordered_strips())
        };

        export_image(&result, &output_path)?;
        info!("{} -> {}", input_path.display(), output_path.display());

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(())
    }
}
