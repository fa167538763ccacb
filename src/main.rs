use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use fig2layout::types::{DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH};
use fig2layout::{InputFormat, TransformOptions};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fig2layout")]
#[command(version, about = "Simplify Figma API responses into layout/style JSON")]
#[command(long_about = "Simplify Figma API responses into layout/style JSON\n\n\
    JSON output is pretty-printed by default with indentation.\n\
    Input may be plain JSON, gzip or Zstandard compressed.\n\n\
    For a single response file:\n  \
    fig2layout response.json [-o output.json] [--node-id 1-2] [--compact] [-v]\n\n\
    For ZIP files (extracts all and converts all .json files inside):\n  \
    fig2layout responses.zip extract-dir [--compact] [-v]")]
struct Cli {
    /// Input response file (.json, .json.gz, .json.zst or .zip)
    input: PathBuf,

    /// Directory to extract ZIP contents (required for ZIP files, converts all .json files found)
    extract_dir: Option<PathBuf>,

    /// Output JSON file path (default: stdout) - Cannot be used with extract_dir
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Node to convert from a nodes response (`1-2` or `1:2`)
    #[arg(long)]
    node_id: Option<String>,

    /// Maximum node depth before giving up (the root is depth 0)
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Compact JSON output (default is pretty-printed with indentation)
    #[arg(long)]
    compact: bool,

    /// Verbose output for debugging
    #[arg(short, long)]
    verbose: bool,

    /// Generate both transformed .json and raw .raw.json files (without transformations)
    #[arg(long)]
    raw: bool,

    /// Print the node IDs of the selected document, one per line, instead of converting
    #[arg(long)]
    ids: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    check_max_depth(&cli)?;

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    info!("Reading input file: {}", cli.input.display());

    let bytes = fs::read(&cli.input)
        .with_context(|| format!("Failed to read input file: {}", cli.input.display()))?;

    debug!("File size: {} bytes", bytes.len());

    let options = TransformOptions::new(cli.max_depth);
    let node_id = cli.node_id.as_deref();

    if fig2layout::input::detect_input_format(&bytes) == InputFormat::Zip {
        let extract_dir = zip_extract_dir(&cli)?;
        return handle_zip_mode(&bytes, extract_dir, &cli, &options);
    }

    if cli.extract_dir.is_some() {
        bail!("Extraction directory is only valid for ZIP input");
    }

    if cli.ids {
        let raw = fig2layout::convert_raw(&bytes, node_id).context("Failed to select document")?;
        for id in fig2layout::api::collect_node_ids(&raw) {
            println!("{}", id);
        }
        return Ok(());
    }

    info!("Converting to layout JSON...");

    let json = fig2layout::convert(&bytes, node_id, &options)
        .context("Failed to convert response to layout JSON")?;

    let output = format_json(&json, cli.compact)?;

    match cli.output.as_ref() {
        Some(path) => {
            info!("Writing output to: {}", path.display());
            fs::write(path, &output)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        }
        None => {
            println!("{}", output);
        }
    }

    if cli.raw {
        let raw_json = fig2layout::convert_raw(&bytes, node_id)
            .context("Failed to extract raw document")?;

        // Derive .raw.json from the output path, or from the input path for stdout
        let raw_path = match cli.output.as_ref() {
            Some(path) => fig2layout::input::raw_output_path(path),
            None => fig2layout::input::raw_output_path(&cli.input),
        };

        info!("Writing raw output to: {}", raw_path.display());

        fs::write(&raw_path, format_json(&raw_json, cli.compact)?)
            .with_context(|| format!("Failed to write raw output file: {}", raw_path.display()))?;
    }

    Ok(())
}

/// Reject depth bounds the JSON parser cannot honour
fn check_max_depth(cli: &Cli) -> Result<()> {
    if cli.max_depth > MAX_SUPPORTED_DEPTH {
        bail!(
            "--max-depth {} is above the supported maximum of {}",
            cli.max_depth,
            MAX_SUPPORTED_DEPTH
        );
    }
    Ok(())
}

/// Validate ZIP mode arguments: require extract_dir, forbid -o and --ids
fn zip_extract_dir(cli: &Cli) -> Result<&Path> {
    let extract_dir = cli
        .extract_dir
        .as_deref()
        .ok_or_else(|| anyhow!("ZIP files require an extraction directory as second argument"))?;

    if cli.output.is_some() {
        bail!("Cannot use -o/--output flag with extraction directory (ZIP mode)");
    }

    if cli.ids {
        bail!("Cannot use --ids flag with extraction directory (ZIP mode)");
    }

    if extract_dir.exists() {
        bail!(
            "Extraction directory already exists: {}\nPlease remove it first",
            extract_dir.display()
        );
    }

    Ok(extract_dir)
}

/// Handle ZIP extraction mode: extract all files and convert all .json files found
fn handle_zip_mode(
    zip_bytes: &[u8],
    extract_dir: &Path,
    cli: &Cli,
    options: &TransformOptions,
) -> Result<()> {
    info!("ZIP file detected - extracting to: {}", extract_dir.display());

    fig2layout::input::extract_zip_to_directory(zip_bytes, extract_dir)
        .context("Failed to extract ZIP file")?;

    let json_files =
        fig2layout::input::find_json_files(extract_dir).context("Failed to find response files")?;

    let file_count = json_files.len();
    info!("Found {} .json file(s)", file_count);

    let node_id = cli.node_id.as_deref();

    for json_path in json_files {
        info!(
            "Converting: {}",
            json_path.strip_prefix(extract_dir).unwrap_or(&json_path).display()
        );

        let response_bytes = fs::read(&json_path)
            .with_context(|| format!("Failed to read response file: {}", json_path.display()))?;

        let json = fig2layout::convert(&response_bytes, node_id, options)
            .with_context(|| format!("Failed to convert: {}", json_path.display()))?;

        let output_path = fig2layout::input::layout_output_path(&json_path);
        fs::write(&output_path, format_json(&json, cli.compact)?)
            .with_context(|| format!("Failed to write output: {}", output_path.display()))?;

        debug!(
            "  -> {}",
            output_path.strip_prefix(extract_dir).unwrap_or(&output_path).display()
        );

        if cli.raw {
            let raw_json = fig2layout::convert_raw(&response_bytes, node_id)
                .with_context(|| format!("Failed to extract raw document: {}", json_path.display()))?;

            let raw_output_path = fig2layout::input::raw_output_path(&json_path);
            fs::write(&raw_output_path, format_json(&raw_json, cli.compact)?).with_context(|| {
                format!("Failed to write raw output: {}", raw_output_path.display())
            })?;
        }
    }

    info!("Done! Converted {} file(s)", file_count);

    Ok(())
}

/// Format output (pretty by default, compact if requested)
fn format_json(json: &serde_json::Value, compact: bool) -> Result<String> {
    let output = if compact {
        serde_json::to_string(json)?
    } else {
        serde_json::to_string_pretty(json)?
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_zip_mode_rejects_ids() {
        let cli = parse(&["fig2layout", "responses.zip", "missing-extract-dir", "--ids"]);

        let err = zip_extract_dir(&cli).unwrap_err();
        assert!(err.to_string().contains("--ids"));
    }

    #[test]
    fn test_zip_mode_rejects_output() {
        let cli = parse(&["fig2layout", "responses.zip", "missing-extract-dir", "-o", "out.json"]);

        assert!(zip_extract_dir(&cli).is_err());
    }

    #[test]
    fn test_zip_mode_requires_extract_dir() {
        let cli = parse(&["fig2layout", "responses.zip"]);

        assert!(zip_extract_dir(&cli).is_err());
    }

    #[test]
    fn test_zip_mode_accepts_new_extract_dir() {
        let cli = parse(&["fig2layout", "responses.zip", "missing-extract-dir"]);

        assert_eq!(zip_extract_dir(&cli).unwrap(), Path::new("missing-extract-dir"));
    }

    #[test]
    fn test_max_depth_bounds() {
        let cli = parse(&["fig2layout", "response.json"]);
        assert_eq!(cli.max_depth, DEFAULT_MAX_DEPTH);
        assert!(check_max_depth(&cli).is_ok());

        let max = MAX_SUPPORTED_DEPTH.to_string();
        assert!(check_max_depth(&parse(&["fig2layout", "response.json", "--max-depth", &max])).is_ok());

        let over = (MAX_SUPPORTED_DEPTH + 1).to_string();
        assert!(check_max_depth(&parse(&["fig2layout", "response.json", "--max-depth", &over])).is_err());
    }
}
