use clap::Parser;
use img2ctrpf::{ConvertRequest, Reporter, ScreenTarget, convert, report};
use img2ctrpf::imaging::RustBackend;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "img2ctrpf")]
#[command(about = "Convert a still image into CTRPluginFramework drawing code")]
#[command(long_about = "\
Convert a still image into CTRPluginFramework drawing code

The output is a plugin source tree ready to drop into a CTRPF project:

  generated/
  ├── Includes/
  │   └── draw_image.hpp       # declaration header
  └── Sources/
      ├── draw_image.cpp       # the image, embedded as pixel arrays
      └── cheats.cpp           # stub

By default the image is drawn centered on the top screen at its natural
size. Images larger than the screen (400x240 top, 320x240 bottom) are
resized to fill it exactly; --width/--height request a specific size, as
long as it fits. The input file itself is never modified.

Example:

  img2ctrpf splash.png --bottom --output my_plugin")]
#[command(version)]
struct Cli {
    /// Image file to embed (PNG, JPEG, GIF, BMP, TIFF, WebP)
    file: PathBuf,

    /// X position to draw at (default centers horizontally)
    #[arg(short = 'x', long = "start-x")]
    start_x: Option<i32>,

    /// Y position to draw at (default centers vertically)
    #[arg(short = 'y', long = "start-y")]
    start_y: Option<i32>,

    /// Width to draw at, 1-400 (1-320 for the bottom screen)
    #[arg(short = 'W', long, value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,

    /// Height to draw at, 1-240
    #[arg(short = 'H', long, value_parser = clap::value_parser!(u32).range(1..))]
    height: Option<u32>,

    /// Draw on the bottom screen instead of the top one
    #[arg(short = 'b', long)]
    bottom: bool,

    /// Suppress informational output (errors still go to stderr)
    #[arg(short = 's', long)]
    silent: bool,

    /// Directory for the generated source tree (replaced if it exists)
    #[arg(short = 'O', long, default_value = "generated")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    let reporter = Reporter::new(!cli.silent);

    let request = ConvertRequest {
        source: cli.file,
        output_dir: cli.output,
        x: cli.start_x,
        y: cli.start_y,
        width: cli.width,
        height: cli.height,
        target: if cli.bottom {
            ScreenTarget::Bottom
        } else {
            ScreenTarget::Top
        },
    };

    match convert(&RustBackend::new(), &request, &reporter) {
        Ok(summary) => report::print_summary(&reporter, &summary),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
