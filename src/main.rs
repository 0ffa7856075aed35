use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use img_cli::{
    params::{self, FailFast, ParamSource, Prompter, ResizeArgs},
    resize, Catalog, Error, FileOutcome, ResizeTarget, Xpack,
};
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:

   Resize a single image (asks for anything left out):

   img-cli resize
   img-cli resize d:/1024.png d:/yilabao/resize.png 512 512

   Generate the packaging images (logo image first):

   img-cli xpack d:/logo.png d:/LaunchImage.png d:/yilabao/

   Version and help:

   img-cli -v
   img-cli -h
";

#[derive(Debug, Parser)]
#[clap(
    name = "img-cli",
    version,
    about = "Resize images for iOS and Android app packaging",
    after_help = EXAMPLES,
    disable_version_flag = true
)]
struct Args {
    /// Print version
    #[clap(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resize one image to the given width and height
    #[clap(alias = "re")]
    Resize {
        /// Source image
        #[clap(value_name = "SRC_IMG")]
        src: Option<String>,

        /// Output file, never overwritten if it already exists
        #[clap(value_name = "OUT_PATH")]
        out: Option<String>,

        #[clap(value_name = "WIDTH")]
        width: Option<String>,

        #[clap(value_name = "HEIGHT")]
        height: Option<String>,

        /// Fail instead of asking for missing arguments
        #[clap(long)]
        no_prompt: bool,
    },

    /// Generate the iOS and Android icon and launch image set
    #[clap(
        alias = "xp",
        after_help = "Examples:\n img-cli xpack d:/logo.png d:/LaunchImage.png d:/yilabao/"
    )]
    Xpack {
        /// Square PNG logo
        #[clap(value_name = "SRC_LOGO_IMAGE")]
        logo: PathBuf,

        /// PNG launch image
        #[clap(value_name = "SRC_LAUNCH_IMAGE")]
        launch: PathBuf,

        /// Output directory
        #[clap(value_name = "OUT_DIR")]
        out_dir: String,

        /// JSON file replacing the built-in size catalog
        #[clap(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_logger();

    if std::env::args_os().len() == 1 {
        println!("\n{EXAMPLES}");
        return Ok(());
    }

    let args = Args::parse();
    match args.command {
        Some(Commands::Resize {
            src,
            out,
            width,
            height,
            no_prompt,
        }) => {
            let args = ResizeArgs {
                src,
                out,
                width,
                height,
            };
            run_resize(&args, no_prompt)
        }
        Some(Commands::Xpack {
            logo,
            launch,
            out_dir,
            catalog,
        }) => run_xpack(Xpack::new(logo, launch, out_dir), catalog),
        None => {
            println!("\n{EXAMPLES}");
            Ok(())
        }
    }
}

fn init_logger() {
    let env = env_logger::Env::default().filter_or("IMG_CLI_LOG", "info");
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run_resize(args: &ResizeArgs, no_prompt: bool) -> Result<()> {
    let mut source: Box<dyn ParamSource> = if no_prompt {
        Box::new(FailFast)
    } else {
        Box::new(Prompter::default())
    };
    let params = params::resolve_with(args, source.as_mut())?;

    let image = resize::load_source(&params.src)?;
    let target = ResizeTarget::new(&params.out, params.width, params.height);
    match resize::resize_to_file(&image, &target) {
        FileOutcome::Written(path) => {
            println!(
                "✓ Generated {} ({}x{})",
                path.display(),
                params.width,
                params.height
            );
            Ok(())
        }
        FileOutcome::AlreadyExists(_) => Ok(()),
        FileOutcome::Failed { path, reason } => {
            Err(Error::UnwritableDestination { path, reason }.into())
        }
    }
}

fn run_xpack(xpack: Xpack, catalog: Option<PathBuf>) -> Result<()> {
    let catalog = match catalog {
        Some(path) => Catalog::from_path(&path)?,
        None => Catalog::builtin(),
    };

    let report = xpack
        .run(&catalog)
        .with_context(|| format!("Can't generate packaging images in {}", xpack.out_dir))?;

    println!(
        "✓ Generated {} files ({} failed) in {}",
        report.written(),
        report.failed(),
        xpack.out_dir
    );
    Ok(())
}
