use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "imganim", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit the form and write `output.html` into a directory.
    Export(ExportArgs),
    /// Submit the form and print the generated HTML to stdout.
    Print(FormArgs),
    /// Submit the form without exporting anything.
    Check(FormArgs),
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[command(flatten)]
    form: FormArgs,

    /// Directory that receives `output.html`.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct FormArgs {
    /// Form JSON (camelCase field names). Flags below override its values.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Image path; only the part after the last `\` is exported.
    #[arg(long)]
    image: Option<String>,

    /// Animation identifier (`slideInFromTop` or `zoomInFromBottom`).
    #[arg(long)]
    animation: Option<String>,

    /// Image width in pixels.
    #[arg(long)]
    image_size: Option<String>,

    /// Container width in pixels.
    #[arg(long)]
    container_width: Option<String>,

    /// Container height in pixels.
    #[arg(long)]
    container_height: Option<String>,

    /// Horizontal image offset in pixels.
    #[arg(long = "position-x")]
    position_x: Option<String>,

    /// Vertical image offset in pixels.
    #[arg(long = "position-y")]
    position_y: Option<String>,

    /// Emit `width`/`height` for the container instead of the lower-cased field names.
    #[arg(long)]
    standard_css: bool,
}

/// Prints alerts to stderr.
struct StderrAlert;

impl imganim::Alert for StderrAlert {
    fn alert(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.cmd {
        Command::Export(args) => cmd_export(args),
        Command::Print(args) => cmd_print(args),
        Command::Check(args) => cmd_check(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<imganim::ImgAnimError>() {
            // The alert already told the user.
            Some(imganim::ImgAnimError::InvalidForm) => ExitCode::from(2),
            _ => {
                eprintln!("error: {err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_form_json(path: &Path) -> anyhow::Result<imganim::FormState> {
    let f = File::open(path).with_context(|| format!("open form '{}'", path.display()))?;
    let r = BufReader::new(f);
    let form: imganim::FormState =
        serde_json::from_reader(r).with_context(|| "parse form JSON")?;
    Ok(form)
}

fn build_form(args: &FormArgs) -> anyhow::Result<imganim::ExportForm<StderrAlert>> {
    let style = imganim::StyleOptions {
        naming: if args.standard_css {
            imganim::PropertyNaming::Standard
        } else {
            imganim::PropertyNaming::Literal
        },
    };
    let mut form = imganim::ExportForm::with_alert(StderrAlert).style_options(style);

    if let Some(path) = &args.in_path {
        form.fill(&read_form_json(path)?);
    }

    let overrides = [
        (imganim::Field::Image, &args.image),
        (imganim::Field::Animation, &args.animation),
        (imganim::Field::ImageSize, &args.image_size),
        (imganim::Field::ContainerWidth, &args.container_width),
        (imganim::Field::ContainerHeight, &args.container_height),
        (imganim::Field::ImagePositionX, &args.position_x),
        (imganim::Field::ImagePositionY, &args.position_y),
    ];
    for (field, value) in overrides {
        if let Some(v) = value {
            form.set(field, v.as_str());
        }
    }

    Ok(form)
}

fn submit(args: &FormArgs) -> anyhow::Result<imganim::ExportForm<StderrAlert>> {
    let mut form = build_form(args)?;
    form.on_submit()?;
    Ok(form)
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let form = submit(&args.form)?;
    let mut sink = imganim::FsSink::new(&args.out_dir);
    form.export(&mut sink)?;

    eprintln!(
        "wrote {}",
        sink.target_path(imganim::OUTPUT_FILE_NAME).display()
    );
    Ok(())
}

fn cmd_print(args: FormArgs) -> anyhow::Result<()> {
    let form = submit(&args)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(form.html().as_bytes())
        .context("write html to stdout")?;
    Ok(())
}

fn cmd_check(args: FormArgs) -> anyhow::Result<()> {
    let form = submit(&args)?;
    if let Some(sub) = form.submission() {
        if imganim::Animation::from_id(&sub.animation_class).is_none() {
            tracing::warn!(
                animation = %sub.animation_class,
                "animation is not recognized; the export will carry no keyframes"
            );
        }
        println!(
            "ok: {}/{} ({})",
            imganim::ASSETS_DIR, sub.image_url, sub.animation_class
        );
    }
    Ok(())
}
