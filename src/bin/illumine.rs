// Illumine CLI - terminal front end for the torch
// Renders the light as a status line and previews the advisory prompts

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use illumine::advisor::{FlowInput, OptimizeBrightnessInput, ProvideDistressSignalInput};
use illumine::app_state::Mode;
use illumine::config_file::Config;
use illumine::constants::RENDER_POLL_INTERVAL_MS;
use illumine::signal::pattern::{cycle_duration, step_offsets};
use illumine::style::Frame;
use illumine::utils::color::Color;
use illumine::{config, IllumineCore};
use log::{info, warn};
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

/// Torch with steady, strobe and SOS light modes
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Torch with steady, strobe and SOS light modes",
    long_about = "Torch with steady, strobe and SOS light modes.

MODES:
  normal   Steady light with adjustable brightness and color filter
  strobe   Flashing light, frequency 1 (slow) to 10 (fast)
  sos      Flashes the international ...---... distress signal

CONFIGURATION:
  Defaults are read from config.toml in the user config directory
  (run 'illumine setup' to create it) and can be overridden with
  ILLUMINE_BRIGHTNESS, ILLUMINE_STROBE_FREQUENCY and ILLUMINE_COLOR.
  Command-line flags take precedence over both."
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Switch the torch on and render it in the terminal (default)
    Run(RunArgs),
    /// Print the SOS pattern with the start time of every step
    Pattern,
    /// Print the prompt an advisory flow would send to the provider
    #[command(subcommand)]
    Prompt(PromptCommand),
    /// Interactively save default preferences
    Setup,
}

#[derive(clap::Args, Debug, Default)]
struct RunArgs {
    /// Light mode: normal, strobe or sos
    #[arg(short, long, default_value = "normal")]
    mode: String,

    /// Color filter: white, red, amber, blue (or palette hex code)
    #[arg(short, long)]
    color: Option<String>,

    /// Brightness in percent (0-100)
    #[arg(short, long)]
    brightness: Option<u8>,

    /// Strobe frequency (1-10)
    #[arg(short, long)]
    strobe_frequency: Option<u8>,

    /// Simulated battery level in percent (0-100)
    #[arg(long)]
    battery: Option<u8>,

    /// Stop after this many seconds (runs until interrupted if omitted)
    #[arg(short, long)]
    duration: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum PromptCommand {
    /// Brightness recommendation from ambient light and battery
    Brightness {
        /// Ambient light level in lux
        #[arg(long)]
        ambient_lux: f64,
        /// Current battery percentage (0-100)
        #[arg(long)]
        battery: u8,
        /// Preferred brightness (0-100)
        #[arg(long)]
        preference: Option<u8>,
    },
    /// Distress signal suggestion for a location
    Distress {
        /// Location, e.g. "46.52 N, 6.63 E"
        #[arg(long)]
        location: String,
        /// Surroundings, e.g. mountain, sea, urban
        #[arg(long)]
        environment: Option<String>,
    },
}

/// Helper function to prompt for a value with a default
fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn prompt_number(prompt: &str, default: u8) -> Result<u8> {
    let input = prompt_line(prompt)?;
    if input.is_empty() {
        Ok(default)
    } else {
        input
            .parse::<u8>()
            .with_context(|| format!("Invalid number: {}", input))
    }
}

/// Run interactive setup to save default preferences
fn run_setup() -> Result<()> {
    println!("Illumine Setup");
    println!("==============\n");

    let current = Config::load_or_default().unwrap_or_default();

    let brightness = prompt_number(
        &format!("Brightness 0-100 (default: {}): ", current.brightness),
        current.brightness,
    )?;
    let strobe_frequency = prompt_number(
        &format!("Strobe frequency 1-10 (default: {}): ", current.strobe_frequency),
        current.strobe_frequency,
    )?;
    let color = prompt_line(&format!(
        "Color filter white/red/amber/blue (default: {}): ",
        current.get_color().unwrap_or_default()
    ))?;
    let color = if color.is_empty() {
        current.color.clone()
    } else {
        Some(color)
    };
    let battery_level = prompt_number(
        &format!("Battery level 0-100 (default: {}): ", current.battery_level),
        current.battery_level,
    )?;

    let config = Config::new(brightness, strobe_frequency, color, battery_level)
        .context("Failed to create configuration")?;
    let path = config.save().context("Failed to save configuration")?;

    println!("\nConfiguration saved to: {}", path.display());
    println!("Setup complete!");
    Ok(())
}

fn print_pattern() {
    println!("SOS pattern ({} ms per cycle)", cycle_duration().as_millis());
    println!("{:>5}  {:>7}  {:>8}  light", "step", "start", "duration");
    for (i, (start, step)) in step_offsets().enumerate() {
        println!(
            "{:>5}  {:>5}ms  {:>6}ms  {}",
            i,
            start.as_millis(),
            step.duration_ms,
            if step.on { "on" } else { "off" }
        );
    }
}

fn print_prompt(command: PromptCommand) -> Result<()> {
    let prompt = match command {
        PromptCommand::Brightness {
            ambient_lux,
            battery,
            preference,
        } => OptimizeBrightnessInput {
            ambient_light_level: ambient_lux,
            current_battery_percentage: battery,
            user_brightness_preference: preference,
        }
        .prompt()?,
        PromptCommand::Distress {
            location,
            environment,
        } => ProvideDistressSignalInput {
            location,
            environment,
        }
        .prompt()?,
    };
    println!("{}", prompt);
    Ok(())
}

/// One terminal line describing the light
fn render_line(frame: &Frame, strobe_lit: bool) -> String {
    let settings = &frame.settings;
    let lit = frame.visible && (!frame.strobing || strobe_lit);
    let glyph = if lit { "●" } else { "○" };
    let opacity = if lit { frame.opacity() } else { 0.1 };
    format!(
        "{} {:<7} {:<6} {:>3.0}%  battery {}% ({})",
        glyph,
        settings.mode.label(),
        settings.color.name(),
        opacity * 100.0,
        settings.battery_level,
        frame.battery.indicator()
    )
}

fn run(args: RunArgs) -> Result<()> {
    let core = IllumineCore::new();

    // Precedence: CLI arg > env var > config file > defaults
    let cfg = match Config::load_or_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Ignoring unusable configuration: {:#}", e);
            Config::default()
        }
    };
    core.apply_config(&cfg)?;

    if let Some(brightness) = args.brightness.or_else(config::parse_brightness) {
        core.set_brightness(brightness);
    }
    if let Some(frequency) = args.strobe_frequency.or_else(config::parse_strobe_frequency) {
        core.set_strobe_frequency(frequency);
    }
    let color = match args.color.as_deref() {
        Some(name) => Some(name.parse::<Color>()?),
        None => config::parse_color(),
    };
    if let Some(color) = color {
        core.set_color(color);
    }
    if let Some(battery) = args.battery {
        core.set_battery_level(battery);
    }

    let mode: Mode = args.mode.parse()?;
    core.set_mode(mode);
    core.set_power(true);
    info!("Torch on in {} mode with {} light", core.mode(), core.color());

    let started = Instant::now();
    let deadline = args.duration.map(|secs| started + Duration::from_secs(secs));
    let mut last_line = String::new();

    loop {
        if deadline.is_some_and(|d| Instant::now() >= d) {
            break;
        }

        let frame = core.frame();
        let strobe_lit = frame
            .wrapper
            .strobe_period_secs
            .map(|period| (started.elapsed().as_secs_f32() % period) < period / 2.0)
            .unwrap_or(true);

        let line = render_line(&frame, strobe_lit);
        if line != last_line {
            print!("\r{}", line);
            io::stdout().flush()?;
            last_line = line;
        }

        thread::sleep(Duration::from_millis(RENDER_POLL_INTERVAL_MS));
    }

    if core.is_powered() {
        core.set_power(false);
    }
    println!();
    info!("Torch off after {:.1}s", started.elapsed().as_secs_f32());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    match args.command {
        None => run(RunArgs {
            mode: "normal".to_string(),
            ..RunArgs::default()
        }),
        Some(Command::Run(run_args)) => run(run_args),
        Some(Command::Pattern) => {
            print_pattern();
            Ok(())
        }
        Some(Command::Prompt(command)) => print_prompt(command),
        Some(Command::Setup) => run_setup(),
    }
}
