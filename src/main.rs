//! # Thaiprint CLI
//!
//! Command-line interface for printing Thai text on ESC/POS thermal printers.
//!
//! ## Usage
//!
//! ```bash
//! # Show the three rows for a line as hex
//! thaiprint render "สวัสดีครับ"
//!
//! # Rows as JSON, one object per stdin line
//! cat menu.txt | thaiprint render --format json
//!
//! # Print a line, switching the printer to Thai Code 42 first
//! thaiprint print --select-codepage --overlay "สวัสดีครับ"
//!
//! # Send raw bytes to stdout instead of a device
//! thaiprint print --stdout --overlay "ขอบคุณ" | nc printer 9100
//! ```

use std::io::{self, BufRead, Write};

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use thaiprint::{
    PrinterConfig, RawSink, ThaiPrintError, logging,
    protocol::commands,
    thai,
    transport::{DeviceTransport, WriteSink, device::DEFAULT_DEVICE},
};

/// Thaiprint - Thai text for ESC/POS thermal printers
#[derive(Parser, Debug)]
#[command(name = "thaiprint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v warn, -vv info, -vvv debug, -vvvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render text into its three rows without printing
    Render {
        /// Line to render (reads stdin line by line when omitted)
        text: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Hex)]
        format: Format,
    },

    /// Print text on the thermal printer
    Print {
        /// Line to print (reads stdin line by line when omitted)
        text: Option<String>,

        /// Printer device path
        #[arg(long, default_value = DEFAULT_DEVICE)]
        device: String,

        /// Write raw printer bytes to stdout instead of the device
        #[arg(long, conflicts_with = "device")]
        stdout: bool,

        /// Printer profile (80mm, 58mm)
        #[arg(long, default_value = "80mm")]
        printer: String,

        /// Initialize the printer and select the Thai code table first
        #[arg(long)]
        select_codepage: bool,

        /// Set zero line spacing around each line so its rows overlay
        #[arg(long)]
        overlay: bool,

        /// Lines to feed after printing
        #[arg(long, value_name = "LINES")]
        feed: Option<u8>,

        /// Feed and cut after printing
        #[arg(long)]
        cut: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// Space-separated hex bytes, one row per line
    Hex,
    /// One JSON object per input line
    Json,
    /// Raw printer bytes
    Raw,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ThaiPrintError> {
    let cli = Cli::parse();

    let level = logging::level_from_env().unwrap_or(logging::level_from_verbosity(cli.verbose));
    logging::init(level);

    match cli.command {
        Commands::Render { text, format } => {
            let lines = read_lines(text)?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for line in &lines {
                render_line(&mut out, line, format)?;
            }
            out.flush()?;
        }
        Commands::Print {
            text,
            device,
            stdout,
            printer,
            select_codepage,
            overlay,
            feed,
            cut,
        } => {
            let printer = PrinterConfig::by_name(&printer)?;
            let lines = read_lines(text)?;

            let mut sink: Box<dyn RawSink> = if stdout {
                Box::new(WriteSink::new(io::stdout()))
            } else {
                Box::new(DeviceTransport::open(&device)?)
            };

            let options = PrintOptions {
                select_codepage,
                overlay,
                feed,
                cut,
            };
            print_lines(sink.as_mut(), &printer, &lines, &options)?;

            if !stdout {
                eprintln!("Printed {} line(s) to {}", lines.len(), device);
            }
        }
    }

    Ok(())
}

/// Use the argument as a single line, or read all of stdin.
fn read_lines(text: Option<String>) -> Result<Vec<String>, ThaiPrintError> {
    match text {
        Some(text) => Ok(vec![text]),
        None => io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(ThaiPrintError::from),
    }
}

fn render_line(out: &mut impl Write, line: &str, format: Format) -> Result<(), ThaiPrintError> {
    let rows = thai::render_thai(line);
    match format {
        Format::Hex => {
            for (label, row) in ["upper", "middle", "lower"].iter().zip(rows.iter()) {
                let hex: Vec<String> = row.iter().map(|b| format!("{:02X}", b)).collect();
                writeln!(out, "{:<7} {}", format!("{}:", label), hex.join(" "))?;
            }
        }
        Format::Json => {
            serde_json::to_writer(&mut *out, &rows)?;
            writeln!(out)?;
        }
        Format::Raw => out.write_all(&rows.to_bytes())?,
    }
    Ok(())
}

struct PrintOptions {
    select_codepage: bool,
    overlay: bool,
    feed: Option<u8>,
    cut: bool,
}

fn print_lines(
    sink: &mut dyn RawSink,
    printer: &PrinterConfig,
    lines: &[String],
    options: &PrintOptions,
) -> Result<(), ThaiPrintError> {
    if options.select_codepage {
        sink.write_raw(&commands::init())?;
        sink.write_raw(&commands::select_code_table_cr(printer.code_table))?;
    }

    for line in lines {
        let columns = thai::render_thai(line).columns();
        if !printer.fits(columns) {
            log::warn!(
                "line is {} columns wide, {} printer fits {}: '{}'",
                columns,
                printer.name,
                printer.columns(),
                line
            );
        }

        if options.overlay {
            sink.write_raw(&commands::line_spacing(0))?;
        }
        thai::print_thai(sink, line)?;
        if options.overlay {
            // rows printed at zero spacing, advance one line before the next
            sink.write_raw(&commands::default_line_spacing())?;
            sink.write_raw(&commands::feed_lines(1))?;
        }
    }

    if let Some(n) = options.feed {
        sink.write_raw(&commands::feed_lines(n))?;
    }
    if options.cut {
        sink.write_raw(&commands::cut_partial_feed(0))?;
    }

    Ok(())
}
