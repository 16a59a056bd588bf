use crate::board::BoardState;
use crate::cli::output;
use crate::db::DbConnection;
use crate::models::{DisplayMode, PeriodFilter};
use crate::repo::OrderRepo;
use crate::utils::parse_date_arg;
use anyhow::{anyhow, Result};
use chrono::Local;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "orderboard")]
#[command(about = "Order board - a command-line viewer for delivery work orders")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the order board
    List {
        /// Delivery period: today, tomorrow, both, custom
        #[arg(long, default_value = "today")]
        period: String,
        /// Window start for --period custom (YYYY-MM-DD, today, tomorrow)
        #[arg(long)]
        from: Option<String>,
        /// Window end for --period custom (YYYY-MM-DD, today, tomorrow)
        #[arg(long)]
        to: Option<String>,
        /// Completion state: incomplete, completed, all
        #[arg(long, default_value = "incomplete")]
        mode: String,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
        /// Disable group color bands (rows alternate plain instead)
        #[arg(long = "no-color")]
        no_color: bool,
    },
    /// Print the resolved order store path
    Path,
}

/// Entry point for the orderboard CLI
pub fn run() -> Result<()> {
    // Windows consoles need ANSI enabled explicitly; a no-op elsewhere
    let _ = enable_ansi_support::enable_ansi_support();
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::List {
            period,
            from,
            to,
            mode,
            json,
            no_color,
        } => handle_list(&period, from.as_deref(), to.as_deref(), &mode, json, no_color),
        Commands::Path => handle_path(),
    }
}

/// Turn the --period/--from/--to arguments into a period filter
fn resolve_period(period: &str, from: Option<&str>, to: Option<&str>) -> Result<PeriodFilter> {
    if period != "custom" && (from.is_some() || to.is_some()) {
        return Err(anyhow!("--from/--to only apply with --period custom"));
    }
    match period {
        "today" => Ok(PeriodFilter::Today),
        "tomorrow" => Ok(PeriodFilter::Tomorrow),
        "both" => Ok(PeriodFilter::TodayAndTomorrow),
        "custom" => {
            let from = from.ok_or_else(|| anyhow!("--period custom requires --from"))?;
            let to = to.ok_or_else(|| anyhow!("--period custom requires --to"))?;
            Ok(PeriodFilter::Custom {
                start: parse_date_arg(from)?,
                end: parse_date_arg(to)?,
            })
        }
        _ => Err(anyhow!(
            "Invalid period: '{}'. Use today, tomorrow, both, or custom.",
            period
        )),
    }
}

fn handle_list(
    period: &str,
    from: Option<&str>,
    to: Option<&str>,
    mode: &str,
    json: bool,
    no_color: bool,
) -> Result<()> {
    let period = resolve_period(period, from, to)?;
    let mode = DisplayMode::from_str(mode).ok_or_else(|| {
        anyhow!("Invalid mode: '{}'. Use incomplete, completed, or all.", mode)
    })?;

    let conn = DbConnection::connect()?;

    let mut board = BoardState::new();
    let ticket = board.begin_fetch();
    let snapshot = OrderRepo::fetch_all(&conn)?;
    board.install_if_current(ticket, snapshot);

    let today = Local::now().date_naive();
    log::debug!("listing {:?} / {} as of {}", period, mode.as_str(), today);
    let view = board.view(&period, mode, today);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    if view.is_empty() {
        println!("No orders to show.");
        return Ok(());
    }

    let use_ansi = output::is_tty();
    let color_enabled = !no_color;
    print!(
        "{}",
        output::format_board(&view, color_enabled, use_ansi, output::get_terminal_width())
    );

    let total = OrderRepo::count_all(&conn)?;
    println!("\n{}", output::format_summary(&view, total));
    Ok(())
}

fn handle_path() -> Result<()> {
    println!("{}", DbConnection::resolve_path()?.display());
    Ok(())
}
