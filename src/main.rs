// algostep: step-through data-structure visualizer

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use algostep::ui::{App, AppConfig, Tab};

#[derive(Parser, Debug)]
#[command(
    name = "algostep",
    about = "Step through array scans, level-order trees, BST insertion and DFS"
)]
struct Cli {
    /// Array elements (comma separated)
    #[arg(long, default_value = "1,2,3,4,5")]
    array: String,
    /// Tree nodes in level order (comma separated)
    #[arg(long, default_value = "A,B,C,D,E,F,G")]
    tree: String,
    /// BST values, integers only (comma separated)
    #[arg(long, default_value = "7,3,10,1,5,8,12")]
    bst: String,
    /// Graph nodes (comma separated); traversal starts at the first one
    #[arg(long, default_value = "A,B,C,D,E")]
    nodes: String,
    /// Graph edges (A-B,B-C,...)
    #[arg(long, default_value = "A-B,B-C,C-D,D-E,A-E")]
    edges: String,
    /// Tab shown at startup
    #[arg(long, value_enum, default_value_t = Tab::Array)]
    tab: Tab,
    /// Milliseconds between steps in play mode
    #[arg(long, default_value_t = 1000)]
    play_interval_ms: u64,
    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        AppConfig {
            array_input: cli.array,
            tree_input: cli.tree,
            bst_input: cli.bst,
            dfs_nodes_input: cli.nodes,
            dfs_edges_input: cli.edges,
            initial_tab: cli.tab,
            play_interval: Duration::from_millis(cli.play_interval_ms.max(1)),
        }
    }
}

/// Route tracing output to `path`. The terminal itself is taken by the TUI, so
/// without a log file no subscriber is installed.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }
    info!(tab = ?cli.tab, "algostep starting");

    let mut app = App::new(AppConfig::from(cli));

    // Set up terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    info!("algostep exiting");
    Ok(())
}
