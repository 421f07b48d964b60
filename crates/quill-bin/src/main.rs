//! quill entrypoint.
//!
//! Startup order matters: logging and the panic hook come first, then config
//! and file loading, and only once those succeed is the terminal switched to
//! raw mode — a bad path argument should fail on a normal screen, not a blank
//! alternate one. The guard returned by the backend restores the terminal on
//! every exit path.
//!
//! The loop itself is synchronous and cooperative: one input event is fully
//! processed, then the whole screen is repainted, then the next event is
//! read. The blocking read is the only suspension point. A quit command
//! breaks out before any further repaint; nothing is persisted.

use anyhow::{Context, Result};
use clap::Parser;
use core_actions::{DispatchOptions, dispatch, translate_key};
use core_config::Config;
use core_events::InputEvent;
use core_input::{CrosstermInput, InputSource};
use core_render::Renderer;
use core_state::EditorState;
use core_terminal::{CrosstermBackend, TerminalBackend};
use core_text::Buffer;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{debug, info, trace};
use tracing_appender::non_blocking::WorkerGuard;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "quill", version, about = "quill editor")]
struct Args {
    /// Path to open at startup (UTF-8 text). If omitted an empty buffer is
    /// used.
    pub path: Option<PathBuf>,
    /// Configuration file path (overrides discovery of `quill.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = configure_logging();
    install_panic_hook();
    info!(target: "runtime", "startup");

    let config = core_config::load_from(args.config.clone())?;
    let state = load_editor_state(&args, &config)?;
    info!(
        target: "runtime.startup",
        path = args.path.as_ref().map(|p| p.display().to_string()).as_deref(),
        lines = state.buffer().line_count(),
        tab_width = config.tab_width(),
        undo_limit = config.undo_limit(),
        "bootstrap_complete"
    );

    let mut backend = CrosstermBackend::new();
    backend.set_title("quill")?;
    let guard = backend.enter_guard()?;

    let mut input = CrosstermInput::new();
    let mut renderer = Renderer::new();
    run_loop(state, &config, &mut input, &mut renderer)?;

    drop(guard);
    info!(target: "runtime.shutdown", "shutdown_complete");
    Ok(())
}

/// File logging: the terminal belongs to the editor, so logs go to
/// `quill.log` in the working directory, filtered by `RUST_LOG`.
fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join("quill.log");
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, "quill.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(writer)
        .try_init()
    {
        Ok(_) => Some(guard),
        // Global subscriber already installed (tests); drop the guard so the
        // writer shuts down.
        Err(_) => None,
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn load_editor_state(args: &Args, config: &Config) -> Result<EditorState> {
    let buffer = match args.path.as_ref() {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("opening {}", path.display()))?;
            debug!(
                target: "io",
                file = %path.display(),
                size_bytes = content.len(),
                "file_read_ok"
            );
            Buffer::from_content(&content)
        }
        None => Buffer::from_content(""),
    };
    let mut state = EditorState::with_history_limit(buffer, config.undo_limit());
    state.file_name = args.path.clone();
    Ok(state)
}

/// Read one event, translate, dispatch, repaint — until a quit command.
fn run_loop(
    mut state: EditorState,
    config: &Config,
    input: &mut impl InputSource,
    renderer: &mut Renderer,
) -> Result<()> {
    let opts = DispatchOptions {
        tab_width: config.tab_width(),
    };
    renderer.draw(state.buffer(), &state.cursor)?;
    loop {
        match input.next_event()? {
            InputEvent::Key(key) => {
                if let Some(action) = translate_key(&key) {
                    let result = dispatch(action, &mut state, &opts);
                    if result.quit {
                        info!(target: "runtime", "quit");
                        break;
                    }
                }
            }
            InputEvent::Resize(w, h) => {
                trace!(target: "runtime", width = w, height = h, "resize");
            }
        }
        renderer.draw(state.buffer(), &state.cursor)?;
    }
    Ok(())
}
